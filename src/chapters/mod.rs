use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KapitelError, Result};

/// Manifest filename looked up in the working directory when no explicit
/// path is given.
pub const MANIFEST_FILE: &str = "chapters.toml";

/// One numbered chapter and its display title, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSpec {
    pub number: u32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterManifest {
    pub chapters: Vec<ChapterSpec>,
}

/// The tutorial sequence this tool was written for. Used when no
/// `chapters.toml` is present.
const BUILTIN_CHAPTERS: &[(u32, &str)] = &[
    (2, "C#: Classes"),
    (3, "C#: Object-Oriented Programming"),
    (4, "C#: Operators"),
    (5, "Unity: Terms and Concepts"),
    (6, "Unity: Scripting Basics"),
    (7, "Unity: Windows, Views, and Tools"),
    (8, "Ink: Loading Ink-Unity Plugin"),
    (9, "Ink: Introducing Story API"),
    (10, "Unity UI: Introducing Canvas and Text"),
    (11, "Unity UI: Buttons and User Input"),
    (12, "Unity UI: User Events and Dynamic Story Loading"),
    (13, "Ink: Selective Output and Story Organization"),
    (14, "Unity: Organizing Project Files"),
    (15, "Unity UI: Integrating Line Breaks and Rich Text Support"),
    (16, "Ink + Unity: Accessing and Observing Ink Variables"),
    (17, "Ink + Unity: Calling Ink Functions"),
];

impl ChapterManifest {
    pub fn builtin() -> Self {
        Self {
            chapters: BUILTIN_CHAPTERS
                .iter()
                .map(|&(number, title)| ChapterSpec {
                    number,
                    title: title.to_string(),
                })
                .collect(),
        }
    }

    /// Load a manifest from a `chapters.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KapitelError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let manifest: ChapterManifest =
            toml::from_str(&contents).map_err(|e| KapitelError::ManifestInvalid {
                message: e.to_string(),
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for spec in &self.chapters {
            if spec.number == 0 {
                return Err(KapitelError::ManifestInvalid {
                    message: "chapter numbers must be positive".into(),
                });
            }
            if !seen.insert(spec.number) {
                return Err(KapitelError::ManifestInvalid {
                    message: format!("duplicate chapter number {}", spec.number),
                });
            }
            if spec.title.is_empty() {
                return Err(KapitelError::ManifestInvalid {
                    message: format!("chapter {} has an empty title", spec.number),
                });
            }
        }
        Ok(())
    }
}

/// Where the active manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Builtin,
    File(PathBuf),
}

/// Pick the manifest: an explicit `--chapters` path wins (and must exist),
/// then `chapters.toml` in the working directory, then the built-in list.
pub fn resolve_manifest(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<(ChapterManifest, ManifestSource)> {
    if let Some(path) = explicit {
        let manifest = ChapterManifest::load(path)?;
        return Ok((manifest, ManifestSource::File(path.to_path_buf())));
    }
    let default_path = root.join(MANIFEST_FILE);
    if default_path.exists() {
        let manifest = ChapterManifest::load(&default_path)?;
        return Ok((manifest, ManifestSource::File(default_path)));
    }
    Ok((ChapterManifest::builtin(), ManifestSource::Builtin))
}

/// Relative path of a chapter's markdown file: `chapter{N}/index.md`.
pub fn index_path(number: u32) -> PathBuf {
    PathBuf::from(format!("chapter{number}")).join("index.md")
}

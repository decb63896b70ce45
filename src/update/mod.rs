pub mod discovery;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::chapters::{self, ChapterSpec};
use crate::content::{self, FrontMatter};
use crate::error::Result;
use crate::output::CommandOutput;

/// What `update` would do for a single manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedAction {
    Update,
    Skip,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedChapter {
    pub number: u32,
    pub title: String,
    pub path: String,
    pub action: PlannedAction,
}

#[derive(Debug, Serialize)]
pub struct UpdatePlan {
    pub chapters: Vec<PlannedChapter>,
}

impl UpdatePlan {
    pub fn pending(&self) -> usize {
        self.chapters
            .iter()
            .filter(|c| c.action == PlannedAction::Update)
            .count()
    }
}

impl CommandOutput for UpdatePlan {
    fn human_display(&self) -> String {
        let lines: Vec<String> = self
            .chapters
            .iter()
            .map(|c| match c.action {
                PlannedAction::Update => {
                    format!("update  chapter {}: {} ({})", c.number, c.title, c.path)
                }
                PlannedAction::Skip => {
                    format!("skip    chapter {}: {} not found", c.number, c.path)
                }
            })
            .collect();
        lines.join("\n")
    }
}

/// Compute the plan without touching any file.
pub fn plan_chapters(root: &Path, specs: &[ChapterSpec]) -> UpdatePlan {
    let chapters = specs
        .iter()
        .map(|spec| {
            let rel = chapters::index_path(spec.number);
            let action = if root.join(&rel).exists() {
                PlannedAction::Update
            } else {
                PlannedAction::Skip
            };
            PlannedChapter {
                number: spec.number,
                title: spec.title.clone(),
                path: rel.display().to_string(),
                action,
            }
        })
        .collect();
    UpdatePlan { chapters }
}

/// Result of processing a single manifest entry.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterReport {
    pub number: u32,
    pub title: String,
    pub path: String,
    pub updated: bool,
}

/// Rewrite one chapter file in place. A missing file is a skip, not an
/// error; read and write failures propagate and abort the batch.
pub fn update_chapter(root: &Path, spec: &ChapterSpec) -> Result<ChapterReport> {
    let rel = chapters::index_path(spec.number);
    let path = root.join(&rel);
    let report = ChapterReport {
        number: spec.number,
        title: spec.title.clone(),
        path: rel.display().to_string(),
        updated: false,
    };

    if !path.exists() {
        return Ok(report);
    }

    let raw = fs::read_to_string(&path)?;
    let fm = FrontMatter::for_chapter(spec.number, &spec.title);
    fs::write(&path, content::convert(&raw, &fm))?;

    Ok(ChapterReport {
        updated: true,
        ..report
    })
}

#[derive(Debug, Serialize)]
pub struct UpdateSummary {
    pub updated: usize,
    pub missing: usize,
    pub chapters: Vec<ChapterReport>,
}

impl UpdateSummary {
    pub fn from_reports(chapters: Vec<ChapterReport>) -> Self {
        let updated = chapters.iter().filter(|c| c.updated).count();
        Self {
            updated,
            missing: chapters.len() - updated,
            chapters,
        }
    }
}

impl CommandOutput for UpdateSummary {
    fn human_display(&self) -> String {
        format!(
            "Processed {} chapter{}: {} updated, {} missing",
            self.chapters.len(),
            if self.chapters.len() == 1 { "" } else { "s" },
            self.updated,
            self.missing
        )
    }
}

/// Conversion state of a chapter file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterState {
    Missing,
    Pending,
    Converted,
}

impl ChapterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterState::Missing => "missing",
            ChapterState::Pending => "pending",
            ChapterState::Converted => "converted",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterStatus {
    pub number: u32,
    pub title: String,
    pub path: String,
    pub state: ChapterState,
    /// Title read back from existing front matter, when present and parseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_title: Option<String>,
}

/// Inspect one chapter file without modifying it.
pub fn chapter_status(root: &Path, spec: &ChapterSpec) -> Result<ChapterStatus> {
    let rel = chapters::index_path(spec.number);
    let path = root.join(&rel);
    let mut status = ChapterStatus {
        number: spec.number,
        title: spec.title.clone(),
        path: rel.display().to_string(),
        state: ChapterState::Missing,
        current_title: None,
    };

    if !path.exists() {
        return Ok(status);
    }

    let raw = fs::read_to_string(&path)?;
    if !content::has_front_matter(&raw) {
        status.state = ChapterState::Pending;
        return Ok(status);
    }

    status.state = ChapterState::Converted;
    match content::parse_front_matter(&path, &raw) {
        Ok(Some(existing)) => status.current_title = existing.title,
        Ok(None) => {}
        // Malformed front matter still counts as converted; we just can't
        // report its title.
        Err(e) => tracing::warn!("{e}"),
    }
    Ok(status)
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub chapters: Vec<ChapterStatus>,
    /// Chapter directories on disk that the manifest does not mention.
    pub unlisted: Vec<u32>,
}

impl CommandOutput for StatusReport {
    fn human_display(&self) -> String {
        let mut lines: Vec<String> = self
            .chapters
            .iter()
            .map(|c| {
                let mut line = format!("{:<24} {:<9} {}", c.path, c.state.as_str(), c.title);
                if let Some(ref current) = c.current_title {
                    line.push_str(&format!(" (current: \"{current}\")"));
                }
                line
            })
            .collect();
        if !self.unlisted.is_empty() {
            let numbers: Vec<String> = self.unlisted.iter().map(u32::to_string).collect();
            lines.push(format!(
                "Unlisted chapters on disk: {}",
                numbers.join(", ")
            ));
        }
        lines.join("\n")
    }
}

/// Build the full status report for a manifest, including chapters found
/// on disk that the manifest does not cover.
pub fn status_report(root: &Path, specs: &[ChapterSpec]) -> Result<StatusReport> {
    let mut chapters = Vec::with_capacity(specs.len());
    for spec in specs {
        chapters.push(chapter_status(root, spec)?);
    }
    let listed: Vec<u32> = specs.iter().map(|s| s.number).collect();
    let unlisted = discovery::unlisted_chapters(root, &listed);
    Ok(StatusReport { chapters, unlisted })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(number: u32, title: &str) -> ChapterSpec {
        ChapterSpec {
            number,
            title: title.into(),
        }
    }

    fn write_chapter(root: &Path, number: u32, content: &str) {
        let dir = root.join(format!("chapter{number}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.md"), content).unwrap();
    }

    #[test]
    fn test_update_chapter_rewrites_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_chapter(
            tmp.path(),
            2,
            "# My Title\n\n- [My Title](#my-title)\n  - [Sub](#sub)\n\nBody text here.\n",
        );

        let report = update_chapter(tmp.path(), &spec(2, "C#: Classes")).unwrap();
        assert!(report.updated);

        let written = fs::read_to_string(tmp.path().join("chapter2/index.md")).unwrap();
        assert_eq!(
            written,
            "---\ntitle: \"C#: Classes\"\norder: 2\nchapter_number: 2\nlayout: chapter\n---\n\nBody text here.\n"
        );
    }

    #[test]
    fn test_update_chapter_skips_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let report = update_chapter(tmp.path(), &spec(4, "C#: Operators")).unwrap();
        assert!(!report.updated);
        assert_eq!(report.path, chapters::index_path(4).display().to_string());
        assert!(!tmp.path().join("chapter4").exists());
    }

    #[test]
    fn test_plan_chapters_distinguishes_present_and_missing() {
        let tmp = tempfile::tempdir().unwrap();
        write_chapter(tmp.path(), 2, "Body\n");

        let plan = plan_chapters(tmp.path(), &[spec(2, "A"), spec(3, "B")]);
        assert_eq!(plan.pending(), 1);
        assert_eq!(plan.chapters[0].action, PlannedAction::Update);
        assert_eq!(plan.chapters[1].action, PlannedAction::Skip);
    }

    #[test]
    fn test_summary_counts() {
        let reports = vec![
            ChapterReport {
                number: 2,
                title: "A".into(),
                path: "chapter2/index.md".into(),
                updated: true,
            },
            ChapterReport {
                number: 3,
                title: "B".into(),
                path: "chapter3/index.md".into(),
                updated: false,
            },
        ];
        let summary = UpdateSummary::from_reports(reports);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.missing, 1);
        assert_eq!(
            summary.human_display(),
            "Processed 2 chapters: 1 updated, 1 missing"
        );
    }

    #[test]
    fn test_chapter_status_states() {
        let tmp = tempfile::tempdir().unwrap();
        write_chapter(tmp.path(), 2, "# Raw\n\nBody\n");
        write_chapter(
            tmp.path(),
            3,
            "---\ntitle: \"Converted one\"\norder: 3\nchapter_number: 3\nlayout: chapter\n---\n\nBody\n",
        );

        let pending = chapter_status(tmp.path(), &spec(2, "A")).unwrap();
        assert_eq!(pending.state, ChapterState::Pending);
        assert!(pending.current_title.is_none());

        let converted = chapter_status(tmp.path(), &spec(3, "Converted one")).unwrap();
        assert_eq!(converted.state, ChapterState::Converted);
        assert_eq!(converted.current_title.as_deref(), Some("Converted one"));

        let missing = chapter_status(tmp.path(), &spec(9, "C")).unwrap();
        assert_eq!(missing.state, ChapterState::Missing);
    }

    #[test]
    fn test_status_report_lists_unlisted_chapters() {
        let tmp = tempfile::tempdir().unwrap();
        write_chapter(tmp.path(), 2, "Body\n");
        write_chapter(tmp.path(), 99, "Body\n");

        let report = status_report(tmp.path(), &[spec(2, "A")]).unwrap();
        assert_eq!(report.unlisted, vec![99]);
        assert!(report.human_display().contains("Unlisted chapters on disk: 99"));
    }
}

use std::path::Path;

use serde::Deserialize;

use crate::error::{KapitelError, Result};

/// Front matter emitted at the top of every converted chapter file.
///
/// The downstream site generator's schema (`title`, `order`,
/// `chapter_number`, `layout`) is a byte-level contract, field order and
/// quoting included, so rendering is done by hand rather than through a
/// YAML serializer.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub order: u32,
    pub chapter_number: u32,
    pub layout: String,
}

impl FrontMatter {
    pub fn for_chapter(number: u32, title: &str) -> Self {
        Self {
            title: title.to_string(),
            order: number,
            chapter_number: number,
            layout: "chapter".into(),
        }
    }

    /// Render the delimited block, including the blank line that separates
    /// it from the body. The title is interpolated verbatim inside double
    /// quotes, never re-escaped.
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: \"{}\"\norder: {}\nchapter_number: {}\nlayout: {}\n---\n\n",
            self.title, self.order, self.chapter_number, self.layout
        )
    }
}

/// Fields read back from an already-converted chapter, for status reporting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExistingFrontMatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub chapter_number: Option<u32>,
    #[serde(default)]
    pub layout: Option<String>,
}

/// Convert a raw chapter document: strip the leading title heading, the
/// table-of-contents block, and any `---` rule lines, then prepend fresh
/// front matter.
///
/// Not idempotent: a second pass finds no heading to strip, shreds the
/// first run's `---` delimiters, and prepends another block on top. This
/// is a one-shot migration, not a sync.
pub fn convert(content: &str, fm: &FrontMatter) -> String {
    let body = strip_title_heading(content);
    let body = strip_toc_block(&body);
    let body = strip_rule_lines(&body);
    format!("{}{}\n", fm.render(), body.trim())
}

/// Remove the first `# ` heading line that is immediately followed by an
/// empty line. Both lines are dropped. A heading with body text directly
/// underneath (no blank separator) is left alone.
pub fn strip_title_heading(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    for i in 0..lines.len() {
        // i + 2 < len guarantees the blank line is a real line with its
        // own terminator, not the empty fragment after a final newline.
        if lines[i].starts_with("# ") && i + 2 < lines.len() && lines[i + 1].is_empty() {
            let mut out = Vec::with_capacity(lines.len() - 2);
            out.extend_from_slice(&lines[..i]);
            out.extend_from_slice(&lines[i + 2..]);
            return out.join("\n");
        }
    }
    content.to_string()
}

/// Remove the first table-of-contents block: a top-level `- [...](#...)`
/// line plus any immediately following two-space-indented entries of the
/// same shape, as one contiguous run. Matched wherever it first occurs,
/// not only at the start of the document.
pub fn strip_toc_block(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    for i in 0..lines.len() {
        // An entry must be a complete line; the final fragment of a file
        // without a trailing newline does not count.
        if i + 1 >= lines.len() || !is_toc_entry(lines[i], "") {
            continue;
        }
        let mut end = i + 1;
        while end + 1 < lines.len() && is_toc_entry(lines[end], "  ") {
            end += 1;
        }
        let mut out = Vec::with_capacity(lines.len() - (end - i));
        out.extend_from_slice(&lines[..i]);
        out.extend_from_slice(&lines[end..]);
        return out.join("\n");
    }
    content.to_string()
}

fn is_toc_entry(line: &str, indent: &str) -> bool {
    let Some(rest) = line.strip_prefix(indent) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix("- [") else {
        return false;
    };
    rest.contains("](#") && rest.ends_with(')')
}

/// Remove every line consisting solely of `---`, wherever it appears.
/// A bare `---` at end-of-file without a trailing newline stays put.
pub fn strip_rule_lines(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let last = lines.len() - 1;
    let kept: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|&(i, line)| *line != "---" || i == last)
        .map(|(_, line)| *line)
        .collect();
    kept.join("\n")
}

/// Returns true if the document already begins with a delimited
/// front-matter block.
pub fn has_front_matter(raw: &str) -> bool {
    split_front_matter(raw).is_some()
}

/// Split a document into its front-matter string and body, if the
/// document opens with `---` delimiters.
pub fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let trimmed = raw.trim_start();
    if !trimmed.starts_with("---") {
        return None;
    }
    let after_first = &trimmed[3..];
    let end = after_first.find("---")?;
    let fm = &after_first[..end];
    let body = &after_first[end + 3..];
    Some((
        fm.trim(),
        body.trim_start_matches('\n').trim_start_matches('\r'),
    ))
}

/// Parse the front matter of an already-converted chapter. Returns
/// `Ok(None)` when the document has no front-matter block at all.
pub fn parse_front_matter(path: &Path, raw: &str) -> Result<Option<ExistingFrontMatter>> {
    let Some((fm_str, _body)) = split_front_matter(raw) else {
        return Ok(None);
    };
    let fm = serde_yaml_ng::from_str(fm_str).map_err(|e| KapitelError::Frontmatter {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(fm))
}

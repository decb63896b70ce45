//! Finds chapter directories on disk, so `status` can flag ones the
//! manifest does not mention.

use std::path::Path;

use walkdir::WalkDir;

/// Chapter numbers for every `chapter{N}/index.md` directly under `root`,
/// sorted ascending.
pub fn scan_chapter_numbers(root: &Path) -> Vec<u32> {
    let mut numbers: Vec<u32> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| {
            let name = e.file_name().to_str()?;
            let number: u32 = name.strip_prefix("chapter")?.parse().ok()?;
            e.path().join("index.md").is_file().then_some(number)
        })
        .collect();
    numbers.sort_unstable();
    numbers
}

/// Numbers present on disk but absent from the manifest.
pub fn unlisted_chapters(root: &Path, listed: &[u32]) -> Vec<u32> {
    scan_chapter_numbers(root)
        .into_iter()
        .filter(|n| !listed.contains(n))
        .collect()
}

use std::path::Path;

use crate::chapters;
use crate::output::{self, OutputFormat};
use crate::update;

pub fn run(json: bool, manifest_path: Option<&str>) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let (manifest, _source) = chapters::resolve_manifest(&root, manifest_path.map(Path::new))?;

    let report = update::status_report(&root, &manifest.chapters)?;
    output::print_output(&report, OutputFormat::from_flag(json));

    Ok(())
}

use std::path::Path;

use clap::Args;

use crate::chapters::{self, ManifestSource};
use crate::output::{self, human, CommandOutput, OutputFormat};
use crate::update;

#[derive(Args)]
pub struct UpdateArgs {
    /// Show what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Apply without confirmation
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(args: &UpdateArgs, json: bool, manifest_path: Option<&str>) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let (manifest, source) = chapters::resolve_manifest(&root, manifest_path.map(Path::new))?;
    let format = OutputFormat::from_flag(json);

    let plan = update::plan_chapters(&root, &manifest.chapters);

    if args.dry_run {
        output::print_output(&plan, format);
        if !json {
            human::info("Dry run, no files were modified.");
        }
        return Ok(());
    }

    // Confirm before rewriting, unless --yes or machine output. JSON mode
    // is non-interactive by definition.
    let pending = plan.pending();
    if !args.yes && !json && pending > 0 {
        if let ManifestSource::File(ref path) = source {
            human::info(&format!("Using chapter manifest {}", path.display()));
        }
        println!("{}", plan.human_display());
        println!();
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Rewrite {pending} chapter file{}?",
                if pending == 1 { "" } else { "s" }
            ))
            .default(true)
            .interact()?;
        if !proceed {
            human::info("Update cancelled.");
            return Ok(());
        }
    }

    let mut reports = Vec::with_capacity(manifest.chapters.len());
    for spec in &manifest.chapters {
        let report = update::update_chapter(&root, spec)?;
        if !json {
            if report.updated {
                human::success(&format!(
                    "Updated chapter {}: {}",
                    report.number, report.title
                ));
            } else {
                human::warning(&format!(
                    "Chapter {} not found: {}",
                    report.number, report.path
                ));
            }
        }
        reports.push(report);
    }

    let summary = update::UpdateSummary::from_reports(reports);
    if json {
        output::print_output(&summary, format);
    } else {
        human::success(&summary.human_display());
    }

    Ok(())
}

//! Implementation of the `scaffold` command.
//!
//! Responsibility: resolve arguments against the configuration, load the
//! tree, call the core scaffolder, and display results. No business logic
//! lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use scaffold_adapters::{DescriptorLoader, LocalFilesystem};
use scaffold_core::prelude::{OverwritePolicy, Scaffolder, TreeNode};

use crate::{
    cli::ScaffoldArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, RunSummary},
};

/// Execute the `scaffold` command.
///
/// Dispatch sequence:
/// 1. Resolve base path and overwrite policy (flags, then config)
/// 2. Load and validate the tree (descriptor file or preset)
/// 3. Dry run: print the plan and stop
/// 4. Materialize and print one line per created entry
#[instrument(skip_all)]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve
    let base = resolve_base(&args, &config);
    let policy = resolve_policy(&args, &config);
    debug!(
        base = %base.display(),
        ?policy,
        dry_run = args.dry_run,
        format = ?output.format(),
        "Arguments resolved"
    );

    // 2. Load
    let tree = load_tree(&args)?;
    let stats = tree.stats();
    info!(%stats, "Tree loaded");

    let scaffolder = Scaffolder::new(Box::new(LocalFilesystem::new())).with_policy(policy);

    // 3. Dry run
    if args.dry_run {
        let plan = scaffolder.plan(&base, &tree)?;
        if output.is_json() {
            output.summary_json(&RunSummary::planned(&base, policy, &plan))?;
        } else {
            for entry in &plan {
                output.planned(entry)?;
            }
            let mut done = format!(
                "Dry run: {} of {} entries would be written under {}",
                plan.len(),
                stats.total(),
                base.display()
            );
            if !plan.skipped().is_empty() {
                done.push_str(&format!(" ({} already present)", plan.skipped().len()));
            }
            output.info(&done)?;
        }
        return Ok(());
    }

    // 4. Materialize
    match scaffolder.materialize(&base, &tree) {
        Ok(report) => {
            if output.is_json() {
                output.summary_json(&RunSummary::completed(&base, policy, &report))?;
            } else {
                for entry in &report {
                    output.created(entry)?;
                }
                let mut done = format!("Created {} entries under {}", report.len(), base.display());
                if !report.skipped().is_empty() {
                    done.push_str(&format!(" ({} already present)", report.skipped().len()));
                }
                output.success(&done)?;
            }
            Ok(())
        }
        Err(aborted) => {
            // Entries created before the failure are still reported.
            if output.is_json() {
                output.summary_json(&RunSummary::aborted(
                    &base,
                    policy,
                    &aborted.partial,
                    aborted.error.to_string(),
                ))?;
            } else {
                for entry in &aborted.partial {
                    output.created(entry)?;
                }
            }
            Err(CliError::from(aborted))
        }
    }
}

fn load_tree(args: &ScaffoldArgs) -> CliResult<TreeNode> {
    if let Some(preset) = args.preset {
        return Ok(preset.load()?);
    }

    let path = args.descriptor.as_ref().ok_or_else(|| CliError::InvalidInput {
        message: "a descriptor file or --preset is required".into(),
    })?;
    let mut loader = DescriptorLoader::new(path);
    if let Some(format) = args.descriptor_format {
        loader = loader.with_format(format.into());
    }
    Ok(loader.load()?)
}

fn resolve_base(args: &ScaffoldArgs, config: &AppConfig) -> PathBuf {
    args.base
        .clone()
        .unwrap_or_else(|| config.defaults.base.clone())
}

/// `--keep-existing` beats everything, `--force` beats the config file.
fn resolve_policy(args: &ScaffoldArgs, config: &AppConfig) -> OverwritePolicy {
    if args.keep_existing {
        OverwritePolicy::Preserve
    } else if args.force || config.files.overwrite {
        OverwritePolicy::Overwrite
    } else {
        OverwritePolicy::Preserve
    }
}

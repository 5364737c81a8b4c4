//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler, decides
//! every path in parallel and applies the decisions one by one.

use anyhow::{bail, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

use tag_rename::cli::Args;
use tag_rename::config::{load_or_init, LoadResult, CONFIG_ENV};
use tag_rename::output as out;
use tag_rename::{apply, decide_path, default_config_path, shutdown, Config, RenameDecision, TagRenameError};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    // Load config or write a template on first run (before logging init)
    let mut cfg = match load_or_init()? {
        LoadResult::Loaded(cfg) => cfg,
        LoadResult::Defaults => Config::default(),
        LoadResult::CreatedTemplate(path) => {
            out::print_success(&format!("A template tag_rename config was written to: {}", path.display()));
            out::print_info("Edit it to choose separators, included fields and an optional distribution_root, then re-run this command.");
            out::print_info(&format!("To use a different location set {CONFIG_ENV}."));
            return Ok(());
        }
    };

    // CLI wins over config file values
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // Guard is dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        let installed = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing the current item and stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        });
        if let Err(e) = installed {
            warn!(error = %e, "Could not install interrupt handler");
        }
    }

    debug!("Starting tag_rename: {:?}", args);

    let result = cfg.validate().and_then(|()| process_all(&cfg, args.resolved_paths()));
    if let Err(e) = &result {
        log_failure(e, "Run failed");
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config_location() {
    if let Some(cfg_env) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", PathBuf::from(cfg_env).display()));
        out::print_info(&format!("To override, unset {CONFIG_ENV} or set it to another file."));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default tag_rename config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run without --print-config to create a template.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

/// Decide in parallel (pure apart from reading tags), apply sequentially in argument order.
fn process_all(cfg: &Config, paths: Vec<PathBuf>) -> Result<()> {
    let decisions: Vec<(PathBuf, Result<RenameDecision>)> = paths
        .into_par_iter()
        .map(|p| {
            let d = decide_path(&p, &cfg.rules);
            (p, d)
        })
        .collect();

    let total = decisions.len();
    let mut failed = 0usize;
    for (path, decision) in decisions {
        if shutdown::is_requested() {
            warn!("Interrupted; remaining items were not processed");
            return Err(TagRenameError::Interrupted.into());
        }

        let outcome = decision.and_then(|d| {
            debug!(path = %path.display(), decision = ?d, "Decided");
            apply(&path, &d, cfg.dry_run)
        });
        match outcome {
            Ok(Some(dest)) => {
                if cfg.dry_run {
                    out::print_info(&format!("Dry-run: would move '{}' -> '{}'", path.display(), dest.display()));
                } else {
                    out::print_moved(&path, &dest);
                }
                info!(source = %path.display(), dest = %dest.display(), "Done");
            }
            Ok(None) => {
                out::print_skipped(&path);
                debug!(path = %path.display(), "Skipped");
            }
            Err(e) => {
                failed += 1;
                log_failure(&e, "Item failed");
                out::print_error(&format!("{}: {:#}", path.display(), e));
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {total} items failed");
    }
    Ok(())
}

fn log_failure(e: &anyhow::Error, what: &str) {
    if let Some(te) = e.downcast_ref::<TagRenameError>() {
        let code = te.code();
        let kind = te.kind();
        match te {
            TagRenameError::SourceNotFound(path) | TagRenameError::DestinationExists(path) => {
                error!(code, kind, path = %path.display(), "{what}")
            }
            TagRenameError::PermissionDenied { path, context } => {
                error!(code, kind, path = %path.display(), %context, "{what}")
            }
            TagRenameError::InvalidConfig { field, reason } => {
                error!(code, kind, field, %reason, "{what}")
            }
            _ => error!(code, kind, error = %te, "{what}"),
        }
    } else {
        error!(error = ?e, "{what}");
    }
}

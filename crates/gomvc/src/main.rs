//! gomvc - Go MVC project scaffolding
//!
//! Create or remove a Gin service skeleton.
//!
//! Flags:
//! - --create <PATH>: run `go mod init` and lay down the skeleton
//! - --delete <PATH>: remove the skeleton and go.mod
//! - --status <PATH>: show which skeleton entries exist

use anyhow::{Context, Result};
use clap::{ArgGroup, CommandFactory, Parser};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use gomvc::module::read_module_id;
use gomvc::provision::Step;
use gomvc::status;
use gomvc::{
    CommandInitializer, Decommissioner, ModuleId, ModuleInitializer, Provisioner, SkipInitializer,
};
use gomvc_core::{Config, Paths};

#[derive(Parser)]
#[command(name = "gomvc")]
#[command(about = "Go MVC project scaffolding - create and tear down a Gin service skeleton")]
#[command(version)]
#[command(group(ArgGroup::new("action").args(["create", "delete", "status"])))]
#[command(after_help = r#"LAYOUT:
    cmd/api/main.go                 Entry point, imports <module>/router
    controller/home_controller.go   Sample controller
    models/user.go                  Sample model
    pkg/utility.go                  Utility package
    router/router.go                Routes, imports <module>/controller and /middleware
    middleware/request_logger.go    Request logging middleware
    config/ views/                  Created empty

CONFIGURATION:
    ~/.config/gomvc/config.json (or $GOMVC_CONFIG)
    { "init_command": ["go", "mod", "init"], "manifest": "go.mod" }

EXAMPLES:
    gomvc --create ./shop                                  # Prompt for module
    gomvc --create ./shop --module github.com/acme/shop    # No prompt
    gomvc --status ./shop
    gomvc --delete ./shop                                  # No confirmation!
"#)]
struct Cli {
    /// Create the MVC structure at the specified path
    #[arg(long, value_name = "PATH")]
    create: Option<PathBuf>,

    /// Delete the MVC structure at the specified path
    #[arg(long, value_name = "PATH")]
    delete: Option<PathBuf>,

    /// Show which parts of the MVC structure exist at the specified path
    #[arg(long, value_name = "PATH")]
    status: Option<PathBuf>,

    /// Go module identifier (prompted for when omitted)
    #[arg(long, value_name = "ID", requires = "create", conflicts_with_all = ["delete", "status"])]
    module: Option<String>,

    /// Don't run the module init command
    #[arg(long, requires = "create", conflicts_with_all = ["delete", "status"])]
    no_init: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config::load(&Paths::new())?;

    if let Some(root) = cli.create {
        cmd_create(&config, &root, cli.module.as_deref(), !cli.no_init, cli.json)
    } else if let Some(root) = cli.delete {
        cmd_delete(&config, &root, cli.json)
    } else if let Some(root) = cli.status {
        cmd_status(&config, &root, cli.json)
    } else {
        Cli::command().print_help()?;
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gomvc=debug,gomvc_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Create the skeleton
fn cmd_create(
    config: &Config,
    root: &Path,
    module: Option<&str>,
    run_init: bool,
    json: bool,
) -> Result<()> {
    let module = match module {
        Some(raw) => ModuleId::parse(raw)?,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            // Keep stdout clean for JSON consumers
            if json {
                read_module_id(&mut input, &mut io::stderr())?
            } else {
                read_module_id(&mut input, &mut io::stdout())?
            }
        }
    };

    let initializer: Box<dyn ModuleInitializer> = if run_init {
        Box::new(CommandInitializer::from_config(config))
    } else {
        Box::new(SkipInitializer)
    };

    if !json {
        println!("info: Creating MVC structure at {}", root.display());
    }

    let report = Provisioner::new(initializer)
        .provision_with(root, &module, |step| {
            if run_init && !json && matches!(step, Step::InitModule) {
                println!("info: Initialized Go module: {}", module);
            }
        })
        .with_context(|| format!("Error setting up MVC structure at {}", root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for file in &report.skipped {
        println!("  \x1b[2mexists  {}\x1b[0m", file);
    }
    for file in &report.written {
        println!("  \x1b[32mcreated {}\x1b[0m", file);
    }
    println!("success: MVC structure created successfully!");
    println!();
    println!("Next steps:");
    println!("  cd {}", root.display());
    println!("  go mod tidy");
    println!("  go run ./cmd/api");

    Ok(())
}

/// Remove the skeleton
fn cmd_delete(config: &Config, root: &Path, json: bool) -> Result<()> {
    if !json {
        println!("info: Deleting MVC structure at {}", root.display());
    }

    let report = Decommissioner::new(config.manifest.as_str())
        .decommission(root)
        .with_context(|| format!("Error deleting MVC structure at {}", root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &report.removed {
        println!("  \x1b[31mremoved {}\x1b[0m", entry);
    }
    if report.manifest_removed {
        println!("info: Deleted {} file.", config.manifest);
    }
    println!("success: MVC structure deleted successfully!");

    Ok(())
}

/// Show which skeleton entries exist
fn cmd_status(config: &Config, root: &Path, json: bool) -> Result<()> {
    let status = status::inspect(root, &config.manifest);

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("\x1b[1mMVC structure: {}\x1b[0m", root.display());
    println!();

    println!("\x1b[36mDirectories:\x1b[0m");
    for entry in &status.directories {
        print_entry(entry);
    }
    println!();

    println!("\x1b[36mFiles:\x1b[0m");
    for entry in &status.files {
        print_entry(entry);
    }
    print_entry(&status.manifest);
    println!();

    if status.is_complete() {
        println!("\x1b[32mcomplete\x1b[0m");
    } else if status.is_empty() {
        println!("\x1b[2mnot created\x1b[0m");
    } else {
        println!("\x1b[33mpartial\x1b[0m - run --create again to finish");
    }

    Ok(())
}

fn print_entry(entry: &status::Entry) {
    if entry.present {
        println!("  \x1b[32m+\x1b[0m {}", entry.path);
    } else {
        println!("  \x1b[2m- {}\x1b[0m", entry.path);
    }
}

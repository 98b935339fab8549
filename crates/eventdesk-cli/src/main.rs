use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use dialoguer::Select;
use dotenvy::dotenv;
use eventdesk_access::{Evaluator, PermissionCatalog, default_roles};
use eventdesk_cli::{
    load_registry, read_profile, render_manifest, render_registry, render_roles,
    validate_registry,
};
use eventdesk_models::{AccessTarget, AccessTargetKind};

#[derive(Parser)]
#[command(name = "eventdesk-cli")]
#[command(about = "EventDesk CLI - Inspect the permission registry and check user access", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the permission registry
    Registry {
        #[command(subcommand)]
        command: RegistryCommand,
    },
    /// Check a single permission, section or position for a user profile
    Check {
        /// Path to a user profile JSON file
        #[arg(short = 'u', long)]
        profile: PathBuf,

        /// Registry file (defaults to PERMISSIONS_REGISTRY_PATH, then the built-in registry)
        #[arg(short = 'r', long)]
        registry: Option<PathBuf>,

        #[command(flatten)]
        target: TargetArgs,
    },
    /// Print which positions and sections a user profile can see
    Manifest {
        /// Path to a user profile JSON file
        #[arg(short = 'u', long)]
        profile: PathBuf,

        /// Registry file (defaults to PERMISSIONS_REGISTRY_PATH, then the built-in registry)
        #[arg(short = 'r', long)]
        registry: Option<PathBuf>,

        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// List the default system roles
    Roles,
}

#[derive(Subcommand)]
enum RegistryCommand {
    /// Print the registry
    Show {
        /// Registry file (defaults to PERMISSIONS_REGISTRY_PATH, then the built-in registry)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a registry and report codenames missing from the catalog
    Validate {
        /// Registry file (defaults to PERMISSIONS_REGISTRY_PATH, then the built-in registry)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct TargetArgs {
    /// Permission codename, e.g. events.create
    #[arg(long)]
    permission: Option<String>,

    /// Section name, e.g. eventi
    #[arg(long)]
    section: Option<String>,

    /// Position name, e.g. dashboard
    #[arg(long)]
    position: Option<String>,
}

impl TargetArgs {
    fn into_target(self) -> Option<AccessTarget> {
        let (kind, name) = if let Some(name) = self.permission {
            (AccessTargetKind::Permission, name)
        } else if let Some(name) = self.section {
            (AccessTargetKind::Section, name)
        } else if let Some(name) = self.position {
            (AccessTargetKind::Position, name)
        } else {
            return None;
        };
        Some(AccessTarget { kind, name })
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    eventdesk_observability::init_tracing();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` means the command ran but the answer was negative.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Registry {
            command: RegistryCommand::Show { file, json },
        } => {
            let registry = load_registry(file.as_deref())?;
            if json {
                println!("{}", registry.to_json_pretty()?);
            } else {
                print!("{}", render_registry(&registry));
            }
            Ok(true)
        }
        Commands::Registry {
            command: RegistryCommand::Validate { file },
        } => {
            let registry = load_registry(file.as_deref())?;
            let report = validate_registry(&registry, &PermissionCatalog::builtin());

            println!(
                "✅ Registry is valid: {} position(s), {} section(s)",
                report.positions, report.sections
            );
            println!("   Fingerprint: {}", report.fingerprint);

            if !report.is_clean() {
                println!("⚠️  Codenames not in the permission catalog:");
                for codename in &report.undeclared {
                    println!("   - {codename}");
                }
            }
            Ok(report.is_clean())
        }
        Commands::Check {
            profile,
            registry,
            target,
        } => {
            let registry = load_registry(registry.as_deref())?;
            let user = read_profile(&profile)?;

            let target = match target.into_target() {
                Some(target) => target,
                None => prompt_section(&registry)?,
            };

            let allowed = Evaluator::new(&registry).check(user.as_ref(), &target);
            tracing::debug!(kind = ?target.kind, name = %target.name, allowed, "Access checked");

            if allowed {
                println!("✅ allowed: {}", target.name);
            } else {
                println!("🚫 denied: {}", target.name);
            }
            Ok(allowed)
        }
        Commands::Manifest {
            profile,
            registry,
            json,
        } => {
            let registry = load_registry(registry.as_deref())?;
            let user = read_profile(&profile)?;
            let manifest = Evaluator::new(&registry).manifest(user.as_ref());

            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                print!("{}", render_manifest(&manifest));
            }
            Ok(true)
        }
        Commands::Roles => {
            print!("{}", render_roles(&default_roles(&PermissionCatalog::builtin())));
            Ok(true)
        }
    }
}

fn prompt_section(registry: &eventdesk_access::PermissionRegistry) -> Result<AccessTarget> {
    let sections: Vec<&str> = registry.sections().map(|s| s.name.as_str()).collect();
    if sections.is_empty() {
        bail!("The registry declares no sections; pass --permission, --section or --position");
    }

    let selection = Select::new()
        .with_prompt("Section to check")
        .items(&sections)
        .default(0)
        .interact()
        .context("Failed to read section selection")?;

    Ok(AccessTarget {
        kind: AccessTargetKind::Section,
        name: sections[selection].to_string(),
    })
}

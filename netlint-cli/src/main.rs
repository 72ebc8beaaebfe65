use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use netlint_spec::loader;
use netlint_spec::query::ConfigLookup;

#[derive(Parser)]
#[command(name = "netlint", about = "netlint – network configuration cross-reference validator")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate cross-references in a configuration directory
    Validate {
        /// Configuration directory (defaults to current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Print findings as a JSON array instead of human-readable output
        #[arg(long)]
        json: bool,
    },
    /// Load a configuration directory and show summary info
    Check {
        /// Configuration directory (defaults to current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate { dir, json } => cmd_validate(&dir, json),
        Command::Check { dir } => cmd_check(&dir),
    };

    match result {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn cmd_validate(dir: &Path, json: bool) -> Result<bool> {
    let config = loader::load_config(dir)
        .with_context(|| format!("Failed to load configuration at '{}'", dir.display()))?;

    let lookup = ConfigLookup::new(&config.network, &config.accounts);
    let mut errors = Vec::new();
    netlint_valid::validator::validate(&config.network, &config.dir, &lookup, &mut errors)
        .context("Failed to load customizations config")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
        return Ok(errors.is_empty());
    }

    println!(
        "{} {}",
        "Validating".bold(),
        dir.canonicalize()
            .unwrap_or_else(|_| dir.to_path_buf())
            .display()
    );

    for error in &errors {
        println!("  {} {}", "error:".red().bold(), error);
    }

    println!();
    if errors.is_empty() {
        let gwlbs = config.network.gateway_load_balancers();
        println!(
            "{} Configuration is valid ({} load balancers, {} endpoints)",
            "✓".green().bold(),
            gwlbs.len(),
            gwlbs.iter().map(|gwlb| gwlb.endpoints.len()).sum::<usize>(),
        );
        Ok(true)
    } else {
        println!("{} {} error(s)", "✗".red().bold(), errors.len());
        Ok(false)
    }
}

fn cmd_check(dir: &Path) -> Result<bool> {
    let config = loader::load_config(dir)
        .with_context(|| format!("Failed to load configuration at '{}'", dir.display()))?;

    let gwlbs = config.network.gateway_load_balancers();
    let endpoints: usize = gwlbs.iter().map(|gwlb| gwlb.endpoints.len()).sum();
    let vpcs = config.network.vpcs.len() + config.network.vpc_templates.len();
    let accounts = config.accounts.all_accounts().count();

    println!("{} {}", "Configuration".bold(), dir.display());
    println!("  {} {} gateway load balancer(s)", "→".dimmed(), gwlbs.len());
    println!("  {} {} endpoint(s)", "→".dimmed(), endpoints);
    println!("  {} {} VPC(s)", "→".dimmed(), vpcs);
    println!("  {} {} account(s)", "→".dimmed(), accounts);

    Ok(true)
}

use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use dotup_core::{Config, GroupList, InstallReport, Manifest, install};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// dotup - Declarative environment provisioning from a YAML manifest
#[derive(Parser)]
#[command(name = "dotup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML manifest
    manifest: PathBuf,

    /// Group to include in setup; repeat the flag for multiple groups.
    /// The 'default' group is always included.
    #[arg(short, long = "group", value_name = "NAME")]
    group: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings (e.g. a dependency with no groups) must be visible by
    // default, so the fallback filter is info rather than error
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let term = Term::stderr();

    if !cli.manifest.exists() {
        term.write_line(&format!(
            "{} Manifest not found: {}",
            style("error:").red().bold(),
            cli.manifest.display()
        ))?;
        std::process::exit(1);
    }

    term.write_line(&format!(
        "{} Reading {}",
        style("::").cyan().bold(),
        cli.manifest.display()
    ))?;

    let manifest = match Manifest::load(&cli.manifest) {
        Ok(manifest) => manifest,
        Err(err) => {
            term.write_line(&format!(
                "{} Failed to read manifest: {}",
                style("error:").red().bold(),
                err
            ))?;
            std::process::exit(1);
        }
    };

    debug!(dependencies = manifest.dependencies.len(), "manifest decoded");

    let has_repositories = manifest.has_repositories();
    let config = match Config::resolve(manifest.config.clone(), has_repositories) {
        Ok(config) => config,
        Err(err) => {
            term.write_line(&format!("{} {}", style("error:").red().bold(), err))?;
            std::process::exit(1);
        }
    };

    let requested = GroupList::requested(cli.group.iter().cloned());

    let report = match install(&manifest.dependencies, &config, &requested) {
        Ok(report) => report,
        Err(err) => {
            term.write_line(&format!("{} {}", style("error:").red().bold(), err))?;
            std::process::exit(1);
        }
    };

    print_report(&term, &report)?;

    Ok(())
}

fn print_report(term: &Term, report: &InstallReport) -> Result<()> {
    for name in &report.installed {
        term.write_line(&format!("  {} {}", style("+").green().bold(), name))?;
    }
    for name in &report.already_present {
        term.write_line(&format!(
            "  {} {} {}",
            style(" ").dim(),
            name,
            style("(already installed)").dim()
        ))?;
    }

    term.write_line(&format!(
        "{} Done: {} installed, {} already present, {} filtered out",
        style("::").green().bold(),
        report.installed.len(),
        report.already_present.len(),
        report.filtered_out.len()
    ))?;

    Ok(())
}

//! # pantheon-session-gen (psg)
//!
//! **psg** generates Pantheon desktop-session configuration artifacts
//! from upstream desktop-entry files.
//!
//! Flows:
//! - `psg autostart` rewrites xdg autostart entries for the Pantheon session
//! - `psg applications` produces a distribution-specific `defaults.list`
//! - `psg gnome-session` produces the Pantheon session descriptor
//! - `psg xsession` produces the Pantheon X session entry
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use psg::{cmd_applications, cmd_autostart, cmd_session, cmd_xsession, defaults};

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "psg",
    version,
    about = "pantheon-session-gen (psg) - generate Pantheon session configuration artifacts",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

/// Available subcommands.
///
/// Each variant corresponds to one generation flow.
#[derive(Subcommand, Debug)]
enum Cmd {
    /// Rewrite xdg autostart entries for the Pantheon session
    Autostart {
        /// xdg autostart directory containing the original files
        #[arg(short, long, default_value = defaults::AUTOSTART_ORIGIN)]
        origin: PathBuf,
        /// Suffix appended to the original desktop entry ID
        #[arg(short, long, default_value = defaults::AUTOSTART_SUFFIX)]
        suffix: String,
        /// Output directory for the generated files
        #[arg(short, long, default_value = "autostart")]
        destination: PathBuf,
        /// Overwrite already existing output files
        #[arg(short, long)]
        force: bool,
        /// Override the built-in component list (accepts multiple .desktop IDs)
        #[arg(value_name = "COMPONENT")]
        components: Vec<String>,
    },
    /// Generate a distribution-specific defaults.list
    Applications {
        /// git URL of the upstream repository
        #[arg(short, long, default_value = defaults::REPO_URL)]
        upstream: String,
        /// Local path of the upstream clone
        #[arg(short, long, default_value = defaults::REPO_PATH)]
        repo: PathBuf,
        /// Output directory for the generated files
        #[arg(short, long, default_value = "applications")]
        destination: PathBuf,
        /// Linux distribution to generate a defaults.list for
        #[arg(long)]
        distribution: String,
        /// Distribution mapping table (JSON)
        #[arg(long, default_value = defaults::MAPPINGS_FILE)]
        mappings: PathBuf,
        /// Overwrite already existing output files
        #[arg(short, long)]
        force: bool,
    },
    /// Generate the Pantheon gnome-session descriptor
    GnomeSession {
        /// git URL of the upstream repository
        #[arg(short, long, default_value = defaults::REPO_URL)]
        upstream: String,
        /// Local path of the upstream clone
        #[arg(short, long, default_value = defaults::REPO_PATH)]
        repo: PathBuf,
        /// Output directory for the generated files
        #[arg(short, long, default_value = "gnome-session")]
        destination: PathBuf,
        /// Overwrite already existing output files
        #[arg(short, long)]
        force: bool,
        /// Override the built-in component list
        #[arg(value_name = "COMPONENT")]
        components: Vec<String>,
    },
    /// Generate the Pantheon X session entry
    Xsession {
        /// git URL of the upstream repository
        #[arg(short, long, default_value = defaults::REPO_URL)]
        upstream: String,
        /// Local path of the upstream clone
        #[arg(short, long, default_value = defaults::REPO_PATH)]
        repo: PathBuf,
        /// Output directory for the generated files
        #[arg(short, long, default_value = "xsessions")]
        destination: PathBuf,
        /// Overwrite already existing output files
        #[arg(short, long)]
        force: bool,
    },
}

/// CLI entry point.
///
/// Parses arguments with `clap` and executes the selected flow. Any
/// error aborts with a nonzero exit status.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap();

    match cmd {
        Cmd::Autostart {
            origin,
            suffix,
            destination,
            force,
            components,
        } => cmd_autostart(origin, suffix, destination, force, components),
        Cmd::Applications {
            upstream,
            repo,
            destination,
            distribution,
            mappings,
            force,
        } => cmd_applications(distribution, destination, upstream, repo, mappings, force),
        Cmd::GnomeSession {
            upstream,
            repo,
            destination,
            force,
            components,
        } => cmd_session(destination, upstream, repo, force, components),
        Cmd::Xsession {
            upstream,
            repo,
            destination,
            force,
        } => cmd_xsession(destination, upstream, repo, force),
    }
}

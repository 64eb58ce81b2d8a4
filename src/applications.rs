//! `psg applications` - distribution-specific `defaults.list`.
//!
//! Takes the upstream MIME→application mapping and replaces every
//! application id with the one packaged by the target distribution,
//! as listed in the JSON mapping table.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::defaults::DEFAULTS_LIST_NAME;
use crate::entry::DesktopFile;
use crate::generator::{Generator, check_overwrite, prepare_destination};
use crate::git::clone_upstream;
use crate::mapping::{load_table, remap_applications};
use crate::report;

pub struct ApplicationsGenerator {
    pub distribution: String,
    pub destination: PathBuf,
    pub upstream: String,
    pub repo: PathBuf,
    pub mappings: PathBuf,
    pub force: bool,
}

impl Generator for ApplicationsGenerator {
    fn generate(&self) -> Result<()> {
        clone_upstream(&self.upstream, &self.repo)
            .with_context(|| format!("git clone {}", self.upstream))?;

        let defaults_path = self.repo.join("applications").join(DEFAULTS_LIST_NAME);
        let mut desktop = DesktopFile::from_path(&defaults_path)
            .with_context(|| format!("failed to load {}", defaults_path.display()))?;

        let table = load_table(&self.mappings)
            .with_context(|| format!("failed to load {}", self.mappings.display()))?;

        let section = desktop.section_mut("Default Applications").ok_or_else(|| {
            anyhow!(
                "{} has no [Default Applications] section",
                defaults_path.display()
            )
        })?;
        remap_applications(section, &table, &self.distribution)?;

        let destination = prepare_destination(&self.destination)?;
        let outfile = destination.join(DEFAULTS_LIST_NAME);
        check_overwrite(&outfile, self.force)?;
        desktop.write_to(&outfile)?;

        report::ok(&format!("wrote {}", outfile.display()));
        Ok(())
    }
}

/// CLI command: run the applications flow.
pub fn cmd_applications(
    distribution: String,
    destination: PathBuf,
    upstream: String,
    repo: PathBuf,
    mappings: PathBuf,
    force: bool,
) -> Result<()> {
    ApplicationsGenerator {
        distribution,
        destination,
        upstream,
        repo,
        mappings,
        force,
    }
    .generate()
}

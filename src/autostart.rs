//! `psg autostart` - regenerate xdg autostart entries for Pantheon.
//!
//! Each requested component is read from the origin directory, has its
//! show-in keys retargeted, and is written to the destination under a
//! suffixed name (`foo.desktop` → `foo-pantheon.desktop`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::defaults;
use crate::entry::DesktopFile;
use crate::generator::{Generator, check_overwrite, prepare_destination};
use crate::report;
use crate::rewrite::retarget_show_in;

pub struct AutostartGenerator {
    pub origin: PathBuf,
    pub components: Vec<String>,
    pub suffix: String,
    pub destination: PathBuf,
    pub force: bool,
}

impl AutostartGenerator {
    fn original_path(&self, component: &str) -> PathBuf {
        self.origin.join(component)
    }

    /// Output name: input stem + suffix + `.desktop`.
    fn output_path(&self, destination: &Path, component: &str) -> PathBuf {
        let stem = Path::new(component)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| component.to_string());
        destination.join(format!("{}{}.desktop", stem, self.suffix))
    }

    /// Split the component list by input-file existence.
    fn partition_components(&self) -> (Vec<&str>, Vec<&str>) {
        let mut present = Vec::new();
        let mut missing = Vec::new();
        for component in &self.components {
            if self.original_path(component).exists() {
                present.push(component.as_str());
            } else {
                missing.push(component.as_str());
            }
        }
        (present, missing)
    }
}

impl Generator for AutostartGenerator {
    fn generate(&self) -> Result<()> {
        let (present, missing) = self.partition_components();

        if present.is_empty() {
            bail!("no .desktop files found for the specified autostart components");
        }
        if !missing.is_empty() {
            report::warn("some .desktop files for the specified autostart components were not found");
            report::warn("use results with caution");
        }

        let destination = prepare_destination(&self.destination)?;

        for component in &present {
            let input = self.original_path(component);
            let mut desktop = DesktopFile::from_path(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;

            let outfile = self.output_path(&destination, component);
            check_overwrite(&outfile, self.force)?;

            retarget_show_in(&mut desktop)?;
            desktop.write_to(&outfile)?;

            report::ok(&format!("{} -> {}", component, outfile.display()));
        }

        if !missing.is_empty() {
            report::warn("skipped components (missing input files):");
            for component in &missing {
                println!("  - {component}");
            }
        }

        Ok(())
    }
}

/// CLI command: run the autostart flow, substituting the built-in
/// component list when none are given.
pub fn cmd_autostart(
    origin: PathBuf,
    suffix: String,
    destination: PathBuf,
    force: bool,
    components: Vec<String>,
) -> Result<()> {
    let components = if components.is_empty() {
        defaults::AUTOSTART_COMPONENTS.iter().map(|s| s.to_string()).collect()
    } else {
        components
    };

    AutostartGenerator {
        origin,
        components,
        suffix,
        destination,
        force,
    }
    .generate()
}

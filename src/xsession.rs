//! `psg xsession` - the Pantheon X session entry.
//!
//! The upstream `pantheon.desktop` needs no rewriting; this flow only
//! validates that it parses and copies it through the overwrite gate.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::defaults::XSESSION_FILE_NAME;
use crate::entry::DesktopFile;
use crate::generator::{Generator, check_overwrite, prepare_destination};
use crate::git::clone_upstream;
use crate::report;

pub struct XSessionGenerator {
    pub destination: PathBuf,
    pub upstream: String,
    pub repo: PathBuf,
    pub force: bool,
}

impl Generator for XSessionGenerator {
    fn generate(&self) -> Result<()> {
        let destination = prepare_destination(&self.destination)?;

        clone_upstream(&self.upstream, &self.repo)
            .with_context(|| format!("git clone {}", self.upstream))?;

        let xsession_path = self.repo.join("xsessions").join(XSESSION_FILE_NAME);
        let xsession = DesktopFile::from_path(&xsession_path)
            .with_context(|| format!("failed to load {}", xsession_path.display()))?;

        let outfile = destination.join(XSESSION_FILE_NAME);
        check_overwrite(&outfile, self.force)?;
        xsession.write_to(&outfile)?;

        report::ok(&format!("wrote {}", outfile.display()));
        Ok(())
    }
}

/// CLI command: run the xsession flow.
pub fn cmd_xsession(
    destination: PathBuf,
    upstream: String,
    repo: PathBuf,
    force: bool,
) -> Result<()> {
    XSessionGenerator {
        destination,
        upstream,
        repo,
        force,
    }
    .generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const ENTRY: &str = "[Desktop Entry]\nName=Pantheon\nExec=gnome-session --session=pantheon\nType=Application\n";

    fn fake_upstream(root: &Path) -> PathBuf {
        let repo = root.join("upstream");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(repo.join("xsessions")).unwrap();
        fs::write(repo.join("xsessions").join(XSESSION_FILE_NAME), ENTRY).unwrap();
        repo
    }

    fn generator(root: &Path, force: bool) -> XSessionGenerator {
        XSessionGenerator {
            destination: root.join("xsessions"),
            upstream: "https://example.invalid/upstream".to_string(),
            repo: fake_upstream(root),
            force,
        }
    }

    #[test]
    fn generate_copies_entry_verbatim() {
        let td = tempdir().unwrap();
        generator(td.path(), false).generate().unwrap();

        let written =
            fs::read_to_string(td.path().join("xsessions").join(XSESSION_FILE_NAME)).unwrap();
        let reparsed = DesktopFile::parse(&written).unwrap();
        assert_eq!(reparsed, DesktopFile::parse(ENTRY).unwrap());
    }

    #[test]
    fn generate_respects_overwrite_gate() {
        let td = tempdir().unwrap();
        fs::create_dir_all(td.path().join("xsessions")).unwrap();
        fs::write(
            td.path().join("xsessions").join(XSESSION_FILE_NAME),
            "untouched",
        )
        .unwrap();

        let err = generator(td.path(), false).generate().unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(td.path().join("xsessions").join(XSESSION_FILE_NAME)).unwrap(),
            "untouched"
        );

        generator(td.path(), true).generate().unwrap();
        let written =
            fs::read_to_string(td.path().join("xsessions").join(XSESSION_FILE_NAME)).unwrap();
        assert!(written.contains("Name=Pantheon"));
    }
}

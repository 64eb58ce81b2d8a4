//! `psg gnome-session` - the Pantheon session descriptor.
//!
//! Copies the upstream `pantheon.session` with the `ubuntu` fallback
//! session swapped for `GNOME`, and warns about drift between the
//! descriptor's `RequiredComponents` and the expected component list.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::defaults::{self, SESSION_FILE_NAME};
use crate::entry::DesktopFile;
use crate::generator::{Generator, check_overwrite, prepare_destination};
use crate::git::clone_upstream;
use crate::report;

pub struct SessionGenerator {
    pub components: Vec<String>,
    pub destination: PathBuf,
    pub upstream: String,
    pub repo: PathBuf,
    pub force: bool,
}

/// Split a semicolon-terminated component list.
fn split_components(value: &str) -> Vec<String> {
    value
        .split(';')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Swap the `ubuntu` fallback session for `GNOME`. Any other fallback
/// is left alone.
fn retarget_fallback(desktop: &mut DesktopFile) {
    if let Some(section) = desktop.section_mut("GNOME Session")
        && section.get("FallbackSession") == Some("ubuntu")
    {
        section.set("FallbackSession", "GNOME");
    }
}

/// Compare the descriptor's components against the expected list.
///
/// Returns `(missing, extra)`: expected components absent from the
/// descriptor, and descriptor components absent from the expected
/// list. Drift is reported, never fatal.
fn component_diff<'a>(required: &'a [String], expected: &'a [String]) -> (Vec<&'a str>, Vec<&'a str>) {
    let missing = expected
        .iter()
        .filter(|c| !required.contains(c))
        .map(String::as_str)
        .collect();
    let extra = required
        .iter()
        .filter(|c| !expected.contains(c))
        .map(String::as_str)
        .collect();
    (missing, extra)
}

impl Generator for SessionGenerator {
    fn generate(&self) -> Result<()> {
        let destination = prepare_destination(&self.destination)?;

        clone_upstream(&self.upstream, &self.repo)
            .with_context(|| format!("git clone {}", self.upstream))?;

        let session_path = self.repo.join("gnome-session").join(SESSION_FILE_NAME);
        let mut session = DesktopFile::from_path(&session_path)
            .with_context(|| format!("failed to load {}", session_path.display()))?;

        retarget_fallback(&mut session);

        let required = session
            .section("GNOME Session")
            .and_then(|s| s.get("RequiredComponents"))
            .ok_or_else(|| anyhow!("{} has no RequiredComponents", session_path.display()))?;
        let required = split_components(required);

        let (missing, extra) = component_diff(&required, &self.components);
        for component in missing {
            report::warn(&format!(
                "default component {component} not present in {SESSION_FILE_NAME}"
            ));
        }
        for component in extra {
            report::warn(&format!(
                "required component {component} not present in default components"
            ));
        }

        let outfile = destination.join(SESSION_FILE_NAME);
        check_overwrite(&outfile, self.force)?;
        session.write_to(&outfile)?;

        report::ok(&format!("wrote {}", outfile.display()));
        Ok(())
    }
}

/// CLI command: run the gnome-session flow, substituting the built-in
/// component list when none are given.
pub fn cmd_session(
    destination: PathBuf,
    upstream: String,
    repo: PathBuf,
    force: bool,
    components: Vec<String>,
) -> Result<()> {
    let components = if components.is_empty() {
        defaults::SESSION_COMPONENTS.iter().map(|s| s.to_string()).collect()
    } else {
        components
    };

    SessionGenerator {
        components,
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

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_components_drops_the_terminator() {
        assert_eq!(split_components("a;b;"), strings(&["a", "b"]));
        assert_eq!(split_components(""), Vec::<String>::new());
    }

    #[test]
    fn component_diff_reports_both_directions() {
        let required = strings(&["a", "b"]);
        let expected = strings(&["a", "c"]);
        let (missing, extra) = component_diff(&required, &expected);
        assert_eq!(missing, vec!["c"]);
        assert_eq!(extra, vec!["b"]);
    }

    #[test]
    fn ubuntu_fallback_becomes_gnome() {
        let mut doc = DesktopFile::parse(
            "[GNOME Session]\nName=Pantheon\nFallbackSession=ubuntu\n",
        )
        .unwrap();
        retarget_fallback(&mut doc);
        assert_eq!(
            doc.section("GNOME Session").unwrap().get("FallbackSession"),
            Some("GNOME")
        );
    }

    #[test]
    fn other_fallbacks_are_left_alone() {
        let mut doc = DesktopFile::parse(
            "[GNOME Session]\nName=Pantheon\nFallbackSession=plasma\n",
        )
        .unwrap();
        retarget_fallback(&mut doc);
        assert_eq!(
            doc.section("GNOME Session").unwrap().get("FallbackSession"),
            Some("plasma")
        );
    }

    fn fake_upstream(root: &Path, descriptor: &str) -> PathBuf {
        let repo = root.join("upstream");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(repo.join("gnome-session")).unwrap();
        fs::write(repo.join("gnome-session").join(SESSION_FILE_NAME), descriptor).unwrap();
        repo
    }

    #[test]
    fn generate_writes_descriptor_with_fallback_rewritten() {
        let td = tempdir().unwrap();
        let repo = fake_upstream(
            td.path(),
            "[GNOME Session]\nName=Pantheon\nRequiredComponents=gala;a;\nFallbackSession=ubuntu\n",
        );

        SessionGenerator {
            components: strings(&["gala", "a"]),
            destination: td.path().join("gnome-session"),
            upstream: "https://example.invalid/upstream".to_string(),
            repo,
            force: false,
        }
        .generate()
        .unwrap();

        let written =
            fs::read_to_string(td.path().join("gnome-session").join(SESSION_FILE_NAME)).unwrap();
        assert!(written.contains("FallbackSession=GNOME"));
        assert!(written.contains("RequiredComponents=gala;a;"));
    }

    #[test]
    fn generate_warns_but_succeeds_on_component_drift() {
        let td = tempdir().unwrap();
        let repo = fake_upstream(
            td.path(),
            "[GNOME Session]\nName=Pantheon\nRequiredComponents=a;b;\n",
        );

        // b extra, c missing: still a successful run.
        SessionGenerator {
            components: strings(&["a", "c"]),
            destination: td.path().join("gnome-session"),
            upstream: "https://example.invalid/upstream".to_string(),
            repo,
            force: false,
        }
        .generate()
        .unwrap();

        assert!(td.path().join("gnome-session").join(SESSION_FILE_NAME).exists());
    }

    #[test]
    fn generate_fails_without_required_components() {
        let td = tempdir().unwrap();
        let repo = fake_upstream(td.path(), "[GNOME Session]\nName=Pantheon\n");

        let err = SessionGenerator {
            components: strings(&["a"]),
            destination: td.path().join("gnome-session"),
            upstream: "https://example.invalid/upstream".to_string(),
            repo,
            force: false,
        }
        .generate()
        .unwrap_err();
        assert!(err.to_string().contains("RequiredComponents"));
    }
}

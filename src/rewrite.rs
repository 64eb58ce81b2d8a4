//! Key rewrite rules applied to upstream desktop entries.

use crate::entry::DesktopFile;
use crate::error::{GenError, Result};

/// Value forced into `OnlyShowIn` keys.
pub const ONLY_SHOW_IN: &str = "Pantheon;";

/// Retarget the show-in keys of every section at the Pantheon desktop.
///
/// `OnlyShowIn` is overwritten with [`ONLY_SHOW_IN`] wherever it
/// appears; no other key is touched. `NotShowIn` has no Pantheon
/// handling yet and is rejected outright, before any output is
/// written. Applying the pass a second time is a no-op.
pub fn retarget_show_in(doc: &mut DesktopFile) -> Result<()> {
    for section in doc.sections_mut() {
        if section.contains_key("OnlyShowIn") {
            section.set("OnlyShowIn", ONLY_SHOW_IN);
        }
        if section.contains_key("NotShowIn") {
            return Err(GenError::Unsupported("NotShowIn".into()));
        }
    }
    Ok(())
}

//! Distribution-specific application mapping for `defaults.list`.
//!
//! The table is a JSON file keyed by distribution name, then by the
//! application id used upstream:
//!
//! ```json
//! {
//!     "Fedora": {
//!         "org.gnome.Epiphany.desktop": "firefox.desktop"
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entry::Section;
use crate::error::{GenError, Result};

/// Mapping table: distribution name → upstream application id →
/// packaged application id.
#[derive(Debug, Deserialize)]
pub struct DistributionTable(HashMap<String, HashMap<String, String>>);

impl DistributionTable {
    fn distribution(&self, name: &str) -> Option<&HashMap<String, String>> {
        self.0.get(name)
    }
}

/// Load the mapping table from a JSON file.
pub fn load_table(path: &Path) -> Result<DistributionTable> {
    let text = fs::read_to_string(path)?;
    let table = serde_json::from_str(&text)?;
    Ok(table)
}

/// Replace every application id in `section` with the distribution's
/// equivalent.
///
/// Every value must have a replacement: a distribution missing from
/// the table, or an application the distribution does not map, aborts
/// the whole flow rather than producing a partial `defaults.list`.
pub fn remap_applications(
    section: &mut Section,
    table: &DistributionTable,
    distribution: &str,
) -> Result<()> {
    let mapping = table
        .distribution(distribution)
        .ok_or_else(|| GenError::UnknownDistribution(distribution.to_string()))?;

    for entry in section.entries_mut() {
        let replacement = mapping
            .get(&entry.1)
            .ok_or_else(|| GenError::UnmappedApplication(entry.1.clone()))?;
        entry.1 = replacement.clone();
    }
    Ok(())
}

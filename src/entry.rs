//! In-memory model of a desktop-entry (INI style) file.
//!
//! Sections and keys are kept in file order so a parsed document can be
//! serialized back without reordering anything. Values are stored as
//! literal strings; `%` field codes are never expanded.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};

/// One `[Name]` block: the section name plus its key/value pairs in
/// file order. Keys are case-sensitive and unique within the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Overwrite an existing key in place, or append a new one at the
    /// end. Existing keys keep their position so serialization stays
    /// stable.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Key/value pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut (String, String)> {
        self.entries.iter_mut()
    }

    fn push_unique(&mut self, key: String, value: String) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value));
        true
    }
}

/// A whole desktop-entry document: sections in file order, names
/// unique across the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopFile {
    sections: Vec<Section>,
}

impl DesktopFile {
    /// Parse desktop-entry text.
    ///
    /// Comment lines (`#` or `;`) and blank lines are dropped. Keys and
    /// values are trimmed of surrounding whitespace; everything else is
    /// kept literally.
    pub fn parse(content: &str) -> Result<Self> {
        let mut doc = DesktopFile::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix('[') {
                let name = rest.strip_suffix(']').ok_or_else(|| GenError::Parse {
                    line,
                    message: format!("unterminated section header: {raw}"),
                })?;
                if doc.section(name).is_some() {
                    return Err(GenError::Parse {
                        line,
                        message: format!("duplicate section [{name}]"),
                    });
                }
                doc.sections.push(Section::new(name));
                continue;
            }

            let (key, value) = trimmed.split_once('=').ok_or_else(|| GenError::Parse {
                line,
                message: format!("expected 'Key=Value': {raw}"),
            })?;
            let key = key.trim_end();
            let value = value.trim_start();

            let section = doc.sections.last_mut().ok_or_else(|| GenError::Parse {
                line,
                message: format!("entry before any section header: {raw}"),
            })?;
            if !section.push_unique(key.to_string(), value.to_string()) {
                return Err(GenError::Parse {
                    line,
                    message: format!("duplicate key '{}' in section [{}]", key, section.name),
                });
            }
        }

        Ok(doc)
    }

    /// Read and parse a file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Serialize and write to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for DesktopFile {
    /// `[Name]` then `Key=Value` lines, no spaces around `=`, one
    /// blank line after each section.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in section.entries() {
                writeln!(f, "{key}={value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Document metadata written into `office:meta`.
//!
//! This is a plain record: no field carries behavior, and nothing in it is read
//! from the process environment. Callers fill it in (or let
//! [`crate::odf::DocumentOptions`] seed it) and the meta writer renders it.

use crate::common::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document metadata structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Application that produced the document (`meta:generator`)
    pub generator: Option<String>,
    /// Document title
    pub title: Option<String>,
    /// Document description/comments
    pub description: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Keywords associated with the document, one `meta:keyword` each
    pub keywords: Vec<String>,
    /// Person who first created the document
    pub initial_creator: Option<String>,
    /// Last person to modify the document
    pub creator: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
    /// Document language (RFC 3066 tag, e.g. `en-US`)
    pub language: Option<String>,
    /// Number of editing cycles
    pub editing_cycles: Option<u32>,
}

impl Metadata {
    /// Check if the metadata contains any actual data.
    ///
    /// Returns true if at least one field is populated.
    pub fn has_data(&self) -> bool {
        self.generator.is_some()
            || self.title.is_some()
            || self.description.is_some()
            || self.subject.is_some()
            || !self.keywords.is_empty()
            || self.initial_creator.is_some()
            || self.creator.is_some()
            || self.created.is_some()
            || self.modified.is_some()
            || self.language.is_some()
            || self.editing_cycles.is_some()
    }

    /// Add a keyword unless it is empty or already present.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if !keyword.trim().is_empty() && !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
    }

    /// Render the metadata as a YAML front matter block, or an empty string
    /// when nothing is set.
    pub fn to_yaml_front_matter(&self) -> Result<String> {
        if !self.has_data() {
            return Ok(String::new());
        }

        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| Error::Other(format!("Failed to serialize metadata to YAML: {}", e)))?;
        Ok(format!("---\n{}---\n\n", yaml))
    }

    /// Parse metadata from the YAML produced by [`Self::to_yaml_front_matter`],
    /// with or without the `---` delimiters.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let body = yaml
            .trim()
            .strip_prefix("---")
            .and_then(|rest| rest.strip_suffix("---"))
            .unwrap_or(yaml);
        serde_saphyr::from_str(body)
            .map_err(|e| Error::Other(format!("Failed to parse metadata YAML: {}", e)))
    }
}

//! Document options.

use chrono::{DateTime, Utc};

/// Options applied when a [`TextDocument`](super::TextDocument) is created.
///
/// Nothing here is read from the environment. The creation date is taken
/// from the clock once, when the options are constructed; set it explicitly
/// or clear it to get reproducible output.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    /// Written as `meta:generator`
    pub generator: String,
    /// Written as `meta:initial-creator` and `dc:creator`
    pub creator: Option<String>,
    /// Written as `meta:creation-date`
    pub creation_date: Option<DateTime<Utc>>,
    /// Written as `dc:language`
    pub language: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            generator: concat!("flat-odt/", env!("CARGO_PKG_VERSION")).to_string(),
            creator: None,
            creation_date: Some(Utc::now()),
            language: None,
        }
    }
}

impl DocumentOptions {
    /// Create options with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flat_odt::odf::DocumentOptions;
    ///
    /// let options = DocumentOptions::new()
    ///     .with_creator("Sam")
    ///     .with_language("en-US")
    ///     .without_creation_date();
    /// assert_eq!(options.creator.as_deref(), Some("Sam"));
    /// assert!(options.creation_date.is_none());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator string.
    #[inline]
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// Set the document author.
    #[inline]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the creation date.
    #[inline]
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Leave the creation date out of the metadata.
    #[inline]
    pub fn without_creation_date(mut self) -> Self {
        self.creation_date = None;
        self
    }

    /// Set the document language, e.g. `en-US`.
    #[inline]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let options = DocumentOptions::default();
        assert!(options.generator.starts_with("flat-odt/"));
        assert!(options.creator.is_none());
        assert!(options.creation_date.is_some());
    }

    #[test]
    fn test_builders() {
        let date = Utc.with_ymd_and_hms(2023, 5, 4, 3, 2, 1).unwrap();
        let options = DocumentOptions::new()
            .with_generator("test")
            .with_creation_date(date);
        assert_eq!(options.generator, "test");
        assert_eq!(options.creation_date, Some(date));
    }
}

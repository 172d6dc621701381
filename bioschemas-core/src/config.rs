//! Host-supplied settings for a mapping run

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the PMC id in [`MapperConfig::metadata_id`]
pub const METADATA_ID_PLACEHOLDER: &str = "{0}";

/// Configuration for mapping records to JSON-LD
///
/// # Example
///
/// ```
/// use bioschemas_core::MapperConfig;
///
/// let config = MapperConfig::new()
///     .with_publisher("biotea")
///     .with_version("1.0")
///     .with_metadata_id("https://biotea.github.io/metadata/{0}");
///
/// assert_eq!(
///     config.metadata_id_for("PMC123").as_deref(),
///     Some("https://biotea.github.io/metadata/PMC123")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Name written to `sdPublisher`
    #[serde(default)]
    pub publisher: String,
    /// Value written to `version`
    #[serde(default)]
    pub version: String,
    /// Template for the metadata `@id`, containing [`METADATA_ID_PLACEHOLDER`]
    #[serde(default)]
    pub metadata_id: Option<String>,
    /// Fixed `dateCreated`; today's UTC date when unset
    #[serde(default)]
    pub date_created: Option<NaiveDate>,
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_publisher<S: Into<String>>(mut self, publisher: S) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_metadata_id<S: Into<String>>(mut self, template: S) -> Self {
        self.metadata_id = Some(template.into());
        self
    }

    pub fn with_date_created(mut self, date: NaiveDate) -> Self {
        self.date_created = Some(date);
        self
    }

    /// ISO date (`YYYY-MM-DD`) stamped into `dateCreated`
    pub fn date_created_iso(&self) -> String {
        self.date_created
            .unwrap_or_else(|| Utc::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Metadata `@id` for a PMC id, or `None` when no template is configured.
    /// Only the first placeholder is substituted.
    pub fn metadata_id_for(&self, pmcid: &str) -> Option<String> {
        self.metadata_id
            .as_ref()
            .map(|template| template.replacen(METADATA_ID_PLACEHOLDER, pmcid, 1))
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use bioschemas_core::{CreativeWork, MapperConfig, MappingEvent, map_record_with};
use chrono::NaiveDate;
use clap::Args;

use super::{load_tree, read_input, write_output};

#[derive(Args, Debug)]
pub struct Map {
    /// OAI-PMH record (XML) or parsed record tree (JSON); stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Name written to `sdPublisher`
    #[arg(long, env = "BIOSCHEMAS_PUBLISHER", default_value = "")]
    pub publisher: String,

    /// Value written to `version`
    #[arg(long = "version-tag", env = "BIOSCHEMAS_VERSION", default_value = "")]
    pub version_tag: String,

    /// Metadata `@id` template; `{0}` is replaced with the PMC id
    #[arg(long, env = "BIOSCHEMAS_METADATA_ID")]
    pub metadata_id: Option<String>,

    /// Fixed `dateCreated` (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date_created: Option<NaiveDate>,

    /// Wrap the document in a `<script type="application/ld+json">` element
    #[arg(long, conflicts_with = "compact")]
    pub script_tag: bool,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Also write the parsed record tree as JSON to this path
    #[arg(long)]
    pub emit_tree: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Map {
    pub fn config(&self) -> MapperConfig {
        let mut config = MapperConfig::new()
            .with_publisher(self.publisher.as_str())
            .with_version(self.version_tag.as_str());

        if let Some(ref template) = self.metadata_id {
            config = config.with_metadata_id(template.as_str());
        }

        if let Some(date) = self.date_created {
            config = config.with_date_created(date);
        }

        config
    }

    pub fn execute(&self) -> Result<()> {
        let content = read_input(self.input.as_deref())?;
        let tree = load_tree(&content)?;
        let config = self.config();

        let mut tree_json = None;
        let record = map_record_with(&tree, &config, |event| match event {
            MappingEvent::Load(loaded) if self.emit_tree.is_some() => {
                tree_json = Some(serde_json::to_string_pretty(loaded));
            }
            MappingEvent::Ready(document) => {
                tracing::debug!(
                    authors = document.main_entity.author.len(),
                    citations = document.main_entity.citation.as_ref().map_or(0, Vec::len),
                    "Document ready"
                );
            }
            _ => {}
        });

        if let (Some(path), Some(json)) = (&self.emit_tree, tree_json) {
            let json = json.context("Failed to serialize record tree")?;
            write_output(Some(path), &json)?;
        }

        for failure in &record.failures {
            tracing::warn!("{failure}");
        }

        let rendered = self.render(&record.document)?;
        write_output(self.output.as_ref(), &rendered)
    }

    fn render(&self, document: &CreativeWork) -> Result<String> {
        let rendered = if self.script_tag {
            document.to_script_tag()?
        } else if self.compact {
            serde_json::to_string(document)?
        } else {
            document.to_json_ld()?
        };
        Ok(rendered)
    }
}

#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Bioschemas Core
//!
//! Maps PubMed Central OAI-PMH (JATS) records to Bioschemas `CreativeWork` /
//! `ScholarlyArticle` JSON-LD documents.
//!
//! The crate works on a generic parsed tree ([`Node`]) in which any element may
//! be absent, singular or repeated. [`tree::parse_xml`] builds that tree from raw
//! XML; [`map_record`] runs the field mappers over it and always returns a
//! document, collecting per-phase failures instead of aborting.
//!
//! ```
//! use bioschemas_core::{MapperConfig, map_xml};
//!
//! let xml = r#"<article><front>
//!   <journal-meta><journal-title>Genes</journal-title></journal-meta>
//!   <article-meta>
//!     <article-id pub-id-type="doi">10.1/x</article-id>
//!     <title-group><article-title>A title</article-title></title-group>
//!   </article-meta>
//! </front></article>"#;
//!
//! let record = map_xml(xml, &MapperConfig::new().with_publisher("biotea")).unwrap();
//! assert_eq!(record.document.main_entity.id, "https://doi.org/10.1/x");
//! assert_eq!(record.document.main_entity.headline, "A title");
//! ```

pub mod config;
pub mod error;
pub mod jsonld;
pub mod mapper;
pub mod tree;

// Re-export main types for convenience
pub use config::MapperConfig;
pub use error::{MappingError, Result};
pub use jsonld::{Citation, CreativeWork, PartOf, Person, ScholarlyArticle};
pub use mapper::{
    MappedRecord, MappingEvent, PartialFailure, Phase, map_record, map_record_with, map_xml,
};
pub use tree::Node;

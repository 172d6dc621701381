//! Bioschemas JSON-LD output model
//!
//! Typed documents serializing to the `CreativeWork` / `ScholarlyArticle`
//! profile, plus the factories that produce fresh default instances.

pub mod models;
pub mod templates;

pub use models::{
    Citation, CreativeWork, Organization, PartOf, Periodical, Person, PublicationIssue,
    PublicationVolume, ScholarlyArticle,
};

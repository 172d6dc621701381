//! Record → JSON-LD mapping
//!
//! [`map_record`] coordinates the field mappers over one parsed record. Front
//! matter (article fields, authors, venue) and back matter (references) are
//! mapped in two independent phases: a failure in one is recorded as a
//! [`PartialFailure`] and logged, and never prevents the other from running.

use std::fmt;

use tracing::{debug, warn};

use crate::config::MapperConfig;
use crate::error::{MappingError, Result};
use crate::jsonld::{CreativeWork, templates};
use crate::tree::{self, Node};

pub mod article;
pub mod author;
pub mod identifier;
pub mod journal;
pub mod reference;
pub mod text;

pub use article::{map_abstract, map_article, select_publication_date};
pub use author::map_authors;
pub use identifier::classify_identifier;
pub use journal::map_journal;
pub use reference::map_references;
pub use text::normalize_text;

/// Where the `article` element may sit, in lookup order: an OAI-PMH GetRecord
/// response, an E-utilities article set, or a bare JATS document.
const ARTICLE_PATHS: [&[&str]; 3] = [
    &["OAI-PMH", "GetRecord", "record", "metadata", "article"],
    &["pmc-articleset", "article"],
    &["article"],
];

/// Independently guarded mapping phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Article metadata and journal structure from `front`
    FrontMatter,
    /// Citations from `back/ref-list`
    References,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::FrontMatter => f.write_str("front matter"),
            Phase::References => f.write_str("references"),
        }
    }
}

/// A phase that could not complete
#[derive(Debug)]
pub struct PartialFailure {
    pub phase: Phase,
    pub error: MappingError,
}

impl fmt::Display for PartialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mapping failed: {}", self.phase, self.error)
    }
}

/// Outcome of mapping one record
#[derive(Debug)]
pub struct MappedRecord {
    /// The document, filled as far as the record allowed
    pub document: CreativeWork,
    /// Phases that failed, in the order they ran
    pub failures: Vec<PartialFailure>,
}

impl MappedRecord {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Notifications emitted while mapping a record
#[derive(Debug, Clone, Copy)]
pub enum MappingEvent<'a> {
    /// The parsed tree, before any mapping
    Load(&'a Node),
    /// The finished document
    Ready(&'a CreativeWork),
}

/// Map a parsed record to a JSON-LD document
pub fn map_record(tree: &Node, config: &MapperConfig) -> MappedRecord {
    map_record_with(tree, config, |_| {})
}

/// Map a parsed record, reporting [`MappingEvent`]s to `observer`.
///
/// Never fails: if the front matter cannot be mapped at all the document keeps
/// the template defaults, and any failure is listed in
/// [`MappedRecord::failures`].
pub fn map_record_with<F>(tree: &Node, config: &MapperConfig, mut observer: F) -> MappedRecord
where
    F: FnMut(MappingEvent<'_>),
{
    observer(MappingEvent::Load(tree));

    let mut document = templates::creative_work();
    let mut failures = Vec::new();

    if let Err(error) = map_front_matter(tree, &mut document, config) {
        warn!(phase = %Phase::FrontMatter, %error, "Mapping phase failed");
        failures.push(PartialFailure {
            phase: Phase::FrontMatter,
            error,
        });
    }

    if let Err(error) = map_back_matter(tree, &mut document) {
        warn!(phase = %Phase::References, %error, "Mapping phase failed");
        failures.push(PartialFailure {
            phase: Phase::References,
            error,
        });
    }

    observer(MappingEvent::Ready(&document));
    MappedRecord { document, failures }
}

/// Parse raw XML and map it.
///
/// Only XML parsing can fail; mapping problems are reported in the record.
pub fn map_xml(xml: &str, config: &MapperConfig) -> Result<MappedRecord> {
    let tree = tree::parse_xml(xml)?;
    Ok(map_record(&tree, config))
}

fn locate_article(tree: &Node) -> Result<&Node> {
    ARTICLE_PATHS
        .iter()
        .find_map(|path| tree.path(path))
        .and_then(|article| article.as_list().first())
        .ok_or_else(|| MappingError::missing("article"))
}

fn map_front_matter(tree: &Node, doc: &mut CreativeWork, config: &MapperConfig) -> Result<()> {
    let front = locate_article(tree)?
        .get("front")
        .ok_or_else(|| MappingError::missing("article/front"))?;
    let article_meta = front
        .get("article-meta")
        .ok_or_else(|| MappingError::missing("article/front/article-meta"))?;

    map_article(article_meta, doc, config);

    let journal_meta = front
        .get("journal-meta")
        .ok_or_else(|| MappingError::missing("article/front/journal-meta"))?;
    doc.main_entity.is_part_of = Some(map_journal(article_meta, journal_meta));
    Ok(())
}

fn map_back_matter(tree: &Node, doc: &mut CreativeWork) -> Result<()> {
    let article = locate_article(tree)?;
    let Some(ref_lists) = article.get("back").and_then(|back| back.get("ref-list")) else {
        debug!("Record has no reference list");
        return Ok(());
    };

    let ref_lists = ref_lists.as_list();
    if ref_lists.iter().all(|list| list.get("ref").is_none()) {
        debug!("Reference list holds no references");
        return Ok(());
    }

    let citations: Vec<_> = ref_lists.iter().flat_map(map_references).collect();
    doc.main_entity.citation = Some(citations);
    Ok(())
}

//! Article identifier classification
//!
//! Each typed `article-id` is turned into canonical URIs and written to the
//! fields that identifier type feeds. DOIs are the only source of the article's
//! `@id`, `url` and `identifier`; every other type is also recorded as an
//! `alternateName` tag.

use tracing::debug;

use crate::config::MapperConfig;
use crate::jsonld::CreativeWork;
use crate::jsonld::templates::{DOI_PREFIX, DOI_RESOLVER};
use crate::tree::Node;

/// Attribute carrying the identifier type on `article-id` and `pub-id`
pub const ID_TYPE_ATTR: &str = "pub-id-type";

const PMC_ARTICLE_URL: &str = "http://www.ncbi.nlm.nih.gov/pmc/articles/";
const PMC_OAI_RECORD_URL: &str =
    "https://www.ncbi.nlm.nih.gov/pmc/oai/oai.cgi?verb=GetRecord&identifier=oai:pubmedcentral.nih.gov:";
const PMC_OAI_METADATA_PREFIX: &str = "&metadataPrefix=pmc_fm";
const BIO2RDF_PUBMED: &str = "http://bio2rdf.org/pubmed:";
const IDENTIFIERS_PUBMED: &str = "http://identifiers.org/pubmed/";
const INFO_IDENTIFIERS_PUBMED: &str = "http://info.identifiers.org/pubmed/";
const NCBI_PUBMED: &str = "https://www.ncbi.nlm.nih.gov/pubmed/";

/// Recognized identifier types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Doi,
    Pmcid,
    PmcUid,
    Pmid,
    Other,
}

impl IdentifierKind {
    pub fn from_type(id_type: &str) -> Self {
        match id_type {
            "doi" => IdentifierKind::Doi,
            "pmcid" => IdentifierKind::Pmcid,
            "pmc-uid" => IdentifierKind::PmcUid,
            "pmid" => IdentifierKind::Pmid,
            _ => IdentifierKind::Other,
        }
    }
}

/// `https://doi.org/<doi>`
pub fn doi_uri(doi: &str) -> String {
    format!("{DOI_RESOLVER}{doi}")
}

/// `doi:<doi>`
pub fn doi_identifier(doi: &str) -> String {
    format!("{DOI_PREFIX}{doi}")
}

/// Article-level PubMed URIs (identifiers.org resolver, then NCBI)
pub fn pubmed_article_uris(pmid: &str) -> [String; 2] {
    [
        format!("{INFO_IDENTIFIERS_PUBMED}{pmid}"),
        format!("{NCBI_PUBMED}{pmid}"),
    ]
}

/// Linked-data URIs for a PMID used at the metadata level
pub fn pubmed_metadata_uris(pmid: &str) -> [String; 2] {
    [
        format!("{BIO2RDF_PUBMED}{pmid}"),
        format!("{IDENTIFIERS_PUBMED}{pmid}"),
    ]
}

/// OAI-PMH GetRecord URL for a PMC uid
pub fn oai_record_url(pmc_uid: &str) -> String {
    format!(
        "{PMC_OAI_RECORD_URL}{}{PMC_OAI_METADATA_PREFIX}",
        urlencoding::encode(pmc_uid)
    )
}

/// `<type>:<value>`
pub fn id_tag(id_type: &str, value: &str) -> String {
    format!("{id_type}:{value}")
}

/// Apply one typed identifier node to the document.
///
/// Must be called once per `article-id`, in source order.
pub fn classify_identifier(id: &Node, doc: &mut CreativeWork, config: &MapperConfig) {
    let (Some(id_type), Some(value)) = (id.attr(ID_TYPE_ATTR), id.text()) else {
        debug!(?id, "Skipping article-id without type or value");
        return;
    };

    let entity = &mut doc.main_entity;
    match IdentifierKind::from_type(id_type) {
        IdentifierKind::Doi => {
            entity.id = doi_uri(value);
            entity.url = entity.id.clone();
            entity.identifier = doi_identifier(value);
        }
        IdentifierKind::Pmcid => {
            doc.identifier.push_str(value);
            entity.alternate_name.push(id_tag(id_type, value));
            entity.same_as.push(format!("{PMC_ARTICLE_URL}{value}"));
            if let Some(metadata_id) = config.metadata_id_for(value) {
                doc.id = Some(metadata_id);
            }
        }
        IdentifierKind::PmcUid => {
            doc.is_based_on = oai_record_url(value);
            entity.alternate_name.push(id_tag(id_type, value));
        }
        IdentifierKind::Pmid => {
            doc.same_as.extend(pubmed_metadata_uris(value));
            entity.same_as.extend(pubmed_article_uris(value));
            entity.alternate_name.push(id_tag(id_type, value));
        }
        IdentifierKind::Other => {
            entity.alternate_name.push(id_tag(id_type, value));
        }
    }
}

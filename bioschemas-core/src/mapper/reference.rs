use tracing::debug;

use super::identifier::{ID_TYPE_ATTR, doi_identifier, doi_uri, id_tag, pubmed_article_uris};
use crate::jsonld::{Citation, templates};
use crate::tree::Node;

/// Elements a `ref` may wrap its bibliographic data in, across JATS versions
const CITATION_ELEMENTS: [&str; 3] = ["citation", "element-citation", "mixed-citation"];

/// Build citations from a `ref-list`.
///
/// References without a DOI or PMID produce no entry. Other publication id
/// types on a reference are ignored.
pub fn map_references(ref_list: &Node) -> Vec<Citation> {
    let Some(refs) = ref_list.get("ref") else {
        return Vec::new();
    };

    refs.as_list()
        .iter()
        .filter_map(|reference| {
            let citation = map_reference(reference);
            if citation.is_none() {
                debug!(
                    ref_id = ?reference.attr("id"),
                    "Skipping reference without a recognized publication id"
                );
            }
            citation
        })
        .collect()
}

fn map_reference(reference: &Node) -> Option<Citation> {
    let mut citation = templates::citation();

    let pub_ids = CITATION_ELEMENTS
        .iter()
        .filter_map(|element| reference.get(element))
        .flat_map(Node::as_list)
        .filter_map(|cited| cited.get("pub-id"))
        .flat_map(Node::as_list);

    for pub_id in pub_ids {
        apply_reference_id(&mut citation, pub_id);
    }

    citation.is_identified().then_some(citation)
}

fn apply_reference_id(citation: &mut Citation, pub_id: &Node) {
    let (Some(id_type), Some(value)) = (pub_id.attr(ID_TYPE_ATTR), pub_id.text()) else {
        return;
    };

    match id_type {
        "doi" => {
            let uri = doi_uri(value);
            citation.url = Some(uri.clone());
            citation.id = Some(uri);
            citation.identifier = Some(doi_identifier(value));
        }
        "pmid" => {
            citation.same_as = Some(pubmed_article_uris(value).into());
            citation.alternate_name = Some(id_tag(id_type, value));
        }
        _ => {}
    }
}

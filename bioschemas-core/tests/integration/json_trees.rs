//! Mapping over trees produced outside this crate (JSON converted XML), where
//! leaves may be numbers and cardinality varies from record to record.

mod common;

use bioschemas_core::{Node, PartOf, map_record};
use common::test_config;
use serde_json::json;

fn record_tree(article_meta: serde_json::Value, back: serde_json::Value) -> Node {
    serde_json::from_value(json!({
        "OAI-PMH": {"GetRecord": {"record": {"metadata": {"article": {
            "front": {
                "journal-meta": {
                    "journal-title": "Nucleic Acids Res",
                    "issn": {"@_pub-type": "ppub", "#text": "0305-1048"},
                    "publisher": {"publisher-name": "Oxford University Press"}
                },
                "article-meta": article_meta
            },
            "back": back
        }}}}}
    }))
    .unwrap()
}

#[test]
fn test_numeric_leaves_are_text() {
    let tree = record_tree(
        json!({
            "article-id": {"@_pub-id-type": "pmid", "#text": 30357350},
            "pub-date": [
                {"@_pub-type": "ppub", "year": 2020, "month": 1, "day": 1},
                {"@_pub-type": "epub", "year": 2020, "month": 2, "day": 2}
            ],
            "volume": 47,
            "issue": 3,
            "fpage": 100,
            "lpage": 112
        }),
        json!({}),
    );
    let document = map_record(&tree, &test_config()).document;
    let entity = &document.main_entity;

    assert_eq!(entity.date_published, "2020-2-2");
    assert_eq!(entity.page_start, "100");
    assert_eq!(entity.page_end, "112");
    assert_eq!(entity.alternate_name, vec!["pmid:30357350"]);

    let Some(PartOf::Issue(issue)) = &entity.is_part_of else {
        panic!("expected an issue, got {:?}", entity.is_part_of);
    };
    assert_eq!(issue.issue_number, "3");
    assert_eq!(issue.is_part_of.volume_number, "47");
    assert_eq!(issue.is_part_of.is_part_of.issn, vec!["0305-1048"]);
}

#[test]
fn test_single_and_listed_contributors_agree() {
    let contrib = json!({
        "@_contrib-type": "author",
        "name": {"surname": "Nguyen", "given-names": "Thi"}
    });
    let single = record_tree(json!({"contrib-group": {"contrib": contrib.clone()}}), json!({}));
    let listed = record_tree(json!({"contrib-group": {"contrib": [contrib]}}), json!({}));

    let from_single = map_record(&single, &test_config()).document;
    let from_listed = map_record(&listed, &test_config()).document;
    assert_eq!(from_single.main_entity.author, from_listed.main_entity.author);
    assert_eq!(from_single.main_entity.author[0].name, "Thi Nguyen");
}

#[test]
fn test_sectioned_abstract_backstory() {
    let tree = record_tree(
        json!({"abstract": {"sec": [
            {"title": "Background", "p": "Context here."},
            {"title": "Methods", "p": "Approach here."}
        ]}}),
        json!({}),
    );
    let backstory = map_record(&tree, &test_config()).document.main_entity.backstory;
    assert!(backstory.starts_with("Background: Context here. Methods: "));
}

#[test]
fn test_single_reference_entry() {
    let tree = record_tree(
        json!({}),
        json!({"ref-list": {"ref": {"@_id": "R1", "citation": {"pub-id": [
            {"@_pub-id-type": "doi", "#text": "10.1093/nar/gky1"},
            {"@_pub-id-type": "pmid", "#text": 29}
        ]}}}}),
    );
    let citations = map_record(&tree, &test_config())
        .document
        .main_entity
        .citation
        .unwrap();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].identifier.as_deref(), Some("doi:10.1093/nar/gky1"));
    assert_eq!(citations[0].alternate_name.as_deref(), Some("pmid:29"));
}

#[test]
fn test_mapping_does_not_mutate_shared_state() {
    let tree = record_tree(
        json!({"article-id": {"@_pub-id-type": "pmid", "#text": "1"}}),
        json!({}),
    );
    let first = map_record(&tree, &test_config()).document;
    let empty = record_tree(json!({}), json!({}));
    let second = map_record(&empty, &test_config()).document;

    assert_eq!(first.same_as.len(), 2);
    assert!(second.same_as.is_empty());
    assert!(second.main_entity.alternate_name.is_empty());
}

//! Fixture-based mapping tests over OAI-PMH GetRecord responses.

mod common;

use bioschemas_core::tree::parse_xml;
use bioschemas_core::{MappingError, Node, PartOf, Phase, map_record, map_xml};
use common::{get_oai_xml_test_case, get_oai_xml_test_cases, test_config};
use rstest::rstest;
use serde_json::json;
use tracing::info;

fn map_fixture(record_id: &str) -> bioschemas_core::MappedRecord {
    let test_case = get_oai_xml_test_case(record_id)
        .unwrap_or_else(|| panic!("Missing fixture {record_id}.xml"));
    let xml = test_case.read_xml_content_or_panic();
    map_xml(&xml, &test_config()).unwrap_or_else(|e| panic!("Failed to map {record_id}: {e}"))
}

#[test]
fn test_all_fixtures_map_without_panicking() {
    let test_cases = get_oai_xml_test_cases();
    assert!(!test_cases.is_empty(), "No OAI-PMH fixtures found");

    for test_case in test_cases {
        info!(filename = test_case.filename(), "Mapping fixture");
        let xml = test_case.read_xml_content_or_panic();
        let record = map_xml(&xml, &test_config()).unwrap();

        // every document serializes, whatever failed along the way
        let json_ld = record.document.to_json_ld().unwrap();
        assert!(json_ld.contains("\"@context\": \"http://schema.org\""));
    }
}

/// PMC3574553: PLoS ONE research article in JATS 1.3 with every id type,
/// two contrib-groups (authors + editor), a sectioned abstract, an issue and a
/// reference list mixing identified and unidentified entries.
#[test]
fn test_pmc3574553_full_document() {
    let record = map_fixture("PMC3574553");
    assert!(record.is_complete(), "failures: {:?}", record.failures);

    let value = serde_json::to_value(&record.document).unwrap();
    assert_eq!(
        value,
        json!({
            "@context": "http://schema.org",
            "@type": "CreativeWork",
            "@id": "https://biotea.github.io/bioschemas/PMC3574553",
            "identifier": "biotea:PMC3574553",
            "isBasedOn": "https://www.ncbi.nlm.nih.gov/pmc/oai/oai.cgi?verb=GetRecord&identifier=oai:pubmedcentral.nih.gov:3574553&metadataPrefix=pmc_fm",
            "dateCreated": "2019-03-01",
            "sdPublisher": "biotea",
            "creator": "http://biotea.github.io/agent/biotea_serializer",
            "sdLicense": "https://creativecommons.org/licenses/by/4.0/",
            "version": "2.0",
            "sameAs": [
                "http://bio2rdf.org/pubmed:23418600",
                "http://identifiers.org/pubmed/23418600"
            ],
            "mainEntity": {
                "@id": "https://doi.org/10.1371/journal.pone.0056554",
                "@type": "ScholarlyArticle",
                "identifier": "doi:10.1371/journal.pone.0056554",
                "url": "https://doi.org/10.1371/journal.pone.0056554",
                "alternateName": [
                    "pmcid:PMC3574553",
                    "pmc-uid:3574553",
                    "pmid:23418600",
                    "publisher-id:PONE-D-12-27316"
                ],
                "headline": "Expression of Hox Genes in the Developing Limb Bud",
                "license": "https://creativecommons.org/licenses/by/4.0/",
                "pageStart": "",
                "pageEnd": "",
                "datePublished": "2013-2-15",
                "backstory": "Background: Limb outgrowth depends on <5 signalling centres. Methods: We profiled expression across 12 stages. Conclusions: Expression is collinear. Timing differs between fore- and hindlimb. ",
                "author": [
                    {
                        "@type": "Person",
                        "givenName": "Lucia",
                        "familyName": "Moreno",
                        "name": "Lucia Moreno"
                    },
                    {
                        "@type": "Person",
                        "givenName": "Chidi E.",
                        "familyName": "Okafor",
                        "name": "Chidi E. Okafor"
                    }
                ],
                "sameAs": [
                    "http://www.ncbi.nlm.nih.gov/pmc/articles/PMC3574553",
                    "http://info.identifiers.org/pubmed/23418600",
                    "https://www.ncbi.nlm.nih.gov/pubmed/23418600"
                ],
                "isPartOf": {
                    "@type": "PublicationIssue",
                    "issueNumber": "2",
                    "isPartOf": {
                        "@type": "PublicationVolume",
                        "volumeNumber": "8",
                        "isPartOf": {
                            "@type": ["Periodical"],
                            "issn": ["1932-6203"],
                            "name": "PLoS ONE",
                            "publisher": {
                                "@type": "Organization",
                                "name": "Public Library of Science"
                            }
                        }
                    }
                },
                "citation": [
                    {
                        "@type": "ScholarlyArticle",
                        "@id": "https://doi.org/10.1038/nrm1830",
                        "url": "https://doi.org/10.1038/nrm1830",
                        "identifier": "doi:10.1038/nrm1830",
                        "alternateName": "pmid:16493412",
                        "sameAs": [
                            "http://info.identifiers.org/pubmed/16493412",
                            "https://www.ncbi.nlm.nih.gov/pubmed/16493412"
                        ]
                    },
                    {
                        "@type": "ScholarlyArticle",
                        "alternateName": "pmid:17709237",
                        "sameAs": [
                            "http://info.identifiers.org/pubmed/17709237",
                            "https://www.ncbi.nlm.nih.gov/pubmed/17709237"
                        ]
                    }
                ]
            }
        })
    );
}

/// PMC1143598: older record with a direct journal-title, two ISSNs, no
/// publisher, no issue, two print dates and a legacy `citation` element.
#[test]
fn test_pmc1143598_legacy_layout() {
    let record = map_fixture("PMC1143598");
    assert!(record.is_complete(), "failures: {:?}", record.failures);

    let entity = &record.document.main_entity;
    assert_eq!(entity.headline, "Stromal signals in mammary tumour progression");
    assert_eq!(entity.date_published, "2005");
    assert_eq!(entity.page_start, "R513");
    assert_eq!(entity.page_end, "R521");
    assert_eq!(entity.license, None);
    assert_eq!(entity.backstory, "Tumour stroma modulates invasion. ");
    assert_eq!(
        entity.same_as.first().map(String::as_str),
        Some("http://breast-cancer-research.com/content/7/4/R513")
    );

    let Some(PartOf::Volume(volume)) = &entity.is_part_of else {
        panic!("expected a bare volume, got {:?}", entity.is_part_of);
    };
    assert_eq!(volume.volume_number, "7");
    assert_eq!(volume.is_part_of.name, "Breast Cancer Research");
    assert_eq!(volume.is_part_of.issn, vec!["1465-5411", "1465-542X"]);

    let periodical = serde_json::to_value(&volume.is_part_of).unwrap();
    assert!(periodical.get("publisher").is_none());

    let citations = entity.citation.as_ref().unwrap();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].alternate_name.as_deref(), Some("pmid:11156394"));
    assert_eq!(citations[0].id, None);
}

#[test]
fn test_oai_error_response_keeps_defaults() {
    let record = map_fixture("idDoesNotExist");

    assert_eq!(record.failures.len(), 2);
    assert!(record.failures.iter().all(|failure| matches!(
        failure.error,
        MappingError::MissingStructure { .. }
    )));

    let entity = &record.document.main_entity;
    assert_eq!(entity.id, "https://doi.org/");
    assert_eq!(entity.identifier, "doi:");
    assert!(entity.author.is_empty());
    assert!(entity.citation.is_none());
    assert_eq!(record.document.identifier, "biotea:");
    assert_eq!(record.document.date_created, "");
}

#[test]
fn test_documents_are_independent() {
    let first = map_fixture("PMC3574553");
    let second = map_fixture("PMC1143598");

    assert_ne!(first.document.main_entity.author, second.document.main_entity.author);
    assert_eq!(second.document.main_entity.author.len(), 1);
    assert!(
        !second
            .document
            .main_entity
            .alternate_name
            .iter()
            .any(|name| name.contains("3574553"))
    );

    // mapping again yields an identical document
    assert_eq!(map_fixture("PMC3574553").document, first.document);
}

#[rstest]
#[case::missing_front("<OAI-PMH><GetRecord><record><metadata><article/></metadata></record></GetRecord></OAI-PMH>", Phase::FrontMatter)]
#[case::missing_article_meta(
    "<article><front><journal-meta><journal-title>J</journal-title></journal-meta></front></article>",
    Phase::FrontMatter
)]
fn test_front_matter_failures(#[case] xml: &str, #[case] phase: Phase) {
    let record = map_xml(xml, &test_config()).unwrap();
    assert_eq!(record.failures.len(), 1);
    assert_eq!(record.failures[0].phase, phase);
}

#[test]
fn test_malformed_xml_is_an_error() {
    let result = map_xml("<OAI-PMH><GetRecord></OAI-PMH>", &test_config());
    assert!(matches!(result, Err(MappingError::Xml(_))));
}

#[test]
fn test_parsed_tree_round_trips_through_json() {
    let xml = get_oai_xml_test_case("PMC1143598")
        .unwrap()
        .read_xml_content_or_panic();
    let tree = parse_xml(&xml).unwrap();

    let json = serde_json::to_string(&tree).unwrap();
    let reloaded: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, reloaded);
    assert_eq!(
        map_record(&reloaded, &test_config()).document,
        map_record(&tree, &test_config()).document
    );
}

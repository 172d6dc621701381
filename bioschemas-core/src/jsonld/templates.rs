//! Default documents every mapping run starts from.
//!
//! Each factory returns a new owned value, so no two documents (or two
//! entries within one document) ever share state.

use super::models::{
    Citation, CreativeWork, Organization, Periodical, Person, PublicationIssue, PublicationVolume,
    ScholarlyArticle,
};

pub const SCHEMA_CONTEXT: &str = "http://schema.org";
pub const METADATA_ID_PREFIX: &str = "biotea:";
pub const CREATOR: &str = "http://biotea.github.io/agent/biotea_serializer";
pub const SD_LICENSE: &str = "https://creativecommons.org/licenses/by/4.0/";
pub const DOI_RESOLVER: &str = "https://doi.org/";
pub const DOI_PREFIX: &str = "doi:";

pub fn creative_work() -> CreativeWork {
    CreativeWork {
        context: SCHEMA_CONTEXT.to_string(),
        kind: "CreativeWork".to_string(),
        id: None,
        identifier: METADATA_ID_PREFIX.to_string(),
        is_based_on: String::new(),
        date_created: String::new(),
        sd_publisher: String::new(),
        creator: CREATOR.to_string(),
        sd_license: SD_LICENSE.to_string(),
        version: String::new(),
        same_as: Vec::new(),
        main_entity: scholarly_article(),
    }
}

pub fn scholarly_article() -> ScholarlyArticle {
    ScholarlyArticle {
        id: DOI_RESOLVER.to_string(),
        kind: "ScholarlyArticle".to_string(),
        identifier: DOI_PREFIX.to_string(),
        url: DOI_RESOLVER.to_string(),
        alternate_name: Vec::new(),
        headline: String::new(),
        license: None,
        page_start: String::new(),
        page_end: String::new(),
        date_published: String::new(),
        backstory: String::new(),
        author: Vec::new(),
        same_as: Vec::new(),
        is_part_of: None,
        citation: None,
    }
}

pub fn person() -> Person {
    Person {
        kind: "Person".to_string(),
        given_name: String::new(),
        family_name: String::new(),
        name: String::new(),
    }
}

pub fn publication_issue(volume: PublicationVolume) -> PublicationIssue {
    PublicationIssue {
        kind: "PublicationIssue".to_string(),
        issue_number: String::new(),
        is_part_of: volume,
    }
}

pub fn publication_volume() -> PublicationVolume {
    PublicationVolume {
        kind: "PublicationVolume".to_string(),
        volume_number: String::new(),
        is_part_of: Periodical {
            kind: vec!["Periodical".to_string()],
            issn: Vec::new(),
            name: String::new(),
            publisher: Some(organization()),
        },
    }
}

pub fn organization() -> Organization {
    Organization {
        kind: "Organization".to_string(),
        name: String::new(),
    }
}

pub fn citation() -> Citation {
    Citation {
        kind: "ScholarlyArticle".to_string(),
        id: None,
        url: None,
        identifier: None,
        alternate_name: None,
        same_as: None,
    }
}

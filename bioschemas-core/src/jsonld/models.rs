use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metadata record describing one article (the top-level JSON-LD document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeWork {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    /// Metadata record id, set only when an id template is configured
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub identifier: String,
    /// OAI-PMH GetRecord URL of the source record
    #[serde(rename = "isBasedOn")]
    pub is_based_on: String,
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    #[serde(rename = "sdPublisher")]
    pub sd_publisher: String,
    pub creator: String,
    #[serde(rename = "sdLicense")]
    pub sd_license: String,
    pub version: String,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
    #[serde(rename = "mainEntity")]
    pub main_entity: ScholarlyArticle,
}

/// The article itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarlyArticle {
    /// DOI resolver URI
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: String,
    /// `doi:<id>`
    pub identifier: String,
    pub url: String,
    /// `<type>:<value>` tags for every non-DOI identifier
    #[serde(rename = "alternateName")]
    pub alternate_name: Vec<String>,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(rename = "pageStart")]
    pub page_start: String,
    #[serde(rename = "pageEnd")]
    pub page_end: String,
    /// `<year>-<month>-<day>` exactly as given in the source
    #[serde(rename = "datePublished")]
    pub date_published: String,
    /// Flattened abstract text
    pub backstory: String,
    pub author: Vec<Person>,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
    #[serde(rename = "isPartOf", default, skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<PartOf>,
    /// Present once a reference list has been mapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<Vec<Citation>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    pub name: String,
}

/// The publication venue an article belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartOf {
    Issue(PublicationIssue),
    Volume(PublicationVolume),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationIssue {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "issueNumber")]
    pub issue_number: String,
    #[serde(rename = "isPartOf")]
    pub is_part_of: PublicationVolume,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationVolume {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "volumeNumber")]
    pub volume_number: String,
    #[serde(rename = "isPartOf")]
    pub is_part_of: Periodical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periodical {
    #[serde(rename = "@type")]
    pub kind: Vec<String>,
    pub issn: Vec<String>,
    pub name: String,
    /// Omitted entirely when the journal metadata names no publisher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Organization>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

/// A cited work, identified by DOI and/or PMID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "alternateName", default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(rename = "sameAs", default, skip_serializing_if = "Option::is_none")]
    pub same_as: Option<Vec<String>>,
}

impl Citation {
    /// Whether any identifier-derived field has been filled in
    pub fn is_identified(&self) -> bool {
        self.id.is_some() || self.alternate_name.is_some()
    }
}

impl PartOf {
    /// The volume, whether bare or wrapped in an issue
    pub fn volume(&self) -> &PublicationVolume {
        match self {
            PartOf::Issue(issue) => &issue.is_part_of,
            PartOf::Volume(volume) => volume,
        }
    }
}

impl CreativeWork {
    /// Pretty-printed JSON-LD
    pub fn to_json_ld(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON-LD wrapped in a `<script type="application/ld+json">` element,
    /// ready to embed in an HTML page
    pub fn to_script_tag(&self) -> Result<String> {
        // `</` inside a string would terminate the script element early
        let json = self.to_json_ld()?.replace("</", "<\\/");
        Ok(format!(
            "<script type=\"application/ld+json\">\n{json}\n</script>"
        ))
    }
}

//! Article-level fields from `article-meta`

use tracing::debug;

use super::author::map_authors;
use super::identifier::classify_identifier;
use super::text::normalize_text;
use crate::config::MapperConfig;
use crate::jsonld::CreativeWork;
use crate::tree::Node;

const XLINK_HREF_ATTR: &str = "xlink:href";

/// Publication date kinds that can feed `datePublished`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubDateKind {
    /// Electronic publication, always preferred
    Electronic,
    /// Print publication, used when no electronic date exists
    Print,
}

impl PubDateKind {
    /// Kind of a `pub-date` element, from `pub-type` or, in JATS 1.1+ records,
    /// from `publication-format`
    pub fn of(pub_date: &Node) -> Option<Self> {
        match pub_date.attr("pub-type") {
            Some("epub") => Some(PubDateKind::Electronic),
            Some("ppub") => Some(PubDateKind::Print),
            Some(_) => None,
            None => match pub_date.attr("publication-format") {
                Some("electronic") => Some(PubDateKind::Electronic),
                Some("print") => Some(PubDateKind::Print),
                _ => None,
            },
        }
    }
}

/// Fill the metadata header and the article fields of `doc` from `article-meta`.
///
/// Absent parts of `article-meta` leave the corresponding template defaults in
/// place.
pub fn map_article(article_meta: &Node, doc: &mut CreativeWork, config: &MapperConfig) {
    doc.date_created = config.date_created_iso();
    doc.sd_publisher = config.publisher.clone();
    doc.version = config.version.clone();

    let entity = &mut doc.main_entity;
    match article_meta.path(&["title-group", "article-title"]) {
        Some(title) => {
            entity.headline = title
                .as_list()
                .iter()
                .find_map(Node::text)
                .unwrap_or_default()
                .to_string();
        }
        None => debug!("article-meta has no article title"),
    }

    entity.license = article_meta
        .get("permissions")
        .and_then(|permissions| permissions.get("license"))
        .and_then(|license| {
            license
                .as_list()
                .iter()
                .find_map(|l| l.attr(XLINK_HREF_ATTR))
        })
        .map(str::to_string);

    if let Some(fpage) = article_meta.child_text("fpage") {
        entity.page_start = fpage.to_string();
    }
    if let Some(lpage) = article_meta.child_text("lpage") {
        entity.page_end = lpage.to_string();
    }

    if let Some(links) = article_meta.get("ext-link") {
        entity.same_as.extend(
            links
                .as_list()
                .iter()
                .filter_map(|link| link.attr(XLINK_HREF_ATTR))
                .map(str::to_string),
        );
    }

    match article_meta.get("article-id") {
        Some(ids) => {
            for id in ids.as_list() {
                classify_identifier(id, doc, config);
            }
        }
        None => debug!("article-meta has no article-id"),
    }

    let entity = &mut doc.main_entity;
    if let Some(date) = article_meta.get("pub-date").and_then(select_publication_date) {
        entity.date_published = date;
    }

    if let Some(groups) = article_meta.get("contrib-group") {
        for group in groups.as_list() {
            entity.author.extend(map_authors(group));
        }
    }

    if let Some(abstract_node) = article_meta.get("abstract") {
        entity.backstory.push_str(&map_abstract(abstract_node));
    }
}

/// Pick the publication date among one or many `pub-date` elements.
///
/// The first electronic date wins outright; otherwise the first print date.
/// Components are joined as `year-month-day` exactly as written in the source;
/// missing components are left out.
pub fn select_publication_date(pub_dates: &Node) -> Option<String> {
    let mut selected = None;
    for pub_date in pub_dates.as_list() {
        match PubDateKind::of(pub_date) {
            Some(PubDateKind::Electronic) => return Some(format_date(pub_date)),
            Some(PubDateKind::Print) if selected.is_none() => {
                selected = Some(format_date(pub_date));
            }
            _ => {}
        }
    }
    selected
}

fn format_date(pub_date: &Node) -> String {
    ["year", "month", "day"]
        .iter()
        .filter_map(|part| pub_date.child_text(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Flatten one or many `abstract` elements into text.
///
/// Sectioned abstracts prefix each section with `"<title>: "`.
pub fn map_abstract(abstract_node: &Node) -> String {
    let mut backstory = String::new();
    for abstract_part in abstract_node.as_list() {
        let Some(sections) = abstract_part.get("sec") else {
            backstory.push_str(&normalize_text(Some(abstract_part)));
            continue;
        };

        for section in sections.as_list() {
            if let Some(title) = section.child_text("title") {
                backstory.push_str(title);
                backstory.push_str(": ");
            }
            backstory.push_str(&normalize_text(section.get("p")));
        }
    }
    backstory
}

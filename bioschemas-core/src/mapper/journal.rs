//! Journal / venue structure: Periodical ← Volume ← (optional) Issue

use crate::jsonld::{PartOf, templates};
use crate::tree::Node;

/// Build the venue an article is part of.
///
/// The volume number and issue number come from `article-meta`; the periodical
/// (title, ISSNs, publisher) from `journal-meta`. The volume is wrapped in an
/// issue only when the article names an issue.
pub fn map_journal(article_meta: &Node, journal_meta: &Node) -> PartOf {
    let mut volume = templates::publication_volume();
    volume.volume_number = article_meta
        .child_text("volume")
        .unwrap_or_default()
        .to_string();

    let periodical = &mut volume.is_part_of;
    periodical.name = journal_title(journal_meta).unwrap_or_default().to_string();
    periodical.issn = journal_meta
        .get("issn")
        .map(|issn| {
            issn.as_list()
                .iter()
                .filter_map(Node::text)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    match journal_meta.get("publisher") {
        Some(publisher) => {
            if let Some(organization) = periodical.publisher.as_mut() {
                organization.name = publisher
                    .as_list()
                    .first()
                    .and_then(|p| p.child_text("publisher-name"))
                    .unwrap_or_default()
                    .to_string();
            }
        }
        None => periodical.publisher = None,
    }

    match article_meta
        .child_text("issue")
        .filter(|issue_number| !issue_number.is_empty())
    {
        Some(issue_number) => {
            let mut issue = templates::publication_issue(volume);
            issue.issue_number = issue_number.to_string();
            PartOf::Issue(issue)
        }
        None => PartOf::Volume(volume),
    }
}

/// `journal-title` directly under `journal-meta` (older records), otherwise the
/// first title inside `journal-title-group`
fn journal_title(journal_meta: &Node) -> Option<&str> {
    if let Some(title) = journal_meta.get("journal-title") {
        return title.as_list().first().and_then(Node::text);
    }
    journal_meta
        .get("journal-title-group")?
        .as_list()
        .iter()
        .filter_map(|group| group.get("journal-title"))
        .flat_map(Node::as_list)
        .find_map(Node::text)
}

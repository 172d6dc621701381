use tracing::debug;

use crate::jsonld::{Person, templates};
use crate::tree::Node;

const CONTRIB_TYPE_ATTR: &str = "contrib-type";
const AUTHOR_CONTRIB_TYPE: &str = "author";

/// Extract authors from one `contrib-group`.
///
/// The group may hold a single `contrib` or a list of them. Contributors of any
/// type other than `author` (editors, reviewers) and contributors without a
/// personal `name` (group authorship) are skipped. Source order is kept.
pub fn map_authors(contrib_group: &Node) -> Vec<Person> {
    let Some(contribs) = contrib_group.get("contrib") else {
        return Vec::new();
    };

    contribs
        .as_list()
        .iter()
        .filter_map(|contrib| {
            if contrib.attr(CONTRIB_TYPE_ATTR) != Some(AUTHOR_CONTRIB_TYPE) {
                debug!(
                    contrib_type = ?contrib.attr(CONTRIB_TYPE_ATTR),
                    "Skipping non-author contributor"
                );
                return None;
            }
            let person = create_person(contrib);
            if person.is_none() {
                debug!("Skipping author without a personal name");
            }
            person
        })
        .collect()
}

fn create_person(contrib: &Node) -> Option<Person> {
    // a contributor may carry alternative name forms; the first one wins
    let name = contrib.get("name")?.as_list().first()?;

    let mut person = templates::person();
    person.given_name = name.child_text("given-names").unwrap_or_default().to_string();
    person.family_name = name.child_text("surname").unwrap_or_default().to_string();
    person.name = [person.given_name.as_str(), person.family_name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    Some(person)
}

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::institution::Institution;
use crate::domain::moves::Move;

pub const CLUBS_SOCIETIES: &str = "clubs-societies";
const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

// Everything but A-Z a-z 0-9 - _ . ! ~ * ' ( ) is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Link shown on a task. Clubs get a maps search near the new postcode;
/// everything else uses the catalog link (or nothing).
pub fn task_link(institution: &Institution, mv: &Move) -> String {
    if institution.id == CLUBS_SOCIETIES {
        return clubs_search_url(&mv.clubs_prefs.interests, &mv.new_postcode);
    }
    institution.link.clone().unwrap_or_default()
}

pub fn clubs_search_url(interests: &str, postcode: &str) -> String {
    let query = if interests.is_empty() {
        format!("clubs near {postcode}")
    } else {
        format!("{interests} near {postcode}")
    };
    format!(
        "{MAPS_SEARCH_BASE}{}",
        utf8_percent_encode(&query, URI_COMPONENT)
    )
}

//! Static registry of scenes recognized by the remote.

use crate::report::SceneCode;

/// Scenes reported by the hardware and their canonical gesture names.
///
/// The table is fixed by the remote's firmware, all based on reported
/// data. Codes outside of it are valid reports that carry no gesture.
pub const SCENES: [(SceneCode, &str); 3] = [
    (0, "Key Held Down"),
    (1, "Key Pressed 1 time"),
    (2, "Key Pressed 2 times"),
];

/// Single entry offered to the autocomplete consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Suggestion {
    /// Canonical gesture name, stable across locales.
    pub id: &'static str,
    /// Localized gesture name the entry was matched on.
    pub name: &'static str,
}

/// Look up the gesture name of a scene code.
#[must_use]
pub fn gesture(code: SceneCode) -> Option<&'static str> {
    SCENES
        .iter()
        .find(|(scene, _)| *scene == code)
        .map(|(_, name)| *name)
}

/// Enumerate catalog entries matching a free-text query.
///
/// Names are run through the caller's localization before matching. The
/// match is a case-insensitive substring search and an empty query matches
/// every entry. Entries come out lazily in catalog order and the iterator
/// can be consumed only once.
pub fn autocomplete<'a, F>(query: &'a str, localize: F) -> impl Iterator<Item = Suggestion> + 'a
where
    F: Fn(&'static str) -> &'static str + 'a,
{
    SCENES.iter().filter_map(move |&(_, name)| {
        let localized = localize(name);
        contains_ignore_ascii_case(localized, query).then_some(Suggestion {
            id: name,
            name: localized,
        })
    })
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

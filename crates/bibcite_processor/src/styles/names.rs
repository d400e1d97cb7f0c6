/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Name forms and name-list rules for each style.

use bibcite_core::Author;

/// APA keeps the first 19 names of a long list, then an ellipsis, then the
/// final name.
pub const APA_MAX_NAMES: usize = 20;
const APA_KEPT_BEFORE_ELLIPSIS: usize = 19;

/// Chicago lists up to ten names in full; longer lists keep seven.
const CHICAGO_MAX_NAMES: usize = 10;
const CHICAGO_KEPT_BEFORE_ET_AL: usize = 7;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Jean-Paul Marie` -> `J.-P. M.`
pub fn initials(given: &str) -> String {
    given
        .split_whitespace()
        .map(|token| {
            token
                .split('-')
                .filter_map(|part| part.trim_matches('.').chars().next())
                .map(|c| format!("{}.", c.to_uppercase()))
                .collect::<Vec<_>>()
                .join("-")
        })
        .filter(|initial| !initial.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Family, I. I.`
pub fn apa_name(author: &Author) -> String {
    if let Some(literal) = author.literal() {
        return literal.to_string();
    }
    match (author.given(), author.family()) {
        (Some(given), Some(family)) => {
            let initials = initials(given);
            if initials.is_empty() {
                capitalize(family)
            } else {
                format!("{}, {}", capitalize(family), initials)
            }
        }
        (Some(given), None) => given.to_string(),
        (None, Some(family)) => capitalize(family),
        (None, None) => String::new(),
    }
}

/// `Family, Given`
pub fn inverted_name(author: &Author) -> String {
    match (author.given(), author.family()) {
        (Some(given), Some(family)) => format!("{}, {}", family, given),
        _ => author.to_string(),
    }
}

/// The surname used in short citations.
pub fn short_name(author: &Author) -> String {
    author.family_or_literal().to_string()
}

/// `A, B, & C`, or for 21 or more names the first 19, `...`, and the last.
pub fn apa_author_list(authors: &[&Author]) -> String {
    let names: Vec<String> = authors.iter().map(|a| apa_name(a)).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] if names.len() <= APA_MAX_NAMES => {
            format!("{}, & {}", rest.join(", "), last)
        }
        [.., last] => format!(
            "{}, ... {}",
            names[..APA_KEPT_BEFORE_ELLIPSIS].join(", "),
            last
        ),
    }
}

/// `Family, Given`, `Family, Given, and Given Family`, `Family, Given, et al.`
pub fn mla_author_list(authors: &[&Author]) -> String {
    match authors {
        [] => String::new(),
        [only] => inverted_name(only),
        [first, second] => format!("{}, and {}", inverted_name(first), second),
        [first, ..] => format!("{}, et al.", inverted_name(first)),
    }
}

/// First name inverted, the rest in natural order, `, and` before the last.
pub fn chicago_author_list(authors: &[&Author]) -> String {
    let mut names: Vec<String> = Vec::with_capacity(authors.len());
    for (index, author) in authors.iter().enumerate() {
        if index == 0 {
            names.push(inverted_name(author));
        } else {
            names.push(author.to_string());
        }
    }
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        _ if names.len() > CHICAGO_MAX_NAMES => {
            format!("{}, et al.", names[..CHICAGO_KEPT_BEFORE_ET_AL].join(", "))
        }
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// In-text name forms: `A`, `A & B` (APA) or `A and B`, `A et al.`.
pub fn intext_names(authors: &[&Author], conjunction: &str, et_al_from: usize) -> String {
    let names: Vec<String> = authors.iter().map(|a| short_name(a)).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        _ if names.len() >= et_al_from => format!("{} et al.", names[0]),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        [rest @ .., last] => format!("{}, {} {}", rest.join(", "), conjunction, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibcite_core::build_authors;

    fn refs(authors: &[Author]) -> Vec<&Author> {
        authors.iter().collect()
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Isaac"), "I.");
        assert_eq!(initials("john ronald reuel"), "J. R. R.");
        assert_eq!(initials("Jean-Paul"), "J.-P.");
        assert_eq!(initials("A. B."), "A. B.");
    }

    #[test]
    fn test_apa_name_forms() {
        assert_eq!(apa_name(&Author::person("Isaac", "Newton")), "Newton, I.");
        assert_eq!(apa_name(&Author::person("ludwig", "van beethoven")), "Van beethoven, L.");
        assert_eq!(apa_name(&Author::organization("World Health Organization")), "World Health Organization");
        assert_eq!(apa_name(&Author::person("Plato", "")), "Plato");
    }

    #[test]
    fn test_apa_lists() {
        let two = build_authors(&["Ada Lovelace", "Charles Babbage"]);
        assert_eq!(apa_author_list(&refs(&two)), "Lovelace, A., & Babbage, C.");

        let three = build_authors(&["A One", "B Two", "C Three"]);
        assert_eq!(apa_author_list(&refs(&three)), "One, A., Two, B., & Three, C.");
    }

    #[test]
    fn test_apa_twenty_and_twenty_one() {
        let names: Vec<String> = (1..=21).map(|i| format!("G Author{}", i)).collect();
        let authors = build_authors(&names);

        let twenty = apa_author_list(&refs(&authors[..20]));
        assert!(twenty.ends_with("& Author20, G."));
        assert!(!twenty.contains("..."));

        let twenty_one = apa_author_list(&refs(&authors));
        assert!(twenty_one.contains("Author19, G., ... Author21, G."));
        assert!(!twenty_one.contains("Author20"));
        assert!(!twenty_one.contains('&'));
    }

    #[test]
    fn test_mla_lists() {
        let authors = build_authors(&["Ada Lovelace", "Charles Babbage", "Mary Somerville"]);
        assert_eq!(mla_author_list(&refs(&authors[..1])), "Lovelace, Ada");
        assert_eq!(
            mla_author_list(&refs(&authors[..2])),
            "Lovelace, Ada, and Charles Babbage"
        );
        assert_eq!(mla_author_list(&refs(&authors)), "Lovelace, Ada, et al.");
    }

    #[test]
    fn test_chicago_lists() {
        let authors = build_authors(&["Ada Lovelace", "Charles Babbage", "Mary Somerville"]);
        assert_eq!(
            chicago_author_list(&refs(&authors)),
            "Lovelace, Ada, Charles Babbage, and Mary Somerville"
        );
        assert_eq!(
            chicago_author_list(&refs(&authors[..2])),
            "Lovelace, Ada, and Charles Babbage"
        );

        let names: Vec<String> = (1..=11).map(|i| format!("G Author{}", i)).collect();
        let many = build_authors(&names);
        let list = chicago_author_list(&refs(&many));
        assert!(list.ends_with("G Author7, et al."));
    }

    #[test]
    fn test_intext_names() {
        let authors = build_authors(&["Ada Lovelace", "Charles Babbage", "Mary Somerville"]);
        assert_eq!(intext_names(&refs(&authors[..2]), "&", 3), "Lovelace & Babbage");
        assert_eq!(intext_names(&refs(&authors), "and", 4), "Lovelace, Babbage, and Somerville");
        assert_eq!(intext_names(&refs(&authors), "and", 3), "Lovelace et al.");
    }
}

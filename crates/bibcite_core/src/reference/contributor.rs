/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A person or organization credited on a work.
///
/// The `id` only keys list entries in a user interface; formatting never
/// looks at it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Author {
    #[serde(flatten)]
    pub name: AuthorName,
    #[serde(default = "new_author_id", deserialize_with = "lenient_id")]
    pub id: String,
}

/// The name part of an [`Author`].
///
/// Organizations carry a single `literal`; provider payloads that use `name`
/// for organizations are accepted as well.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum AuthorName {
    Organization {
        #[serde(alias = "name")]
        literal: String,
    },
    Person {
        #[serde(default, alias = "firstName", deserialize_with = "lenient_name")]
        given: String,
        #[serde(default, alias = "lastName", deserialize_with = "lenient_name")]
        family: String,
    },
}

pub fn new_author_id() -> String {
    nanoid::nanoid!()
}

// Name parts and ids arrive as strings, numbers or nulls depending on the
// provider. A null name part reads as blank; a null id gets a fresh one.
fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_text(value).unwrap_or_default())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_text(value)
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(new_author_id))
}

impl Author {
    pub fn person(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            name: AuthorName::Person {
                given: given.into(),
                family: family.into(),
            },
            id: new_author_id(),
        }
    }

    pub fn organization(literal: impl Into<String>) -> Self {
        Self {
            name: AuthorName::Organization {
                literal: literal.into(),
            },
            id: new_author_id(),
        }
    }

    /// Keep the name, replace the id.
    pub fn with_fresh_id(mut self) -> Self {
        self.id = new_author_id();
        self
    }

    pub fn given(&self) -> Option<&str> {
        match &self.name {
            AuthorName::Person { given, .. } if !given.trim().is_empty() => Some(given.trim()),
            _ => None,
        }
    }

    pub fn family(&self) -> Option<&str> {
        match &self.name {
            AuthorName::Person { family, .. } if !family.trim().is_empty() => Some(family.trim()),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match &self.name {
            AuthorName::Organization { literal } if !literal.trim().is_empty() => {
                Some(literal.trim())
            }
            _ => None,
        }
    }

    /// The name used for sorting and short citations.
    pub fn family_or_literal(&self) -> &str {
        self.family()
            .or_else(|| self.literal())
            .or_else(|| self.given())
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.family_or_literal().is_empty()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.given(), self.family()) {
            (AuthorName::Organization { literal }, _, _) => write!(f, "{}", literal.trim()),
            (_, Some(given), Some(family)) => write!(f, "{} {}", given, family),
            (_, Some(given), None) => write!(f, "{}", given),
            (_, None, Some(family)) => write!(f, "{}", family),
            _ => Ok(()),
        }
    }
}

/// Build author records from free-text full names.
///
/// The first whitespace-separated token becomes the given name and the rest
/// the family name. Blank names still produce a record so the result lines
/// up index-for-index with the input.
pub fn build_authors<S: AsRef<str>>(full_names: &[S]) -> Vec<Author> {
    full_names
        .iter()
        .map(|full_name| {
            let mut tokens = full_name.as_ref().split_whitespace();
            let given = tokens.next().unwrap_or_default();
            let family = tokens.collect::<Vec<_>>().join(" ");
            Author::person(given, family)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_authors_splits_first_token() {
        let authors = build_authors(&["Isaac Newton", "Ludwig van Beethoven"]);
        assert_eq!(authors[0].given(), Some("Isaac"));
        assert_eq!(authors[0].family(), Some("Newton"));
        assert_eq!(authors[1].given(), Some("Ludwig"));
        assert_eq!(authors[1].family(), Some("van Beethoven"));
        assert_ne!(authors[0].id, authors[1].id);
    }

    #[test]
    fn test_build_authors_keeps_blank_entries() {
        let authors = build_authors(&["Plato", "   ", ""]);
        assert_eq!(authors.len(), 3);
        assert_eq!(authors[0].given(), Some("Plato"));
        assert_eq!(authors[0].family(), None);
        assert!(authors[1].is_empty());
        assert_eq!(
            authors[2].name,
            AuthorName::Person {
                given: String::new(),
                family: String::new()
            }
        );
    }

    #[test]
    fn test_build_authors_collapses_inner_whitespace() {
        let authors = build_authors(&["  Mary\t Wollstonecraft   Shelley "]);
        assert_eq!(authors[0].family(), Some("Wollstonecraft Shelley"));
    }

    #[test]
    fn test_deserialize_person_and_organization() {
        let person: Author =
            serde_json::from_str(r#"{"given": "Jane", "family": "Doe", "sequence": "first"}"#)
                .unwrap();
        assert_eq!(person.family(), Some("Doe"));
        assert!(!person.id.is_empty());

        let org: Author = serde_json::from_str(r#"{"literal": "World Health Organization", "id": "x1"}"#)
            .unwrap();
        assert_eq!(org.literal(), Some("World Health Organization"));
        assert_eq!(org.id, "x1");

        let legacy: Author =
            serde_json::from_str(r#"{"firstName": "Isaac", "lastName": "Newton"}"#).unwrap();
        assert_eq!(legacy.to_string(), "Isaac Newton");
    }

    #[test]
    fn test_deserialize_nulls_and_numeric_ids() {
        let author: Author =
            serde_json::from_str(r#"{"given": null, "family": "Plato", "id": 7}"#).unwrap();
        assert_eq!(author.given(), None);
        assert_eq!(author.family(), Some("Plato"));
        assert_eq!(author.id, "7");

        let author: Author =
            serde_json::from_str(r#"{"given": "Ada", "family": null, "id": null}"#).unwrap();
        assert_eq!(author.given(), Some("Ada"));
        assert_eq!(author.family(), None);
        assert!(!author.id.is_empty());
    }
}

//! Item catalog and exception lists as handed over by the catalog source.
//!
//! Upstream documents are not validated, so parsing is lenient: a bad value
//! becomes 0, an unknown rarity becomes [`Rarity::Unranked`], and a missing
//! exception list is simply empty.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::entities::{Item, Rarity};
use super::valuation::{sanitize_base_value, ExceptionFlags};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching the picker's rarity filter and search text, in catalog order.
    pub fn filter<'a>(&'a self, filter: &'a CatalogFilter) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| filter.matches(item))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// `None` shows every rarity.
    pub rarity: Option<Rarity>,
    pub query: String,
}

impl CatalogFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(rarity) = self.rarity {
            if item.rarity != rarity {
                return false;
            }
        }
        let query = self.query.trim();
        query.is_empty() || item.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Name sets overriding the default modifier split. Lookups are
/// case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExceptionSets {
    full_value: HashSet<String>,
    eighty_twenty: HashSet<String>,
}

impl ExceptionSets {
    pub fn new<F, E>(full_value: F, eighty_twenty: E) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            full_value: full_value
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
            eighty_twenty: eighty_twenty
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> ExceptionFlags {
        let key = name.to_lowercase();
        ExceptionFlags {
            full_value: self.full_value.contains(&key),
            eighty_twenty: self.eighty_twenty.contains(&key),
        }
    }

    pub fn full_value_count(&self) -> usize {
        self.full_value.len()
    }

    pub fn eighty_twenty_count(&self) -> usize {
        self.eighty_twenty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full_value.is_empty() && self.eighty_twenty.is_empty()
    }

    pub fn to_document(&self) -> ExceptionsDocument {
        let mut full: Vec<String> = self.full_value.iter().cloned().collect();
        let mut eighty_twenty: Vec<String> = self.eighty_twenty.iter().cloned().collect();
        full.sort();
        eighty_twenty.sort();
        ExceptionsDocument {
            exceptions_full: full,
            exceptions_80_20: eighty_twenty,
        }
    }
}

/// Wire shape of the exceptions file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExceptionsDocument {
    #[serde(default, deserialize_with = "lenient_names")]
    pub exceptions_full: Vec<String>,
    #[serde(default, deserialize_with = "lenient_names")]
    pub exceptions_80_20: Vec<String>,
}

impl From<ExceptionsDocument> for ExceptionSets {
    fn from(doc: ExceptionsDocument) -> Self {
        ExceptionSets::new(doc.exceptions_full, doc.exceptions_80_20)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    items: Vec<CatalogEntryDto>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntryDto {
    name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    value: f64,
    #[serde(default)]
    rarity: Option<String>,
}

impl From<CatalogEntryDto> for Item {
    fn from(dto: CatalogEntryDto) -> Self {
        Item {
            name: dto.name,
            value: sanitize_base_value(dto.value),
            rarity: dto
                .rarity
                .as_deref()
                .map(Rarity::parse)
                .unwrap_or(Rarity::Unranked),
        }
    }
}

pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    Ok(Catalog::new(
        document.items.into_iter().map(Item::from).collect(),
    ))
}

pub fn parse_exceptions(json: &str) -> Result<ExceptionSets, CatalogError> {
    let document: ExceptionsDocument = serde_json::from_str(json)?;
    Ok(document.into())
}

/// Accepts numbers and numeric strings; anything else is 0.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or_default(),
        _ => 0.0,
    })
}

/// A list that is not an array is ignored; non-string entries are dropped.
fn lenient_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_leniently() {
        let json = r#"{
            "items": [
                {"name": "Ember Staff", "value": 120, "rarity": "Legendary"},
                {"name": "Old Boot", "value": "15", "rarity": "common"},
                {"name": "Broken Idol", "value": "n/a", "rarity": "epic"},
                {"name": "Cursed Coin", "value": -4, "rarity": "mythic"},
                {"name": "Mystery Box", "value": 9}
            ]
        }"#;
        let catalog = parse_catalog(json).expect("catalog parses");
        let items = catalog.items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], Item::new("Ember Staff", 120.0, Rarity::Legendary));
        assert_eq!(items[1].value, 15.0);
        assert_eq!(items[2].value, 0.0);
        assert_eq!(items[3].value, 0.0);
        assert_eq!(items[3].rarity, Rarity::Unranked);
        assert_eq!(items[4].rarity, Rarity::Unranked);
    }

    #[test]
    fn missing_items_key_is_an_empty_catalog() {
        let catalog = parse_catalog("{}").expect("empty document parses");
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn exception_lookup_ignores_case() {
        let sets = parse_exceptions(
            r#"{"exceptions_full": ["Golden Crown"], "exceptions_80_20": ["silver RING"]}"#,
        )
        .expect("exceptions parse");
        assert!(sets.lookup("golden crown").full_value);
        assert!(sets.lookup("GOLDEN CROWN").full_value);
        assert!(sets.lookup("Silver Ring").eighty_twenty);
        assert_eq!(sets.lookup("Old Boot"), ExceptionFlags::default());
    }

    #[test]
    fn exception_lists_of_wrong_shape_are_ignored() {
        let sets = parse_exceptions(r#"{"exceptions_full": "Golden Crown", "exceptions_80_20": [1, "Ring"]}"#)
            .expect("exceptions parse");
        assert_eq!(sets.full_value_count(), 0);
        assert_eq!(sets.eighty_twenty_count(), 1);
        assert!(sets.lookup("ring").eighty_twenty);
    }

    #[test]
    fn missing_lists_mean_default_rules_only() {
        let sets = parse_exceptions("{}").expect("empty document parses");
        assert!(sets.is_empty());
        assert!(!ExceptionSets::new(Vec::<String>::new(), ["Ring"]).is_empty());
    }

    #[test]
    fn filter_combines_rarity_and_search() {
        let catalog = Catalog::new(vec![
            Item::new("Ember Staff", 120.0, Rarity::Legendary),
            Item::new("Ember Shard", 4.0, Rarity::Common),
            Item::new("Frost Staff", 60.0, Rarity::Epic),
        ]);

        let by_text = CatalogFilter {
            rarity: None,
            query: "STAFF".into(),
        };
        let names: Vec<&str> = catalog.filter(&by_text).map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Ember Staff", "Frost Staff"]);

        let by_both = CatalogFilter {
            rarity: Some(Rarity::Common),
            query: "ember".into(),
        };
        let names: Vec<&str> = catalog.filter(&by_both).map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Ember Shard"]);

        assert_eq!(catalog.filter(&CatalogFilter::default()).count(), 3);
    }

    #[test]
    fn document_round_trip_keeps_names() {
        let sets = ExceptionSets::new(["B", "a"], ["C"]);
        let doc = sets.to_document();
        assert_eq!(doc.exceptions_full, ["a", "b"]);
        assert_eq!(ExceptionSets::from(doc), sets);
    }
}

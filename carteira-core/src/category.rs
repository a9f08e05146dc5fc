//! Spending and income categories recognized by the suggestion engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories the built-in keyword dictionary can suggest.
///
/// The labels are the Portuguese names the dictionary was authored with;
/// `ALL` lists the variants in dictionary order, which is also the order
/// suggestions are returned in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "alimentação")]
    Alimentacao,
    #[serde(rename = "transporte")]
    Transporte,
    #[serde(rename = "moradia")]
    Moradia,
    #[serde(rename = "pagamento")]
    Pagamento,
    #[serde(rename = "lazer")]
    Lazer,
    #[serde(rename = "saúde")]
    Saude,
    #[serde(rename = "wellness")]
    Wellness,
    #[serde(rename = "educação")]
    Educacao,
}

impl Category {
    /// Every category, in dictionary order.
    pub const ALL: [Category; 8] = [
        Category::Alimentacao,
        Category::Transporte,
        Category::Moradia,
        Category::Pagamento,
        Category::Lazer,
        Category::Saude,
        Category::Wellness,
        Category::Educacao,
    ];

    /// The label used in the dictionary and in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Alimentacao => "alimentação",
            Category::Transporte => "transporte",
            Category::Moradia => "moradia",
            Category::Pagamento => "pagamento",
            Category::Lazer => "lazer",
            Category::Saude => "saúde",
            Category::Wellness => "wellness",
            Category::Educacao => "educação",
        }
    }

    /// Whether records in this category normally represent money coming in
    pub fn is_income(&self) -> bool {
        matches!(self, Category::Pagamento)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_serde() {
        for cat in Category::ALL {
            let json = serde_json::to_value(cat).unwrap();
            assert_eq!(json, serde_json::Value::String(cat.as_str().to_string()));
            let back: Category = serde_json::from_value(json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn test_only_pagamento_is_income() {
        let income: Vec<Category> = Category::ALL
            .into_iter()
            .filter(Category::is_income)
            .collect();
        assert_eq!(income, vec![Category::Pagamento]);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Category::Saude.to_string(), "saúde");
        assert_eq!(Category::Alimentacao.to_string(), "alimentação");
    }
}

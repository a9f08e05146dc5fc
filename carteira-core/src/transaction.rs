//! Transaction records as the mobile app persists them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::suggest::suggest_categories;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Kind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl Kind {
    /// Parse the persisted form ("income"/"expense"); anything else is None.
    pub fn parse(s: &str) -> Option<Kind> {
        match s.trim() {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            _ => None,
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Always positive; direction comes from `kind`.
    pub amount: f64,
    /// User-facing category label, free text (may differ in casing from
    /// the dictionary's labels).
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        kind: Kind,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            category: category.into(),
            date,
            description: description.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }

    /// Categories the suggestion engine would offer for this record's
    /// description.
    pub fn suggested_categories(&self) -> Vec<Category> {
        suggest_categories(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            "tx-001",
            Kind::Expense,
            1500.0,
            "Moradia",
            NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            "Aluguel",
        )
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(Kind::parse("income"), Some(Kind::Income));
        assert_eq!(Kind::parse(" expense "), Some(Kind::Expense));
        assert_eq!(Kind::parse("transfer"), None);
        assert_eq!(Kind::parse(""), None);
    }

    #[test]
    fn test_direction_helpers() {
        let tx = sample();
        assert!(tx.is_expense());
        assert!(!tx.is_income());
    }

    #[test]
    fn test_serde_uses_persisted_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2025-10-05");
        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_suggestions_come_from_description() {
        let tx = sample();
        assert_eq!(tx.suggested_categories(), vec![Category::Moradia]);
    }
}

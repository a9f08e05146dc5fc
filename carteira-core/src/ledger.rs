//! Parse ledger CSV exports into typed transactions.
//!
//! Expected header:
//! id,date,type,amount,category,description
//! with dates as YYYY-MM-DD and type one of income/expense.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::transaction::{Kind, Transaction};

/// Parse a ledger CSV file, returning all valid transactions.
/// Rows with a missing id, an unparseable date, or an unknown type are
/// skipped rather than failing the whole import.
pub fn read_ledger_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut txns = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let id = record.get(0).unwrap_or("").trim();
        if id.is_empty() {
            continue;
        }

        let date = match NaiveDate::parse_from_str(record.get(1).unwrap_or("").trim(), "%Y-%m-%d")
        {
            Ok(d) => d,
            Err(_) => continue, // skip unparseable rows
        };

        let kind = match Kind::parse(record.get(2).unwrap_or("")) {
            Some(k) => k,
            None => continue,
        };

        let amount: f64 = record
            .get(3)
            .unwrap_or("0")
            .trim()
            .parse()
            .unwrap_or(0.0);

        txns.push(Transaction {
            id: id.to_string(),
            kind,
            amount,
            category: record.get(4).unwrap_or("").trim().to_string(),
            date,
            description: record.get(5).unwrap_or("").trim().to_string(),
        });
    }

    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("ledger.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parses_well_formed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "id,date,type,amount,category,description\n\
             t1,2025-10-01,income,5000,Salário,Salário mensal\n\
             t2,2025-10-05,expense,1500.50,Moradia,Aluguel\n",
        );
        let txns = read_ledger_csv(&path).unwrap();

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].kind, Kind::Income);
        assert_eq!(txns[0].amount, 5000.0);
        assert_eq!(txns[1].amount, 1500.50);
        assert_eq!(txns[1].category, "Moradia");
        assert_eq!(txns[1].date, NaiveDate::from_ymd_opt(2025, 10, 5).unwrap());
    }

    #[test]
    fn test_skips_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "id,date,type,amount,category,description\n\
             ,2025-10-01,income,100,X,missing id\n\
             t2,not-a-date,expense,100,X,bad date\n\
             t3,2025-10-02,transfer,100,X,unknown kind\n\
             t4,2025-10-03,expense,oops,X,bad amount defaults to zero\n\
             t5,2025-10-04,expense,42,X,ok\n",
        );
        let txns = read_ledger_csv(&path).unwrap();

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].id, "t4");
        assert_eq!(txns[0].amount, 0.0);
        assert_eq!(txns[1].id, "t5");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_ledger_csv("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("opening"));
    }
}

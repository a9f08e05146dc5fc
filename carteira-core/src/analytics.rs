//! Period summaries over a set of transactions.
//!
//! Mirrors the metrics the app's analytics screen shows: income, expense,
//! balance and savings rate for the selected period, plus breakdowns over
//! the full history (top expense category, largest single movements, most
//! active weekday).

use chrono::{Datelike, Duration, NaiveDate};

use crate::transaction::Transaction;

/// Weekday labels, Sunday-first, as displayed by the app.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// Reporting window, anchored at a caller-supplied "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// The last 7 days, inclusive.
    Week,
    /// The calendar month `today` falls in.
    Month,
    /// The calendar year `today` falls in.
    Year,
}

impl Period {
    pub fn parse(s: &str) -> Option<Period> {
        match s.trim() {
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            _ => None,
        }
    }

    fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::Week => date >= today - Duration::days(7),
            Period::Month => date.month() == today.month() && date.year() == today.year(),
            Period::Year => date.year() == today.year(),
        }
    }
}

/// Computed metrics for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub period: Period,
    /// Totals over the period-filtered transactions.
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    /// Percentage of period income kept (0 when there is no income).
    pub savings_rate: f64,
    /// Expense totals per category label over the full history,
    /// highest first.
    pub expenses_by_category: Vec<(String, f64)>,
    pub top_expense_category: Option<(String, f64)>,
    pub largest_expense: Option<Transaction>,
    pub largest_income: Option<Transaction>,
    /// (weekday label, transaction count) over the full history.
    pub most_active_day: Option<(&'static str, usize)>,
}

/// Summarize transactions for the given period.
///
/// Income/expense/balance/savings rate cover only the period; the category,
/// largest-movement, and weekday breakdowns deliberately cover the full
/// history, matching what the analytics screen displays.
pub fn summarize(transactions: &[Transaction], period: Period, today: NaiveDate) -> Summary {
    let in_period: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| period.contains(t.date, today))
        .collect();

    let total_income: f64 = in_period
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expense: f64 = in_period
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();
    let balance = total_income - total_expense;
    let savings_rate = if total_income > 0.0 {
        (balance / total_income) * 100.0
    } else {
        0.0
    };

    // Full-history breakdowns. Accumulation preserves first-encounter
    // order; the stable sort then only reorders by amount, so ties keep
    // their original order.
    let mut expenses_by_category: Vec<(String, f64)> = Vec::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        match expenses_by_category
            .iter_mut()
            .find(|(label, _)| *label == t.category)
        {
            Some((_, total)) => *total += t.amount,
            None => expenses_by_category.push((t.category.clone(), t.amount)),
        }
    }
    expenses_by_category.sort_by(|a, b| b.1.total_cmp(&a.1));
    let top_expense_category = expenses_by_category.first().cloned();

    let largest_expense = largest_of(transactions.iter().filter(|t| t.is_expense()));
    let largest_income = largest_of(transactions.iter().filter(|t| t.is_income()));

    let mut day_counts = [0usize; 7];
    for t in transactions {
        day_counts[t.date.weekday().num_days_from_sunday() as usize] += 1;
    }
    let most_active_day = if transactions.is_empty() {
        None
    } else {
        let mut best = 0;
        for (i, count) in day_counts.iter().enumerate() {
            if *count > day_counts[best] {
                best = i;
            }
        }
        Some((DAYS_OF_WEEK[best], day_counts[best]))
    };

    Summary {
        period,
        total_income,
        total_expense,
        balance,
        savings_rate,
        expenses_by_category,
        top_expense_category,
        largest_expense,
        largest_income,
        most_active_day,
    }
}

/// First transaction with the strictly largest amount (first wins on ties).
fn largest_of<'a>(iter: impl Iterator<Item = &'a Transaction>) -> Option<Transaction> {
    let mut largest: Option<&Transaction> = None;
    for t in iter {
        match largest {
            Some(cur) if t.amount <= cur.amount => {}
            _ => largest = Some(t),
        }
    }
    largest.cloned()
}

use anyhow::{Context, Result, bail};
use carteira_core::{Period, read_ledger_csv, suggest_categories, summarize};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carteira", version, about = "Carteira personal-finance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest spending categories for a free-text transaction note
    Suggest {
        /// The note to classify, e.g. "Almoço no restaurante"
        text: String,
    },

    /// Summarize a ledger CSV export (id,date,type,amount,category,description)
    Report {
        /// Path to the ledger CSV
        #[arg(long)]
        csv: PathBuf,

        /// Reporting window: week, month or year (default: month)
        #[arg(long, default_value = "month")]
        period: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Suggest { text } => {
            let suggestions = suggest_categories(&text);
            if suggestions.is_empty() {
                println!("No category matched.");
            } else {
                for category in suggestions {
                    println!("{category}");
                }
            }
        }

        Command::Report { csv, period } => {
            let Some(period) = Period::parse(&period) else {
                bail!("unknown period: {period} (expected week, month or year)");
            };
            if !csv.exists() {
                bail!("CSV not found: {}", csv.display());
            }

            let txns = read_ledger_csv(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;

            let today = Local::now().date_naive();
            let summary = summarize(&txns, period, today);

            println!("Parsed {} transactions from {}\n", txns.len(), csv.display());
            println!("Income:       R$ {:.2}", summary.total_income);
            println!("Expense:      R$ {:.2}", summary.total_expense);
            println!("Balance:      R$ {:.2}", summary.balance);
            println!("Savings rate: {:.1}%", summary.savings_rate);

            if let Some((label, total)) = &summary.top_expense_category {
                println!("\nTop expense category: {label} (R$ {total:.2})");
            }
            if let Some(t) = &summary.largest_expense {
                println!("Largest expense: {} | R$ {:.2} | {}", t.description, t.amount, t.date);
            }
            if let Some(t) = &summary.largest_income {
                println!("Largest income:  {} | R$ {:.2} | {}", t.description, t.amount, t.date);
            }
            if let Some((day, count)) = summary.most_active_day {
                println!("Most active day: {day} ({count} transactions)");
            }

            if !summary.expenses_by_category.is_empty() {
                println!("\nExpenses by category:");
                for (label, total) in &summary.expenses_by_category {
                    println!("  {label:<16} R$ {total:.2}");
                }
            }
        }
    }

    Ok(())
}

//! carteira-core: category suggestion engine, transaction records, ledger import, and period analytics

pub mod analytics;
pub mod category;
pub mod ledger;
pub mod suggest;
pub mod transaction;

pub use analytics::{Period, Summary, summarize};
pub use category::Category;
pub use ledger::read_ledger_csv;
pub use suggest::suggest_categories;
pub use transaction::{Kind, Transaction};

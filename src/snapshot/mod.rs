//! User financial snapshot: data model, import, and persistence seam

mod data;
pub mod history;
pub mod loader;
pub mod store;

pub use data::{Debt, DebtType, IncomeSource, InstallmentUnit, UserSnapshot};
pub use history::HistoricalSnapshot;
pub use loader::{load_debts, load_debts_from_reader, LoadError};
pub use store::{JsonFileStore, SnapshotStore, StoreError};

pub mod db_structs;
pub mod history;

pub use history::{HistoryError, HistorySnapshot, HistorySource};

//! Intermediate representation between parsed input and the spreadsheet.
pub mod keys;
pub mod ordering;
pub mod table;

pub use keys::aggregate_keys;
pub use ordering::order_locales;
pub use table::{
    KEY_COLUMN,
    OutputTable,
    TableRow,
};

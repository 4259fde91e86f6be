//! Writing the output table.
pub mod xlsx;

pub use xlsx::{
    WriteError,
    write_workbook,
};

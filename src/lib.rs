//! arb-to-xlsx
//!
//! Flutter の ARB 翻訳ファイルを、キーごとに一行・ロケールごとに一列の
//! スプレッドシートにまとめる変換ツール

pub mod config;
pub mod converter;
pub mod error;
pub mod input;
pub mod ir;
pub mod output;
#[cfg(test)]
mod test_utils;

pub use converter::{
    ConversionReport,
    convert_directory,
};
pub use error::ConvertError;

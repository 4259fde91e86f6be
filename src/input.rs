//! Reading localization resources from disk.
pub mod arb;
pub mod discovery;
/// Input type definitions
mod types;

pub use arb::parse_locale_file;
pub use discovery::discover_locale_files;
pub use types::{
    DiscoveryError,
    LocaleFile,
    LocaleRecord,
    ParseError,
};

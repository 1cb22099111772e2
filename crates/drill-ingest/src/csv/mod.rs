//! CSV reading utilities.

mod encoding;
mod header;
mod reader;

pub use encoding::{TextEncoding, decode_text};
pub use reader::{LoadedCsv, read_csv_str, read_csv_table};

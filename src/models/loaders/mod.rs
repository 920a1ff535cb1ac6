pub mod csv_loader;

pub use csv_loader::{load_keyword_rows, parse_keyword_rows};

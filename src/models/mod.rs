pub mod keyword;
pub mod loaders;

pub use keyword::KeywordRow;
pub use loaders::{load_keyword_rows, parse_keyword_rows};

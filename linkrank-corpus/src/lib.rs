pub mod corpus;
pub mod error;
pub mod extract;

pub use corpus::load_corpus;
pub use error::CorpusError;
pub use extract::extract_links;

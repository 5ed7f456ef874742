use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

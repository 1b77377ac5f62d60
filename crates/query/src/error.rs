use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

//! Inbound batch validation.
//!
//! # Responsibilities
//! - Reject oversized batches before any network activity
//! - Reject the first syntactically invalid URL, carrying the parse error
//!
//! # Design Decisions
//! - Short-circuits on the first violation; callers get one error at a time
//! - An empty batch is valid and fans out to nothing

use thiserror::Error;
use url::Url;

/// Errors that reject a batch before fetching starts.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The batch exceeds the configured URL limit.
    #[error("too many urls: got {count}, limit is {max}")]
    TooManyUrls { count: usize, max: usize },

    /// An entry does not parse as a URL.
    #[error("malformed url at index {index}: {source}")]
    MalformedUrl {
        index: usize,
        #[source]
        source: url::ParseError,
    },
}

/// Check the size bound, then parse each entry in input order.
pub fn validate_batch(urls: &[String], max: usize) -> Result<Vec<Url>, BatchError> {
    if urls.len() > max {
        return Err(BatchError::TooManyUrls {
            count: urls.len(),
            max,
        });
    }

    let mut parsed = Vec::with_capacity(urls.len());
    for (index, raw) in urls.iter().enumerate() {
        let url = Url::parse(raw).map_err(|source| BatchError::MalformedUrl { index, source })?;
        parsed.push(url);
    }

    Ok(parsed)
}

//! Batcher options.

use no_panic::no_panic;
use url::Url;

use crate::error::Error;

/// Default number of statements merged into one round trip.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Options for a batcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Number of merged statements after which the batch is flushed.
    ///
    /// One statement counts as one unit regardless of how many rows it inserts.
    ///
    /// Default: `20`
    pub batch_size: usize,
}

impl Default for Opts {
    #[no_panic]
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Parse and validate a batch size.
pub(crate) fn parse_batch_size(value: &str) -> Result<usize, Error> {
    match value.parse::<usize>() {
        Ok(0) => Err(Error::InvalidUsage("batch_size must be positive".into())),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::InvalidUsage(format!(
            "Invalid batch_size: {}",
            value
        ))),
    }
}

impl TryFrom<&Url> for Opts {
    type Error = Error;

    /// Read batcher options from a connection URL.
    ///
    /// Format: `postgres://[user[:password]@]host[:port][/database][?batch_size=N&..]`
    ///
    /// Supported query parameters:
    /// - `batch_size`: flush threshold (positive integer)
    ///
    /// Other parameters belong to the connection and are ignored.
    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        let mut opts = Opts::default();

        for (key, value) in url.query_pairs() {
            if key == "batch_size" {
                opts.batch_size = parse_batch_size(&value)?;
            }
        }

        Ok(opts)
    }
}

impl TryFrom<&str> for Opts {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let url = Url::parse(s).map_err(|e| Error::InvalidUsage(format!("Invalid URL: {}", e)))?;
        Self::try_from(&url)
    }
}

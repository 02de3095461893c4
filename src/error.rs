use std::{fmt, time::Duration};

use crate::region::RegionId;

/// Which of the two input documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Topology,
    Statistics,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Topology => f.write_str("topology"),
            Document::Statistics => f.write_str("statistics"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch {document} document: {source}")]
    Fetch {
        document: Document,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("timed out after {after:?} waiting for input documents")]
    FetchTimeout { after: Duration },

    #[error("failed to parse {document} document: {source}")]
    Parse {
        document: Document,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid topology: {0}")]
    Topology(String),

    #[error("region {region} has geometry but no statistics record")]
    Join { region: RegionId },

    #[error("statistics document contains no records")]
    EmptyStatistics,

    #[error("SVG output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn fetch(document: Document, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Fetch { document, source: source.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

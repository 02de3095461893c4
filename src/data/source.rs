use std::{fmt, path::PathBuf, sync::Arc};

use crate::error::{Document, Error, Result};

/// Where an input document is read from.
#[derive(Debug, Clone)]
pub enum Source {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
    #[cfg(feature = "download")]
    Url(String),
}

impl Source {
    /// Interpret a command-line style location: `http(s)://` URLs become
    /// [`Source::Url`] when downloads are enabled, anything else is a file path.
    pub fn parse(location: &str) -> Self {
        #[cfg(feature = "download")]
        if location.starts_with("http://") || location.starts_with("https://") {
            return Source::Url(location.to_string());
        }
        Source::Path(PathBuf::from(location))
    }

    pub(crate) async fn fetch(&self, document: Document) -> Result<Vec<u8>> {
        tracing::debug!(%document, source = %self, "fetching");
        match self {
            Source::Path(path) => tokio::fs::read(path).await
                .map_err(|err| Error::fetch(document, err)),
            Source::Bytes(bytes) => Ok(bytes.to_vec()),
            #[cfg(feature = "download")]
            Source::Url(url) => fetch_url(url).await
                .map_err(|err| Error::fetch(document, err)),
        }
    }
}

#[cfg(feature = "download")]
async fn fetch_url(url: &str) -> reqwest::Result<Vec<u8>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self { Source::Bytes(bytes.into()) }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Bytes(bytes) => write!(f, "<{} bytes in memory>", bytes.len()),
            #[cfg(feature = "download")]
            Source::Url(url) => f.write_str(url),
        }
    }
}

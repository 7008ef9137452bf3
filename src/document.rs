//! Document acquisition — thin collaborators for URL fetch and file upload.
//!
//! The interesting work (condensation, analysis) happens downstream; this
//! module only turns a source into plain text and tags it with an origin
//! for error messages. HTML gets a light strip of scripts, styles, and tags.
//! PDF extraction is a non-goal.

use url::Url;

/// Where a document's text came from. Used in error messages only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// Fetched from a URL.
    Url(String),
    /// Uploaded as raw bytes.
    Upload,
}

impl std::fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "url {url}"),
            Self::Upload => write!(f, "uploaded file"),
        }
    }
}

/// A single string of extracted plain text, origin-tagged.
#[derive(Debug, Clone)]
pub struct Document {
    /// Extracted plain text.
    pub text: String,
    /// Source of the text.
    pub origin: DocumentOrigin,
}

/// Failures while acquiring a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Transport failure fetching the source.
    #[error("failed to fetch {origin}: {source}")]
    Fetch {
        /// Source being fetched.
        origin: DocumentOrigin,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// Source responded with a non-success status.
    #[error("{origin} returned status {status}")]
    HttpStatus {
        /// Source being fetched.
        origin: DocumentOrigin,
        /// HTTP status code.
        status: u16,
    },
    /// Source yielded no usable text.
    #[error("{origin} contained no extractable text")]
    Empty {
        /// Source that was empty.
        origin: DocumentOrigin,
    },
}

/// Fetch a document from a URL, stripping HTML when the response is HTML.
///
/// # Errors
///
/// Returns [`DocumentError`] on transport failure, non-2xx status, or an
/// empty body.
pub async fn fetch_url(client: &reqwest::Client, url: &Url) -> Result<Document, DocumentError> {
    let origin = DocumentOrigin::Url(url.to_string());

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|source| DocumentError::Fetch {
            origin: origin.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocumentError::HttpStatus {
            origin,
            status: status.as_u16(),
        });
    }

    let is_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("text/html"));

    let body = response
        .text()
        .await
        .map_err(|source| DocumentError::Fetch {
            origin: origin.clone(),
            source,
        })?;

    let text = if is_html { strip_html(&body) } else { body };
    let text = text.trim().to_owned();
    if text.is_empty() {
        return Err(DocumentError::Empty { origin });
    }

    Ok(Document { text, origin })
}

/// Build a document from uploaded raw bytes (lossy UTF-8).
///
/// # Errors
///
/// Returns [`DocumentError::Empty`] if the bytes contain no text.
pub fn from_bytes(bytes: &[u8]) -> Result<Document, DocumentError> {
    let text = String::from_utf8_lossy(bytes).trim().to_owned();
    if text.is_empty() {
        return Err(DocumentError::Empty {
            origin: DocumentOrigin::Upload,
        });
    }
    Ok(Document {
        text,
        origin: DocumentOrigin::Upload,
    })
}

/// Light HTML-to-text: drop script/style blocks, then all tags, then
/// collapse runs of whitespace. Not a real scraper and not meant to be one.
pub fn strip_html(html: &str) -> String {
    let mut stripped = html.to_owned();
    for pattern in [r"(?is)<script.*?</script>", r"(?is)<style.*?</style>"] {
        if let Ok(re) = regex::Regex::new(pattern) {
            stripped = re.replace_all(&stripped, " ").into_owned();
        }
    }
    if let Ok(re) = regex::Regex::new(r"<[^>]+>") {
        stripped = re.replace_all(&stripped, " ").into_owned();
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

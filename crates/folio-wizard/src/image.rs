//! Uploaded images held as data URIs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

const BASE64_MARKER: &str = ";base64,";

/// An image reference in `data:<mime>;base64,<payload>` form.
///
/// This is the same shape a browser file reader produces, so the emitter can
/// inline it for previews and the packager can decode it back to bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

/// Errors that can occur when building an image reference.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("Not a base64 image data URI")]
    NotDataUri,
}

impl ImageRef {
    /// Encode raw bytes with the given mime type.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{}{}{}", mime, BASE64_MARKER, STANDARD.encode(bytes)))
    }

    /// Read an image file, guessing the mime type from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ImageError> {
        let mime = mime_for_path(path)?;
        let bytes = fs::read(path).map_err(|source| ImageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded image {} ({} bytes)", path.display(), bytes.len());

        Ok(Self::from_bytes(mime, &bytes))
    }

    /// Accept an existing data URI.
    pub fn parse(uri: &str) -> Result<Self, ImageError> {
        let uri = uri.trim();
        let Some(rest) = uri.strip_prefix("data:") else {
            return Err(ImageError::NotDataUri);
        };

        match rest.split_once(BASE64_MARKER) {
            Some((mime, _)) if mime.starts_with("image/") => Ok(Self(uri.to_string())),
            Some((mime, _)) => Err(ImageError::UnsupportedType(mime.to_string())),
            None => Err(ImageError::NotDataUri),
        }
    }

    /// The full data URI.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The mime type, e.g. `image/png`.
    pub fn mime(&self) -> &str {
        self.parts().0
    }

    /// The base64 payload.
    pub fn payload(&self) -> &str {
        self.parts().1
    }

    fn parts(&self) -> (&str, &str) {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(BASE64_MARKER))
            .unwrap_or(("", ""))
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} image ({} base64 chars)", self.mime(), self.payload().len())
    }
}

impl TryFrom<String> for ImageRef {
    type Error = ImageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

fn mime_for_path(path: &Path) -> Result<&'static str, ImageError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "svg" => Ok("image/svg+xml"),
        other => Err(ImageError::UnsupportedType(other.to_string())),
    }
}

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader};
use thiserror::Error;
use uuid::Uuid;

/// URL prefix under which stored files are served back as static resources.
pub const URL_PREFIX: &str = "/uploads";

pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

pub const ALLOWED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("File too large. Maximum size is {MAX_FILE_SIZE} bytes")]
    TooLarge,

    #[error("Could not detect image format")]
    UnknownFormat,

    #[error("Unsupported image format: {0}. Allowed: JPEG, PNG, GIF, WebP")]
    UnsupportedFormat(String),

    #[error("Failed to store file: {0}")]
    Io(#[from] std::io::Error),
}

/// Detect the image format from magic bytes and check it against the allowlist.
pub fn detect_format(data: &[u8]) -> Result<ImageFormat, UploadError> {
    let format = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(UploadError::Io)?
        .format()
        .ok_or(UploadError::UnknownFormat)?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(UploadError::UnsupportedFormat(format!("{:?}", format)));
    }

    Ok(format)
}

/// Strip anything that could escape the upload directory or confuse a URL.
/// Path separators and control characters become dashes.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '-');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Local-directory store for uploaded recipe images. Files are written under
/// a random name and recorded on the recipe as `/uploads/<name>` URLs.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_env() -> Self {
        let dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate the image and write it to the upload directory under
    /// `<uuid>_<sanitized-original-name>`. Returns the public URL.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String, UploadError> {
        if data.len() > MAX_FILE_SIZE {
            return Err(UploadError::TooLarge);
        }

        detect_format(data)?;

        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(original_name));
        tokio::fs::write(self.dir.join(&file_name), data).await?;

        Ok(format!("{}/{}", URL_PREFIX, file_name))
    }

    /// Best-effort removal of a stored file by its public URL. Failures are
    /// logged and swallowed; a recipe delete must not fail because a file is
    /// already gone.
    pub async fn remove_by_url(&self, url: &str) {
        let Some(file_name) = url.strip_prefix(URL_PREFIX).and_then(|r| r.strip_prefix('/'))
        else {
            tracing::warn!("Skipping removal of non-upload URL: {}", url);
            return;
        };

        // A recorded URL never contains separators, but don't trust the row
        if file_name.contains('/') || file_name.contains("..") {
            tracing::warn!("Skipping removal of suspicious upload URL: {}", url);
            return;
        }

        if let Err(e) = tokio::fs::remove_file(self.dir.join(file_name)).await {
            tracing::warn!("Failed to remove uploaded file {}: {}", file_name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn temp_store() -> UploadStore {
        UploadStore::new(std::env::temp_dir().join(format!("ladle-test-{}", Uuid::new_v4())))
    }

    #[test]
    fn test_detect_format_png() {
        assert_eq!(detect_format(PNG_MAGIC).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_format_rejects_garbage() {
        assert!(matches!(
            detect_format(b"definitely not an image"),
            Err(UploadError::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_format_rejects_disallowed() {
        // BMP magic bytes - a real image format, but not on the allowlist
        assert!(matches!(
            detect_format(b"BM\x00\x00\x00\x00"),
            Err(UploadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("dinner.png"), "dinner.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "etc-passwd");
        assert_eq!(sanitize_file_name("my photo (1).jpg"), "my-photo--1-.jpg");
        assert_eq!(sanitize_file_name("///"), "upload");
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_url() {
        let store = temp_store();
        let url = store.save("pic.png", PNG_MAGIC).await.unwrap();

        assert!(url.starts_with("/uploads/"));
        let file_name = url.strip_prefix("/uploads/").unwrap();
        assert!(file_name.ends_with("_pic.png"));
        assert!(store.dir().join(file_name).exists());
    }

    #[tokio::test]
    async fn test_save_rejects_oversized_file() {
        let store = temp_store();
        let mut data = PNG_MAGIC.to_vec();
        data.resize(MAX_FILE_SIZE + 1, 0);
        assert!(matches!(
            store.save("big.png", &data).await,
            Err(UploadError::TooLarge)
        ));
    }

    #[tokio::test]
    async fn test_remove_by_url_deletes_file() {
        let store = temp_store();
        let url = store.save("pic.png", PNG_MAGIC).await.unwrap();
        let file_name = url.strip_prefix("/uploads/").unwrap().to_string();

        store.remove_by_url(&url).await;
        assert!(!store.dir().join(&file_name).exists());

        // Removing again is a no-op
        store.remove_by_url(&url).await;
    }

    #[tokio::test]
    async fn test_remove_by_url_ignores_foreign_urls() {
        let store = temp_store();
        store.remove_by_url("https://example.com/pic.png").await;
        store.remove_by_url("/uploads/../escape.png").await;
    }
}

//! Media types served as raw bytes.

use std::path::Path;

/// Kind of binary asset the bridge will stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum MediaType {
    /// Slide image
    #[display("image")]
    Image,
    /// Narration audio
    #[display("audio")]
    Audio,
}

impl MediaType {
    /// Classify a path by its extension (case-insensitive).
    ///
    /// ```
    /// use scorpion_storage::MediaType;
    ///
    /// assert_eq!(MediaType::from_path("block_001/slide_a.JPG"), Some(MediaType::Image));
    /// assert_eq!(MediaType::from_path("audio.wav"), Some(MediaType::Audio));
    /// assert_eq!(MediaType::from_path("script.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" | "jpg" | "jpeg" | "webp" => Some(MediaType::Image),
            "wav" => Some(MediaType::Audio),
            _ => None,
        }
    }

    /// MIME type for the `Content-Type` header.
    ///
    /// Anything that is not a recognised media file is `application/octet-stream`.
    ///
    /// ```
    /// use scorpion_storage::MediaType;
    ///
    /// assert_eq!(MediaType::mime_type("slide_a.jpg"), "image/jpeg");
    /// assert_eq!(MediaType::mime_type("script.txt"), "application/octet-stream");
    /// ```
    pub fn mime_type(path: impl AsRef<Path>) -> &'static str {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("webp") => "image/webp",
            Some("wav") => "audio/wav",
            _ => "application/octet-stream",
        }
    }
}

//! Slide image file names.

use std::cmp::Ordering;

/// Image extensions recognised for slides, in precedence order.
///
/// When one letter has files in several formats, the earliest extension wins.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpeg", "jpg", "webp"];

/// A slide image file named `slide_<letter>.<ext>`.
///
/// # Examples
///
/// ```
/// use scorpion_core::SlideFile;
///
/// let slide = SlideFile::parse("slide_c.PNG").unwrap();
/// assert_eq!(slide.letter(), 'c');
/// assert_eq!(slide.index(), 3);
/// assert_eq!(slide.file_name(), "slide_c.PNG");
///
/// assert!(SlideFile::parse("slide_ab.png").is_none());
/// assert!(SlideFile::parse("cover.png").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFile {
    letter: char,
    extension_rank: usize,
    file_name: String,
}

impl SlideFile {
    /// Recognise a slide file name, or `None` for any other file.
    pub fn parse(file_name: &str) -> Option<Self> {
        let (stem, extension) = file_name.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();
        let extension_rank = IMAGE_EXTENSIONS.iter().position(|e| *e == extension)?;

        let suffix = stem.strip_prefix("slide_")?;
        let mut chars = suffix.chars();
        let letter = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() || !letter.is_ascii_lowercase() {
            return None;
        }

        Some(Self {
            letter,
            extension_rank,
            file_name: file_name.to_string(),
        })
    }

    /// Lower-case slide letter.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// 1-based slide position (`a` → 1), matching prompt entry indices.
    pub fn index(&self) -> u32 {
        u32::from(self.letter) - u32::from('a') + 1
    }

    /// Original file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Placeholder prompt used when no prompt entry matches, e.g. `Shot C`.
    pub fn placeholder_prompt(&self) -> String {
        format!("Shot {}", self.letter.to_ascii_uppercase())
    }

    /// Caption used when the matching prompt entry has no timestamp, e.g. `Slide C`.
    pub fn default_description(&self) -> String {
        format!("Slide {}", self.letter.to_ascii_uppercase())
    }
}

impl Ord for SlideFile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.letter
            .cmp(&other.letter)
            .then(self.extension_rank.cmp(&other.extension_rank))
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

impl PartialOrd for SlideFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Hour directory naming.

use regex::Regex;
use std::sync::LazyLock;

// "Hour 1 - Sanitation", "hour_02", "HOUR 3"
static HOUR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*hour[\s_]*0*(\d+)\s*(?:-\s*(.*?))?\s*$").expect("Valid hour regex")
});

/// Display names derived from an hour directory name.
///
/// # Examples
///
/// ```
/// use scorpion_core::HourLabel;
///
/// let label = HourLabel::parse("Hour 1 - Sanitation");
/// assert_eq!(label.hour_name(), "Hour 1");
/// assert_eq!(label.lesson_title(), "Sanitation");
///
/// let bare = HourLabel::parse("hour_02");
/// assert_eq!(bare.hour_name(), "Hour 2");
/// assert_eq!(bare.lesson_title(), "Hour 2 Lesson");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourLabel {
    hour_name: String,
    lesson_title: String,
}

impl HourLabel {
    /// Derive the labels for a directory name.
    ///
    /// Names that carry no hour number are used verbatim as the hour name.
    pub fn parse(dir_name: &str) -> Self {
        let Some(caps) = HOUR_PATTERN.captures(dir_name) else {
            let hour_name = dir_name.trim().to_string();
            return Self {
                lesson_title: format!("{} Lesson", hour_name),
                hour_name,
            };
        };

        let hour_name = format!("Hour {}", &caps[1]);
        let lesson_title = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Lesson", hour_name));

        Self {
            hour_name,
            lesson_title,
        }
    }

    /// `Hour <n>`.
    pub fn hour_name(&self) -> &str {
        &self.hour_name
    }

    /// Lesson name following the hour number, or `<hour_name> Lesson`.
    pub fn lesson_title(&self) -> &str {
        &self.lesson_title
    }
}

//! Comment classifier
//!
//! Decides whether a comment body was produced by the duplicate-logic
//! detector. The default strategy is a substring test against marker text
//! the detector embeds in its reports; false positives and negatives are
//! accepted.

/// Heading written by the detector's pull request comment generator
pub const HEADING_MARKER: &str = "## 🔍 Duplicate Logic Detection";

/// Opening of the HTML comment tag carrying the report timestamp
pub const TIMESTAMP_TAG_MARKER: &str = "<!-- duplicate-logic-detector:";

/// Feedback prompt appended to every report
pub const FEEDBACK_PROMPT_MARKER: &str = "React with 👍 or 👎";

/// Markers used when none are configured
pub const DEFAULT_MARKERS: [&str; 3] = [HEADING_MARKER, TIMESTAMP_TAG_MARKER, FEEDBACK_PROMPT_MARKER];

/// Strategy deciding whether a comment belongs to the tracked category
pub trait CommentClassifier: Send + Sync {
    fn is_tracked(&self, body: &str) -> bool;
}

/// Classifies a comment as tracked when it contains any marker
#[derive(Debug, Clone)]
pub struct MarkerClassifier {
    markers: Vec<String>,
}

impl MarkerClassifier {
    /// Build from configured markers, ignoring blanks.
    /// Falls back to [`DEFAULT_MARKERS`] when nothing usable remains.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers: Vec<String> = markers
            .into_iter()
            .map(Into::into)
            .filter(|m| !m.trim().is_empty())
            .collect();

        if markers.is_empty() {
            Self::default()
        } else {
            Self { markers }
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl Default for MarkerClassifier {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

impl CommentClassifier for MarkerClassifier {
    fn is_tracked(&self, body: &str) -> bool {
        self.markers.iter().any(|marker| body.contains(marker.as_str()))
    }
}

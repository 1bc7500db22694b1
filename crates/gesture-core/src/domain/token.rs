//! Gesture tokens received from the remote transport.

use std::fmt;

/// An opaque, trimmed text identifier received verbatim from the transport
/// (e.g. `"SWIPE_UP"`, `"PINCH"`).
///
/// Tokens are immutable once produced.  Construction trims surrounding
/// whitespace so the rest of the pipeline never has to re-trim; whether the
/// token names a *recognized* gesture is decided later by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GestureToken(String);

impl GestureToken {
    /// Creates a token from a raw wire payload, trimming surrounding
    /// whitespace.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Returns the trimmed token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the trimmed payload was empty.
    ///
    /// Empty tokens correspond to zero-length frames, which the transport
    /// ignores before they ever reach the classifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GestureToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

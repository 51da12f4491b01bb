//! Purpose paths: the hierarchical part of an environment name.

use std::fmt;

/// Separator between purpose segments in the string form.
pub const PURPOSE_DELIMITER: char = ':';

/// A purpose path: nested scope segments, ordered outermost to innermost.
///
/// The empty path is valid and names the root (no purpose at all). Any
/// string parses into a purpose path; segments carry no structure beyond
/// not containing the delimiter, and empty segments are preserved as
/// written.
///
/// Prefix comparison is segment-exact: two paths share a prefix only
/// through whole equal segments. `c` and `cd` are distinct segments even
/// though one is a character prefix of the other.
///
/// # Examples
///
/// ```rust
/// use gangway_id::PurposePath;
///
/// let path = PurposePath::parse("outer:middle:inner");
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.parent().to_string(), "outer:middle");
///
/// let other = PurposePath::parse("outer:elsewhere");
/// assert_eq!(path.common_prefix(&other).to_string(), "outer");
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PurposePath {
    segments: Vec<String>,
}

impl PurposePath {
    /// The root path: no segments.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a purpose string. Never fails: every string is a valid
    /// purpose, and the empty string is the root.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self::root();
        }
        Self {
            segments: s.split(PURPOSE_DELIMITER).map(str::to_string).collect(),
        }
    }

    /// Build a path from pre-split segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path one scope outward: this path without its innermost
    /// segment. The root's parent is the root; callers that need to
    /// detect the boundary check `is_root` first.
    #[must_use]
    pub fn parent(&self) -> PurposePath {
        let mut segments = self.segments.clone();
        segments.pop();
        PurposePath { segments }
    }

    /// The first `n` segments as a new path. `n` beyond the depth yields
    /// the whole path.
    #[must_use]
    pub fn truncated(&self, n: usize) -> PurposePath {
        let n = n.min(self.segments.len());
        PurposePath {
            segments: self.segments[..n].to_vec(),
        }
    }

    /// This path extended by one inner segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> PurposePath {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        PurposePath { segments }
    }

    /// The longest shared prefix of two paths, walking segments pairwise
    /// from the front and stopping at the first index where the segments
    /// differ or either side runs out.
    #[must_use]
    pub fn common_prefix(&self, other: &PurposePath) -> PurposePath {
        let shared = self
            .segments
            .iter()
            .zip(other.segments.iter())
            .take_while(|(a, b)| a == b)
            .count();
        self.truncated(shared)
    }
}

impl fmt::Display for PurposePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{}", PURPOSE_DELIMITER)?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

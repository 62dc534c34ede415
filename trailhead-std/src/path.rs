//! Path normalization and route patterns.
//!
//! Registered patterns and request paths go through the same normalization:
//! leading and trailing separators are stripped and empty segments (from
//! repeated separators) are dropped, so `"//users//42/"` and `"users/42"`
//! compare equal.
//!
//! A pattern segment starting with `:` is a parameter: it matches any single
//! request segment and binds the segment's text under the name after the
//! sigil. There are no optional or wildcard segments.

use trailhead_core::{Params, PatternError};

/// Path separator.
pub const SEPARATOR: char = '/';

/// Prefix marking a parameter segment.
pub const PARAM_SIGIL: char = ':';

/// Strip every leading and trailing separator.
pub fn trim(path: &str) -> &str {
    path.trim_matches(SEPARATOR)
}

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// One segment of a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly (case-sensitive).
    Literal(String),
    /// Matches any request segment and binds it under this name.
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix(PARAM_SIGIL) {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Literal(raw.to_string()),
        }
    }

    /// Whether `text` is this segment written out verbatim.
    fn is_verbatim(&self, text: &str) -> bool {
        match self {
            Segment::Literal(literal) => literal == text,
            Segment::Param(name) => text.strip_prefix(PARAM_SIGIL) == Some(name.as_str()),
        }
    }

    fn bind(&self, text: &str, params: &mut Params) -> bool {
        match self {
            Segment::Literal(literal) => literal == text,
            Segment::Param(name) => {
                params.set(name.as_str(), text);
                true
            }
        }
    }
}

/// A normalized, pre-split route path or group prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    original: String,
    normalized: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern.
    ///
    /// A bare `:` segment is a parameter with an empty name; use
    /// [`Pattern::parse`] to reject it.
    pub fn new(path: &str) -> Self {
        let normalized = trim(path).to_string();
        let segments = segments(&normalized).into_iter().map(Segment::parse).collect();
        Self {
            original: path.to_string(),
            normalized,
            segments,
        }
    }

    /// Parse a pattern, rejecting parameter segments without a name.
    pub fn parse(path: &str) -> Result<Self, PatternError> {
        if let Some(index) = segments(path)
            .iter()
            .position(|segment| *segment == ":")
        {
            return Err(PatternError::EmptyParam {
                pattern: path.to_string(),
                index,
            });
        }
        Ok(Self::new(path))
    }

    /// The pattern exactly as registered.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The pattern with leading and trailing separators stripped.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root pattern (zero segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Names of the parameter segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a whole request path, segment for segment.
    ///
    /// A request that spells out the pattern verbatim matches without
    /// binding anything.
    pub fn match_exact(&self, request: &[&str]) -> Option<Params> {
        if request.len() != self.segments.len() {
            return None;
        }
        if self
            .segments
            .iter()
            .zip(request)
            .all(|(segment, text)| segment.is_verbatim(text))
        {
            return Some(Params::new());
        }
        self.bind(request)
    }

    /// Match the leading segments of a request path.
    ///
    /// The caller continues with `&request[self.len()..]`.
    pub fn match_prefix(&self, request: &[&str]) -> Option<Params> {
        if request.len() < self.segments.len() {
            return None;
        }
        self.bind(&request[..self.segments.len()])
    }

    fn bind(&self, request: &[&str]) -> Option<Params> {
        let mut params = Params::new();
        for (segment, text) in self.segments.iter().zip(request) {
            if !segment.bind(text, &mut params) {
                return None;
            }
        }
        Some(params)
    }
}

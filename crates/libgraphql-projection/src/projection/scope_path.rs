use crate::projection::ProjectionError;

/// The hierarchical path of name segments (operation/fragment root, field
/// display names, variant type names) leading to the declaration currently
/// being built.
///
/// A [`ScopePath`] is an immutable value: [`ScopePath::push()`] and
/// [`ScopePath::pop()`] return new paths rather than mutating this one, so a
/// path handed down into a recursive call is unaffected by anything that call
/// does.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ScopePath {
    segments: Vec<String>,
}
impl ScopePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path containing only `segment`.
    pub fn root(segment: impl Into<String>) -> Self {
        Self::new().push(segment)
    }

    /// Flatten this path into a single identifier.
    ///
    /// Segments are joined with `_`. Any character of a segment that cannot
    /// appear in an identifier is replaced with `_`, and an identifier that
    /// would start with a digit is prefixed with `_`.
    pub fn current_name(&self) -> String {
        let mut name = self.segments.iter()
            .map(|segment| normalize_segment(segment))
            .collect::<Vec<_>>()
            .join("_");

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        name
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Remove the most recently pushed segment, returning the shortened path
    /// along with the removed segment.
    pub fn pop(&self) -> Result<(ScopePath, String), ProjectionError> {
        let mut segments = self.segments.clone();
        let segment = segments.pop().ok_or(ProjectionError::ScopeImbalance)?;
        Ok((ScopePath { segments }, segment))
    }

    /// A new path with `segment` appended after this path's segments.
    pub fn push(&self, segment: impl Into<String>) -> ScopePath {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.into());
        ScopePath { segments }
    }

    pub fn segments(&self) -> &[String] {
        self.segments.as_slice()
    }
}
impl std::fmt::Display for ScopePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

fn normalize_segment(segment: &str) -> String {
    segment.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

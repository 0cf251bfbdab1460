use std::fmt;

/// A span of source text.
///
/// Lines are 1-based and columns are 0-based character offsets from the start
/// of their line. The end column is exclusive, so a one-character token at the
/// start of the first line spans `1:0 - 1:1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    /// Line on which the span starts.
    pub start_line:   usize,
    /// Column at which the span starts.
    pub start_column: usize,
    /// Line on which the span ends.
    pub end_line:     usize,
    /// Column one past the last character of the span.
    pub end_column:   usize,
}

impl SourceLocation {
    /// Creates a location from its four coordinates.
    #[must_use]
    pub const fn new(start_line: usize,
                     start_column: usize,
                     end_line: usize,
                     end_column: usize)
                     -> Self {
        Self { start_line,
               start_column,
               end_line,
               end_column }
    }

    /// Returns the smallest location enclosing both `self` and `other`.
    ///
    /// # Example
    /// ```
    /// use rockstar::location::SourceLocation;
    ///
    /// let put = SourceLocation::new(1, 0, 1, 3);
    /// let target = SourceLocation::new(1, 14, 1, 22);
    ///
    /// assert_eq!(put.combine(&target), SourceLocation::new(1, 0, 1, 22));
    /// assert_eq!(target.combine(&put), SourceLocation::new(1, 0, 1, 22));
    /// ```
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        let (start_line, start_column) =
            (self.start_line, self.start_column).min((other.start_line, other.start_column));
        let (end_line, end_column) =
            (self.end_line, self.end_column).max((other.end_line, other.end_column));

        Self { start_line,
               start_column,
               end_line,
               end_column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}:{} - {}:{}",
               self.start_line, self.start_column, self.end_line, self.end_column)
    }
}

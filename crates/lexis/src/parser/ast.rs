//! AST types for translation templates.

/// A parsed template: a sequence of segments borrowing from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    pub segments: Vec<Segment<'a>>,
}

/// A segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, copied to the output unchanged.
    Literal(&'a str),

    /// Named field: `%{key}`.
    Field { key: &'a str },

    /// Formatted field: `%<key>.spec`.
    Formatted { key: &'a str, spec: char },

    /// Numbered slot: `{N}`.
    ///
    /// `index` is `None` when the digits do not fit in a `usize`; `raw` keeps
    /// the source text so an unfilled slot renders exactly as written.
    Indexed { index: Option<usize>, raw: &'a str },

    /// Unnumbered slot: `{}`.
    Next,
}

impl<'a> Template<'a> {
    /// A template made of a single literal.
    pub fn literal(text: &'a str) -> Self {
        Self {
            segments: vec![Segment::Literal(text)],
        }
    }

    /// Whether any segment is a placeholder.
    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| !matches!(segment, Segment::Literal(_)))
    }
}

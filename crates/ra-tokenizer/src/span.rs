//! Byte ranges into an accessor expression.

/// Half-open byte range `start..end` into the text being tokenized.
///
/// Spans come from the tokenizer and are always valid for the buffer they
/// were produced from. Spans built by hand can be checked with [`Span::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub fn empty(pos: u32) -> Self {
        Self::new(pos, pos)
    }

    /// Span covering all of `text`.
    #[inline]
    pub fn of(text: &str) -> Self {
        Self::new(0, text.len() as u32)
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes this span selects in `text`, or `None` if it runs past the
    /// end or splits a character.
    #[inline]
    pub fn get<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(std::ops::Range::from(*self))
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start as usize..span.end as usize
    }
}

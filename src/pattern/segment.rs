use bitflags::bitflags;
use smallvec::SmallVec;

use crate::arena::ByteRef;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        /// Leading `!`: a match un-ignores the path.
        const NEGATED = 0b0001;
        /// Trailing `/`: matches directories only.
        const DIR_ONLY = 0b0010;
        /// Matching starts at component 0.
        const ANCHORED = 0b0100;
        /// Body carries no `*`, `?` or `[` metacharacters.
        const LITERAL = 0b1000;
    }
}

/// Byte-set from a `[...]` pattern construct. Ranges are closed intervals;
/// ill-formed ranges never make it past compilation.
#[derive(Debug, Clone, Default)]
pub struct CharClass {
    pub(crate) chars: SmallVec<[u8; 8]>,
    pub(crate) ranges: SmallVec<[(u8, u8); 4]>,
    pub(crate) negated: bool,
}

impl CharClass {
    /// Raw membership, negation not applied. The matcher layers case folding
    /// and the negation rule on top.
    #[inline(always)]
    pub fn holds(&self, b: u8) -> bool {
        self.chars.contains(&b) || self.ranges.iter().any(|&(lo, hi)| lo <= b && b <= hi)
    }

    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.ranges.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Element {
    /// Exact byte run; never contains `/`.
    Literal(ByteRef),
    /// Zero or more non-`/` bytes.
    Star,
    /// Exactly one non-`/` byte.
    SingleChar,
    Class(CharClass),
}

pub type ElementList = SmallVec<[Element; 4]>;

#[derive(Debug, Clone)]
pub enum Segment {
    /// A `**` standing alone between slashes; matches zero or more components.
    Globstar,
    Normal(ElementList),
}

impl Segment {
    #[inline(always)]
    pub fn is_globstar(&self) -> bool {
        matches!(self, Segment::Globstar)
    }
}

pub type SegmentList = SmallVec<[Segment; 4]>;

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    raw: ByteRef,
    segments: SegmentList,
    flags: PatternFlags,
    literal_basename: Option<ByteRef>,
    min_depth: u16,
}

impl CompiledPattern {
    pub(crate) fn new(
        raw: ByteRef,
        segments: SegmentList,
        flags: PatternFlags,
        literal_basename: Option<ByteRef>,
    ) -> Self {
        let min_depth = segments.iter().filter(|s| !s.is_globstar()).count() as u16;
        Self {
            raw,
            segments,
            flags,
            literal_basename,
            min_depth,
        }
    }

    /// Original rule text, kept for diagnostics.
    #[inline]
    pub fn raw_text(&self) -> &[u8] {
        self.raw.as_slice()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline(always)]
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.flags.contains(PatternFlags::NEGATED)
    }

    #[inline(always)]
    pub fn is_dir_only(&self) -> bool {
        self.flags.contains(PatternFlags::DIR_ONLY)
    }

    #[inline(always)]
    pub fn is_anchored(&self) -> bool {
        self.flags.contains(PatternFlags::ANCHORED)
    }

    #[inline(always)]
    pub fn is_literal(&self) -> bool {
        self.flags.contains(PatternFlags::LITERAL)
    }

    /// Unescaped final segment when the whole body is literal; feeds the
    /// basename index.
    #[inline]
    pub fn literal_basename(&self) -> Option<&[u8]> {
        self.literal_basename.as_ref().map(|r| r.as_slice())
    }

    /// Count of non-globstar segments. A path with fewer components can never
    /// match.
    #[inline(always)]
    pub fn min_depth(&self) -> u16 {
        self.min_depth
    }
}

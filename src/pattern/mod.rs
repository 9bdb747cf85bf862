mod error;
mod lexer;
mod matcher;
mod segment;

pub use error::{PatternError, PatternResult};
pub use lexer::compile_line;
pub use matcher::match_pattern;
pub use segment::{
    CharClass, CompiledPattern, Element, ElementList, PatternFlags, Segment, SegmentList,
};

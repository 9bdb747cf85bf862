use smallvec::SmallVec;

pub type PatternId = u32;

// Reduce type complexity with aliases for readability and clippy friendliness
pub type ComponentList<'a> = SmallVec<[&'a [u8]; 16]>;

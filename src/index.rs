use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::types::PatternId;

/// Per-bucket cap; a basename claimed by more rules than this stops being
/// indexed and those rules are found by the ordered scan alone.
pub const BUCKET_CAP: usize = 8;

type Bucket = SmallVec<[PatternId; BUCKET_CAP]>;

/// Lowercased basename -> ids of literal rules ending in that basename.
///
/// Purely a hint. The evaluator's ordered scan stays authoritative; the index
/// feeds statistics and cheap relevance pre-checks, never the final decision.
#[derive(Debug, Default)]
pub struct LiteralIndex {
    buckets: FastHashMap<Box<[u8]>, Bucket>,
}

impl LiteralIndex {
    pub fn new() -> Self {
        Self {
            buckets: FastHashMap::new(),
        }
    }

    pub fn insert(&mut self, basename: &[u8], id: PatternId) {
        let key = lower_key(basename);
        let bucket = self.buckets.entry(key).or_default();
        if bucket.len() < BUCKET_CAP {
            bucket.push(id);
        }
        // overflow is simply not indexed
    }

    #[inline]
    pub fn candidates(&self, basename: &[u8]) -> &[PatternId] {
        // stack buffer keeps the query path allocation-free for normal names
        let mut key: SmallVec<[u8; 32]> = SmallVec::with_capacity(basename.len());
        key.extend(basename.iter().map(|b| b.to_ascii_lowercase()));
        self.buckets
            .get(key.as_slice())
            .map(|b| b.as_slice())
            .unwrap_or(&[])
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

fn lower_key(basename: &[u8]) -> Box<[u8]> {
    basename.to_ascii_lowercase().into_boxed_slice()
}

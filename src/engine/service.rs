use crate::arena::{Arena, ByteRef};
use crate::engine::{EngineMetrics, EngineOptions, MetricsSnapshot};
use crate::errors::EngineResult;
use crate::evaluator;
use crate::index::LiteralIndex;
use crate::path::split_components;
use crate::pattern::{compile_line, CompiledPattern};
use crate::types::PatternId;

/// A compiled, queryable gitignore rule set.
///
/// Rules are appended with [`add`](Engine::add) in evaluation order; queries
/// answer whether a relative, forward-slash path is ignored under
/// last-match-wins semantics with parent-directory exclusion. Once all adds
/// are done the engine is immutable and may be shared freely (wrap it in an
/// `Arc` for cross-thread use).
#[derive(Debug, Default)]
pub struct Engine {
    options: EngineOptions,
    arena: Arena,
    patterns: Vec<CompiledPattern>,
    index: LiteralIndex,
    metrics: EngineMetrics,
}

// SAFETY: the `ByteRef` handles held by `patterns` point either into `arena`,
// which lives exactly as long as the engine and only grows under `&mut self`,
// or at `'static` rule text. No `&self` method writes anything but the atomic
// counters.
unsafe impl Send for Engine {}
unsafe impl Sync for Engine {}

impl Engine {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            options,
            arena: Arena::new(),
            patterns: Vec::new(),
            index: LiteralIndex::new(),
            metrics: EngineMetrics::default(),
        }
    }

    /// Appends rules from `text`, one per line. Lines are split on `\n` with
    /// a single trailing `\r` stripped; malformed lines are skipped silently.
    /// The text is copied into the engine's arena.
    #[tracing::instrument(level = "trace", skip(self, text), fields(text_len = text.len() as u64))]
    pub fn add(&mut self, text: &str) {
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let raw = self.arena.alloc_bytes(line.as_bytes());
            self.push_line(raw);
        }
    }

    /// Zero-copy variant of [`add`](Engine::add) for rule text with static
    /// lifetime; the raw bytes are referenced, not copied.
    pub fn add_static(&mut self, text: &'static str) {
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.push_line(Arena::borrow_static(line.as_bytes()));
        }
    }

    fn push_line(&mut self, raw: ByteRef) {
        match compile_line(&self.arena, raw) {
            Ok(pattern) => {
                let id = self.patterns.len() as PatternId;
                if let Some(basename) = pattern.literal_basename() {
                    self.index.insert(basename, id);
                }
                self.patterns.push(pattern);
                self.metrics.record_compiled();
            }
            Err(reason) => {
                tracing::event!(tracing::Level::TRACE, reason = %reason, "rule line skipped");
                self.metrics.record_skipped();
            }
        }
    }

    /// Whether `path` is ignored, treating it as a file unless it carries a
    /// trailing slash.
    pub fn ignores(&self, path: &str) -> bool {
        self.ignores_with(path, false)
    }

    /// Whether `path` is ignored. Invalid inputs (absolute paths, drive
    /// prefixes, leading `.`/`..` components, over-deep paths) are never
    /// ignored.
    pub fn ignores_with(&self, path: &str, is_dir: bool) -> bool {
        self.try_ignores(path, is_dir).unwrap_or(false)
    }

    /// Same as [`ignores_with`](Engine::ignores_with), surfacing the path
    /// rejection instead of folding it to `false`.
    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path, is_dir = is_dir))]
    pub fn try_ignores(&self, path: &str, is_dir: bool) -> EngineResult<bool> {
        let split = split_components(path, is_dir, self.options.max_components)?;

        let metrics = self.options.track_stats.then_some(&self.metrics);
        if let Some(metrics) = metrics {
            metrics.record_query();
            if let Some(basename) = split.components.last()
                && !self.index.candidates(basename).is_empty()
            {
                metrics.record_literal_hit();
            }
        }

        Ok(evaluator::query(
            &self.patterns,
            &split.components,
            split.is_dir,
            self.options.ignore_case,
            metrics,
        ))
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Bytes currently held by the pattern arena.
    pub fn arena_bytes(&self) -> usize {
        self.arena.allocated_bytes()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

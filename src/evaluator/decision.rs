use crate::engine::EngineMetrics;
use crate::pattern::{match_pattern, CompiledPattern};

/// Ordered last-match-wins scan over the whole rule set. A rule that does not
/// match never changes the running bit; a rule that does sets it to the
/// opposite of its negation.
pub fn evaluate_set(
    patterns: &[CompiledPattern],
    components: &[&[u8]],
    is_dir: bool,
    fold_case: bool,
    metrics: Option<&EngineMetrics>,
) -> bool {
    let mut ignored = false;

    for pattern in patterns {
        if pattern.min_depth() as usize > components.len() {
            continue;
        }
        if let Some(metrics) = metrics
            && !pattern.is_literal()
        {
            metrics.record_glob_check();
        }
        if match_pattern(pattern, components, is_dir, fold_case) {
            ignored = !pattern.is_negated();
        }
    }

    ignored
}

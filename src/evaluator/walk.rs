use crate::engine::EngineMetrics;
use crate::evaluator::evaluate_set;
use crate::pattern::CompiledPattern;

/// Full decision for one path: parent-directory exclusion first, then the
/// final last-match-wins pass.
///
/// Each proper prefix is evaluated as a directory; if any prefix ends up
/// ignored, nothing beneath it can be re-included and the query ends there.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(components = components.len() as u64, is_dir = is_dir)
)]
pub fn query(
    patterns: &[CompiledPattern],
    components: &[&[u8]],
    is_dir: bool,
    fold_case: bool,
    metrics: Option<&EngineMetrics>,
) -> bool {
    for depth in 1..components.len() {
        if evaluate_set(patterns, &components[..depth], true, fold_case, metrics) {
            return true;
        }
    }

    evaluate_set(patterns, components, is_dir, fold_case, metrics)
}

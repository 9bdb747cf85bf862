use crate::pattern::{CharClass, CompiledPattern, Element, Segment};

/// Runs one compiled pattern against a path split into components.
#[tracing::instrument(
    level = "trace",
    skip(pattern, components),
    fields(segments = pattern.segments().len() as u64, components = components.len() as u64)
)]
pub fn match_pattern(
    pattern: &CompiledPattern,
    components: &[&[u8]],
    is_dir: bool,
    fold_case: bool,
) -> bool {
    if pattern.is_dir_only() && !is_dir {
        return false;
    }

    let segments = pattern.segments();
    if pattern.is_anchored() {
        return match_segments(segments, components, 0, 0, fold_case);
    }
    // unanchored rules may start at any component boundary; the inclusive
    // upper bound lets a leading globstar match the empty prefix
    for start in 0..=components.len() {
        if match_segments(segments, components, 0, start, fold_case) {
            return true;
        }
    }
    false
}

fn match_segments(
    segments: &[Segment],
    components: &[&[u8]],
    i: usize,
    j: usize,
    fold: bool,
) -> bool {
    if i == segments.len() {
        return j == components.len();
    }
    if j == components.len() {
        // only globstars can absorb an exhausted path, and a lone trailing
        // globstar still demands at least one child
        return segments[i..].iter().all(Segment::is_globstar) && segments.len() - i != 1;
    }

    match &segments[i] {
        Segment::Normal(elements) => {
            match_elements(elements, components[j], fold)
                && match_segments(segments, components, i + 1, j + 1, fold)
        }
        Segment::Globstar => {
            if i == segments.len() - 1 {
                // trailing globstar with at least one component left consumes
                // the remainder
                return true;
            }
            if match_segments(segments, components, i + 1, j, fold) {
                return true;
            }
            match_segments(segments, components, i, j + 1, fold)
        }
    }
}

#[inline]
fn match_elements(elements: &[Element], text: &[u8], fold: bool) -> bool {
    match_elements_at(elements, text, 0, 0, fold)
}

fn match_elements_at(elements: &[Element], text: &[u8], e: usize, t: usize, fold: bool) -> bool {
    if e == elements.len() {
        return t == text.len();
    }

    match &elements[e] {
        Element::Literal(run) => {
            let run = run.as_slice();
            if t + run.len() > text.len() {
                return false;
            }
            let slice = &text[t..t + run.len()];
            let eq = if fold {
                slice.eq_ignore_ascii_case(run)
            } else {
                slice == run
            };
            eq && match_elements_at(elements, text, e + 1, t + run.len(), fold)
        }
        Element::SingleChar => {
            t < text.len()
                && text[t] != b'/'
                && match_elements_at(elements, text, e + 1, t + 1, fold)
        }
        Element::Class(class) => {
            t < text.len()
                && class_matches(class, text[t], fold)
                && match_elements_at(elements, text, e + 1, t + 1, fold)
        }
        Element::Star => {
            let mut k = t;
            loop {
                if match_elements_at(elements, text, e + 1, k, fold) {
                    return true;
                }
                if k >= text.len() || text[k] == b'/' {
                    return false;
                }
                k += 1;
            }
        }
    }
}

/// With folding on, a non-negated class matches when either ASCII fold of the
/// byte is a member; a negated class only when neither fold is.
#[inline]
fn class_matches(class: &CharClass, b: u8, fold: bool) -> bool {
    let member = if fold {
        class.holds(b.to_ascii_lowercase()) || class.holds(b.to_ascii_uppercase())
    } else {
        class.holds(b)
    };
    member ^ class.is_negated()
}

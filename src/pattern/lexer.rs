use smallvec::SmallVec;

use crate::arena::{Arena, ByteRef};
use crate::pattern::{
    CharClass, CompiledPattern, Element, ElementList, PatternError, PatternFlags, PatternResult,
    Segment, SegmentList,
};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Compiles one raw gitignore line. Every `Err` is a skip condition, not a
/// failure: the caller drops the line and keeps the rest of the rule set.
#[tracing::instrument(level = "trace", skip(arena, raw), fields(line_len = raw.len() as u64))]
pub fn compile_line(arena: &Arena, raw: ByteRef) -> PatternResult<CompiledPattern> {
    let mut line: &[u8] = raw.as_slice();

    if line.starts_with(UTF8_BOM) {
        line = &line[UTF8_BOM.len()..];
    }

    // classification runs on a trimmed view; the pattern itself keeps its
    // whitespace until the escape-aware strip below
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        return Err(PatternError::EmptyLine);
    }
    if trimmed[0] == b'#' {
        return Err(PatternError::CommentLine { line: lossy(line) });
    }

    if trailing_backslashes(line, line.len()) % 2 == 1 {
        return Err(PatternError::UnterminatedEscape { line: lossy(line) });
    }

    let line = strip_trailing_whitespace(line);

    let mut flags = PatternFlags::empty();
    let mut body = line;

    if body.first() == Some(&b'!') {
        flags |= PatternFlags::NEGATED;
        body = &body[1..];
    } else if body.starts_with(b"\\!") {
        // literal '!': drop the escape, keep the byte
        body = &body[1..];
    }
    if body.starts_with(b"\\#") {
        body = &body[1..];
    }
    if body.last() == Some(&b'/') {
        flags |= PatternFlags::DIR_ONLY;
        body = &body[..body.len() - 1];
    }
    if body.first() == Some(&b'/') {
        flags |= PatternFlags::ANCHORED;
        body = &body[1..];
    } else if body.contains(&b'/') && !body.starts_with(b"**") {
        flags |= PatternFlags::ANCHORED;
    }

    if body.is_empty() {
        return Err(PatternError::EmptyBody { line: lossy(line) });
    }

    if !body.iter().any(|&b| matches!(b, b'*' | b'?' | b'[')) {
        flags |= PatternFlags::LITERAL;
    }

    let mut segments = SegmentList::new();
    for part in body.split(|&b| b == b'/') {
        if part.is_empty() {
            continue;
        }
        if part == b"**" {
            segments.push(Segment::Globstar);
        } else {
            segments.push(Segment::Normal(parse_elements(arena, part)));
        }
    }
    if segments.is_empty() {
        // slash-only bodies such as '//'
        return Err(PatternError::EmptyBody { line: lossy(line) });
    }

    let literal_basename = if flags.contains(PatternFlags::LITERAL) {
        match segments.last() {
            Some(Segment::Normal(elements)) if elements.len() == 1 => match &elements[0] {
                Element::Literal(run) => Some(*run),
                _ => None,
            },
            _ => None,
        }
    } else {
        None
    };

    Ok(CompiledPattern::new(raw, segments, flags, literal_basename))
}

/// Removes the trailing space/tab run unless the run is escaped: an odd
/// number of backslashes immediately before it preserves the whitespace
/// verbatim (element parsing later consumes the escape itself).
fn strip_trailing_whitespace(line: &[u8]) -> &[u8] {
    let mut ws_start = line.len();
    while ws_start > 0 && matches!(line[ws_start - 1], b' ' | b'\t') {
        ws_start -= 1;
    }
    if ws_start == line.len() {
        return line;
    }
    if trailing_backslashes(line, ws_start) % 2 == 1 {
        return line;
    }
    &line[..ws_start]
}

/// Count of contiguous `\` bytes ending just before `end`.
fn trailing_backslashes(line: &[u8], end: usize) -> usize {
    let mut n = 0usize;
    while n < end && line[end - 1 - n] == b'\\' {
        n += 1;
    }
    n
}

fn parse_elements(arena: &Arena, part: &[u8]) -> ElementList {
    let mut elements = ElementList::new();
    let mut run: SmallVec<[u8; 24]> = SmallVec::new();
    let mut i = 0usize;

    while i < part.len() {
        match part[i] {
            b'\\' if i + 1 < part.len() => {
                run.push(part[i + 1]);
                i += 2;
            }
            b'*' => {
                flush_run(arena, &mut run, &mut elements);
                elements.push(Element::Star);
                // consecutive stars collapse; a real globstar stood alone
                // between slashes and never reaches here
                while i < part.len() && part[i] == b'*' {
                    i += 1;
                }
            }
            b'?' => {
                flush_run(arena, &mut run, &mut elements);
                elements.push(Element::SingleChar);
                i += 1;
            }
            b'[' => match parse_char_class(part, i + 1) {
                Some((class, next)) => {
                    flush_run(arena, &mut run, &mut elements);
                    elements.push(Element::Class(class));
                    i = next;
                }
                None => {
                    // no closing ']': the bracket is an ordinary byte
                    run.push(b'[');
                    i += 1;
                }
            },
            b => {
                run.push(b);
                i += 1;
            }
        }
    }

    flush_run(arena, &mut run, &mut elements);
    elements
}

#[inline]
fn flush_run(arena: &Arena, run: &mut SmallVec<[u8; 24]>, elements: &mut ElementList) {
    if !run.is_empty() {
        elements.push(Element::Literal(arena.alloc_bytes(run)));
        run.clear();
    }
}

/// Parses the class body after `[`. Returns the class and the index just past
/// the terminating `]`, or `None` when the class never terminates.
fn parse_char_class(part: &[u8], mut i: usize) -> Option<(CharClass, usize)> {
    let mut class = CharClass::default();

    if i < part.len() && (part[i] == b'!' || part[i] == b'^') {
        class.negated = true;
        i += 1;
    }
    // a ']' in first position is a member, not the terminator
    if i < part.len() && part[i] == b']' {
        class.chars.push(b']');
        i += 1;
    }

    while i < part.len() {
        match part[i] {
            b']' => return Some((class, i + 1)),
            b'\\' if i + 1 < part.len() => {
                class.chars.push(part[i + 1]);
                i += 2;
            }
            lo if i + 2 < part.len() && part[i + 1] == b'-' && part[i + 2] != b']' => {
                let (hi, next) = if part[i + 2] == b'\\' && i + 3 < part.len() {
                    (part[i + 3], i + 4)
                } else {
                    (part[i + 2], i + 3)
                };
                // inverted ranges such as z-a are dropped, not errors
                if lo <= hi {
                    class.ranges.push((lo, hi));
                }
                i = next;
            }
            b => {
                class.chars.push(b);
                i += 1;
            }
        }
    }

    None
}

fn lossy(line: &[u8]) -> String {
    String::from_utf8_lossy(line).into_owned()
}

use memchr::memchr_iter;

use crate::path::{PathError, PathResult};
use crate::types::ComponentList;

/// A query path split into non-empty components, with the trailing-slash form
/// folded into the directory flag.
#[derive(Debug)]
pub struct SplitPath<'a> {
    pub components: ComponentList<'a>,
    pub is_dir: bool,
}

#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn split_components(path: &str, is_dir: bool, cap: usize) -> PathResult<SplitPath<'_>> {
    let bytes = path.as_bytes();

    if bytes.is_empty() {
        return Err(PathError::Empty);
    }
    if bytes[0] == b'/' {
        return Err(PathError::Absolute {
            input: path.to_string(),
        });
    }
    if bytes.len() > 1 && bytes[1] == b':' {
        return Err(PathError::DrivePrefix {
            input: path.to_string(),
        });
    }
    if path == "." || path == ".." || path.starts_with("./") || path.starts_with("../") {
        return Err(PathError::RelativeTraversal {
            input: path.to_string(),
        });
    }

    let mut end = bytes.len();
    while end > 0 && bytes[end - 1] == b'/' {
        end -= 1;
    }
    // a trailing slash names a directory regardless of the caller's flag
    let is_dir = is_dir || end < bytes.len();

    let mut components = ComponentList::new();
    let mut start = 0usize;
    for sep in memchr_iter(b'/', &bytes[..end]) {
        if sep > start {
            components.push(&bytes[start..sep]);
        }
        start = sep + 1;
    }
    if end > start {
        components.push(&bytes[start..end]);
    }

    if components.len() > cap {
        return Err(PathError::TooDeep {
            input: path.to_string(),
            depth: components.len(),
            cap,
        });
    }

    Ok(SplitPath { components, is_dir })
}

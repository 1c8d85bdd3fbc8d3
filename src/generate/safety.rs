//! Checks applied to a rendered path before anything is written.

use crate::constants::safety::{INVALID_PATH_CHARS, RESERVED_NAMES};
use crate::ext::PathExt;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a rendered path was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathRejection {
    Empty,
    InvalidCharacters,
    ReservedName(String),
    OutsideTarget,
}

impl fmt::Display for PathRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathRejection::Empty => f.write_str("path is empty after rendering"),
            PathRejection::InvalidCharacters => f.write_str("path contains invalid characters"),
            PathRejection::ReservedName(name) => {
                write!(f, "path contains reserved name '{name}'")
            }
            PathRejection::OutsideTarget => f.write_str("path resolves outside target folder"),
        }
    }
}

/// Resolves `rendered` against `target_dir` and returns the destination.
///
/// A relative `target_dir` is made absolute against the current directory
/// first. The destination must lie strictly inside it once `.` and `..` are
/// resolved; absolute rendered paths therefore fail unless they point below
/// the target.
pub fn check_rendered_path(target_dir: &Path, rendered: &str) -> Result<PathBuf, PathRejection> {
    if rendered.trim().is_empty() {
        return Err(PathRejection::Empty);
    }
    if rendered.contains(INVALID_PATH_CHARS) {
        return Err(PathRejection::InvalidCharacters);
    }
    if let Some(reserved) = rendered.split(['/', '\\']).find(|segment| is_reserved(segment)) {
        return Err(PathRejection::ReservedName(reserved.to_string()));
    }

    let Ok(target) = std::path::absolute(target_dir) else {
        return Err(PathRejection::OutsideTarget);
    };
    let target = target.normalize_lexically();
    let destination = target.join(rendered).normalize_lexically();
    if destination == target || !destination.starts_with(&target) {
        return Err(PathRejection::OutsideTarget);
    }
    Ok(destination)
}

fn is_reserved(segment: &str) -> bool {
    RESERVED_NAMES.iter().any(|name| segment.eq_ignore_ascii_case(name))
}

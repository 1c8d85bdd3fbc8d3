use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static SOURCE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(tsx|jsx|ts|js)$").expect("valid regex"));

/// Swaps a trailing `.tsx`/`.jsx`/`.ts`/`.js` (any case) for `.{extension}`.
/// Paths with any other ending are returned unchanged.
pub fn replace_source_extension(path: &str, extension: &str) -> String {
    SOURCE_EXTENSION.replace(path, NoExpand(&format!(".{extension}"))).into_owned()
}

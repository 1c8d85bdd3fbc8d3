use std::path::{Component, Path, PathBuf};

/// Extension trait for Path to provide lexical normalization
pub trait PathExt {
    /// Resolves `.` and `..` components without touching the file system.
    ///
    /// `..` at the root stays at the root; leading `..` of a relative path is kept.
    ///
    /// # Examples
    /// ```
    /// use blueprint_architect::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("/ws/src/./components/../hooks");
    /// assert_eq!(path.normalize_lexically(), PathBuf::from("/ws/src/hooks"));
    /// ```
    fn normalize_lexically(&self) -> PathBuf;
}

impl PathExt for Path {
    fn normalize_lexically(&self) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => normalized.push(".."),
                },
                other => normalized.push(other.as_os_str()),
            }
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_normalize_resolves_parent_components() {
        let path = Path::new("/ws/src/../../etc/passwd");
        assert_eq!(path.normalize_lexically(), PathBuf::from("/etc/passwd"));
    }

    #[test]
    fn test_normalize_stops_at_root() {
        let path = Path::new("/../../x");
        assert_eq!(path.normalize_lexically(), PathBuf::from("/x"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_of_relative_path() {
        assert_eq!(Path::new("out/../../x").normalize_lexically(), PathBuf::from("../x"));
        assert_eq!(Path::new("../../x").normalize_lexically(), PathBuf::from("../../x"));
    }

    #[test]
    fn test_normalize_drops_current_dir() {
        assert_eq!(Path::new("./a/./b/.").normalize_lexically(), PathBuf::from("a/b"));
    }
}

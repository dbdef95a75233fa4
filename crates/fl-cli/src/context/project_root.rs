use std::path::{Path, PathBuf};

const PROJECT_DIR: &str = ".fieldline";

/// Walk up from `start` to the nearest directory holding `.fieldline/`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_ancestor_with_marker() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let root = tmp.path().join("site");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(root.join(PROJECT_DIR)).expect("mkdir marker");
        std::fs::create_dir_all(&nested).expect("mkdir nested");

        assert_eq!(find_project_root(&nested), Some(root));
    }

    #[test]
    fn none_without_marker() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert_eq!(find_project_root(tmp.path()), None);
    }
}

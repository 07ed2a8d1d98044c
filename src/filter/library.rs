use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::definition::FilterDefinition;
use super::error::FilterError;
use super::loader::load_file;

/// Built-in filter directory: next to the executable, then up to two parents
/// (for the target/debug layout), then the crate's own `filters` directory.
pub fn find_filters_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(ref dir) = exe_dir {
        for candidate in dir.ancestors().take(3) {
            let filters_dir = candidate.join("filters");
            if filters_dir.exists() {
                return filters_dir;
            }
        }
    }

    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir).join("filters")
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

/// Filter files directly inside `dirs` whose extension is one of `extensions`.
/// Missing directories are skipped.
pub fn list_filters(dirs: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in dirs {
        if !dir.exists() {
            log::debug!("Filter directory {} does not exist", dir.display());
            continue;
        }
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_file() && has_extension(&path, extensions) {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Parse every file independently. Results keep the order of `paths`.
pub fn load_all(paths: &[PathBuf]) -> Vec<(PathBuf, Result<FilterDefinition, FilterError>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), load_file(path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        let exts = vec!["comp".to_string(), "hlsl".to_string()];
        assert!(has_extension(Path::new("a/blur.COMP"), &exts));
        assert!(has_extension(Path::new("sharpen.hlsl"), &exts));
        assert!(!has_extension(Path::new("notes.txt"), &exts));
        assert!(!has_extension(Path::new("comp"), &exts));
    }

    #[test]
    fn missing_dirs_are_skipped() {
        let files = list_filters(&[PathBuf::from("/definitely/not/here")], &["comp".into()]).unwrap();
        assert!(files.is_empty());
    }
}

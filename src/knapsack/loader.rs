//! Plain-text instance loader.
//!
//! Format: capacity on line 1, whitespace-separated profits on line 2,
//! whitespace-separated weights on line 3.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

use super::Instance;

/// Loads an instance file, failing with [`Error::Input`] on any parse
/// problem or a profit/weight length mismatch.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Input(format!("cannot read {}: {e}", path.display())))?;
    let mut lines = text.lines();

    let capacity = lines
        .next()
        .ok_or_else(|| Error::Input("missing capacity line".into()))?
        .trim()
        .parse::<u64>()
        .map_err(|e| Error::Input(format!("invalid capacity: {e}")))?;

    let profit = parse_row(lines.next(), "profit")?;
    let weight = parse_row(lines.next(), "weight")?;

    Instance::new(capacity, profit, weight)
}

fn parse_row(line: Option<&str>, name: &str) -> Result<Vec<u64>, Error> {
    let line = line.ok_or_else(|| Error::Input(format!("missing {name} line")))?;
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<u64>()
                .map_err(|e| Error::Input(format!("invalid {name} value {tok:?}: {e}")))
        })
        .collect()
}

/// Lists the `.txt` instance files in a directory, sorted by name.
pub fn list_instances(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, Error> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .map_err(|e| Error::Input(format!("cannot list {}: {e}", dir.display())))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| Error::Input(format!("cannot list {}: {e}", dir.display())))?
            .path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("knapsack-anneal-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_instance() {
        let path = write_temp("valid.txt", "10\n60 100 120\n10 20 30\n");
        let instance = load_instance(&path).unwrap();
        assert_eq!(instance.capacity(), 10);
        assert_eq!(instance.profit(), &[60, 100, 120]);
        assert_eq!(instance.weight(), &[10, 20, 30]);
    }

    #[test]
    fn test_load_rejects_length_mismatch() {
        let path = write_temp("mismatch.txt", "10\n60 100 120\n10 20\n");
        let err = load_instance(&path).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let path = write_temp("garbage.txt", "ten\n60 100\n10 20\n");
        assert!(matches!(load_instance(&path), Err(Error::Input(_))));

        let path = write_temp("negative.txt", "10\n60 -100\n10 20\n");
        assert!(matches!(load_instance(&path), Err(Error::Input(_))));

        let path = write_temp("truncated.txt", "10\n60 100\n");
        assert!(matches!(load_instance(&path), Err(Error::Input(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_instance("/nonexistent/instance.txt").unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_list_instances_sorted_txt_only() {
        let dir = std::env::temp_dir().join(format!("knapsack-list-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.txt"), "1\n1\n1\n").unwrap();
        fs::write(dir.join("a.txt"), "1\n1\n1\n").unwrap();
        fs::write(dir.join("notes.md"), "not an instance").unwrap();

        let files = list_instances(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }
}

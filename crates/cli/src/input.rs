//! Primary/overlay stream resolution for the viewer commands.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where the primary algorithm output comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Positional path wins over `-o`; neither means stdin. A named path must
    /// exist before anything is parsed.
    pub fn resolve(positional: Option<PathBuf>, flag: Option<PathBuf>) -> Result<Source> {
        match positional.or(flag) {
            None => Ok(Source::Stdin),
            Some(path) => {
                if !path.is_file() {
                    bail!("provided output filepath is invalid: {}", path.display());
                }
                Ok(Source::File(path))
            }
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) => open_file(path).map(|r| Box::new(r) as Box<dyn BufRead>),
        }
    }
}

/// Open the optional overlay file. A named but missing file is an error.
pub fn overlay(path: Option<&Path>) -> Result<Option<BufReader<File>>> {
    match path {
        None => Ok(None),
        Some(p) => {
            if !p.is_file() {
                bail!("provided input filepath is invalid: {}", p.display());
            }
            open_file(p).map(Some)
        }
    }
}

fn open_file(path: &Path) -> Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn positional_wins_over_flag() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "(0, 0)\n").unwrap();
        fs::write(&b, "(1, 1)\n").unwrap();
        let src = Source::resolve(Some(a.clone()), Some(b)).unwrap();
        assert_eq!(src, Source::File(a));
    }

    #[test]
    fn no_path_means_stdin() {
        assert_eq!(Source::resolve(None, None).unwrap(), Source::Stdin);
    }

    #[test]
    fn missing_paths_fail_before_parsing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = Source::resolve(None, Some(missing.clone())).unwrap_err();
        assert!(err.to_string().contains("provided output filepath is invalid"));
        assert!(overlay(Some(&missing)).is_err());
        assert!(overlay(None).unwrap().is_none());
    }
}

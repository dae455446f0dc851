//! Filename Completion Module
//!
//! Completes the word under the cursor against entries of the working
//! directory. Matching is case-insensitive prefix equality; candidates keep
//! directory-scan order. The multiple-match policy is "show, don't complete":
//! matches are listed and the buffer stays untouched.

use std::fs;
use std::path::Path;

/// A directory entry offered as a completion candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub is_dir: bool,
}

/// Outcome of a completion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing matched; no visible effect
    None,
    /// Exactly one match; `replacement` carries a trailing `/` for directories
    Single { replacement: String, is_dir: bool },
    /// Two or more matches, in directory-scan order
    Multiple(Vec<Candidate>),
}

/// Find the start of the word under the cursor: right after the last space
/// before the cursor, or the buffer start when there is none.
pub fn word_start(chars: &[char], cursor: usize) -> usize {
    let mut start = cursor;
    while start > 0 && chars[start - 1] != ' ' {
        start -= 1;
    }
    start
}

/// Resolve the completion for the word `[word_start, cursor)` of `chars`
/// against the given candidates.
pub fn complete_word(chars: &[char], cursor: usize, candidates: &[Candidate]) -> Completion {
    let start = word_start(chars, cursor);
    let prefix: String = chars[start..cursor].iter().collect();
    let prefix_lower = prefix.to_lowercase();

    let matches: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&prefix_lower))
        .collect();

    match matches.as_slice() {
        [] => Completion::None,
        [single] => {
            let mut replacement = single.name.clone();
            if single.is_dir {
                replacement.push('/');
            }
            Completion::Single {
                replacement,
                is_dir: single.is_dir,
            }
        }
        many => Completion::Multiple(many.iter().map(|c| (*c).clone()).collect()),
    }
}

/// List completion candidates for a directory, in scan order. An unreadable
/// directory yields an empty list rather than an error.
pub fn scan_dir(path: &Path) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            candidates.push(Candidate { name, is_dir });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(specs: &[(&str, bool)]) -> Vec<Candidate> {
        specs
            .iter()
            .map(|(name, is_dir)| Candidate {
                name: name.to_string(),
                is_dir: *is_dir,
            })
            .collect()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start(&chars("cat readme"), 10), 4);
        assert_eq!(word_start(&chars("readme"), 6), 0);
        assert_eq!(word_start(&chars(""), 0), 0);
        assert_eq!(word_start(&chars("a b "), 4), 4);
    }

    #[test]
    fn test_multiple_matches_in_scan_order() {
        let listing = candidates(&[("readme.md", false), ("readme.txt", false), ("report.csv", false)]);
        let line = chars("read");
        match complete_word(&line, 4, &listing) {
            Completion::Multiple(matches) => {
                let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["readme.md", "readme.txt"]);
            }
            other => panic!("expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_single_directory_match_gets_separator() {
        let listing = candidates(&[("docs", true)]);
        let line = chars("do");
        assert_eq!(
            complete_word(&line, 2, &listing),
            Completion::Single {
                replacement: "docs/".to_string(),
                is_dir: true,
            }
        );
    }

    #[test]
    fn test_single_file_match() {
        let listing = candidates(&[("Makefile", false), ("main.rs", false)]);
        let line = chars("cat mak");
        assert_eq!(
            complete_word(&line, 7, &listing),
            Completion::Single {
                replacement: "Makefile".to_string(),
                is_dir: false,
            }
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let listing = candidates(&[("README.md", false)]);
        let line = chars("read");
        match complete_word(&line, 4, &listing) {
            Completion::Single { replacement, .. } => assert_eq!(replacement, "README.md"),
            other => panic!("expected single match, got {:?}", other),
        }
    }

    #[test]
    fn test_no_matches() {
        let listing = candidates(&[("src", true)]);
        let line = chars("zz");
        assert_eq!(complete_word(&line, 2, &listing), Completion::None);
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let listing = candidates(&[("a", false), ("b", false)]);
        let line = chars("ls ");
        match complete_word(&line, 3, &listing) {
            Completion::Multiple(matches) => assert_eq!(matches.len(), 2),
            other => panic!("expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_dir_on_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("file.txt"), "x").unwrap();

        let mut found = scan_dir(dir.path());
        found.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "file.txt");
        assert!(!found[0].is_dir);
        assert_eq!(found[1].name, "sub");
        assert!(found[1].is_dir);
    }

    #[test]
    fn test_scan_dir_unreadable_is_empty() {
        let missing = Path::new("/definitely/not/a/real/path");
        assert!(scan_dir(missing).is_empty());
    }
}

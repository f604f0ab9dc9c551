//! # Wordlists
//!
//! Built-in candidate labels and endpoint paths, and loading of user wordlists.
//!
//! The default label list is kept verbatim, including the repeated `staging`
//! entry. Every entry is dispatched, so a run always sends exactly two probes
//! per entry; the duplicate collapses in the live host set.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::network::target::is_valid_subdomain_prefix;

pub const DEFAULT_LABELS: &[&str] = &[
    "www", "mail", "ftp", "localhost", "webmail", "smtp", "pop", "ns1",
    "admin", "test", "portal", "api", "staging", "dev", "development",
    "uat", "qa", "demo", "staging", "beta", "app", "web", "mail2",
    "ns2", "cpanel", "whm", "autodiscover", "autoconfig", "webdisk",
];

pub const DEFAULT_PATHS: &[&str] = &[
    "/.well-known/security.txt",
    "/admin", "/admin/", "/admin/login",
    "/api", "/api/", "/api/v1",
    "/login", "/signin", "/auth",
    "/config", "/config.php", "/config.json",
    "/backup", "/backup.zip",
    "/.git/config", "/.env",
    "/robots.txt", "/sitemap.xml",
];

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("could not read wordlist {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("wordlist {} contains no labels", .0.display())]
    Empty(PathBuf),
    #[error("line {line}: '{label}' is not a valid subdomain label")]
    InvalidLabel { line: usize, label: String },
}

pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|label| label.to_string()).collect()
}

pub fn default_paths() -> Vec<String> {
    DEFAULT_PATHS.iter().map(|path| path.to_string()).collect()
}

/// Reads one label per line from `path`.
pub fn load_labels(path: &Path) -> Result<Vec<String>, WordlistError> {
    let contents = fs::read_to_string(path).map_err(|source| WordlistError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let labels = parse_labels(&contents)?;
    if labels.is_empty() {
        return Err(WordlistError::Empty(path.to_path_buf()));
    }
    Ok(labels)
}

/// Blank lines and `#` comments are skipped; surrounding whitespace is trimmed.
///
/// Entries may be dotted (`dev.api`), but every label must be `[a-z0-9-]`.
/// The first entry that is not fails the whole list, with its 1-based line.
pub fn parse_labels(contents: &str) -> Result<Vec<String>, WordlistError> {
    let mut labels: Vec<String> = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let label = line.trim_end_matches('.').to_ascii_lowercase();
        if label.is_empty() {
            continue;
        }
        if !is_valid_subdomain_prefix(&label) {
            return Err(WordlistError::InvalidLabel {
                line: idx + 1,
                label: line.to_string(),
            });
        }
        labels.push(label);
    }

    Ok(labels)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_are_kept_verbatim() {
        assert_eq!(DEFAULT_LABELS.len(), 29);
        assert_eq!(DEFAULT_LABELS.first(), Some(&"www"));
        assert_eq!(DEFAULT_LABELS.last(), Some(&"webdisk"));
        let staging = DEFAULT_LABELS.iter().filter(|l| **l == "staging").count();
        assert_eq!(staging, 2);
    }

    #[test]
    fn default_paths_all_start_with_slash() {
        assert_eq!(DEFAULT_PATHS.len(), 19);
        assert!(DEFAULT_PATHS.iter().all(|p| p.starts_with('/')));
        assert!(DEFAULT_PATHS.contains(&"/.git/config"));
    }

    #[test]
    fn parse_labels_skips_comments_and_blank_lines() {
        let contents = "# common\nwww\n\n  API  \nvpn.\n#dev\n";
        assert_eq!(parse_labels(contents).unwrap(), vec!["www", "api", "vpn"]);
    }

    #[test]
    fn parse_labels_accepts_dotted_entries() {
        let labels = parse_labels("dev.api\nint-01.eu\n").unwrap();
        assert_eq!(labels, vec!["dev.api", "int-01.eu"]);
    }

    #[test]
    fn parse_labels_rejects_entries_that_escape_the_target() {
        let err = parse_labels("www\nevil.org/\n").unwrap_err();
        assert!(matches!(
            err,
            WordlistError::InvalidLabel { line: 2, ref label } if label == "evil.org/"
        ));

        let err = parse_labels("# creds\nuser@attacker.net:8080#\n").unwrap_err();
        assert!(matches!(err, WordlistError::InvalidLabel { line: 2, .. }));
    }

    #[test]
    fn parse_labels_rejects_empty_inner_labels_and_bad_characters() {
        for bad in ["a..b", "-www", "w_w", "*.dev", "api?x"] {
            assert!(parse_labels(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn load_labels_fails_on_invalid_line() {
        let path = std::env::temp_dir().join(format!("subprobe-invalid-{}.txt", std::process::id()));
        fs::write(&path, "www\napi\nhttps://elsewhere.net\n").unwrap();
        let result = load_labels(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(WordlistError::InvalidLabel { line: 3, .. })));
    }

    #[test]
    fn load_labels_reports_missing_file() {
        let path = Path::new("/nonexistent/subprobe/wordlist.txt");
        let err = load_labels(path).unwrap_err();
        assert!(matches!(err, WordlistError::Read { .. }));
        assert!(err.to_string().contains("wordlist.txt"));
    }

    #[test]
    fn load_labels_rejects_comment_only_file() {
        let path = std::env::temp_dir().join(format!("subprobe-empty-{}.txt", std::process::id()));
        fs::write(&path, "# nothing here\n\n").unwrap();
        let result = load_labels(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(WordlistError::Empty(_))));
    }
}

//! Portfolio content: who the portfolio is about and what it shows.
//!
//! A `Profile` is plain serde data. The binary ships a built-in default so
//! the TUI works out of the box; a user can override it with a JSON file at
//! `<config_dir>/termfolio/profile.json` (or an explicit `--profile` path).
//! All text rendering happens elsewhere — this module is data and loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ============================================================================
// DATA
// ============================================================================

/// One project writeup, shown by `cat <name>` and as a scene card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Command-line handle, e.g. "pygit" for `cat pygit`.
    pub name: String,
    /// Human title for headers and scene cards.
    pub title: String,
    /// One-line summary.
    pub summary: String,
    /// Bullet lines for the writeup body.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Short status line, e.g. "fully functional".
    #[serde(default)]
    pub status: String,
    /// Boot-style log lines printed by `run <name>`. Empty = not runnable.
    #[serde(default)]
    pub run_log: Vec<String>,
}

/// Everything the command surface renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Free-form study notes, shown by `view notes`.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Profile {
    /// Look up a project by its command-line handle, case-insensitively.
    /// A trailing ".md" is tolerated so `cat pygit.md` also resolves.
    pub fn project(&self, name: &str) -> Option<&Project> {
        let wanted = name.trim().trim_end_matches(".md").to_lowercase();
        self.projects.iter().find(|p| p.name.to_lowercase() == wanted)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Raj Kumar".into(),
            role: "Full-Stack Developer & Systems Thinker".into(),
            tagline: "Learning for the purpose of learning.".into(),
            focus: vec![
                "Backend Systems".into(),
                "DevOps".into(),
                "AI/ML Pipelines".into(),
            ],
            stack: vec![
                "Python".into(),
                "FastAPI".into(),
                "SvelteKit".into(),
                "Rust".into(),
                "Docker".into(),
                "AWS".into(),
            ],
            contact: "github.com/rajkumar".into(),
            projects: vec![
                Project {
                    name: "pygit".into(),
                    title: "PyGit — a version control system from scratch".into(),
                    summary: "Git's core internals reimplemented to understand them.".into(),
                    highlights: vec![
                        "Content-addressable blob store (SHA-1, zlib)".into(),
                        "Commit DAG with three-way merge and conflict markers".into(),
                        "Myers diff between working tree and index".into(),
                    ],
                    status: "fully functional".into(),
                    run_log: Vec::new(),
                },
                Project {
                    name: "job_scraper".into(),
                    title: "Job Scraper — aggregation pipeline".into(),
                    summary: "Crawls job boards, deduplicates, serves a REST API.".into(),
                    highlights: vec![
                        "Async crawlers with rotating proxies".into(),
                        "Fuzzy-match deduplication pipeline".into(),
                        "Postgres full-text search behind a REST API".into(),
                    ],
                    status: "operational".into(),
                    run_log: vec![
                        "BOOT  job_scraper v2.1.0".into(),
                        "OK    loading environment".into(),
                        "OK    database connected".into(),
                        "CRAWL spider=linkedin_jobs — 142 listings".into(),
                        "CRAWL spider=indeed_jobs — 98 listings".into(),
                        "DEDUP removed 23 duplicates (fuzzy match)".into(),
                        "READY listening on port 8000".into(),
                    ],
                },
            ],
            notes: vec![
                "SOLID: one reason to change per type; depend on abstractions.".into(),
                "State pattern fits animated UI transitions better than flags.".into(),
                "Elevator scheduling: SCAN beats FCFS under bursty load.".into(),
            ],
        }
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Default on-disk location: `<config_dir>/termfolio/profile.json`.
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("termfolio").join("profile.json"))
}

/// Load the profile to render from.
///
/// An explicit path must exist and parse; errors propagate. With no explicit
/// path, a missing default file falls back to the built-in profile (not an
/// error), but a present-and-malformed one still fails loudly.
pub fn load_profile(explicit: Option<&Path>) -> io::Result<Profile> {
    match explicit {
        Some(path) => read_profile(path),
        None => match default_profile_path() {
            Some(path) if path.exists() => read_profile(&path),
            _ => Ok(Profile::default()),
        },
    }
}

fn read_profile(path: &Path) -> io::Result<Profile> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid profile {}: {}", path.display(), e),
        )
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_profile_has_projects_and_notes() {
        let profile = Profile::default();
        assert!(!profile.projects.is_empty());
        assert!(!profile.notes.is_empty());
        assert!(!profile.name.is_empty());
    }

    #[test]
    fn project_lookup_is_case_insensitive_and_strips_md() {
        let profile = Profile::default();
        assert!(profile.project("pygit").is_some());
        assert!(profile.project("PyGit").is_some());
        assert!(profile.project("pygit.md").is_some());
        assert!(profile.project("nope").is_none());
    }

    #[test]
    fn load_without_explicit_path_falls_back_to_default() {
        // The default config file almost certainly doesn't exist in CI;
        // either way this must not error.
        let profile = load_profile(None).unwrap();
        assert!(!profile.name.is_empty());
    }

    #[test]
    fn load_explicit_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let original = Profile::default();
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(serde_json::to_string(&original).unwrap().as_bytes())
            .unwrap();

        let loaded = load_profile(Some(&path)).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"name": "Ada", "role": "Engineer"}"#).unwrap();

        let loaded = load_profile(Some(&path)).unwrap();
        assert_eq!(loaded.name, "Ada");
        assert!(loaded.projects.is_empty());
        assert!(loaded.stack.is_empty());
    }

    #[test]
    fn load_malformed_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_profile(Some(&path)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_profile(Some(&path)).is_err());
    }
}

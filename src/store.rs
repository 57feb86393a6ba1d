// src/store.rs

//! Persistent storage of links we have already seen and no longer
//! need to report on.
//!
//! ## Backing file format
//!
//! Plain text, one record per line, two fields separated by a single space:
//!
//! ```text
//! <link> <unix-timestamp>
//! ```
//!
//! No header, no trailing metadata; the file is replaced wholesale on
//! [`LinkStore::persist`]. Links containing whitespace are not supported by
//! this format.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;

/// Retention window in seconds. Records older than this are evicted
/// when the store is loaded.
pub const RETENTION_SECS: i64 = 172_800; // 48h

/// Persistent set of seen links with time-bounded retention.
///
/// Loaded once at startup, mutated in memory during the run, and written
/// back exactly once at the end of a successful run. Eviction happens only
/// at load time, so the live set trims itself on every cold start.
#[derive(Debug)]
pub struct LinkStore {
    path: PathBuf,
    links: HashMap<String, i64>,
    skipped: usize,
}

impl LinkStore {
    /// Load the store from its backing file, evicting expired records.
    ///
    /// A missing file is not an error; the store starts empty. Malformed
    /// lines are skipped and counted rather than failing the load.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load_at(path, Utc::now().timestamp())
    }

    /// Load with an explicit "now", used by the eviction check.
    pub fn load_at(path: impl Into<PathBuf>, now: i64) -> Result<Self> {
        let path = path.into();
        let mut links = HashMap::new();
        let mut skipped = 0usize;

        match fs::read_to_string(&path) {
            Ok(content) => {
                for line in content.lines() {
                    match Self::parse_line(line) {
                        Some((link, timestamp)) => {
                            // only keep links that aren't too old; this trims
                            // the set every time the file is opened
                            if !too_old(now, timestamp) {
                                links.insert(link.to_string(), timestamp);
                            }
                        }
                        None => skipped += 1,
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        if skipped > 0 {
            log::warn!(
                "Skipped {} malformed line(s) while loading {}",
                skipped,
                path.display()
            );
        }

        Ok(Self {
            path,
            links,
            skipped,
        })
    }

    fn parse_line(line: &str) -> Option<(&str, i64)> {
        let (link, timestamp) = line.split_once(' ')?;
        if link.is_empty() {
            return None;
        }
        let timestamp: i64 = timestamp.trim().parse().ok()?;
        Some((link, timestamp))
    }

    /// Whether the given link is in the live set.
    pub fn seen(&self, link: &str) -> bool {
        self.links.contains_key(link)
    }

    /// Insert or overwrite the record for a link.
    ///
    /// The timestamp should be the item's own publish time, not wall-clock
    /// insertion time. It is stored as-is, without validation.
    pub fn add(&mut self, link: impl Into<String>, timestamp: i64) {
        self.links.insert(link.into(), timestamp);
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Count of malformed lines skipped during the last load.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every current record to the backing file, replacing prior
    /// contents (write to temp, then rename).
    ///
    /// Records are written sorted by link, so the file is stable across
    /// runs with the same live set.
    pub fn persist(&self) -> Result<()> {
        let mut records: Vec<_> = self.links.iter().collect();
        records.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let tmp = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            for (link, timestamp) in records {
                writeln!(file, "{} {}", link, timestamp)?;
            }
            file.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Whether a record timestamp falls outside the retention window.
fn too_old(now: i64, timestamp: i64) -> bool {
    now - timestamp > RETENTION_SECS
}

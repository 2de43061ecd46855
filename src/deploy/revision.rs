// ABOUTME: Revision counting for the remote stack directory.
// ABOUTME: Distinguishes a numeric listing from output that could not be read as a count.

use std::fmt;

/// Result of counting entries in the remote stack directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionCount {
    /// The listing produced this many entries.
    Listed(u64),
    /// The listing produced empty or non-numeric output.
    Unavailable,
}

impl RevisionCount {
    /// Interpret the trimmed output of `ls -1 <dir> | wc -l`.
    pub fn from_listing(output: &str) -> Self {
        let output = output.trim();
        if output.is_empty() || !output.bytes().all(|b| b.is_ascii_digit()) {
            return RevisionCount::Unavailable;
        }
        output
            .parse()
            .map(RevisionCount::Listed)
            .unwrap_or(RevisionCount::Unavailable)
    }

    /// Version number for the next archive. An unavailable count is zero.
    pub fn next_version(self) -> u64 {
        match self {
            RevisionCount::Listed(count) => count,
            RevisionCount::Unavailable => 0,
        }
    }
}

impl fmt::Display for RevisionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionCount::Listed(count) => write!(f, "{count}"),
            RevisionCount::Unavailable => write!(f, "unavailable"),
        }
    }
}

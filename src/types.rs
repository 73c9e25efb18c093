/// Core domain types for gitline targets, refs, and links.
use std::fmt;
use std::path::PathBuf;

/// Assembled link to a line or line range on the code host.
/// Its `Display` form is the final URL.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BlobLink {
    /// Normalized web base URL of the repository, without `.git`.
    pub base: String,
    /// Line fragment such as `#L5` or `#L5-L9`.
    pub fragment: String,
    /// File path relative to the repository root, `/`-separated.
    pub path: String,
    /// Branch name or commit hash.
    pub reference: String,
}

impl fmt::Display for BlobLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "{}/blob/{}/{}{}",
            self.base, self.reference, self.path, self.fragment
        );
    }
}

/// Which remote hosts are accepted when normalizing a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPolicy {
    /// Accept any host with a recognized scheme.
    AnyHost,
    /// Accept only the listed hosts (ASCII case-insensitive).
    Allowlist(Vec<String>),
}

impl HostPolicy {
    /// Build a policy from a host list. An empty list accepts any host.
    pub fn from_hosts(hosts: &[String]) -> Self {
        if hosts.is_empty() {
            return Self::AnyHost;
        }
        return Self::Allowlist(hosts.to_vec());
    }

    /// Whether `host` may be linked to.
    pub fn permits(&self, host: &str) -> bool {
        return match self {
            Self::AnyHost => true,
            Self::Allowlist(hosts) => hosts.iter().any(|h| return h.eq_ignore_ascii_case(host)),
        };
    }
}

/// Line or inclusive line range to highlight. Not checked against the file
/// length, and a range with `start > end` is kept as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    /// Inclusive range of one-based lines.
    Range {
        /// Last line of the range.
        end: u64,
        /// First line of the range.
        start: u64,
    },
    /// A single one-based line.
    Single(u64),
}

impl LineRef {
    /// URL fragment that highlights these lines on the code host.
    pub fn fragment(&self) -> String {
        return match self {
            Self::Range { end, start } => format!("#L{start}-L{end}"),
            Self::Single(line) => format!("#L{line}"),
        };
    }

    /// Highest line number mentioned, used for the past-end-of-file hint.
    pub fn last_line(&self) -> u64 {
        return match *self {
            Self::Range { end, start } => end.max(start),
            Self::Single(line) => line,
        };
    }
}

/// Which ref token the link points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RefMode {
    /// Current branch name (abbreviated HEAD ref).
    #[default]
    Branch,
    /// Full hash of the current commit.
    Commit,
}

/// Parsed `<file>:<line>` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Lines to highlight.
    pub line: LineRef,
    /// File path as given, relative or absolute.
    pub path: PathBuf,
}

/// Crate-level error types for gitline diagnostics.
use std::path::PathBuf;
use std::process::ExitStatus;

/// Every failure in gitline is fatal and reported once. Each variant names the
/// argument, path, remote, or git query that failed so the message stands alone.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The argument path could not be made absolute.
    #[error("error getting absolute path for {}: {source}", path.display())]
    AbsolutePath {
        /// Path as given on the command line.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The referenced file does not exist on disk.
    #[error("file does not exist: {}", path.display())]
    FileNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// A git query ran but exited unsuccessfully.
    #[error("error getting {query}: `git {command}` failed ({status}): {stderr}")]
    GitFailed {
        /// The git arguments that were run.
        command: String,
        /// Which piece of repository metadata was being read.
        query: &'static str,
        /// Exit status reported by git.
        status: ExitStatus,
        /// Trimmed standard error from git.
        stderr: String,
    },

    /// The git executable could not be started.
    #[error("error getting {query}: failed to run git: {source}")]
    GitSpawn {
        /// Which piece of repository metadata was being read.
        query: &'static str,
        /// The underlying spawn failure.
        source: std::io::Error,
    },

    /// The remote host is well-formed but not in the configured allowlist.
    #[error("unsupported remote URL format: {url} (host `{host}` is not allowed)")]
    HostNotAllowed {
        /// Host extracted from the remote URL.
        host: String,
        /// The remote URL as configured.
        url: String,
    },

    /// The argument is not `<file>:<line>` or `<file>:<start>-<end>`.
    #[error("invalid format: `{input}`, use <file>:<line> or <file>:<startLine>-<endLine>")]
    InvalidFormat {
        /// The raw argument.
        input: String,
    },

    /// A single-line specifier is not an integer.
    #[error("invalid line number: `{spec}`")]
    InvalidLineNumber {
        /// The raw line specifier.
        spec: String,
    },

    /// One or both ends of a line range are not integers.
    #[error("invalid line numbers: `{spec}`")]
    InvalidLineNumbers {
        /// The raw line specifier.
        spec: String,
    },

    /// A line range does not split into exactly two parts on `-`.
    #[error("invalid line range format: `{spec}`")]
    InvalidLineRange {
        /// The raw line specifier.
        spec: String,
    },

    /// A `git@` remote has no `:` separating host from path.
    #[error("invalid SSH URL format: {url}")]
    InvalidSshUrl {
        /// The remote URL as configured.
        url: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// The file does not live under the repository root.
    #[error("cannot compute relative path: {} is not under {}", file.display(), root.display())]
    OutsideRepository {
        /// Absolute path of the file.
        file: PathBuf,
        /// Absolute path of the repository root.
        root: PathBuf,
    },

    /// TOML deserialization of `.gitline.toml` failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// The remote URL scheme is not one gitline understands.
    #[error("unsupported remote URL format: {url}")]
    UnsupportedRemote {
        /// The remote URL as configured.
        url: String,
    },
}

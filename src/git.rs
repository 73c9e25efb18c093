//! Repository metadata: the current ref, a remote's URL, and the repository root.
//!
//! The pipeline only sees the [`RepoMetadata`] trait. [`GitCli`] implements it
//! by running the system `git` binary in an explicit working directory, one
//! blocking invocation per query.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::Error;
use crate::types::RefMode;

/// [`RepoMetadata`] backed by the `git` executable on `PATH`.
pub struct GitCli {
    /// Extra environment passed to every git invocation.
    env_vars: Vec<(String, String)>,
    /// Directory every git query runs in.
    workdir: PathBuf,
}

impl GitCli {
    /// Query the repository enclosing `workdir`.
    pub const fn new(workdir: PathBuf) -> Self {
        return Self {
            env_vars: Vec::new(),
            workdir,
        };
    }

    /// Set an environment variable for every git invocation.
    #[cfg(test)]
    fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.push((key.to_string(), value.to_string()));
        return self;
    }

    /// Run `git <args>` and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns `Error::GitSpawn` if git cannot be started,
    /// or `Error::GitFailed` if it exits unsuccessfully.
    fn run(&self, query: &'static str, args: &[&str]) -> Result<String, Error> {
        let command = args.join(" ");
        debug!(%command, workdir = %self.workdir.display(), "running git");

        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.workdir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null());
        for (k, v) in &self.env_vars {
            cmd.env(k, v);
        }
        let output = cmd
            .output()
            .map_err(|source| return Error::GitSpawn { query, source })?;

        if !output.status.success() {
            return Err(Error::GitFailed {
                command,
                query,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        trace!(%command, %stdout, "git succeeded");
        return Ok(stdout);
    }
}

impl RepoMetadata for GitCli {
    fn current_ref(&self, mode: RefMode) -> Result<String, Error> {
        return match mode {
            RefMode::Branch => self.run("current branch", &["rev-parse", "--abbrev-ref", "HEAD"]),
            RefMode::Commit => self.run("current commit", &["rev-parse", "HEAD"]),
        };
    }

    fn remote_url(&self, name: &str) -> Result<String, Error> {
        let key = format!("remote.{name}.url");
        return self.run("remote URL", &["config", "--get", &key]);
    }

    fn repo_root(&self) -> Result<PathBuf, Error> {
        let root = self.run("repository root", &["rev-parse", "--show-toplevel"])?;
        return Ok(PathBuf::from(root));
    }
}

/// Read-only queries against the repository a file lives in.
pub trait RepoMetadata {
    /// Branch name or full commit hash of HEAD, depending on `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be queried.
    fn current_ref(&self, mode: RefMode) -> Result<String, Error>;

    /// Configured fetch URL of the remote called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote is not configured.
    fn remote_url(&self, name: &str) -> Result<String, Error>;

    /// Absolute path of the repository's top-level working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is not inside a repository.
    fn repo_root(&self) -> Result<PathBuf, Error>;
}

use std::path::Path;

use crate::error::Error;
use crate::types::{HostPolicy, RefMode};

/// Name of the optional per-repository config file.
pub const CONFIG_FILE: &str = ".gitline.toml";

/// Remote read when neither the config nor the CLI names one.
const DEFAULT_REMOTE: &str = "origin";

/// Link options loaded from `.gitline.toml` in the repository root.
/// Command-line flags are layered on top with [`Config::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Accepted remote hosts; empty accepts any host.
    allowed_hosts: Vec<String>,
    /// Whether links point at the branch or the commit.
    ref_mode: RefMode,
    /// Remote whose URL becomes the link base.
    remote: String,
}

/// Raw TOML structure for `.gitline.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct GitlineTomlConfig {
    /// Accepted remote hosts.
    #[serde(default)]
    allowed_hosts: Vec<String>,
    /// `branch` or `commit`.
    #[serde(default, rename = "ref")]
    ref_mode: RefMode,
    /// Remote name.
    remote: Option<String>,
}

/// Values given on the command line, each replacing its config counterpart.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces `allowed_hosts` when non-empty.
    pub allowed_hosts: Vec<String>,
    /// Replaces `ref`.
    pub ref_mode: Option<RefMode>,
    /// Replaces `remote`.
    pub remote: Option<String>,
}

impl Config {
    /// Host policy for remote normalization.
    pub fn host_policy(&self) -> HostPolicy {
        return HostPolicy::from_hosts(&self.allowed_hosts);
    }

    /// Default config: branch links, `origin` remote, any host.
    fn link_any_host_by_branch() -> Self {
        return Self {
            allowed_hosts: Vec::new(),
            ref_mode: RefMode::Branch,
            remote: DEFAULT_REMOTE.to_string(),
        };
    }

    /// Load config from `.gitline.toml` in the given repository root.
    /// Returns the defaults if the file doesn't exist. A file that exists but
    /// is malformed is an error, never a silent fallback to defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::link_any_host_by_branch());
            },
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };
        return Self::parse(&content);
    }

    /// Parse config from TOML content.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the TOML is malformed or has unknown keys.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: GitlineTomlConfig = toml::from_str(content)?;
        return Ok(Self {
            allowed_hosts: raw.allowed_hosts,
            ref_mode: raw.ref_mode,
            remote: raw.remote.unwrap_or_else(|| return DEFAULT_REMOTE.to_string()),
        });
    }

    /// Which ref token links point at.
    pub const fn ref_mode(&self) -> RefMode {
        return self.ref_mode;
    }

    /// Remote whose URL becomes the link base.
    pub fn remote(&self) -> &str {
        return &self.remote;
    }

    /// Apply command-line values over the loaded config.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if !overrides.allowed_hosts.is_empty() {
            self.allowed_hosts.clone_from(&overrides.allowed_hosts);
        }
        if let Some(mode) = overrides.ref_mode {
            self.ref_mode = mode;
        }
        if let Some(remote) = &overrides.remote {
            self.remote.clone_from(remote);
        }
        return self;
    }
}

//! Remote URL normalization: SSH, `git://`, and HTTP(S) remotes to a web base URL.

use crate::error::Error;
use crate::types::HostPolicy;

/// Prefix of scp-style SSH remotes (`git@host:owner/repo`).
const SSH_PREFIX: &str = "git@";

/// Check the host against the policy.
///
/// # Errors
///
/// Returns `Error::HostNotAllowed` if the policy rejects the host.
fn ensure_host_allowed(host: &str, url: &str, policy: &HostPolicy) -> Result<(), Error> {
    if policy.permits(host) {
        return Ok(());
    }
    return Err(Error::HostNotAllowed {
        host: host.to_string(),
        url: url.to_string(),
    });
}

/// Host part of `authority/path`, without userinfo or port.
fn host_of(after_scheme: &str) -> &str {
    let authority = after_scheme.split('/').next().unwrap_or("");
    let without_user = authority.rsplit_once('@').map_or(authority, |(_, host)| return host);
    return without_user.split(':').next().unwrap_or("");
}

/// Convert a remote URL into the web base URL of the repository.
///
/// `git@host:path` becomes `https://host/path`, splitting on the first `:` only,
/// so `git@host:22:owner/repo` keeps `22:` in the path. `git://` becomes
/// `https://`, and HTTP(S) URLs pass through. One trailing `.git` is stripped.
///
/// # Errors
///
/// Returns `Error::InvalidSshUrl` if a `git@` remote has no `:`,
/// `Error::UnsupportedRemote` for any other scheme,
/// or `Error::HostNotAllowed` if the policy rejects the host.
pub fn normalize(remote: &str, policy: &HostPolicy) -> Result<String, Error> {
    let web = if let Some(rest) = remote.strip_prefix(SSH_PREFIX) {
        let Some((host, path)) = rest.split_once(':') else {
            return Err(Error::InvalidSshUrl { url: remote.to_string() });
        };
        ensure_host_allowed(host, remote, policy)?;
        format!("https://{host}/{path}")
    } else if let Some(rest) = remote.strip_prefix("git://") {
        ensure_host_allowed(host_of(rest), remote, policy)?;
        format!("https://{rest}")
    } else if let Some(rest) = remote
        .strip_prefix("https://")
        .or_else(|| return remote.strip_prefix("http://"))
    {
        ensure_host_allowed(host_of(rest), remote, policy)?;
        remote.to_string()
    } else {
        return Err(Error::UnsupportedRemote { url: remote.to_string() });
    };

    return Ok(strip_git_suffix(&web).to_string());
}

/// Remove one literal trailing `.git`.
fn strip_git_suffix(url: &str) -> &str {
    return url.strip_suffix(".git").unwrap_or(url);
}

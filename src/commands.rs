//! The link pipeline: parse the argument, read repository metadata, and
//! assemble the web URL.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::{Config, Overrides};
use crate::error;
use crate::git::RepoMetadata;
use crate::input;
use crate::lines;
use crate::remote;
use crate::resolver;
use crate::types::{BlobLink, LineRef};

/// JSON form of a link: its parts plus the assembled URL.
#[derive(Serialize)]
struct LinkJson<'a> {
    /// Parts the URL was built from.
    #[serde(flatten)]
    link: &'a BlobLink,
    /// The assembled URL.
    url: String,
}

/// Log when the highlighted lines run past the end of the file.
///
/// The link is produced unchanged either way. Only regular files are read,
/// and only when debug logging is on, so pipes and devices never block.
fn debug_past_end_of_file(file: &Path, line: LineRef) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    if !std::fs::metadata(file).is_ok_and(|m| return m.is_file()) {
        return;
    }
    let Ok(lines) = lines::read_lines(file) else {
        return;
    };
    let count = u64::try_from(lines.len()).unwrap_or(u64::MAX);
    if line.last_line() > count {
        debug!(file = %file.display(), line = line.last_line(), count, "line is past end of file");
    }
    return;
}

/// Build the link for a `<file>:<line>` or `<file>:<start>-<end>` argument.
///
/// `cwd` anchors relative paths; repository metadata comes from `metadata`,
/// and `.gitline.toml` is read from the repository root it reports.
///
/// # Errors
///
/// Returns the first failure among argument parsing, file lookup, metadata
/// queries, config loading, remote normalization, or relative path computation.
pub fn link(
    argument: &str,
    cwd: &Path,
    metadata: &dyn RepoMetadata,
    overrides: &Overrides,
) -> Result<BlobLink, error::Error> {
    let target = input::parse_target(argument)?;
    let file = resolver::resolve_existing(cwd, &target.path)?;

    let root = metadata.repo_root()?;
    let config = Config::load(&root)?.with_overrides(overrides);
    debug!(?config, root = %root.display(), "loaded config");

    let reference = metadata.current_ref(config.ref_mode())?;
    let remote_url = metadata.remote_url(config.remote())?;
    let base = remote::normalize(&remote_url, &config.host_policy())?;
    let path = resolver::relative_slash_path(&file, &root)?;
    debug_past_end_of_file(&file, target.line);

    let link = BlobLink {
        base,
        fragment: target.line.fragment(),
        path,
        reference,
    };
    debug!(?link, "assembled link");
    return Ok(link);
}

/// Print the link to stdout, as a bare URL or as JSON.
pub fn print(link: &BlobLink, json: bool) {
    if !json {
        println!("{link}");
        return;
    }

    let out = LinkJson {
        link,
        url: link.to_string(),
    };
    // serde_json::to_string_pretty won't fail on this structure.
    let rendered = serde_json::to_string_pretty(&out).unwrap_or_default();
    println!("{rendered}");
    return;
}

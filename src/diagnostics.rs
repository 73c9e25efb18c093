use crate::config::CONFIG_FILE;
use crate::error::Error;

/// ANSI bold, used for diagnostic headings.
const BOLD: &str = "\x1b[1m";
/// ANSI reset.
const RESET: &str = "\x1b[0m";

/// Render an error as markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
    return;
}

/// The usage line, naming the program as it was invoked.
pub fn usage(program: &str) -> String {
    return format!("Usage: {program} <file>:<line> or {program} <file>:<startLine>-<endLine>");
}

/// Render an error as a short markdown diagnostic: what happened, then how to fix it.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::GitFailed { .. } | Error::GitSpawn { .. } => render_git_failure(e),
        Error::HostNotAllowed { host, .. } => render_host_not_allowed(e, host),
        Error::InvalidFormat { .. }
        | Error::InvalidLineNumber { .. }
        | Error::InvalidLineNumbers { .. }
        | Error::InvalidLineRange { .. } => render_bad_argument(e),
        Error::InvalidSshUrl { .. } | Error::UnsupportedRemote { .. } => render_unsupported_remote(e),
        Error::OutsideRepository { .. } => render_outside_repository(e),
        Error::TomlDe(inner) => render_bad_config(inner),
        Error::AbsolutePath { .. } | Error::FileNotFound { .. } | Error::Io(_) => render_generic(e),
    };
}

fn render_bad_argument(e: &Error) -> String {
    return format!(
        "\
# Error: Invalid Argument

{e}

## Accepted forms

    gitline src/main.rs:42
    gitline src/main.rs:10-20
"
    );
}

fn render_bad_config(inner: &toml::de::Error) -> String {
    return format!(
        "\
# Error: Invalid {CONFIG_FILE}

{inner}

## Accepted keys

    ref = \"branch\"                  # or \"commit\"
    remote = \"origin\"
    allowed_hosts = [\"github.com\"]   # empty accepts any host
"
    );
}

fn render_generic(e: &Error) -> String {
    return format!("# Error\n\n{e}\n");
}

fn render_git_failure(e: &Error) -> String {
    return format!(
        "\
# Error: Git Query Failed

{e}

## Fix

Run gitline inside a git working tree with the remote configured:

    git remote -v
"
    );
}

fn render_host_not_allowed(e: &Error, host: &str) -> String {
    return format!(
        "\
# Error: Host Not Allowed

{e}

## Fix

Add the host to `allowed_hosts` in `{CONFIG_FILE}`, or pass it explicitly:

    gitline --allow-host {host} <file>:<line>
"
    );
}

fn render_outside_repository(e: &Error) -> String {
    return format!(
        "\
# Error: Outside Repository

{e}

## Fix

Run gitline from inside the repository that contains the file.
"
    );
}

fn render_unsupported_remote(e: &Error) -> String {
    return format!(
        "\
# Error: Unsupported Remote

{e}

## Supported remote forms

    git@host:owner/repo.git
    git://host/owner/repo.git
    https://host/owner/repo.git
"
    );
}

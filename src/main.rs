mod commands;
mod config;
mod diagnostics;
mod error;
mod git;
mod input;
mod lines;
mod remote;
mod resolver;
mod types;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::config::Overrides;
use crate::git::GitCli;
use crate::types::RefMode;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "GITLINE_LOG";

#[derive(Parser)]
#[command(
    name = "gitline",
    version,
    about = "Turn a file:line reference into a web link on the repository's code host"
)]
struct Cli {
    /// Accept only remotes on this host (repeatable; replaces `allowed_hosts`)
    #[arg(long = "allow-host", value_name = "HOST")]
    allow_hosts: Vec<String>,
    /// Print the link and its parts as JSON
    #[arg(long)]
    json: bool,
    /// Link against the current branch or the current commit
    #[arg(long = "ref", value_enum, value_name = "MODE")]
    ref_mode: Option<RefMode>,
    /// Remote whose URL becomes the link base
    #[arg(long, value_name = "NAME")]
    remote: Option<String>,
    /// `<file>:<line>` or `<file>:<startLine>-<endLine>`
    target: Option<String>,
    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install the stderr subscriber. `-v` wins over `GITLINE_LOG`, which wins
/// over the default of warnings only.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_err| return EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
    return;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(argument) = cli.target.as_deref() else {
        let program = std::env::args_os()
            .next()
            .map_or_else(|| return "gitline".to_string(), |arg| return arg.to_string_lossy().into_owned());
        eprintln!("{}", diagnostics::usage(&program));
        return ExitCode::FAILURE;
    };

    return match run(&cli, argument) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}

/// Resolve the working directory once, build the link, print it.
///
/// # Errors
///
/// Returns the first error from the link pipeline.
fn run(cli: &Cli, argument: &str) -> Result<(), error::Error> {
    let cwd = std::env::current_dir()?;
    let git = GitCli::new(cwd.clone());
    let overrides = Overrides {
        allowed_hosts: cli.allow_hosts.clone(),
        ref_mode: cli.ref_mode,
        remote: cli.remote.clone(),
    };

    let link = commands::link(argument, &cwd, &git, &overrides)?;
    commands::print(&link, cli.json);
    return Ok(());
}

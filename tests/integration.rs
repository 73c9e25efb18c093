use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn gitline_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitline"));
    cmd.current_dir(dir);
    cmd.env_remove("GITLINE_LOG");
    cmd
}

fn git(dir: &Path, args: &[&str]) -> Option<Output> {
    let output = Command::new("git").args(args).current_dir(dir).output().ok()?;
    output.status.success().then_some(output)
}

/// A throwaway repository on `main` with `path/to/file.go` committed.
/// Returns `None` when git is unavailable.
fn init_repo(remote: &str) -> Option<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    std::fs::create_dir_all(root.join("path/to")).unwrap();
    std::fs::write(root.join("path/to/file.go"), "package main\n\nfunc main() {}\n").unwrap();

    git(&root, &["init", "-q"])?;
    git(&root, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&root, &["remote", "add", "origin", remote])?;
    git(&root, &["add", "."])?;
    git(
        &root,
        &[
            "-c", "user.name=test", "-c", "user.email=test@example.com", "-c", "commit.gpgsign=false",
            "commit", "-q", "-m", "init",
        ],
    )?;
    Some((dir, root))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn links_line_range_on_current_branch() {
    let Some((_dir, root)) = init_repo("git@github.com:acme/widget.git") else { return };

    let out = gitline_cmd(&root).arg("path/to/file.go:5-9").output().unwrap();
    assert!(out.status.success(), "gitline failed: {}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "https://github.com/acme/widget/blob/main/path/to/file.go#L5-L9\n"
    );
}

#[test]
fn links_from_subdirectory() {
    let Some((_dir, root)) = init_repo("https://github.com/acme/widget.git") else { return };

    let out = gitline_cmd(&root.join("path")).arg("to/file.go:3").output().unwrap();
    assert!(out.status.success(), "gitline failed: {}", stderr(&out));
    assert_eq!(stdout(&out), "https://github.com/acme/widget/blob/main/path/to/file.go#L3\n");
}

#[test]
fn commit_ref_uses_head_hash() {
    let Some((_dir, root)) = init_repo("git://github.com/acme/widget.git") else { return };
    let head = git(&root, &["rev-parse", "HEAD"]).unwrap();
    let head = stdout(&head).trim().to_string();

    let out = gitline_cmd(&root).args(["--ref", "commit", "path/to/file.go:1"]).output().unwrap();
    assert!(out.status.success(), "gitline failed: {}", stderr(&out));
    assert_eq!(
        stdout(&out),
        format!("https://github.com/acme/widget/blob/{head}/path/to/file.go#L1\n")
    );
}

#[test]
fn json_output_has_parts() {
    let Some((_dir, root)) = init_repo("git@github.com:acme/widget.git") else { return };

    let out = gitline_cmd(&root).args(["--json", "path/to/file.go:2"]).output().unwrap();
    assert!(out.status.success(), "gitline failed: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["url"], "https://github.com/acme/widget/blob/main/path/to/file.go#L2");
    assert_eq!(value["base"], "https://github.com/acme/widget");
    assert_eq!(value["fragment"], "#L2");
}

#[test]
fn config_file_restricts_hosts() {
    let Some((_dir, root)) = init_repo("git@gitlab.com:acme/widget.git") else { return };
    std::fs::write(root.join(".gitline.toml"), "allowed_hosts = [\"github.com\"]\n").unwrap();

    let out = gitline_cmd(&root).arg("path/to/file.go:1").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty(), "partial output: {}", stdout(&out));
    assert!(
        stderr(&out).contains("unsupported remote URL format"),
        "stderr: {}",
        stderr(&out)
    );

    let out = gitline_cmd(&root)
        .args(["--allow-host", "gitlab.com", "path/to/file.go:1"])
        .output()
        .unwrap();
    assert!(out.status.success(), "gitline failed: {}", stderr(&out));
}

#[test]
fn missing_file_exits_one() {
    let Some((_dir, root)) = init_repo("git@github.com:acme/widget.git") else { return };

    let out = gitline_cmd(&root).arg("nope.go:1").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("file does not exist: nope.go"), "stderr: {}", stderr(&out));
}

#[test]
fn missing_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = gitline_cmd(dir.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("Usage: "), "stderr: {err}");
    assert!(err.contains("<file>:<startLine>-<endLine>"), "stderr: {err}");
}

#[test]
fn malformed_argument_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    for arg in ["main.rs", "a:b:1", "main.rs:abc", "main.rs:1-2-3"] {
        let out = gitline_cmd(dir.path()).arg(arg).output().unwrap();
        assert_eq!(out.status.code(), Some(1), "argument {arg}");
        assert!(stdout(&out).is_empty(), "argument {arg} printed output");
    }
}

#[test]
fn outside_repository_reports_root_query() {
    if git(Path::new("."), &["--version"]).is_none() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let ceiling = dir.path().canonicalize().unwrap();
    let work = ceiling.join("work");
    std::fs::create_dir(&work).unwrap();
    std::fs::write(work.join("main.go"), "package main\n").unwrap();

    let out = gitline_cmd(&work)
        .env("GIT_CEILING_DIRECTORIES", &ceiling)
        .arg("main.go:1")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty(), "partial output: {}", stdout(&out));
    assert!(
        stderr(&out).contains("error getting repository root"),
        "stderr: {}",
        stderr(&out)
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_program_name_prints_usage() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::process::CommandExt;

    let dir = tempfile::tempdir().unwrap();
    let out = gitline_cmd(dir.path())
        .arg0(OsStr::from_bytes(b"gitline\xff"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("Usage: gitline"), "stderr: {err}");
    assert!(!err.contains("panicked"), "stderr: {err}");
}

//! Line-oriented file reading.

use std::io::BufRead as _;
use std::path::Path;

/// Read a file into its lines.
///
/// Lines are split on `\n` with a trailing `\r` removed. A final newline does
/// not produce an empty last line, and an empty file yields no lines. Invalid
/// UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<String>, std::io::Error> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);

    let mut lines = Vec::new();
    for chunk in reader.split(b'\n') {
        let chunk = chunk?;
        let bytes = chunk.strip_suffix(b"\r").unwrap_or(chunk.as_slice());
        lines.push(String::from_utf8_lossy(bytes).into_owned());
    }
    return Ok(lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        std::fs::write(&path, content).unwrap();
        return (dir, path);
    }

    #[test]
    fn trailing_newline() {
        let (_dir, path) = write_temp("a\nb\nc\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_trailing_newline() {
        let (_dir, path) = write_temp("a\nb\nc");
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_file() {
        let (_dir, path) = write_temp("");
        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let (_dir, path) = write_temp("a\r\nb\r\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        let (_dir, path) = write_temp("a\n\nb\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines(&dir.path().join("nonexistent.txt")).is_err());
    }
}

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// The sample access log shipped at the workspace root.
pub fn sample_log() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("sample_logs")
        .join("access.log")
}

/// Write `content` to a fresh temp file that lives as long as the handle.
pub fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp log");
    file.write_all(content.as_bytes())
        .expect("failed to write temp log");
    file
}

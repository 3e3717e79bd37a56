//! Recording helpers that persist raw response bodies for offline tests.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("KR_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn fixture_path(endpoint: &str, name: &str, ext: &str) -> PathBuf {
    fixture_dir().join(format!("{endpoint}_{name}.{ext}"))
}

pub(crate) fn record_fixture(
    endpoint: &str,
    name: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let path = fixture_path(endpoint, name, ext);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, body)?;

    if env::var("KR_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("KR_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}

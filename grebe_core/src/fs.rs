use std::fs;
use std::io;
use std::path::Path;

/// Reads the whole file at `path` as UTF-8 text. A missing or unreadable
/// file is an ordinary `Err`.
pub fn load_string(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Reads the whole file at `path` as raw bytes.
pub fn load_data(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

pub fn must_load_string(path: &Path) -> String {
    load_string(path).unwrap_or_else(|err| fatal!("Failed to load {:?}: {}", path, err))
}

pub fn must_load_data(path: &Path) -> Vec<u8> {
    load_data(path).unwrap_or_else(|err| fatal!("Failed to load {:?}: {}", path, err))
}

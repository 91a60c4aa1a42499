use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Provider of raw response data, one entry per line.
pub trait LineSource: Display {
    fn read_lines(&self) -> Result<Vec<String>>;
}

pub struct FileSource(PathBuf);

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource(path.into())
    }
}

impl Display for FileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let bytes = fs::read(&self.0).with_context(|| format!("Unable to open {self}"))?;
        // Invalid bytes are replaced instead of failing the whole file.
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
pub struct StaticSource(pub Vec<String>);

#[cfg(test)]
impl StaticSource {
    pub fn new(lines: &[&str]) -> Self {
        StaticSource(lines.iter().map(|l| l.to_string()).collect())
    }
}

#[cfg(test)]
impl Display for StaticSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{} static lines>", self.0.len())
    }
}

#[cfg(test)]
impl LineSource for StaticSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled patterns shared between territories. Metadata reuses the same
/// small patterns (`\d{7}`, `[2-9]` ...) over and over again.
pub struct RegexCache {
    compiled: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            compiled: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the compiled pattern, compiling it on first use. Patterns the
    /// engine rejects are not remembered.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.compiled.get(pattern) {
            return Ok(Arc::clone(&regex));
        }
        let regex = Arc::new(Regex::new(pattern)?);
        Ok(Arc::clone(self.compiled.entry(pattern.to_owned()).or_insert(regex).value()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }
}

use std::path::{Path, PathBuf};

const DEFAULT_STORE_PATH: &str = "contacts.csv";

/// What to do with a data row that doesn't have exactly three columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Drop the row and log a warning.
    ///
    /// A dropped row is still on disk until the next edit or delete. Those
    /// rewrite the whole store from what was read, so the row is then lost.
    #[default]
    Skip,
    /// Fail the whole read.
    Fail,
}

/// Runtime configuration, threaded into the store at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Location of the CSV store, relative to the working directory unless absolute
    pub store_path: PathBuf,

    pub malformed_rows: MalformedRowPolicy,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }
}

impl ContactsConfig {
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContactsConfig::default();
        assert_eq!(config.store_path(), Path::new("contacts.csv"));
        assert_eq!(config.malformed_rows, MalformedRowPolicy::Skip);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ContactsConfig::default()
            .with_store_path("/tmp/other.csv")
            .with_malformed_rows(MalformedRowPolicy::Fail);
        assert_eq!(config.store_path(), Path::new("/tmp/other.csv"));
        assert_eq!(config.malformed_rows, MalformedRowPolicy::Fail);
    }
}

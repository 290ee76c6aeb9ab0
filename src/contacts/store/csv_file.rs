use super::DataStore;
use crate::config::{ContactsConfig, MalformedRowPolicy};
use crate::error::{ContactsError, Result};
use crate::model::{Contact, HEADER};
use csv::{ReaderBuilder, WriterBuilder};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// CSV-file backed store. Every operation opens the file, does its work and
/// closes it again; no handle is held between calls.
pub struct CsvStore {
    path: PathBuf,
    malformed_rows: MalformedRowPolicy,
}

impl CsvStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }

    pub fn from_config(config: &ContactsConfig) -> Self {
        Self::new(config.store_path()).with_malformed_rows(config.malformed_rows)
    }

    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn reader(&self) -> Result<csv::Reader<fs::File>> {
        Ok(ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?)
    }

    /// A store has no header when it is missing or holds no records at all
    /// (zero bytes, or nothing but blank lines).
    fn lacks_header(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(true);
        }
        Ok(self.reader()?.headers()?.is_empty())
    }

    /// The header must name exactly the three columns, in any order.
    fn check_header(headers: &csv::StringRecord) -> Result<()> {
        let complete = headers.len() == HEADER.len()
            && HEADER.iter().all(|name| headers.iter().any(|h| h == *name));
        if complete {
            return Ok(());
        }
        Err(ContactsError::MalformedHeader(
            headers.iter().collect::<Vec<_>>().join(","),
        ))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn check_row(&self, record: &csv::StringRecord) -> Result<()> {
        if record.len() == HEADER.len() {
            return Ok(());
        }
        Err(ContactsError::MalformedRecord {
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            reason: format!(
                "expected {} fields, found {}",
                HEADER.len(),
                record.len()
            ),
        })
    }
}

impl DataStore for CsvStore {
    fn initialize(&mut self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.ensure_parent_dir()?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;

        debug!(path = %self.path.display(), "created contact store");
        Ok(true)
    }

    fn read_all(&mut self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "contact store missing, initializing");
            self.initialize()?;
            return Ok(Vec::new());
        }

        let mut reader = self.reader()?;
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        Self::check_header(&headers)?;

        let mut contacts: Vec<Contact> = Vec::new();
        for row in reader.records() {
            let record = row?;
            if let Err(err) = self.check_row(&record) {
                match self.malformed_rows {
                    MalformedRowPolicy::Skip => {
                        warn!(path = %self.path.display(), "skipping row: {}", err);
                        continue;
                    }
                    MalformedRowPolicy::Fail => return Err(err),
                }
            }
            contacts.push(record.deserialize(Some(&headers))?);
        }

        debug!(count = contacts.len(), "read contacts");
        Ok(contacts)
    }

    fn append_one(&mut self, contact: &Contact) -> Result<()> {
        let needs_header = self.lacks_header()?;
        if needs_header {
            self.ensure_parent_dir()?;
        }

        // A headerless store holds at most blank lines, so start it over.
        let file = OpenOptions::new()
            .create(true)
            .append(!needs_header)
            .write(needs_header)
            .truncate(needs_header)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
        }
        writer.serialize(contact)?;
        writer.flush()?;

        debug!(name = %contact.name, "appended contact");
        Ok(())
    }

    fn rewrite_all(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent_dir()?;

        // Write the new set beside the store, then swap it in.
        let tmp_path = self.tmp_path();
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp_path)?;
        writer.write_record(HEADER)?;
        for contact in contacts {
            writer.serialize(contact)?;
        }
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp_path, &self.path)?;

        debug!(count = contacts.len(), "rewrote contact store");
        Ok(())
    }
}

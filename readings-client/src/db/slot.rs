use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("failed to read slot '{slot}': {source}")]
    Read {
        slot: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write slot '{slot}': {source}")]
    Write {
        slot: String,
        #[source]
        source: io::Error,
    },
}

/// A single named key-value slot holding the serialized collection.
///
/// `read` returns `Ok(None)` when nothing has ever been written. `write`
/// replaces the whole slot content; implementations must not leave a
/// half-written value behind.
pub trait SlotStorage {
    fn name(&self) -> &str;

    fn read(&self) -> Result<Option<String>, StorageError>;

    fn write(&mut self, contents: &str) -> Result<(), StorageError>;
}

/// Slot kept in memory. Used by tests and by callers that don't need
/// durability.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    name: String,
    contents: Option<String>,
}

impl MemorySlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: None,
        }
    }

    pub fn with_contents(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl SlotStorage for MemorySlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

/// Slot backed by `<dir>/<name>.json`.
///
/// Writes go to a sibling temp file which is then renamed over the slot, so
/// a reader only ever sees the previous or the new content.
#[derive(Debug, Clone)]
pub struct FileSlot {
    name: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = dir.as_ref().join(format!("{name}.json"));
        Self { name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            slot: self.name.clone(),
            source,
        }
    }
}

impl SlotStorage for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                slot: self.name.clone(),
                source: e,
            }),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp).map_err(|e| self.write_err(e))?;
            file.write_all(contents.as_bytes())
                .map_err(|e| self.write_err(e))?;
            file.sync_all().map_err(|e| self.write_err(e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| self.write_err(e))?;

        Ok(())
    }
}

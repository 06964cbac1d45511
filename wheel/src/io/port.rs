//! Durable key-value text storage behind a substitutable port.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Keyed text storage. `get` returns `None` for keys never written; writes
/// always replace the full value, never a delta.
pub trait StatePort {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, contents: &str) -> Result<()>;
}

impl<P: StatePort + ?Sized> StatePort for &P {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, contents: &str) -> Result<()> {
        (**self).set(key, contents)
    }
}

/// File-backed port storing each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FilePort {
    dir: PathBuf,
}

impl FilePort {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StatePort for FilePort {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("read state {}", path.display()))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, contents: &str) -> Result<()> {
        write_atomic(&self.key_path(key), contents)
    }
}

/// Write via temp file + rename so readers never observe a partial value.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("state path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp state {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace state {}", path.display()))?;
    Ok(())
}

/// In-memory port for tests.
///
/// Interior mutability keeps the trait object shareable in the wheel's
/// single-threaded model.
#[derive(Debug, Default)]
pub struct MemoryPort {
    entries: RefCell<HashMap<String, String>>,
}

impl StatePort for MemoryPort {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, contents: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

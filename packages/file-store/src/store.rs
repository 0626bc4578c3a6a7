use std::{env, fs, io, path};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use interchange_codecs::{from_value, json, to_value};
use interchange_core::{Error, Value};

/// Reads and writes named files below a root directory.
///
/// Relative names resolve against the root; absolute names are used as
/// given. Every handle is opened and closed within a single call.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: path::PathBuf,
}

impl FileStore {
    pub fn new(root: path::PathBuf) -> Result<FileStore, Error> {
        let attr = fs::metadata(&root).map_err(|error| Error::InvalidRoot {
            path: root.clone(),
            message: error.to_string(),
        })?;

        if !attr.is_dir() {
            return Err(Error::InvalidRoot {
                path: root,
                message: "Root path must be a directory.".to_string(),
            });
        }

        if attr.permissions().readonly() {
            return Err(Error::InvalidRoot {
                path: root,
                message: "Root directory must be writable".to_string(),
            });
        }

        match root.canonicalize() {
            Ok(root) => Ok(FileStore { root }),
            Err(error) => Err(Error::InvalidRoot {
                path: root,
                message: error.to_string(),
            }),
        }
    }

    /// A store rooted at the process working directory.
    pub fn current_dir() -> Result<FileStore, Error> {
        FileStore::new(env::current_dir()?)
    }

    pub fn root(&self) -> &path::Path {
        &self.root
    }

    /// The file path a name refers to.
    pub fn resolve(&self, name: impl AsRef<path::Path>) -> path::PathBuf {
        self.root.join(name)
    }

    /// Write a raw payload, replacing any existing file.
    pub fn write_bytes(
        &self,
        name: impl AsRef<path::Path>,
        payload: &[u8],
    ) -> Result<path::PathBuf, Error> {
        use io::Write;

        let file_path = self.resolve(name);
        log::debug!("Writing {}...", file_path.display());

        let mut f = fs::File::create(&file_path)?;
        f.write_all(payload)?;
        f.flush()?;

        Ok(file_path)
    }

    /// Read a whole file. A missing file is an I/O error.
    pub fn read_bytes(&self, name: impl AsRef<path::Path>) -> Result<Bytes, Error> {
        use io::Read;

        let file_path = self.resolve(name);
        log::debug!("Reading {}...", file_path.display());

        let mut f = fs::File::open(&file_path)?;
        let mut payload = Vec::new();
        f.read_to_end(&mut payload)?;

        Ok(Bytes::from(payload))
    }

    /// Whether a name refers to an existing file.
    pub fn exists(&self, name: impl AsRef<path::Path>) -> bool {
        self.resolve(name).is_file()
    }

    /// Save a value as a UTF-8 JSON file.
    pub fn save_json(&self, value: &Value, name: impl AsRef<path::Path>) -> Result<(), Error> {
        let text = json::encode(value)?;
        self.write_bytes(name, text.as_bytes())?;
        Ok(())
    }

    /// Load a value from a JSON file.
    pub fn load_json(&self, name: impl AsRef<path::Path>) -> Result<Value, Error> {
        let payload = self.read_bytes(name)?;
        json::decode_slice(&payload)
    }

    /// Save any serializable Rust data as a JSON file.
    pub fn save_typed<T: Serialize + ?Sized>(
        &self,
        data: &T,
        name: impl AsRef<path::Path>,
    ) -> Result<(), Error> {
        self.save_json(&to_value(data)?, name)
    }

    /// Load a JSON file into a Rust type.
    pub fn load_typed<T: DeserializeOwned>(&self, name: impl AsRef<path::Path>) -> Result<T, Error> {
        from_value(self.load_json(name)?)
    }
}

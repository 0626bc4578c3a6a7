//! Objects persisted as binary blobs.

use std::path;

use interchange_codecs::{decode_object, encode_object};
use interchange_core::{Error, Object};

use crate::FileStore;

impl FileStore {
    /// Write `obj` as a binary blob to the named file.
    pub fn serialize_object<T: Object>(
        &self,
        obj: &T,
        name: impl AsRef<path::Path>,
    ) -> Result<(), Error> {
        let blob = encode_object(obj)?;
        self.write_bytes(name, &blob)?;
        Ok(())
    }

    /// Read an object back, reporting why it could not be read.
    pub fn try_deserialize_object<T: Object>(
        &self,
        name: impl AsRef<path::Path>,
    ) -> Result<T, Error> {
        let blob = self.read_bytes(name)?;
        decode_object(&blob)
    }

    /// Read an object back as a fresh instance.
    ///
    /// Returns `None` when no object is available: the file is missing,
    /// unreadable, truncated, corrupt or holds another type.
    pub fn deserialize_object<T: Object>(&self, name: impl AsRef<path::Path>) -> Option<T> {
        let name = name.as_ref();
        match self.try_deserialize_object(name) {
            Ok(obj) => Some(obj),
            Err(err) => {
                log::debug!(
                    "No {} available from {}: {}",
                    T::TYPE_TAG,
                    self.resolve(name).display(),
                    err
                );
                None
            }
        }
    }
}

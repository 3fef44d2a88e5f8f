//! In-memory [`Storage`] implementation.

use std::{collections::HashMap, sync::Arc};

use common::operations::Save;
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::listing::image,
    infra::{storage, Storage},
};

use super::File;

/// [`Storage`] keeping files in memory.
#[derive(Clone, Debug)]
pub struct Memory {
    /// Prefix of the URLs of the stored files.
    url_prefix: String,

    /// Stored files by their names.
    files: Arc<RwLock<HashMap<image::StorageName, Vec<u8>>>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] storage generating URLs with the
    /// provided prefix.
    #[must_use]
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            files: Arc::default(),
        }
    }

    /// Returns content of the file stored under the provided `name`, if any.
    #[cfg(test)]
    pub(crate) async fn get(
        &self,
        name: &image::StorageName,
    ) -> Option<Vec<u8>> {
        self.files.read().await.get(name).cloned()
    }

    /// Returns the number of the stored files.
    #[cfg(test)]
    pub(crate) async fn count(&self) -> usize {
        self.files.read().await.len()
    }
}

impl Storage<Save<File>> for Memory {
    type Ok = image::Url;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Save(file): Save<File>,
    ) -> Result<Self::Ok, Self::Err> {
        let File { name, bytes } = file;
        let url = super::url(&self.url_prefix, &name);
        drop(self.files.write().await.insert(name, bytes));
        Ok(url)
    }
}

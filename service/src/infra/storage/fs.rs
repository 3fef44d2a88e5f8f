//! File system [`Storage`] implementation.

use std::path::PathBuf;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::listing::image,
    infra::{storage, Storage},
};

use super::File;

/// [`Fs`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to store files in.
    pub dir: PathBuf,

    /// Prefix of the URLs the stored files are served under.
    pub url_prefix: String,
}

/// [`Storage`] keeping files in a local directory.
#[derive(Clone, Debug)]
pub struct Fs {
    /// [`Config`] of this [`Fs`].
    config: Config,
}

impl Fs {
    /// Creates a new [`Fs`] storage with the provided [`Config`].
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the directory this [`Fs`] stores files in.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn dir(&self) -> &PathBuf {
        &self.config.dir
    }
}

impl Storage<Save<File>> for Fs {
    type Ok = image::Url;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Save(file): Save<File>,
    ) -> Result<Self::Ok, Self::Err> {
        let File { name, bytes } = file;

        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?;
        tokio::fs::write(self.config.dir.join(&name), bytes)
            .await
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?;

        Ok(super::url(&self.config.url_prefix, &name))
    }
}

//! [`Storage`] of uploaded files.

#[cfg(test)]
pub(crate) mod flaky;
#[cfg(feature = "fs")]
pub mod fs;
pub mod memory;

use derive_more::{Debug, Display, Error as StdError, From};

use crate::domain::listing::image;

#[cfg(feature = "fs")]
pub use self::fs::Fs;
pub use self::memory::Memory;
#[cfg(test)]
pub(crate) use self::flaky::Flaky;

/// Storage operation.
pub use common::Handler as Storage;

/// File to be saved into a [`Storage`].
#[derive(Clone, Debug)]
pub struct File {
    /// Name to store this [`File`] under.
    pub name: image::StorageName,

    /// Content of this [`File`].
    #[debug(skip)]
    pub bytes: Vec<u8>,
}

/// Builds an [`image::Url`] of the file stored under the provided `name`.
fn url(prefix: &str, name: &image::StorageName) -> image::Url {
    format!("{}/{name}", prefix.trim_end_matches('/')).into()
}

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// I/O error.
    #[display("I/O operation failed: {_0}")]
    Io(std::io::Error),
}

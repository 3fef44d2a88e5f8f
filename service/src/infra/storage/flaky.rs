//! [`Storage`] failing on demand, for tests.

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::listing::image,
    infra::{storage, Storage},
};

use super::{File, Memory};

/// [`Storage`] failing to save a file with the specified name, and saving
/// any other file into the wrapped [`Memory`].
#[derive(Clone, Debug)]
pub(crate) struct Flaky {
    /// [`Memory`] storage receiving the successfully saved files.
    pub(crate) inner: Memory,

    /// Name of the file failing to be saved.
    pub(crate) fail_on: String,
}

impl Flaky {
    /// Creates a new [`Flaky`] storage failing on the `fail_on` file.
    pub(crate) fn new(fail_on: impl Into<String>) -> Self {
        Self {
            inner: Memory::new("/static/uploads"),
            fail_on: fail_on.into(),
        }
    }
}

impl Storage<Save<File>> for Flaky {
    type Ok = image::Url;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Save(file): Save<File>,
    ) -> Result<Self::Ok, Self::Err> {
        if file.name.to_string() == self.fail_on {
            return Err(tracerr::new!(storage::Error::Io(
                std::io::Error::other("disk is full")
            )));
        }
        self.inner.execute(Save(file)).await
    }
}

//! [`Database`]-related implementations.

pub mod memory;

use derive_more::{Display, Error as StdError};

use crate::domain::listing;

pub use self::memory::Memory;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Listing`] with the same [`listing::Id`] is stored already.
    ///
    /// [`Listing`]: crate::domain::Listing
    #[display("`Listing(id: {_0})` already exists")]
    ListingExists(#[error(not(source))] listing::Id),
}

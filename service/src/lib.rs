//! Service contains the business logic of the house listings catalog.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

// Used in tests only.
#[cfg(test)]
use tempfile as _;

#[cfg(doc)]
use infra::{Database, Storage};

pub use self::{command::Command, query::Query};

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db, St> {
    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`Storage`] of the files uploaded to this [`Service`].
    storage: St,
}

impl<Db, St> Service<Db, St> {
    /// Creates a new [`Service`] on top of the provided [`Database`] and
    /// [`Storage`].
    #[must_use]
    pub const fn new(database: Db, storage: St) -> Self {
        Self { database, storage }
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub const fn database(&self) -> &Db {
        &self.database
    }

    /// Returns [`Storage`] of this [`Service`].
    #[must_use]
    pub const fn storage(&self) -> &St {
        &self.storage
    }
}

//! [`Command`] definition.

pub mod attach_images;
pub mod create_listing;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    attach_images::AttachImages, create_listing::CreateListing,
};

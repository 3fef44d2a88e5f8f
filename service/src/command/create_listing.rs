//! [`Command`] for creating a new [`Listing`].

use common::operations::{
    By, Commit, Insert, Save, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        listing::{self, image, Description, Location, Price, Title},
        Listing,
    },
    infra::{database, storage, Database, Storage},
    read, Service,
};

use super::{AttachImages, Command};

/// [`Command`] for creating a new [`Listing`] out of the raw user input.
///
/// The new [`Listing`] gets the next free [`listing::Id`], and its
/// `images` are stored with the [`AttachImages`] [`Command`]. Nothing is
/// created if the input is invalid.
#[derive(Clone, Debug, Default)]
pub struct CreateListing {
    /// Raw fields of a new [`Listing`].
    pub candidate: listing::Candidate,

    /// Uploaded images of a new [`Listing`].
    pub images: Vec<image::Upload>,
}

impl<Db, St> Command<CreateListing> for Service<Db, St>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<listing::Id, read::listing::Next>>,
            Ok = listing::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<Listing>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
    St: Storage<
        Save<storage::File>,
        Ok = image::Url,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateListing,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateListing { candidate, images } = cmd;
        let listing::Candidate {
            title,
            location,
            price,
            description,
        } = candidate;

        let title = title.as_deref().and_then(Title::new);
        let location = location.as_deref().and_then(Location::new);
        let price = price.filter(|p| !p.trim().is_empty());
        let (Some(title), Some(location), Some(price)) =
            (title, location, price)
        else {
            return Err(tracerr::new!(E::from(
                ValidationError::MissingFields
            )));
        };
        let price = price
            .parse::<Price>()
            .map_err(|_| ValidationError::InvalidPrice)
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let description =
            description.map(Description::from).unwrap_or_default();

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Holding the transaction keeps the `Id` free until the `Commit`.
        let id = tx
            .execute(Select(By::new(read::listing::Next)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let images = self
            .execute(AttachImages {
                listing_id: id,
                files: images,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let listing = Listing {
            id,
            title,
            location,
            price,
            price_display: price.into(),
            description,
            images,
        };

        tx.execute(Insert(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(
            "created `Listing(id: {id})` in `{}` with {} image(s)",
            listing.location,
            listing.images.len(),
        );

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    Storage(storage::Error),

    /// Provided input is invalid.
    #[display("Invalid input: {_0}")]
    Validation(ValidationError),
}

/// Error of validating the input of a new [`Listing`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// Any of the required [`Title`], [`Location`] or [`Price`] is missing,
    /// empty or consists of whitespace only.
    #[display("Please fill in required fields.")]
    MissingFields,

    /// Provided [`Price`] is not a non-negative integer.
    #[display("Price must be a number.")]
    InvalidPrice,
}

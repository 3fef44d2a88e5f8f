//! Sample catalog filled on startup.

use service::{
    command::{create_listing, CreateListing},
    domain::{listing, Listing},
    Command as _,
};
use tracerr::Traced;

use crate::Service;

/// Sample listings as `(title, location, price, description)`.
pub const SAMPLES: [(&str, &str, &str, &str); 3] = [
    (
        "2 Bedroom Apartment",
        "Kampala, Uganda",
        "250",
        "Spacious apartment with balcony.",
    ),
    (
        "Single Room",
        "Entebbe, Uganda",
        "80",
        "Affordable room, near the airport.",
    ),
    (
        "3 Bedroom House",
        "Jinja, Uganda",
        "400",
        "Family house near the Nile.",
    ),
];

/// Adds the [`SAMPLES`] to the catalog of the provided [`Service`].
///
/// # Errors
///
/// If any of the [`SAMPLES`] cannot be added.
pub async fn seed(
    service: &Service,
) -> Result<Vec<Listing>, Traced<create_listing::ExecutionError>> {
    let mut added = Vec::with_capacity(SAMPLES.len());
    for (title, location, price, description) in SAMPLES {
        added.push(
            service
                .execute(CreateListing {
                    candidate: listing::Candidate {
                        title: Some(title.to_owned()),
                        location: Some(location.to_owned()),
                        price: Some(price.to_owned()),
                        description: Some(description.to_owned()),
                    },
                    images: vec![],
                })
                .await
                .map_err(tracerr::wrap!())?,
        );
    }
    Ok(added)
}

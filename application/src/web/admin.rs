//! Admin form handlers.

use axum::{extract::Multipart, Extension};
use maud::Markup;
use service::{
    command::CreateListing, domain::listing::image, Command as _,
};
use tracing as log;

use crate::{
    view::{page, Notice},
    AsError, Error, Service,
};

/// Admin form handler.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn form() -> Markup {
    page::admin(None)
}

/// Admin form submission handler, adding a new house.
///
/// Rejected input re-renders the form with the rejection reason and a client
/// error status.
///
/// # Errors
///
/// If the form cannot be read, or the house cannot be stored.
#[tracing::instrument(skip_all)]
pub async fn submit(
    Extension(service): Extension<Service>,
    multipart: Multipart,
) -> Result<(http::StatusCode, Markup), Error> {
    let cmd = read_form(multipart).await?;

    match service.execute(cmd).await {
        Ok(listing) => {
            let msg = format!("House '{}' added successfully!", listing.title);
            Ok((http::StatusCode::OK, page::admin(Some(&Notice::Success(msg)))))
        }
        Err(e) => {
            let err = e.into_error();
            if !err.is_client_error() {
                return Err(err);
            }
            log::debug!("rejected new house: {}", err.message);
            Ok((
                err.status_code,
                page::admin(Some(&Notice::Failure(err.message))),
            ))
        }
    }
}

/// Reads a [`CreateListing`] out of the submitted [`Multipart`] form.
///
/// Unknown fields are ignored.
async fn read_form(mut multipart: Multipart) -> Result<CreateListing, Error> {
    let mut cmd = CreateListing::default();

    while let Some(field) =
        multipart.next_field().await.map_err(AsError::into_error)?
    {
        let name = field.name().unwrap_or_default().to_owned();
        let slot = match name.as_str() {
            "title" => &mut cmd.candidate.title,
            "location" => &mut cmd.candidate.location,
            "price" => &mut cmd.candidate.price,
            "description" => &mut cmd.candidate.description,
            "images" | "images[]" => {
                let filename = field.file_name().unwrap_or_default().to_owned();
                let bytes = field.bytes().await.map_err(AsError::into_error)?;
                cmd.images.push(image::Upload {
                    filename,
                    bytes: bytes.to_vec(),
                });
                continue;
            }
            _ => continue,
        };
        *slot = Some(field.text().await.map_err(AsError::into_error)?);
    }

    Ok(cmd)
}

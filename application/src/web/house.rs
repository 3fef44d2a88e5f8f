//! Houses list and details handlers.

use axum::{
    extract::{Path, Query},
    Extension,
};
use maud::Markup;
use serde::Deserialize;
use service::{
    domain::listing, query, read::listing::list::Filter, Query as _,
};

use crate::{
    define_error,
    view::{page, ListingCard, ListingDetails, SearchForm, Site},
    AsError, Error, Service,
};

define_error! {
    enum HouseError {
        #[code = "HOUSE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "House not found"]
        NotExists,
    }
}

/// Query parameters of the houses list.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    /// City prefix to filter by.
    pub city: String,

    /// Maximum monthly price to filter by.
    pub max_price: String,

    /// Sort order.
    pub sort: String,
}

/// Houses list handler.
///
/// # Errors
///
/// If the catalog cannot be read.
#[tracing::instrument(
    skip_all,
    fields(
        city = %params.city,
        max_price = %params.max_price,
        sort = %params.sort,
    ),
)]
pub async fn list(
    Extension(service): Extension<Service>,
    Extension(site): Extension<Site>,
    Query(params): Query<ListParams>,
) -> Result<Markup, Error> {
    let filter = Filter::from_params(
        Some(params.city.as_str()),
        Some(params.max_price.as_str()),
        Some(params.sort.as_str()),
    );
    let listings = service
        .execute(query::listings::List(filter))
        .await
        .map_err(AsError::into_error)?;
    let cities = service
        .execute(query::listings::Cities::by(()))
        .await
        .map_err(AsError::into_error)?;

    let ListParams {
        city,
        max_price,
        sort,
    } = params;
    let form = SearchForm {
        cities: cities.iter().map(ToString::to_string).collect(),
        city,
        max_price,
        sort,
    };
    let cards = listings
        .iter()
        .map(|l| ListingCard::new(l, &site))
        .collect::<Vec<_>>();

    Ok(page::houses(&form, &cards))
}

/// House details handler.
///
/// # Errors
///
/// With [`HouseError::NotExists`] if the `id` is not a number, or there is
/// no house with such ID.
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn details(
    Extension(service): Extension<Service>,
    Extension(site): Extension<Site>,
    Path(id): Path<String>,
) -> Result<Markup, Error> {
    let id = id
        .parse::<listing::Id>()
        .map_err(|_| HouseError::NotExists)?;
    let listing = service
        .execute(query::listing::ById::by(id))
        .await
        .map_err(AsError::into_error)?
        .ok_or(HouseError::NotExists)?;

    Ok(page::house(&ListingDetails::new(&listing, &site)))
}

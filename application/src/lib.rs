//! Application serves the House Finder website on top of the [`Service`].

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

pub mod args;
pub mod catalog;
pub mod config;
pub mod error;
pub mod view;
pub mod web;

use axum::{extract::DefaultBodyLimit, routing::get, Extension, Router};
use service::infra::{database, storage};
use tower_http::services::ServeDir;
// Used in binary.
use axum_client_ip as _;
use tokio as _;
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<database::Memory, storage::Fs>;

/// Builds the website [`Router`] serving the provided [`Service`].
///
/// Stored images are served from the [`config::Storage::dir`] under the
/// [`config::Storage::url_prefix`].
#[must_use]
pub fn app(service: Service, config: &Config) -> Router {
    let site = view::Site {
        placeholder_image: config.catalog.placeholder_image.clone(),
    };
    let uploads = ServeDir::new(&config.storage.dir);
    let prefix = config.storage.url_prefix.trim_end_matches('/');

    let router = Router::new()
        .route("/", get(web::home))
        .route("/houses", get(web::house::list))
        .route("/house/:id", get(web::house::details))
        .route("/contact", get(web::contact))
        .route("/admin", get(web::admin::form).post(web::admin::submit));
    let router = if prefix.is_empty() {
        router.fallback_service(uploads)
    } else {
        router.nest_service(prefix, uploads)
    };

    router
        .layer(DefaultBodyLimit::max(config.server.max_upload_size))
        .layer(Extension(service))
        .layer(Extension(site))
}

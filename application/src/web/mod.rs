//! HTTP handlers of the website pages.

pub mod admin;
pub mod house;

use maud::Markup;

use crate::view::page;

/// Home page handler.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn home() -> Markup {
    page::home()
}

/// Contact page handler.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn contact() -> Markup {
    page::contact()
}

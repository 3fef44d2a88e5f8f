//! Full pages of the website.

use maud::{html, Markup};

use crate::Error;

use super::{layout, notice, ListingCard, ListingDetails, Notice, SearchForm};

/// Home page.
#[must_use]
pub fn home() -> Markup {
    layout(&html! {
        h1 { "Welcome to House Finder" }
        p {
            "Find affordable and convenient housing in Uganda. Browse \
             houses, apartments, and rooms in different cities."
        }
    })
}

/// Contact page.
#[must_use]
pub fn contact() -> Markup {
    layout(&html! {
        h1 { "Contact Us" }
        p {
            "Email: support@housefinder.com"
            br;
            "Phone: +256 700 123456"
        }
    })
}

/// Houses list page.
#[must_use]
pub fn houses(form: &SearchForm, cards: &[ListingCard]) -> Markup {
    layout(&html! {
        h1 { "Available Houses" }
        (form)
        @if cards.is_empty() {
            p { "No houses match your search." }
        } @else {
            @for card in cards {
                (card)
            }
        }
    })
}

/// House details page.
#[must_use]
pub fn house(details: &ListingDetails) -> Markup {
    layout(&html! { (details) })
}

/// Admin page with the form adding a new house.
#[must_use]
pub fn admin(result: Option<&Notice>) -> Markup {
    layout(&html! {
        h1 { "Admin Panel - Add New House" }
        (notice(result))
        form method="post" enctype="multipart/form-data" {
            input type="text" name="title" placeholder="House Title" required;
            input type="text" name="location"
                placeholder="Location (City, Country)" required;
            input type="number" name="price" min="0"
                placeholder="Price ($/month)" required;
            textarea name="description" placeholder="Description" rows="4" {}
            label { "Upload Images (multiple allowed):" }
            input type="file" name="images" accept="image/*" multiple;
            button type="submit" { "Add House" }
        }
        a href="/houses" class="back-link" { "⬅ Back to Houses" }
    })
}

/// Page describing the provided [`Error`].
///
/// Details of server errors are not shown.
#[must_use]
pub fn error(err: &Error) -> Markup {
    let reason = err.status_code.canonical_reason().unwrap_or("Error");
    layout(&html! {
        @if err.is_client_error() {
            h1 { (err.message) }
        } @else {
            h1 { (reason) }
            p { "Something went wrong. Please try again later." }
        }
        a href="/houses" class="back-link" { "⬅ Back to Houses" }
    })
}

#[cfg(test)]
mod spec {
    use crate::{view::Notice, Error};

    #[test]
    fn admin_shows_notice() {
        let html = super::admin(None).0;
        assert!(!html.contains("class=\"notice\""), "{html}");

        let html = super::admin(Some(&Notice::Failure(
            "Price must be a number.".to_owned(),
        )))
        .0;
        assert!(html.contains("Price must be a number."), "{html}");
    }

    #[test]
    fn error_hides_internal_details() {
        let html = super::error(&Error::internal(&"disk is on fire")).0;

        assert!(html.contains("Internal Server Error"), "{html}");
        assert!(!html.contains("disk is on fire"), "{html}");
    }

    #[test]
    fn houses_without_cards() {
        let html = super::houses(&super::SearchForm::default(), &[]).0;

        assert!(html.contains("No houses match your search."), "{html}");
        assert!(!html.contains("class=\"filters\""), "{html}");
    }
}

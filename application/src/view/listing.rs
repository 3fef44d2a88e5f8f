//! [`Listing`] views.

use maud::{html, Markup, PreEscaped, Render};
use service::{
    domain::{listing, Listing},
    read::listing::list::Sort,
};

use super::Site;

/// Card of a [`Listing`] in the houses list.
#[derive(Clone, Debug)]
pub struct ListingCard {
    /// ID of the [`Listing`].
    pub id: listing::Id,

    /// Title of the [`Listing`].
    pub title: String,

    /// Location of the [`Listing`].
    pub location: String,

    /// Human-readable monthly price of the [`Listing`].
    pub price: String,

    /// Description of the [`Listing`].
    pub description: String,

    /// URL of the cover image: the first attached one, or the placeholder.
    pub image: String,
}

impl ListingCard {
    /// Creates a new [`ListingCard`] of the provided [`Listing`].
    #[must_use]
    pub fn new(listing: &Listing, site: &Site) -> Self {
        Self {
            id: listing.id,
            title: listing.title.to_string(),
            location: listing.location.to_string(),
            price: listing.price_display.to_string(),
            description: listing.description.to_string(),
            image: listing.images.first().map_or_else(
                || site.placeholder_image.clone(),
                ToString::to_string,
            ),
        }
    }
}

impl Render for ListingCard {
    fn render(&self) -> Markup {
        html! {
            div class="card" {
                img src=(self.image) alt=(self.title);
                div class="title" { (self.title) }
                div class="location" { "📍 " (self.location) }
                div class="price" { "💲 " (self.price) }
                div class="description" { (self.description) }
                a href={ "/house/" (self.id) } { "➡ View Details" }
            }
        }
    }
}

/// Detailed view of a single [`Listing`].
#[derive(Clone, Debug)]
pub struct ListingDetails {
    /// Title of the [`Listing`].
    pub title: String,

    /// Location of the [`Listing`].
    pub location: String,

    /// Human-readable monthly price of the [`Listing`].
    pub price: String,

    /// Description of the [`Listing`].
    pub description: String,

    /// URLs of the gallery images. Never empty.
    pub images: Vec<String>,
}

impl ListingDetails {
    /// Creates a new [`ListingDetails`] of the provided [`Listing`].
    #[must_use]
    pub fn new(listing: &Listing, site: &Site) -> Self {
        let mut images = listing
            .images
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if images.is_empty() {
            images.push(site.placeholder_image.clone());
        }

        Self {
            title: listing.title.to_string(),
            location: listing.location.to_string(),
            price: listing.price_display.to_string(),
            description: listing.description.to_string(),
            images,
        }
    }
}

/// Script navigating the gallery images in a lightbox.
const LIGHTBOX_SCRIPT: &str = r"
let currentIndex = 0;
const images = Array.from(document.querySelectorAll('.gallery img')).map(i => i.src);
function openLightbox(i) { currentIndex = i; document.getElementById('lightbox').style.display = 'flex'; update(); }
function closeLightbox() { document.getElementById('lightbox').style.display = 'none'; }
function changeSlide(n) {
    currentIndex += n;
    if (currentIndex < 0) currentIndex = images.length - 1;
    if (currentIndex >= images.length) currentIndex = 0;
    update();
}
function update() {
    document.getElementById('lightbox-img').src = images[currentIndex];
    document.getElementById('caption').innerText = 'Image ' + (currentIndex + 1) + ' of ' + images.length;
}
";

impl Render for ListingDetails {
    fn render(&self) -> Markup {
        html! {
            div class="details" {
                h1 { (self.title) }
                div class="location" { "📍 " (self.location) }
                div class="price" { "💲 " (self.price) }
                div class="description" { (self.description) }
                div class="gallery" {
                    @for (i, src) in self.images.iter().enumerate() {
                        img src=(src) alt=(self.title)
                            onclick={ "openLightbox(" (i) ")" };
                    }
                }
                div id="lightbox" {
                    span class="close" onclick="closeLightbox()" { "×" }
                    img id="lightbox-img" src="" alt="";
                    div id="caption" {}
                    a class="prev" onclick="changeSlide(-1)" { "❮" }
                    a class="next" onclick="changeSlide(1)" { "❯" }
                }
                script { (PreEscaped(LIGHTBOX_SCRIPT)) }
                a href="/houses" class="back-link" { "⬅ Back to Houses" }
            }
        }
    }
}

/// Search form of the houses list, echoing the submitted parameters.
#[derive(Clone, Debug, Default)]
pub struct SearchForm {
    /// Distinct cities to choose from, in ascending order.
    pub cities: Vec<String>,

    /// Submitted city.
    pub city: String,

    /// Submitted maximum price, as typed.
    pub max_price: String,

    /// Submitted sort order, as typed.
    pub sort: String,
}

impl SearchForm {
    /// Returns the recognized [`Sort`] of this [`SearchForm`].
    fn sort(&self) -> Sort {
        self.sort.parse().unwrap_or_default()
    }

    /// Returns the summary of the applied filters, if any parameter was
    /// submitted.
    #[must_use]
    pub fn filters(&self) -> Option<String> {
        if self.city.is_empty()
            && self.max_price.is_empty()
            && self.sort.is_empty()
        {
            return None;
        }

        let mut parts = Vec::with_capacity(3);
        if !self.city.is_empty() {
            parts.push(format!("City = {}", self.city));
        }
        if !self.max_price.is_empty() {
            parts.push(format!("Max Price = ${}", self.max_price));
        }
        match self.sort() {
            Sort::None => {}
            Sort::PriceAscending => {
                parts.push("Sorted by Price (Low → High)".to_owned());
            }
            Sort::PriceDescending => {
                parts.push("Sorted by Price (High → Low)".to_owned());
            }
        }
        Some(parts.join(" | "))
    }
}

impl Render for SearchForm {
    fn render(&self) -> Markup {
        let sort = self.sort();
        html! {
            form method="get" action="/houses" {
                select name="city" {
                    option value="" { "All Locations" }
                    @for c in &self.cities {
                        option value=(c) selected[*c == self.city] { (c) }
                    }
                }
                input type="number" name="max_price"
                    placeholder="Max price ($)" value=(self.max_price);
                select name="sort" {
                    @for (s, label) in [
                        (Sort::None, "Default"),
                        (Sort::PriceAscending, "Price: Low → High"),
                        (Sort::PriceDescending, "Price: High → Low"),
                    ] {
                        option value=(s) selected[s == sort] { (label) }
                    }
                }
                button type="submit" { "Search" }
            }
            @if let Some(summary) = self.filters() {
                div class="filters" {
                    strong { "Filters:" } " " (summary)
                }
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use maud::Render as _;
    use service::domain::{
        listing::{self, image, Description, Location, Price, Title},
        Listing,
    };

    use super::{ListingCard, ListingDetails, SearchForm, Site};

    fn site() -> Site {
        Site {
            placeholder_image: "/placeholder.png".to_owned(),
        }
    }

    fn listing(images: &[&str]) -> Listing {
        Listing {
            id: listing::Id::new(7).unwrap(),
            title: Title::new("<b>Loft</b>").unwrap(),
            location: Location::new("Kampala, Uganda").unwrap(),
            price: Price::from(250),
            price_display: Price::from(250).into(),
            description: Description::from("Near the market.".to_owned()),
            images: images
                .iter()
                .map(|i| image::Url::from((*i).to_owned()))
                .collect(),
        }
    }

    fn form(city: &str, max_price: &str, sort: &str) -> SearchForm {
        SearchForm {
            cities: vec!["Entebbe".to_owned(), "Kampala".to_owned()],
            city: city.to_owned(),
            max_price: max_price.to_owned(),
            sort: sort.to_owned(),
        }
    }

    #[test]
    fn card_uses_first_image_or_placeholder() {
        let with = ListingCard::new(&listing(&["/a.png", "/b.png"]), &site());
        assert_eq!(with.image, "/a.png");

        let without = ListingCard::new(&listing(&[]), &site());
        assert_eq!(without.image, "/placeholder.png");
    }

    #[test]
    fn card_escapes_text() {
        let html = ListingCard::new(&listing(&[]), &site()).render().0;

        assert!(html.contains("&lt;b&gt;Loft&lt;/b&gt;"), "{html}");
        assert!(!html.contains("<b>Loft"), "{html}");
        assert!(html.contains(r#"href="/house/7""#), "{html}");
        assert!(html.contains("$250/month"), "{html}");
    }

    #[test]
    fn details_fall_back_to_placeholder() {
        let details = ListingDetails::new(&listing(&[]), &site());
        assert_eq!(details.images, ["/placeholder.png"]);

        let details =
            ListingDetails::new(&listing(&["/a.png", "/b.png"]), &site());
        assert_eq!(details.images, ["/a.png", "/b.png"]);

        let html = details.render().0;
        assert!(html.contains("openLightbox(1)"), "{html}");
    }

    #[test]
    fn filters_summary() {
        assert_eq!(form("", "", "").filters(), None);
        assert_eq!(
            form("Kampala", "", "").filters().as_deref(),
            Some("City = Kampala"),
        );
        assert_eq!(
            form("Kampala", "300", "low_high").filters().as_deref(),
            Some("City = Kampala | Max Price = $300 | Sorted by Price (Low → High)"),
        );
        assert_eq!(
            form("", "", "high_low").filters().as_deref(),
            Some("Sorted by Price (High → Low)"),
        );
        assert_eq!(form("", "", "bogus").filters().as_deref(), Some(""));
    }

    #[test]
    fn form_echoes_selection() {
        let html = form("Kampala", "300", "high_low").render().0;

        assert!(
            html.contains(r#"<option value="Kampala" selected>Kampala</option>"#),
            "{html}",
        );
        assert!(
            html.contains(r#"<option value="Entebbe">Entebbe</option>"#),
            "{html}",
        );
        assert!(
            html.contains(r#"<option value="high_low" selected>"#),
            "{html}",
        );
        assert!(html.contains(r#"value="300""#), "{html}");
    }
}

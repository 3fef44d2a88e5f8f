//! HTML views of the website.

pub mod listing;
pub mod page;

use maud::{html, Markup, PreEscaped, DOCTYPE};

pub use self::listing::{ListingCard, ListingDetails, SearchForm};

/// Site-wide settings used while rendering views.
#[derive(Clone, Debug)]
pub struct Site {
    /// URL of the image shown for listings without any images.
    pub placeholder_image: String,
}

/// Message shown above a form after its submission.
#[derive(Clone, Debug)]
pub enum Notice {
    /// Submission succeeded.
    Success(String),

    /// Submission was rejected.
    Failure(String),
}

impl Notice {
    /// Returns the text of this [`Notice`].
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(t) | Self::Failure(t) => t,
        }
    }

    /// Returns the CSS color this [`Notice`] is rendered with.
    const fn color(&self) -> &'static str {
        match self {
            Self::Success(_) => "green",
            Self::Failure(_) => "#c0392b",
        }
    }
}

/// Stylesheet shared by all the pages.
const STYLE: &str = r"
body { font-family: Arial, sans-serif; margin: 0; background: #f2f6f9; }
nav { background: #1e3d59; padding: 15px; display: flex; justify-content: center; flex-wrap: wrap; }
nav a { color: white; margin: 5px 15px; text-decoration: none; font-weight: bold; font-size: 18px; transition: 0.3s; }
nav a:hover { color: #ffd166; text-decoration: underline; }
.container { max-width: 1000px; margin: 30px auto; padding: 20px; }
h1 { color: #1e3d59; font-size: 36px; margin-bottom: 20px; text-align: center; }
.card { background: #fff; padding: 20px; margin-bottom: 25px; border-radius: 15px; box-shadow: 0 5px 15px rgba(0,0,0,0.1); transition: transform 0.2s; }
.card:hover { transform: translateY(-5px); box-shadow: 0 10px 20px rgba(0,0,0,0.15); }
.card img { width: 100%; max-height: 250px; border-radius: 12px; margin-bottom: 10px; object-fit: cover; }
.title { font-size: 24px; font-weight: bold; color: #1e3d59; margin-bottom: 5px; }
.location { color: #555; font-size: 18px; margin-bottom: 5px; }
.price { color: #28a745; font-weight: bold; font-size: 20px; margin-bottom: 10px; }
.description { font-size: 16px; margin-bottom: 10px; }
form { margin-bottom: 25px; padding: 20px; background: #ffffff; border-radius: 12px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
select, input[type=number], input[type=text], textarea, input[type=file] { padding: 10px; margin: 8px 0; width: 100%; border-radius: 8px; border: 1px solid #ccc; font-size: 16px; }
button { padding: 12px 25px; background: #1e3d59; color: white; border: none; border-radius: 8px; cursor: pointer; font-size: 16px; transition: 0.3s; }
button:hover { background: #3a5a78; }
.filters { margin-bottom: 20px; color: #333; font-size: 18px; }
.details { background: #fff; padding: 30px; border-radius: 15px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); }
.back-link { display: inline-block; margin-top: 20px; text-decoration: none; color: #1e3d59; font-size: 18px; transition: 0.3s; }
.back-link:hover { color: #ffd166; }
.gallery { display: flex; flex-wrap: wrap; gap: 15px; margin-top: 20px; }
.gallery img { width: 100%; max-width: 300px; border-radius: 12px; cursor: pointer; transition: transform 0.3s; }
.gallery img:hover { transform: scale(1.05); }
#lightbox { display: none; position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.9); justify-content: center; align-items: center; z-index: 1000; flex-direction: column; text-align: center; }
#lightbox-img { max-width: 90%; max-height: 80%; border-radius: 12px; margin-bottom: 10px; }
#caption { color: white; }
.close { position: absolute; top: 20px; right: 30px; color: white; font-size: 40px; cursor: pointer; }
.prev, .next { cursor: pointer; position: absolute; top: 50%; padding: 16px; margin-top: -22px; color: white; font-weight: bold; font-size: 30px; user-select: none; }
.prev { left: 20px; }
.next { right: 20px; }
.prev:hover, .next:hover { color: #ffd166; }
@media (max-width: 600px) {
    .card { padding: 15px; }
    nav { flex-direction: column; }
}
";

/// Wraps the provided `content` into the common page layout.
#[must_use]
pub fn layout(content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "House Finder" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    a href="/houses" { "Houses" }
                    a href="/contact" { "Contact" }
                    a href="/admin" { "Admin" }
                }
                div class="container" { (content) }
            }
        }
    }
}

/// Renders the provided [`Notice`] (if any).
fn notice(notice: Option<&Notice>) -> Markup {
    html! {
        @if let Some(n) = notice {
            p class="notice" style={ "color:" (n.color()) } { (n.text()) }
        }
    }
}

//! [`Listing`] definitions.

pub mod image;

use std::str::FromStr;

use common::{money::Currency, Money};
use derive_more::{AsRef, Display, From, Into};

/// Rental housing unit offered in the catalog.
#[derive(Clone, Debug)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Location`] of this [`Listing`].
    pub location: Location,

    /// Monthly [`Price`] of this [`Listing`].
    pub price: Price,

    /// [`PriceDisplay`] computed once this [`Listing`] was created.
    pub price_display: PriceDisplay,

    /// [`Description`] of this [`Listing`].
    pub description: Description,

    /// URLs of the images attached to this [`Listing`], in upload order.
    pub images: Vec<image::Url>,
}

impl Listing {
    /// Returns the [`City`] this [`Listing`] is located in.
    #[must_use]
    pub fn city(&self) -> City {
        self.location.city()
    }
}

/// ID of a [`Listing`].
///
/// Always positive.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u64);

impl Id {
    /// [`Id`] of the very first [`Listing`] in an empty catalog.
    pub const FIRST: Self = Self(1);

    /// Creates a new [`Id`] if the given `id` is positive.
    #[must_use]
    pub const fn new(id: u64) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Returns the [`Id`] following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().ok().and_then(Self::new).ok_or("invalid `listing::Id`")
    }
}

/// Title of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is not blank.
    ///
    /// Whitespace-only input counts as blank and is rejected, not only the
    /// empty one. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(title: impl AsRef<str>) -> Option<Self> {
        let title = title.as_ref().trim();
        (!title.is_empty()).then(|| Self(title.to_owned()))
    }
}

/// Location of a [`Listing`] in a `City, Country` format.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`] if the given `location` is not blank.
    ///
    /// Whitespace-only input counts as blank and is rejected, not only the
    /// empty one. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(location: impl AsRef<str>) -> Option<Self> {
        let location = location.as_ref().trim();
        (!location.is_empty()).then(|| Self(location.to_owned()))
    }

    /// Returns the [`City`] part of this [`Location`].
    ///
    /// That's everything before the first comma, or the whole [`Location`]
    /// if there is no comma.
    #[must_use]
    pub fn city(&self) -> City {
        let city = self.0.split(',').next().unwrap_or_default();
        City(city.to_owned())
    }
}

/// City a [`Listing`] is located in.
#[derive(
    AsRef, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[as_ref(str, String)]
pub struct City(String);

impl City {
    /// Creates a new [`City`] if the given `city` is not empty.
    #[must_use]
    pub fn new(city: impl Into<String>) -> Option<Self> {
        let city = city.into();
        (!city.is_empty()).then_some(Self(city))
    }

    /// Checks whether this [`City`] starts with the provided `prefix`
    /// (case-sensitive).
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(prefix.0.as_str())
    }
}

/// Monthly price of a [`Listing`] in [`Price::CURRENCY`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
pub struct Price(u64);

impl Price {
    /// [`Currency`] all the [`Price`]s are specified in.
    pub const CURRENCY: Currency = Currency::Usd;

    /// Returns this [`Price`] as [`Money`].
    #[must_use]
    pub fn money(self) -> Money {
        Money::new(self.0, Self::CURRENCY)
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('+').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err("invalid `Price`");
        }
        digits.parse().map(Self).map_err(|_| "`Price` is too large")
    }
}

/// Human-readable form of a [`Price`], like `$250/month`.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct PriceDisplay(String);

impl From<Price> for PriceDisplay {
    fn from(price: Price) -> Self {
        Self(format!("{}/month", price.money()))
    }
}

/// Description of a [`Listing`].
#[derive(AsRef, Clone, Debug, Default, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
pub struct Description(String);

/// Raw user input for a new [`Listing`], not validated yet.
#[derive(Clone, Debug, Default)]
pub struct Candidate {
    /// Raw [`Title`].
    pub title: Option<String>,

    /// Raw [`Location`].
    pub location: Option<String>,

    /// Raw [`Price`].
    pub price: Option<String>,

    /// Raw [`Description`].
    pub description: Option<String>,
}

//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::{listing::Id, Listing};

/// Selector of the [`Id`] to be assigned to the next created [`Listing`].
#[derive(Clone, Copy, Debug)]
pub struct Next;

pub mod list {
    //! [`Listing`] list definitions.

    use common::money;
    use rust_decimal::Decimal;
    use strum::{Display, EnumString};

    use crate::domain::{listing, Listing};

    /// Filter selecting and ordering a list of [`Listing`]s.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Prefix of the [`listing::City`] to keep [`Listing`]s in.
        pub city: Option<listing::City>,

        /// Maximum monthly price of the [`Listing`]s to keep (inclusive).
        pub max_price: Option<Decimal>,

        /// [`Sort`] order of the resulting list.
        pub sort: Sort,
    }

    impl Filter {
        /// Creates a new [`Filter`] out of the raw query parameters.
        ///
        /// Empty `city` means no city filter. A `max_price` which is not a
        /// number is ignored, as well as an unknown `sort`.
        ///
        /// `max_price` is a [`Decimal`], so `NaN`, infinities and values
        /// beyond the [`Decimal`] range (like `-1e100`) are not numbers here
        /// either: they disable the price filter instead of rejecting every
        /// [`Listing`].
        #[must_use]
        pub fn from_params(
            city: Option<&str>,
            max_price: Option<&str>,
            sort: Option<&str>,
        ) -> Self {
            Self {
                city: city.and_then(listing::City::new),
                max_price: max_price.and_then(|p| money::parse_amount(p).ok()),
                sort: sort.and_then(|s| s.parse().ok()).unwrap_or_default(),
            }
        }

        /// Applies this [`Filter`] to the provided `listings`.
        ///
        /// Filters by city first, then by the maximum price, and then sorts
        /// the rest. Sorting is stable, so [`Listing`]s with equal prices
        /// keep their original relative order.
        #[must_use]
        pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
            let mut filtered = listings
                .iter()
                .filter(|l| self.matches_city(l))
                .filter(|l| self.matches_price(l))
                .cloned()
                .collect::<Vec<_>>();

            match self.sort {
                Sort::None => {}
                Sort::PriceAscending => filtered.sort_by_key(|l| l.price),
                Sort::PriceDescending => {
                    filtered.sort_by(|a, b| b.price.cmp(&a.price));
                }
            }

            filtered
        }

        /// Checks whether the provided [`Listing`] passes the city filter.
        fn matches_city(&self, listing: &Listing) -> bool {
            self.city
                .as_ref()
                .map_or(true, |city| listing.city().starts_with(city))
        }

        /// Checks whether the provided [`Listing`] passes the maximum price
        /// filter.
        fn matches_price(&self, listing: &Listing) -> bool {
            self.max_price.map_or(true, |max| {
                Decimal::from(u64::from(listing.price)) <= max
            })
        }
    }

    /// Sort order of a [`Listing`]s list.
    #[derive(
        Clone, Copy, Debug, Default, Display, EnumString, Eq, Hash, PartialEq,
    )]
    pub enum Sort {
        /// Insertion order.
        #[default]
        #[strum(to_string = "")]
        None,

        /// Cheapest first.
        #[strum(to_string = "low_high", serialize = "price_ascending")]
        PriceAscending,

        /// Most expensive first.
        #[strum(to_string = "high_low", serialize = "price_descending")]
        PriceDescending,
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::{
        listing::{self, Description, Location, Price, Title},
        Listing,
    };

    use super::list::{Filter, Sort};

    fn listing(id: u64, location: &str, price: u64) -> Listing {
        Listing {
            id: listing::Id::new(id).unwrap(),
            title: Title::new(format!("House #{id}")).unwrap(),
            location: Location::new(location).unwrap(),
            price: Price::from(price),
            price_display: Price::from(price).into(),
            description: Description::default(),
            images: vec![],
        }
    }

    fn catalog() -> Vec<Listing> {
        vec![
            listing(1, "Kampala, Uganda", 250),
            listing(2, "Entebbe, Uganda", 80),
            listing(3, "Jinja, Uganda", 400),
        ]
    }

    fn ids(listings: &[Listing]) -> Vec<u64> {
        listings.iter().map(|l| l.id.into()).collect()
    }

    fn prices(listings: &[Listing]) -> Vec<u64> {
        listings.iter().map(|l| l.price.into()).collect()
    }

    fn filter(city: &str, max_price: &str, sort: &str) -> Filter {
        Filter::from_params(Some(city), Some(max_price), Some(sort))
    }

    #[test]
    fn no_params_keep_everything_in_order() {
        let all = catalog();

        assert_eq!(ids(&Filter::default().apply(&all)), [1, 2, 3]);
        assert_eq!(
            ids(&Filter::from_params(None, None, None).apply(&all)),
            [1, 2, 3],
        );
        assert_eq!(ids(&filter("", "", "").apply(&all)), [1, 2, 3]);
    }

    #[test]
    fn filters_by_city() {
        let all = vec![
            listing(1, "Kampala, Uganda", 250),
            listing(2, "Entebbe, Uganda", 80),
        ];

        assert_eq!(ids(&filter("Kampala", "", "").apply(&all)), [1]);
        assert_eq!(ids(&filter("Kamp", "", "").apply(&all)), [1]);
        assert!(filter("kampala", "", "").apply(&all).is_empty());
        assert!(filter("Uganda", "", "").apply(&all).is_empty());
    }

    #[test]
    fn filters_by_max_price_inclusively() {
        let all = catalog();

        assert_eq!(prices(&filter("", "100", "").apply(&all)), [80]);
        assert_eq!(prices(&filter("", "250", "").apply(&all)), [250, 80]);
        assert_eq!(prices(&filter("", "250.5", "").apply(&all)), [250, 80]);
        assert!(filter("", "79", "").apply(&all).is_empty());
    }

    #[test]
    fn ignores_malformed_max_price() {
        let all = catalog();

        let f = filter("Kampala", "abc", "");
        assert_eq!(f.max_price, None);
        assert_eq!(ids(&f.apply(&all)), [1]);

        assert_eq!(ids(&filter("", "abc", "").apply(&all)), [1, 2, 3]);
    }

    #[test]
    fn sorts_by_price() {
        let all = catalog();

        assert_eq!(
            prices(&filter("", "", "low_high").apply(&all)),
            [80, 250, 400],
        );
        assert_eq!(
            prices(&filter("", "", "price_ascending").apply(&all)),
            [80, 250, 400],
        );
        assert_eq!(
            prices(&filter("", "", "high_low").apply(&all)),
            [400, 250, 80],
        );
        assert_eq!(
            prices(&filter("", "", "price_descending").apply(&all)),
            [400, 250, 80],
        );
        assert_eq!(prices(&filter("", "", "bogus").apply(&all)), [250, 80, 400]);
    }

    #[test]
    fn sorting_is_stable() {
        let all = vec![
            listing(1, "Kampala, Uganda", 100),
            listing(2, "Kampala, Uganda", 50),
            listing(3, "Kampala, Uganda", 100),
            listing(4, "Kampala, Uganda", 50),
        ];

        assert_eq!(ids(&filter("", "", "low_high").apply(&all)), [2, 4, 1, 3]);
        assert_eq!(ids(&filter("", "", "high_low").apply(&all)), [1, 3, 2, 4]);
    }

    #[test]
    fn filters_before_sorting() {
        let all = vec![
            listing(1, "Kampala, Uganda", 300),
            listing(2, "Entebbe, Uganda", 10),
            listing(3, "Kampala, Uganda", 120),
            listing(4, "Kampala, Uganda", 900),
        ];

        assert_eq!(
            ids(&filter("Kampala", "500", "low_high").apply(&all)),
            [3, 1],
        );
    }

    #[test]
    fn does_not_mutate_input() {
        let all = catalog();

        _ = filter("", "", "high_low").apply(&all);

        assert_eq!(ids(&all), [1, 2, 3]);
    }

    #[test]
    fn parses_sort() {
        assert_eq!("".parse::<Sort>().unwrap(), Sort::None);
        assert_eq!("low_high".parse::<Sort>().unwrap(), Sort::PriceAscending);
        assert_eq!("high_low".parse::<Sort>().unwrap(), Sort::PriceDescending);
        assert!("LOW_HIGH".parse::<Sort>().is_err());

        assert_eq!(Sort::PriceAscending.to_string(), "low_high");
        assert_eq!(Sort::None.to_string(), "");
    }

    #[test]
    fn parses_max_price() {
        assert_eq!(
            filter("", " 1e2 ", "").max_price,
            Some(Decimal::from(100)),
        );
    }

    #[test]
    fn non_decimal_max_price_disables_price_filter() {
        let all = catalog();

        for max_price in ["nan", "NaN", "inf", "-inf", "-1e100"] {
            let f = filter("", max_price, "");
            assert_eq!(f.max_price, None, "{max_price}");
            assert_eq!(ids(&f.apply(&all)), [1, 2, 3], "{max_price}");
        }
    }
}

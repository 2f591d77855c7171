//! Café catalog types and loading.
//!
//! The catalog is an ordered, read-only list of cafés. It is embedded as
//! JSON by the web crate and parsed once at startup; nothing in the
//! application mutates it afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of stars on the rating scale.
pub const STAR_SCALE: u8 = 5;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no cafes")]
    Empty,
}

/// The drinks every café is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drink {
    FlatWhite,
    Cappuccino,
    Americano,
    DoubleEspresso,
    IcedLatte,
}

impl Drink {
    pub const ALL: [Drink; 5] = [
        Drink::FlatWhite,
        Drink::Cappuccino,
        Drink::Americano,
        Drink::DoubleEspresso,
        Drink::IcedLatte,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Drink::FlatWhite => "Flat White",
            Drink::Cappuccino => "Cappuccino",
            Drink::Americano => "Americano",
            Drink::DoubleEspresso => "Double Espresso",
            Drink::IcedLatte => "Iced Latte",
        }
    }
}

/// Per-drink ratings plus an optional stored overall rating.
///
/// The seed data carries no overall value, so [`RatingSummary::overall_stars`]
/// falls back to the rounded mean of the drink ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<u8>,
    pub flat_white: u8,
    pub cappuccino: u8,
    pub americano: u8,
    pub double_espresso: u8,
    pub iced_latte: u8,
}

impl RatingSummary {
    pub fn of(&self, drink: Drink) -> u8 {
        match drink {
            Drink::FlatWhite => self.flat_white,
            Drink::Cappuccino => self.cappuccino,
            Drink::Americano => self.americano,
            Drink::DoubleEspresso => self.double_espresso,
            Drink::IcedLatte => self.iced_latte,
        }
    }

    /// Returns a copy with one drink re-rated.
    pub fn with(&self, drink: Drink, value: u8) -> Self {
        let mut next = *self;
        let slot = match drink {
            Drink::FlatWhite => &mut next.flat_white,
            Drink::Cappuccino => &mut next.cappuccino,
            Drink::Americano => &mut next.americano,
            Drink::DoubleEspresso => &mut next.double_espresso,
            Drink::IcedLatte => &mut next.iced_latte,
        };
        *slot = value.min(STAR_SCALE);
        next
    }

    /// Rounded mean of the five drink ratings.
    pub fn average(&self) -> u8 {
        let sum: u32 = Drink::ALL.iter().map(|d| u32::from(self.of(*d))).sum();
        let count = Drink::ALL.len() as f64;
        (f64::from(sum) / count).round() as u8
    }

    /// The stored overall rating, or the drink average when none is stored.
    pub fn overall_stars(&self) -> u8 {
        self.overall.unwrap_or_else(|| self.average())
    }
}

/// A visitor comment attached to a café.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeComment {
    pub id: u32,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date: String,
}

/// One café record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub location: String,
    pub address: String,
    pub image: String,
    pub ratings: RatingSummary,
    pub comments: Vec<CafeComment>,
}

impl Cafe {
    /// The star bucket this café falls into, rendered as a filter value
    /// ("1 Star", "4 Stars", ...).
    pub fn rating_bucket(&self) -> String {
        star_label(self.ratings.overall_stars())
    }
}

/// Renders a star count the way the rating filter options do.
pub fn star_label(count: u8) -> String {
    if count == 1 {
        "1 Star".to_string()
    } else {
        format!("{count} Stars")
    }
}

/// Parse the embedded catalog JSON.
pub fn parse_catalog(json: &str) -> Result<Vec<Cafe>, CatalogError> {
    let cafes: Vec<Cafe> = serde_json::from_str(json)?;
    if cafes.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(cafes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "name": "Login Lounge",
            "slug": "login-lounge",
            "location": "Camberley",
            "address": "1 High St, Camberley, GU15 3SY",
            "image": "img/cafe-img-1.jpg",
            "ratings": {
                "flat_white": 1,
                "cappuccino": 2,
                "americano": 3,
                "double_espresso": 3,
                "iced_latte": 2
            },
            "comments": [
                {
                    "id": 1,
                    "author": "Jules",
                    "title": "Lovely flat white",
                    "content": "Cozy spot with friendly staff.",
                    "date": "Jan 7, 2026 14:32"
                }
            ]
        }
    ]"#;

    #[test]
    fn parses_sample_catalog() {
        let cafes = parse_catalog(SAMPLE).unwrap();
        assert_eq!(cafes.len(), 1);
        assert_eq!(cafes[0].name, "Login Lounge");
        assert_eq!(cafes[0].ratings.americano, 3);
        assert_eq!(cafes[0].comments[0].author, "Jules");
    }

    #[test]
    fn empty_catalog_is_an_error() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
        assert!(matches!(
            parse_catalog("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn overall_falls_back_to_drink_average() {
        let cafes = parse_catalog(SAMPLE).unwrap();
        let ratings = cafes[0].ratings;
        assert_eq!(ratings.overall, None);
        // (1 + 2 + 3 + 3 + 2) / 5 = 2.2, rounds to 2
        assert_eq!(ratings.average(), 2);
        assert_eq!(ratings.overall_stars(), 2);

        let stored = RatingSummary {
            overall: Some(4),
            ..ratings
        };
        assert_eq!(stored.overall_stars(), 4);
    }

    #[test]
    fn with_replaces_a_single_drink() {
        let ratings = parse_catalog(SAMPLE).unwrap()[0].ratings;
        let updated = ratings.with(Drink::FlatWhite, 5);
        assert_eq!(updated.flat_white, 5);
        assert_eq!(updated.cappuccino, ratings.cappuccino);
        // Values above the scale are clamped.
        assert_eq!(ratings.with(Drink::IcedLatte, 9).iced_latte, STAR_SCALE);
    }

    #[test]
    fn star_labels_pluralize() {
        assert_eq!(star_label(1), "1 Star");
        assert_eq!(star_label(2), "2 Stars");
        assert_eq!(star_label(5), "5 Stars");
    }

    #[test]
    fn rating_bucket_uses_overall() {
        let cafe = &parse_catalog(SAMPLE).unwrap()[0];
        assert_eq!(cafe.rating_bucket(), "2 Stars");
    }
}

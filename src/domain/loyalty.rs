// SPDX-License-Identifier: MPL-2.0
//! Coffee shops and their loyalty cards.
//!
//! The catalog is static; the wallet only renders it.

use std::fmt;

// =============================================================================
// ShopId
// =============================================================================

/// Stable identifier of a coffee shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShopId(u32);

impl ShopId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Coordinate
// =============================================================================

/// WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, clamping to the valid latitude/longitude ranges.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

// =============================================================================
// LoyaltyCard
// =============================================================================

/// Stamp progress on one shop's loyalty card.
///
/// `stamps` never exceeds `max_stamps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyCard {
    stamps: u32,
    max_stamps: u32,
}

impl LoyaltyCard {
    #[must_use]
    pub fn new(stamps: u32, max_stamps: u32) -> Self {
        Self {
            stamps: stamps.min(max_stamps),
            max_stamps,
        }
    }

    #[must_use]
    pub fn stamps(&self) -> u32 {
        self.stamps
    }

    #[must_use]
    pub fn max_stamps(&self) -> u32 {
        self.max_stamps
    }

    /// Whether slot `index` (zero-based) holds a stamp.
    #[must_use]
    pub fn is_stamped(&self, index: u32) -> bool {
        index < self.stamps
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.max_stamps > 0 && self.stamps == self.max_stamps
    }

    /// Iterates over every slot, yielding whether it is stamped.
    pub fn slots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.max_stamps).map(|i| self.is_stamped(i))
    }
}

// =============================================================================
// CoffeeShop
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeShop {
    pub id: ShopId,
    pub name: String,
    pub coordinate: Coordinate,
    pub loyalty: LoyaltyCard,
}

impl CoffeeShop {
    #[must_use]
    pub fn new(id: u32, name: &str, coordinate: Coordinate, loyalty: LoyaltyCard) -> Self {
        Self {
            id: ShopId::new(id),
            name: name.to_owned(),
            coordinate,
            loyalty,
        }
    }
}

/// The shops shown in the wallet and on the map.
#[must_use]
pub fn catalog() -> Vec<CoffeeShop> {
    vec![
        CoffeeShop::new(
            1,
            "Fambook Coffee & More",
            Coordinate::new(39.8986, 32.8256),
            LoyaltyCard::new(3, 8),
        ),
        CoffeeShop::new(
            2,
            "Paper Roasting Coffee & Chocolate",
            Coordinate::new(39.9167, 32.8222),
            LoyaltyCard::new(7, 10),
        ),
        CoffeeShop::new(
            3,
            "Kronotrop",
            Coordinate::new(39.9056, 32.8631),
            LoyaltyCard::new(5, 9),
        ),
        CoffeeShop::new(
            4,
            "Amelie's Garden",
            Coordinate::new(39.8924, 32.8596),
            LoyaltyCard::new(8, 10),
        ),
        CoffeeShop::new(
            5,
            "Rispetto Coffee Co.",
            Coordinate::new(39.8821, 32.6953),
            LoyaltyCard::new(2, 8),
        ),
    ]
}

/// Looks up a shop by id.
#[must_use]
pub fn find(shops: &[CoffeeShop], id: ShopId) -> Option<&CoffeeShop> {
    shops.iter().find(|shop| shop.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let shops = catalog();
        let ids: HashSet<_> = shops.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), shops.len());
        assert_eq!(shops.len(), 5);
    }

    #[test]
    fn stamps_are_capped_at_max() {
        let card = LoyaltyCard::new(12, 8);
        assert_eq!(card.stamps(), 8);
        assert!(card.is_complete());
    }

    #[test]
    fn slots_report_stamped_prefix() {
        let card = LoyaltyCard::new(3, 5);
        let slots: Vec<bool> = card.slots().collect();
        assert_eq!(slots, vec![true, true, true, false, false]);
    }

    #[test]
    fn empty_card_is_not_complete() {
        assert!(!LoyaltyCard::new(0, 0).is_complete());
    }

    #[test]
    fn coordinate_is_clamped() {
        let c = Coordinate::new(120.0, -200.0);
        assert_eq!(c.latitude(), 90.0);
        assert_eq!(c.longitude(), -180.0);
    }

    #[test]
    fn find_returns_matching_shop() {
        let shops = catalog();
        let kronotrop = find(&shops, ShopId::new(3)).map(|s| s.name.as_str());
        assert_eq!(kronotrop, Some("Kronotrop"));
        assert!(find(&shops, ShopId::new(99)).is_none());
    }
}

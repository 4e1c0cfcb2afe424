//! Property listings shown on the Properties page.
//!
//! Fixture data only; there is no backing store.

/// A single property listing card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Unique display key within the listing set
    pub id: u32,
    /// Embedded artwork path
    pub image: &'static str,
    /// Card title
    pub title: &'static str,
    /// Short card summary
    pub summary: &'static str,
    /// Expanded text revealed by the "View Details" control
    pub details: &'static str,
}

const LISTINGS: [Listing; 3] = [
    Listing {
        id: 1,
        image: "images/property1.svg",
        title: "Property 1",
        summary: "Spacious 3-bedroom bungalow located in a serene estate.",
        details: "Sits on a fully fenced 650 sqm plot with a private garden, \
                  dedicated parking for two cars, and a borehole water supply.",
    },
    Listing {
        id: 2,
        image: "images/property2.svg",
        title: "Property 2",
        summary: "Spacious 3-bedroom bungalow located in a serene estate.",
        details: "Finished to a high standard with fitted kitchen cabinetry, \
                  en-suite bedrooms, and round-the-clock estate security.",
    },
    Listing {
        id: 3,
        image: "images/property3.svg",
        title: "Property 3",
        summary: "Spacious 3-bedroom bungalow located in a serene estate.",
        details: "Corner-piece unit close to the estate clubhouse, with a \
                  paved courtyard and space for a future boys' quarters.",
    },
];

/// All listings in display order
pub fn listings() -> &'static [Listing] {
    &LISTINGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use std::collections::HashSet;

    #[test]
    fn three_listings_with_unique_ids() {
        let ids: HashSet<u32> = listings().iter().map(|l| l.id).collect();
        assert_eq!(listings().len(), 3);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn titles_follow_display_order() {
        let titles: Vec<&str> = listings().iter().map(|l| l.title).collect();
        assert_eq!(titles, ["Property 1", "Property 2", "Property 3"]);
    }

    #[test]
    fn every_artwork_is_embedded() {
        for listing in listings() {
            assert!(
                Assets::get(listing.image).is_some(),
                "missing artwork {}",
                listing.image
            );
        }
    }
}

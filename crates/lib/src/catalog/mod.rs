//! Destinations and hotel listings offered by the site
//!
//! The catalog is fixed data. Location search is a case-insensitive
//! substring match on a location's name or description.

use serde::Serialize;
use serde_json::json;

use crate::favorites::FavoriteItem;

/// Number of locations shown when the search box is empty.
const POPULAR_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hotel {
    pub id: u64,
    pub title: &'static str,
    pub location: &'static str,
    pub price: u32,
    pub rating: f64,
    pub image: &'static str,
    pub description: &'static str,
}

impl Hotel {
    /// The favorites entry for this listing.
    pub fn to_favorite(&self) -> FavoriteItem {
        FavoriteItem::new(self.id)
            .with_detail("title", self.title)
            .with_detail("location", self.location)
            .with_detail("price", self.price)
            .with_detail("rating", json!(self.rating))
            .with_detail("image", self.image)
            .with_detail("description", self.description)
    }
}

const fn location(id: u32, name: &'static str) -> Location {
    Location {
        id,
        name,
        description: "City in Egypt",
    }
}

static LOCATIONS: [Location; 10] = [
    location(1, "Cairo"),
    location(2, "Alexandria"),
    location(3, "Luxor"),
    location(4, "Aswan"),
    location(5, "Giza"),
    location(6, "Hurghada"),
    location(7, "Sharm El Sheikh"),
    location(8, "Marsa Alam"),
    location(9, "Dahab"),
    location(10, "Abu Simbel"),
];

static HOTELS: [Hotel; 6] = [
    Hotel {
        id: 1,
        title: "Giza Pyramids View Hotel",
        location: "Giza",
        price: 199,
        rating: 4.8,
        image: "/images/pyramids.jpg",
        description: "Experience the majesty of the Pyramids from your room",
    },
    Hotel {
        id: 2,
        title: "Luxor Temple Resort",
        location: "Luxor",
        price: 179,
        rating: 4.7,
        image: "/images/luxor.jpg",
        description: "Luxury accommodations near the temples of Luxor",
    },
    Hotel {
        id: 3,
        title: "Alexandria Corniche Hotel",
        location: "Alexandria",
        price: 149,
        rating: 4.6,
        image: "/images/alexandria.jpg",
        description: "Stunning Mediterranean views and historical charm",
    },
    Hotel {
        id: 4,
        title: "Red Sea Coral Resort",
        location: "Hurghada",
        price: 229,
        rating: 4.9,
        image: "/images/redsea.jpg",
        description: "Dive into crystal clear waters and colorful reefs",
    },
    Hotel {
        id: 5,
        title: "Aswan Nile Palace",
        location: "Aswan",
        price: 189,
        rating: 4.7,
        image: "/images/aswan.jpg",
        description: "Tranquil accommodations along the Nile River",
    },
    Hotel {
        id: 6,
        title: "Cairo Khan el-Khalili Boutique",
        location: "Cairo",
        price: 159,
        rating: 4.5,
        image: "/images/cairo.jpg",
        description: "Authentic experiences in the heart of Cairo",
    },
];

pub fn locations() -> &'static [Location] {
    &LOCATIONS
}

/// Locations suggested before anything is typed.
pub fn popular_destinations() -> &'static [Location] {
    &LOCATIONS[..POPULAR_COUNT]
}

/// Locations whose name or description contains `query`, ignoring case.
///
/// An empty query returns the popular destinations instead.
pub fn search_locations(query: &str) -> Vec<&'static Location> {
    if query.is_empty() {
        return popular_destinations().iter().collect();
    }

    let needle = query.to_lowercase();
    LOCATIONS
        .iter()
        .filter(|location| {
            location.name.to_lowercase().contains(&needle)
                || location.description.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn hotels() -> &'static [Hotel] {
    &HOTELS
}

pub fn hotel(id: u64) -> Option<&'static Hotel> {
    HOTELS.iter().find(|hotel| hotel.id == id)
}

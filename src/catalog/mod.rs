//! Static booking catalog: packages, add-on services and group-size brackets.
//!
//! Lookups are by id and return `None` for unknown ids; callers decide how an
//! unknown id degrades (pricing treats it as "nothing selected").

pub mod models;

pub use models::{AddOnService, GroupSizeBracket, Package};

/// ISO code for every catalog price
pub const DEFAULT_CURRENCY: &str = "INR";

pub static PACKAGES: [Package; 3] = [
    Package {
        id: "rumtek",
        name: "Rumtek Monastery",
        location: "East Sikkim",
        price: 2500,
        rating: 4.8,
        highlights: &["Largest monastery", "Karmapa seat", "Golden Stupa"],
    },
    Package {
        id: "pemayangtse",
        name: "Pemayangtse Monastery",
        location: "West Sikkim",
        price: 2200,
        rating: 4.7,
        highlights: &["Oldest monastery", "Mountain views", "Ancient murals"],
    },
    Package {
        id: "tashiding",
        name: "Tashiding Monastery",
        location: "West Sikkim",
        price: 2000,
        rating: 4.6,
        highlights: &["Sacred chorten", "Valley views", "Peaceful setting"],
    },
];

pub static SERVICES: [AddOnService; 5] = [
    AddOnService {
        id: "guide",
        name: "Professional Guide",
        description: "Experienced local guide with monastery expertise",
        price: 800,
    },
    AddOnService {
        id: "transport",
        name: "Transportation",
        description: "Comfortable vehicle with driver for the day",
        price: 1500,
    },
    AddOnService {
        id: "accommodation",
        name: "Nearby Accommodation",
        description: "Traditional guesthouse or monastery stay",
        price: 1800,
    },
    AddOnService {
        id: "meals",
        name: "Traditional Meals",
        description: "Authentic Sikkimese cuisine experience",
        price: 600,
    },
    AddOnService {
        id: "photography",
        name: "Photography Permit",
        description: "Special permission for monastery photography",
        price: 300,
    },
];

pub static GROUP_SIZES: [GroupSizeBracket; 4] = [
    GroupSizeBracket {
        id: "1",
        label: "Solo Traveler",
        discount_percent: 0,
    },
    GroupSizeBracket {
        id: "2-4",
        label: "2-4 People",
        discount_percent: 5,
    },
    GroupSizeBracket {
        id: "5-8",
        label: "5-8 People",
        discount_percent: 10,
    },
    GroupSizeBracket {
        id: "9+",
        label: "9+ People",
        discount_percent: 15,
    },
];

pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id == id)
}

pub fn find_service(id: &str) -> Option<&'static AddOnService> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn find_group_size(id: &str) -> Option<&'static GroupSizeBracket> {
    GROUP_SIZES.iter().find(|g| g.id == id)
}

//! Static page content and navigation labels.

/// Navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAVIGATION: [NavLink; 6] = [
    NavLink { name: "Home", href: "/" },
    NavLink { name: "360° Tours", href: "/tours" },
    NavLink { name: "Interactive Map", href: "/map" },
    NavLink { name: "Digital Archive", href: "/archive" },
    NavLink { name: "Cultural Calendar", href: "/calendar" },
    NavLink { name: "Book Your Visit", href: "/booking" },
];

/// Label for a route, falling back to the site name
pub fn nav_label(href: &str) -> &'static str {
    NAVIGATION
        .iter()
        .find(|l| l.href == href)
        .map(|l| l.name)
        .unwrap_or("Monastery360")
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        title: "360° Virtual Tours",
        description: "Immersive monastery experiences from anywhere in the world",
        href: "/tours",
    },
    Feature {
        title: "Interactive Map",
        description: "Discover monasteries and plan your spiritual journey",
        href: "/map",
    },
    Feature {
        title: "Digital Archive",
        description: "Explore ancient manuscripts, thangkas, and cultural artifacts",
        href: "/archive",
    },
    Feature {
        title: "Cultural Calendar",
        description: "Stay updated with festivals and spiritual events",
        href: "/calendar",
    },
];

pub struct Tour {
    pub name: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
}

pub static TOURS: [Tour; 3] = [
    Tour {
        name: "Rumtek Monastery",
        location: "East Sikkim",
        description: "The largest monastery in Sikkim, known as the 'Dharmachakra Centre'",
        duration: "15 mins",
        highlights: &["Golden Stupa", "Prayer Hall", "Tibetan Art"],
    },
    Tour {
        name: "Pemayangtse Monastery",
        location: "West Sikkim",
        description: "One of the oldest monasteries, meaning 'Perfect Sublime Lotus'",
        duration: "12 mins",
        highlights: &["Ancient Murals", "Wooden Sculptures", "Mountain Views"],
    },
    Tour {
        name: "Tashiding Monastery",
        location: "West Sikkim",
        description: "Sacred monastery on a conical hilltop with panoramic valley views",
        duration: "10 mins",
        highlights: &["Sacred Chorten", "Valley Views", "Ancient Texts"],
    },
];

/// Audio guide languages (code, display name)
pub static TOUR_LANGUAGES: [(&str, &str); 4] = [
    ("english", "English"),
    ("hindi", "हिन्दी"),
    ("nepali", "नेपाली"),
    ("tibetan", "བོད་སྐད།"),
];

pub struct Visitable {
    pub name: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    pub timings: &'static str,
    pub nearby: &'static [&'static str],
}

pub static MAP_ENTRIES: [Visitable; 3] = [
    Visitable {
        name: "Rumtek Monastery",
        description: "The largest monastery in Sikkim, seat of the Karmapa",
        phone: "+91-3592-252023",
        timings: "6:00 AM - 6:00 PM",
        nearby: &["Tibetan Institute", "Rumtek Village", "Martam Village"],
    },
    Visitable {
        name: "Pemayangtse Monastery",
        description: "One of the oldest monasteries, perfect sublime lotus",
        phone: "+91-3595-250263",
        timings: "7:00 AM - 5:00 PM",
        nearby: &["Pelling", "Skywalk", "Khecheopalri Lake"],
    },
    Visitable {
        name: "Tashiding Monastery",
        description: "Sacred monastery on a conical hilltop",
        phone: "+91-3595-250158",
        timings: "6:30 AM - 5:30 PM",
        nearby: &["Yuksom", "Khecheopalri Lake", "Tashiding Village"],
    },
];

pub struct Artifact {
    pub title: &'static str,
    pub monastery: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static ARTIFACTS: [Artifact; 4] = [
    Artifact {
        title: "Ancient Buddhist Manuscript",
        monastery: "Rumtek Monastery",
        period: "14th Century",
        description: "Handwritten Buddhist scripture in ancient Tibetan script from the 14th century",
    },
    Artifact {
        title: "Mahakala Thangka Painting",
        monastery: "Pemayangtse Monastery",
        period: "18th Century",
        description: "Traditional thangka depicting Mahakala, the fierce protector deity",
    },
    Artifact {
        title: "Wooden Buddha Sculpture",
        monastery: "Tashiding Monastery",
        period: "16th Century",
        description: "Intricately carved wooden Buddha in meditation pose",
    },
    Artifact {
        title: "Prayer Wheel Collection",
        monastery: "Rumtek Monastery",
        period: "17th Century",
        description: "Set of traditional prayer wheels with mantras inscribed",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_label() {
        assert_eq!(nav_label("/tours"), "360° Tours");
        assert_eq!(nav_label("/booking"), "Book Your Visit");
        assert_eq!(nav_label("/nowhere"), "Monastery360");
    }

    #[test]
    fn test_features_link_to_navigation() {
        for feature in &FEATURES {
            assert!(NAVIGATION.iter().any(|l| l.href == feature.href), "{}", feature.href);
        }
    }
}

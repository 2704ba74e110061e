//! Festival events shown on the cultural calendar.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Major,
    Religious,
    Cultural,
}

impl EventCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Religious => "religious",
            Self::Cultural => "cultural",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Major => "Major Festivals",
            Self::Religious => "Religious Events",
            Self::Cultural => "Cultural Events",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CulturalEvent {
    pub id: u32,
    pub title: &'static str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: EventCategory,
    pub monastery: &'static str,
    pub description: &'static str,
    pub significance: &'static str,
    pub activities: &'static [&'static str],
    pub timing: &'static str,
    pub participants: &'static str,
}

struct EventEntry {
    id: u32,
    title: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    category: EventCategory,
    monastery: &'static str,
    description: &'static str,
    significance: &'static str,
    activities: &'static [&'static str],
    timing: &'static str,
    participants: &'static str,
}

// Losar ends on 1 March: the festival spans three days from 27 February 2025
static EVENTS: [EventEntry; 5] = [
    EventEntry {
        id: 1,
        title: "Losar Festival",
        start: (2025, 2, 27),
        end: (2025, 3, 1),
        category: EventCategory::Major,
        monastery: "All Monasteries",
        description: "Tibetan New Year celebration with traditional ceremonies, prayers, and cultural performances",
        significance: "Most important festival marking the beginning of the Tibetan lunar year",
        activities: &["Traditional Dance", "Prayer Ceremonies", "Butter Lamp Lighting", "Festive Meals"],
        timing: "3 Days",
        participants: "Public Welcome",
    },
    EventEntry {
        id: 2,
        title: "Saga Dawa Festival",
        start: (2025, 5, 15),
        end: (2025, 5, 15),
        category: EventCategory::Religious,
        monastery: "Tashiding Monastery",
        description: "Celebration of Buddha's birth, enlightenment, and parinirvana",
        significance: "One of the holiest Buddhist festivals",
        activities: &["Circumambulation", "Prayer Flags", "Meditation", "Offerings"],
        timing: "Full Day",
        participants: "Devotees & Visitors",
    },
    EventEntry {
        id: 3,
        title: "Pang Lhabsol",
        start: (2025, 8, 20),
        end: (2025, 8, 20),
        category: EventCategory::Cultural,
        monastery: "Rumtek Monastery",
        description: "Festival dedicated to Mount Khangchendzonga, the guardian deity of Sikkim",
        significance: "Unique to Sikkim, celebrating the state's guardian deity",
        activities: &["Masked Dances", "Traditional Music", "Mountain Worship", "Folk Performances"],
        timing: "Half Day",
        participants: "Public Event",
    },
    EventEntry {
        id: 4,
        title: "Drupka Teshi",
        start: (2025, 7, 8),
        end: (2025, 7, 8),
        category: EventCategory::Religious,
        monastery: "Pemayangtse Monastery",
        description: "Celebration of Buddha's first teaching at Deer Park in Sarnath",
        significance: "Commemorates the turning of the wheel of dharma",
        activities: &["Dharma Teaching", "Group Meditation", "Prayer Services", "Blessing Ceremonies"],
        timing: "Morning to Evening",
        participants: "Buddhist Community",
    },
    EventEntry {
        id: 5,
        title: "Dussehra Festival",
        start: (2025, 10, 10),
        end: (2025, 10, 10),
        category: EventCategory::Cultural,
        monastery: "Multiple Locations",
        description: "Hindu festival celebrating the victory of good over evil",
        significance: "Cultural harmony between Buddhist and Hindu traditions",
        activities: &["Cultural Programs", "Traditional Dance", "Community Feast", "Religious Prayers"],
        timing: "Evening Celebration",
        participants: "Multi-faith Community",
    },
];

fn midnight((year, month, day): (i32, u32, u32)) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

impl EventEntry {
    fn build(&self) -> Option<CulturalEvent> {
        Some(CulturalEvent {
            id: self.id,
            title: self.title,
            start: midnight(self.start)?,
            end: midnight(self.end)?,
            category: self.category,
            monastery: self.monastery,
            description: self.description,
            significance: self.significance,
            activities: self.activities,
            timing: self.timing,
            participants: self.participants,
        })
    }
}

/// All events, in calendar order
pub fn all_events() -> Vec<CulturalEvent> {
    let mut events: Vec<CulturalEvent> = EVENTS.iter().filter_map(EventEntry::build).collect();
    events.sort_by_key(|e| e.start);
    events
}

/// Events in a category; `None` or `"all"` returns everything and an unknown
/// category matches nothing.
pub fn events_in(category: Option<&str>) -> Vec<CulturalEvent> {
    let events = all_events();
    match category {
        None | Some("all") => events,
        Some(wanted) => events
            .into_iter()
            .filter(|e| e.category.as_str() == wanted)
            .collect(),
    }
}

pub fn find_event(id: u32) -> Option<CulturalEvent> {
    EVENTS.iter().find(|e| e.id == id).and_then(EventEntry::build)
}

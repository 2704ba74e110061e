//! HTML page route handlers

use askama::Template;
use axum::{http::Uri, response::Html, routing::get, Router};

use crate::calendar::{self, CulturalEvent};
use crate::catalog::{self, AddOnService, GroupSizeBracket, Package};
use crate::error::{AppError, Result};
use crate::AppState;

use super::content::{
    nav_label, Artifact, Feature, NavLink, Tour, Visitable, ARTIFACTS, FEATURES, MAP_ENTRIES,
    NAVIGATION, TOURS, TOUR_LANGUAGES,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/tours", get(tours))
        .route("/map", get(map))
        .route("/archive", get(archive))
        .route("/calendar", get(calendar_page))
        .route("/booking", get(booking))
}

#[derive(Template)]
#[template(path = "site/home.html")]
struct HomeTemplate {
    title: &'static str,
    active: &'static str,
    nav: &'static [NavLink],
    features: &'static [Feature],
}

#[derive(Template)]
#[template(path = "site/tours.html")]
struct ToursTemplate {
    title: &'static str,
    active: &'static str,
    nav: &'static [NavLink],
    tours: &'static [Tour],
    languages: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "site/map.html")]
struct MapTemplate {
    title: &'static str,
    active: &'static str,
    nav: &'static [NavLink],
    monasteries: &'static [Visitable],
}

#[derive(Template)]
#[template(path = "site/archive.html")]
struct ArchiveTemplate {
    title: &'static str,
    active: &'static str,
    nav: &'static [NavLink],
    artifacts: &'static [Artifact],
}

/// Calendar row with its date preformatted
struct EventRow {
    id: u32,
    title: &'static str,
    date: String,
    category: &'static str,
    monastery: &'static str,
    description: &'static str,
    timing: &'static str,
}

impl From<CulturalEvent> for EventRow {
    fn from(event: CulturalEvent) -> Self {
        let date = if event.start.date() == event.end.date() {
            event.start.format("%B %-d, %Y").to_string()
        } else {
            format!(
                "{} - {}",
                event.start.format("%B %-d"),
                event.end.format("%B %-d, %Y")
            )
        };
        Self {
            id: event.id,
            title: event.title,
            date,
            category: event.category.label(),
            monastery: event.monastery,
            description: event.description,
            timing: event.timing,
        }
    }
}

#[derive(Template)]
#[template(path = "site/calendar.html")]
struct CalendarTemplate {
    title: &'static str,
    active: &'static str,
    nav: &'static [NavLink],
    events: Vec<EventRow>,
}

/// Price list row
struct PriceRow {
    name: &'static str,
    detail: &'static str,
    price: String,
}

#[derive(Template)]
#[template(path = "site/booking.html")]
struct BookingTemplate {
    title: &'static str,
    active: &'static str,
    nav: &'static [NavLink],
    packages: Vec<PriceRow>,
    services: Vec<PriceRow>,
    group_sizes: Vec<PriceRow>,
}

fn money(amount: i64, currency: &str) -> String {
    format!("{} {}", currency, amount)
}

fn package_row(package: &Package, currency: &str) -> PriceRow {
    PriceRow {
        name: package.name,
        detail: package.location,
        price: money(package.price, currency),
    }
}

fn service_row(service: &AddOnService, currency: &str) -> PriceRow {
    PriceRow {
        name: service.name,
        detail: service.description,
        price: money(service.price, currency),
    }
}

fn group_size_row(bracket: &GroupSizeBracket) -> PriceRow {
    PriceRow {
        name: bracket.label,
        detail: "",
        price: if bracket.discount_percent == 0 {
            "No discount".to_string()
        } else {
            format!("{}% off", bracket.discount_percent)
        },
    }
}

pub async fn home() -> Result<Html<String>> {
    let template = HomeTemplate {
        title: "Monastery360",
        active: "/",
        nav: &NAVIGATION,
        features: &FEATURES,
    };
    Ok(Html(template.render()?))
}

pub async fn tours() -> Result<Html<String>> {
    let template = ToursTemplate {
        title: "360° Virtual Tours",
        active: "/tours",
        nav: &NAVIGATION,
        tours: &TOURS,
        languages: TOUR_LANGUAGES.iter().map(|(_, name)| *name).collect(),
    };
    Ok(Html(template.render()?))
}

pub async fn map() -> Result<Html<String>> {
    let template = MapTemplate {
        title: nav_label("/map"),
        active: "/map",
        nav: &NAVIGATION,
        monasteries: &MAP_ENTRIES,
    };
    Ok(Html(template.render()?))
}

pub async fn archive() -> Result<Html<String>> {
    let template = ArchiveTemplate {
        title: nav_label("/archive"),
        active: "/archive",
        nav: &NAVIGATION,
        artifacts: &ARTIFACTS,
    };
    Ok(Html(template.render()?))
}

pub async fn calendar_page() -> Result<Html<String>> {
    let template = CalendarTemplate {
        title: nav_label("/calendar"),
        active: "/calendar",
        nav: &NAVIGATION,
        events: calendar::all_events().into_iter().map(EventRow::from).collect(),
    };
    Ok(Html(template.render()?))
}

pub async fn booking() -> Result<Html<String>> {
    let currency = catalog::DEFAULT_CURRENCY;
    let template = BookingTemplate {
        title: nav_label("/booking"),
        active: "/booking",
        nav: &NAVIGATION,
        packages: catalog::PACKAGES.iter().map(|p| package_row(p, currency)).collect(),
        services: catalog::SERVICES.iter().map(|s| service_row(s, currency)).collect(),
        group_sizes: catalog::GROUP_SIZES.iter().map(group_size_row).collect(),
    };
    Ok(Html(template.render()?))
}

/// Unknown paths render the HTML 404 page
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No page for {}", uri.path());
    AppError::NotFound
}

//! Outbound links and share text for calendar events.

use url::form_urlencoded;

use super::events::CulturalEvent;

const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
const GOOGLE_DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// "Add to Google Calendar" link with the event prefilled.
///
/// Times are floating (no zone suffix), so Google reads them in the viewer's
/// own time zone.
pub fn google_calendar_url(event: &CulturalEvent) -> String {
    let dates = format!(
        "{}/{}",
        event.start.format(GOOGLE_DATE_FORMAT),
        event.end.format(GOOGLE_DATE_FORMAT)
    );
    let details = format!(
        "{}\n\nLocation: {}\n\nSignificance: {}",
        event.description, event.monastery, event.significance
    );

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", event.title)
        .append_pair("dates", &dates)
        .append_pair("details", &details)
        .append_pair("location", event.monastery)
        .finish();

    format!("{}?{}", GOOGLE_CALENDAR_URL, query)
}

/// Plain-text invitation for sharing or copying to the clipboard
pub fn share_text(event: &CulturalEvent) -> String {
    format!(
        "{} - {}\n{}\n\nDate: {}\nTime: {}",
        event.title,
        event.monastery,
        event.description,
        event.start.format("%A, %B %d, %Y"),
        event.timing
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::events::find_event;
    use url::Url;

    #[test]
    fn test_google_calendar_url_fields() {
        let event = find_event(2).unwrap();
        let url = Url::parse(&google_calendar_url(&event)).unwrap();

        assert_eq!(url.host_str(), Some("calendar.google.com"));
        assert_eq!(url.path(), "/calendar/render");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("action"), Some("TEMPLATE"));
        assert_eq!(get("text"), Some("Saga Dawa Festival"));
        assert_eq!(get("dates"), Some("20250515T000000/20250515T000000"));
        assert_eq!(get("location"), Some("Tashiding Monastery"));
        assert!(get("details")
            .unwrap()
            .ends_with("Location: Tashiding Monastery\n\nSignificance: One of the holiest Buddhist festivals"));
    }

    #[test]
    fn test_google_calendar_url_escapes_reserved_characters() {
        let event = find_event(2).unwrap();
        let raw = google_calendar_url(&event);
        assert!(!raw.contains(' '));
        assert!(!raw.contains('\n'));
        assert!(raw.contains("Buddha%27s"));
    }

    #[test]
    fn test_multi_day_dates() {
        let event = find_event(1).unwrap();
        let url = google_calendar_url(&event);
        assert!(url.contains("dates=20250227T000000%2F20250301T000000"));
    }

    #[test]
    fn test_share_text() {
        let event = find_event(3).unwrap();
        assert_eq!(
            share_text(&event),
            "Pang Lhabsol - Rumtek Monastery\n\
             Festival dedicated to Mount Khangchendzonga, the guardian deity of Sikkim\n\n\
             Date: Wednesday, August 20, 2025\n\
             Time: Half Day"
        );
    }
}

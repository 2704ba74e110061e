//! Card input normalization.
//!
//! These mirror the input masks on the payment form so a card typed with
//! stray spaces or punctuation is stored the way the form displays it.

use serde::Deserialize;

use crate::error::ApiError;

const CARD_GROUP: usize = 4;
const CARD_MAX_DIGITS: usize = 16;
const CVV_DIGITS: usize = 3;

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Group a card number in fours: `"4242424242424242"` -> `"4242 4242 4242 4242"`.
///
/// Digits past the sixteenth are dropped. Fewer than four digits are
/// returned ungrouped.
pub fn format_card_number(value: &str) -> String {
    let v = digits(value);
    if v.len() < CARD_GROUP {
        return v;
    }

    let kept: Vec<char> = v.chars().take(CARD_MAX_DIGITS).collect();
    kept.chunks(CARD_GROUP)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"1226"` -> `"12/26"`. Two digits give `"12/"`, one digit is left as is.
pub fn format_expiry_date(value: &str) -> String {
    let v = digits(value);
    if v.len() < 2 {
        return v;
    }
    let end = v.len().min(4);
    format!("{}/{}", &v[..2], &v[2..end])
}

pub fn sanitize_cvv(value: &str) -> String {
    digits(value).chars().take(CVV_DIGITS).collect()
}

/// Card form as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardDetails {
    #[serde(default)]
    pub cardholder_name: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub cvv: String,
}

impl CardDetails {
    /// Apply the input masks to every field
    pub fn normalized(&self) -> Self {
        Self {
            cardholder_name: self.cardholder_name.clone(),
            card_number: format_card_number(&self.card_number),
            expiry_date: format_expiry_date(&self.expiry_date),
            cvv: sanitize_cvv(&self.cvv),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("cardholder_name", &self.cardholder_name),
            ("card_number", &self.card_number),
            ("expiry_date", &self.expiry_date),
            ("cvv", &self.cvv),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn ensure_complete(&self) -> Result<(), ApiError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::IncompleteCard { missing })
        }
    }

    /// Last four digits, for display on the session
    pub fn last4(&self) -> String {
        let d = digits(&self.card_number);
        d[d.len().saturating_sub(4)..].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-4242 4242x4242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("424242"), "4242 42");
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
    }

    #[test]
    fn test_format_card_number_short_input() {
        assert_eq!(format_card_number("42"), "42");
        assert_eq!(format_card_number("4 2 "), "42");
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("abcd"), "");
    }

    #[test]
    fn test_format_expiry_date() {
        assert_eq!(format_expiry_date("1226"), "12/26");
        assert_eq!(format_expiry_date("12/26"), "12/26");
        assert_eq!(format_expiry_date("122"), "12/2");
        assert_eq!(format_expiry_date("12"), "12/");
        assert_eq!(format_expiry_date("1"), "1");
        assert_eq!(format_expiry_date("122634"), "12/26");
    }

    #[test]
    fn test_sanitize_cvv() {
        assert_eq!(sanitize_cvv("123"), "123");
        assert_eq!(sanitize_cvv("1a2b3c4"), "123");
        assert_eq!(sanitize_cvv("x"), "");
    }

    #[test]
    fn test_normalized_card_is_complete() {
        let card = CardDetails {
            cardholder_name: "Karma Dorje".to_string(),
            card_number: "4242424242424242".to_string(),
            expiry_date: "1226".to_string(),
            cvv: "123".to_string(),
        }
        .normalized();

        assert_eq!(card.card_number, "4242 4242 4242 4242");
        assert_eq!(card.expiry_date, "12/26");
        assert!(card.ensure_complete().is_ok());
        assert_eq!(card.last4(), "4242");
    }

    #[test]
    fn test_garbage_cvv_leaves_card_incomplete() {
        let card = CardDetails {
            cardholder_name: "Karma Dorje".to_string(),
            card_number: "4242424242424242".to_string(),
            expiry_date: "12/26".to_string(),
            cvv: "abc".to_string(),
        }
        .normalized();

        match card.ensure_complete() {
            Err(ApiError::IncompleteCard { missing }) => assert_eq!(missing, vec!["cvv"]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_card_missing_everything() {
        assert_eq!(
            CardDetails::default().missing_fields(),
            vec!["cardholder_name", "card_number", "expiry_date", "cvv"]
        );
    }
}

// Regex patterns for contact and money fields
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("valid email regex"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s\-]{7,}").expect("valid phone regex"));
// Bare integers match too, the first number-like token wins
static MONEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?\d+(?:\.\d{2})?").expect("valid money regex"));

pub fn first_email(text: &str) -> Option<&str> {
    EMAIL.find(text).map(|m| m.as_str())
}

pub fn first_phone(text: &str) -> Option<&str> {
    PHONE.find(text).map(|m| m.as_str())
}

pub fn first_money(text: &str) -> Option<&str> {
    MONEY.find(text).map(|m| m.as_str())
}

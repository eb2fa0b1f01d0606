//! Record-level fixture helpers: names, contact details, codes, dates.
//!
//! Small fixed pools stand in for a full fake-data library; the samplers that
//! matter (coordinates, catalog subsets, schedules) live in their own modules.

use crate::rng::shuffled_prefix;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

pub const FIRST_NAMES: &[&str] = &[
    "aarav", "aditi", "ananya", "arjun", "deepa", "farhan", "gaurav", "isha", "kavya", "meera",
    "nikhil", "priya", "rahul", "rohan", "sanjay", "shreya", "tanvi", "vikram", "yash", "zoya",
];

pub const LAST_NAMES: &[&str] = &[
    "agarwal", "banerjee", "chopra", "desai", "fernandes", "gupta", "iyer", "joshi", "kapoor",
    "khan", "menon", "nair", "patel", "rao", "reddy", "shah", "singh", "verma",
];

const STREETS: &[&str] = &[
    "MG", "Station", "Temple", "Lake", "Church", "Market", "Park", "Hill", "College", "Gandhi",
];

const STREET_SUFFIXES: &[&str] = &["Road", "Street", "Lane", "Nagar", "Marg", "Cross"];

const LAB_SUFFIXES: &[&str] = &["Diagnostics", "Labs", "Pathology", "Health", "Clinic", "Group"];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

pub const COLLECTION_TYPES: &[&str] = &["Home Collection", "Lab Visit", "Home Clinic"];

const IMAGE_URL_BASE: &str = "https://placehold.co/100x100/F7E8F6/333333?text=";

/// Phone numbers are 10 digits with a leading 6–9.
const PHONE_MIN: u64 = 6_000_000_000;
const PHONE_MAX: u64 = 9_999_999_999;

/// First character uppercased, rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    rng.gen_range(PHONE_MIN..=PHONE_MAX).to_string()
}

/// Placeholder image URL carrying up to two initials of `lab_name`.
pub fn lab_image_url(lab_name: &str) -> String {
    let letters_only: String = lab_name
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();
    let initials: String = letters_only
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .take(2)
        .collect();
    format!("{IMAGE_URL_BASE}{initials}")
}

/// One to three collection types, in random order.
pub fn collection_types<R: Rng>(rng: &mut R) -> Vec<&'static str> {
    shuffled_prefix(rng, COLLECTION_TYPES, 1, COLLECTION_TYPES.len()).unwrap_or_default()
}

/// Random `[A-Za-z0-9]` string.
pub fn alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Capitalized `(first, last)` name.
pub fn person_name<R: Rng>(rng: &mut R) -> (String, String) {
    (
        capitalize(pick(rng, FIRST_NAMES)),
        capitalize(pick(rng, LAST_NAMES)),
    )
}

pub fn email<R: Rng>(rng: &mut R, first: &str, last: &str) -> String {
    let n: u32 = rng.gen_range(1..=99);
    format!(
        "{}.{}{n}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        pick(rng, EMAIL_DOMAINS)
    )
}

pub fn street_address<R: Rng>(rng: &mut R) -> String {
    let number: u32 = rng.gen_range(1..=999);
    format!(
        "{number} {} {}",
        pick(rng, STREETS),
        pick(rng, STREET_SUFFIXES)
    )
}

/// Company-style lab name, e.g. `Iyer Diagnostics` or `Shah & Rao`.
pub fn lab_name<R: Rng>(rng: &mut R) -> String {
    let a = capitalize(pick(rng, LAST_NAMES));
    if rng.gen_bool(0.3) {
        let b = capitalize(pick(rng, LAST_NAMES));
        format!("{a} & {b}")
    } else {
        format!("{a} {}", pick(rng, LAB_SUFFIXES))
    }
}

pub fn url<R: Rng>(rng: &mut R) -> String {
    format!(
        "https://{}.{}/{}",
        pick(rng, LAST_NAMES),
        pick(rng, EMAIL_DOMAINS),
        alphanumeric(rng, 8).to_lowercase()
    )
}

pub fn gender<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, GENDERS)
}

/// A moment within the next `days` days (at least one second ahead).
pub fn soon<R: Rng>(rng: &mut R, now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    let horizon = i64::from(days.max(1)) * 86_400;
    now + Duration::seconds(rng.gen_range(1..=horizon))
}

/// Birth date for an adult aged 18 to 80 on `today`.
pub fn birthdate<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let days_back = rng.gen_range(18 * 365 + 5..=80 * 365);
    today - Duration::days(days_back)
}

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

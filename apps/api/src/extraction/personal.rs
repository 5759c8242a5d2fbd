//! Contact and headline extraction.
//!
//! Every field is independent and first-match-wins over the whole text.
//! Labels such as "Phone:" are optional and only consumed, never preferred.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::sections::is_heading;
use crate::models::portfolio::PersonalInfo;

pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_TITLE: &str = "Professional";

const TITLE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "designer",
    "manager",
    "analyst",
    "consultant",
];

static RE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(?i:\bname)[ \t]*:[ \t]*)?\b([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})\b").unwrap()
});

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Ten or more characters of digits, spaces, dashes and parentheses.
static RE_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(?i:\b(?:phone|tel|mobile))[ \t]*:?[ \t]*)?(\+?[\d(][\d \t()-]{8,}[\d)])").unwrap()
});

/// "City, ST" or "City ST"; multi-word cities allowed.
static RE_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?i:\b(?:location|address))[ \t]*:[ \t]*)?\b((?:[A-Z][a-z]+[ \t]+)*[A-Z][a-z]+,?[ \t]*[A-Z]{2,})\b",
    )
    .unwrap()
});

static RE_LINKEDIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/\S+").unwrap());
static RE_GITHUB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/\S+").unwrap());
pub(crate) static RE_URL_TRAILER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;)]+$").unwrap());

static RE_SUMMARY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:professional[ \t]+)?(?:summary|objective|profile)[ \t]*(?::|$)")
        .unwrap()
});

pub fn extract_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        name: extract_name(text),
        title: extract_title(text),
        email: RE_EMAIL
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        phone: extract_phone(text),
        location: extract_location(text),
        website: None,
        linkedin: profile_url(&RE_LINKEDIN, text),
        github: github_url(text),
        summary: extract_summary(text),
        avatar: None,
    }
}

fn extract_name(text: &str) -> String {
    first_capture(&RE_NAME, text)
        .or_else(|| first_non_blank_line(text).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

fn first_non_blank_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}

/// First line mentioning a role keyword, with its first letter capitalized.
fn extract_title(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| {
            let lower = line.to_lowercase();
            TITLE_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(capitalize_first)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn extract_phone(text: &str) -> String {
    first_capture(&RE_PHONE, text).unwrap_or_default()
}

fn extract_location(text: &str) -> String {
    first_capture(&RE_LOCATION, text).unwrap_or_default()
}

/// Group 1 of the leftmost match, trimmed.
fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].trim().to_string())
}

fn profile_url(re: &Regex, text: &str) -> Option<String> {
    re.find(text).and_then(|m| {
        let path = RE_URL_TRAILER.replace(m.as_str(), "");
        (!path.is_empty()).then(|| format!("https://{path}"))
    })
}

pub(crate) fn github_url(text: &str) -> Option<String> {
    profile_url(&RE_GITHUB, text)
}

/// Text under a Summary/Objective/Profile heading, up to the first blank
/// line or section heading, joined into one line.
fn extract_summary(text: &str) -> String {
    let Some(heading) = RE_SUMMARY_HEADING.find(text) else {
        return String::new();
    };

    let mut parts: Vec<&str> = Vec::new();
    for (i, line) in text[heading.end()..].lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if parts.is_empty() {
                continue;
            }
            break;
        }
        // The heading line's own remainder is content even if it looks like a label.
        if i > 0 && (is_heading(line) || RE_SUMMARY_HEADING.is_match(line)) {
            break;
        }
        parts.push(line);
    }

    parts.join(" ")
}

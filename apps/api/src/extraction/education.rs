use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::sections::{
    clean_label, isolate, non_blank, paragraph_start, trimmed_lines, Section,
};
use crate::models::portfolio::Education;

/// Capitalized line naming an institution; the keyword may be the first word.
static RE_INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Z].*)?\b(?:University|College|Institute|School)\b").unwrap()
});

static RE_DEGREE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:bachelor|master|ph\.?\s?d|associate)").unwrap());

static RE_FIELD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+in[ \t]+").unwrap());

static RE_YEAR_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\b(\d{4})\b.*?\b(\d{4})\b").unwrap());

pub fn extract_education(text: &str) -> Vec<Education> {
    let Some(body) = isolate(text, Section::Education) else {
        return Vec::new();
    };

    split_schools(trimmed_lines(body))
        .iter()
        .filter_map(|block| parse_school(block))
        .enumerate()
        .map(|(index, mut school)| {
            school.id = format!("edu-{index}");
            school
        })
        .collect()
}

/// Splits on institution lines. A degree paragraph sitting directly above an
/// institution line ("Bachelor of Science" then "State University") moves
/// into that institution's block, after the institution line.
fn split_schools(lines: Vec<String>) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        if !RE_INSTITUTION.is_match(&line) {
            current.push(line);
            continue;
        }

        let start = paragraph_start(&current);
        let opens_with_institution = current
            .first()
            .is_some_and(|first| RE_INSTITUTION.is_match(first));
        let owns_trailing_paragraph = start == 0 && opens_with_institution;

        let carried: Vec<String> = if !owns_trailing_paragraph
            && current[start..].iter().any(|l| RE_DEGREE.is_match(l))
        {
            current.drain(start..).collect()
        } else {
            Vec::new()
        };

        if !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
        current.extend(carried);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_school(block: &[String]) -> Option<Education> {
    let lines = non_blank(block);
    if lines.len() < 2 {
        return None;
    }

    let (degree, field) = lines.iter().find_map(|l| parse_degree(l))?;
    let joined = lines.join("\n");
    let years = RE_YEAR_PAIR.captures(&joined)?;

    Some(Education {
        id: String::new(),
        institution: lines[0].to_string(),
        degree,
        field,
        start_date: years[1].to_string(),
        end_date: years[2].to_string(),
        gpa: None,
        achievements: None,
    })
}

/// "Bachelor of Science in Computer Science, 2020" -> ("Bachelor of Science", "Computer Science")
fn parse_degree(line: &str) -> Option<(String, String)> {
    let found = RE_DEGREE.find(line)?;
    let rest = &line[found.start()..];

    let (degree, field) = match RE_FIELD_SEPARATOR.find(rest) {
        Some(sep) => (&rest[..sep.start()], &rest[sep.end()..]),
        None => (rest, ""),
    };

    Some((clean_label(first_clause(degree)), clean_label(first_clause(field))))
}

fn first_clause(s: &str) -> &str {
    let cut = s
        .find(&[',', '(', '|', ';', '–', '—'][..])
        .into_iter()
        .chain(s.find(" - "))
        .min()
        .unwrap_or(s.len());
    &s[..cut]
}

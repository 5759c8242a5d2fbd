//! Work-history extraction.
//!
//! Jobs are delimited by capitalized lines that mention a month. Each kept
//! block must open with a "<Month> <Year> ... <Month> <Year>|Present" range;
//! blocks without one are dropped without affecting their neighbours.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::extraction::sections::{
    clean_label, is_bullet, isolate, non_blank, paragraph_start, split_blocks, trimmed_lines,
    Section,
};
use crate::extraction::technologies::detect_technologies;
use crate::models::portfolio::Experience;

const MONTH: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// Groups: 1 start month, 2 start year, 3 end month, 4 end year, 5 open-ended marker.
static RE_DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b{MONTH}\.?,?[ \t]*(\d{{4}})\b.*?(?:\b{MONTH}\.?,?[ \t]*(\d{{4}})\b|\b(present|current)\b)"
    ))
    .unwrap()
});

static RE_JOB_DELIMITER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Z].*)?\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\b",
    )
    .unwrap()
});

const MIN_DESCRIPTION_CHARS: usize = 10;

pub fn extract_experience(text: &str) -> Vec<Experience> {
    let Some(body) = isolate(text, Section::Experience) else {
        return Vec::new();
    };

    let lines = fold_stacked_headers(trimmed_lines(body));
    let blocks = split_blocks(lines, |line| RE_JOB_DELIMITER.is_match(line));

    blocks
        .iter()
        .filter_map(|block| parse_job(block))
        .enumerate()
        .map(|(index, mut job)| {
            job.id = format!("exp-{index}");
            job
        })
        .collect()
}

fn parse_job(block: &[String]) -> Option<Experience> {
    let lines = non_blank(block);
    if lines.len() < 2 {
        return None;
    }

    let first = lines[0];
    let caps = RE_DATE_RANGE.captures(first)?;
    let (start_date, end_date) = date_bounds(&caps);

    let description = lines[2..]
        .iter()
        .filter(|l| !is_bullet(l) && l.chars().count() > MIN_DESCRIPTION_CHARS)
        .map(|l| l.to_string())
        .collect();

    Some(Experience {
        id: String::new(),
        company: lines[1].to_string(),
        position: without_date_range(first, &caps),
        start_date,
        end_date,
        location: String::new(),
        description,
        technologies: detect_technologies(&block.join("\n")),
    })
}

fn date_bounds(caps: &Captures<'_>) -> (String, String) {
    let start = format!("{} {}", month_abbrev(&caps[1]), &caps[2]);
    let end = match (caps.get(3), caps.get(4)) {
        (Some(month), Some(year)) => format!("{} {}", month_abbrev(month.as_str()), year.as_str()),
        _ => "Present".to_string(),
    };
    (start, end)
}

fn without_date_range(line: &str, caps: &Captures<'_>) -> String {
    let Some(range) = caps.get(0) else {
        return clean_label(line);
    };
    let remainder = format!("{} {}", &line[..range.start()], &line[range.end()..]);
    clean_label(&remainder)
}

/// "september" / "SEPT" / "Sep." -> "Sep"
fn month_abbrev(month: &str) -> String {
    let mut chars = month.chars().take(3);
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// True when the line carries a date range and nothing else.
fn is_date_only(line: &str) -> bool {
    RE_DATE_RANGE
        .captures(line)
        .is_some_and(|caps| without_date_range(line, &caps).is_empty())
}

/// Rewrites the "title / company / date" layout into "title date / company"
/// so the date line does not split a job away from its own header.
fn fold_stacked_headers(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines {
        if is_date_only(&line) {
            let start = paragraph_start(&out);
            let header = &out[start..];
            let foldable = (1..=2).contains(&header.len())
                && header
                    .iter()
                    .all(|l| !is_bullet(l) && !RE_DATE_RANGE.is_match(l));

            if foldable {
                let mut header: Vec<String> = out.drain(start..).collect();
                let title = header.remove(0);
                out.push(format!("{title} {line}"));
                out.extend(header);
                continue;
            }
        }
        out.push(line);
    }

    out
}

//! Section isolation and block splitting shared by the section extractors.
//!
//! A heading is a line that starts with a section label (any case),
//! optionally followed by a colon and inline content. A section body runs
//! until the next heading of a *different* section or the end of the text.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
    ];

    fn heading(self) -> &'static Regex {
        match self {
            Section::Experience => &RE_EXPERIENCE_HEADING,
            Section::Education => &RE_EDUCATION_HEADING,
            Section::Skills => &RE_SKILLS_HEADING,
            Section::Projects => &RE_PROJECTS_HEADING,
        }
    }
}

static RE_EXPERIENCE_HEADING: Lazy<Regex> =
    Lazy::new(|| heading_regex(r"(?:(?:work|professional)[ \t]+)?experience"));
static RE_EDUCATION_HEADING: Lazy<Regex> = Lazy::new(|| heading_regex("education"));
static RE_SKILLS_HEADING: Lazy<Regex> =
    Lazy::new(|| heading_regex(r"(?:technical[ \t]+)?skills"));
static RE_PROJECTS_HEADING: Lazy<Regex> = Lazy::new(|| heading_regex("projects"));

fn heading_regex(label: &str) -> Regex {
    Regex::new(&format!(r"(?im)^[ \t]*{label}[ \t]*(?::|$)")).unwrap()
}

const BULLET_MARKERS: &[char] = &['•', '◦', '▪', '‣', '·', '-', '*'];

/// Returns the body of `section`, or `None` when its heading is absent.
pub fn isolate(text: &str, section: Section) -> Option<&str> {
    let heading = section.heading().find(text)?;
    let rest = &text[heading.end()..];

    let end = Section::ALL
        .iter()
        .filter(|other| **other != section)
        .filter_map(|other| other.heading().find(rest).map(|m| m.start()))
        .min()
        .unwrap_or(rest.len());

    Some(&rest[..end])
}

/// True when `line` is a heading for any known section.
pub fn is_heading(line: &str) -> bool {
    Section::ALL.iter().any(|s| s.heading().is_match(line))
}

/// Whitespace-trimmed lines of a section body. Blank lines are kept as
/// empty strings so block splitters can see paragraph breaks.
pub fn trimmed_lines(body: &str) -> Vec<String> {
    body.lines().map(|l| l.trim().to_string()).collect()
}

/// Starts a new block at every line for which `is_delimiter` holds.
pub fn split_blocks<F>(lines: Vec<String>, is_delimiter: F) -> Vec<Vec<String>>
where
    F: Fn(&str) -> bool,
{
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        if is_delimiter(&line) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

pub fn non_blank(block: &[String]) -> Vec<&str> {
    block
        .iter()
        .map(String::as_str)
        .filter(|l| !l.trim().is_empty())
        .collect()
}

/// Index just past the last blank line in `lines` (0 if there is none).
pub fn paragraph_start(lines: &[String]) -> usize {
    lines
        .iter()
        .rposition(|l| l.trim().is_empty())
        .map_or(0, |i| i + 1)
}

pub fn is_bullet(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| BULLET_MARKERS.contains(&c))
}

/// Trims whitespace and the separators that typically surround a date or
/// label on a resume line ("Engineer | Jan 2020", "Engineer (2019)").
pub fn clean_label(s: &str) -> String {
    s.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '|' | '-' | '–' | '—' | ',' | ':' | '(' | ')' | '@')
    })
    .to_string()
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::personal::{github_url, RE_URL_TRAILER};
use crate::extraction::sections::{clean_label, isolate, non_blank, split_blocks, trimmed_lines, Section};
use crate::extraction::technologies::detect_technologies;
use crate::models::portfolio::Project;

static RE_PROJECT_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z].*)?\bProject").unwrap());

static RE_PROJECT_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bprojects?\b[ \t]*:?[ \t]*").unwrap());

static RE_WEB_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bhttps?://\S+").unwrap());

/// Number of leading projects flagged for prominent display.
const FEATURED_COUNT: usize = 3;

pub fn extract_projects(text: &str) -> Vec<Project> {
    let Some(body) = isolate(text, Section::Projects) else {
        return Vec::new();
    };

    let blocks = split_blocks(trimmed_lines(body), |line| {
        RE_PROJECT_DELIMITER.is_match(line)
    });

    blocks
        .iter()
        .filter_map(|block| parse_project(block))
        .enumerate()
        .map(|(index, mut project)| {
            project.id = format!("proj-{index}");
            project.featured = index < FEATURED_COUNT;
            project
        })
        .collect()
}

fn parse_project(block: &[String]) -> Option<Project> {
    let lines = non_blank(block);
    if lines.len() < 2 {
        return None;
    }

    let block_text = block.join("\n");
    let github = github_url(&block_text);
    let live = RE_WEB_URL
        .find_iter(&block_text)
        .map(|m| RE_URL_TRAILER.replace(m.as_str(), "").into_owned())
        .find(|url| !url.to_lowercase().contains("github.com"));

    Some(Project {
        id: String::new(),
        title: clean_label(&RE_PROJECT_LABEL.replacen(lines[0], 1, "")),
        description: lines[1..].join(" "),
        technologies: detect_technologies(&block_text),
        live_url: live,
        github_url: github,
        image: None,
        featured: false,
    })
}

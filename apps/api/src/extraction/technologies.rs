/// Closed vocabulary of recognized technology names, in output order.
pub const TECHNOLOGIES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "HTML",
    "CSS",
    "SCSS",
    "Tailwind",
    "Bootstrap",
    "Material-UI",
    "Chakra UI",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Firebase",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "GitLab",
    "Jenkins",
    "CI/CD",
    "Agile",
    "Scrum",
];

/// Returns every vocabulary entry that occurs in `text` as a case-insensitive
/// substring, once each, in vocabulary order.
pub fn detect_technologies(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for &tech in TECHNOLOGIES {
        if haystack.contains(&tech.to_lowercase()) && !found.iter().any(|f| f == tech) {
            found.push(tech.to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_variants_collapse_to_one_entry() {
        let found = detect_technologies("react, React, REACT");
        assert_eq!(found.iter().filter(|t| *t == "React").count(), 1);
    }

    #[test]
    fn test_output_follows_vocabulary_order() {
        let found = detect_technologies("Docker then PostgreSQL then TypeScript");
        assert_eq!(found, vec!["TypeScript", "PostgreSQL", "Docker"]);
    }

    #[test]
    fn test_symbols_in_names_match_verbatim() {
        let found = detect_technologies("Built pipelines with ci/cd and c++ services");
        assert!(found.contains(&"C++".to_string()));
        assert!(found.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(detect_technologies("").is_empty());
        assert!(detect_technologies("spreadsheets and meetings").is_empty());
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "JavaScript" contains "Java"; both vocabulary entries appear.
        let found = detect_technologies("JavaScript");
        assert_eq!(found, vec!["JavaScript", "Java"]);
    }
}

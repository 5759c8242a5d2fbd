// Resume text -> PortfolioData.
// Five independent sub-extractors plus the shared technology matcher.
// Pure and synchronous; the HTTP layer runs it inside spawn_blocking.

pub mod education;
pub mod experience;
pub mod handlers;
pub mod pdf_text;
pub mod personal;
pub mod projects;
pub mod sample;
pub mod sections;
pub mod skills;
pub mod technologies;

use std::sync::Arc;

use tracing::debug;

use crate::models::portfolio::PortfolioData;

pub use skills::{FixedLevels, LevelPolicy, RandomLevels};

/// Heuristic resume extractor. Never fails: every miss resolves to an empty
/// string or an empty list. Cheap to share across requests.
#[derive(Clone)]
pub struct ResumeExtractor {
    levels: Arc<dyn LevelPolicy>,
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor {
    pub fn new() -> Self {
        Self::with_level_policy(Arc::new(RandomLevels))
    }

    pub fn with_level_policy(levels: Arc<dyn LevelPolicy>) -> Self {
        Self { levels }
    }

    pub fn level_policy(&self) -> &'static str {
        self.levels.name()
    }

    pub fn extract(&self, text: &str) -> PortfolioData {
        let text = normalise_line_endings(text);

        let data = PortfolioData {
            personal_info: personal::extract_personal_info(&text),
            experience: experience::extract_experience(&text),
            education: education::extract_education(&text),
            skills: skills::extract_skills(&text, self.levels.as_ref()),
            projects: projects::extract_projects(&text),
        };

        debug!(
            chars = text.len(),
            experience = data.experience.len(),
            education = data.education.len(),
            skills = data.skills.len(),
            projects = data.projects.len(),
            "Extracted portfolio from resume text"
        );

        data
    }
}

/// Entry point for callers that do not configure a level policy: one call,
/// random skill levels. The service itself goes through `AppState::extractor`
/// so `FIXED_SKILL_LEVEL` applies.
#[allow(dead_code)]
pub fn extract(text: &str) -> PortfolioData {
    ResumeExtractor::new().extract(text)
}

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::sample::SAMPLE_RESUME;
    use crate::models::portfolio::SkillCategory;

    fn deterministic() -> ResumeExtractor {
        ResumeExtractor::with_level_policy(Arc::new(FixedLevels(90)))
    }

    #[test]
    fn test_sample_resume_end_to_end() {
        let data = extract(SAMPLE_RESUME);
        let info = &data.personal_info;

        assert_eq!(info.name, "John Doe");
        assert_eq!(info.title, "Senior Full Stack Developer");
        assert_eq!(info.email, "john.doe@email.com");
        assert_eq!(info.phone, "+1 (555) 123-4567");
        assert_eq!(info.location, "San Francisco, CA");
        assert_eq!(info.linkedin.as_deref(), Some("https://linkedin.com/in/johndoe"));
        assert_eq!(info.github.as_deref(), Some("https://github.com/johndoe"));
        assert!(info.summary.starts_with("Experienced full-stack developer"));
        assert!(info.summary.ends_with("leading development teams."));

        assert_eq!(data.experience.len(), 2);
        assert_eq!(data.experience[0].position, "Senior Full Stack Developer");
        assert_eq!(data.experience[0].company, "Tech Solutions Inc.");
        assert_eq!(data.experience[0].start_date, "Jan 2022");
        assert_eq!(data.experience[0].end_date, "Present");
        assert_eq!(data.experience[1].company, "StartupXYZ");
        assert_eq!(data.experience[1].end_date, "Dec 2021");
        assert!(data.experience[0].technologies.contains(&"Docker".to_string()));
        assert!(data.experience[1].technologies.contains(&"MongoDB".to_string()));

        assert!(data
            .education
            .iter()
            .any(|e| e.institution == "University of California, Berkeley"));

        assert!(data.projects.iter().any(|p| p.featured));
        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.projects[0].title, "E-commerce Platform");
        assert_eq!(data.projects[1].title, "Task Management App");
    }

    #[test]
    fn test_sample_skills() {
        let data = deterministic().extract(SAMPLE_RESUME);
        let names: Vec<&str> = data.skills.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"JavaScript"));
        assert!(names.contains(&"Leadership"));
        assert!(names.contains(&"Problem Solving"));
        assert!(!names.contains(&"HTML"));
        for skill in &data.skills {
            assert!(skill.level <= 100);
            assert!(matches!(
                skill.category,
                SkillCategory::Technical | SkillCategory::Soft
            ));
        }
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let data = extract("");
        assert_eq!(data.personal_info.name, "John Doe");
        assert_eq!(data.personal_info.title, "Professional");
        assert_eq!(data.personal_info.email, "");
        assert_eq!(data.personal_info.summary, "");
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_repeated_runs_are_identical_with_fixed_levels() {
        let extractor = deterministic();
        assert_eq!(extractor.extract(SAMPLE_RESUME), extractor.extract(SAMPLE_RESUME));
    }

    #[test]
    fn test_repeated_runs_differ_at_most_in_levels() {
        let mut first = extract(SAMPLE_RESUME);
        let mut second = extract(SAMPLE_RESUME);
        for skill in first.skills.iter_mut().chain(second.skills.iter_mut()) {
            skill.level = 0;
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let extractor = deterministic();
        let crlf = SAMPLE_RESUME.replace('\n', "\r\n");
        assert_eq!(extractor.extract(&crlf), extractor.extract(SAMPLE_RESUME));
    }

    #[test]
    fn test_ids_unique_per_list() {
        let data = extract(SAMPLE_RESUME);
        let exp_ids: Vec<&str> = data.experience.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(exp_ids, vec!["exp-0", "exp-1"]);
        let proj_ids: Vec<&str> = data.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(proj_ids, vec!["proj-0", "proj-1"]);
        assert_eq!(data.education[0].id, "edu-0");
    }

    #[test]
    fn test_level_policy_names() {
        assert_eq!(ResumeExtractor::new().level_policy(), "random");
        assert_eq!(deterministic().level_policy(), "fixed");
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        let extractor = Arc::new(deterministic());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let extractor = Arc::clone(&extractor);
                std::thread::spawn(move || extractor.extract(SAMPLE_RESUME))
            })
            .collect();
        let results: Vec<PortfolioData> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}

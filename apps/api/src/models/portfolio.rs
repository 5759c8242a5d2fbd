use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Contact and headline data. Missing required fields are empty strings;
/// optional links are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// Month-year pair or the literal "Present".
    pub end_date: String,
    pub location: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    Tool,
}

impl SkillCategory {
    /// Half-open range a display level is drawn from.
    pub fn level_range(self) -> Range<u8> {
        match self {
            SkillCategory::Technical | SkillCategory::Tool => 70..100,
            SkillCategory::Soft | SkillCategory::Language => 80..100,
        }
    }
}

/// A detected skill. `level` drives a visual indicator only and carries no
/// information about real proficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub featured: bool,
}

/// Aggregate produced by one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_category_serializes_lowercase() {
        let json = serde_json::to_string(&SkillCategory::Technical).unwrap();
        assert_eq!(json, r#""technical""#);
        let parsed: SkillCategory = serde_json::from_str(r#""tool""#).unwrap();
        assert_eq!(parsed, SkillCategory::Tool);
    }

    #[test]
    fn test_level_ranges_stay_within_percent() {
        for category in [
            SkillCategory::Technical,
            SkillCategory::Soft,
            SkillCategory::Language,
            SkillCategory::Tool,
        ] {
            let range = category.level_range();
            assert!(range.start < range.end);
            assert!(range.end <= 100);
        }
    }

    #[test]
    fn test_portfolio_uses_camel_case_keys() {
        let value = serde_json::to_value(PortfolioData::default()).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value["personalInfo"].get("linkedin").is_none());
    }

    #[test]
    fn test_experience_dates_are_camel_case() {
        let exp = Experience {
            id: "exp-0".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "Jan 2020".to_string(),
            end_date: "Present".to_string(),
            location: String::new(),
            description: vec![],
            technologies: vec![],
        };
        let value = serde_json::to_value(&exp).unwrap();
        assert_eq!(value["startDate"], "Jan 2020");
        assert_eq!(value["endDate"], "Present");
    }

    #[test]
    fn test_project_omits_missing_urls() {
        let project = Project {
            id: "proj-0".to_string(),
            title: "Site".to_string(),
            description: String::new(),
            technologies: vec![],
            live_url: None,
            github_url: Some("https://github.com/acme/site".to_string()),
            image: None,
            featured: true,
        };
        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("liveUrl").is_none());
        assert_eq!(value["githubUrl"], "https://github.com/acme/site");
    }
}

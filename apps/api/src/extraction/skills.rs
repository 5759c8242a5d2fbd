//! Skills extraction and the display-level policy.
//!
//! Levels are cosmetic: they feed a progress-bar style indicator and say
//! nothing about real proficiency. `RandomLevels` is the default;
//! `FixedLevels` gives reproducible output.

use rand::Rng;

use crate::extraction::sections::{isolate, Section};
use crate::models::portfolio::{Skill, SkillCategory};

pub const TECHNICAL_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "HTML",
    "CSS",
    "SQL",
    "Git",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Communication",
    "Problem Solving",
    "Team Work",
    "Project Management",
];

/// Assigns the display level for a detected skill.
pub trait LevelPolicy: Send + Sync {
    fn level(&self, category: SkillCategory) -> u8;

    /// Short label reported by the health endpoint.
    fn name(&self) -> &'static str;
}

/// Uniform draw from the category's level range.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLevels;

impl LevelPolicy for RandomLevels {
    fn level(&self, category: SkillCategory) -> u8 {
        rand::thread_rng().gen_range(category.level_range())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Always the same level, clamped into the category's range.
#[derive(Debug, Clone, Copy)]
pub struct FixedLevels(pub u8);

impl LevelPolicy for FixedLevels {
    fn level(&self, category: SkillCategory) -> u8 {
        let range = category.level_range();
        self.0.clamp(range.start, range.end - 1)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

pub fn extract_skills(text: &str, levels: &dyn LevelPolicy) -> Vec<Skill> {
    let Some(body) = isolate(text, Section::Skills) else {
        return Vec::new();
    };
    let haystack = body.to_lowercase();

    let vocabularies = [
        (TECHNICAL_SKILLS, SkillCategory::Technical),
        (SOFT_SKILLS, SkillCategory::Soft),
    ];

    vocabularies
        .iter()
        .flat_map(|(names, category)| names.iter().map(move |name| (*name, *category)))
        .filter(|(name, _)| haystack.contains(&name.to_lowercase()))
        .map(|(name, category)| Skill {
            name: name.to_string(),
            level: levels.level(category),
            category,
        })
        .collect()
}

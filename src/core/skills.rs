use std::collections::BTreeSet;

/// Skill keywords recognized in free-text bios
pub const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "javascript",
    "typescript",
    "python",
    "java",
    "golang",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "elixir",
    "c++",
    "c#",
    "sql",
    // Frameworks
    "react",
    "vue",
    "angular",
    "svelte",
    "next.js",
    "node",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "rails",
    "laravel",
    ".net",
    "graphql",
    // Platforms and infrastructure
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "linux",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "kafka",
    "elasticsearch",
    // Practices
    "machine learning",
    "data science",
    "devops",
    "ci/cd",
    "microservices",
    "agile",
    "scrum",
    "tdd",
];

/// Vocabulary the skills sub-score extracts from profile bios
///
/// Entries are stored lowercased; lookup is a plain substring search so
/// "reactive" also yields "react".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();

        Self { skills }
    }

    /// Add more keywords on top of the current set
    pub fn extend<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for skill in extra {
            let skill = skill.as_ref().trim().to_lowercase();
            if !skill.is_empty() && !self.skills.contains(&skill) {
                self.skills.push(skill);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Every vocabulary entry that occurs in `text`, case-insensitively
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let haystack = text.to_lowercase();

        self.skills
            .iter()
            .filter(|skill| haystack.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_case_insensitive() {
        let vocab = SkillVocabulary::default();
        let skills = vocab.extract("Experienced in Python and Kubernetes, based in Austin");

        assert!(skills.contains("python"));
        assert!(skills.contains("kubernetes"));
        assert!(!skills.contains("docker"));
    }

    #[test]
    fn test_extract_substring_semantics() {
        let vocab = SkillVocabulary::new(["java", "react"]);
        let skills = vocab.extract("JavaScript and reactive streams");

        assert_eq!(
            skills.into_iter().collect::<Vec<_>>(),
            vec!["java".to_string(), "react".to_string()]
        );
    }

    #[test]
    fn test_extract_empty_text() {
        assert!(SkillVocabulary::default().extract("").is_empty());
    }

    #[test]
    fn test_new_normalizes_and_dedupes() {
        let vocab = SkillVocabulary::new(["Rust", " rust ", "", "Go"]);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["rust", "go"]);
    }

    #[test]
    fn test_extend() {
        let vocab = SkillVocabulary::new(["rust"]).extend(["Zig", "rust"]);
        assert_eq!(vocab.len(), 2);
        assert!(vocab.extract("I write zig").contains("zig"));
    }
}

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Job titles mapped to the keywords used to prefill a search query.
///
/// Read-only after startup. Titles are kept in alphabetical order so the
/// endpoint always returns the same shape.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    entries: BTreeMap<String, Vec<String>>,
}

impl JobCatalog {
    /// Built-in catalog used when no file is configured.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for (title, keywords) in [
            (
                "Backend Developer",
                vec!["python", "django", "api", "sql", "docker"],
            ),
            (
                "Data Scientist",
                vec!["python", "machine-learning", "statistics", "pandas", "sql"],
            ),
            (
                "DevOps Engineer",
                vec!["kubernetes", "docker", "aws", "terraform", "linux"],
            ),
            (
                "Frontend Developer",
                vec!["javascript", "react", "css", "html", "typescript"],
            ),
            (
                "Java Developer",
                vec!["java", "spring", "hibernate", "maven", "sql"],
            ),
        ] {
            entries.insert(
                title.to_string(),
                keywords.into_iter().map(String::from).collect(),
            );
        }
        Self { entries }
    }

    /// Loads a catalog from a JSON file shaped `{"Title": ["keyword", ...]}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read job catalog {}", path.display()))?;
        let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid job catalog {}", path.display()))?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

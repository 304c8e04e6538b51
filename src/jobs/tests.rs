//! Job Catalog Tests

#[cfg(test)]
mod tests {
    use crate::jobs::catalog::JobCatalog;
    use std::fs;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = JobCatalog::builtin();
        assert!(!catalog.is_empty());
        for keywords in catalog.entries().values() {
            assert!(!keywords.is_empty());
        }
    }

    #[test]
    fn test_builtin_catalog_titles_are_ordered() {
        let catalog = JobCatalog::builtin();
        let titles: Vec<&String> = catalog.entries().keys().collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(
            &path,
            r#"{"Rust Developer": ["rust", "tokio", "axum"]}"#,
        )
        .unwrap();

        let catalog = JobCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.entries().get("Rust Developer").unwrap(),
            &vec!["rust".to_string(), "tokio".to_string(), "axum".to_string()]
        );
    }

    #[test]
    fn test_catalog_from_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JobCatalog::from_file(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_catalog_from_malformed_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(JobCatalog::from_file(&path).is_err());
    }
}

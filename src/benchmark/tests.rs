//! Benchmark Module Tests
//!
//! Validates the comparison harness: one run per algorithm, identical match
//! results across runs, and correct counter aggregation.

#[cfg(test)]
mod tests {
    use crate::benchmark::harness::run_comparison;
    use crate::benchmark::types::{AlgorithmRun, ComparisonReport, TopResult};
    use crate::corpus::types::{Corpus, Document, SizeThresholds};
    use crate::search::tokenizer::clean_query;

    fn corpus_of(texts: &[(&str, &str)], thresholds: SizeThresholds) -> Corpus {
        Corpus::new(
            texts
                .iter()
                .map(|(filename, text)| {
                    Document::new(filename.to_string(), text.to_string(), thresholds)
                })
                .collect(),
        )
    }

    fn fixed_corpus() -> Corpus {
        corpus_of(
            &[
                ("a.txt", "python developer"),
                ("b.txt", "java engineer"),
                ("c.txt", "senior python architect"),
            ],
            SizeThresholds::default(),
        )
    }

    // ============================================================
    // HARNESS TESTS
    // ============================================================

    #[test]
    fn test_comparison_runs_all_three_algorithms_in_order() {
        let corpus = fixed_corpus();
        let query = clean_query("python java").unwrap();

        let report = run_comparison(&corpus, &query);
        let names: Vec<&str> = report
            .comparisons
            .iter()
            .map(|run| run.algorithm.as_str())
            .collect();
        assert_eq!(names, vec!["Brute Force", "Rabin-Karp", "KMP"]);
    }

    #[test]
    fn test_comparison_matched_documents_agree_across_algorithms() {
        let corpus = fixed_corpus();
        let query = clean_query("python java").unwrap();

        let report = run_comparison(&corpus, &query);
        assert_eq!(report.total_documents, 3);
        for run in &report.comparisons {
            assert_eq!(run.matched_documents, 3, "{}", run.algorithm);
        }
    }

    #[test]
    fn test_comparison_echoes_query() {
        let corpus = fixed_corpus();
        let query = clean_query("The Python and Java").unwrap();

        let report = run_comparison(&corpus, &query);
        assert_eq!(report.query, "The Python and Java");
        assert_eq!(report.cleaned_query, "python java");
    }

    #[test]
    fn test_comparison_collisions_only_for_rabin_karp() {
        let corpus = fixed_corpus();
        let query = clean_query("python").unwrap();

        let report = run_comparison(&corpus, &query);
        for run in &report.comparisons {
            if run.algorithm != "Rabin-Karp" {
                assert_eq!(run.total_collisions, 0, "{}", run.algorithm);
            }
        }
    }

    #[test]
    fn test_comparison_counts_comparisons() {
        let corpus = fixed_corpus();
        let query = clean_query("python").unwrap();

        let report = run_comparison(&corpus, &query);
        for run in &report.comparisons {
            assert!(run.total_comparisons > 0, "{}", run.algorithm);
        }
    }

    #[test]
    fn test_comparison_size_bucket_counts() {
        // Thresholds chosen so each document lands in a different bucket.
        let thresholds = SizeThresholds {
            small_max: 20,
            medium_max: 40,
        };
        let medium_text = format!("python {}", "x".repeat(20));
        let large_text = format!("python {}", "y".repeat(40));
        let corpus = corpus_of(
            &[
                ("small.txt", "python dev"),
                ("medium.txt", medium_text.as_str()),
                ("large.txt", large_text.as_str()),
                ("nomatch.txt", "java engineer"),
            ],
            thresholds,
        );
        let query = clean_query("python").unwrap();

        let report = run_comparison(&corpus, &query);
        for run in &report.comparisons {
            assert_eq!(run.matched_documents, 3, "{}", run.algorithm);
            assert_eq!(run.small_cv_count, 1, "{}", run.algorithm);
            assert_eq!(run.medium_cv_count, 1, "{}", run.algorithm);
            assert_eq!(run.large_cv_count, 1, "{}", run.algorithm);
        }
    }

    #[test]
    fn test_comparison_top_results_are_capped_and_ranked() {
        let thresholds = SizeThresholds::default();
        let documents: Vec<(String, String)> = (0..8)
            .map(|i| (format!("cv_{}.txt", i), "python ".repeat(i + 1)))
            .collect();
        let corpus = Corpus::new(
            documents
                .iter()
                .map(|(filename, text)| {
                    Document::new(filename.clone(), text.clone(), thresholds)
                })
                .collect(),
        );
        let query = clean_query("python").unwrap();

        let report = run_comparison(&corpus, &query);
        for run in &report.comparisons {
            assert_eq!(run.matched_documents, 8, "{}", run.algorithm);
            assert_eq!(run.top_results.len(), 5, "{}", run.algorithm);
            // All score 100 (single keyword), so occurrence count decides.
            assert_eq!(run.top_results[0].filename, "cv_7.txt");
            assert_eq!(run.top_results[0].matches, 8);
        }
    }

    #[test]
    fn test_comparison_empty_corpus() {
        let corpus = Corpus::new(vec![]);
        let query = clean_query("python").unwrap();

        let report = run_comparison(&corpus, &query);
        assert_eq!(report.total_documents, 0);
        for run in &report.comparisons {
            assert_eq!(run.matched_documents, 0);
            assert_eq!(run.total_comparisons, 0);
            assert!(run.top_results.is_empty());
        }
    }

    // ============================================================
    // TYPES TESTS
    // ============================================================

    #[test]
    fn test_comparison_report_serialization() {
        let report = ComparisonReport {
            query: "python".to_string(),
            cleaned_query: "python".to_string(),
            total_documents: 2,
            comparisons: vec![AlgorithmRun {
                algorithm: "Brute Force".to_string(),
                execution_time: 1.234,
                matched_documents: 1,
                total_comparisons: 42,
                total_collisions: 0,
                small_cv_count: 1,
                medium_cv_count: 0,
                large_cv_count: 0,
                top_results: vec![TopResult {
                    filename: "a.txt".to_string(),
                    score: 100.0,
                    matches: 1,
                }],
            }],
        };

        let json = serde_json::to_string(&report).expect("Serialization failed");
        let restored: ComparisonReport =
            serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored.comparisons.len(), 1);
        assert_eq!(restored.comparisons[0].algorithm, "Brute Force");
        assert_eq!(restored.comparisons[0].execution_time, 1.234);
        assert_eq!(restored.comparisons[0].top_results[0].score, 100.0);
    }
}

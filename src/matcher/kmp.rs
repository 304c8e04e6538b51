use super::types::MatchOutcome;

/// Longest proper prefix that is also a suffix, for every pattern prefix.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0usize; pattern.len()];
    let mut k = 0;
    for q in 1..pattern.len() {
        while k > 0 && pattern[k] != pattern[q] {
            k = table[k - 1];
        }
        if pattern[k] == pattern[q] {
            k += 1;
        }
        table[q] = k;
    }
    table
}

/// Counts keyword occurrences with a single left-to-right scan.
///
/// The text pointer only ever advances; on mismatch the pattern pointer
/// retreats through the failure table, so no byte already matched against
/// the current alignment is examined again. `comparisons` counts only
/// scan-phase byte-equality tests; building the failure table is not
/// counted, keeping the metric comparable to the other algorithms.
pub fn count(text: &[u8], pattern: &[u8]) -> MatchOutcome {
    let n = text.len();
    let m = pattern.len();
    let mut outcome = MatchOutcome::default();
    if m == 0 || m > n {
        return outcome;
    }

    let failure = failure_table(pattern);
    let mut q = 0usize;
    for &byte in text {
        loop {
            outcome.comparisons += 1;
            if pattern[q] == byte {
                q += 1;
                break;
            }
            if q == 0 {
                break;
            }
            q = failure[q - 1];
        }

        if q == m {
            outcome.occurrences += 1;
            q = failure[q - 1];
        }
    }

    outcome
}

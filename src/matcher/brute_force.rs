use super::types::MatchOutcome;

/// Counts keyword occurrences by trying every start offset in the text.
///
/// At each offset, bytes are compared left-to-right until the first mismatch
/// or a full match; windows that would overrun the text stop at its last
/// byte. `comparisons` counts every byte-equality test performed.
pub fn count(text: &[u8], pattern: &[u8]) -> MatchOutcome {
    let n = text.len();
    let m = pattern.len();
    let mut outcome = MatchOutcome::default();
    if m == 0 || m > n {
        return outcome;
    }

    for i in 0..n {
        let mut j = 0;
        while j < m && i + j < n {
            outcome.comparisons += 1;
            if text[i + j] != pattern[j] {
                break;
            }
            j += 1;
        }
        if j == m {
            outcome.occurrences += 1;
        }
    }

    outcome
}

use super::types::MatchOutcome;

/// Polynomial hash base; byte values are the digits.
const BASE: u64 = 256;

/// Production modulus: a large fixed prime, so hash hits are almost always
/// real matches and counter values are reproducible across runs.
pub(crate) const MODULUS: u64 = 1_000_000_007;

/// Counts keyword occurrences with a rolling polynomial hash.
///
/// The window hash is updated in constant time per step. On hash equality a
/// full byte-by-byte verification runs (counted in `comparisons`); a failed
/// verification is a true hash collision and increments `collisions`.
pub fn count(text: &[u8], pattern: &[u8]) -> MatchOutcome {
    count_with_modulus(text, pattern, MODULUS)
}

/// The modulus is a parameter here so tests can force collisions with a
/// deliberately small one.
pub(crate) fn count_with_modulus(text: &[u8], pattern: &[u8], modulus: u64) -> MatchOutcome {
    let n = text.len();
    let m = pattern.len();
    let mut outcome = MatchOutcome::default();
    if m == 0 || m > n {
        return outcome;
    }

    // base^(m-1) mod modulus, used to drop the leading byte when sliding.
    let mut high = 1u64;
    for _ in 1..m {
        high = high * BASE % modulus;
    }

    let mut pattern_hash = 0u64;
    let mut window_hash = 0u64;
    for i in 0..m {
        pattern_hash = (pattern_hash * BASE + pattern[i] as u64) % modulus;
        window_hash = (window_hash * BASE + text[i] as u64) % modulus;
    }

    for i in 0..=n - m {
        if window_hash == pattern_hash {
            let mut j = 0;
            while j < m {
                outcome.comparisons += 1;
                if text[i + j] != pattern[j] {
                    break;
                }
                j += 1;
            }
            if j == m {
                outcome.occurrences += 1;
            } else {
                outcome.collisions += 1;
            }
        }

        if i < n - m {
            let dropped = text[i] as u64 * high % modulus;
            window_hash = ((window_hash + modulus - dropped) % modulus * BASE
                + text[i + m] as u64)
                % modulus;
        }
    }

    outcome
}

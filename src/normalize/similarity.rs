//! Ratcliff/Obershelp string similarity
//!
//! The fuzzy cutoff used by the concept table (0.75) is calibrated against
//! this measure: twice the number of matching characters over the combined
//! length, where matches are counted by recursively taking the longest
//! common substring and matching the pieces on either side of it.

/// Similarity of two strings on a 0–1 scale. Two empty strings are
/// identical (1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matching_chars(&a, &b);
    2.0 * matches as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (ai, bj, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_chars(&a[..ai], &b[..bj])
        + matching_chars(&a[ai + size..], &b[bj + size..])
}

/// Longest common substring, reported as (start in `a`, start in `b`, length).
/// Ties resolve to the earliest start in `a`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        for slot in &mut row {
            *slot = 0;
        }
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                row[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        std::mem::swap(&mut prev, &mut row);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert!((ratio("fee", "fee") - 1.0).abs() < f64::EPSILON);
        assert!((ratio("", "") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert!(ratio("abc", "xyz").abs() < f64::EPSILON);
        assert!(ratio("fee", "").abs() < f64::EPSILON);
    }

    #[test]
    fn close_misspellings_clear_the_fuzzy_cutoff() {
        // "pasport" vs "passport": 7 matching chars of 15 total
        assert!(ratio("pasport", "passport") > 0.9);
        assert!(ratio("fes", "fees") > 0.75);
        assert!(ratio("charge", "charges") > 0.75);
    }

    #[test]
    fn unrelated_words_stay_below_the_cutoff() {
        assert!(ratio("documents", "amount") < 0.75);
        assert!(ratio("where", "price") < 0.75);
    }

    #[test]
    fn ratio_is_symmetric() {
        let ab = ratio("misplaced", "placed");
        let ba = ratio("placed", "misplaced");
        assert!((ab - ba).abs() < f64::EPSILON);
    }
}

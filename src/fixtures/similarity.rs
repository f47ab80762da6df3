//! String similarity used to suggest renames for near-miss directory names.

/// Scores how alike two names are, 0 (unrelated) to 100 (identical).
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Case-insensitive, token-order-independent edit ratio.
///
/// Both inputs are lowercased, split on non-alphanumeric characters, and the
/// tokens sorted and re-joined with single spaces. The ratio is
/// `(len_a + len_b - indel) / (len_a + len_b)`, where `indel` counts
/// insertions and deletions (a substitution costs 2).
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenSortRatio;

impl Similarity for TokenSortRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        let a: Vec<char> = normalize(a).chars().collect();
        let b: Vec<char> = normalize(b).chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 0;
        }
        let matched = total - indel_distance(&a, &b);
        // Round half up in integer arithmetic.
        let pct = (200 * matched + total) / (2 * total);
        u8::try_from(pct).unwrap_or(100)
    }
}

fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn indel_distance(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = if ca == cb { 0 } else { 2 };
            cur[j + 1] = (prev[j + 1] + 1)
                .min(cur[j] + 1)
                .min(prev[j] + substitution);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Best-scoring candidate for `target`, if it reaches `threshold`.
/// Ties keep the earliest candidate.
pub fn best_match<'c, S: Similarity + ?Sized>(
    scorer: &S,
    target: &str,
    candidates: impl IntoIterator<Item = &'c str>,
    threshold: u8,
) -> Option<(&'c str, u8)> {
    candidates
        .into_iter()
        .map(|candidate| (candidate, scorer.score(target, candidate)))
        .fold(None::<(&'c str, u8)>, |best, (candidate, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((candidate, score)),
        })
        .filter(|&(_, score)| score >= threshold)
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

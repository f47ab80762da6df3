use super::*;

#[test]
fn identical_names_score_hundred() {
    assert_eq!(TokenSortRatio.score("vulnerable-example", "vulnerable-example"), 100);
}

#[test]
fn case_and_separator_insensitive() {
    assert_eq!(TokenSortRatio.score("vulnerable-example", "Vulnerable_Example"), 100);
}

#[test]
fn token_order_does_not_matter() {
    assert_eq!(TokenSortRatio.score("remediated-example", "example-remediated"), 100);
}

#[test]
fn one_letter_typo_scores_high() {
    assert_eq!(TokenSortRatio.score("remediated-example", "remediated-exemple"), 94);
}

#[test]
fn unrelated_name_scores_low() {
    assert!(TokenSortRatio.score("remediated-example", "unrelated-stuff") < 80);
}

#[test]
fn sibling_role_is_below_default_threshold() {
    assert_eq!(TokenSortRatio.score("remediated-example", "vulnerable-example"), 61);
}

#[test]
fn empty_inputs_score_zero() {
    assert_eq!(TokenSortRatio.score("", ""), 0);
    assert_eq!(TokenSortRatio.score("---", "vulnerable-example"), 0);
}

#[test]
fn best_match_respects_threshold() {
    let candidates = ["unrelated-stuff", "remediated-exemple"];
    assert_eq!(
        best_match(&TokenSortRatio, "remediated-example", candidates, 80),
        Some(("remediated-exemple", 94))
    );
    assert_eq!(
        best_match(&TokenSortRatio, "remediated-example", ["unrelated-stuff"], 80),
        None
    );
}

#[test]
fn best_match_keeps_first_on_tie() {
    struct Constant;
    impl Similarity for Constant {
        fn score(&self, _: &str, _: &str) -> u8 {
            90
        }
    }
    assert_eq!(
        best_match(&Constant, "x", ["first", "second"], 80),
        Some(("first", 90))
    );
}

#[test]
fn best_match_with_no_candidates() {
    assert_eq!(best_match(&TokenSortRatio, "x", [], 0), None);
}

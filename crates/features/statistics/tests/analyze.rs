use primer_statistics::{StatisticsError, analyze};
use proptest::prelude::*;

#[test]
fn blank_submission_computes_nothing() {
    assert!(analyze("").unwrap().is_none());
    assert!(analyze(" \t ").unwrap().is_none());
}

#[test]
fn invalid_token_aborts_everything() {
    let err = analyze("1, x, 3").unwrap_err();
    assert!(matches!(err, StatisticsError::InvalidToken { ref token, .. } if token == "x"));
}

#[test]
fn reference_list() {
    let stats = analyze("1, 2, 3, 4").unwrap().unwrap();
    assert_eq!(stats.count(), 4);
    assert!((stats.mean() - 2.5).abs() < 1e-12);
    assert!((stats.median() - 2.5).abs() < 1e-12);
    assert!((stats.std_dev() - 1.118).abs() < 1e-3);
}

proptest! {
    #[test]
    fn summary_invariants(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)) {
        let text = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        let stats = analyze(&text).unwrap().unwrap();

        let sorted = stats.numbers();
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
        prop_assert!(stats.mean() >= min - 1e-6 && stats.mean() <= max + 1e-6);
        prop_assert!(stats.median() >= min && stats.median() <= max);
        prop_assert!(stats.std_dev() >= 0.0);
        prop_assert!(stats.mode() >= min - 0.05 && stats.mode() <= max + 0.05);
    }
}

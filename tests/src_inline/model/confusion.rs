use super::*;

fn pairs<'a>(raw: &[(&'a str, &'a str)]) -> Vec<LabelPair<'a>> {
    raw.iter()
        .enumerate()
        .map(|(i, &(actual, predicted))| LabelPair {
            line_no: i + 1,
            actual,
            predicted,
        })
        .collect()
}

fn instance(line_no: usize, reference: &str, predicted: &str) -> Instance {
    Instance::from_halves(
        line_no,
        "id",
        reference.chars().map(|c| c.to_string()).collect(),
        predicted.chars().map(|c| c.to_string()).collect(),
    )
}

#[test]
fn test_cells_indexed_actual_then_predicted() {
    let m = ConfusionMatrix::from_pairs(&pairs(&[
        ("n", "y"),
        ("y", "y"),
        ("y", "n"),
        ("n", "n"),
        ("n", "n"),
    ]));
    assert_eq!(m.alphabet().labels(), &["n", "y"]);
    assert_eq!(m.get(0, 0), 2);
    assert_eq!(m.get(0, 1), 1);
    assert_eq!(m.get(1, 0), 1);
    assert_eq!(m.get(1, 1), 1);
    assert_eq!(m.total(), 5);
    assert_eq!(m.row_sum(0), 3);
    assert_eq!(m.column_sum(0), 3);
}

#[test]
fn test_unknown_predicted_label_is_dropped() {
    let m = ConfusionMatrix::from_pairs(&pairs(&[("y", "n"), ("y", "y"), ("y", "o")]));
    assert_eq!(m.n_classes(), 1);
    assert_eq!(m.get(0, 0), 1);
    assert_eq!(m.total(), 1);
}

#[test]
fn test_per_class_metrics_zero_on_empty_margins() {
    // n is never predicted.
    let m = ConfusionMatrix::from_pairs(&pairs(&[("n", "y"), ("y", "y")]));
    assert_eq!(m.precision(0), 0.0);
    assert_eq!(m.recall(0), 0.0);
    assert_eq!(m.f1(0), 0.0);
    assert!((m.precision(1) - 0.5).abs() < 1e-12);
    assert!((m.recall(1) - 1.0).abs() < 1e-12);
    assert!((m.f1(1) - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_from_columns_uses_trait_offset() {
    let instances = vec![instance(1, "nnynn", "ynnnn"), instance(2, "yyyyy", "ynyyy")];
    let m = ConfusionMatrix::from_columns(&instances, 0, 5).unwrap();
    assert_eq!(m.alphabet().labels(), &["n", "y"]);
    assert_eq!(m.get(0, 1), 1);
    assert_eq!(m.get(1, 1), 1);
    assert_eq!(m.total(), 2);
}

#[test]
fn test_from_columns_missing_value() {
    let instances = vec![instance(1, "nn", "nn"), instance(2, "nn", "n")];
    let err = ConfusionMatrix::from_columns(&instances, 1, 3).unwrap_err();
    assert_eq!(
        err,
        MetricComputationError::MissingValue { line: 2, column: 3 }
    );
}

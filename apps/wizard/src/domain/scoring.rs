/// Relative scores from prediction accuracy.
///
/// With `error[p] = |prediction[p] - won[p]|` and `sum = Σ error`, each player
/// scores `sum - n_player * error[p]`. Scores always add up to zero.
///
/// Arithmetic is widened to `i64`, so any accepted prediction scores without
/// overflow.
pub fn prediction_scores(predictions: &[i32], rounds_won: &[usize]) -> Vec<i64> {
    debug_assert_eq!(predictions.len(), rounds_won.len());
    let n_player = predictions.len() as i64;

    let errors: Vec<i64> = predictions
        .iter()
        .zip(rounds_won)
        .map(|(&prediction, &won)| (i64::from(prediction) - won as i64).abs())
        .collect();
    let sum_error: i64 = errors.iter().sum();

    errors
        .iter()
        .map(|error| sum_error - n_player * error)
        .collect()
}

use heap_stats::{
    ascending, heap_sort, measure_time, ExtremeTracker, MedianTracker, RunningExtreme,
    RunningMedian, SortedExtreme, SortedMedian,
};
use thiserror::Error;

use crate::config::{Config, Mode};

mod config;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Unable to load the configuration `{0}`")]
    Config(#[from] envy::Error),
    #[error("The mode `{0}` is not one of sort, extreme, median or all")]
    UnknownMode(String),
    #[error("The range `{low}..{high}` is empty or not finite")]
    InvalidRange { low: f64, high: f64 },
    #[error("There are no values to process")]
    EmptyInput,
    #[error("The heap and the baseline disagree on the running {0}")]
    BaselineMismatch(&'static str),
}

#[derive(Debug)]
pub struct ExtremeReport {
    /// The extreme reported after each `add`.
    pub running: Vec<f64>,
    /// Everything extracted once the stream ended, in extraction order.
    pub drained: Vec<f64>,
}

/// Bitwise equality, so a NaN on both sides counts as agreement.
fn same_values(left: &[f64], right: &[f64]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a.to_bits() == b.to_bits())
}

impl ExtremeReport {
    fn agrees_with(&self, other: &ExtremeReport) -> bool {
        same_values(&self.running, &other.running) && same_values(&self.drained, &other.drained)
    }
}

/// Sorts the stream ascending with the heap.
fn run_sort(values: &[f64]) -> Vec<f64> {
    let (sorted, elapsed) = measure_time!({ heap_sort(values.iter().copied(), ascending) });
    tracing::info!(?elapsed, count = values.len(), "Heap sorted the input");
    sorted
}

fn feed_extreme<E: ExtremeTracker<f64>>(tracker: &mut E, values: &[f64]) -> ExtremeReport {
    let running = values.iter().map(|&x| tracker.add(x)).collect();
    let mut drained = Vec::with_capacity(tracker.len());
    while let Some(x) = tracker.extract() {
        drained.push(x);
    }
    ExtremeReport { running, drained }
}

/**
Runs the heap-backed tracker and its sorted-vector baseline over the same
stream and fails if they ever report different extremes.
*/
fn run_extreme<H, B>(
    name: &'static str,
    mut heap_backed: H,
    mut baseline: B,
    values: &[f64],
) -> Result<ExtremeReport, DemoError>
where
    H: ExtremeTracker<f64>,
    B: ExtremeTracker<f64>,
{
    let (report, heap_elapsed) = measure_time!({ feed_extreme(&mut heap_backed, values) });
    let (expected, baseline_elapsed) = measure_time!({ feed_extreme(&mut baseline, values) });
    tracing::info!(name, ?heap_elapsed, ?baseline_elapsed, "Tracked the running extreme");
    if !report.agrees_with(&expected) {
        tracing::error!(name, ?report, ?expected, "Heap and baseline disagree");
        return Err(DemoError::BaselineMismatch(name));
    }
    Ok(report)
}

fn run_median(values: &[f64]) -> Result<Vec<f64>, DemoError> {
    let mut median_finder = RunningMedian::new();
    let mut baseline = SortedMedian::new();
    let (medians, heap_elapsed) =
        measure_time!({ values.iter().map(|&x| median_finder.add(x)).collect::<Vec<_>>() });
    let (expected, baseline_elapsed) =
        measure_time!({ values.iter().map(|&x| baseline.add(x)).collect::<Vec<_>>() });
    tracing::info!(
        ?heap_elapsed,
        ?baseline_elapsed,
        lower = median_finder.lower_len(),
        upper = median_finder.upper_len(),
        "Tracked the running median"
    );
    if !same_values(&medians, &expected) {
        return Err(DemoError::BaselineMismatch("median"));
    }
    Ok(medians)
}

fn run(mode: Mode, values: &[f64]) -> Result<(), DemoError> {
    if matches!(mode, Mode::Sort | Mode::All) {
        println!("sorted: {:?}", run_sort(values));
    }
    if matches!(mode, Mode::Extreme | Mode::All) {
        let minimum = run_extreme("minimum", RunningExtreme::minimum(), SortedExtreme::minimum(), values)?;
        println!("running minimum: {:?}", minimum.running);
        println!("extracted minimums: {:?}", minimum.drained);
        let maximum = run_extreme("maximum", RunningExtreme::maximum(), SortedExtreme::maximum(), values)?;
        println!("running maximum: {:?}", maximum.running);
        println!("extracted maximums: {:?}", maximum.drained);
    }
    if matches!(mode, Mode::Median | Mode::All) {
        println!("running median: {:?}", run_median(values)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;
    let mode = config.mode()?;
    let values = config.input()?;
    tracing::info!(?mode, count = values.len(), seed = ?config.seed, "Loaded the input stream");

    if let Err(error) = run(mode, &values) {
        tracing::error!(%error, "Failed to process the input stream");
        return Err(error.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_sort() {
        assert_eq!(
            run_sort(&[9.0, 4.0, 2.0, 7.0, 5.0, 3.0]),
            vec![2.0, 3.0, 4.0, 5.0, 7.0, 9.0]
        );
    }

    #[test]
    fn test_run_extreme_minimum() {
        let report = run_extreme(
            "minimum",
            RunningExtreme::minimum(),
            SortedExtreme::minimum(),
            &[1.0, 4.0, 2.0, 5.0],
        )
        .unwrap();
        assert_eq!(report.running, vec![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(report.drained, vec![1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn test_run_extreme_maximum() {
        let report = run_extreme(
            "maximum",
            RunningExtreme::maximum(),
            SortedExtreme::maximum(),
            &[1.0, 4.0, 2.0, 5.0],
        )
        .unwrap();
        assert_eq!(report.running, vec![1.0, 4.0, 4.0, 5.0]);
        assert_eq!(report.drained, vec![5.0, 4.0, 2.0, 1.0]);
    }

    #[test]
    fn test_run_extreme_detects_disagreement() {
        let result = run_extreme(
            "minimum",
            RunningExtreme::minimum(),
            SortedExtreme::maximum(),
            &[1.0, 4.0],
        );
        assert!(matches!(result, Err(DemoError::BaselineMismatch("minimum"))));
    }

    #[test]
    fn test_run_median() {
        assert_eq!(
            run_median(&[3.0, 2.0, 6.0, 1.0, 7.0]).unwrap(),
            vec![3.0, 2.5, 3.0, 2.5, 3.0]
        );
    }

    #[test]
    fn test_run_median_accepts_nan() {
        let medians = run_median(&[1.0, f64::NAN, 2.0]).unwrap();
        assert_eq!(medians.len(), 3);
        assert_eq!(medians[0], 1.0);
        assert!(medians[1].is_nan());
    }

    #[test]
    fn test_run_extreme_accepts_nan() {
        let report = run_extreme(
            "maximum",
            RunningExtreme::maximum(),
            SortedExtreme::maximum(),
            &[1.0, f64::NAN, 2.0],
        )
        .unwrap();
        assert!(report.running.iter().skip(1).all(|x| x.is_nan()));
        assert_eq!(&report.drained[1..], &[2.0, 1.0]);
    }

    #[test]
    fn test_same_values_is_bitwise() {
        assert!(same_values(&[f64::NAN, 1.0], &[f64::NAN, 1.0]));
        assert!(!same_values(&[0.0], &[-0.0]));
        assert!(!same_values(&[1.0], &[1.0, 2.0]));
    }

    #[test]
    fn test_run_all_modes() {
        assert!(run(Mode::All, &[5.0, 1.0, 3.0]).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DemoError::UnknownMode("avg".to_string()).to_string(),
            "The mode `avg` is not one of sort, extreme, median or all"
        );
        assert_eq!(
            DemoError::InvalidRange { low: 1.0, high: 1.0 }.to_string(),
            "The range `1..1` is empty or not finite"
        );
    }
}

//! Sweep generation and the tab-separated comparison table.

use std::io::Write;

use fastacos::approx::Approximation;
use tracing::{debug, trace};

use crate::error::CompareError;

/// Smallest accepted step: the f32 spacing just above 1/2, so every sample
/// on [-1, 1] is a distinct float.
pub const MIN_STEP: f32 = f32::EPSILON;

/// Validated sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub rounds: i32,
    pub step: f32,
}

impl SweepConfig {
    pub fn new(rounds: u32, step: f32) -> Result<Self, CompareError> {
        if !(step.is_finite() && step >= MIN_STEP) {
            return Err(CompareError::InvalidStep(step));
        }
        Ok(Self {
            // The series clamps anything above 29 anyway.
            rounds: i32::try_from(rounds).unwrap_or(i32::MAX),
            step,
        })
    }

    /// `-1 + i * step` for i = 0, 1, ... while the value stays <= 1.
    ///
    /// Each sample is computed from its index in f64 and rounded once, so
    /// rounding does not accumulate and no two samples collapse.
    pub fn samples(&self) -> impl Iterator<Item = f32> {
        let step = f64::from(self.step);
        (0u32..)
            .map(move |i| (-1.0 + f64::from(i) * step) as f32)
            .take_while(|&x| x <= 1.0)
    }
}

/// Running error statistics for one approximation.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSummary {
    pub name: &'static str,
    pub max_abs: f32,
    pub max_at: f32,
    pub sum_abs: f64,
    pub count: u64,
    pub nan_count: u64,
}

impl ErrorSummary {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            max_abs: 0.0,
            max_at: f32::NAN,
            sum_abs: 0.0,
            count: 0,
            nan_count: 0,
        }
    }

    pub fn record(&mut self, x: f32, error: f32) {
        if error.is_nan() {
            self.nan_count += 1;
            return;
        }
        let abs = error.abs();
        if self.count == 0 || abs > self.max_abs {
            self.max_abs = abs;
            self.max_at = x;
        }
        self.sum_abs += f64::from(abs);
        self.count += 1;
    }

    pub fn mean_abs(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum_abs / self.count as f64
    }
}

fn write_header<W: Write>(out: &mut W, approximations: &[Approximation]) -> std::io::Result<()> {
    write!(out, "x\tacos")?;
    for a in approximations {
        write!(out, "\t{}", a.name())?;
    }
    for a in approximations {
        write!(out, "\td_{}", a.name())?;
    }
    writeln!(out)
}

/// Writes the header and one row per sample; returns per-approximation stats.
pub fn write_table<W: Write>(
    out: &mut W,
    config: &SweepConfig,
    precision: usize,
) -> Result<Vec<ErrorSummary>, CompareError> {
    let approximations = Approximation::all(config.rounds);
    let mut summaries: Vec<ErrorSummary> = approximations
        .iter()
        .map(|a| ErrorSummary::new(a.name()))
        .collect();
    let mut values = [0.0f32; 8];

    write_header(out, &approximations)?;
    let mut rows = 0u64;
    for x in config.samples() {
        let reference = x.acos();
        for (slot, a) in values.iter_mut().zip(&approximations) {
            *slot = a.eval(x);
        }

        write!(out, "{x:.precision$}\t{reference:.precision$}")?;
        for v in &values {
            write!(out, "\t{v:.precision$}")?;
        }
        for (v, summary) in values.iter().zip(summaries.iter_mut()) {
            let err = reference - v;
            summary.record(x, err);
            write!(out, "\t{err:.precision$}")?;
        }
        writeln!(out)?;
        trace!(x, reference, "row");
        rows += 1;
    }
    debug!(rows, step = config.step, rounds = config.rounds, "sweep finished");
    Ok(summaries)
}

pub fn write_summary<W: Write>(out: &mut W, summaries: &[ErrorSummary]) -> std::io::Result<()> {
    writeln!(out, "approximation\tmax_abs_err\tat_x\tmean_abs_err\tnan")?;
    for s in summaries {
        writeln!(
            out,
            "{}\t{:.3e}\t{:.6}\t{:.3e}\t{}",
            s.name,
            s.max_abs,
            s.max_at,
            s.mean_abs(),
            s.nan_count
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rounds: u32, step: f32) -> (String, Vec<ErrorSummary>) {
        let config = SweepConfig::new(rounds, step).unwrap();
        let mut buf = Vec::new();
        let summaries = write_table(&mut buf, &config, 6).unwrap();
        (String::from_utf8(buf).unwrap(), summaries)
    }

    #[test]
    fn rejects_unusable_steps() {
        for step in [0.0f32, -0.1, f32::NAN, f32::INFINITY, 1.0e-12, 1.0e-8, MIN_STEP / 2.0] {
            assert!(
                matches!(SweepConfig::new(5, step), Err(CompareError::InvalidStep(_))),
                "step {step}"
            );
        }
    }

    #[test]
    fn smallest_step_gives_distinct_samples() {
        let config = SweepConfig::new(0, MIN_STEP).unwrap();
        let mut prev = f32::NEG_INFINITY;
        let mut count = 0u32;
        for x in config.samples() {
            assert!(x > prev, "sample {count}: {x} after {prev}");
            prev = x;
            count += 1;
        }
        assert_eq!(prev, 1.0);
        assert_eq!(count, (1 << 24) + 1);
    }

    #[test]
    fn saturates_large_round_counts() {
        let config = SweepConfig::new(u32::MAX, 0.5).unwrap();
        assert_eq!(config.rounds, i32::MAX);
    }

    #[test]
    fn samples_include_both_ends() {
        let config = SweepConfig::new(0, 0.5).unwrap();
        let xs: Vec<f32> = config.samples().collect();
        assert_eq!(xs, [-1.0, -0.5, 0.0, 0.5, 1.0]);

        let config = SweepConfig::new(0, 0.1).unwrap();
        let xs: Vec<f32> = config.samples().collect();
        assert_eq!(xs.len(), 21);
        assert_eq!(xs[20], 1.0);

        let config = SweepConfig::new(0, 3.0).unwrap();
        assert_eq!(config.samples().collect::<Vec<_>>(), [-1.0]);
    }

    #[test]
    fn header_lists_values_then_errors() {
        let (out, _) = table(4, 1.0);
        let header = out.lines().next().unwrap();
        let cols: Vec<&str> = header.split('\t').collect();
        assert_eq!(cols.len(), 18);
        assert_eq!(&cols[..3], ["x", "acos", "binomial"]);
        assert_eq!(cols[3], "nvidia0");
        assert_eq!(cols[9], "nvidia6");
        assert_eq!(cols[10], "d_binomial");
        assert_eq!(cols[17], "d_nvidia6");
    }

    #[test]
    fn rows_match_library_values() {
        let (out, _) = table(10, 1.0);
        let rows: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(rows.len(), 3);

        let mid: Vec<&str> = rows[1].split('\t').collect();
        assert_eq!(mid.len(), 18);
        assert_eq!(mid[0], "0.000000");
        assert_eq!(mid[1], "1.570796");
        assert_eq!(mid[2], "1.570796");
        assert_eq!(mid[3], format!("{:.6}", fastacos::approx::acos_nvidia0(0.0)));
        assert_eq!(mid[10], "0.000000");

        let last: Vec<&str> = rows[2].split('\t').collect();
        assert_eq!(last[0], "1.000000");
        assert_eq!(last[3], "0.000000");
    }

    #[test]
    fn precision_controls_decimals() {
        let config = SweepConfig::new(1, 2.0).unwrap();
        let mut buf = Vec::new();
        write_table(&mut buf, &config, 2).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let first = out.lines().nth(1).unwrap();
        assert!(first.starts_with("-1.00\t3.14\t"), "{first}");
    }

    #[test]
    fn summaries_track_worst_error() {
        let (_, summaries) = table(29, 0.01);
        assert_eq!(summaries.len(), 8);
        assert_eq!(summaries[0].name, "binomial");
        assert!(summaries[0].max_abs > 0.3, "{:?}", summaries[0]);
        assert_eq!(summaries[0].max_at.abs(), 1.0);
        for s in &summaries[1..] {
            assert!(s.max_abs < 7.0e-5, "{s:?}");
            assert_eq!(s.nan_count, 0);
            assert_eq!(s.count, 201);
            assert!(s.mean_abs() <= f64::from(s.max_abs));
        }
    }

    #[test]
    fn summary_record_counts_nan_separately() {
        let mut s = ErrorSummary::new("probe");
        s.record(0.5, -0.25);
        s.record(0.7, f32::NAN);
        s.record(0.9, 0.125);
        assert_eq!(s.count, 2);
        assert_eq!(s.nan_count, 1);
        assert_eq!(s.max_abs, 0.25);
        assert_eq!(s.max_at, 0.5);
        assert!((s.mean_abs() - 0.1875).abs() < 1e-12);

        let mut out = Vec::new();
        write_summary(&mut out, &[s]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("probe\t2.500e-1\t0.500000"));
    }
}

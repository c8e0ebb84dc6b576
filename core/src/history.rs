//! # History: Synthetic Uptime Series
//!
//! Decorative per-day status bars. The series is random and only meant to
//! look plausible; it is not a measurement of anything.

use crate::error::{StatusError, StatusResult};
use crate::status::Status;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_HISTORY_DAYS: usize = 90;
pub const MAX_HISTORY_DAYS: usize = 3650;

/// Width of the `degraded` band right above the base uptime.
const DEGRADED_BAND: f64 = 0.003;
/// Width of the `outage` band right above the degraded band.
const OUTAGE_BAND: f64 = 0.002;

/// Source of uniform draws in `[0, 1)`.
///
/// Kept separate from [`rand::Rng`] so tests can script exact sequences.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Process-wide thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSource;

impl UnitSource for ThreadSource {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Adapts any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> UnitSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Seeded source for reproducible page builds.
pub type SeededSource = RngSource<StdRng>;

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<S: UnitSource + ?Sized> UnitSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl UnitSource for Box<dyn UnitSource + Send> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Generates `days` daily statuses around `base_uptime`.
///
/// Each draw `r` maps to `Operational` below `base_uptime`, `Degraded`
/// within the next 0.003, `Outage` within the 0.002 after that, and
/// `Maintenance` otherwise.
pub fn generate_history<S>(days: usize, base_uptime: f64, source: &mut S) -> StatusResult<Vec<Status>>
where
    S: UnitSource + ?Sized,
{
    if !base_uptime.is_finite() || !(0.0..=1.0).contains(&base_uptime) {
        return Err(StatusError::InvalidProbability(base_uptime));
    }
    if days > MAX_HISTORY_DAYS {
        return Err(StatusError::InvalidDayCount(days));
    }

    let degraded_limit = base_uptime + DEGRADED_BAND;
    let outage_limit = degraded_limit + OUTAGE_BAND;

    let history = (0..days)
        .map(|_| {
            let r = source.next_unit();
            if r < base_uptime {
                Status::Operational
            } else if r < degraded_limit {
                Status::Degraded
            } else if r < outage_limit {
                Status::Outage
            } else {
                Status::Maintenance
            }
        })
        .collect();
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        values: Vec<f64>,
        cursor: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                cursor: 0,
            }
        }
    }

    impl UnitSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        }
    }

    #[test]
    fn test_default_length_and_values() {
        let history = generate_history(DEFAULT_HISTORY_DAYS, 0.998, &mut ThreadSource).unwrap();
        assert_eq!(history.len(), 90);
        assert!(history.iter().all(|s| Status::ALL.contains(s)));
    }

    #[test]
    fn test_scripted_bands() {
        let mut source = Scripted::new(&[0.1, 0.9, 0.902, 0.904, 0.95, 0.0]);
        let history = generate_history(6, 0.9, &mut source).unwrap();
        assert_eq!(
            history,
            vec![
                Status::Operational,
                Status::Degraded,
                Status::Degraded,
                Status::Outage,
                Status::Maintenance,
                Status::Operational,
            ]
        );
    }

    #[test]
    fn test_high_base_uptime_never_reaches_maintenance() {
        let mut source = Scripted::new(&[0.9995, 0.99999]);
        let history = generate_history(2, 0.998, &mut source).unwrap();
        assert_eq!(history, vec![Status::Degraded, Status::Degraded]);
    }

    #[test]
    fn test_zero_days() {
        let history = generate_history(0, 0.5, &mut ThreadSource).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_rejects_invalid_probability() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                generate_history(10, p, &mut ThreadSource),
                Err(StatusError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn test_rejects_oversized_day_count() {
        assert_eq!(
            generate_history(MAX_HISTORY_DAYS + 1, 0.9, &mut ThreadSource),
            Err(StatusError::InvalidDayCount(MAX_HISTORY_DAYS + 1))
        );
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a = generate_history(90, 0.5, &mut SeededSource::from_seed(7)).unwrap();
        let b = generate_history(90, 0.5, &mut SeededSource::from_seed(7)).unwrap();
        assert_eq!(a, b);
    }
}

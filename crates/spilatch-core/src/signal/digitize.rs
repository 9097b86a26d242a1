// crates/spilatch-core/src/signal/digitize.rs

use crate::config::params::{Hysteresis, StartPolicy};
use crate::error::{Result, SpiError};
use crate::signal::level::Level;
use crate::validate::validate_thresholds;

/// Convert analog samples to logic levels with hysteresis.
///
/// The first sample is decided on its own (`>= high` is High, `<= low` is Low).
/// If it falls in the dead band, `start` decides: `Strict` fails, `Assume`
/// seeds the state. Every later sample goes through [`Level::step`], so the
/// state only flips when the opposite threshold is reached.
///
/// Output length always equals input length.
pub fn digitize(samples: &[f64], th: Hysteresis, start: StartPolicy) -> Result<Vec<Level>> {
    validate_thresholds(th)?;

    let Some((&first, rest)) = samples.split_first() else {
        return Ok(Vec::new());
    };
    ensure_finite(0, first)?;

    let mut state = match (Level::decide(first, th), start) {
        (Some(l), _) => l,
        (None, StartPolicy::Assume(l)) => {
            log::debug!(
                "digitize: first sample {first} in dead band [{}, {}], assuming {l:?}",
                th.low,
                th.high
            );
            l
        }
        (None, StartPolicy::Strict) => {
            return Err(SpiError::AmbiguousStart {
                value: first,
                low: th.low,
                high: th.high,
            })
        }
    };

    let mut out = Vec::with_capacity(samples.len());
    out.push(state);

    let mut flips: usize = 0;
    for (i, &v) in rest.iter().enumerate() {
        ensure_finite(i + 1, v)?;
        let next = state.step(v, th);
        if next != state {
            flips += 1;
        }
        state = next;
        out.push(state);
    }

    log::trace!(
        "digitize: samples={} transitions={} low={} high={}",
        samples.len(),
        flips,
        th.low,
        th.high
    );

    Ok(out)
}

#[inline]
fn ensure_finite(index: usize, v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SpiError::NonFiniteSample { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::level::Level::{High as H, Low as L};

    const TH: Hysteresis = Hysteresis { low: 0.8, high: 2.0 };

    #[test]
    fn dead_band_holds_state() {
        let out = digitize(&[0.0, 1.5, 2.5, 1.0, 0.5], TH, StartPolicy::Strict).unwrap();
        assert_eq!(out, vec![L, L, H, H, L]);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let out = digitize(&[0.8, 2.0, 0.8, 2.0], TH, StartPolicy::Strict).unwrap();
        assert_eq!(out, vec![L, H, L, H]);
    }

    #[test]
    fn chatter_inside_band_is_suppressed() {
        let noisy = [3.3, 1.9, 0.9, 1.9, 0.81, 1.99, 3.3];
        let out = digitize(&noisy, TH, StartPolicy::Strict).unwrap();
        assert!(out.iter().all(|&l| l == H));
    }

    #[test]
    fn ambiguous_start_is_strict_by_default() {
        let err = digitize(&[1.2, 3.0], TH, StartPolicy::default()).unwrap_err();
        assert_eq!(err, SpiError::AmbiguousStart { value: 1.2, low: 0.8, high: 2.0 });
    }

    #[test]
    fn ambiguous_start_can_be_assumed() {
        let lo = digitize(&[1.2, 1.5, 2.1], TH, StartPolicy::Assume(L)).unwrap();
        assert_eq!(lo, vec![L, L, H]);
        let hi = digitize(&[1.2, 1.5, 0.1], TH, StartPolicy::Assume(H)).unwrap();
        assert_eq!(hi, vec![H, H, L]);
    }

    #[test]
    fn assumed_start_ignored_when_first_sample_is_decisive() {
        let out = digitize(&[3.0], TH, StartPolicy::Assume(L)).unwrap();
        assert_eq!(out, vec![H]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(digitize(&[], TH, StartPolicy::Strict).unwrap().is_empty());
    }

    #[test]
    fn rejects_nan_with_index() {
        let err = digitize(&[0.0, 0.1, f64::NAN], TH, StartPolicy::Strict).unwrap_err();
        assert_eq!(err, SpiError::NonFiniteSample { index: 2 });
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let err = digitize(&[0.0], Hysteresis::new(2.0, 0.8), StartPolicy::Strict).unwrap_err();
        assert!(matches!(err, SpiError::InvalidThresholds { .. }));
    }
}

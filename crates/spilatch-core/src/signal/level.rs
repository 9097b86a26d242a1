// crates/spilatch-core/src/signal/level.rs

use crate::config::params::Hysteresis;

/// Logic level of one digitized sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// Any non-zero bit is High.
    #[inline]
    pub fn from_bit(bit: u8) -> Self {
        if bit != 0 {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Level decided by a single sample with no history.
    ///
    /// `None` when the value sits inside the dead band.
    #[inline]
    pub fn decide(value: f64, th: Hysteresis) -> Option<Level> {
        if value >= th.high {
            Some(Level::High)
        } else if value <= th.low {
            Some(Level::Low)
        } else {
            None
        }
    }

    /// Schmitt-trigger transition: a level only flips once the value reaches
    /// the opposite threshold.
    #[inline]
    pub fn step(self, value: f64, th: Hysteresis) -> Level {
        match self {
            Level::Low if value >= th.high => Level::High,
            Level::High if value <= th.low => Level::Low,
            same => same,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TH: Hysteresis = Hysteresis { low: 0.8, high: 2.0 };

    #[test]
    fn transition_table() {
        // (from, value, to)
        let rows = [
            (Level::Low, 0.0, Level::Low),
            (Level::Low, 0.8, Level::Low),
            (Level::Low, 1.5, Level::Low),
            (Level::Low, 1.999, Level::Low),
            (Level::Low, 2.0, Level::High),
            (Level::Low, 3.3, Level::High),
            (Level::High, 3.3, Level::High),
            (Level::High, 2.0, Level::High),
            (Level::High, 1.5, Level::High),
            (Level::High, 0.801, Level::High),
            (Level::High, 0.8, Level::Low),
            (Level::High, -0.2, Level::Low),
        ];
        for (from, v, to) in rows {
            assert_eq!(from.step(v, TH), to, "from={from:?} value={v}");
        }
    }

    #[test]
    fn decide_leaves_dead_band_open() {
        assert_eq!(Level::decide(2.0, TH), Some(Level::High));
        assert_eq!(Level::decide(0.8, TH), Some(Level::Low));
        assert_eq!(Level::decide(1.2, TH), None);
    }

    #[test]
    fn bit_conversion_round_trips() {
        assert_eq!(Level::from_bit(0), Level::Low);
        assert_eq!(Level::from_bit(1), Level::High);
        assert_eq!(Level::from_bit(1).bit(), 1);
        assert_eq!(Level::from_bit(0).bit(), 0);
    }

    #[test]
    fn equal_thresholds_favor_high() {
        let th = Hysteresis { low: 1.0, high: 1.0 };
        assert_eq!(Level::decide(1.0, th), Some(Level::High));
        assert_eq!(Level::Low.step(1.0, th), Level::High);
        assert_eq!(Level::High.step(1.0, th), Level::Low);
    }
}

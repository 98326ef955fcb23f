//! Rolling average volume.
//!
//! avg_volume[t] = mean(volume[t-period+1 ..= t]). Lookback: period - 1.

use super::{rolling_mean, Indicator};
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct AvgVolume {
    period: usize,
    name: String,
}

impl AvgVolume {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "average volume period must be >= 1");
        Self {
            period,
            name: format!("avg_volume_{period}"),
        }
    }
}

impl Indicator for AvgVolume {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume as f64).collect();
        rolling_mean(&volumes, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn avg_volume_basic() {
        let mut bars = make_bars(&[100.0, 101.0, 102.0, 103.0]);
        for (i, bar) in bars.iter_mut().enumerate() {
            bar.volume = 1000 * (i as u64 + 1);
        }
        let out = AvgVolume::new(2).compute(&bars);
        assert!(out[0].is_nan());
        assert_approx(out[1], 1500.0, DEFAULT_EPSILON);
        assert_approx(out[3], 3500.0, DEFAULT_EPSILON);
    }
}

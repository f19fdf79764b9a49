// Y axis range and tick computation
use super::error::{StatsError, StatsResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Observed value range plus the number of intervals to split it into.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub tick_count: usize,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, tick_count: usize) -> StatsResult<Self> {
        if tick_count == 0 {
            return Err(StatsError::InvalidTickCount);
        }
        Ok(Self {
            min,
            max,
            tick_count,
        })
    }

    pub fn values(&self) -> Vec<f64> {
        compute_ticks(self.min, self.max, self.tick_count)
    }

    pub fn ticks(&self) -> Vec<Tick> {
        self.values()
            .into_iter()
            .map(|value| Tick {
                value,
                label: format!("{:.0}", value),
            })
            .collect()
    }

    pub fn grid_lines(&self) -> Vec<f64> {
        self.values()
    }
}

/// `count + 1` evenly spaced values from `min(0, min)` up to at least `max`.
/// The step is rounded up to a whole number.
pub fn compute_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let min = min.min(0.0);
    let tick_size = ((max - min) / count as f64).ceil();
    (0..=count).map(|i| min + i as f64 * tick_size).collect()
}

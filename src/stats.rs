use ahash::AHashMap;

/// Aggregate table keyed by raw station bytes.
pub type Table = AHashMap<Vec<u8>, Stats>;

/// Running statistic for one station.
///
/// All four fields are associative-commutative reductions, which is what
/// makes per-chunk tables safe to merge in any completion order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl Stats {
    /// Statistic of a single measurement.
    pub fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    /// Folds one more measurement into the statistic.
    pub fn record(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.sum += value;
        self.count += 1;
    }

    /// Combines two partial statistics built from disjoint sets of records.
    pub fn merge(&mut self, other: Stats) {
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

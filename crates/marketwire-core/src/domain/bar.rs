use serde::{Deserialize, Serialize};

/// One aggregate bucket projected from the API's `results` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub ticker_symbol: String,
    pub volume: f64,
    pub volume_weighted_average_price: f64,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub transaction_count: u64,
}

impl Bar {
    /// Trading range of the bucket.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Close-over-open change as a fraction of the open.
    pub fn change_ratio(&self) -> Option<f64> {
        (self.open != 0.0).then(|| (self.close - self.open) / self.open)
    }
}

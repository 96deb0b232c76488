use crate::constants::PERCENT;
use crate::types::{AggregatorError, AnchorRatio};

impl AnchorRatio {
    pub fn new(lower: u32, upper: u32) -> Result<Self, AggregatorError> {
        let ratio = Self { lower, upper };
        ratio.validate()?;
        Ok(ratio)
    }

    /// The window must be non-degenerate and contain an unchanged answer.
    pub fn validate(&self) -> Result<(), AggregatorError> {
        let unchanged = PERCENT as u32;
        if self.lower >= self.upper || self.lower > unchanged || self.upper < unchanged {
            return Err(AggregatorError::InvalidAnchorRatio);
        }
        Ok(())
    }

    /// Accepts `candidate` when `lower <= candidate * 100 / previous <= upper`.
    ///
    /// The first answer of the series has nothing to be anchored to and always
    /// passes. Non-positive answers and overflowing ratios are rejected.
    pub fn check(&self, previous: Option<i128>, candidate: i128) -> Result<(), AggregatorError> {
        let Some(previous) = previous else {
            return Ok(());
        };
        if previous <= 0 || candidate <= 0 {
            return Err(AggregatorError::AnchorDeviation);
        }

        let ratio = candidate
            .checked_mul(PERCENT)
            .map(|scaled| scaled / previous)
            .ok_or(AggregatorError::AnchorDeviation)?;

        if ratio < self.lower as i128 || ratio > self.upper as i128 {
            return Err(AggregatorError::AnchorDeviation);
        }
        Ok(())
    }
}

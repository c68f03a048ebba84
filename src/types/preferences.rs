use crate::error::{NeighborFitError, Result};
use crate::types::dimension::{Dimension, DimensionMap};
use serde::{Serialize, Serializer};
use std::fmt;

/// Importance a user assigns to one dimension. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const NEUTRAL: Weight = Weight(5);
    /// Weights at or above this mark a dimension as high priority.
    pub const HIGH_PRIORITY: u8 = 7;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(NeighborFitError::WeightOutOfRange(i64::from(value)))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_high_priority(self) -> bool {
        self.0 >= Self::HIGH_PRIORITY
    }
}

impl TryFrom<i64> for Weight {
    type Error = NeighborFitError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| NeighborFitError::WeightOutOfRange(value))
            .and_then(Weight::new)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// A submitted survey: one weight per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PreferenceVector {
    weights: DimensionMap<Weight>,
}

impl PreferenceVector {
    pub fn new(weights: DimensionMap<Weight>) -> Self {
        Self { weights }
    }

    pub fn uniform(weight: Weight) -> Self {
        Self::new(DimensionMap::splat(weight))
    }

    pub fn weight(&self, dimension: Dimension) -> Weight {
        self.weights[dimension]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Weight)> + '_ {
        self.weights.iter().map(|(dimension, weight)| (dimension, *weight))
    }

    pub fn total_weight(&self) -> u32 {
        self.weights
            .values()
            .iter()
            .map(|weight| u32::from(weight.get()))
            .sum()
    }
}

impl Default for PreferenceVector {
    fn default() -> Self {
        Self::uniform(Weight::NEUTRAL)
    }
}

impl fmt::Display for PreferenceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (dimension, weight) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", dimension.key(), weight)?;
            first = false;
        }
        Ok(())
    }
}

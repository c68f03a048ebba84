use crate::types::dimension::DimensionMap;
use serde::Serialize;

/// A catalog entry rated 1..=10 on every dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborhoodRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub scores: DimensionMap<u8>,
    pub description: &'static str,
    pub key_features: &'static [&'static str],
}

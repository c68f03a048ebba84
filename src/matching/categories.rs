use crate::types::dimension::Dimension;
use crate::types::neighborhood::NeighborhoodRecord;
use crate::types::preferences::PreferenceVector;

pub const MAX_TOP_CATEGORIES: usize = 3;

/// High-priority dimensions where the neighborhood scores strongest.
///
/// Only dimensions weighted at least `Weight::HIGH_PRIORITY` qualify. They
/// are ordered by `score * weight`, descending, with ties kept in
/// enumeration order, and cut to `MAX_TOP_CATEGORIES`.
pub fn top_categories(record: &NeighborhoodRecord, preferences: &PreferenceVector) -> Vec<Dimension> {
    let mut candidates: Vec<(Dimension, u32)> = preferences
        .iter()
        .filter(|(_, weight)| weight.is_high_priority())
        .map(|(dimension, weight)| {
            (
                dimension,
                u32::from(record.scores[dimension]) * u32::from(weight.get()),
            )
        })
        .collect();

    // sort_by is stable, so equal products keep enumeration order.
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    candidates
        .into_iter()
        .take(MAX_TOP_CATEGORIES)
        .map(|(dimension, _)| dimension)
        .collect()
}

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Lookup entities a teacher is linked to through a join table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AssociationKind {
    Languages,
    Subjects,
    GradeLevels,
}

/// Deduplicates ids while keeping first-seen order
pub fn distinct_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

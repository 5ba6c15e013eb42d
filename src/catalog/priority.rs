//! Result-set ordering and summary statistics.

use std::collections::BTreeMap;

use crate::catalog::content_type::ContentType;
use crate::catalog::entity::CatalogEntity;

/// Order a result set by content-type priority: full products first,
/// cosmetics and currency packs last. The sort is stable, so source
/// order (search relevance) is preserved within each rank.
pub fn sort_by_type_priority(mut entities: Vec<CatalogEntity>) -> Vec<CatalogEntity> {
    entities.sort_by_key(|entity| entity.content_type.priority_rank());
    entities
}

/// Count entities per content type. The map iterates in priority order,
/// ready for summary rendering.
pub fn content_type_counts(entities: &[CatalogEntity]) -> BTreeMap<ContentType, usize> {
    let mut counts = BTreeMap::new();
    for entity in entities {
        *counts.entry(entity.content_type).or_insert(0) += 1;
    }
    counts
}

use super::types::ListItem;

/// A maximal run of consecutive siblings sharing a marker type.
///
/// Each run renders as its own ordered or unordered list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRun<'a> {
    pub ordered: bool,
    pub items: &'a [ListItem],
}

/// Partitions siblings into marker runs, preserving source order.
pub fn marker_runs(items: &[ListItem]) -> Vec<MarkerRun<'_>> {
    items
        .chunk_by(|a, b| a.is_ordered == b.is_ordered)
        .map(|items| MarkerRun {
            ordered: items[0].is_ordered,
            items,
        })
        .collect()
}

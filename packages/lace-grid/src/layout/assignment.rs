//! Round-robin item to column assignment

use crate::column::{ColumnSet, PlacedItem};

use super::LayoutContext;

/// Cross-call assignment state of one grid
///
/// `next_sort_index` only ever grows, so sort indices stay unique for the lifetime of the
/// grid even across relayouts and `remove_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rotation {
    last_column: Option<usize>,
    next_sort_index: u64,
}

impl Rotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column most recently placed into, if any since the last restart
    pub fn last_column(&self) -> Option<usize> {
        self.last_column
    }

    pub fn next_sort_index(&self) -> u64 {
        self.next_sort_index
    }

    /// Column (1-based) the next item should go to
    ///
    /// Without a previous placement the position inside the current batch decides. Once
    /// something has been placed the rotation continues from that column, so consecutive
    /// appends keep cycling instead of starting over at column 1.
    pub fn target(&self, position_in_batch: usize, column_count: usize) -> usize {
        let column_count = column_count.max(1);
        match self.last_column {
            None => position_in_batch % column_count + 1,
            Some(last) => last % column_count + 1,
        }
    }

    pub fn allocate_sort_index(&mut self) -> u64 {
        let index = self.next_sort_index;
        self.next_sort_index += 1;
        index
    }

    pub fn record(&mut self, column: usize) {
        self.last_column = Some(column);
    }

    /// Forget the last placement so the next batch starts from its own position 0
    pub fn restart(&mut self) {
        self.last_column = None;
    }
}

/// Place `item` into the column chosen by `rotation` and attach it in the render layer
pub(crate) fn place(
    columns: &mut ColumnSet,
    rotation: &mut Rotation,
    ctx: &LayoutContext<'_>,
    item: PlacedItem,
    position_in_batch: usize,
) -> usize {
    let target = rotation.target(position_in_batch, columns.count());

    if let Some(column) = columns.column_mut(target) {
        column.push(item);
        ctx.render.attach_item(ctx.container, item.id, target);
    }
    rotation.record(target);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        container = %ctx.container,
        item = %item.id,
        sort_index = item.sort_index,
        column = target,
        "Placed item"
    );

    target
}

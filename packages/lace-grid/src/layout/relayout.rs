//! Full rebuild of the column structure

use crate::column::{ColumnSet, PlacedItem};

use super::LayoutContext;
use super::assignment::{Rotation, place};

/// Create `count` empty columns in the render layer and the model
pub(crate) fn create_columns(ctx: &LayoutContext<'_>, count: usize) -> ColumnSet {
    for index in 1..=count {
        ctx.render.create_column(ctx.container, index);
    }
    ColumnSet::with_count(count)
}

/// Detach every item and tear the columns down, returning the items with their sort indices
pub(crate) fn dismantle(columns: &mut ColumnSet, ctx: &LayoutContext<'_>) -> Vec<PlacedItem> {
    let items = columns.extract_all();
    for item in &items {
        ctx.render.detach_item(ctx.container, item.id);
    }
    for column in columns.iter() {
        ctx.render.destroy_column(ctx.container, column.index());
    }
    *columns = ColumnSet::default();
    items
}

/// Rebuild `column_count` columns and redistribute every item by sort order
///
/// Existing sort indices are reused, never reallocated. The rotation is restarted so the
/// redistribution depends only on the item set and the column count, which makes running
/// this twice in a row a no-op for the assignment.
pub(crate) fn relayout(
    columns: &mut ColumnSet,
    rotation: &mut Rotation,
    column_count: usize,
    ctx: &LayoutContext<'_>,
) {
    let mut items = dismantle(columns, ctx);

    ctx.apply_centering(column_count);
    *columns = create_columns(ctx, column_count);

    items.sort_by_key(|item| item.sort_index);
    rotation.restart();
    for (position, item) in items.into_iter().enumerate() {
        place(columns, rotation, ctx, item, position);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        container = %ctx.container,
        columns = column_count,
        items = columns.item_count(),
        "Relayout complete"
    );
}

use crate::config::MAX_COLUMNS;

/// Number of columns that fit in `container_width`
///
/// `window_padding` is taken off the width first and each column occupies
/// `col_width + col_padding`. The result is never below `min_cols`, and never below 1.
/// It is never above the whole pixels of the effective width, nor above [`MAX_COLUMNS`]
/// (which also caps `min_cols`). Degenerate inputs (non-finite values, a zero-width column)
/// count as zero fitting columns.
pub fn column_count(
    container_width: f32,
    col_width: f32,
    col_padding: f32,
    window_padding: f32,
    min_cols: usize,
) -> usize {
    let floor = min_cols.clamp(1, MAX_COLUMNS);
    let effective_width = container_width - window_padding;
    let per_column = col_width + col_padding;

    if !effective_width.is_finite() || !per_column.is_finite() || per_column <= 0.0 {
        return floor;
    }
    if effective_width <= 0.0 {
        return floor;
    }

    // Bounded in float space, the cast would otherwise saturate
    let raw = (effective_width / per_column)
        .floor()
        .min(effective_width.floor())
        .min(MAX_COLUMNS as f32) as usize;
    raw.max(floor)
}

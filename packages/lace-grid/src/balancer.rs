//! Height balancing ("even bottom") heuristic
//!
//! After items are added the columns can end up noticeably uneven. The balancer takes the most
//! recently placed item of the tallest column and moves it to the shortest one, a bounded
//! number of times. It does not search for an optimal arrangement.

use crate::column::ColumnSet;
use crate::layout::LayoutContext;

/// What a [`balance`] pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceReport {
    /// Iterations run (0 when the pass was skipped up front)
    pub iterations: usize,
    pub moved: usize,
}

/// Move trailing items from the tallest to the shortest column
///
/// Skipped entirely with fewer than two items or when the height spread is within
/// `threshold`. Otherwise runs `ceil(columns / 2)` iterations, re-measuring before each one.
/// An iteration moves nothing when the tallest column is empty or when the candidate item is at
/// least as tall as the gap, since moving it would leave the pair no closer (or further apart).
///
/// A pass therefore never increases the spread, and a lone oversized item stays put: columns
/// of 100, 900 and 100 px are left alone when column 2 is a single 900 px item, while a
/// trailing 300 px item in the same column would move to column 1.
pub(crate) fn balance(
    columns: &mut ColumnSet,
    ctx: &LayoutContext<'_>,
    threshold: f32,
) -> BalanceReport {
    let mut report = BalanceReport::default();

    if columns.item_count() < 2 {
        return report;
    }
    let Some(initial) = columns.heights(|item| ctx.item_height(item)) else {
        return report;
    };
    if initial.spread() <= threshold {
        return report;
    }

    let iterations = columns.count().div_ceil(2);
    for _ in 0..iterations {
        report.iterations += 1;

        let Some(heights) = columns.heights(|item| ctx.item_height(item)) else {
            break;
        };
        if heights.highest == heights.shortest {
            continue;
        }

        let Some(candidate) = columns
            .column(heights.highest)
            .and_then(|column| column.last().copied())
        else {
            continue;
        };

        let gap = heights.highest_height - heights.shortest_height;
        if ctx.item_height(candidate.id) >= gap {
            continue;
        }

        let Some(item) = columns
            .column_mut(heights.highest)
            .and_then(|column| column.pop())
        else {
            continue;
        };
        if let Some(target) = columns.column_mut(heights.shortest) {
            target.push(item);
            ctx.render
                .attach_item(ctx.container, item.id, heights.shortest);
            report.moved += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                container = %ctx.container,
                item = %item.id,
                from = heights.highest,
                to = heights.shortest,
                "Balanced item"
            );
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        container = %ctx.container,
        spread = initial.spread(),
        moved = report.moved,
        "Balanced columns"
    );

    report
}

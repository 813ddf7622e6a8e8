use lace_traits::{ContainerId, ItemId};

use crate::column::{ColumnSet, PlacedItem};

/// Read-only copy of a grid's column assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub container: ContainerId,
    pub column_count: usize,
    pub columns: Vec<ColumnSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSnapshot {
    pub index: usize,
    pub items: Vec<PlacedItem>,
}

impl LayoutSnapshot {
    pub(crate) fn capture(
        container: ContainerId,
        column_count: usize,
        columns: &ColumnSet,
    ) -> Self {
        let mut columns: Vec<ColumnSnapshot> = columns
            .iter()
            .map(|column| ColumnSnapshot {
                index: column.index(),
                items: column.items().to_vec(),
            })
            .collect();
        columns.sort_by_key(|column| column.index);

        Self {
            container,
            column_count,
            columns,
        }
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|column| column.items.len()).sum()
    }

    pub fn column_of(&self, item: ItemId) -> Option<usize> {
        self.columns
            .iter()
            .find(|column| column.items.iter().any(|placed| placed.id == item))
            .map(|column| column.index)
    }

    /// Item ids per column, in column order
    pub fn item_ids(&self) -> Vec<Vec<ItemId>> {
        self.columns
            .iter()
            .map(|column| column.items.iter().map(|placed| placed.id).collect())
            .collect()
    }

    /// Every sort index currently held, in column then placement order
    pub fn sort_indices(&self) -> Vec<u64> {
        self.columns
            .iter()
            .flat_map(|column| column.items.iter().map(|placed| placed.sort_index))
            .collect()
    }
}

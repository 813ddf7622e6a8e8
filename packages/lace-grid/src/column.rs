//! Column model
//!
//! Columns own their items in placement order. Heights are never stored: they are summed from
//! the metrics provider every time they are asked for, since item content may have been
//! re-measured by the host in between.

use lace_traits::ItemId;

/// An item held by a column together with its stable ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedItem {
    pub id: ItemId,
    pub sort_index: u64,
}

/// One vertical slot of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// 1-based position, the column's identity
    index: usize,
    items: Vec<PlacedItem>,
}

impl Column {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            items: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn push(&mut self, item: PlacedItem) {
        self.items.push(item);
    }

    /// Remove the most recently placed item
    pub(crate) fn pop(&mut self) -> Option<PlacedItem> {
        self.items.pop()
    }

    pub(crate) fn last(&self) -> Option<&PlacedItem> {
        self.items.last()
    }

    fn height(&self, measure: &impl Fn(ItemId) -> f32) -> f32 {
        self.items.iter().map(|item| measure(item.id)).sum()
    }
}

/// Result of a height scan over all columns, see [`ColumnSet::heights`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnHeights {
    pub shortest: usize,
    pub shortest_height: f32,
    pub highest: usize,
    pub highest_height: f32,
}

impl ColumnHeights {
    pub fn spread(&self) -> f32 {
        (self.highest_height - self.shortest_height).abs()
    }
}

/// The ordered set of columns of one grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Columns `1..=count`, all empty
    pub fn with_count(count: usize) -> Self {
        Self {
            columns: (1..=count).map(Column::new).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.columns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.iter().find(|column| column.index == index)
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.index == index)
    }

    /// Total number of items across all columns
    pub fn item_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.column_of(item).is_some()
    }

    /// Index of the column currently holding `item`
    pub fn column_of(&self, item: ItemId) -> Option<usize> {
        self.columns
            .iter()
            .find(|column| column.items.iter().any(|placed| placed.id == item))
            .map(Column::index)
    }

    pub(crate) fn remove_item(&mut self, item: ItemId) -> Option<PlacedItem> {
        self.columns.iter_mut().find_map(|column| {
            let position = column.items.iter().position(|placed| placed.id == item)?;
            Some(column.items.remove(position))
        })
    }

    /// Detach every item, keeping each one's sort index. Columns are left empty.
    pub(crate) fn extract_all(&mut self) -> Vec<PlacedItem> {
        self.columns
            .iter_mut()
            .flat_map(|column| column.items.drain(..))
            .collect()
    }

    /// Find the shortest and highest columns
    ///
    /// Columns are visited in ascending index order regardless of storage order. The first
    /// column seeds both extremes; afterwards a column only replaces the shortest when strictly
    /// lower and the highest when strictly higher, so ties always go to the earlier column.
    pub fn heights(&self, measure: impl Fn(ItemId) -> f32) -> Option<ColumnHeights> {
        let mut ordered: Vec<&Column> = self.columns.iter().collect();
        ordered.sort_by_key(|column| column.index);

        let (first, rest) = ordered.split_first()?;
        let first_height = first.height(&measure);
        let mut heights = ColumnHeights {
            shortest: first.index,
            shortest_height: first_height,
            highest: first.index,
            highest_height: first_height,
        };

        for column in rest {
            let height = column.height(&measure);
            if height < heights.shortest_height {
                heights.shortest = column.index;
                heights.shortest_height = height;
            }
            if height > heights.highest_height {
                heights.highest = column.index;
                heights.highest_height = height;
            }
        }

        Some(heights)
    }
}

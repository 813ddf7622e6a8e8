//! The grid controller: one per container, owning its columns and cross-call state.

use std::collections::HashSet;

use lace_traits::{ContainerId, ItemId, Subscription, TimerHandle};

use crate::balancer::{self, BalanceReport};
use crate::column::{ColumnSet, PlacedItem};
use crate::command::Command;
use crate::config::{GridConfig, GridProviders, Providers, ResolvedConfig};
use crate::debounce::{DebounceState, ResizeDebouncer};
use crate::error::ConfigError;
use crate::layout::assignment::{Rotation, place};
use crate::layout::relayout::{create_columns, dismantle, relayout};
use crate::layout::LayoutContext;
use crate::snapshot::LayoutSnapshot;

fn context<'a>(
    container: ContainerId,
    config: &'a ResolvedConfig,
    providers: &'a Providers,
) -> LayoutContext<'a> {
    LayoutContext {
        container,
        config,
        metrics: &*providers.metrics,
        render: &*providers.render,
    }
}

/// Masonry layout state of a single container
pub struct Grid {
    container: ContainerId,
    config: ResolvedConfig,
    providers: Providers,
    /// Column count derived from the last measured width
    column_count: usize,
    columns: ColumnSet,
    rotation: Rotation,
    debouncer: ResizeDebouncer,
    subscription: Option<Subscription>,
    diagnostics: Vec<ConfigError>,
}

impl Grid {
    /// Build the columns for `container`, pull in existing items and start listening for resizes
    ///
    /// Configuration problems never prevent construction. They are logged, kept in
    /// [`Grid::diagnostics`], and the offending options fall back to defaults.
    pub fn new(container: ContainerId, config: &GridConfig, providers: GridProviders) -> Self {
        let (config, diagnostics) = config.validate();
        for _error in &diagnostics {
            #[cfg(feature = "tracing")]
            tracing::warn!(container = %container, error = %_error, "Grid configuration error");
        }

        let providers = providers.resolve();
        let ctx = context(container, &config, &providers);

        let column_count = ctx.column_count();
        let mut columns = create_columns(&ctx, column_count);
        ctx.render.apply_marker(container);

        let mut rotation = Rotation::new();
        if config.bootstrapped {
            let existing = dedup(ctx.render.query_items(container, &config.selector));
            for (position, id) in existing.into_iter().enumerate() {
                let item = PlacedItem {
                    id,
                    sort_index: rotation.allocate_sort_index(),
                };
                place(&mut columns, &mut rotation, &ctx, item, position);
            }
        }

        if config.balance_on_init {
            balancer::balance(&mut columns, &ctx, config.balance_threshold);
        }
        ctx.apply_centering(column_count);

        let subscription = Some(providers.resize.subscribe(container));
        let debouncer = ResizeDebouncer::new(config.resize_delay);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            container = %container,
            columns = column_count,
            items = columns.item_count(),
            "Grid initialized"
        );

        Self {
            container,
            config,
            providers,
            column_count,
            columns,
            rotation,
            debouncer,
            subscription,
            diagnostics,
        }
    }

    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn item_count(&self) -> usize {
        self.columns.item_count()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.columns.contains(item)
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn debounce_state(&self) -> DebounceState {
        self.debouncer.state()
    }

    /// Configuration errors found at initialization
    pub fn diagnostics(&self) -> &[ConfigError] {
        &self.diagnostics
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::capture(self.container, self.column_count, &self.columns)
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Append(items) => {
                self.append(&items);
            }
            Command::Remove(items) => {
                self.remove(&items);
            }
            Command::RemoveAll => {
                self.remove_all();
            }
            Command::Relayout => self.relayout(),
            Command::Balance => {
                self.balance();
            }
        }
    }

    /// Add new items, continuing the round-robin rotation
    ///
    /// The columns are balanced first, while every item already in them has been measured.
    /// Items the grid already holds are skipped. Returns how many items were placed.
    pub fn append(&mut self, items: &[ItemId]) -> usize {
        let fresh: Vec<ItemId> = dedup(items.iter().copied())
            .into_iter()
            .filter(|item| !self.columns.contains(*item))
            .collect();
        if fresh.is_empty() {
            return 0;
        }

        let ctx = context(self.container, &self.config, &self.providers);
        balancer::balance(&mut self.columns, &ctx, self.config.balance_threshold);

        for (position, id) in fresh.iter().enumerate() {
            let item = PlacedItem {
                id: *id,
                sort_index: self.rotation.allocate_sort_index(),
            };
            place(&mut self.columns, &mut self.rotation, &ctx, item, position);
        }

        fresh.len()
    }

    /// Detach the given items and rebuild the layout without them
    ///
    /// Unknown items are ignored. Returns how many items were removed.
    pub fn remove(&mut self, items: &[ItemId]) -> usize {
        let ctx = context(self.container, &self.config, &self.providers);

        let mut removed = 0;
        for item in items {
            if self.columns.remove_item(*item).is_some() {
                ctx.render.detach_item(self.container, *item);
                removed += 1;
            }
        }

        if removed > 0 {
            relayout(&mut self.columns, &mut self.rotation, self.column_count, &ctx);
        }
        removed
    }

    /// Detach every item and leave empty columns behind
    ///
    /// The structural marker stays in place. The next append starts at column 1 again.
    pub fn remove_all(&mut self) -> usize {
        let ctx = context(self.container, &self.config, &self.providers);

        let removed = dismantle(&mut self.columns, &ctx).len();
        self.columns = create_columns(&ctx, self.column_count);
        self.rotation.restart();

        #[cfg(feature = "tracing")]
        tracing::debug!(container = %self.container, removed, "Removed all items");

        removed
    }

    /// Rebuild the columns at the cached column count and redistribute every item
    pub fn relayout(&mut self) {
        let ctx = context(self.container, &self.config, &self.providers);
        relayout(&mut self.columns, &mut self.rotation, self.column_count, &ctx);
    }

    pub fn balance(&mut self) -> BalanceReport {
        let ctx = context(self.container, &self.config, &self.providers);
        balancer::balance(&mut self.columns, &ctx, self.config.balance_threshold)
    }

    /// Record a resize event, (re)starting the debounce timer
    pub fn on_resize(&mut self) -> TimerHandle {
        self.debouncer.trigger(&*self.providers.timer, self.container)
    }

    /// Handle a fired debounce timer
    ///
    /// Stale handles are ignored. Otherwise the column count is re-derived from the current
    /// width and the layout is rebuilt only if it changed. Returns whether a relayout ran.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if !self.debouncer.fire(handle) {
            #[cfg(feature = "tracing")]
            tracing::trace!(container = %self.container, handle = handle.0, "Ignoring stale timer");
            return false;
        }

        let ctx = context(self.container, &self.config, &self.providers);
        let column_count = ctx.column_count();
        if column_count == self.column_count {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            container = %self.container,
            from = self.column_count,
            to = column_count,
            "Column count changed"
        );

        self.column_count = column_count;
        relayout(&mut self.columns, &mut self.rotation, column_count, &ctx);
        true
    }

    /// Stop listening for resizes, cancel any pending timer and remove the columns
    pub(crate) fn teardown(&mut self) {
        self.debouncer.cancel(&*self.providers.timer);
        if let Some(subscription) = self.subscription.take() {
            self.providers.resize.unsubscribe(subscription);
        }

        let ctx = context(self.container, &self.config, &self.providers);
        dismantle(&mut self.columns, &ctx);
    }
}

/// Drop repeated ids, keeping first occurrences in order
fn dedup(items: impl IntoIterator<Item = ItemId>) -> Vec<ItemId> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}

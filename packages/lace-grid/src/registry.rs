//! Per-container grid storage
//!
//! Grids live in a slab and are found through their container. Every public call validates
//! that the container has been initialized; calls that cannot be honoured are logged and
//! returned as [`UsageError`]s without touching any grid.

use std::collections::HashMap;

use lace_traits::{ContainerId, ItemId, TimerHandle};
use slab::Slab;

use crate::command::Command;
use crate::config::{GridConfig, GridProviders};
use crate::error::{GridResult, UsageError, UsageResult};
use crate::grid::Grid;

#[derive(Default)]
pub struct GridRegistry {
    grids: Slab<Grid>,
    by_container: HashMap<ContainerId, usize>,
}

impl GridRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn contains(&self, container: ContainerId) -> bool {
        self.by_container.contains_key(&container)
    }

    pub fn get(&self, container: ContainerId) -> Option<&Grid> {
        let key = *self.by_container.get(&container)?;
        self.grids.get(key)
    }

    pub fn get_mut(&mut self, container: ContainerId) -> Option<&mut Grid> {
        let key = *self.by_container.get(&container)?;
        self.grids.get_mut(key)
    }

    /// Create the grid for `container`
    ///
    /// A container hosts at most one grid; initializing it twice is a usage error and leaves
    /// the existing grid untouched.
    pub fn init(
        &mut self,
        container: ContainerId,
        config: &GridConfig,
        providers: GridProviders,
    ) -> UsageResult<&mut Grid> {
        if self.by_container.contains_key(&container) {
            return Err(UsageError::AlreadyInitialized { container }.report());
        }

        let key = self.grids.insert(Grid::new(container, config, providers));
        self.by_container.insert(container, key);
        Ok(&mut self.grids[key])
    }

    /// Like [`GridRegistry::init`], but a configuration that needs any default is refused
    pub fn init_strict(
        &mut self,
        container: ContainerId,
        config: &GridConfig,
        providers: GridProviders,
    ) -> GridResult<&mut Grid> {
        config.resolve()?;
        Ok(self.init(container, config, providers)?)
    }

    pub fn dispatch(&mut self, container: ContainerId, command: Command) -> UsageResult<()> {
        let grid = self.grid_mut(command.name(), container)?;
        grid.execute(command);
        Ok(())
    }

    /// Dispatch an operation given by name, e.g. from a scripting bridge
    pub fn dispatch_named(
        &mut self,
        container: ContainerId,
        name: &str,
        items: Vec<ItemId>,
    ) -> UsageResult<()> {
        let command = Command::from_name(name, items).map_err(UsageError::report)?;
        self.dispatch(container, command)
    }

    /// Forward a resize event to the grid's debouncer
    pub fn on_resize(&mut self, container: ContainerId) -> UsageResult<TimerHandle> {
        Ok(self.grid_mut("resize", container)?.on_resize())
    }

    /// Forward a fired timer. Returns whether the grid was laid out again.
    pub fn on_timer(&mut self, container: ContainerId, handle: TimerHandle) -> UsageResult<bool> {
        Ok(self.grid_mut("resize", container)?.on_timer(handle))
    }

    /// Tear down and forget the grid of `container`
    pub fn destroy(&mut self, container: ContainerId) -> UsageResult<()> {
        let Some(key) = self.by_container.remove(&container) else {
            return Err(UsageError::not_initialized("destroy", container).report());
        };
        let mut grid = self.grids.remove(key);
        grid.teardown();

        #[cfg(feature = "tracing")]
        tracing::debug!(container = %container, "Grid destroyed");

        Ok(())
    }

    pub fn containers(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.by_container.keys().copied()
    }

    fn grid_mut(
        &mut self,
        operation: &'static str,
        container: ContainerId,
    ) -> UsageResult<&mut Grid> {
        let key = self
            .by_container
            .get(&container)
            .copied()
            .ok_or_else(|| UsageError::not_initialized(operation, container).report())?;
        Ok(&mut self.grids[key])
    }
}

use lace_grid::{Command, GridConfig};
use lace_traits::{ContainerId, TimerHandle};

/// Everything that can happen to the grids owned by a [`GridDriver`](crate::GridDriver)
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// Create the grid of a container using the driver's providers
    Init {
        container: ContainerId,
        config: GridConfig,
    },
    Command {
        container: ContainerId,
        command: Command,
    },
    Resized(ContainerId),
    TimerFired {
        container: ContainerId,
        handle: TimerHandle,
    },
    Destroy(ContainerId),
    Shutdown,
}

//! Event loop applying [`ShellEvent`]s to a registry of grids

use std::ops::ControlFlow;
use std::sync::Arc;

use flume::{Receiver, Sender};
use lace_grid::{GridProviders, GridRegistry, UsageResult};
use tokio::runtime::Handle;

use crate::error::ShellError;
use crate::event::ShellEvent;
use crate::host::HeadlessHost;
use crate::resize::ChannelResizeSource;
use crate::timer::TokioTimerProvider;

/// Owns the grids and applies events to them one at a time
pub struct GridDriver {
    registry: GridRegistry,
    providers: GridProviders,
    events: Receiver<ShellEvent>,
}

impl GridDriver {
    /// `providers` are handed to every grid created through [`ShellEvent::Init`]
    pub fn new(providers: GridProviders, events: Receiver<ShellEvent>) -> Self {
        Self {
            registry: GridRegistry::new(),
            providers,
            events,
        }
    }

    pub fn registry(&self) -> &GridRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut GridRegistry {
        &mut self.registry
    }

    pub fn into_registry(self) -> GridRegistry {
        self.registry
    }

    /// Apply one event. Breaks on [`ShellEvent::Shutdown`].
    ///
    /// Usage errors (events for containers without a grid, double init) have already been
    /// reported by the registry and are dropped here.
    pub fn handle_event(&mut self, event: ShellEvent) -> ControlFlow<()> {
        let result: UsageResult<()> = match event {
            ShellEvent::Init { container, config } => self
                .registry
                .init(container, &config, self.providers.clone())
                .map(|_| ()),
            ShellEvent::Command { container, command } => {
                self.registry.dispatch(container, command)
            }
            ShellEvent::Resized(container) => self.registry.on_resize(container).map(|_| ()),
            ShellEvent::TimerFired { container, handle } => {
                self.registry.on_timer(container, handle).map(|_| ())
            }
            ShellEvent::Destroy(container) => self.registry.destroy(container),
            ShellEvent::Shutdown => return ControlFlow::Break(()),
        };

        if let Err(_error) = result {
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %_error, "Event dropped");
        }
        ControlFlow::Continue(())
    }

    /// Apply every event already queued, without waiting. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            applied += 1;
            if self.handle_event(event).is_break() {
                break;
            }
        }
        applied
    }

    /// Apply events until [`ShellEvent::Shutdown`], then hand the registry back
    pub async fn run(mut self) -> Result<GridRegistry, ShellError> {
        loop {
            let event = self
                .events
                .recv_async()
                .await
                .map_err(|_| ShellError::Disconnected)?;
            if self.handle_event(event).is_break() {
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(grids = self.registry.len(), "Grid driver stopped");

        Ok(self.registry)
    }
}

/// A headless host, tokio timers and channel resize events wired to one [`GridDriver`]
pub struct Shell {
    pub host: Arc<HeadlessHost>,
    pub resize: Arc<ChannelResizeSource>,
    pub timer: Arc<TokioTimerProvider>,
    events: Sender<ShellEvent>,
}

impl Shell {
    pub fn new(rt: Handle, viewport_width: f32) -> (Self, GridDriver) {
        let (events, receiver) = flume::unbounded();
        let shell = Self {
            host: Arc::new(HeadlessHost::new(viewport_width)),
            resize: Arc::new(ChannelResizeSource::new(events.clone())),
            timer: Arc::new(TokioTimerProvider::new(rt, events.clone())),
            events,
        };
        let driver = GridDriver::new(shell.providers(), receiver);
        (shell, driver)
    }

    /// Build a shell on the runtime of the calling thread
    pub fn current(viewport_width: f32) -> Result<(Self, GridDriver), ShellError> {
        Ok(Self::new(Handle::try_current()?, viewport_width))
    }

    pub fn providers(&self) -> GridProviders {
        GridProviders::default()
            .with_metrics(self.host.clone())
            .with_render(self.host.clone())
            .with_resize(self.resize.clone())
            .with_timer(self.timer.clone())
    }

    pub fn sender(&self) -> Sender<ShellEvent> {
        self.events.clone()
    }

    pub fn send(&self, event: ShellEvent) -> Result<(), ShellError> {
        self.events.send(event).map_err(|_| ShellError::DriverGone)
    }
}

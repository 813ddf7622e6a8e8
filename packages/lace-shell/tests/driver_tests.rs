//! The event driver on a paused tokio clock
//!
//! Each test runs the driver as a task, feeds it events through the shell and lets virtual
//! time pass with `tokio::time::sleep`.

use std::sync::Arc;
use std::time::Duration;

use lace_grid::{Command, GridConfig, GridProviders};
use lace_shell::{GridDriver, HeadlessHost, Shell, ShellError, ShellEvent};
use lace_traits::{ContainerId, ItemId};

const CONTAINER: ContainerId = ContainerId(4);

fn width_for(columns: usize) -> f32 {
    50.0 + 210.0 * columns as f32
}

fn init(container: ContainerId) -> ShellEvent {
    ShellEvent::Init {
        container,
        config: GridConfig::new(".tile", 200.0, 10.0),
    }
}

/// Let the driver drain everything queued so far
async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[cfg(test)]
mod driver_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn init_and_commands_reach_the_grid() {
        let (shell, driver) = Shell::current(1920.0).unwrap();
        shell.host.add_container(CONTAINER, width_for(3));
        for id in 0..4 {
            shell.host.insert_item(CONTAINER, ItemId(id), 100.0);
        }
        let task = tokio::spawn(driver.run());

        shell.send(init(CONTAINER)).unwrap();
        settle().await;
        assert!(shell.resize.is_subscribed(CONTAINER));
        assert_eq!(
            shell.host.column(CONTAINER, 1),
            Some(vec![ItemId(0), ItemId(3)])
        );

        shell.host.insert_item(CONTAINER, ItemId(4), 100.0);
        shell
            .send(ShellEvent::Command {
                container: CONTAINER,
                command: Command::Append(vec![ItemId(4)]),
            })
            .unwrap();
        shell.send(ShellEvent::Shutdown).unwrap();

        let registry = task.await.unwrap().unwrap();
        let snapshot = registry.get(CONTAINER).unwrap().snapshot();
        assert_eq!(snapshot.column_of(ItemId(4)), Some(2));
        assert_eq!(shell.host.column(CONTAINER, 2), Some(vec![ItemId(1), ItemId(4)]));
    }

    #[tokio::test(start_paused = true)]
    async fn resize_burst_is_debounced_into_one_relayout() {
        let (shell, driver) = Shell::current(1920.0).unwrap();
        shell.host.add_container(CONTAINER, width_for(3));
        for id in 0..6 {
            shell.host.insert_item(CONTAINER, ItemId(id), 100.0);
        }
        let task = tokio::spawn(driver.run());
        shell.send(init(CONTAINER)).unwrap();
        settle().await;

        for columns in [5, 1, 4, 2] {
            shell.host.resize_container(CONTAINER, width_for(columns));
            assert!(shell.resize.notify(CONTAINER));
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(shell.timer.pending(), 1);
        assert_eq!(shell.host.columns(CONTAINER).len(), 3, "nothing happens while debouncing");

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(shell.timer.pending(), 0);
        assert_eq!(
            shell.host.column(CONTAINER, 1),
            Some(vec![ItemId(0), ItemId(2), ItemId(4)])
        );
        assert_eq!(shell.host.columns(CONTAINER).len(), 2);

        shell.send(ShellEvent::Shutdown).unwrap();
        let registry = task.await.unwrap().unwrap();
        assert_eq!(registry.get(CONTAINER).unwrap().column_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn viewport_resize_notifies_every_grid() {
        let (shell, driver) = Shell::current(1920.0).unwrap();
        let other = ContainerId(5);
        shell.host.add_container(CONTAINER, width_for(3));
        shell.host.add_container(other, width_for(4));
        let task = tokio::spawn(driver.run());
        shell.send(init(CONTAINER)).unwrap();
        shell.send(init(other)).unwrap();
        settle().await;

        shell.host.resize_container(CONTAINER, width_for(1));
        shell.host.resize_container(other, width_for(2));
        assert_eq!(shell.resize.notify_all(), 2);
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(shell.host.columns(CONTAINER).len(), 1);
        assert_eq!(shell.host.columns(other).len(), 2);

        shell.send(ShellEvent::Shutdown).unwrap();
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn destroy_cancels_the_pending_timer() {
        let (shell, driver) = Shell::current(1920.0).unwrap();
        shell.host.add_container(CONTAINER, width_for(3));
        shell.host.insert_item(CONTAINER, ItemId(0), 100.0);
        let task = tokio::spawn(driver.run());
        shell.send(init(CONTAINER)).unwrap();
        settle().await;

        assert!(shell.resize.notify(CONTAINER));
        settle().await;
        assert_eq!(shell.timer.pending(), 1);

        shell.send(ShellEvent::Destroy(CONTAINER)).unwrap();
        settle().await;
        assert_eq!(shell.timer.pending(), 0);
        assert!(!shell.resize.is_subscribed(CONTAINER));
        assert_eq!(shell.host.loose_items(CONTAINER), vec![ItemId(0)]);

        shell.send(ShellEvent::Shutdown).unwrap();
        let registry = task.await.unwrap().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn events_for_unknown_containers_are_dropped() {
        let host = Arc::new(HeadlessHost::new(1024.0));
        host.add_container(CONTAINER, width_for(2));
        let providers = GridProviders::default()
            .with_metrics(host.clone())
            .with_render(host.clone());
        let (tx, rx) = flume::unbounded();
        let mut driver = GridDriver::new(providers, rx);

        tx.send(ShellEvent::Command {
            container: CONTAINER,
            command: Command::RemoveAll,
        })
        .unwrap();
        tx.send(ShellEvent::Resized(CONTAINER)).unwrap();
        tx.send(init(CONTAINER)).unwrap();
        tx.send(init(CONTAINER)).unwrap();
        tx.send(ShellEvent::Command {
            container: CONTAINER,
            command: Command::Append(vec![ItemId(1)]),
        })
        .unwrap();

        assert_eq!(driver.pump(), 5);
        assert_eq!(driver.registry().len(), 1);
        assert_eq!(driver.registry().get(CONTAINER).unwrap().item_count(), 1);
    }

    #[test]
    fn pump_stops_at_shutdown() {
        let (tx, rx) = flume::unbounded();
        let mut driver = GridDriver::new(GridProviders::default(), rx);

        tx.send(init(CONTAINER)).unwrap();
        tx.send(ShellEvent::Shutdown).unwrap();
        tx.send(ShellEvent::Destroy(CONTAINER)).unwrap();

        assert_eq!(driver.pump(), 2);
        assert!(driver.registry().contains(CONTAINER));
        assert_eq!(driver.pump(), 1);
        assert!(driver.registry().is_empty());
    }

    #[tokio::test]
    async fn sending_after_the_driver_is_gone_fails() {
        let (shell, driver) = Shell::current(1024.0).unwrap();
        drop(driver);

        assert!(matches!(
            shell.send(ShellEvent::Shutdown),
            Err(ShellError::DriverGone)
        ));
        assert!(!shell.resize.notify(CONTAINER));
    }

    #[test]
    fn shell_needs_a_runtime() {
        assert!(matches!(
            Shell::current(1024.0),
            Err(ShellError::NoRuntime(_))
        ));
    }

    #[test]
    fn run_reports_dropped_senders() {
        let (tx, rx) = flume::unbounded();
        let driver = GridDriver::new(GridProviders::default(), rx);
        drop(tx);

        let result = tokio_test::block_on(driver.run());
        assert!(matches!(result, Err(ShellError::Disconnected)));
    }
}

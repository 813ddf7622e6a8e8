use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("no tokio runtime is running on this thread")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("the grid driver has shut down")]
    DriverGone,

    #[error("every event sender was dropped before shutdown")]
    Disconnected,
}

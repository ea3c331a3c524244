use anyhow::Result;
use externals::host_sensors::HostSensorModule;
use internals::core::computer::Computer;
use models::thresholds::Thresholds;
use tasks::diagnostics::task_poll_diagnostics;
use tokio::signal;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::level_filters::LevelFilter;

pub mod externals;
pub mod internals;
pub mod models;
pub mod tasks;

#[tokio::main]
async fn main() -> Result<()> {
    let level = if cfg!(debug_assertions) {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    let tracker = TaskTracker::new();

    let token = CancellationToken::new();

    let HostSensorModule {
        cpu_adapter,
        gpu_adapter,
        ram_adapter,
    } = HostSensorModule::initialize();

    let computer = Computer::new(cpu_adapter, gpu_adapter, ram_adapter);

    let token_clone = token.clone();
    tracker.spawn(async move {
        task_poll_diagnostics(token_clone, &computer, Thresholds::default()).await
    });

    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl_c. Error: {}", e);
    }
    token.cancel();

    tracker.close();
    tracker.wait().await;

    Ok(())
}

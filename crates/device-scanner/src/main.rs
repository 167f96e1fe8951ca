use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use device_scanner::{DeviceScanner, InventorySnapshot, ScanScope, ScannerConfig};
use tokio::signal;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// List attached USB devices and network adapters as JSON.
#[derive(Debug, Parser)]
#[command(name = "device-scanner", version, about)]
struct Cli {
    /// TOML config file (overrides DEVICE_SCANNER_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep scanning until interrupted.
    #[arg(long)]
    watch: bool,

    /// Seconds between scans in watch mode.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    interval_secs: Option<u64>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Only list USB devices.
    #[arg(long, conflicts_with = "adapters_only")]
    devices_only: bool,

    /// Only list network adapters.
    #[arg(long)]
    adapters_only: bool,
}

impl Cli {
    fn scope(&self) -> ScanScope {
        if self.devices_only {
            ScanScope::Devices
        } else if self.adapters_only {
            ScanScope::NetworkAdapters
        } else {
            ScanScope::All
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ScannerConfig::load(cli.config.as_deref())?;
    if let Some(secs) = cli.interval_secs {
        config.refresh_interval_secs = secs;
    }
    if cli.pretty {
        config.pretty = true;
    }

    let scope = cli.scope();
    let scanner = Arc::new(DeviceScanner::from_config(&config));

    if !cli.watch {
        let snapshot = run_scan(Arc::clone(&scanner), scope).await?;
        return print_snapshot(&snapshot, config.pretty);
    }

    info!(
        platform = %scanner.platform(),
        interval_secs = config.refresh_interval_secs,
        "device scanner watching"
    );

    let mut ticker = interval(config.refresh_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            _ = ticker.tick() => {
                let snapshot = run_scan(Arc::clone(&scanner), scope).await?;
                info!(
                    devices = snapshot.devices.len(),
                    connected_devices = snapshot.connected_device_count(),
                    adapters = snapshot.network_adapters.len(),
                    connected_adapters = snapshot.connected_adapter_count(),
                    "scan complete"
                );
                print_snapshot(&snapshot, config.pretty)?;
            }
        }
    }

    info!("device scanner stopped");
    Ok(())
}

/// Scans block on child processes, so they run off the async workers.
async fn run_scan(scanner: Arc<DeviceScanner>, scope: ScanScope) -> Result<InventorySnapshot> {
    tokio::task::spawn_blocking(move || scanner.scan_scope(scope))
        .await
        .context("scan worker panicked")
}

fn print_snapshot(snapshot: &InventorySnapshot, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    }
    .context("failed serializing inventory snapshot")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed writing inventory snapshot")?;
    stdout.flush().context("failed flushing stdout")
}

//! Monitor command handler.
//!
//! Drives one-shot or continuous monitoring: sample, evaluate thresholds,
//! print the report, then optionally email an alert and export the snapshot.
//! Only a configuration error or a fatal sample in one-shot mode aborts the
//! process; everything else is logged and monitoring keeps observing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{error, info, warn};

use crate::core::config::Config;
use crate::core::system_monitor::{
    evaluate_alerts, notify, JsonExporter, MetricSource, SysinfoSource,
};
use crate::ui::report::render_report;

/// Execute the monitor command
pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    let exporter = matches.get_one::<String>("json").map(JsonExporter::new);

    let mut source = SysinfoSource::new();

    if matches.get_flag("once") {
        let mut alert_sent = false;
        run_cycle(&mut source, config, exporter.as_ref(), &mut alert_sent)
            .context("monitoring cycle failed")?;
        return Ok(());
    }

    run_loop(&mut source, config, exporter.as_ref())
}

/// Continuous monitoring loop, repeated every `check_interval` seconds until
/// an interrupt signal is observed between cycles.
pub fn run_loop(
    source: &mut dyn MetricSource,
    config: &Config,
    exporter: Option<&JsonExporter>,
) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    info!("Starting system health monitoring");
    info!("Monitoring interval: {} seconds", config.check_interval);
    info!(
        "Thresholds - CPU: {}%, Memory: {}%, Disk: {}%",
        config.thresholds.cpu, config.thresholds.memory, config.thresholds.disk
    );

    let mut alert_sent = false;
    while running.load(Ordering::SeqCst) {
        if let Err(e) = run_cycle(source, config, exporter, &mut alert_sent) {
            // Keep observing: a failed sample skips the cycle, not the loop
            error!("Monitoring cycle failed: {}", e);
        }

        sleep_interruptibly(config.check_interval, &running);
    }

    info!("Monitoring stopped by user");
    println!("\nSystem monitoring stopped.");
    Ok(())
}

/// One full sample -> evaluate -> report -> notify -> export cycle.
///
/// `alert_sent` is the session alert-sent flag; it is set on the first
/// successful email send and suppresses all later sends this session.
pub fn run_cycle(
    source: &mut dyn MetricSource,
    config: &Config,
    exporter: Option<&JsonExporter>,
    alert_sent: &mut bool,
) -> crate::error::Result<()> {
    let snapshot = source.sample()?;
    let alerts = evaluate_alerts(&snapshot, &config.thresholds);

    println!(
        "{}",
        render_report(&snapshot, &alerts, &config.thresholds, true)
    );
    info!(
        "CPU: {:.1}% | Memory: {:.1}% | Disk: {:.1}%",
        snapshot.cpu.usage_percent, snapshot.memory.usage_percent, snapshot.disk.usage_percent
    );

    if !alerts.is_empty() {
        warn!(
            "System alerts triggered: {} threshold(s) exceeded",
            alerts.len()
        );

        // Alert emails carry the full plain-text report, not just the alerts
        let plain_report = render_report(&snapshot, &alerts, &config.thresholds, false);
        match notify(&alerts, &plain_report, &config.email, *alert_sent) {
            Ok(true) => *alert_sent = true,
            Ok(false) => {}
            Err(e) => error!("Failed to send alert email: {}", e),
        }
    }

    if let Some(exporter) = exporter {
        if let Err(e) = exporter.write(&snapshot, &alerts) {
            error!("{}", e);
        }
    }

    Ok(())
}

/// Sleep in one-second slices so Ctrl+C is honored promptly between cycles.
fn sleep_interruptibly(secs: u64, running: &AtomicBool) {
    for _ in 0..secs {
        if !running.load(Ordering::SeqCst) {
            return;
        }
        std::thread::sleep(Duration::from_secs(1));
    }
}

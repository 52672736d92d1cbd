//! Email alert delivery via SMTP.
//!
//! Sends at most one alert email per monitoring session. The session flag is
//! owned by the run loop and passed in explicitly; a successful send is
//! signalled through the return value so the caller can set it.

use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;

use crate::core::config::EmailConfig;
use crate::error::{MonitorError, Result};

use super::alerts::Alert;

/// Bound on the SMTP connection and send so a hung mail server cannot stall
/// the monitoring loop
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Send an alert email unless delivery is disabled, there is nothing to
/// report, or this session has already alerted.
///
/// Returns `Ok(true)` only when an email was actually sent. Transport
/// failures are returned as [`MonitorError::Notifier`] for the caller to log;
/// monitoring continues either way.
pub fn notify(
    alerts: &[Alert],
    report: &str,
    config: &EmailConfig,
    already_sent: bool,
) -> Result<bool> {
    if !config.enabled || alerts.is_empty() || already_sent {
        return Ok(false);
    }

    send_alert_email(alerts, report, config)?;
    Ok(true)
}

fn send_alert_email(alerts: &[Alert], report: &str, config: &EmailConfig) -> Result<()> {
    let subject = format!(
        "System Health Alert - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );

    let mut body = String::from("System health alert - threshold exceeded\n\nALERTS:\n");
    for alert in alerts {
        body.push_str("  - ");
        body.push_str(&alert.message);
        body.push('\n');
    }
    body.push_str("\nCURRENT SYSTEM STATUS:\n\n");
    body.push_str(report);
    body.push_str("\nPlease investigate and take necessary action.\n");

    let email = Message::builder()
        .from(config.from.parse().map_err(|e| {
            MonitorError::notifier(format!("invalid sender address {:?}: {}", config.from, e))
        })?)
        .to(config.to.parse().map_err(|e| {
            MonitorError::notifier(format!("invalid recipient address {:?}: {}", config.to, e))
        })?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body)
        .map_err(|e| MonitorError::notifier(format!("failed to build message: {}", e)))?;

    let mailer = SmtpTransport::starttls_relay(&config.smtp_server)
        .map_err(|e| {
            MonitorError::notifier(format!(
                "cannot connect to {}:{}: {}",
                config.smtp_server, config.port, e
            ))
        })?
        .port(config.port)
        .credentials(Credentials::new(
            config.username.clone(),
            config.password.clone(),
        ))
        .timeout(Some(SEND_TIMEOUT))
        .build();

    mailer
        .send(&email)
        .map_err(|e| MonitorError::notifier(format!("SMTP send failed: {}", e)))?;

    info!("Alert email sent to {}", config.to);
    Ok(())
}

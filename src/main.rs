//! octetbot - a single-session IRC bot.

use octetbot::{AuditLog, Config, Session, Transport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "octetbot.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "failed to load config");
        e
    })?;

    info!(
        server = %config.server,
        port = config.port,
        nick = %config.nick,
        "connecting"
    );

    let transport = Transport::connect(&config.server, config.port).await?;
    let audit = AuditLog::open(&config.audit_log)?;

    // The loop has no clean exit: whatever ends it is a fatal error and
    // the process exits non-zero.
    match Session::new(&config, transport, audit).run().await {
        Ok(()) => Ok(()),
        Err(err) => {
            error!(error = %err, "session ended");
            Err(err.into())
        }
    }
}

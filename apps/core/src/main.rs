// MediBot Entry Point
// Console launcher: stdin in, stdout out.

use anyhow::Context;
use medibot_core::actors::messages::AppError;
use medibot_core::actors::supervisor::SupervisorHandle;
use medibot_core::actors::sweeper::spawn_session_sweeper;
use medibot_core::bot::MediBot;
use medibot_core::brain::Responder;
use medibot_core::config::BotConfig;
use medibot_core::console::{parse_line, ConsoleInput, ConsoleTransport};
use medibot_core::telemetry;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BotConfig::load().context("Failed to load configuration")?;
    telemetry::init_tracing(config.log_format)?;

    info!("🚀 Starting MediBot...");

    let bot = MediBot::new(Responder::new(), config.fallback_name.clone());
    let transport = Arc::new(ConsoleTransport::stdout());
    let supervisor = SupervisorHandle::new(bot, transport, &config);
    let sweeper = spawn_session_sweeper(supervisor.clone(), config.sweep_interval());

    let display_name = std::env::var("USER").ok();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("🤖 MediBot is now listening for messages...");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read stdin")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        let outcome = match parse_line(&line, display_name.as_deref()) {
            ConsoleInput::Message(message) => supervisor.process_message(message).await.map(drop),
            ConsoleInput::Disconnect => supervisor
                .disconnected()
                .await
                .map(|dropped| info!(dropped, "❌ Client was logged out")),
            ConsoleInput::Sweep => supervisor.clear_sessions().await.map(drop),
            ConsoleInput::Sessions => match supervisor.snapshot().await {
                Ok(sessions) => {
                    println!("{}", serde_json::to_string_pretty(&sessions)?);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            ConsoleInput::Quit => break,
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_supervisor_gone() => return Err(e.into()),
            Err(AppError::Delivery(e)) => error!("Failed to deliver reply: {}", e),
            // The actor keeps working; a late reply may still reach the transport.
            Err(e) => warn!("Request not answered in time: {}", e),
        }
    }

    supervisor.shutdown().await?;
    sweeper.abort();
    info!("MediBot stopped");
    Ok(())
}

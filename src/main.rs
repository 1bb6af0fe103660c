//! Quiz bot - a twenty-questions game host on a social feed
//!
//! Listens for mentions, routes `start` / `submit` / question commands
//! through the quiz state machine and posts the replies.

mod config;
mod elapsed;
mod feed;
mod mention;
mod runtime;
mod state_machine;
mod verdict;

use config::BotConfig;
use feed::FeedClient;
use runtime::spawn_runtime;
use state_machine::{Mention, MessageId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verdict::RngSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quiz_bot=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = BotConfig::from_env()?;
    tracing::info!(uri = %config.uri, streaming_uri = %config.streaming_uri, "Configuration loaded");

    let feed = FeedClient::login(&config).await?;
    let bot_acct = feed.account().acct.clone();

    let quiz = spawn_runtime(feed.clone(), RngSource::from_entropy());

    tracing::info!("Monitoring stream");
    let mut stream = feed.stream_notifications().await?;

    while let Some(notification) = stream.next().await {
        let notification = notification?;
        tracing::info!(
            account = %notification.account.acct,
            kind = %notification.kind,
            "Notification received"
        );

        let Some(status) = notification.mention_status() else {
            continue;
        };
        let Some(command) = mention::extract_command(&status.content, &bot_acct) else {
            continue;
        };
        tracing::info!(command = %command, from = %status.account.acct, "Command received");

        quiz.send_mention(Mention {
            sender: status.account.acct.clone(),
            body: command,
            message_id: MessageId::new(status.id.clone()),
        })
        .await?;
    }

    tracing::error!("Notification stream closed by server");
    let round = quiz.shutdown().await?;
    tracing::info!(active = round.is_active(), "Quiz runtime drained");

    Err("notification stream closed".into())
}

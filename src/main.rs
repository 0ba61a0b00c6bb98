use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing::level_filters::LevelFilter;

use twitch_live_notifier::{
    CompositeEventHandler, Config, ConsoleEventHandler, DiscordEventHandler, DiscordNotifier,
    HelixDataProvider, LiveTracker,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let config = Config::from_env()?;

        let provider = Arc::new(HelixDataProvider::new(config.twitch_client_id.clone()));

        let user_id = config.resolve_broadcaster_id(provider.as_ref()).await?;
        info!("Tracking Twitch broadcaster id {}", user_id);

        // Phase one: make sure the destination channel exists before any
        // polling starts.
        let notifier =
            DiscordNotifier::new(config.discord_token.clone(), config.discord_channel_id);
        let channel_name = notifier
            .verify_channel()
            .await
            .context("Discord channel lookup failed")?;
        info!("Sending notifications in #{}", channel_name);

        let mut handlers = CompositeEventHandler::new();
        handlers.add_handler(Arc::new(ConsoleEventHandler::new()));
        handlers.add_handler(Arc::new(DiscordEventHandler::new(notifier)));

        let tracker = Arc::new(LiveTracker::new(user_id, provider, Arc::new(handlers)));

        // Phase two: start the poll loop.
        let poll_interval = config.poll_interval;
        let tracker_for_task = tracker.clone();
        tokio::spawn(async move {
            tracker_for_task.run(poll_interval).await;
        });

        info!("Live notifier is running. Press Ctrl+C to stop.");
        tokio::signal::ctrl_c().await?;
        info!("Shutting down...");

        Ok(())
    })
}

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::event::LiveEvent;
use crate::models::stream::StreamStatus;
use crate::traits::event_handler::LiveEventHandler;
use crate::traits::stream_provider::StreamDataProvider;

/// Believed broadcaster state between polls.
///
/// `initialized` stays false until one poll has completed, so the first
/// reading only seeds the baseline and never produces an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub is_live: bool,
    pub initialized: bool,
}

/// Main live-state tracker
pub struct LiveTracker {
    user_id: String,
    provider: Arc<dyn StreamDataProvider>,
    event_handler: Arc<dyn LiveEventHandler>,
    state: Mutex<TrackerState>,
}

impl LiveTracker {
    /// Create a new live tracker
    pub fn new(
        user_id: String,
        provider: Arc<dyn StreamDataProvider>,
        event_handler: Arc<dyn LiveEventHandler>,
    ) -> Self {
        Self {
            user_id,
            provider,
            event_handler,
            state: Mutex::new(TrackerState::default()),
        }
    }

    /// Get tracked broadcaster id
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Get the current tracker state
    pub async fn state(&self) -> TrackerState {
        *self.state.lock().await
    }

    /// Run one poll cycle.
    ///
    /// Returns `Some(LiveEvent)` exactly when the broadcaster went from
    /// not-live to live and the baseline is already established. State is
    /// only committed after every fetch of the cycle succeeded; a failed
    /// cycle leaves it untouched so the next one retries the transition.
    pub async fn poll(&self) -> anyhow::Result<Option<LiveEvent>> {
        debug!("Querying stream status for {}", self.user_id);
        let prior = *self.state.lock().await;

        let stream = self.provider.fetch_stream(&self.user_id).await?;
        let currently_live = stream.as_ref().map(StreamStatus::is_live).unwrap_or(false);

        let mut event = None;
        match stream {
            Some(stream) if currently_live => {
                if !prior.is_live && prior.initialized {
                    let game = if stream.game_id.is_empty() {
                        None
                    } else {
                        self.provider.fetch_game(&stream.game_id).await?
                    };
                    event = Some(LiveEvent::new(stream, game));
                }
            }
            _ => debug!("Stream offline"),
        }

        let mut state = self.state.lock().await;
        state.is_live = currently_live;
        state.initialized = true;

        Ok(event)
    }

    /// Start polling on a fixed cadence: poll, then wait, forever.
    ///
    /// Poll failures are routed to the event handler and never break the
    /// loop; the sleep is not adjusted for poll duration.
    pub async fn run(&self, interval: Duration) {
        info!(
            "Tracking broadcaster {} every {}s",
            self.user_id,
            interval.as_secs()
        );

        loop {
            match self.poll().await {
                Ok(Some(event)) => {
                    self.event_handler.handle_live_event(&event).await;
                }
                Ok(None) => {}
                Err(e) => {
                    self.event_handler.handle_error(&e).await;
                }
            }

            tokio::time::sleep(interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::game::Game;

    struct ScriptedProvider {
        streams: StdMutex<VecDeque<anyhow::Result<Option<StreamStatus>>>>,
        games: StdMutex<VecDeque<anyhow::Result<Option<Game>>>>,
        game_calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(streams: Vec<anyhow::Result<Option<StreamStatus>>>) -> Self {
            Self {
                streams: StdMutex::new(streams.into()),
                games: StdMutex::new(VecDeque::new()),
                game_calls: AtomicUsize::new(0),
            }
        }

        fn with_games(self, games: Vec<anyhow::Result<Option<Game>>>) -> Self {
            *self.games.lock().unwrap() = games.into();
            self
        }
    }

    #[async_trait]
    impl StreamDataProvider for ScriptedProvider {
        async fn fetch_stream(&self, _user_id: &str) -> anyhow::Result<Option<StreamStatus>> {
            self.streams
                .lock()
                .unwrap()
                .pop_front()
                .expect("test script ran out of stream responses")
        }

        async fn fetch_game(&self, _game_id: &str) -> anyhow::Result<Option<Game>> {
            self.game_calls.fetch_add(1, Ordering::SeqCst);
            self.games
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Some(default_game())))
        }

        async fn resolve_user(&self, _login: &str) -> anyhow::Result<Option<String>> {
            Ok(Some("1234".to_string()))
        }
    }

    struct NullHandler;

    #[async_trait]
    impl LiveEventHandler for NullHandler {
        async fn handle_live_event(&self, _event: &LiveEvent) {}
        async fn handle_error(&self, _error: &anyhow::Error) {}
    }

    fn default_game() -> Game {
        Game { id: "494131".to_string(), name: "Little Nightmares".to_string() }
    }

    fn live_stream() -> StreamStatus {
        StreamStatus {
            user_id: "1234".to_string(),
            user_name: "streamer".to_string(),
            stream_type: "live".to_string(),
            title: "a title".to_string(),
            game_id: "494131".to_string(),
        }
    }

    fn live() -> anyhow::Result<Option<StreamStatus>> {
        Ok(Some(live_stream()))
    }

    fn offline() -> anyhow::Result<Option<StreamStatus>> {
        Ok(None)
    }

    fn fetch_failure() -> anyhow::Result<Option<StreamStatus>> {
        Err(anyhow::anyhow!("connection reset"))
    }

    fn tracker(provider: ScriptedProvider) -> LiveTracker {
        LiveTracker::new("1234".to_string(), Arc::new(provider), Arc::new(NullHandler))
    }

    #[tokio::test]
    async fn first_poll_live_emits_no_event() {
        let tracker = tracker(ScriptedProvider::new(vec![live(), live()]));

        assert!(tracker.poll().await.unwrap().is_none());
        // Still nothing while continuously live.
        assert!(tracker.poll().await.unwrap().is_none());

        let state = tracker.state().await;
        assert!(state.is_live);
        assert!(state.initialized);
    }

    #[tokio::test]
    async fn one_event_per_offline_to_live_edge() {
        let script = vec![
            offline(),
            offline(),
            live(),
            live(),
            live(),
            offline(),
            live(),
        ];
        let tracker = tracker(ScriptedProvider::new(script));

        let mut fired = Vec::new();
        for _ in 0..7 {
            fired.push(tracker.poll().await.unwrap().is_some());
        }

        assert_eq!(fired, vec![false, false, true, false, false, false, true]);
    }

    #[tokio::test]
    async fn game_lookup_miss_falls_back_to_unknown() {
        let provider =
            ScriptedProvider::new(vec![offline(), live()]).with_games(vec![Ok(None)]);
        let tracker = tracker(provider);

        tracker.poll().await.unwrap();
        let event = tracker.poll().await.unwrap().expect("transition expected");

        assert_eq!(event.game_name(), "unknown");
    }

    #[tokio::test]
    async fn status_fetch_failure_leaves_state_unchanged() {
        let tracker =
            tracker(ScriptedProvider::new(vec![offline(), fetch_failure(), live()]));

        tracker.poll().await.unwrap();
        let before = tracker.state().await;

        assert!(tracker.poll().await.is_err());
        assert_eq!(tracker.state().await, before);

        // The next cycle behaves as if the failed one never happened.
        let event = tracker.poll().await.unwrap();
        assert!(event.is_some());
    }

    #[tokio::test]
    async fn game_fetch_failure_aborts_cycle_and_transition_retries() {
        let provider = ScriptedProvider::new(vec![offline(), live(), live()])
            .with_games(vec![Err(anyhow::anyhow!("boom")), Ok(Some(default_game()))]);
        let tracker = tracker(provider);

        tracker.poll().await.unwrap();
        let before = tracker.state().await;

        assert!(tracker.poll().await.is_err());
        assert_eq!(tracker.state().await, before);

        let event = tracker.poll().await.unwrap().expect("transition retried");
        assert_eq!(event.game_name(), "Little Nightmares");
    }

    #[tokio::test]
    async fn empty_game_id_skips_lookup() {
        let mut stream = live_stream();
        stream.game_id = String::new();

        let provider = Arc::new(ScriptedProvider::new(vec![offline(), Ok(Some(stream))]));
        let tracker = LiveTracker::new(
            "1234".to_string(),
            provider.clone(),
            Arc::new(NullHandler),
        );

        tracker.poll().await.unwrap();
        let event = tracker.poll().await.unwrap().expect("transition expected");

        assert_eq!(event.game_name(), "unknown");
        assert_eq!(provider.game_calls.load(Ordering::SeqCst), 0);
    }
}

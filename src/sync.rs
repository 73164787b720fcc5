//! Background refresh scheduler for the review collection
//!
//! Spawns a tokio task that fetches the reviews endpoint immediately and
//! then on a fixed interval, sending each outcome to the main application
//! over an mpsc channel. Fetch attempts run as their own tasks, so a slow
//! attempt can still be outstanding when the next tick fires; outcomes are
//! applied in completion order (last settled wins).

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::data::{Review, ReviewsClient};

/// Outcome of one fetch attempt, sent from the scheduler to the main app
#[derive(Debug, Clone)]
pub enum RefreshMessage {
    /// A fetch settled successfully with the full collection
    ReviewsUpdated(Vec<Review>),
    /// A fetch settled with an error; the displayed data is left alone
    RefreshFailed(String),
}

/// Configuration for the refresh scheduler
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Interval between fetch attempts
    pub interval: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(5000),
        }
    }
}

/// Handle for controlling the background refresh task
///
/// Dropping or shutting down the handle closes the message channel, so
/// in-flight fetches that settle afterwards send into a closed channel and
/// their results are discarded. No state mutation can happen after teardown
/// because all mutations flow through this channel.
pub struct RefreshHandle {
    /// Channel carrying fetch outcomes to the main app
    pub receiver: mpsc::Receiver<RefreshMessage>,
    /// Signals the tick loop to stop
    shutdown_tx: mpsc::Sender<()>,
    /// Requests an out-of-band fetch attempt
    refresh_tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Spawns the background refresh task and returns a handle to it
    ///
    /// The task issues an immediate fetch attempt, then one per interval
    /// tick. Each attempt is spawned separately so attempts are not
    /// mutually exclusive.
    ///
    /// # Arguments
    /// * `config` - Refresh interval configuration
    /// * `client` - The reviews API client to fetch with
    pub fn spawn(config: RefreshConfig, client: ReviewsClient) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(32);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(config.interval);
            // The first tick fires immediately, giving the initial fetch.

            loop {
                tokio::select! {
                    // A pending shutdown must win over a ready tick, so no
                    // attempt is ever issued after shutdown() returns.
                    biased;

                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = interval.tick() => {
                        spawn_fetch(&client, &msg_tx);
                    }
                    Some(()) = refresh_rx.recv() => {
                        spawn_fetch(&client, &msg_tx);
                    }
                }
            }
        });

        Self {
            receiver: msg_rx,
            shutdown_tx,
            refresh_tx,
        }
    }

    /// Requests an immediate fetch attempt outside the regular cadence
    ///
    /// Ignored if a manual request is already pending.
    pub fn request_refresh(&self) {
        let _ = self.refresh_tx.try_send(());
    }

    /// Shuts down the refresh task
    ///
    /// After this returns, no further tick is scheduled and the message
    /// channel is closed, so late completions are discarded.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        // Receiver drops here, closing the channel.
    }
}

/// Spawns one fetch attempt that reports its outcome on the channel
fn spawn_fetch(client: &ReviewsClient, tx: &mpsc::Sender<RefreshMessage>) {
    let client = client.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let message = match client.fetch_reviews().await {
            Ok(reviews) => RefreshMessage::ReviewsUpdated(reviews),
            Err(e) => {
                warn!(error = %e, endpoint = client.endpoint(), "review fetch failed");
                RefreshMessage::RefreshFailed(e.to_string())
            }
        };
        // Send fails only after shutdown; the result is then discarded.
        let _ = tx.send(message).await;
    });
}

/// Checks for a pending refresh message without blocking
///
/// # Returns
/// * `Some(RefreshMessage)` if a message was available
/// * `None` if no messages are pending
pub fn try_recv(handle: &mut RefreshHandle) -> Option<RefreshMessage> {
    handle.receiver.try_recv().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_config_default_interval_is_5s() {
        let config = RefreshConfig::default();
        assert_eq!(config.interval, Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn test_spawn_delivers_failure_outcome() {
        // Nothing listens on port 1, so the first attempt settles as a
        // failure message rather than hanging or panicking.
        let config = RefreshConfig {
            interval: Duration::from_secs(60),
        };
        let client = ReviewsClient::new("http://127.0.0.1:1/api/reviews");
        let mut handle = RefreshHandle::spawn(config, client);

        let msg = tokio::time::timeout(Duration::from_secs(10), handle.receiver.recv())
            .await
            .expect("Timed out waiting for refresh message")
            .expect("Channel closed before first outcome");

        match msg {
            RefreshMessage::RefreshFailed(reason) => {
                assert!(!reason.is_empty());
            }
            RefreshMessage::ReviewsUpdated(_) => panic!("Expected a failure outcome"),
        }

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_manual_refresh_triggers_additional_attempt() {
        let config = RefreshConfig {
            interval: Duration::from_secs(60),
        };
        let client = ReviewsClient::new("http://127.0.0.1:1/api/reviews");
        let mut handle = RefreshHandle::spawn(config, client);

        // Initial attempt.
        let first = tokio::time::timeout(Duration::from_secs(10), handle.receiver.recv())
            .await
            .expect("Timed out waiting for initial outcome");
        assert!(first.is_some());

        // Manual attempt, well before the 60s tick.
        handle.request_refresh();
        let second = tokio::time::timeout(Duration::from_secs(10), handle.receiver.recv())
            .await
            .expect("Timed out waiting for manual refresh outcome");
        assert!(second.is_some());

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_tick_loop() {
        let config = RefreshConfig {
            interval: Duration::from_millis(10),
        };
        let client = ReviewsClient::new("http://127.0.0.1:1/api/reviews");
        let RefreshHandle {
            mut receiver,
            shutdown_tx,
            refresh_tx: _refresh_tx,
        } = RefreshHandle::spawn(config, client);

        // Let at least one attempt settle first.
        let first = tokio::time::timeout(Duration::from_secs(10), receiver.recv())
            .await
            .expect("Timed out waiting for an outcome");
        assert!(first.is_some());

        shutdown_tx
            .send(())
            .await
            .expect("Failed to signal shutdown");

        // The tick loop breaks and drops its sender; attempts already in
        // flight drain out, then the channel closes. A loop that kept
        // ticking would keep the channel open and produce outcomes forever.
        let drained = tokio::time::timeout(Duration::from_secs(10), async {
            while receiver.recv().await.is_some() {}
        })
        .await;
        assert!(
            drained.is_ok(),
            "No further tick may fire after shutdown; channel should close"
        );
    }

    #[tokio::test]
    async fn test_try_recv_returns_none_when_no_message_pending() {
        let config = RefreshConfig {
            interval: Duration::from_secs(60),
        };
        let client = ReviewsClient::new("http://127.0.0.1:1/api/reviews");
        let mut handle = RefreshHandle::spawn(config, client);

        // The first attempt has not had time to settle yet.
        assert!(try_recv(&mut handle).is_none());

        handle.shutdown().await;
    }
}

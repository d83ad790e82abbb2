//! Campaign status polling.
//!
//! A watched campaign is fetched once immediately and then again on every
//! tick of a fixed-period timer while its last known status is not terminal.
//! Ticks are counted from request start, so a slow response does not stretch
//! the period. `pending` counts as non-terminal along with `processing`: a
//! freshly queued campaign keeps being polled until the pipeline picks it up.
//! Each watch runs as
//! its own task tagged with a generation ticket; starting a new watch or
//! stopping aborts the task and invalidates the ticket, so a response that
//! arrives late is never forwarded to the frontend.

use std::time::Duration;

use adcraft_bridge::{
    MessageFromBackend, campaign::CampaignState, notification::NotificationMessage,
};
use tokio::{
    sync::mpsc::Sender,
    task::JoinHandle,
    time::{MissedTickBehavior, interval as tick_every},
};

use crate::{
    api::CampaignApi,
    generation::{GenerationCounter, Ticket},
};

#[derive(Debug)]
pub struct StatusPoller {
    interval: Duration,
    generation: GenerationCounter,
    task: Option<JoinHandle<()>>,
}

impl StatusPoller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: GenerationCounter::default(),
            task: None,
        }
    }

    /// Starts polling `campaign_id`, replacing any previous watch.
    pub fn watch<A>(&mut self, api: A, campaign_id: String, tx: Sender<MessageFromBackend>)
    where
        A: CampaignApi + Clone + 'static,
    {
        self.abort_task();
        let ticket = self.generation.advance();
        log::info!("Watching campaign {campaign_id}");
        self.task = Some(tokio::spawn(poll_campaign(
            api,
            campaign_id,
            tx,
            self.generation.clone(),
            ticket,
            self.interval,
        )));
    }

    /// Tears the current watch down. Nothing is sent for it afterwards.
    pub fn stop(&mut self) {
        self.generation.advance();
        if self.abort_task() {
            log::info!("Stopped watching campaign status");
        }
    }

    /// True from a `watch` until the next `stop`, even if the poll loop has
    /// already finished on a terminal status.
    #[cfg(test)]
    pub fn is_watching(&self) -> bool {
        self.task.is_some()
    }

    fn abort_task(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.abort_task();
    }
}

async fn poll_campaign<A: CampaignApi>(
    api: A,
    campaign_id: String,
    tx: Sender<MessageFromBackend>,
    generation: GenerationCounter,
    ticket: Ticket,
    interval: Duration,
) {
    let mut last_known: Option<CampaignState> = None;
    let mut ticks = tick_every(interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;
        let result = api.campaign_status(&campaign_id).await;
        if !generation.is_current(ticket) {
            log::debug!("Discarding stale status response for campaign {campaign_id}");
            return;
        }

        let message = match result {
            Ok(status) => {
                log::debug!("Campaign {campaign_id} is {:?}", status.status);
                last_known = Some(status.status);
                MessageFromBackend::CampaignStatusUpdate(status)
            }
            Err(error) => {
                log::error!("Failed to poll campaign {campaign_id}: {error}");
                MessageFromBackend::NotificationMessage(NotificationMessage::error(format!(
                    "Error: {error}"
                )))
            }
        };

        if tx.send(message).await.is_err() {
            log::warn!("Frontend bridge closed, stopping status polling");
            return;
        }

        match last_known {
            Some(state) if !state.is_terminal() => {}
            Some(state) => {
                log::info!("Campaign {campaign_id} reached {state:?}, polling stopped");
                return;
            }
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use adcraft_bridge::campaign::CampaignStatus;
    use tokio::sync::mpsc::{self, Receiver, error::TryRecvError};

    use super::*;
    use crate::testing::FakeApi;

    const INTERVAL: Duration = Duration::from_secs(3);

    fn drain_statuses(rx: &mut Receiver<MessageFromBackend>) -> Vec<CampaignStatus> {
        let mut statuses = Vec::new();
        while let Ok(message) = rx.try_recv() {
            if let MessageFromBackend::CampaignStatusUpdate(status) = message {
                statuses.push(status);
            }
        }
        statuses
    }

    #[tokio::test(start_paused = true)]
    async fn stops_once_completed_is_observed() {
        let api = FakeApi::default();
        api.script_statuses(
            "ab12cd34",
            [
                Ok(CampaignState::Pending),
                Ok(CampaignState::Processing),
                Ok(CampaignState::Completed),
            ],
        );
        let (tx, mut rx) = mpsc::channel(64);
        let mut poller = StatusPoller::new(INTERVAL);

        poller.watch(api.clone(), "ab12cd34".into(), tx.clone());
        tokio::time::sleep(Duration::from_secs(60)).await;

        let states: Vec<_> = drain_statuses(&mut rx)
            .into_iter()
            .map(|status| status.status)
            .collect();
        assert_eq!(
            states,
            vec![
                CampaignState::Pending,
                CampaignState::Processing,
                CampaignState::Completed
            ]
        );
        assert_eq!(api.status_calls("ab12cd34").len(), 3);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_polling_processing_campaign_until_stopped() {
        let api = FakeApi::default();
        api.script_statuses("ab12cd34", [Ok(CampaignState::Processing)]);
        let (tx, mut rx) = mpsc::channel(64);
        let mut poller = StatusPoller::new(INTERVAL);

        let started = tokio::time::Instant::now();
        poller.watch(api.clone(), "ab12cd34".into(), tx.clone());
        tokio::time::sleep(Duration::from_secs(10)).await;

        let calls = api.status_calls("ab12cd34");
        assert!(calls.len() >= 4, "expected a request per window, got {calls:?}");
        let mut previous = started;
        for call in &calls {
            assert!(*call - previous <= INTERVAL);
            previous = *call;
        }

        poller.stop();
        let calls_at_stop = calls.len();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(api.status_calls("ab12cd34").len(), calls_at_stop);
        assert_eq!(drain_statuses(&mut rx).len(), calls_at_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_responses_do_not_stretch_the_period() {
        let api = FakeApi::default();
        api.script_statuses("ab12cd34", [Ok(CampaignState::Processing)]);
        api.delay_statuses("ab12cd34", Duration::from_secs(1));
        let (tx, _rx) = mpsc::channel(64);
        let mut poller = StatusPoller::new(INTERVAL);

        let started = tokio::time::Instant::now();
        poller.watch(api.clone(), "ab12cd34".into(), tx);
        tokio::time::sleep(Duration::from_millis(13_500)).await;
        poller.stop();

        let offsets: Vec<_> = api
            .status_calls("ab12cd34")
            .into_iter()
            .map(|call| (call - started).as_secs())
            .collect();
        assert_eq!(offsets, vec![0, 3, 6, 9, 12]);
    }

    #[tokio::test(start_paused = true)]
    async fn response_slower_than_the_period_is_followed_at_once() {
        let api = FakeApi::default();
        api.script_statuses("ab12cd34", [Ok(CampaignState::Processing)]);
        api.delay_statuses("ab12cd34", Duration::from_secs(4));
        let (tx, _rx) = mpsc::channel(64);
        let mut poller = StatusPoller::new(INTERVAL);

        let started = tokio::time::Instant::now();
        poller.watch(api.clone(), "ab12cd34".into(), tx);
        tokio::time::sleep(Duration::from_millis(8_500)).await;
        poller.stop();

        let offsets: Vec<_> = api
            .status_calls("ab12cd34")
            .into_iter()
            .map(|call| (call - started).as_secs())
            .collect();
        assert_eq!(offsets, vec![0, 4, 8]);
    }

    #[tokio::test(start_paused = true)]
    async fn switching_campaigns_drops_the_previous_watch() {
        let api = FakeApi::default();
        api.script_statuses("aaaa0001", [Ok(CampaignState::Processing)]);
        api.delay_statuses("aaaa0001", Duration::from_secs(5));
        api.script_statuses("bbbb0002", [Ok(CampaignState::Completed)]);
        let (tx, mut rx) = mpsc::channel(64);
        let mut poller = StatusPoller::new(INTERVAL);

        poller.watch(api.clone(), "aaaa0001".into(), tx.clone());
        tokio::time::sleep(Duration::from_secs(1)).await;
        poller.watch(api.clone(), "bbbb0002".into(), tx.clone());
        tokio::time::sleep(Duration::from_secs(30)).await;

        let ids: Vec<_> = drain_statuses(&mut rx)
            .into_iter()
            .map(|status| status.campaign_id)
            .collect();
        assert_eq!(ids, vec!["bbbb0002".to_owned()]);
    }

    #[tokio::test(start_paused = true)]
    async fn first_failure_is_reported_and_ends_polling() {
        let api = FakeApi::default();
        api.script_statuses("ab12cd34", [Err(())]);
        let (tx, mut rx) = mpsc::channel(64);
        let mut poller = StatusPoller::new(INTERVAL);

        poller.watch(api.clone(), "ab12cd34".into(), tx.clone());
        tokio::time::sleep(Duration::from_secs(30)).await;

        assert_eq!(api.status_calls("ab12cd34").len(), 1);
        match rx.try_recv() {
            Ok(MessageFromBackend::NotificationMessage(notification)) => {
                assert!(notification.message.starts_with("Error: failed to get campaign status"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failure_while_processing_keeps_polling() {
        let api = FakeApi::default();
        api.script_statuses(
            "ab12cd34",
            [
                Ok(CampaignState::Processing),
                Err(()),
                Ok(CampaignState::Failed),
            ],
        );
        let (tx, mut rx) = mpsc::channel(64);
        let mut poller = StatusPoller::new(INTERVAL);

        poller.watch(api.clone(), "ab12cd34".into(), tx.clone());
        tokio::time::sleep(Duration::from_secs(30)).await;

        assert_eq!(api.status_calls("ab12cd34").len(), 3);
        let states: Vec<_> = drain_statuses(&mut rx)
            .into_iter()
            .map(|status| status.status)
            .collect();
        assert_eq!(states, vec![CampaignState::Processing, CampaignState::Failed]);
    }
}

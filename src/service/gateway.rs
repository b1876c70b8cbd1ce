//! Fire-and-forget dispatch of chat service requests.
//!
//! Each request runs on its own detached worker thread; the outcome is
//! posted back to the shell event loop over an mpsc channel. There is no
//! retry, timeout, or cancellation, and completions are delivered in
//! whatever order the responses arrive.

use std::{
    sync::{mpsc::Sender, Arc},
    thread,
};

use crate::{domain::events::ServiceEvent, usecases::contracts::ChatGateway};

use super::client::ChatService;

pub struct ThreadedChatGateway<S>
where
    S: ChatService + Send + Sync + 'static,
{
    service: Arc<S>,
    events: Sender<ServiceEvent>,
}

impl<S> ThreadedChatGateway<S>
where
    S: ChatService + Send + Sync + 'static,
{
    pub fn new(service: S, events: Sender<ServiceEvent>) -> Self {
        Self {
            service: Arc::new(service),
            events,
        }
    }

    fn dispatch<W>(&self, thread_name: &str, work: W, fallback: ServiceEvent)
    where
        W: FnOnce(&S) -> ServiceEvent + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();

        let spawned = thread::Builder::new()
            .name(thread_name.to_owned())
            .spawn(move || {
                let event = work(service.as_ref());
                // The receiver is gone when the shell already shut down.
                let _ = events.send(event);
            });

        if let Err(error) = spawned {
            tracing::error!(error = %error, thread = thread_name, "failed to spawn request worker");
            let _ = self.events.send(fallback);
        }
    }
}

impl<S> ChatGateway for ThreadedChatGateway<S>
where
    S: ChatService + Send + Sync + 'static,
{
    fn post_message(&self, text: &str) {
        let text = text.to_owned();
        self.dispatch(
            "mindchat-chat-request",
            move |service| match service.send_chat(&text) {
                Ok(reply) => ServiceEvent::ReplyArrived(reply),
                Err(error) => {
                    tracing::warn!(error = %error, "chat exchange failed");
                    ServiceEvent::ReplyFailed
                }
            },
            ServiceEvent::ReplyFailed,
        );
    }

    fn request_summary(&self) {
        self.dispatch(
            "mindchat-summary-request",
            |service| match service.fetch_summary() {
                Ok(summary) => ServiceEvent::SummaryArrived(summary),
                Err(error) => {
                    tracing::warn!(error = %error, "summary fetch failed");
                    ServiceEvent::SummaryFailed
                }
            },
            ServiceEvent::SummaryFailed,
        );
    }
}

use crate::api;
use crate::chat_message::{ChatMessage, Sender};
use crate::constants::FALLBACK_REPLY;
use crate::errors::ObrolanResult;
use crate::status_indicator::StatusIndicator;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Scroll value meaning "pinned to the newest message". The view clamps it
/// to the real maximum once the viewport size is known.
pub const SCROLL_BOTTOM: u16 = u16::MAX;

/// The chat widget: an append-only transcript, the input line, and one
/// round-trip per submission. The transcript is the source of truth; the
/// view re-renders it every frame.
pub struct ChatWidget {
    backend_url: String,
    client: Client,
    pub transcript: Vec<ChatMessage>,
    pub input: String,
    pub scroll: u16,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
}

impl ChatWidget {
    pub fn new(backend_url: String) -> Self {
        Self {
            backend_url,
            client: Client::new(),
            transcript: Vec::new(),
            input: String::new(),
            scroll: 0,
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = SCROLL_BOTTOM;
    }

    /// Submits the current input as one chat round-trip.
    ///
    /// Whitespace-only input is a no-op: nothing is rendered and no request
    /// goes out. Otherwise the user bubble is appended and the input cleared
    /// before the request is issued, so the outgoing message is visible even
    /// when the backend never answers. A JSON answer without a usable
    /// `reply` becomes the fallback bubble; transport failures propagate to
    /// the caller and append nothing.
    ///
    /// Submissions share the widget behind a lock but the request itself is
    /// awaited outside of it, so several may be in flight at once; replies
    /// append in arrival order.
    pub async fn submit_message(widget: Arc<Mutex<ChatWidget>>) -> ObrolanResult<()> {
        let (text, client, backend_url) = {
            let mut guard = widget.lock().await;
            let text = guard.input.trim().to_string();
            if text.is_empty() {
                return Ok(());
            }

            guard
                .transcript
                .push(ChatMessage::new(Sender::User, text.clone()));
            guard.input.clear();
            guard.status_indicator.set_thinking(true);
            guard.status_indicator.set_status("Menunggu balasan...");

            (text, guard.client.clone(), guard.backend_url.clone())
        };

        let result = api::send_chat_message(&client, &backend_url, &text).await;

        let mut guard = widget.lock().await;
        guard.status_indicator.set_thinking(false);

        let reply = result?;
        let reply = reply.unwrap_or_else(|| FALLBACK_REPLY.to_string());
        guard.transcript.push(ChatMessage::new(Sender::Bot, reply));
        guard.scroll_to_bottom();

        Ok(())
    }
}

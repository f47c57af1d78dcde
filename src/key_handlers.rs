use crate::chat_widget::ChatWidget;
use crate::constants::TRANSCRIPT_FILE;
use crate::transcript::export_transcript;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handles one key event. Returns `true` when the application should quit.
///
/// Enter spawns the submission instead of awaiting it, so the event loop
/// keeps drawing while the request is in flight and rapid sends may overlap.
pub async fn handle_chat_input(key: KeyEvent, widget: &Arc<Mutex<ChatWidget>>) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Enter => {
            let clone = Arc::clone(widget);
            tokio::spawn(async move {
                if let Err(e) = ChatWidget::submit_message(clone).await {
                    log::error!("Chat request failed: {}", e);
                }
            });
        }
        KeyCode::Backspace => {
            widget.lock().await.input.pop();
        }
        KeyCode::PageUp => widget.lock().await.scroll_up(),
        KeyCode::PageDown => widget.lock().await.scroll_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => return true,
                    'u' => widget.lock().await.scroll_up(),
                    'd' => widget.lock().await.scroll_down(),
                    's' => {
                        let mut guard = widget.lock().await;
                        match export_transcript(&guard.transcript, Path::new(TRANSCRIPT_FILE)) {
                            Ok(()) => {
                                guard
                                    .status_indicator
                                    .set_status(format!("Riwayat disimpan ke {}", TRANSCRIPT_FILE));
                            }
                            Err(e) => log::error!("Transcript export failed: {}", e),
                        }
                    }
                    _ => {}
                }
            } else {
                widget.lock().await.input.push(c);
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn widget() -> Arc<Mutex<ChatWidget>> {
        Arc::new(Mutex::new(ChatWidget::new("http://127.0.0.1:1".to_string())))
    }

    #[tokio::test]
    async fn test_chars_append_to_input() {
        let w = widget();
        for c in ['H', 'i'] {
            handle_chat_input(KeyEvent::from(KeyCode::Char(c)), &w).await;
        }
        assert_eq!(w.lock().await.input, "Hi");
    }

    #[tokio::test]
    async fn test_backspace_removes_last_char() {
        let w = widget();
        w.lock().await.input = "Hi".to_string();
        handle_chat_input(KeyEvent::from(KeyCode::Backspace), &w).await;
        assert_eq!(w.lock().await.input, "H");
    }

    #[tokio::test]
    async fn test_esc_and_ctrl_c_quit() {
        let w = widget();
        assert!(handle_chat_input(KeyEvent::from(KeyCode::Esc), &w).await);
        assert!(
            handle_chat_input(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &w
            )
            .await
        );
    }
}

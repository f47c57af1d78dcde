use crate::constants::{BOT_LABEL, USER_LABEL};
use chrono::{DateTime, Local};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => USER_LABEL,
            Sender::Bot => BOT_LABEL,
        }
    }
}

/// One bubble in the transcript. Messages only exist in memory; they are
/// created on send/receive and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: String) -> Self {
        Self {
            sender,
            text,
            timestamp: Local::now(),
        }
    }

    /// The bubble as plain text, e.g. `Kamu: Hi`.
    pub fn plain_text(&self) -> String {
        format!("{}: {}", self.sender.label(), self.text)
    }

    /// Renders the bubble as wrapped terminal lines. Text always goes
    /// through spans, never through markup strings.
    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let style = match self.sender {
            Sender::User => Style::default().fg(Color::Rgb(255, 223, 128)),
            Sender::Bot => Style::default().fg(Color::Rgb(144, 238, 144)),
        };

        let prefix = format!("{}: ", self.sender.label());
        let indent = " ".repeat(prefix.width());
        let wrap_width = (width as usize).saturating_sub(prefix.width()).max(1);

        let mut lines = Vec::new();
        for (idx, piece) in wrap(&self.text, wrap_width).iter().enumerate() {
            let lead = if idx == 0 {
                Span::styled(prefix.clone(), style.add_modifier(Modifier::BOLD))
            } else {
                Span::styled(indent.clone(), style)
            };
            lines.push(Line::from(vec![lead, Span::styled(piece.to_string(), style)]));
        }

        lines
    }
}

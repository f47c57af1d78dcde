use crate::chat_widget::ChatWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_chat(f: &mut Frame, widget: &mut ChatWidget) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Min(1),    // Messages
                Constraint::Length(1), // Status
                Constraint::Length(3), // Input
            ]
            .as_ref(),
        )
        .split(size);

    draw_messages(f, widget, chunks[0]);
    widget.status_indicator.render(f, chunks[1]);
    draw_input(f, widget, chunks[2]);
}

fn draw_messages(f: &mut Frame, widget: &mut ChatWidget, area: Rect) {
    let mut lines = Vec::new();
    for message in &widget.transcript {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area.width));
    }

    // Clamp and write back, so scrolling up from the pinned bottom works.
    widget.scroll = clamp_scroll(widget.scroll, lines.len() as u16, area.height);

    let msgs_para = Paragraph::new(lines).scroll((widget.scroll, 0));
    f.render_widget(msgs_para, area);
}

fn draw_input(f: &mut Frame, widget: &ChatWidget, area: Rect) {
    let input = Paragraph::new(widget.input.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pesan")
                .style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(input, area);

    // Keep the cursor in the input line, right after the typed text.
    let cursor_x = area.x + 1 + widget.input.len() as u16;
    f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
}

/// The maximum scroll offset is the first line of the last full viewport;
/// anything beyond it is pinned to the bottom.
pub fn clamp_scroll(requested: u16, total_lines: u16, viewport_height: u16) -> u16 {
    let max_scroll = total_lines.saturating_sub(viewport_height);
    requested.min(max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_widget::SCROLL_BOTTOM;

    #[test]
    fn test_clamp_scroll_short_transcript_stays_at_top() {
        assert_eq!(clamp_scroll(0, 5, 10), 0);
        assert_eq!(clamp_scroll(3, 5, 10), 0);
    }

    #[test]
    fn test_clamp_scroll_pins_bottom_sentinel_to_max() {
        // 40 lines in a 10-line viewport: the bottom sits at offset 30.
        assert_eq!(clamp_scroll(SCROLL_BOTTOM, 40, 10), 30);
    }

    #[test]
    fn test_clamp_scroll_keeps_offsets_within_range() {
        assert_eq!(clamp_scroll(12, 40, 10), 12);
        assert_eq!(clamp_scroll(31, 40, 10), 30);
    }
}

//! Status bar widget for messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, InputMode, Theme};

/// Key bindings shown in the status bar and the help overlay.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("←↑↓→", "Move on wheel"),
    ("Click/drag", "Pick from wheel"),
    ("Tab/h/j/k/l", "Select swatch"),
    ("y/Enter", "Copy hex"),
    ("i", "Edit hex"),
    ("r", "Random color"),
    ("m", "Verbose/compact"),
    ("e", "Export Markdown"),
    ("?", "Toggle help"),
    ("q/Esc", "Quit"),
];

/// Bindings listed on the status bar help line
const STATUS_BAR_HINTS: usize = 5;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error.as_str(), Style::default().fg(theme.text)),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            ))
        } else {
            Line::from("")
        };

        let status = Paragraph::new(vec![message_line, Self::help_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the current input mode
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: Vec<(&str, &str)> = match state.input_mode {
            InputMode::EditingHex => vec![
                ("Enter", "Apply"),
                ("Esc", "Cancel"),
                ("Backspace", "Delete"),
            ],
            InputMode::Normal => KEY_BINDINGS
                .iter()
                .copied()
                .filter(|(key, _)| !key.starts_with("Click"))
                .take(STATUS_BAR_HINTS)
                .chain(std::iter::once(("?", "Help")))
                .collect(),
        };

        let mut spans = vec![Span::styled("Help: ", Style::default().fg(theme.primary))];
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(
                action.to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}

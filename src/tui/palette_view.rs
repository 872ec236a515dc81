//! Base color panel and harmony swatch rows.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, InputMode};
use crate::export::markdown::{format_hsl, format_rgb};
use crate::models::Color;
use crate::services::HslToken;

/// Width of the harmony name column
const NAME_WIDTH: usize = 15;

/// Black or white, whichever reads better on `color`.
#[must_use]
pub fn contrast_text(color: Color) -> ratatui::style::Color {
    if color.to_lab().l > 60.0 {
        ratatui::style::Color::Black
    } else {
        ratatui::style::Color::White
    }
}

/// Renders the base color details and theme tokens
pub struct BaseInfoView;

impl BaseInfoView {
    /// Render the panel
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let hex = state.format_hex(state.base);

        let hex_line = match state.input_mode {
            InputMode::EditingHex => Line::from(vec![
                Span::styled(" Hex: ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    format!("{}▏", state.hex_input),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  Enter: apply  Esc: cancel",
                    Style::default().fg(theme.text_muted),
                ),
            ]),
            InputMode::Normal => Line::from(vec![
                Span::styled(" Hex: ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    hex,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
        };

        let swatch = Span::styled(
            " ".repeat(16),
            Style::default().bg(state.base.to_ratatui_color()),
        );

        let mut lines = vec![
            hex_line,
            Line::from(""),
            Line::from(vec![Span::raw(" "), swatch.clone()]),
            Line::from(vec![Span::raw(" "), swatch]),
            Line::from(""),
            Line::from(vec![
                Span::styled(" RGB: ", Style::default().fg(theme.text_muted)),
                Span::styled(format_rgb(state.base), Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled(" HSL: ", Style::default().fg(theme.text_muted)),
                Span::styled(format_hsl(state.base), Style::default().fg(theme.text)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                " Theme tokens",
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        for (label, token) in [
            ("primary", state.tokens.primary),
            ("muted", state.tokens.muted),
            ("dark", state.tokens.dark),
        ] {
            lines.push(token_line(label, token, state));
        }

        let panel = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(" Base ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(panel, area);
    }
}

fn token_line(label: &'static str, token: HslToken, state: &AppState) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled("  ", Style::default().bg(token.color().to_ratatui_color())),
        Span::styled(
            format!(" {label:<8}"),
            Style::default().fg(state.theme.text_secondary),
        ),
        Span::styled(token.to_string(), Style::default().fg(state.theme.text)),
    ])
}

/// Renders one row of swatches per harmony
pub struct HarmonyView;

impl HarmonyView {
    /// Render the harmony rows
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let lines: Vec<Line> = state
            .harmonies
            .iter()
            .enumerate()
            .map(|(row, harmony)| {
                let row_selected = row == state.selected_harmony;
                let name_style = if row_selected {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_secondary)
                };
                let marker = if row_selected { "▶ " } else { "  " };

                let mut spans = vec![Span::styled(
                    format!("{marker}{:<NAME_WIDTH$}", harmony.name),
                    name_style,
                )];

                for (index, color) in harmony.colors.iter().enumerate() {
                    let mut style = Style::default()
                        .fg(contrast_text(*color))
                        .bg(color.to_ratatui_color());
                    if row_selected && index == state.selected_color {
                        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                    }
                    spans.push(Span::styled(format!(" {} ", state.format_hex(*color)), style));
                    spans.push(Span::raw(" "));
                }

                Line::from(spans)
            })
            .collect();

        let title = format!(" Harmonies ({}) ", state.size);
        let view = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(view, area);
    }
}

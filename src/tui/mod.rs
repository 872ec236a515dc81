//! Terminal user interface.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets: the color wheel, the base color panel, the harmony
//! swatches and the status bar.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod clipboard;
pub mod palette_view;
pub mod status_bar;
pub mod theme;
pub mod wheel_widget;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::{self, ExportFormat};
use crate::models::{Color, Harmony, HarmonySize};
use crate::services::{harmonies_for, random_color, ThemeTokens};

pub use clipboard::HexClipboard;
pub use palette_view::{BaseInfoView, HarmonyView};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use wheel_widget::{WheelViewport, WheelWidget};

/// Distance in canvas pixels an arrow key moves the selector
const SELECTOR_STEP: f64 = 4.0;

/// Longest accepted hex input
const MAX_INPUT_LEN: usize = 32;

/// What keystrokes are currently routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive the wheel and swatches
    Normal,
    /// Keys edit the hex input field
    EditingHex,
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Chrome colors with the palette accent applied
    pub theme: Theme,
    /// Current base color
    pub base: Color,
    /// Harmonies generated from `base`
    pub harmonies: Vec<Harmony>,
    /// Theme tokens derived from `base`
    pub tokens: ThemeTokens,
    /// Current size policy
    pub size: HarmonySize,
    /// Row of the selected swatch
    pub selected_harmony: usize,
    /// Column of the selected swatch
    pub selected_color: usize,
    /// Where keystrokes go
    pub input_mode: InputMode,
    /// Text of the hex input while editing
    pub hex_input: String,
    /// System clipboard
    pub clipboard: HexClipboard,
    /// Last status message
    pub status_message: String,
    /// Last error, shown instead of the status message
    pub error_message: Option<String>,
    /// Help overlay visibility
    pub show_help: bool,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Size of the last drawn frame, used to map mouse positions
    pub frame_area: Rect,
}

impl AppState {
    /// Create the state for `config`, starting from `initial` or the
    /// configured default base color.
    #[must_use]
    pub fn new(config: Config, initial: Option<Color>) -> Self {
        let base = initial.unwrap_or(config.palette.default_base);
        let size = config.palette.size;
        let tokens = ThemeTokens::derive(base);
        let theme = Theme::from_mode(config.ui.theme_mode)
            .with_accent(tokens.primary.color().to_ratatui_color());
        let show_help = config.ui.show_help_on_startup;

        Self {
            theme,
            base,
            harmonies: harmonies_for(base, size),
            tokens,
            size,
            selected_harmony: 0,
            selected_color: 0,
            input_mode: InputMode::Normal,
            hex_input: String::new(),
            clipboard: HexClipboard::new(),
            status_message: String::new(),
            error_message: None,
            show_help,
            should_quit: false,
            frame_area: Rect::default(),
            config,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Hex string in the configured case
    #[must_use]
    pub fn format_hex(&self, color: Color) -> String {
        color.format_hex(self.config.palette.hex_case)
    }

    /// Replace the base color and regenerate everything derived from it.
    pub fn set_base(&mut self, color: Color) {
        self.base = color;
        self.regenerate();
    }

    /// Switch between verbose and compact harmonies.
    pub fn toggle_size(&mut self) {
        self.size = self.size.toggled();
        self.regenerate();
        self.set_status(format!("Harmony size: {}", self.size));
    }

    fn regenerate(&mut self) {
        self.harmonies = harmonies_for(self.base, self.size);
        self.tokens = ThemeTokens::derive(self.base);
        self.theme = self
            .theme
            .clone()
            .with_accent(self.tokens.primary.color().to_ratatui_color());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let rows = self.harmonies.len();
        self.selected_harmony = self.selected_harmony.min(rows.saturating_sub(1));
        let cols = self.harmonies.get(self.selected_harmony).map_or(0, Harmony::len);
        self.selected_color = self.selected_color.min(cols.saturating_sub(1));
    }

    /// Currently selected swatch color
    #[must_use]
    pub fn selected_swatch(&self) -> Option<Color> {
        self.harmonies
            .get(self.selected_harmony)
            .and_then(|h| h.color_at(self.selected_color))
    }

    /// Move the wheel selector by a canvas offset.
    ///
    /// Returns `false` and leaves the base color alone when the target lies
    /// outside the wheel.
    pub fn move_selector(&mut self, dx: f64, dy: f64) -> bool {
        let geometry = self.config.wheel_geometry();
        // Achromatic colors start from the center
        let start = geometry
            .locate(self.base)
            .map_or((geometry.center_x, geometry.center_y), |p| (p.x, p.y));

        match geometry.pick(start.0 + dx, start.1 + dy) {
            Some(hit) => {
                self.set_base(hit.color);
                true
            }
            None => false,
        }
    }

    /// Select the next swatch, wrapping to the next row and back to the top.
    pub fn select_next_swatch(&mut self) {
        let row_len = self
            .harmonies
            .get(self.selected_harmony)
            .map_or(0, Harmony::len);

        if self.selected_color + 1 < row_len {
            self.selected_color += 1;
        } else {
            self.selected_color = 0;
            self.selected_harmony = (self.selected_harmony + 1) % self.harmonies.len().max(1);
        }
    }

    /// Move the swatch selection up or down a row.
    pub fn move_swatch_row(&mut self, delta: isize) {
        let last = self.harmonies.len().saturating_sub(1);
        self.selected_harmony = self.selected_harmony.saturating_add_signed(delta).min(last);
        self.clamp_selection();
    }

    /// Move the swatch selection within the row.
    pub fn move_swatch_column(&mut self, delta: isize) {
        self.selected_color = self.selected_color.saturating_add_signed(delta);
        self.clamp_selection();
    }

    /// Copy the selected swatch to the system clipboard.
    pub fn copy_selected(&mut self) {
        let Some(color) = self.selected_swatch() else {
            return;
        };
        let hex = self.format_hex(color);
        match self.clipboard.copy(&hex) {
            Ok(message) => self.set_status(message),
            Err(e) => self.set_error(format!("{e:#}")),
        }
    }

    /// Start editing the hex input, prefilled with the base color.
    pub fn start_editing(&mut self) {
        self.hex_input = self.format_hex(self.base);
        self.input_mode = InputMode::EditingHex;
    }

    /// Apply the hex input. Invalid input keeps the previous color.
    pub fn apply_hex_input(&mut self) {
        self.input_mode = InputMode::Normal;
        let input = std::mem::take(&mut self.hex_input);

        match Color::parse(&input) {
            Ok(color) => {
                self.set_base(color);
                let hex = self.format_hex(color);
                self.set_status(format!("Base color set to {hex}"));
            }
            Err(_) => self.set_error(format!("Invalid color '{}'", input.trim())),
        }
    }

    /// Leave the hex input without applying it.
    pub fn cancel_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.hex_input.clear();
    }

    /// Replace the base color with a random one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let color = random_color(rng);
        self.set_base(color);
        let hex = self.format_hex(color);
        self.set_status(format!("Random color {hex}"));
    }

    /// Write the palette as Markdown into `dir`.
    pub fn export_markdown(&self, dir: &Path) -> Result<PathBuf> {
        let content = export::export_palette(
            self.base,
            &self.harmonies,
            ExportFormat::Markdown,
            self.config.palette.hex_case,
        )?;
        let path = dir.join(export::default_file_name_today(
            self.base,
            ExportFormat::Markdown,
        ));
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Exported palette to {}", path.display());
        Ok(path)
    }
}

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScreenLayout {
    title: Rect,
    wheel: Rect,
    info: Rect,
    harmonies: Rect,
    status: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title bar
            Constraint::Min(12),    // Wheel and base color
            Constraint::Length(7),  // Harmonies
            Constraint::Length(4),  // Status bar
        ])
        .split(area);

    let main = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    ScreenLayout {
        title: rows[0],
        wheel: main[0],
        info: main[1],
        harmonies: rows[2],
        status: rows[3],
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Launch the TUI and block until the user quits
pub fn run(config: Config, initial: Option<Color>) -> Result<()> {
    let mut state = AppState::new(config, initial);
    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| render(f, state))?;
        state.frame_area = frame.area;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                // Resize and focus changes re-render on the next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = screen_layout(f.area());

    render_title_bar(f, layout.title, state);
    WheelWidget::render(f, layout.wheel, state);
    BaseInfoView::render(f, layout.info, state);
    HarmonyView::render(f, layout.harmonies, state);
    StatusBar::render(f, layout.status, state, &state.theme);

    if state.show_help {
        render_help_overlay(f, &state.theme);
    }
}

/// Render title bar with the base color and size policy
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("- ", Style::default().fg(state.theme.text_muted)),
        Span::styled(
            state.format_hex(state.base),
            Style::default().fg(state.theme.accent),
        ),
        Span::styled(
            format!(" ({})", state.size),
            Style::default().fg(state.theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(state.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

fn render_help_overlay(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let lines: Vec<Line> = status_bar::KEY_BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<14}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let help = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .title(" Keys (? to close) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
    f.render_widget(help, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return Ok(true);
    }

    if state.input_mode == InputMode::EditingHex {
        return handle_input_key(state, key.code);
    }

    if state.show_help && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
        state.show_help = false;
        return Ok(false);
    }

    state.clear_error();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Left => move_selector(state, -SELECTOR_STEP, 0.0),
        KeyCode::Right => move_selector(state, SELECTOR_STEP, 0.0),
        KeyCode::Up => move_selector(state, 0.0, -SELECTOR_STEP),
        KeyCode::Down => move_selector(state, 0.0, SELECTOR_STEP),
        KeyCode::Tab => state.select_next_swatch(),
        KeyCode::Char('j') => state.move_swatch_row(1),
        KeyCode::Char('k') => state.move_swatch_row(-1),
        KeyCode::Char('h') => state.move_swatch_column(-1),
        KeyCode::Char('l') => state.move_swatch_column(1),
        KeyCode::Char('y') | KeyCode::Enter => state.copy_selected(),
        KeyCode::Char('i') => state.start_editing(),
        KeyCode::Char('r') => state.randomize(&mut rand::thread_rng()),
        KeyCode::Char('m') => state.toggle_size(),
        KeyCode::Char('e') => match state.export_markdown(Path::new(".")) {
            Ok(path) => state.set_status(format!("Exported palette to: {}", path.display())),
            Err(e) => state.set_error(format!("Export failed: {e:#}")),
        },
        KeyCode::Char('?') => state.show_help = !state.show_help,
        _ => {}
    }

    Ok(false)
}

fn move_selector(state: &mut AppState, dx: f64, dy: f64) {
    if !state.move_selector(dx, dy) {
        state.set_status("Edge of the wheel");
    }
}

/// Keys while the hex input is active
fn handle_input_key(state: &mut AppState, code: KeyCode) -> Result<bool> {
    match code {
        KeyCode::Enter => state.apply_hex_input(),
        KeyCode::Esc => state.cancel_editing(),
        KeyCode::Backspace => {
            state.hex_input.pop();
        }
        KeyCode::Char(c) if state.hex_input.len() < MAX_INPUT_LEN => state.hex_input.push(c),
        _ => {}
    }
    Ok(false)
}

/// Pick from the wheel on left click or drag. Positions outside the disk
/// change nothing.
fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    if !matches!(
        mouse.kind,
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
    ) {
        return;
    }
    if state.input_mode == InputMode::EditingHex {
        return;
    }

    let layout = screen_layout(state.frame_area);
    let viewport = wheel_widget::viewport_for(layout.wheel);
    if let Some(hit) = viewport.pick_cell(mouse.column, mouse.row) {
        state.clear_error();
        state.set_base(hit.color);
    }
}

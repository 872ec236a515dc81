//! Color wheel widget.
//!
//! Each terminal cell holds two vertically stacked pixels drawn with the
//! upper half block, so a cell is one pixel wide and two pixels tall and the
//! wheel stays round in a typical terminal font.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::palette_view::contrast_text;
use super::AppState;
use crate::models::Color;
use crate::services::{WheelGeometry, WheelHit, WheelPoint};

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";
const SELECTOR: &str = "●";

/// Maps between terminal cells and wheel canvas pixels for one draw area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelViewport {
    /// Cells the wheel is drawn into (inside the border)
    pub area: Rect,
    /// Wheel geometry in canvas pixels
    pub geometry: WheelGeometry,
}

impl WheelViewport {
    /// Fits the largest wheel into `area`.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let width = f64::from(area.width);
        let height = f64::from(area.height) * 2.0;
        let side = width.min(height);
        // Pixel centers sit half a pixel inside the rim
        let radius = (side / 2.0 - 0.5).max(0.0);

        Self {
            area,
            geometry: WheelGeometry::new(width / 2.0, height / 2.0, radius),
        }
    }

    /// Canvas point at the center of a terminal cell, `None` outside the area.
    #[must_use]
    pub fn cell_to_canvas(&self, column: u16, row: u16) -> Option<WheelPoint> {
        if !self.area_contains(column, row) {
            return None;
        }
        Some(WheelPoint {
            x: f64::from(column - self.area.x) + 0.5,
            y: f64::from(row - self.area.y) * 2.0 + 1.0,
        })
    }

    /// Terminal cell containing a canvas point.
    #[must_use]
    pub fn canvas_to_cell(&self, point: WheelPoint) -> Option<(u16, u16)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let column = point.x.floor() as u16;
        let row = (point.y / 2.0).floor() as u16;
        if column >= self.area.width || row >= self.area.height {
            return None;
        }
        Some((self.area.x + column, self.area.y + row))
    }

    /// Picks the wheel color under a terminal cell.
    #[must_use]
    pub fn pick_cell(&self, column: u16, row: u16) -> Option<WheelHit> {
        let point = self.cell_to_canvas(column, row)?;
        self.geometry.pick(point.x, point.y)
    }

    /// Cell where the selector for `color` is drawn.
    #[must_use]
    pub fn selector_cell(&self, color: Color) -> Option<(u16, u16)> {
        self.geometry
            .locate(color)
            .and_then(|point| self.canvas_to_cell(point))
    }

    fn area_contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    /// Rasterizes the wheel into lines of half-block cells.
    fn raster(&self, background: ratatui::style::Color) -> Vec<Vec<(&'static str, Style)>> {
        (0..self.area.height)
            .map(|row| {
                (0..self.area.width)
                    .map(|column| {
                        let x = f64::from(column) + 0.5;
                        let top_y = f64::from(row) * 2.0 + 0.5;
                        let top = self.geometry.fill_color(x, top_y);
                        let bottom = self.geometry.fill_color(x, top_y + 1.0);

                        match (top, bottom) {
                            (Some(top), Some(bottom)) => (
                                UPPER_HALF,
                                Style::default()
                                    .fg(top.to_ratatui_color())
                                    .bg(bottom.to_ratatui_color()),
                            ),
                            (Some(top), None) => (
                                UPPER_HALF,
                                Style::default().fg(top.to_ratatui_color()).bg(background),
                            ),
                            (None, Some(bottom)) => (
                                LOWER_HALF,
                                Style::default().fg(bottom.to_ratatui_color()).bg(background),
                            ),
                            (None, None) => (" ", Style::default().bg(background)),
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Viewport of the wheel drawn into the bordered block at `area`.
#[must_use]
pub fn viewport_for(area: Rect) -> WheelViewport {
    WheelViewport::new(Block::default().borders(Borders::ALL).inner(area))
}

/// Color wheel with a selector at the base color
pub struct WheelWidget;

impl WheelWidget {
    /// Render the wheel into `area`
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = Block::default()
            .title(" Wheel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        f.render_widget(block, area);

        let viewport = viewport_for(area);
        let inner = viewport.area;
        let mut cells = viewport.raster(theme.background);

        if let Some((column, row)) = viewport.selector_cell(state.base) {
            let x = usize::from(column - inner.x);
            let y = usize::from(row - inner.y);
            if let Some(cell) = cells.get_mut(y).and_then(|line| line.get_mut(x)) {
                *cell = (
                    SELECTOR,
                    Style::default()
                        .fg(contrast_text(state.base))
                        .bg(state.base.to_ratatui_color()),
                );
            }
        }

        let lines: Vec<Line> = cells
            .into_iter()
            .map(|line| {
                Line::from(
                    line.into_iter()
                        .map(|(symbol, style)| Span::styled(symbol, style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }
}

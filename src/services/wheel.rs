//! Color wheel geometry.
//!
//! Maps points inside a disk to HSL colors and back: the angle around the
//! center is the hue, the normalized distance from the center is the
//! saturation, and lightness is fixed at [`WHEEL_LIGHTNESS`].

use serde::Serialize;

use crate::models::Color;

/// Lightness of every color on the wheel.
pub const WHEEL_LIGHTNESS: f64 = 0.7;

/// Default canvas edge length in pixels.
pub const DEFAULT_WHEEL_SIZE: f64 = 200.0;

/// Default gap between the canvas edge and the wheel rim in pixels.
pub const DEFAULT_WHEEL_MARGIN: f64 = 10.0;

/// Relative slack on the rim test, so points placed on the rim by
/// [`WheelGeometry::locate`] still pick despite rounding in `cos`/`sin`.
const RIM_TOLERANCE: f64 = 1e-9;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelPoint {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downwards)
    pub y: f64,
}

/// Result of picking a point inside the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelHit {
    /// Hue in degrees, 0.0..360.0
    pub hue: f64,
    /// Saturation, 0.0-1.0 (exactly 1.0 on the rim)
    pub saturation: f64,
    /// The color at the point, quantized to 8-bit channels
    pub color: Color,
}

/// Position and size of a color wheel on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelGeometry {
    /// Horizontal center
    pub center_x: f64,
    /// Vertical center
    pub center_y: f64,
    /// Radius of the color disk
    pub radius: f64,
}

impl WheelGeometry {
    /// Creates a wheel centered at `(center_x, center_y)`.
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Creates a wheel filling a square canvas of edge `size`, inset by `margin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huewheel::services::wheel::WheelGeometry;
    ///
    /// let wheel = WheelGeometry::from_canvas(200.0, 10.0);
    /// assert_eq!(wheel.center_x, 100.0);
    /// assert_eq!(wheel.radius, 90.0);
    /// ```
    #[must_use]
    pub fn from_canvas(size: f64, margin: f64) -> Self {
        let half = size / 2.0;
        Self::new(half, half, (half - margin).max(0.0))
    }

    /// Whether `(x, y)` lies inside the disk (rim included).
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.radius > 0.0 && self.distance(x, y) <= self.radius * (1.0 + RIM_TOLERANCE)
    }

    fn distance(&self, x: f64, y: f64) -> f64 {
        (x - self.center_x).hypot(y - self.center_y)
    }

    /// Picks the hue and saturation at a canvas point.
    ///
    /// Returns `None` when the point is outside the disk; callers treat that
    /// as "no change" rather than an error. A wheel with zero radius has no
    /// hit area.
    #[must_use]
    pub fn pick(&self, x: f64, y: f64) -> Option<WheelHit> {
        if !self.contains(x, y) {
            return None;
        }

        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = dx.hypot(dy);

        let angle = dy.atan2(dx).to_degrees();
        let hue = if angle < 0.0 { angle + 360.0 } else { angle };
        let saturation = (distance / self.radius).min(1.0);

        Some(WheelHit {
            hue,
            saturation,
            color: Color::from_hsl(hue, saturation, WHEEL_LIGHTNESS),
        })
    }

    /// Returns the color at a canvas point, or `None` outside the disk.
    #[must_use]
    pub fn point_to_color(&self, x: f64, y: f64) -> Option<Color> {
        self.pick(x, y).map(|hit| hit.color)
    }

    /// Color used to rasterize the wheel at a pixel.
    ///
    /// Defined through [`WheelGeometry::point_to_color`] so that what is drawn
    /// is exactly what a click at that pixel selects.
    #[must_use]
    pub fn fill_color(&self, x: f64, y: f64) -> Option<Color> {
        self.point_to_color(x, y)
    }

    /// Returns where a color sits on the wheel.
    ///
    /// Returns `None` for achromatic colors, whose hue is undefined.
    #[must_use]
    pub fn locate(&self, color: Color) -> Option<WheelPoint> {
        let hsl = color.to_hsl();
        let hue = hsl.hue?;
        if hsl.saturation.is_nan() {
            return None;
        }

        let distance = self.radius * hsl.saturation;
        let angle = hue.to_radians();

        Some(WheelPoint {
            x: self.center_x + distance * angle.cos(),
            y: self.center_y + distance * angle.sin(),
        })
    }

    /// Parses `input` and returns where it sits on the wheel.
    ///
    /// Returns `None` if the input is not a color or its hue is undefined;
    /// the caller skips drawing a selector in that case.
    #[must_use]
    pub fn color_to_point(&self, input: &str) -> Option<WheelPoint> {
        Color::parse(input).ok().and_then(|color| self.locate(color))
    }
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self::from_canvas(DEFAULT_WHEEL_SIZE, DEFAULT_WHEEL_MARGIN)
    }
}

/// Maps a pointer position to a wheel color.
///
/// Free-function form of [`WheelGeometry::point_to_color`].
#[must_use]
pub fn point_to_color(x: f64, y: f64, center_x: f64, center_y: f64, radius: f64) -> Option<Color> {
    WheelGeometry::new(center_x, center_y, radius).point_to_color(x, y)
}

/// Maps a color string to its pointer position on the wheel.
///
/// Free-function form of [`WheelGeometry::color_to_point`].
#[must_use]
pub fn color_to_point(
    color: &str,
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> Option<(f64, f64)> {
    WheelGeometry::new(center_x, center_y, radius)
        .color_to_point(color)
        .map(|point| (point.x, point.y))
}

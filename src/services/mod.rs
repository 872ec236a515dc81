//! Service layer for color logic.
//!
//! These services hold the pure color computations shared by the CLI, the
//! terminal UI and the web API.

pub mod harmonies;
pub mod random;
pub mod theme_tokens;
pub mod wheel;

// Re-export commonly used types and functions
pub use harmonies::{
    generate_harmonies, generate_harmonies_with, harmonies_for, resolve_base, BaseColor,
    DEFAULT_BASE_COLOR,
};
pub use random::random_color;
pub use theme_tokens::{HslToken, ThemeTokens};
pub use wheel::{WheelGeometry, WheelHit, WheelPoint};

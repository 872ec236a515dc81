//! Random base colors.

use rand::Rng;

use crate::models::Color;

/// Picks a color uniformly from the 24-bit RGB space.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let [r, g, b] = rng.gen::<[u8; 3]>();
    Color::new(r, g, b)
}

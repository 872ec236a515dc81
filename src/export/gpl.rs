//! GIMP palette export.
//!
//! The `.gpl` format is a header followed by one `R G B<TAB>name` row per
//! color. Inkscape and Krita read it too.

use std::fmt::Write as _;

use crate::models::{Color, Harmony, HexCase};

/// Colors per row in the palette editor.
const GPL_COLUMNS: usize = 5;

/// Generates a GIMP palette with the base color first.
pub fn generate_gpl(base: Color, harmonies: &[Harmony], case: HexCase) -> String {
    let mut output = String::new();

    output.push_str("GIMP Palette\n");
    let _ = writeln!(output, "Name: huewheel {}", base.format_hex(case));
    let _ = writeln!(output, "Columns: {GPL_COLUMNS}");
    output.push_str("#\n");

    push_row(&mut output, base, "Base");
    for harmony in harmonies {
        for (index, color) in harmony.colors.iter().enumerate() {
            push_row(
                &mut output,
                *color,
                &format!("{} {}", harmony.name, index + 1),
            );
        }
    }

    output
}

fn push_row(output: &mut String, color: Color, name: &str) {
    let _ = writeln!(output, "{:3} {:3} {:3}\t{name}", color.r, color.g, color.b);
}

//! Terminal projection of the store snapshot: group panels with a colored
//! left border, a count badge and the tally marks themselves.

use crate::core::render::{Bundle, MarkKind, render_marks};
use crate::models::group::Group;
use crate::models::palette::PaletteColor;
use crate::utils::colors::hex_to_rgb;
use crate::utils::text::{display_width, pad_to};
use ansi_term::{Colour, Style};

const PLAIN_GLYPH: &str = "|";
const CLOSING_GLYPH: &str = "/";
const BORDER_GLYPH: &str = "▌";

fn rgb(hex: &str) -> Colour {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => Colour::RGB(r, g, b),
        None => Colour::White,
    }
}

/// Project mark descriptors onto an ANSI string. Plain marks stay in the
/// default color, closing marks are painted with the color they carry, and
/// the newly added mark (if any) is shown bold and underlined.
pub fn paint_marks(bundles: &[Bundle]) -> String {
    let mut out = String::new();
    for (i, bundle) in bundles.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        for mark in &bundle.marks {
            let (glyph, base) = match mark.kind {
                MarkKind::Plain => (PLAIN_GLYPH, Style::new()),
                MarkKind::Closing => {
                    let colour = mark.color.as_deref().map(rgb).unwrap_or(Colour::White);
                    (CLOSING_GLYPH, colour.normal())
                }
            };
            let style = if mark.newly_added {
                base.bold().underline()
            } else {
                base
            };
            out.push_str(&style.paint(glyph).to_string());
        }
    }
    out
}

/// One group panel: id, label, count badge and the marks line.
pub fn print_group(group: &Group, label_width: usize, animate_last: bool) {
    let border = rgb(&group.color).paint(BORDER_GLYPH);
    let badge = Style::new().bold().paint(format!("[{}]", group.count));
    let marks = paint_marks(&render_marks(group.count, &group.color, animate_last));
    println!(
        "{} {:>3}: {} {}  {}",
        border,
        group.id,
        pad_to(&group.label, label_width),
        badge,
        marks
    );
}

/// Full re-render of every group under the given header.
pub fn print_groups(header: &str, groups: &[Group]) {
    println!("🪧 {}\n", header);
    if groups.is_empty() {
        println!("No tally groups yet. Create one with: rtally add <LABEL>");
        return;
    }
    let label_width = groups
        .iter()
        .map(|g| display_width(&g.label))
        .max()
        .unwrap_or(0);
    for group in groups {
        print_group(group, label_width, false);
    }
}

/// Palette panel shown when the color picker becomes visible: numbered,
/// each entry painted as a swatch in its own color.
pub fn print_palette(colors: &[PaletteColor]) {
    println!("🎨 Palette:");
    for (i, c) in colors.iter().enumerate() {
        let swatch = rgb(&c.hex).paint("██");
        println!("  {:>2}. {} {} ({})", i + 1, swatch, c.name, c.hex);
    }
}

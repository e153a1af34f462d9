use netcube_core::{Face, Grid};
use owo_colors::OwoColorize;

/// Color of each face's stickers in the terminal.
fn rgb(face: Face) -> (u8, u8, u8) {
    match face {
        Face::U => (255, 255, 255),
        Face::L => (232, 117, 40),
        Face::F => (0, 128, 0),
        Face::R => (198, 0, 28),
        Face::D => (251, 211, 28),
        Face::B => (0, 51, 153),
    }
}

/// Draws the net with two colored spaces per sticker.
pub(crate) fn colored_net(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for &value in row {
            match Face::from_color(value) {
                Some(face) => {
                    let (r, g, b) = rgb(face);
                    out.push_str(&"  ".on_truecolor(r, g, b).to_string());
                }
                None => out.push_str("  "),
            }
        }
        out.push('\n');
    }
    out
}

/// Draws the net with one letter per sticker, naming the face whose color it
/// has.
pub(crate) fn plain_net(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for &value in row {
            match Face::from_color(value) {
                Some(face) => out.push_str(&face.to_string()),
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    out
}

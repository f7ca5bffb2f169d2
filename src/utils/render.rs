//! # Render Module
//!
//! Text dumps of a [`Grid`] for the console driver.
//!
//! ## Styles
//!
//! - [`RenderStyle::Digits`] prints each cell as `1` or `0` followed by a
//!   space, framed by a `--- Current Map ---` header and a dashed footer.
//! - [`RenderStyle::Glyphs`] prints `#` for occupied and `.` for empty cells,
//!   one row per line, with no frame. This is what `Display` for `Grid` uses.

use crate::map::{Cell, Grid};
use clap::ValueEnum;

const HEADER: &str = "--- Current Map ---";
const FOOTER: &str = "-------------------";

/// How cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderStyle {
    /// `1`/`0` cells in a framed dump.
    #[default]
    Digits,
    /// `#`/`.` cells, no frame.
    Glyphs,
}

/// Renders a grid to a string.
///
/// # Arguments
///
/// * `grid` - The grid to draw.
/// * `style` - Cell representation and framing.
///
/// # Examples
///
/// ```
/// use rule_pcg::map::Grid;
/// use rule_pcg::utils::render::{render, RenderStyle};
///
/// let grid = Grid::from_rows(&[vec![true, false]]).unwrap();
/// assert_eq!(render(&grid, RenderStyle::Glyphs), "#.\n");
/// ```
pub fn render(grid: &Grid, style: RenderStyle) -> String {
    let mut out = String::with_capacity((grid.width() * 2 + 1) * grid.height() + 64);
    match style {
        RenderStyle::Digits => {
            out.push_str(HEADER);
            out.push('\n');
            for row in grid.rows() {
                for cell in row {
                    out.push(char::from(b'0' + cell.as_digit()));
                    out.push(' ');
                }
                out.push('\n');
            }
            out.push_str(FOOTER);
            out.push('\n');
        }
        RenderStyle::Glyphs => {
            for row in grid.rows() {
                out.extend(row.iter().map(|cell| match cell {
                    Cell::Occupied => '#',
                    Cell::Empty => '.',
                }));
                out.push('\n');
            }
        }
    }
    out
}

use crate::grid::HexGrid;
use crate::hex::HexCoord;

/// One line per tile, in generation order.
pub fn render_summary(grid: &HexGrid) -> String {
    let mut out = String::new();
    for tile in grid.tiles() {
        out.push_str(&format!("{tile}\n"));
    }
    out
}

/// Row-per-r sketch of the grid. Each row is indented by `radius - r`
/// two-space steps so that successive rows appear staggered.
pub fn render_ascii(grid: &HexGrid) -> String {
    let radius = grid.radius();
    let mut out = String::new();
    for r in -radius..=radius {
        out.push_str(&"  ".repeat((radius - r) as usize));
        let q_min = (-radius).max(-r - radius);
        let q_max = radius.min(-r + radius);
        for q in q_min..=q_max {
            if grid.contains(HexCoord::new(q, r)) {
                out.push_str("o ");
            } else {
                out.push_str("  ");
            }
        }
        out.push('\n');
    }
    out
}

use crate::palette::Cell;

/// Cells per grid side at the public boundary (the CLI always renders this
/// many).
pub const GRID_CELLS: usize = 128;

/// Square size in pixels for one cell, border included.
pub const CELL_PX: usize = 8;

/// Render one animation step as a square image of palette indices.
///
/// `history[k]` is the snapshot captured after step `k`; `history[current]`
/// is the present state and must have been pushed already. Each cell is
/// drawn as a `scale`-pixel square outlined with the reserved border color.
///
/// Compositing rule: grid position (row `k`, column `id`) shows
/// `history[k][id]` when `k < current && id <= settled`, otherwise the
/// current snapshot. Rows below the active one thereby keep the settled
/// prefix they had when they were themselves the active frame, while the
/// active row keeps changing. This is a pure read; neither the history nor
/// the snapshots are mutated.
pub fn render_indexed(
    history: &[Vec<Cell>],
    current: usize,
    settled: usize,
    scale: usize,
) -> Vec<u8> {
    let n = history[current].len();
    let side = n * scale;
    let mut pixels = vec![0u8; side * side];

    for row in 0..n {
        for col in 0..n {
            let cell = if row < current && col <= settled {
                history[row][col]
            } else {
                history[current][col]
            };
            paint_square(&mut pixels, side, col, row, scale, cell);
        }
    }

    pixels
}

/// Lay down one cell as a filled square with a one-pixel outline in the
/// reserved border color (deliberately excluded from the data).
fn paint_square(pixels: &mut [u8], side: usize, col: usize, row: usize, scale: usize, cell: Cell) {
    for y in 0..scale {
        for x in 0..scale {
            let on_edge = x == 0 || y == 0 || x == scale - 1 || y == scale - 1;
            let index = if on_edge { Cell::BORDER } else { cell };
            pixels[(row * scale + y) * side + (col * scale + x)] = index.0;
        }
    }
}

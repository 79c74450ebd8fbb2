/// Index into the 16-color display palette.
///
/// Index 0 is the border/unsorted marker and is never stored as data; the
/// sortable values are the data colors 1..=15. Ordering derives from the
/// index, which is all the sort ever compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(pub u8);

impl Cell {
    /// Reserved square-outline color, excluded from generated data.
    pub const BORDER: Cell = Cell(0);

    /// Palette color for this index. Indices are always in `0..16`; a
    /// violation is a programming defect and panics rather than wrapping.
    pub fn rgb(self) -> [u8; 3] {
        RAINBOW[self.0 as usize]
    }
}

pub const PALETTE_LEN: usize = 16;

/// Number of colors available to data cells (indices 1..=15).
pub const DATA_COLORS: u8 = (PALETTE_LEN - 1) as u8;

pub const RAINBOW: [[u8; 3]; PALETTE_LEN] = [
    [120, 120, 120], // gray (border)
    [128, 0, 0],     // maroon
    [255, 0, 0],     // red
    [255, 128, 0],   // orange
    [255, 255, 0],   // yellow
    [128, 128, 0],   // olive
    [128, 255, 0],   // chartreuse
    [0, 128, 0],     // green
    [0, 255, 0],     // lime
    [0, 128, 128],   // teal
    [0, 255, 255],   // aqua
    [0, 128, 255],   // sky
    [0, 0, 255],     // blue
    [0, 0, 128],     // navy
    [128, 0, 128],   // purple
    [128, 0, 255],   // violet
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_is_index_zero() {
        assert_eq!(Cell::BORDER, Cell(0));
        assert_eq!(Cell::BORDER.rgb(), [120, 120, 120]);
    }

    #[test]
    fn cells_order_by_index() {
        assert!(Cell(1) < Cell(2));
        assert!(Cell(15) > Cell(14));
        assert_eq!(Cell(7), Cell(7));
    }
}

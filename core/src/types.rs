/// Single coordinate axis, used for row/column indices and grid dimensions.
pub type Coord = u16;

/// Count type used for mine counts and tile counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// `(row, col)` offsets of the 8 surrounding tiles, row-major.
const NEIGHBOR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up to 8 tiles around `center` that fall inside a grid of `size`.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> + use<> {
    let (row, col) = center;
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(d_row, d_col)| {
        let coords = (row.checked_add_signed(d_row)?, col.checked_add_signed(d_col)?);
        in_bounds(coords, size).then_some(coords)
    })
}

/// Single grid axis, used for a column or row index and for board dimensions.
pub type Coord = u8;

/// Count type used for mine counts, cell counts and cell identifiers.
pub type CellCount = u16;

/// Grid position `(column, row)`.
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

pub const fn area(columns: Coord, rows: Coord) -> CellCount {
    let columns = columns as CellCount;
    let rows = rows as CellCount;
    columns.saturating_mul(rows)
}

/// Identifier of the cell at `coords`, cells are numbered column by column.
pub const fn identifier_of((column, row): Coord2, (_, rows): Coord2) -> CellCount {
    column as CellCount * rows as CellCount + row as CellCount
}

/// Inverse of [`identifier_of`].
pub const fn coords_of(identifier: CellCount, (_, rows): Coord2) -> Coord2 {
    let rows = rows as CellCount;
    ((identifier / rows) as Coord, (identifier % rows) as Coord)
}

// The cell itself is never part of its own neighborhood.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the 8-connected neighborhood of `center`, clipped to a board of `size`.
pub fn neighbors(center: Coord2, size: Coord2) -> Neighbors {
    Neighbors {
        center,
        size,
        next: 0,
    }
}

#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    next: usize,
}

impl Neighbors {
    fn offset(&self, (dc, dr): (i8, i8)) -> Option<Coord2> {
        let (column, row) = self.center;
        let (columns, rows) = self.size;

        let column = column.checked_add_signed(dc).filter(|&c| c < columns)?;
        let row = row.checked_add_signed(dr).filter(|&r| r < rows)?;
        Some((column, row))
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = NEIGHBOR_OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = self.offset(delta) {
                return Some(coords);
            }
        }
        None
    }
}

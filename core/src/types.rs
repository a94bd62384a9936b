use crate::rules::GRID_SIZE;

/// Single coordinate axis used for grid rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Row-major position of a tile in the farm grid.
pub type TileIndex = u8;

/// Growth phase of a tile, `0` is empty and [`MATURE_STAGE`](crate::MATURE_STAGE) is harvestable.
pub type Stage = u8;

pub const fn mult(a: Coord, b: Coord) -> u16 {
    let a = a as u16;
    let b = b as u16;
    a.saturating_mul(b)
}

pub trait ToTileIndex {
    fn to_tile_index(self) -> TileIndex;
}

impl ToTileIndex for Coord2 {
    fn to_tile_index(self) -> TileIndex {
        let (row, col) = self;
        row * GRID_SIZE.1 + col
    }
}

/// Inverse of [`ToTileIndex`], returns `(row, col)`.
pub const fn position(index: TileIndex) -> Coord2 {
    (index / GRID_SIZE.1, index % GRID_SIZE.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TILE_COUNT;

    #[test]
    fn index_and_position_agree_across_the_grid() {
        for index in 0..TILE_COUNT as TileIndex {
            assert_eq!(position(index).to_tile_index(), index);
        }
        assert_eq!(position(0), (0, 0));
        assert_eq!(position(7), (1, 2));
        assert_eq!((4, 4).to_tile_index(), 24);
    }
}

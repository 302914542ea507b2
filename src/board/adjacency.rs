//! Static connectivity graph of the board
//!
//! Every intersection is joined to all eight surrounding intersections that
//! exist on the board (orthogonal and diagonal). The graph is built once at
//! compile time and stored as a fixed table keyed by cell index, so rule code
//! never recomputes geometry and never produces an off-board position.

use super::{Pos, BOARD_SIZE, TOTAL_CELLS};

/// The eight compass directions, scanned in row-major order
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbour list for one cell: up to 8 entries, `len` of them valid
#[derive(Debug, Clone, Copy)]
struct NeighborList {
    cells: [Pos; 8],
    len: u8,
}

const fn build_table() -> [NeighborList; TOTAL_CELLS] {
    let empty = NeighborList {
        cells: [Pos { row: 0, col: 0 }; 8],
        len: 0,
    };
    let mut table = [empty; TOTAL_CELLS];

    let mut idx = 0;
    while idx < TOTAL_CELLS {
        let row = (idx / BOARD_SIZE) as i32;
        let col = (idx % BOARD_SIZE) as i32;
        let mut d = 0;
        while d < DIRECTIONS.len() {
            let r = row + DIRECTIONS[d].0;
            let c = col + DIRECTIONS[d].1;
            if r >= 0 && r < BOARD_SIZE as i32 && c >= 0 && c < BOARD_SIZE as i32 {
                let n = table[idx].len as usize;
                table[idx].cells[n] = Pos {
                    row: r as u8,
                    col: c as u8,
                };
                table[idx].len += 1;
            }
            d += 1;
        }
        idx += 1;
    }
    table
}

static NEIGHBORS: [NeighborList; TOTAL_CELLS] = build_table();

/// Neighbours of `pos`, clipped to the board.
///
/// Corners have 3 neighbours, edge cells 5, interior cells 8.
#[inline]
pub fn neighbors(pos: Pos) -> &'static [Pos] {
    let entry = &NEIGHBORS[pos.to_index()];
    &entry.cells[..entry.len as usize]
}

/// True iff both coordinate deltas are at most 1 and not both 0
#[inline]
pub fn is_adjacent(a: Pos, b: Pos) -> bool {
    a.distance(b) == 1
}

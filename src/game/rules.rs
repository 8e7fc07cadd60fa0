//! Conway's B3/S23 transition rule over a toroidal [`Board`].

use super::board::{Board, Cell};

/// Moore neighbourhood offsets, `(di, dj)` excluding `(0, 0)`
const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live cells around `(row, col)`, wrapping at every edge
pub fn count_neighbours(board: &Board, row: i64, col: i64) -> u8 {
    NEIGHBOUR_OFFSETS
        .iter()
        .filter(|(di, dj)| board.get(row + di, col + dj).is_alive())
        .count() as u8
}

/// State of a cell in the next generation given its live neighbour count
pub fn next_state(cell: Cell, neighbours: u8) -> Cell {
    match (cell, neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,
    }
}

/// Compute the next generation of `current` into `next`.
///
/// `current` is only read, so every cell of `next` depends on generation N
/// alone. If the shapes differ, `next` is reshaped to match first.
pub fn evolve_into(current: &Board, next: &mut Board) {
    if next.rows() != current.rows() || next.cols() != current.cols() {
        *next = Board::new(current.rows(), current.cols());
    }

    let cols = current.cols();
    for (idx, slot) in next.cells_mut().iter_mut().enumerate() {
        let row = (idx / cols) as i64;
        let col = (idx % cols) as i64;
        let neighbours = count_neighbours(current, row, col);
        *slot = next_state(current.get(row, col), neighbours);
    }
}

/// Return the next generation as a fresh board
pub fn evolve(board: &Board) -> Board {
    let mut next = Board::new(board.rows(), board.cols());
    evolve_into(board, &mut next);
    next
}

//! Unit tests for rk-board.

use rk_core::{Cell, Consistency, RookId};

use crate::{Board, BoardBuilder, SlotKey};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn board_with(cells: &[(i32, i32)], consistency: Consistency) -> (Board, Vec<SlotKey>) {
    let mut b = BoardBuilder::new(8, consistency);
    for &(x, y) in cells {
        b.place_at(Cell::new(x, y)).unwrap();
    }
    b.build()
}

fn relaxed(cells: &[(i32, i32)]) -> (Board, Vec<SlotKey>) {
    board_with(cells, Consistency::Relaxed)
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use rk_core::{RkError, SimRng};

    use super::*;

    #[test]
    fn ids_follow_creation_order() {
        let mut b = BoardBuilder::new(8, Consistency::Relaxed);
        assert_eq!(b.place_at(Cell::new(1, 1)).unwrap(), RookId(0));
        assert_eq!(b.place_at(Cell::new(2, 2)).unwrap(), RookId(1));
        let (board, keys) = b.build();
        assert_eq!(keys[1].rook(), RookId(1));
        assert_eq!(board.position(RookId(1)), Cell::new(2, 2));
    }

    #[test]
    fn place_at_rejects_occupied_cell() {
        let mut b = BoardBuilder::new(8, Consistency::Relaxed);
        b.place_at(Cell::new(3, 3)).unwrap();
        assert!(matches!(b.place_at(Cell::new(3, 3)), Err(RkError::CellOccupied(_))));
    }

    #[test]
    fn place_at_rejects_off_board_cell() {
        let mut b = BoardBuilder::new(8, Consistency::Relaxed);
        assert!(matches!(
            b.place_at(Cell::new(9, 0)),
            Err(RkError::OutOfBounds { field_size: 8, .. })
        ));
        assert!(b.place_at(Cell::new(8, 8)).is_ok(), "upper bound is inclusive");
    }

    #[test]
    fn random_placement_is_distinct_and_in_bounds() {
        for seed in 0..50 {
            let mut rng = SimRng::new(seed);
            let mut b = BoardBuilder::new(8, Consistency::Relaxed);
            for _ in 0..6 {
                b.place_random(&mut rng);
            }
            let cells = b.placed().to_vec();
            for (i, a) in cells.iter().enumerate() {
                assert!(a.within(8));
                for c in &cells[i + 1..] {
                    assert_ne!(a, c, "seed {seed}: duplicate start cell");
                }
            }
        }
    }

    #[test]
    fn random_placement_fills_a_tiny_board() {
        // field_size 1 → 4 cells; the retry loop must still find the last one.
        let mut rng = SimRng::new(11);
        let mut b = BoardBuilder::new(1, Consistency::Relaxed);
        for _ in 0..4 {
            b.place_random(&mut rng);
        }
        let mut cells = b.placed().to_vec();
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn occupancy_includes_every_rook() {
        let (board, _) = relaxed(&[(0, 0), (4, 5)]);
        assert!(board.is_occupied(Cell::new(0, 0)));
        assert!(board.is_occupied(Cell::new(4, 5)));
        assert!(!board.is_occupied(Cell::new(5, 4)));
    }

    #[test]
    fn horizontal_path_blocked_by_rook_in_between() {
        let (board, _) = relaxed(&[(1, 3), (4, 3)]);
        let blocker = board.path_blocker(RookId(0), Cell::new(6, 3)).unwrap();
        assert_eq!(blocker.rook, RookId(1));
        assert_eq!(blocker.at, Cell::new(4, 3));
    }

    #[test]
    fn target_cell_counts_as_obstruction() {
        let (board, _) = relaxed(&[(1, 3), (4, 3)]);
        assert!(board.is_path_obstructed(RookId(0), Cell::new(4, 3)));
        assert!(!board.is_path_obstructed(RookId(0), Cell::new(3, 3)));
    }

    #[test]
    fn rook_beyond_target_does_not_block() {
        let (board, _) = relaxed(&[(1, 3), (7, 3)]);
        assert!(!board.is_path_obstructed(RookId(0), Cell::new(6, 3)));
    }

    #[test]
    fn vertical_path_both_directions() {
        let (board, _) = relaxed(&[(2, 5), (2, 2), (2, 8)]);
        assert_eq!(board.path_blocker(RookId(0), Cell::new(2, 0)).map(|b| b.rook), Some(RookId(1)));
        assert_eq!(board.path_blocker(RookId(0), Cell::new(2, 8)).map(|b| b.rook), Some(RookId(2)));
        assert!(!board.is_path_obstructed(RookId(0), Cell::new(2, 3)));
    }

    #[test]
    fn rooks_on_other_lines_never_block() {
        let (board, _) = relaxed(&[(0, 0), (3, 1), (1, 3)]);
        assert!(!board.is_path_obstructed(RookId(0), Cell::new(8, 0)));
        assert!(!board.is_path_obstructed(RookId(0), Cell::new(0, 8)));
    }

    #[test]
    fn own_cell_is_not_an_obstruction() {
        let (board, _) = relaxed(&[(4, 4)]);
        assert!(!board.is_path_obstructed(RookId(0), Cell::new(4, 4)));
        assert!(!board.is_path_obstructed(RookId(0), Cell::new(0, 4)));
    }
}

// ── Surround detection ────────────────────────────────────────────────────────

#[cfg(test)]
mod surround {
    use super::*;

    fn finish_all_but_first(board: &Board, keys: &[SlotKey]) {
        for key in &keys[1..] {
            board.mark_finished(key);
        }
    }

    #[test]
    fn boxed_by_finished_rooks_in_the_interior() {
        let (board, keys) = relaxed(&[(4, 4), (5, 4), (3, 4), (4, 5), (4, 3)]);
        assert!(!board.is_surrounded(RookId(0), false), "neighbours still moving");
        finish_all_but_first(&board, &keys);
        assert!(board.is_surrounded(RookId(0), false));
    }

    #[test]
    fn three_sides_is_not_surrounded() {
        let (board, keys) = relaxed(&[(4, 4), (5, 4), (3, 4), (4, 5)]);
        finish_all_but_first(&board, &keys);
        assert!(!board.is_surrounded(RookId(0), false));
    }

    #[test]
    fn corner_needs_four_finished_neighbours() {
        let (board, keys) = relaxed(&[(0, 0), (1, 0), (0, 1)]);
        finish_all_but_first(&board, &keys);
        assert!(!board.is_surrounded(RookId(0), false));
    }

    #[test]
    fn board_edges_count_as_walls_when_enabled() {
        let (board, keys) = relaxed(&[(0, 0), (1, 0), (0, 1)]);
        finish_all_but_first(&board, &keys);
        assert!(board.is_surrounded(RookId(0), true));
    }

    #[test]
    fn edge_rook_with_three_finished_neighbours() {
        let (board, keys) = relaxed(&[(8, 4), (7, 4), (8, 5), (8, 3)]);
        finish_all_but_first(&board, &keys);
        assert!(!board.is_surrounded(RookId(0), false));
        assert!(board.is_surrounded(RookId(0), true));
    }

    #[test]
    fn one_unfinished_neighbour_breaks_the_box() {
        let (board, keys) = relaxed(&[(8, 4), (7, 4), (8, 5), (8, 3)]);
        board.mark_finished(&keys[1]);
        board.mark_finished(&keys[2]);
        assert!(!board.is_surrounded(RookId(0), true));
        board.mark_finished(&keys[3]);
        assert!(board.is_surrounded(RookId(0), true));
    }
}

// ── Writes and consistency ────────────────────────────────────────────────────

#[cfg(test)]
mod writes {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn commit_moves_only_the_owner() {
        let (board, keys) = relaxed(&[(0, 0), (5, 5)]);
        board.commit(&keys[0], Cell::new(0, 7));
        assert_eq!(board.positions(), vec![Cell::new(0, 7), Cell::new(5, 5)]);
        assert!(!board.is_occupied(Cell::new(0, 0)));
    }

    #[test]
    fn mark_finished_is_per_rook() {
        let (board, keys) = relaxed(&[(0, 0), (5, 5)]);
        board.mark_finished(&keys[1]);
        assert!(!board.is_finished(RookId(0)));
        assert!(board.is_finished(RookId(1)));
    }

    #[test]
    fn relaxed_board_has_no_section() {
        let (board, _) = relaxed(&[(0, 0)]);
        assert!(board.critical_section().is_none());
    }

    #[test]
    fn strict_section_serialises_check_then_commit() {
        // Two rooks race for the same free cell on their shared row.  Under
        // the strict section exactly one check succeeds.
        let (board, keys) = board_with(&[(0, 0), (8, 0)], Consistency::Strict);
        let board = Arc::new(board);
        let target = Cell::new(4, 0);

        let handles: Vec<_> = keys
            .into_iter()
            .map(|key| {
                let board = Arc::clone(&board);
                thread::spawn(move || {
                    let _section = board.critical_section();
                    if board.is_occupied(target) || board.is_path_obstructed(key.rook(), target) {
                        return false;
                    }
                    board.commit(&key, target);
                    true
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();
        assert_eq!(wins, 1);
        let positions = board.positions();
        assert_ne!(positions[0], positions[1]);
    }
}

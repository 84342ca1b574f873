//! Tests for gate candidate scanning and incremental selection

#[cfg(test)]
mod tests {
    use crate::support::{ScriptedRng, grid_from_rows, walled_open};
    use graveyard::GenerationError;
    use graveyard::algorithm::gate::{gate_candidates, select_gate};
    use graveyard::spatial::squares::{FLAT_BOTTOM, classify};
    use graveyard::spatial::{CellState, Coord, Grid};

    // Tests candidates along the bottom border of an open field
    // Verified by scanning x in ascending order
    #[test]
    fn test_candidates_on_open_field() {
        let squares = classify(&walled_open(10, 10));

        let coords: Vec<Coord> = gate_candidates(&squares)
            .iter()
            .map(|square| square.coord())
            .collect();

        assert_eq!(
            coords,
            vec![
                Coord::new(6, 0),
                Coord::new(5, 0),
                Coord::new(4, 0),
                Coord::new(3, 0),
                Coord::new(2, 0),
            ]
        );
    }

    // Tests that y descends within each column
    // Verified by making y the outer loop
    #[test]
    fn test_candidate_scan_order() {
        let grid = grid_from_rows(&[
            "#######", //
            "#.....#", //
            "#.....#", //
            "#.....#", //
            "#######", //
            "#.....#", //
            "#######", //
        ]);

        let coords: Vec<Coord> = gate_candidates(&classify(&grid))
            .iter()
            .map(|square| square.coord())
            .collect();

        assert_eq!(
            coords,
            vec![
                Coord::new(3, 2),
                Coord::new(3, 0),
                Coord::new(2, 2),
                Coord::new(2, 0),
            ]
        );
    }

    // Tests that every candidate is flanked by flat squares
    // Verified by checking only the candidate itself
    #[test]
    fn test_candidates_need_flat_neighbours() {
        let grid = grid_from_rows(&[
            "######", //
            "#....#", //
            "#....#", //
            "##..##", //
            "######", //
        ]);
        let squares = classify(&grid);

        assert!(gate_candidates(&squares).is_empty());
    }

    // Tests the incremental acceptance walk over candidates
    // Verified by resetting the chance after each rejection
    #[test]
    fn test_select_gate_rising_chance() {
        let squares = classify(&walled_open(10, 10));
        let mut rng = ScriptedRng::new(&[0.9, 0.9, 0.5]);

        let gate = select_gate(&squares, &mut rng).expect("five candidates");

        assert_eq!(gate.coord(), Coord::new(4, 0));
        assert!(gate.configuration.is(FLAT_BOTTOM));
        assert_eq!(rng.draws_taken(), 3);
    }

    // Tests that an early low draw commits to the first candidate
    // Verified by skipping the first candidate
    #[test]
    fn test_select_gate_first_candidate() {
        let squares = classify(&walled_open(10, 10));
        let mut rng = ScriptedRng::new(&[0.05]);

        let gate = select_gate(&squares, &mut rng).expect("five candidates");

        assert_eq!(gate.coord(), Coord::new(6, 0));
        assert_eq!(rng.draws_taken(), 1);
    }

    // Tests the error when no flat opening exists
    // Verified by returning a default square instead of an error
    #[test]
    fn test_select_gate_without_candidates() {
        let squares = classify(&Grid::filled(8, 8, CellState::Wall));
        let mut rng = ScriptedRng::new(&[]);

        let result = select_gate(&squares, &mut rng);

        assert!(matches!(
            result,
            Err(GenerationError::NoGateFound { candidates: 0 })
        ));
        assert_eq!(rng.draws_taken(), 0);
    }

    // Tests grids too small to hold a flanked candidate
    // Verified by subtracting from the square width without saturating
    #[test]
    fn test_candidates_on_tiny_grid() {
        let squares = classify(&walled_open(3, 3));

        assert!(gate_candidates(&squares).is_empty());
    }
}

//! Tests for corridor walks, branching and square reservation

#[cfg(test)]
mod tests {
    use crate::support::walled_open;
    use graveyard::algorithm::bitmap::generate_bitmap;
    use graveyard::algorithm::gate::select_gate;
    use graveyard::algorithm::paths::{Direction, PathConfig, PathWalk, grow_paths};
    use graveyard::algorithm::pockets::eliminate_pockets;
    use graveyard::spatial::squares::classify;
    use graveyard::spatial::{CellState, Configuration, Coord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const SINGLE_WALK: PathConfig = PathConfig {
        avg_length: 4,
        branches: 0,
        generations: 0,
    };

    // Tests a straight walk north from the gate on open ground
    // Verified by reserving the gate square itself
    #[test]
    fn test_walk_north_from_gate() {
        let mut grid = walled_open(10, 10);
        let mut squares = classify(&grid);
        let gate = squares.get(Coord::new(4, 0)).expect("gate square");
        let mut rng = StdRng::seed_from_u64(3);

        let network = grow_paths(&gate, &mut squares, &mut grid, &SINGLE_WALK, &mut rng);

        let walk = network.walks.first().expect("one walk");
        assert_eq!(network.walks.len(), 1);
        assert_eq!(walk.origin, Coord::new(4, 0));
        assert_eq!(walk.direction, Direction::North);
        assert!((3..=5).contains(&walk.target_length));
        assert_eq!(walk.advanced, walk.target_length);

        let expected: Vec<Coord> = (1..=walk.target_length)
            .map(|y| Coord::new(4, y))
            .collect();
        assert_eq!(network.reserved, expected);
        assert_eq!(squares.reserved_count(), walk.target_length);
        assert_eq!(grid.count(CellState::Path), walk.target_length);
        for coord in &expected {
            assert_eq!(grid.get(*coord), Some(CellState::Path));
        }
    }

    // Tests that a walk stops at the first square touching a wall
    // Verified by skipping blocked squares instead of stopping
    #[test]
    fn test_walk_stops_at_wall() {
        let mut grid = walled_open(10, 10);
        grid.set(Coord::new(4, 3), CellState::Wall);
        let mut squares = classify(&grid);
        let gate = squares.get(Coord::new(4, 0)).expect("gate square");
        let mut rng = StdRng::seed_from_u64(3);

        let network = grow_paths(&gate, &mut squares, &mut grid, &SINGLE_WALK, &mut rng);

        assert_eq!(network.reserved, vec![Coord::new(4, 1)]);
        assert_eq!(
            squares.configuration(Coord::new(4, 2)),
            Some(Configuration::Corners(8))
        );
    }

    // Tests that children start where their parent ended
    // Verified by branching from the gate instead of the walk end
    #[test]
    fn test_branches_start_at_walk_end() {
        let mut grid = walled_open(20, 20);
        let mut squares = classify(&grid);
        let gate = squares.get(Coord::new(9, 0)).expect("gate square");
        let config = PathConfig {
            avg_length: 4,
            branches: 2,
            generations: 1,
        };
        let mut rng = StdRng::seed_from_u64(11);

        let network = grow_paths(&gate, &mut squares, &mut grid, &config, &mut rng);

        assert_eq!(network.walks.len(), 3);
        let trunk = network.walks.first().expect("trunk");
        for child in network.walks.iter().skip(1) {
            assert_eq!(child.origin, trunk.end());
            assert_eq!(child.generation, 1);
        }
    }

    // Tests that branching stops at the generation limit
    // Verified by comparing generations with <= instead of <
    #[test]
    fn test_branching_respects_generation_limit() {
        for seed in 0..10 {
            let mut grid = walled_open(30, 30);
            let mut squares = classify(&grid);
            let gate = squares.get(Coord::new(14, 0)).expect("gate square");
            let config = PathConfig {
                avg_length: 5,
                branches: 2,
                generations: 2,
            };
            let mut rng = StdRng::seed_from_u64(seed);

            let network = grow_paths(&gate, &mut squares, &mut grid, &config, &mut rng);

            assert!(network.walks.len() <= 7, "seed {seed}");
            assert!(network.walks.iter().all(|walk| walk.generation <= 2));
            assert_eq!(
                network.walks.iter().map(|walk| walk.advanced).sum::<usize>(),
                network.reserved.len()
            );
        }
    }

    // Tests that only fully open squares are reserved, each at most once
    // Verified by accepting any non-reserved square
    #[test]
    fn test_reserved_squares_were_open() {
        let config = PathConfig {
            avg_length: 6,
            branches: 3,
            generations: 2,
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = generate_bitmap(40, 30, 0.45, &mut rng);
            eliminate_pockets(&mut grid, 10, 20);
            let before = classify(&grid);
            let mut squares = before.clone();
            let Ok(gate) = select_gate(&squares, &mut rng) else {
                continue;
            };

            let network = grow_paths(&gate, &mut squares, &mut grid, &config, &mut rng);

            let unique: HashSet<Coord> = network.reserved.iter().copied().collect();
            assert_eq!(unique.len(), network.reserved.len(), "seed {seed}");
            for coord in &network.reserved {
                assert_eq!(
                    before.configuration(*coord),
                    Some(Configuration::Corners(0)),
                    "seed {seed} at {coord:?}"
                );
                assert_eq!(
                    squares.configuration(*coord),
                    Some(Configuration::ReservedForPath)
                );
            }
        }
    }

    // Tests direction deltas and their ordering
    // Verified by swapping the diagonal deltas
    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::North.delta(), (0, 1));
        assert_eq!(Direction::SouthWest.delta(), (-1, -1));

        let deltas: HashSet<(isize, isize)> =
            Direction::ALL.iter().map(|direction| direction.delta()).collect();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));

        for (first, second) in Direction::ALL.iter().zip(Direction::ALL.iter().skip(4)) {
            let (ax, ay) = first.delta();
            let (bx, by) = second.delta();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }

    // Tests that random directions cover the compass
    // Verified by drawing from 0..4
    #[test]
    fn test_random_direction_covers_all() {
        let mut rng = StdRng::seed_from_u64(5);
        let seen: HashSet<Direction> = (0..400).map(|_| Direction::random(&mut rng)).collect();

        assert_eq!(seen.len(), 8);
    }

    // Tests walk stepping and end resolution
    // Verified by wrapping negative coordinates
    #[test]
    fn test_walk_step_and_end() {
        let walk = PathWalk {
            origin: Coord::new(2, 0),
            direction: Direction::East,
            target_length: 5,
            advanced: 3,
            generation: 0,
        };
        assert_eq!(walk.end(), Coord::new(5, 0));
        assert_eq!(walk.step(1), Some(Coord::new(3, 0)));

        let stalled = PathWalk {
            direction: Direction::South,
            advanced: 0,
            ..walk
        };
        assert_eq!(stalled.step(1), None);
        assert_eq!(stalled.end(), Coord::new(2, 0));
    }
}

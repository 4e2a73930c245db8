//! Unit tests for rk-core primitives.

#[cfg(test)]
mod ids {
    use crate::RookId;

    #[test]
    fn index_roundtrip() {
        let id = RookId(5);
        assert_eq!(id.index(), 5);
        assert_eq!(RookId::try_from(5usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_creation_order() {
        assert!(RookId(0) < RookId(1));
    }

    #[test]
    fn display() {
        assert_eq!(RookId(3).to_string(), "RookId(3)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Axis, Cell};

    #[test]
    fn with_replaces_one_axis() {
        let c = Cell::new(2, 5);
        assert_eq!(c.with(Axis::X, 7), Cell::new(7, 5));
        assert_eq!(c.with(Axis::Y, 0), Cell::new(2, 0));
    }

    #[test]
    fn within_is_inclusive_of_field_size() {
        assert!(Cell::new(0, 0).within(8));
        assert!(Cell::new(8, 8).within(8));
        assert!(!Cell::new(9, 0).within(8));
        assert!(!Cell::new(0, -1).within(8));
    }

    #[test]
    fn neighbours_are_orthogonal() {
        let n = Cell::new(3, 3).neighbours();
        assert!(n.contains(&Cell::new(4, 3)));
        assert!(n.contains(&Cell::new(2, 3)));
        assert!(n.contains(&Cell::new(3, 4)));
        assert!(n.contains(&Cell::new(3, 2)));
    }

    #[test]
    fn segment_excludes_start_includes_target() {
        let from = Cell::new(1, 4);
        let to = Cell::new(5, 4);
        assert!(!from.segment_contains(to, from));
        assert!(from.segment_contains(to, Cell::new(3, 4)));
        assert!(from.segment_contains(to, to));
        assert!(!from.segment_contains(to, Cell::new(6, 4)));
        assert!(!from.segment_contains(to, Cell::new(3, 5)), "other row");
    }

    #[test]
    fn segment_works_in_both_directions() {
        let from = Cell::new(2, 7);
        let to = Cell::new(2, 1);
        assert!(from.segment_contains(to, Cell::new(2, 1)));
        assert!(from.segment_contains(to, Cell::new(2, 6)));
        assert!(!from.segment_contains(to, Cell::new(2, 0)));
        assert!(!from.segment_contains(to, Cell::new(2, 8)));
    }

    #[test]
    fn zero_displacement_segment_is_empty() {
        let c = Cell::new(4, 4);
        for other in c.neighbours() {
            assert!(!c.segment_contains(c, other));
        }
        assert!(!c.segment_contains(c, c));
    }

    #[test]
    fn display_matches_log_format() {
        assert_eq!(Cell::new(3, 8).to_string(), "(3,8)");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{Consistency, SimConfig};

    #[test]
    fn defaults_are_the_fixed_parameters() {
        let c = SimConfig::default();
        assert_eq!(c.field_size, 8);
        assert_eq!(c.cells_per_axis(), 9);
        assert_eq!((c.rook_count_min, c.rook_count_max), (4, 6));
        assert_eq!(c.step_max_count, 50);
        assert_eq!((c.step_delay_min_ms, c.step_delay_max_ms), (200, 300));
        assert_eq!(c.collision_timeout, Duration::from_secs(5));
        assert_eq!(c.warmup, Duration::from_secs(1));
        assert_eq!(c.consistency, Consistency::Relaxed);
        assert!(c.detect_surrounded);
        assert!(!c.edges_as_walls);
        c.validate().unwrap();
    }

    #[test]
    fn rejects_inverted_ranges() {
        let c = SimConfig { rook_count_min: 6, rook_count_max: 4, ..SimConfig::default() };
        assert!(c.validate().is_err());
        let c = SimConfig { step_delay_min_ms: 10, step_delay_max_ms: 5, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(SimConfig { field_size: 0, ..SimConfig::default() }.validate().is_err());
        assert!(SimConfig { step_max_count: 0, ..SimConfig::default() }.validate().is_err());
        assert!(SimConfig { rook_count_min: 0, ..SimConfig::default() }.validate().is_err());
    }

    #[test]
    fn rook_count_capped_by_board() {
        let c = SimConfig { field_size: 2, ..SimConfig::default() };
        assert_eq!(c.max_rooks(), 4);
        assert!(c.check_rook_count(4).is_ok());
        assert!(c.check_rook_count(5).is_err());
        assert!(c.validate().is_err(), "default max of 6 does not fit field_size 2");
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomInt, RookId, RookRng, SimRng};

    #[test]
    fn random_int_stays_in_inclusive_range() {
        let mut rng = RookRng::new(7, RookId(0));
        let mut seen = [false; 9];
        for _ in 0..2_000 {
            let v = rng.random_int(0, 8);
            assert!((0..=8).contains(&v));
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value including 8 is drawn");
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = SimRng::new(1);
        assert_eq!(rng.random_int(5, 5), 5);
        assert_eq!(rng.random_int(5, 2), 5);
        assert_eq!(rng.gen_count(4, 4), 4);
    }

    #[test]
    fn same_seed_same_rook_same_stream() {
        let mut a = RookRng::new(99, RookId(2));
        let mut b = RookRng::new(99, RookId(2));
        let xs: Vec<i32> = (0..16).map(|_| a.random_int(0, 1000)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.random_int(0, 1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_rooks_get_different_streams() {
        let mut a = RookRng::new(99, RookId(0));
        let mut b = RookRng::new(99, RookId(1));
        let xs: Vec<i32> = (0..16).map(|_| a.random_int(0, 1_000_000)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.random_int(0, 1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_count_covers_range() {
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let n = rng.gen_count(4, 6);
            assert!((4..=6).contains(&n));
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_support {
    use std::time::Duration;

    use crate::{Cell, Consistency, RookId, SimConfig};

    #[test]
    fn config_survives_json() {
        let config = SimConfig {
            consistency:       Consistency::Strict,
            collision_timeout: Duration::from_millis(750),
            edges_as_walls:    true,
            seed:              Some(42),
            ..SimConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.consistency, Consistency::Strict);
        assert_eq!(back.collision_timeout, Duration::from_millis(750));
        assert!(back.edges_as_walls);
        assert_eq!(back.seed, Some(42));
        assert_eq!(back.field_size, config.field_size);
        back.validate().unwrap();
    }

    #[test]
    fn cell_and_id_are_plain_json() {
        let cell: Cell = serde_json::from_str(r#"{"x":3,"y":7}"#).unwrap();
        assert_eq!(cell, Cell::new(3, 7));
        assert_eq!(serde_json::to_string(&RookId(2)).unwrap(), "2");
    }
}

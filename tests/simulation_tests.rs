use toroidal_life::{Grid, Pattern, Simulation, domain::rules};

/// Snapshot the current generation of a simulation as a plain grid
fn snapshot(sim: &Simulation) -> Grid {
    sim.current().clone()
}

/// Recompute the expected next generation by counting neighbors directly
fn expected_next(before: &Grid) -> Vec<(usize, usize)> {
    let (width, height) = before.dimensions();
    let mut alive = Vec::new();

    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let mut neighbors = 0;
            for dy in [-1, 0, 1] {
                for dx in [-1, 0, 1] {
                    if (dx, dy) != (0, 0) && before.is_alive(x + dx, y + dy) {
                        neighbors += 1;
                    }
                }
            }
            let self_alive = before.is_alive(x, y);
            if neighbors == 3 || (neighbors == 2 && self_alive) {
                alive.push((x as usize, y as usize));
            }
        }
    }

    alive
}

fn recount(sim: &Simulation) -> usize {
    let size = sim.size() as i64;
    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| sim.is_alive(x, y))
        .count()
}

#[test]
fn test_ten_cell_row_scenario() {
    let mut sim = Simulation::new(10, Pattern::TenCellRow).unwrap();
    assert_eq!(sim.live_cell_count(), 10);

    let before = snapshot(&sim);
    sim.step();

    let actual: Vec<_> = sim.live_cells().collect();
    assert_eq!(actual, expected_next(&before));
}

#[test]
fn test_ten_cell_row_on_ten_grid_is_full_ring() {
    // The row spans the full width, so every row cell has exactly 2
    // neighbors and the cells directly above and below have exactly 3.
    let mut sim = Simulation::new(10, Pattern::TenCellRow).unwrap();
    sim.step();

    for x in 0..10 {
        assert!(sim.is_alive(x, 4));
        assert!(sim.is_alive(x, 5));
        assert!(sim.is_alive(x, 6));
    }
    assert_eq!(sim.live_cell_count(), 30);
}

#[test]
fn test_every_pattern_follows_rule_for_many_steps() {
    for pattern in Pattern::all() {
        let mut sim = Simulation::with_seed(24, pattern, 99).unwrap();
        for generation in 0..30 {
            let before = snapshot(&sim);
            sim.step();
            let actual: Vec<_> = sim.live_cells().collect();
            assert_eq!(
                actual,
                expected_next(&before),
                "{} diverged at generation {}", pattern.name(), generation
            );
        }
    }
}

#[test]
fn test_live_count_matches_recount() {
    let mut sim = Simulation::with_seed(32, Pattern::Random, 2024).unwrap();
    for _ in 0..25 {
        let count = sim.live_cell_count();
        assert!(count <= 32 * 32);
        assert_eq!(count, recount(&sim));
        sim.step();
    }
}

#[test]
fn test_seeded_random_is_deterministic() {
    let mut a = Simulation::with_seed(40, Pattern::Random, 7).unwrap();
    let mut b = Simulation::with_seed(40, Pattern::Random, 7).unwrap();

    for _ in 0..20 {
        assert_eq!(a.current(), b.current());
        a.step();
        b.step();
    }
    assert_eq!(a.current(), b.current());
}

#[test]
fn test_fixed_patterns_are_deterministic() {
    for pattern in [Pattern::Exploder, Pattern::TenCellRow, Pattern::GliderGun] {
        let mut a = Simulation::new(48, pattern).unwrap();
        let mut b = Simulation::new(48, pattern).unwrap();
        for _ in 0..15 {
            a.step();
            b.step_parallel();
        }
        assert_eq!(a.current(), b.current(), "{}", pattern.name());
    }
}

#[test]
fn test_glider_gun_layout_keeps_block_still_lifes_for_first_step() {
    // The left and right 2x2 blocks of the layout have no other live cells
    // within reach, so they must survive the first step untouched.
    let mut sim = Simulation::new(60, Pattern::GliderGun).unwrap();
    sim.step();

    let c = 30;
    for (dx, dy) in [(-18, 2), (-17, 2), (-18, 3), (-17, 3), (16, 4), (17, 4), (16, 5), (17, 5)] {
        assert!(sim.is_alive(c + dx, c + dy), "block cell ({}, {}) died", dx, dy);
    }
}

#[test]
fn test_single_cell_on_three_grid_dies() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(0, 0, true);

    let mut next = Grid::new(3, 3).unwrap();
    next.evolve_from(&grid);
    assert_eq!(next.count_alive(), 0);
}

#[test]
fn test_rule_function_matches_standard_life() {
    for n in 0..=8 {
        assert_eq!(rules::next_state(false, n), n == 3);
        assert_eq!(rules::next_state(true, n), n == 2 || n == 3);
    }
}

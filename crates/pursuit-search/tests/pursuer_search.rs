use pursuit_core::{Grid, Position};
use pursuit_search::{choose_pursuer_move, DEFAULT_DEPTH};

#[test]
fn pursuer_captures_an_adjacent_evader() {
    let grid = Grid::new(3);
    let next = choose_pursuer_move(&grid, Position::new(1, 1), Position::new(0, 1), 1);
    assert_eq!(next, Position::new(0, 1));

    let next = choose_pursuer_move(&grid, Position::new(1, 1), Position::new(0, 1), DEFAULT_DEPTH);
    assert_eq!(next, Position::new(0, 1));
}

#[test]
fn ties_break_in_down_up_right_left_order() {
    let grid = Grid::new(3);

    // Down and right both end one step from the evader; down is tried first.
    let next = choose_pursuer_move(&grid, Position::new(0, 0), Position::new(0, 2), DEFAULT_DEPTH);
    assert_eq!(next, Position::new(1, 0));

    // With a single ply only the immediate distance matters.
    let next = choose_pursuer_move(&grid, Position::new(0, 0), Position::new(0, 2), 1);
    assert_eq!(next, Position::new(0, 1));
}

#[test]
fn pursuer_heads_towards_the_evader() {
    let grid = Grid::new(5);
    let center = Position::new(2, 2);
    assert_eq!(choose_pursuer_move(&grid, center, Position::new(0, 2), 1), Position::new(1, 2));
    assert_eq!(choose_pursuer_move(&grid, center, Position::new(4, 2), 1), Position::new(3, 2));
    assert_eq!(choose_pursuer_move(&grid, center, Position::new(2, 0), 1), Position::new(2, 1));
    for depth in 1..=3 {
        assert_eq!(choose_pursuer_move(&grid, center, Position::new(2, 4), depth), Position::new(2, 3));
    }
}

#[test]
fn depth_zero_keeps_the_pursuer_in_place() {
    let grid = Grid::new(5);
    let pursuer = Position::new(0, 4);
    assert_eq!(choose_pursuer_move(&grid, pursuer, Position::new(4, 4), 0), pursuer);
}

#[test]
fn walled_in_pursuer_does_not_move() {
    let pursuer = Position::new(0, 0);
    let grid = Grid::with_walls(3, [Position::new(0, 1), Position::new(1, 0)]).expect("in bounds");
    assert_eq!(choose_pursuer_move(&grid, pursuer, Position::new(2, 2), DEFAULT_DEPTH), pursuer);
}

#[test]
fn walled_in_evader_counts_as_caught() {
    // With no reply for the evader every line scores the capture bound, so the first
    // direction in order wins even though it leads away.
    let evader = Position::new(1, 3);
    let walls = [(0, 3), (2, 3), (1, 2), (1, 4)].map(Position::from);
    let grid = Grid::with_walls(7, walls).expect("in bounds");

    assert_eq!(choose_pursuer_move(&grid, Position::new(5, 3), evader, DEFAULT_DEPTH), Position::new(6, 3));
    assert_eq!(choose_pursuer_move(&grid, Position::new(5, 3), evader, 1), Position::new(4, 3));
}

#[test]
fn pursuer_never_proposes_a_wall() {
    let grid = Grid::parse(&[".#...", ".#.#.", ".....", "##.#.", "....."]).expect("valid rows");
    let mut pursuer = Position::new(0, 0);
    let evader = Position::new(4, 4);
    for _ in 0..12 {
        let next = choose_pursuer_move(&grid, pursuer, evader, DEFAULT_DEPTH);
        assert!(grid.is_open(next));
        assert!(next == pursuer || next.is_adjacent(pursuer));
        pursuer = next;
    }
    assert_eq!(pursuer, evader, "a static evader is eventually reached");
}

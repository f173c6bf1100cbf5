use core::cmp::Ordering;
use std::collections::BinaryHeap;

use pursuit_core::{evader_heuristic, Grid, Position};

/// Cells within this Manhattan distance of the pursuer are never expanded.
pub const DANGER_RADIUS: u32 = 1;

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    tie: u64,
    pos: Position,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, u64) {
        (self.f, self.g, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

fn cell_index(grid: &Grid, pos: Position) -> usize {
    pos.row as usize * grid.size() + pos.col as usize
}

fn reconstruct_path(came_from: &[Option<Position>], grid: &Grid, goal: Position) -> Vec<Position> {
    let mut out = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[cell_index(grid, current)] {
        current = prev;
        out.push(current);
    }
    out.reverse();
    out
}

/// Shortest path from `evader` to `goal` that never enters a cell within `radius` of the
/// pursuer.
///
/// The returned path starts at `evader` and ends at `goal`; `None` means the goal is cut off.
/// The frontier is ordered by `(f, g)` and then by insertion, so equal-cost paths resolve the
/// same way on every call. Each cell is expanded at most once.
pub fn plan_evader_path(
    grid: &Grid,
    evader: Position,
    goal: Position,
    pursuer: Position,
    radius: u32,
) -> Option<Vec<Position>> {
    if !grid.is_in_bounds(evader) || !grid.is_in_bounds(goal) {
        return None;
    }
    if evader == goal {
        return Some(vec![evader]);
    }

    let len = grid.size() * grid.size();
    let mut open = BinaryHeap::<OpenNode>::new();
    let mut tie: u64 = 0;
    let mut g_score = vec![u32::MAX; len];
    let mut came_from: Vec<Option<Position>> = vec![None; len];
    let mut closed = vec![false; len];
    let mut expansions: usize = 0;

    g_score[cell_index(grid, evader)] = 0;
    open.push(OpenNode {
        f: evader_heuristic(evader, goal),
        g: 0,
        tie,
        pos: evader,
    });
    tie += 1;

    while let Some(node) = open.pop() {
        let node_idx = cell_index(grid, node.pos);
        if closed[node_idx] {
            // Stale heap entry.
            continue;
        }

        if node.pos == goal {
            tracing::trace!(expansions, cost = node.g, "evader path found");
            return Some(reconstruct_path(&came_from, grid, goal));
        }

        closed[node_idx] = true;
        expansions += 1;

        for next in grid.legal_moves(node.pos) {
            if next.manhattan(pursuer) <= radius {
                continue;
            }

            let next_idx = cell_index(grid, next);
            if closed[next_idx] {
                continue;
            }

            let tentative_g = node.g.saturating_add(1);
            if tentative_g >= g_score[next_idx] {
                continue;
            }

            came_from[next_idx] = Some(node.pos);
            g_score[next_idx] = tentative_g;
            open.push(OpenNode {
                f: tentative_g.saturating_add(evader_heuristic(next, goal)),
                g: tentative_g,
                tie,
                pos: next,
            });
            tie += 1;
        }
    }

    tracing::trace!(expansions, "evader path cut off");
    None
}

/// Next cell for the evader with the default danger radius.
pub fn choose_evader_move(grid: &Grid, evader: Position, goal: Position, pursuer: Position) -> Position {
    choose_evader_move_within(grid, evader, goal, pursuer, DANGER_RADIUS)
}

/// First step of [`plan_evader_path`], or `evader` itself when already at the goal or boxed in.
pub fn choose_evader_move_within(
    grid: &Grid,
    evader: Position,
    goal: Position,
    pursuer: Position,
    radius: u32,
) -> Position {
    let next = plan_evader_path(grid, evader, goal, pursuer, radius)
        .and_then(|path| path.get(1).copied())
        .unwrap_or(evader);
    tracing::debug!(%evader, %goal, %pursuer, %next, "evader decision");
    next
}

use std::collections::HashSet;

use crate::game::direction::Direction;
use crate::game::grid::{Grid, Position};
use crate::routing::route_result::RouteResult;

/// Finds every route newly closed by the tile at `placed`: one trace per
/// open exit, keeping only complete results, dropping routes that touch
/// already-scored tiles, and deduplicating loops discovered from more than
/// one exit.
pub fn completed_routes(grid: &Grid, placed: Position) -> Vec<RouteResult> {
    let Some(placed_tile) = grid.tile_at(placed) else {
        return Vec::new();
    };

    let exits = placed_tile.current_exits();
    let mut results = Vec::new();

    for dir in Direction::ALL {
        if !exits[dir.index()] {
            continue;
        }

        let route = trace_route(grid, placed, dir);
        // A walk that collected nothing (every tile on it was already
        // scored) is no route at all.
        if route.is_complete() && !route.is_empty() && !touches_scored_tile(grid, &route) {
            results.push(route);
        }
    }

    dedupe_routes(results)
}

/// Walks the road graph from `start` through its `start_dir` exit until it
/// terminates. Each step moves one cell and enters the next tile through
/// the opposite edge:
///
/// - no tile there        -> incomplete (open end, may close later)
/// - entry edge closed    -> complete, dead end
/// - (cell, edge) revisit -> complete, cycle
/// - no other open exit   -> complete, dead end
///
/// The entry edge of a placed neighbor is always open in practice (the
/// placement invariant guarantees edge equality), so the closed-entry stop
/// is reachable only through the far side of a tile, not the edge we
/// arrived on. Tiles already marked complete are traversed but not
/// collected, so they never count toward the route length again.
pub fn trace_route(grid: &Grid, start: Position, start_dir: Direction) -> RouteResult {
    let mut visited: HashSet<(Position, Direction)> = HashSet::new();
    let mut route_tiles: Vec<Position> = Vec::new();

    if let Some(start_tile) = grid.tile_at(start) {
        if !start_tile.is_complete() {
            route_tiles.push(start);
        }
    }

    let mut current_pos = start;
    let mut current_dir = start_dir;

    loop {
        let next_pos = current_pos.neighbor(current_dir);
        let enter_dir = current_dir.opposite();

        let Some(next_tile) = grid.tile_at(next_pos) else {
            return RouteResult::new(route_tiles, false);
        };

        if !next_tile.has_exit(enter_dir) {
            return RouteResult::new(route_tiles, true);
        }

        if visited.contains(&(next_pos, enter_dir)) {
            return RouteResult::new(route_tiles, true);
        }
        visited.insert((next_pos, enter_dir));

        if !next_tile.is_complete() && !route_tiles.contains(&next_pos) {
            route_tiles.push(next_pos);
        }

        let Some(exit_dir) = continuation_exit(next_tile.current_exits(), enter_dir) else {
            return RouteResult::new(route_tiles, true);
        };

        current_pos = next_pos;
        current_dir = exit_dir;
    }
}

/// First open exit other than the entry edge, in Direction enumeration
/// order. A through-tile has exactly one; on junction tiles this picks the
/// first match, so routes degrade to "first matching exit" there.
fn continuation_exit(exits: [bool; 4], enter_dir: Direction) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&dir| dir != enter_dir && exits[dir.index()])
}

/// A route containing any already-scored tile was counted before; it must
/// not award points twice.
fn touches_scored_tile(grid: &Grid, route: &RouteResult) -> bool {
    route
        .tiles()
        .iter()
        .any(|&pos| grid.tile_at(pos).is_some_and(|tile| tile.is_complete()))
}

fn dedupe_routes(routes: Vec<RouteResult>) -> Vec<RouteResult> {
    let mut unique: Vec<RouteResult> = Vec::new();
    for route in routes {
        if !unique.iter().any(|existing| existing.same_route(&route)) {
            unique.push(route);
        }
    }
    unique
}

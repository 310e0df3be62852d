#![cfg(feature = "generation")]

use std::collections::{BTreeSet, VecDeque};

use minegrid::{
    Error, GameSession, GameStatus, Grid, GridConfig, InputEvent, PointerButton, Position,
    RevealOutcome, TileKind, Viewport,
};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn revealed(grid: &Grid) -> BTreeSet<Position> {
    grid.tiles().filter(|tile| tile.is_revealed()).map(|tile| tile.position).collect()
}

// Expected result of revealing a blank tile, computed breadth-first over the neighbours.
fn expected_clearing(grid: &Grid, anchor: Position) -> BTreeSet<Position> {
    let mut seen = BTreeSet::from([anchor]);
    let mut queue = VecDeque::from([anchor]);
    while let Some(here) = queue.pop_front() {
        if grid[here].kind != TileKind::Blank {
            continue;
        }
        for neighbour in grid.neighbours(here).unwrap().into_iter().flatten() {
            if !grid[neighbour].is_mine() && seen.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    seen
}

#[test]
fn three_by_three_with_two_mines() {
    let mut grid = Grid::from_mines(3, &[pos(0, 0), pos(2, 2)]).unwrap();
    let count = |grid: &Grid, row, col| grid[pos(row, col)].kind;
    assert_eq!(count(&grid, 0, 1).count(), 1);
    assert_eq!(count(&grid, 1, 0).count(), 1);
    assert_eq!(count(&grid, 1, 1).count(), 2);
    assert_eq!(count(&grid, 0, 2), TileKind::Blank);
    assert_eq!(count(&grid, 1, 2).count(), 1);
    assert_eq!(count(&grid, 2, 0), TileKind::Blank);
    assert_eq!(count(&grid, 2, 1).count(), 1);
    assert_eq!(grid.to_string(), "###\n###\n###\n");

    grid.reveal(pos(0, 2)).unwrap();
    assert_eq!(revealed(&grid), BTreeSet::from([pos(0, 1), pos(0, 2), pos(1, 1), pos(1, 2)]));

    grid.reveal(pos(2, 0)).unwrap();
    assert_eq!(
        revealed(&grid),
        BTreeSet::from([pos(0, 1), pos(0, 2), pos(1, 0), pos(1, 1), pos(1, 2), pos(2, 0), pos(2, 1)])
    );
    assert!(grid[pos(0, 0)].is_hidden());
    assert!(grid[pos(2, 2)].is_hidden());
    assert_eq!(grid.to_string(), "#1.\n121\n.1#\n");
    assert!(grid.is_cleared());
}

#[test]
fn clearings_match_a_breadth_first_reference() {
    let config = GridConfig { grid_size: 40, mine_odds: 5, ..GridConfig::default() };
    for seed in 0..20 {
        let grid = Grid::generate(&config, seed).unwrap();
        let Some(anchor) = grid.tiles().find(|tile| tile.kind == TileKind::Blank).map(|tile| tile.position) else {
            continue;
        };
        let mut opened = grid.clone();
        let outcome = opened.reveal(anchor).unwrap();
        let expected = expected_clearing(&grid, anchor);
        assert_eq!(revealed(&opened), expected, "seed {seed}");
        assert!(matches!(outcome, RevealOutcome::OpenClearing(n) if n.get() == expected.len()));
    }
}

#[test]
fn counts_hold_for_many_seeds() {
    for (seed, grid_size) in [(1, 1), (2, 2), (3, 3), (4, 20), (5, 25), (6, 64)] {
        let config = GridConfig { grid_size, mine_odds: 4, screen_size: 1024 };
        let grid = Grid::generate(&config, seed).unwrap();
        for tile in grid.tiles().filter(|tile| !tile.is_mine()) {
            let mines = grid.neighbours(tile.position).unwrap()
                .into_iter()
                .flatten()
                .filter(|&neighbour| grid[neighbour].is_mine())
                .count();
            assert_eq!(usize::from(tile.kind.count()), mines);
            assert_eq!(grid.count_neighbouring_mines(tile.position), Ok(tile.kind.count()));
        }
        assert_eq!(grid, Grid::generate(&config, seed).unwrap());
    }
}

#[test]
fn frontend_loop() {
    let config = GridConfig { grid_size: 4, mine_odds: 6, screen_size: 100 };
    let viewport = Viewport::new(&config).unwrap();
    let mut session = GameSession::from_grid(Grid::from_mines(4, &[pos(3, 3)]).unwrap());

    assert_eq!(viewport.translate(PointerButton::Primary, 100, 10), None);

    let flag = viewport.translate(PointerButton::Secondary, 80, 80).unwrap();
    assert_eq!(flag, InputEvent::SecondaryClick(pos(3, 3)));
    session.handle_event(flag).unwrap();

    let click = viewport.translate(PointerButton::Primary, 1, 1).unwrap();
    session.handle_event(click).unwrap();
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.grid().flag_count(), 1);
    assert_eq!(
        session.handle_event(InputEvent::PrimaryClick(pos(3, 3))),
        Err(Error::SessionOver(GameStatus::Won))
    );
}

#[test]
fn losing_reveals_only_the_clicked_mine() {
    let mut session = GameSession::from_grid(Grid::from_mines(5, &[pos(2, 2), pos(4, 4)]).unwrap());
    assert_eq!(session.reveal(pos(2, 2)), Ok(RevealOutcome::Explosion));
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(revealed(session.grid()), BTreeSet::from([pos(2, 2)]));

    let mut grid = session.into_grid();
    assert_eq!(grid.reveal_mines(), 1);
    assert_eq!(revealed(&grid), BTreeSet::from([pos(2, 2), pos(4, 4)]));
}

use grid_cutoff::scenario::horizontal_wall;
use grid_cutoff::{find_cutoff, Bfs, Grid, Position, ReachabilityOracle};

#[test]
fn wall_across_seven_by_seven_grid() {
    let grid = Grid::square(7, horizontal_wall(7, 3)).unwrap();
    assert_eq!(grid.start, Position::new(0, 0));
    assert_eq!(grid.end, Position::new(6, 6));

    let bfs = Bfs::new();
    assert!(bfs.is_reachable(&grid, 6));
    assert!(!bfs.is_reachable(&grid, 7));

    let cutoff = find_cutoff(&grid, &bfs, None).unwrap();
    assert_eq!(cutoff.index, 6);
    assert_eq!(cutoff.position, Position::new(6, 3));
}

#[test]
fn open_three_by_three_grid() {
    let grid = Grid::square(3, vec![]).unwrap();
    let result = Bfs::new().search(&grid, 0);
    let found = result.shortest_path().unwrap();
    assert_eq!(found.steps(), 4);

    let path = found.path();
    assert_eq!(path.len(), 5);
    assert_eq!(path[0], grid.start);
    assert_eq!(path[4], grid.end);
    // Monotone: each step moves right or down.
    for step in path.windows(2) {
        assert!(step[1].x + step[1].y == step[0].x + step[0].y + 1);
        assert!(step[1].x >= step[0].x && step[1].y >= step[0].y);
    }
}

#[test]
fn duplicate_obstacles_block_once() {
    let wall = horizontal_wall(5, 2);
    let mut obstacles = vec![wall[0], wall[0], wall[1]];
    obstacles.extend(&wall[1..]);
    let grid = Grid::square(5, obstacles).unwrap();

    let cutoff = find_cutoff(&grid, &Bfs::new(), None).unwrap();
    assert_eq!(cutoff.position, Position::new(4, 2));
    assert_eq!(cutoff.index, 6);
}

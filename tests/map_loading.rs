mod common;

use common::{fixture, load_fixture, map_to_string, FIXTURE_DIR};
use gridmap_view::{Cell, Map, MapError};
use std::fs;
use std::io::Cursor;

#[test]
fn corridor_layout() {
    let map = load_fixture("corridor.txt");

    assert_eq!(map.dimensions, (5, 3));
    assert_eq!(map.robots.len(), 2);
    assert_eq!(map.offset_x, 0);
    assert_eq!(map.offset_y, 0);
    assert!(map.visited.is_empty());
    assert_eq!(map_to_string(&map), "..G..\n.###.\n0...1\n");
}

#[test]
fn inversion_uses_map_height() {
    // 6 wide, 2 tall: flipping against the width would push the robot off the grid
    let map = load_fixture("wide.txt");

    assert_eq!(map.robots[0].position, Cell::new(5, 0));
    assert_eq!(map.goal, Cell::new(0, 1));
    assert_eq!(map_to_string(&map), "....#0\nG#....\n");
}

#[test]
fn robots_start_with_single_node_chains() {
    let map = load_fixture("corridor.txt");
    for head in &map.robots {
        assert_eq!(head.path_cost, 0);
        assert!(head.child.is_none());
    }
}

#[test]
fn from_reader_matches_load() {
    let text = fs::read_to_string(fixture("corridor.txt")).unwrap();
    let from_reader = Map::from_reader(Cursor::new(text.into_bytes())).unwrap();
    let loaded = load_fixture("corridor.txt");

    assert_eq!(from_reader.grid, loaded.grid);
    assert_eq!(from_reader.goal, loaded.goal);
}

#[test]
fn driver_updates_show_up() {
    let mut map = load_fixture("corridor.txt");

    map.advance_robot(1, Cell::new(4, 1)).unwrap();
    map.advance_robot(1, Cell::new(4, 0)).unwrap();
    map.mark_visited(Cell::new(0, 1)).unwrap();
    map.mark_visited(Cell::new(0, 0)).unwrap();

    assert_eq!(map.robot_cost(1).unwrap(), 2);
    assert_eq!(map.robot_cost(0).unwrap(), 0);
    let trail: Vec<Cell> = map.robots[1].iter().collect();
    assert_eq!(trail, vec![Cell::new(4, 0), Cell::new(4, 1), Cell::new(4, 2)]);
    assert_eq!(map_to_string(&map), "v.G.1\nv###.\n0....\n");
}

#[test]
fn rejects_ragged_rows() {
    let err = Map::load(fixture("ragged.txt")).unwrap_err();
    assert!(matches!(
        err,
        MapError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn rejects_goal_outside_grid() {
    let err = Map::load(fixture("goal_outside.txt")).unwrap_err();
    assert!(matches!(err, MapError::OutOfBounds { what: "goal", .. }));
}

#[test]
fn rejects_unknown_grid_character() {
    let err = Map::load(fixture("bad_char.txt")).unwrap_err();
    match err {
        MapError::BadGridChar { line, col, ch } => {
            assert_eq!((line, col, ch), (5, 2, 'x'));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn rejects_truncated_robot_list() {
    let err = Map::load(fixture("short_header.txt")).unwrap_err();
    assert!(matches!(err, MapError::MissingLine("robot start")));
}

#[test]
fn rejects_size_mismatch() {
    let err = Map::parse("4 2\n0\n0 0\n000\n000\n").unwrap_err();
    assert!(matches!(
        err,
        MapError::DimensionMismatch {
            width: 4,
            height: 2,
            cols: 3,
            rows: 2
        }
    ));
}

#[test]
fn rejects_header_with_extra_field() {
    let err = Map::parse("3 3 3\n0\n0 0\n000\n000\n000\n").unwrap_err();
    match err {
        MapError::FieldCount {
            line,
            expected,
            found,
        } => {
            assert_eq!((line, expected), (1, 2));
            assert_eq!(found, "3 3 3");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn rejects_negative_robot_count() {
    let err = Map::parse("3 3\n-1\n0 0\n000\n000\n000\n").unwrap_err();
    assert!(matches!(err, MapError::NegativeRobotCount(-1)));
}

#[test]
fn huge_robot_count_fails_on_missing_lines() {
    let err = Map::parse("1 1\n2000000000\n0 0\n").unwrap_err();
    assert!(matches!(err, MapError::MissingLine("robot start")));
}

#[test]
fn extreme_robot_y_is_out_of_bounds() {
    let err = Map::parse("1 1\n1\n0 -2147483648\n0 0\n0\n").unwrap_err();
    assert!(matches!(
        err,
        MapError::OutOfBounds {
            what: "robot start",
            ..
        }
    ));
}

#[test]
fn rejects_non_positive_dimensions() {
    let err = Map::parse("1 -2147483648\n0\n0 0\n0\n").unwrap_err();
    assert!(matches!(
        err,
        MapError::BadDimensions {
            width: 1,
            height: i32::MIN
        }
    ));

    let err = Map::parse("0 3\n0\n0 0\n").unwrap_err();
    assert!(matches!(err, MapError::BadDimensions { width: 0, .. }));
}

#[test]
fn long_robot_history_drops_cleanly() {
    let mut map = load_fixture("corridor.txt");
    for i in 0..200_000 {
        let cell = if i % 2 == 0 {
            Cell::new(0, 1)
        } else {
            Cell::new(0, 2)
        };
        map.advance_robot(0, cell).unwrap();
    }
    assert_eq!(map.robot_cost(0).unwrap(), 200_000);
    drop(map);
}

#[test]
fn missing_file_is_io_error() {
    let err = Map::load(fixture("does_not_exist.txt")).unwrap_err();
    assert!(matches!(err, MapError::Io(_)));
}

#[test]
fn bundled_default_map_loads() {
    let map = Map::load("maps/default.txt").unwrap();
    assert_eq!(map.dimensions, (12, 8));
    assert_eq!(map.robots.len(), 3);
    assert!(!map.grid.is_blocked(map.goal));
}

#[test]
fn every_valid_fixture_stays_in_bounds() {
    let invalid = ["ragged.txt", "goal_outside.txt", "bad_char.txt", "short_header.txt"];
    let mut checked = 0;

    let mut entries: Vec<_> = fs::read_dir(FIXTURE_DIR)
        .unwrap()
        .filter_map(Result::ok)
        .collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        if invalid.contains(&name.as_str()) {
            continue;
        }

        let map = Map::load(entry.path()).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert!(map.grid.in_bounds(map.goal), "{}: goal out of bounds", name);
        for head in &map.robots {
            assert!(map.grid.in_bounds(head.position), "{}: robot out of bounds", name);
        }
        checked += 1;
    }

    assert!(checked >= 2);
}

use gridmap_view::{Cell, Map};
use std::path::{Path, PathBuf};

pub const FIXTURE_DIR: &str = "./test_data/maps";

pub fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURE_DIR).join(name)
}

pub fn load_fixture(name: &str) -> Map {
    let path = fixture(name);
    Map::load(&path).unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

/// Render a map as text, one char per cell:
/// robot index digit (head only), 'G' goal, 'v' visited, '#' obstacle, '.' free
pub fn map_to_string(map: &Map) -> String {
    let mut result = String::new();

    for y in 0..map.grid.rows {
        for x in 0..map.grid.cols {
            let cell = Cell::new(x, y);
            let robot = map.robots.iter().position(|head| head.position == cell);
            let symbol = if let Some(i) = robot {
                char::from_digit(i as u32 % 10, 10).unwrap_or('?')
            } else if cell == map.goal {
                'G'
            } else if map.visited.contains(&cell) {
                'v'
            } else if map.grid.is_blocked(cell) {
                '#'
            } else {
                '.'
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}

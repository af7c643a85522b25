use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info};

use crate::error::MapError;
use crate::grid::{Cell, Grid};
use crate::path::PathNode;

/// A loaded map: obstacle grid, goal, robot path chains and visited cells.
///
/// Robot and goal coordinates are stored in screen orientation (row 0 at the top).
/// Map files put the origin at the bottom-left, so their `y` values are flipped on load.
#[derive(Debug, Clone)]
pub struct Map {
    /// (width, height) as declared by the file header
    pub dimensions: (i32, i32),
    /// Head of each robot's path chain, newest cell first
    pub robots: Vec<Rc<PathNode>>,
    pub goal: Cell,
    pub grid: Grid,
    /// Draw offset in cells
    pub offset_x: i32,
    pub offset_y: i32,
    /// Explored cells, in the order they were marked
    pub visited: Vec<Cell>,
}

/// Line cursor that remembers 1-based line numbers for error messages
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Lines {
            inner: text.lines().enumerate(),
        }
    }

    fn next_line(&mut self, what: &'static str) -> Result<(usize, &'a str), MapError> {
        self.inner
            .next()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .ok_or(MapError::MissingLine(what))
    }

    fn ints(&mut self, what: &'static str, count: usize) -> Result<Vec<i32>, MapError> {
        let (line_no, line) = self.next_line(what)?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != count {
            return Err(MapError::FieldCount {
                line: line_no,
                expected: count,
                found: line.to_string(),
            });
        }

        fields
            .iter()
            .map(|f| {
                f.parse::<i32>().map_err(|_| MapError::BadInteger {
                    line: line_no,
                    value: f.to_string(),
                })
            })
            .collect()
    }

    fn pair(&mut self, what: &'static str) -> Result<(i32, i32), MapError> {
        let v = self.ints(what, 2)?;
        Ok((v[0], v[1]))
    }
}

fn parse_grid_row(line_no: usize, line: &str) -> Result<Vec<u8>, MapError> {
    line.chars()
        .enumerate()
        .map(|(col, ch)| match ch {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(MapError::BadGridChar {
                line: line_no,
                col: col + 1,
                ch,
            }),
        })
        .collect()
}

/// Turn a file coordinate (origin bottom-left) into a screen cell.
/// `height` is at least 1 here; a `y` that cannot be flipped is out of bounds.
fn flip_y(height: i32, what: &'static str, (x, y): (i32, i32)) -> Result<Cell, MapError> {
    (height - 1)
        .checked_sub(y)
        .map(|flipped| Cell::new(x, flipped))
        .ok_or(MapError::OutOfBounds {
            what,
            cell: Cell::new(x, y),
        })
}

impl Map {
    /// Load a map file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let map = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            width = map.dimensions.0,
            height = map.dimensions.1,
            robots = map.robots.len(),
            "loaded map"
        );
        Ok(map)
    }

    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, MapError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse map text. See the crate docs for the layout.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = Lines::new(text);

        let (width, height) = lines.pair("dimensions")?;
        if width <= 0 || height <= 0 {
            return Err(MapError::BadDimensions { width, height });
        }

        let robot_count = lines.ints("robot count", 1)?[0];
        if robot_count < 0 {
            return Err(MapError::NegativeRobotCount(robot_count));
        }

        // The count is untrusted, so the list grows only as robot lines are read
        let mut starts = Vec::new();
        for _ in 0..robot_count {
            let start = lines.pair("robot start")?;
            starts.push(flip_y(height, "robot start", start)?);
        }

        let goal = flip_y(height, "goal", lines.pair("goal")?)?;

        let mut rows: Vec<(usize, &str)> = Vec::new();
        while let Ok(line) = lines.next_line("grid") {
            rows.push(line);
        }
        while matches!(rows.last(), Some((_, l)) if l.trim().is_empty()) {
            rows.pop();
        }

        let rows = rows
            .into_iter()
            .map(|(line_no, line)| parse_grid_row(line_no, line))
            .collect::<Result<Vec<_>, _>>()?;
        let grid = Grid::from_rows(rows)?;

        if grid.cols != width || grid.rows != height {
            return Err(MapError::DimensionMismatch {
                width,
                height,
                cols: grid.cols,
                rows: grid.rows,
            });
        }

        for &start in &starts {
            if !grid.in_bounds(start) {
                return Err(MapError::OutOfBounds {
                    what: "robot start",
                    cell: start,
                });
            }
        }
        if !grid.in_bounds(goal) {
            return Err(MapError::OutOfBounds {
                what: "goal",
                cell: goal,
            });
        }

        debug!(obstacles = grid.blocked_count(), "parsed grid");

        Ok(Map {
            dimensions: (width, height),
            robots: starts.into_iter().map(PathNode::start).collect(),
            goal,
            grid,
            offset_x: 0,
            offset_y: 0,
            visited: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.dimensions.0
    }

    pub fn height(&self) -> i32 {
        self.dimensions.1
    }

    /// Record a cell as explored
    pub fn mark_visited(&mut self, cell: Cell) -> Result<(), MapError> {
        if !self.grid.in_bounds(cell) {
            return Err(MapError::OutOfBounds {
                what: "visited cell",
                cell,
            });
        }
        self.visited.push(cell);
        Ok(())
    }

    /// Move robot `index` to `cell`, growing its path chain by one node
    pub fn advance_robot(&mut self, index: usize, cell: Cell) -> Result<(), MapError> {
        if !self.grid.in_bounds(cell) {
            return Err(MapError::OutOfBounds {
                what: "robot step",
                cell,
            });
        }
        let head = self
            .robots
            .get_mut(index)
            .ok_or(MapError::UnknownRobot(index))?;
        *head = PathNode::extend(head, cell);
        Ok(())
    }

    pub fn robot_cost(&self, index: usize) -> Result<u32, MapError> {
        self.robots
            .get(index)
            .map(|head| head.path_cost)
            .ok_or(MapError::UnknownRobot(index))
    }

    pub fn details(&self) -> MapDetails {
        MapDetails {
            width: self.width(),
            height: self.height(),
            goal: self.goal,
            obstacles: self.grid.blocked_count(),
            offset: (self.offset_x, self.offset_y),
            robots: self
                .robots
                .iter()
                .enumerate()
                .map(|(index, head)| RobotDetails {
                    index,
                    position: head.position,
                    path_cost: head.path_cost,
                    path: head.iter().collect(),
                })
                .collect(),
            visited: self.visited.clone(),
        }
    }

    /// Log a summary of the map, used in debugging
    pub fn print_details(&self) {
        let details = self.details();
        info!(
            width = details.width,
            height = details.height,
            goal = ?details.goal,
            obstacles = details.obstacles,
            visited = details.visited.len(),
            "map details"
        );
        for robot in &details.robots {
            debug!(
                index = robot.index,
                position = ?robot.position,
                cost = robot.path_cost,
                "robot"
            );
        }
    }
}

/// Serializable snapshot of a map for debugging output
#[derive(Debug, Serialize)]
pub struct MapDetails {
    pub width: i32,
    pub height: i32,
    pub goal: Cell,
    pub obstacles: usize,
    pub offset: (i32, i32),
    pub robots: Vec<RobotDetails>,
    pub visited: Vec<Cell>,
}

#[derive(Debug, Serialize)]
pub struct RobotDetails {
    pub index: usize,
    pub position: Cell,
    pub path_cost: u32,
    pub path: Vec<Cell>,
}

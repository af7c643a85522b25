use macroquad::math::Rect;
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};

use crate::grid::Cell;
use crate::map::Map;
use crate::palette::{self, Rgba, BLACK, GOLD, VISITED, WHITE};

/// Border width of grid and goal squares, in pixels
const OUTLINE: f32 = 1.0;

/// A single canvas operation. A frame is an ordered list of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Fill { rect: Rect, color: Rgba },
    Outline {
        rect: Rect,
        color: Rgba,
        thickness: f32,
    },
}

impl DrawOp {
    pub fn rect(&self) -> Rect {
        match *self {
            DrawOp::Fill { rect, .. } | DrawOp::Outline { rect, .. } => rect,
        }
    }
}

/// Screen rectangle covered by `cell` once the map's offset is applied
pub fn cell_rect(map: &Map, cell: Cell, square: f32) -> Rect {
    Rect::new(
        (cell.x + map.offset_x) as f32 * square,
        (cell.y + map.offset_y) as f32 * square,
        square,
        square,
    )
}

/// Pixel size needed to show the whole map, offset included
pub fn canvas_size(map: &Map, square: f32) -> (f32, f32) {
    (
        (map.grid.cols + map.offset_x).max(0) as f32 * square,
        (map.grid.rows + map.offset_y).max(0) as f32 * square,
    )
}

/// Lay out one frame, back to front: grid squares, goal, robot paths, visited cells.
pub fn layout(map: &Map, square: f32) -> Vec<DrawOp> {
    let path_nodes: usize = map.robots.iter().map(|r| r.len()).sum();
    let mut ops =
        Vec::with_capacity(map.grid.cells.len() * 2 + 2 + path_nodes + map.visited.len());

    for (cell, blocked) in map.grid.iter() {
        let rect = cell_rect(map, cell, square);
        let color = if blocked { BLACK } else { WHITE };
        ops.push(DrawOp::Fill { rect, color });
        ops.push(DrawOp::Outline {
            rect,
            color: BLACK,
            thickness: OUTLINE,
        });
    }

    let goal = cell_rect(map, map.goal, square);
    ops.push(DrawOp::Fill {
        rect: goal,
        color: GOLD,
    });
    ops.push(DrawOp::Outline {
        rect: goal,
        color: BLACK,
        thickness: OUTLINE,
    });

    for (i, head) in map.robots.iter().enumerate() {
        let color = palette::robot_color(i);
        for cell in head.iter() {
            ops.push(DrawOp::Fill {
                rect: cell_rect(map, cell, square),
                color,
            });
        }
    }

    for &cell in &map.visited {
        ops.push(DrawOp::Fill {
            rect: cell_rect(map, cell, square),
            color: VISITED,
        });
    }

    ops
}

/// Execute draw operations on the current macroquad frame.
/// Translucent fills blend over whatever is already painted.
pub fn paint(ops: &[DrawOp]) {
    for op in ops {
        match *op {
            DrawOp::Fill { rect, color } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, palette::to_color(color));
            }
            DrawOp::Outline {
                rect,
                color,
                thickness,
            } => {
                let color = palette::to_color(color);
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
            }
        }
    }
}

impl Map {
    /// Paint the map with `square`-pixel cells
    pub fn draw(&self, square: f32) {
        paint(&layout(self, square));
    }
}

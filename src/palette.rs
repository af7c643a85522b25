use macroquad::color::Color;

/// 8-bit RGBA, converted to a canvas color at draw time
pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];
pub const GOLD: Rgba = [255, 215, 0, 255];

/// Translucent path overlays, one per robot
pub const ROBOT_COLORS: [Rgba; 7] = [
    [255, 0, 0, 80],   // red
    [255, 165, 0, 80], // orange
    [255, 255, 0, 80], // yellow
    [0, 255, 0, 80],   // green
    [255, 0, 255, 80], // magenta
    [0, 0, 255, 80],   // blue
    [128, 0, 128, 80], // purple
];

pub const VISITED: Rgba = [0, 0, 255, 60];

/// Overlay color for robot `index`, wrapping once the palette runs out
pub fn robot_color(index: usize) -> Rgba {
    ROBOT_COLORS[index % ROBOT_COLORS.len()]
}

pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

//! Draw-list generation
//!
//! Turns a `GameState` into triangles and text labels in world space
//! (x ∈ [-10, 10], y ∈ [-6, 6]). Uploading the vertices and rasterizing
//! the labels is left to whatever graphics backend hosts the game.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::consts::*;
use crate::sim::{BUILDINGS, Body, Car, GamePhase, GameState, ObstacleManager, Road, TREE_POSITIONS};
pub use vertex::{Vertex, colors};

/// Reference resolution used to convert pixel line widths to world units
pub const PIXELS_PER_UNIT: f32 = 40.0;

#[inline]
fn px(pixels: f32) -> f32 {
    pixels / PIXELS_PER_UNIT
}

/// Text size class for a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSize {
    Normal,
    Large,
}

/// A line of text anchored at its bottom-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
    pub size: LabelSize,
}

impl Label {
    fn new(text: impl Into<String>, x: f32, y: f32, color: [f32; 4], size: LabelSize) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
            color,
            size,
        }
    }
}

/// Everything needed to present one frame, in painter's order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Triangle list, back to front
    pub vertices: Vec<Vertex>,
    /// Text drawn on top of all geometry
    pub labels: Vec<Label>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertices: Vec<Vertex>) {
        self.vertices.extend(vertices);
    }

    pub fn label(&mut self, label: Label) {
        self.labels.push(label);
    }
}

/// Build the full frame for the current state
pub fn build_draw_list(state: &GameState) -> DrawList {
    let mut list = DrawList::new();
    draw_road(&state.road, &mut list);
    draw_buildings(&mut list);

    match state.phase {
        GamePhase::Menu => {
            draw_car(&state.car, &mut list);
            draw_instructions(&mut list);
        }
        GamePhase::Playing => {
            draw_obstacles(&state.obstacles, &mut list);
            draw_car(&state.car, &mut list);
            draw_score(state.score, &mut list);
        }
        GamePhase::GameOver => {
            draw_obstacles(&state.obstacles, &mut list);
            draw_car(&state.car, &mut list);
            draw_game_over(state.score, state.best_score, &mut list);
        }
    }

    list
}

/// Sky, grass verges, road surface, edge lines, centre dashes and trees
pub fn draw_road(road: &Road, list: &mut DrawList) {
    let (left, right) = road.edges();
    let top = 10.0;
    let bottom = -10.0;

    list.push(shapes::rect(
        Vec2::new(WORLD_LEFT, bottom),
        Vec2::new(WORLD_RIGHT, top),
        colors::SKY,
    ));
    list.push(shapes::rect(
        Vec2::new(WORLD_LEFT, bottom),
        Vec2::new(left, top),
        colors::GRASS,
    ));
    list.push(shapes::rect(
        Vec2::new(right, bottom),
        Vec2::new(WORLD_RIGHT, top),
        colors::GRASS,
    ));
    list.push(shapes::rect(
        Vec2::new(left, bottom),
        Vec2::new(right, top),
        colors::ROAD,
    ));

    for x in [left, right] {
        list.push(shapes::line(
            Vec2::new(x, bottom),
            Vec2::new(x, top),
            px(3.0),
            colors::ROAD_EDGE,
        ));
    }

    for &y in &road.line_positions {
        list.push(shapes::line(
            Vec2::new(0.0, y),
            Vec2::new(0.0, y + ROAD_LINE_LENGTH),
            px(2.0),
            colors::CENTER_LINE,
        ));
    }

    for &(x, y) in &TREE_POSITIONS {
        list.push(shapes::rect(
            Vec2::new(x - 0.1, y - 0.5),
            Vec2::new(x + 0.1, y + 0.5),
            colors::TREE_TRUNK,
        ));
        list.push(shapes::triangle(
            Vec2::new(x, y + 1.0),
            Vec2::new(x - 0.5, y + 0.3),
            Vec2::new(x + 0.5, y + 0.3),
            colors::TREE_LEAVES,
        ));
    }
}

/// Background buildings with a grid of lit windows
pub fn draw_buildings(list: &mut DrawList) {
    for b in &BUILDINGS {
        let left = b.x - b.width / 2.0;
        let right = b.x + b.width / 2.0;
        let top = b.base_y + b.height;
        list.push(shapes::rect(
            Vec2::new(left, b.base_y),
            Vec2::new(right, top),
            colors::BUILDING,
        ));

        let rows = b.height as u32;
        let cols = (b.width * 2.0) as u32;
        for row in 0..rows {
            for col in 0..cols {
                let wx = left + 0.2 + col as f32 * 0.3;
                let wy = b.base_y + 0.3 + row as f32 * 0.8;
                if wx < right && wy < top {
                    list.push(shapes::rect(
                        Vec2::new(wx, wy),
                        Vec2::new(wx + 0.15, wy + 0.2),
                        colors::BUILDING_WINDOW,
                    ));
                }
            }
        }
    }
}

/// Car body, windscreen and two wheels
pub fn draw_car(car: &Car, list: &mut DrawList) {
    let (w, h) = (car.size.x, car.size.y);
    list.push(shapes::rect_centered(car.pos, car.size, colors::CAR_BODY));
    list.push(shapes::rect_centered(
        car.pos,
        Vec2::new(w * 2.0 / 3.0, h / 2.0),
        colors::CAR_WINDOW,
    ));

    for side in [-1.0, 1.0] {
        let wheel = car.pos + Vec2::new(side * w / 2.5, -h / 2.0 - 0.1);
        list.push(shapes::circle(wheel, WHEEL_RADIUS, colors::WHEEL, 20));
        list.push(shapes::ring(
            wheel,
            WHEEL_RADIUS - px(1.0),
            WHEEL_RADIUS,
            colors::WHEEL_RIM,
            20,
        ));
    }
}

/// Every live obstacle: red block, black border, three warning stripes
pub fn draw_obstacles(manager: &ObstacleManager, list: &mut DrawList) {
    for obstacle in manager.obstacles() {
        let b = obstacle.bounds();
        let size = b.size();
        list.push(shapes::rect_centered(obstacle.pos, size, colors::OBSTACLE));
        list.push(shapes::outline(
            obstacle.pos,
            size,
            px(2.0),
            colors::OBSTACLE_BORDER,
        ));
        for i in 1..=3 {
            let y = b.bottom + i as f32 * size.y / 4.0;
            list.push(shapes::line(
                Vec2::new(b.left + 0.1, y),
                Vec2::new(b.right - 0.1, y),
                px(1.0),
                colors::OBSTACLE_STRIPE,
            ));
        }
    }
}

pub fn draw_score(score: u64, list: &mut DrawList) {
    list.label(Label::new(
        format!("Score: {}", score),
        -9.0,
        5.0,
        colors::TEXT,
        LabelSize::Normal,
    ));
}

pub fn draw_instructions(list: &mut DrawList) {
    list.label(Label::new(
        "Avoid the obstacles!",
        -2.5,
        3.0,
        colors::TEXT,
        LabelSize::Normal,
    ));
    list.label(Label::new(
        "Use LEFT/RIGHT arrows",
        -2.5,
        2.0,
        colors::TEXT_HINT,
        LabelSize::Normal,
    ));
    list.label(Label::new(
        "Press SPACE to start",
        -2.5,
        1.0,
        colors::TEXT_HINT,
        LabelSize::Normal,
    ));
}

/// Dimmed overlay with the final score and restart/quit hints
pub fn draw_game_over(score: u64, best_score: u64, list: &mut DrawList) {
    list.push(shapes::rect(
        Vec2::new(WORLD_LEFT, WORLD_BOTTOM),
        Vec2::new(WORLD_RIGHT, WORLD_TOP),
        colors::OVERLAY,
    ));

    list.label(Label::new("GAME OVER", -3.0, 1.0, colors::TEXT_ALERT, LabelSize::Large));
    list.label(Label::new(
        format!("Final Score: {}", score),
        -2.5,
        0.0,
        colors::TEXT,
        LabelSize::Normal,
    ));
    list.label(Label::new(
        format!("Best: {}", best_score),
        -2.5,
        -0.5,
        colors::TEXT,
        LabelSize::Normal,
    ));
    list.label(Label::new(
        "Press R to restart",
        -2.5,
        -1.0,
        colors::TEXT_HINT,
        LabelSize::Normal,
    ));
    list.label(Label::new(
        "Press ESC to quit",
        -2.5,
        -2.0,
        colors::TEXT_HINT,
        LabelSize::Normal,
    ));
}

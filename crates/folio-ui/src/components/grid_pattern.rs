//! Animated Grid Pattern Component
//!
//! A faint grid background with a handful of squares that fade in and out,
//! each jumping to a new random cell when its fade cycle ends.

use dioxus::prelude::*;
use rand::Rng;

/// One highlighted grid cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Square {
    pub id: usize,
    pub col: u32,
    pub row: u32,
    /// Bumped on every move so the fade animation restarts
    pub cycle: u32,
}

/// Placement model for the animated squares.
///
/// Until the container has been measured every square sits in cell `(0, 0)`.
#[derive(Clone, PartialEq, Debug)]
pub struct GridPattern {
    cell_width: f64,
    cell_height: f64,
    width: f64,
    height: f64,
    squares: Vec<Square>,
}

impl GridPattern {
    pub fn new(num_squares: usize, cell_width: f64, cell_height: f64) -> Self {
        let squares = (0..num_squares)
            .map(|id| Square {
                id,
                col: 0,
                row: 0,
                cycle: 0,
            })
            .collect();
        Self {
            cell_width,
            cell_height,
            width: 0.0,
            height: 0.0,
            squares,
        }
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Record new container dimensions and scatter every square.
    ///
    /// Non-positive dimensions are ignored.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
        for index in 0..self.squares.len() {
            self.move_square(index, rng);
        }
    }

    /// Move square `id` to a fresh random cell; unknown ids are ignored.
    pub fn reposition<R: Rng + ?Sized>(&mut self, id: usize, rng: &mut R) {
        if let Some(index) = self.squares.iter().position(|s| s.id == id) {
            self.move_square(index, rng);
        }
    }

    /// Columns and rows that fit in the measured container
    pub fn cells(&self) -> (u32, u32) {
        if !self.is_measured() {
            return (0, 0);
        }
        (
            (self.width / self.cell_width).floor() as u32,
            (self.height / self.cell_height).floor() as u32,
        )
    }

    fn move_square<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        let (col, row) = self.random_cell(rng);
        let square = &mut self.squares[index];
        square.col = col;
        square.row = row;
        square.cycle = square.cycle.wrapping_add(1);
    }

    fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> (u32, u32) {
        if !self.is_measured() {
            return (0, 0);
        }
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        (
            (x * self.width / self.cell_width).floor() as u32,
            (y * self.height / self.cell_height).floor() as u32,
        )
    }
}

/// Decorative grid background with fading squares
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     section { class: "relative",
///         AnimatedGridPattern { num_squares: 30, max_opacity: 0.1 }
///     }
/// }
/// ```
#[component]
pub fn AnimatedGridPattern(
    #[props(default = 40.0)] cell_width: f64,
    #[props(default = 40.0)] cell_height: f64,
    #[props(default = 50)] num_squares: usize,
    #[props(default = 0.5)] max_opacity: f64,
    /// Seconds for one fade in (the fade out takes as long)
    #[props(default = 4.0)]
    duration: f64,
) -> Element {
    let mut grid = use_signal(|| GridPattern::new(num_squares, cell_width, cell_height));

    let measure = move |evt: MountedEvent| async move {
        match evt.data().get_client_rect().await {
            Ok(rect) => {
                let mut rng = rand::rng();
                grid.write().resize(rect.size.width, rect.size.height, &mut rng);
            }
            Err(e) => tracing::debug!("Grid pattern could not be measured: {:?}", e),
        }
    };

    let squares: Vec<SquareView> = grid
        .read()
        .squares()
        .iter()
        .enumerate()
        .map(|(index, square)| SquareView {
            id: square.id,
            key: format!("{}-{}", square.id, square.cycle),
            style: format!(
                "--square-opacity: {}; animation-duration: {}s; animation-delay: {:.1}s;",
                max_opacity,
                duration,
                index as f64 * 0.1
            ),
            x: square.col as f64 * cell_width + 1.0,
            y: square.row as f64 * cell_height + 1.0,
        })
        .collect();
    let path = format!("M.5 {}V.5H{}", cell_height, cell_width);
    let square_width = cell_width - 1.0;
    let square_height = cell_height - 1.0;

    rsx! {
        svg {
            class: "grid-pattern",
            "aria-hidden": "true",
            onmounted: measure,
            defs {
                pattern {
                    id: "grid-pattern-cell",
                    width: "{cell_width}",
                    height: "{cell_height}",
                    pattern_units: "userSpaceOnUse",
                    x: "-1",
                    y: "-1",
                    path { d: "{path}", fill: "none" }
                }
            }
            rect { width: "100%", height: "100%", fill: "url(#grid-pattern-cell)" }
            for square in squares {
                rect {
                    key: "{square.key}",
                    class: "grid-pattern__square",
                    style: "{square.style}",
                    width: "{square_width}",
                    height: "{square_height}",
                    x: "{square.x}",
                    y: "{square.y}",
                    fill: "currentColor",
                    stroke_width: "0",
                    onanimationend: move |_| {
                        let mut rng = rand::rng();
                        grid.write().reposition(square.id, &mut rng);
                    },
                }
            }
        }
    }
}

/// Render-ready values for one square
struct SquareView {
    id: usize,
    key: String,
    style: String,
    x: f64,
    y: f64,
}

//! Mapping between terminal cells and the puzzle's pixel space.

use ratatui::layout::Rect as CellRect;
use strictly_hanoi::{Point, Rect};

/// The terminal region the board is drawn into, and the pixel space it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    area: CellRect,
    width: i32,
    height: i32,
}

impl Viewport {
    /// Shows a `width` by `height` pixel space in `area`.
    pub fn new(area: CellRect, width: i32, height: i32) -> Self {
        Self {
            area,
            width,
            height,
        }
    }

    /// Terminal cells covered.
    pub fn area(&self) -> CellRect {
        self.area
    }

    /// Pixel at the centre of a terminal cell.
    ///
    /// Cells outside the area map to pixels outside the pixel space, so a
    /// release off the board still reaches the puzzle as a miss.
    pub fn to_pixel(&self, column: u16, row: u16) -> Point {
        let cell_w = f64::from(self.width) / f64::from(self.area.width.max(1));
        let cell_h = f64::from(self.height) / f64::from(self.area.height.max(1));
        let dx = f64::from(i32::from(column) - i32::from(self.area.x)) + 0.5;
        let dy = f64::from(i32::from(row) - i32::from(self.area.y)) + 0.5;
        Point::new((dx * cell_w).floor() as i32, (dy * cell_h).floor() as i32)
    }

    /// Converts a y-down pixel rectangle to the canvas's y-up coordinates,
    /// returned as `(x, y, width, height)`.
    pub fn to_canvas(&self, rect: Rect) -> (f64, f64, f64, f64) {
        (
            f64::from(rect.x),
            f64::from(self.height - rect.bottom()),
            f64::from(rect.width),
            f64::from(rect.height),
        )
    }

    /// Converts a y-down pixel point to canvas coordinates.
    pub fn point_to_canvas(&self, point: Point) -> (f64, f64) {
        (f64::from(point.x), f64::from(self.height - point.y))
    }

    /// Horizontal canvas bounds.
    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, f64::from(self.width)]
    }

    /// Vertical canvas bounds.
    pub fn y_bounds(&self) -> [f64; 2] {
        [0.0, f64::from(self.height)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(CellRect::new(2, 1, 60, 30), 600, 300)
    }

    #[test]
    fn test_cell_centres() {
        let vp = viewport();
        assert_eq!(vp.to_pixel(2, 1), Point::new(5, 5));
        assert_eq!(vp.to_pixel(61, 30), Point::new(595, 295));
    }

    #[test]
    fn test_outside_cells_map_outside() {
        let vp = viewport();
        let p = vp.to_pixel(0, 0);
        assert!(p.x < 0 && p.y < 0);
        let p = vp.to_pixel(70, 40);
        assert!(p.x >= 600 && p.y >= 300);
    }

    #[test]
    fn test_canvas_flips_y() {
        let vp = viewport();
        assert_eq!(
            vp.to_canvas(Rect::new(58, 220, 80, 20)),
            (58.0, 60.0, 80.0, 20.0)
        );
        assert_eq!(vp.point_to_canvas(Point::new(90, 290)), (90.0, 10.0));
    }

    #[test]
    fn test_peg_centre_round_trip() {
        let vp = viewport();
        // Column 11 covers pixels 90..100, which includes the X pole at 98.
        let p = vp.to_pixel(11, 21);
        assert_eq!(p, Point::new(95, 205));
    }
}

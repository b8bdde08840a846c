/// Gap between neighbouring cells, in world units
pub const CELL_SPACING: f32 = 0.01;

/// Camera maps the board into screen space.
///
/// The view height spans `2 / cell_size` world units, so the on-screen
/// cell size stays constant as the cell size setting changes, scaled by
/// the user's wheel zoom.
pub struct Camera {
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self { zoom: 1.0 }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.25, 8.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.25, 8.0);
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.zoom = 1.0;
    }

    /// Place a rows x cols board, centred in an area of `area` pixels
    pub fn layout(&self, area: (f32, f32), cell_size: f32, rows: usize, cols: usize) -> BoardLayout {
        let view_size = 2.0 / cell_size;
        let unit_px = area.1 / view_size * self.zoom;
        let pitch = (cell_size + CELL_SPACING) * unit_px;
        let cell = cell_size * unit_px;

        let width = cols as f32 * pitch - CELL_SPACING * unit_px;
        let height = rows as f32 * pitch - CELL_SPACING * unit_px;
        BoardLayout {
            origin_x: (area.0 - width) / 2.0,
            origin_y: (area.1 - height) / 2.0,
            pitch,
            cell,
            rows,
            cols,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen placement of the board for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Distance between cell origins, in pixels
    pub pitch: f32,
    /// Drawn cell edge, in pixels
    pub cell: f32,
    pub rows: usize,
    pub cols: usize,
}

impl BoardLayout {
    /// Map a screen position to the grid cell under it, or None when the
    /// pointer does not hit the board
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i32, i32)> {
        if self.pitch <= 0.0 {
            return None;
        }
        let col = ((x - self.origin_x) / self.pitch).floor();
        let row = ((y - self.origin_y) / self.pitch).floor();
        let inside = row >= 0.0 && col >= 0.0 && row < self.rows as f32 && col < self.cols as f32;
        inside.then_some((row as i32, col as i32))
    }

    /// Top-left screen position of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.pitch,
            self.origin_y + row as f32 * self.pitch,
        )
    }

    /// Full board extent as (x, y, width, height)
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.origin_x,
            self.origin_y,
            self.cols as f32 * self.pitch,
            self.rows as f32 * self.pitch,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        // 800px tall view at cell size 0.2 -> 10 units -> 80px per unit
        Camera::new().layout((1000.0, 800.0), 0.2, 4, 5)
    }

    #[test]
    fn test_layout_scale() {
        let layout = layout();
        assert!((layout.cell - 16.0).abs() < 1e-4);
        assert!((layout.pitch - 16.8).abs() < 1e-4);
    }

    #[test]
    fn test_board_is_centered() {
        let layout = layout();
        let (x, y, w, h) = layout.bounds();
        let gap = CELL_SPACING * 80.0;
        assert!(((x + (w - gap) / 2.0) - 500.0).abs() < 1e-3);
        assert!(((y + (h - gap) / 2.0) - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_cell_at_round_trips_cell_origin() {
        let layout = layout();
        for row in 0..4 {
            for col in 0..5 {
                let (x, y) = layout.cell_origin(row, col);
                let hit = layout.cell_at(x + layout.cell / 2.0, y + layout.cell / 2.0);
                assert_eq!(hit, Some((row as i32, col as i32)));
            }
        }
    }

    #[test]
    fn test_cell_at_misses_outside() {
        let layout = layout();
        let (x, y, w, h) = layout.bounds();
        assert_eq!(layout.cell_at(x - 1.0, y + 1.0), None);
        assert_eq!(layout.cell_at(x + 1.0, y - 1.0), None);
        assert_eq!(layout.cell_at(x + w + 1.0, y + 1.0), None);
        assert_eq!(layout.cell_at(x + 1.0, y + h + 1.0), None);
    }

    #[test]
    fn test_zoom_scales_cells() {
        let mut camera = Camera::new();
        camera.zoom_in(2.0);
        let zoomed = camera.layout((1000.0, 800.0), 0.2, 4, 5);
        assert!((zoomed.cell - 32.0).abs() < 1e-4);

        camera.zoom_out(100.0);
        assert_eq!(camera.zoom, 0.25);
        camera.reset();
        assert_eq!(camera.zoom, 1.0);
    }
}

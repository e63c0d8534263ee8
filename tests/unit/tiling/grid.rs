//! Tests for grid geometry and canvas composition

#[cfg(test)]
mod tests {
    use image::{GrayImage, Rgb, RgbImage};
    use tilesheet::TilingError;
    use tilesheet::tiling::SourceImage;
    use tilesheet::tiling::grid::{GridGeometry, blank_canvas, compose, grid_size};

    fn solid(width: u32, height: u32) -> SourceImage {
        SourceImage::Decoded(RgbImage::from_pixel(width, height, Rgb([10, 200, 30])))
    }

    fn region_all(
        canvas: &GrayImage,
        x0: u32,
        y0: u32,
        w: u32,
        h: u32,
        f: impl Fn(u8) -> bool,
    ) -> bool {
        (y0..y0 + h).all(|y| (x0..x0 + w).all(|x| f(canvas.get_pixel(x, y).0[0])))
    }

    // Tests grid size is the ceiling of the square root
    // Verified by using floor instead of ceiling
    #[test]
    fn test_grid_size_table() {
        let expected = [(1, 1), (2, 2), (3, 2), (4, 2), (5, 3), (9, 3), (10, 4)];
        for (count, size) in expected {
            assert_eq!(grid_size(count), size, "count {count}");
        }
        for count in 1..200 {
            let size = grid_size(count);
            assert!(size * size >= count);
            assert!((size - 1) * (size - 1) < count);
        }
    }

    // Tests cell sizes use integer division of the canvas
    // Verified by rounding cell sizes up
    #[test]
    fn test_geometry_cell_sizes() {
        let geometry = GridGeometry::new(5, 200, 200).ok();
        assert_eq!(
            geometry.map(|g| (g.grid_size(), g.cell_width(), g.cell_height())),
            Some((3, 66, 66))
        );

        let geometry = GridGeometry::new(4, 300, 120).ok();
        assert_eq!(
            geometry.map(|g| (g.cell_width(), g.cell_height())),
            Some((150, 60))
        );
    }

    // Tests cells are placed row-major from the top-left
    // Verified by swapping row and column in placement
    #[test]
    fn test_cell_origin_row_major() {
        let Ok(geometry) = GridGeometry::new(9, 300, 150) else {
            unreachable!("non-empty group");
        };
        assert_eq!(geometry.cell_origin(0), (0, 0));
        assert_eq!(geometry.cell_origin(1), (100, 0));
        assert_eq!(geometry.cell_origin(2), (200, 0));
        assert_eq!(geometry.cell_origin(3), (0, 50));
        assert_eq!(geometry.cell_origin(8), (200, 100));
    }

    // Tests empty groups are rejected
    // Verified by removing the empty check
    #[test]
    fn test_compose_empty_group_error() {
        assert!(matches!(
            compose(&[], 200, 200),
            Err(TilingError::EmptyGroup)
        ));
        assert!(matches!(
            GridGeometry::new(0, 200, 200),
            Err(TilingError::EmptyGroup)
        ));
    }

    // Tests every constructed geometry has a non-zero grid so placement never divides by zero
    // Verified by clamping the count to zero before computing the grid size
    #[test]
    fn test_geometry_grid_never_zero() {
        for count in 1..50 {
            let Ok(geometry) = GridGeometry::new(count, 0, 0) else {
                unreachable!("non-empty group");
            };
            assert!(geometry.grid_size() >= 1);
            assert_eq!(geometry.cell_origin(count - 1).0, 0);
        }
    }

    // Tests four valid images fill all four cells of a 2x2 grid
    // Verified by skipping placement of the last tile
    #[test]
    fn test_compose_four_valid_images() {
        let sources: Vec<SourceImage> = (0..4).map(|_| solid(300, 300)).collect();
        let result = compose(&sources, 200, 200);
        assert!(result.is_ok());
        let Ok(canvas) = result else { return };

        assert_eq!(canvas.dimensions(), (200, 200));
        for (x0, y0) in [(0, 0), (100, 0), (0, 100), (100, 100)] {
            assert!(
                region_all(&canvas, x0, y0, 100, 100, |v| v < 128),
                "cell at ({x0}, {y0}) should be filled"
            );
        }
    }

    // Tests failed slots keep their cell white without shifting later images
    // Verified by compacting sources before placement
    #[test]
    fn test_compose_failed_slot_stays_blank() {
        let sources = vec![
            solid(300, 300),
            SourceImage::Failed,
            solid(300, 300),
            solid(300, 300),
        ];
        let Ok(canvas) = compose(&sources, 200, 200) else {
            unreachable!("non-empty group");
        };

        assert!(region_all(&canvas, 0, 0, 100, 100, |v| v < 128));
        assert!(region_all(&canvas, 100, 0, 100, 100, |v| v == 255));
        assert!(region_all(&canvas, 0, 100, 100, 100, |v| v < 128));
        assert!(region_all(&canvas, 100, 100, 100, 100, |v| v < 128));
    }

    // Tests a group of only failures produces a blank canvas
    // Verified by initializing the canvas to black
    #[test]
    fn test_compose_all_failed_is_blank() {
        let sources = vec![SourceImage::Failed; 3];
        let Ok(canvas) = compose(&sources, 50, 40) else {
            unreachable!("non-empty group");
        };
        assert_eq!(canvas, blank_canvas(50, 40));
    }

    // Tests sources no larger than a cell are omitted
    // Verified by using >= in the size guard
    #[test]
    fn test_compose_small_source_omitted() {
        let sources = vec![
            solid(100, 100),
            solid(101, 101),
            solid(50, 400),
            solid(400, 50),
        ];
        let Ok(canvas) = compose(&sources, 200, 200) else {
            unreachable!("non-empty group");
        };

        assert!(region_all(&canvas, 0, 0, 100, 100, |v| v == 255));
        assert!(region_all(&canvas, 100, 0, 100, 100, |v| v < 128));
        assert!(region_all(&canvas, 0, 100, 100, 100, |v| v == 255));
        assert!(region_all(&canvas, 100, 100, 100, 100, |v| v == 255));
    }

    // Tests the width guard compares against cell height on a wide canvas
    // Verified by comparing width against cell width
    #[test]
    fn test_guard_uses_cell_height_for_width_on_wide_canvas() {
        // cells are 200 wide and 100 high; a 150-wide source passes the height-based guard
        let sources = vec![solid(150, 150)];
        let Ok(geometry) = GridGeometry::new(4, 400, 200) else {
            unreachable!("non-empty group");
        };
        assert!(geometry.admits(150, 150));
        assert!(150 < geometry.cell_width());

        let sources = [sources, vec![SourceImage::Failed; 3]].concat();
        let Ok(canvas) = compose(&sources, 400, 200) else {
            unreachable!("non-empty group");
        };
        assert!(region_all(&canvas, 0, 0, 200, 100, |v| v < 128));
    }

    // Tests the width guard compares against cell height on a tall canvas
    // Verified by comparing width against cell width
    #[test]
    fn test_guard_uses_cell_height_for_width_on_tall_canvas() {
        // cells are 100 wide and 200 high; a 150-wide source exceeds the cell width yet is omitted
        let Ok(geometry) = GridGeometry::new(4, 200, 400) else {
            unreachable!("non-empty group");
        };
        assert!(!geometry.admits(150, 250));
        assert!(150 > geometry.cell_width());

        let sources = vec![solid(150, 250), SourceImage::Failed];
        let Ok(canvas) = compose(&sources, 200, 400) else {
            unreachable!("non-empty group");
        };
        assert_eq!(canvas, blank_canvas(200, 400));
    }

    // Tests remainder pixels past the last cell stay white
    // Verified by stretching the last column of cells to the edge
    #[test]
    fn test_compose_remainder_stays_blank() {
        let sources: Vec<SourceImage> = (0..4).map(|_| solid(300, 300)).collect();
        let Ok(canvas) = compose(&sources, 201, 203) else {
            unreachable!("non-empty group");
        };

        assert!(region_all(&canvas, 0, 0, 200, 200, |v| v < 128));
        assert!(region_all(&canvas, 200, 0, 1, 203, |v| v == 255));
        assert!(region_all(&canvas, 0, 200, 201, 3, |v| v == 255));
    }

    // Tests a canvas too small for any cell leaves every tile blank
    // Verified by propagating resize errors out of composition
    #[test]
    fn test_compose_zero_sized_cells_degrade() {
        let sources: Vec<SourceImage> = (0..9).map(|_| solid(30, 30)).collect();
        let result = compose(&sources, 2, 2);
        assert!(result.is_ok());
        if let Ok(canvas) = result {
            assert_eq!(canvas, blank_canvas(2, 2));
        }
    }
}

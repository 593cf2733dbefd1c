//! Grid geometry and cell slicing.

use image::RgbaImage;
use log::{debug, info};

use crate::{CELL_SIZE, Error, RasterCell, Result, Rgb};

/// Layout of the spritesheet, in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
}

impl GridSpec {
    /// The 16x6 sheet covering printable ASCII 32..=127.
    pub const DEFAULT: Self = Self { columns: 16, rows: 6 };

    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of cells, or `None` if it does not fit in a `u32`.
    pub const fn cell_count(&self) -> Option<usize> {
        match self.columns.checked_mul(self.rows) {
            Some(count) => Some(count as usize),
            None => None,
        }
    }

    /// Minimum image size, in pixels, that holds the whole grid.
    ///
    /// `None` when either side overflows a `u32`.
    pub const fn pixel_size(&self) -> Option<(u32, u32)> {
        let size = CELL_SIZE as u32;
        match (self.columns.checked_mul(size), self.rows.checked_mul(size)) {
            (Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Slice `image` into `rows x columns` cells, row-major from the top-left.
///
/// Pixels to the right of or below the grid are ignored.
pub fn extract_cells(image: &RgbaImage, grid: GridSpec) -> Result<Vec<RasterCell>> {
    let (columns, rows) = (grid.columns, grid.rows);
    let (Some((needed_width, needed_height)), Some(count)) = (grid.pixel_size(), grid.cell_count())
    else {
        return Err(Error::GridTooLarge { columns, rows });
    };
    let (width, height) = image.dimensions();
    if width < needed_width || height < needed_height {
        return Err(Error::GridMismatch {
            width,
            height,
            columns,
            rows,
            needed_width,
            needed_height,
        });
    }

    info!("Extracting {count} cells in a {columns}x{rows} grid");

    let size = CELL_SIZE as u32;
    let cells: Vec<RasterCell> = (0..grid.rows)
        .flat_map(|row| (0..grid.columns).map(move |col| (row, col)))
        .enumerate()
        .map(|(index, (row, col))| {
            let (x0, y0) = (col * size, row * size);
            RasterCell::from_fn(index, |x, y| {
                Rgb::from(*image.get_pixel(x0 + x as u32, y0 + y as u32))
            })
        })
        .collect();

    debug!("Extracted {} cells", cells.len());
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;
    use crate::BACKGROUND;

    fn sheet(width: u32, height: u32) -> RgbaImage {
        let [r, g, b] = BACKGROUND.to_array();
        RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
    }

    #[test]
    fn test_default_grid() {
        assert_eq!(GridSpec::default().cell_count(), Some(96));
        assert_eq!(GridSpec::default().pixel_size(), Some((128, 48)));
    }

    #[test]
    fn test_extract_row_major() {
        let mut image = sheet(16, 16);
        // one ink pixel at (1, 2) inside the third cell (row 1, col 0)
        image.put_pixel(1, 10, Rgba([0, 0, 0, 255]));

        let cells = extract_cells(&image, GridSpec::new(2, 2)).unwrap();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells.iter().map(RasterCell::index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(cells[2].ink_pixels(BACKGROUND).collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(cells[0].ink_count(BACKGROUND), 0);
    }

    #[test]
    fn test_extra_pixels_ignored() {
        let mut image = sheet(20, 9);
        image.put_pixel(19, 8, Rgba([0, 0, 0, 255]));
        let cells = extract_cells(&image, GridSpec::new(2, 1)).unwrap();
        assert!(cells.iter().all(|c| c.ink_count(BACKGROUND) == 0));
    }

    #[test]
    fn test_image_too_small() {
        let image = sheet(120, 48);
        let err = extract_cells(&image, GridSpec::default()).unwrap_err();
        assert!(matches!(err, Error::GridMismatch { needed_width: 128, .. }));
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let image = sheet(128, 48);
        let err = extract_cells(&image, GridSpec::new(0x2000_0000, 1)).unwrap_err();
        assert!(matches!(err, Error::GridTooLarge { columns: 0x2000_0000, rows: 1 }));

        let err = extract_cells(&image, GridSpec::new(0x1_0000, 0x1_0000)).unwrap_err();
        assert!(matches!(err, Error::GridTooLarge { .. }));
        assert_eq!(GridSpec::new(u32::MAX, 2).cell_count(), None);
    }
}

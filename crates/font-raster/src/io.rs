//! Image file input and debug cell dumps.

use std::{
    fs::create_dir_all,
    io,
    path::{Path, PathBuf},
};

use image::{DynamicImage, Rgba, RgbImage, RgbaImage};
use log::{debug, info};

use crate::{CELL_SIZE, Error, RasterCell, Result};

/// ASCII position of the first cell in the sheet layout.
const FIRST_CELL_ASCII: usize = 32;

/// Bytes in a full 256-color RGB palette.
const PALETTE_LEN: usize = 256 * 3;

/// Decode an image file into RGBA8.
///
/// `.pcx` files go through the PCX decoder; anything else (PNG) through `image`.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let decoded = if is_pcx(path) {
        decode_pcx(path).map_err(|source| Error::Pcx { path: path.to_path_buf(), source })?
    } else {
        image::open(path)
            .map_err(|source| Error::Decode { path: path.to_path_buf(), source })?
            .to_rgba8()
    };
    info!("Loaded {} ({}x{})", path.display(), decoded.width(), decoded.height());
    Ok(decoded)
}

fn is_pcx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pcx"))
}

/// Read every scanline, resolving palette indices for paletted files.
fn decode_pcx(path: &Path) -> io::Result<RgbaImage> {
    let mut reader = pcx::Reader::from_file(path)?;
    let (width, height) = (usize::from(reader.width()), usize::from(reader.height()));
    if width == 0 || height == 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "PCX image has no pixels"));
    }

    let rgb = if reader.is_paletted() {
        let mut indices = vec![0u8; width * height];
        for row in indices.chunks_exact_mut(width) {
            reader.next_row_paletted(row)?;
        }
        let mut palette = [0u8; PALETTE_LEN];
        let colors = reader.read_palette(&mut palette)?;
        debug!("{} is paletted ({colors} colors)", path.display());
        indices
            .iter()
            .flat_map(|&index| {
                let at = usize::from(index) * 3;
                [palette[at], palette[at + 1], palette[at + 2]]
            })
            .collect()
    } else {
        let mut rgb = vec![0u8; width * height * 3];
        for row in rgb.chunks_exact_mut(width * 3) {
            reader.next_row_rgb(row)?;
        }
        rgb
    };

    let image = RgbImage::from_raw(width as u32, height as u32, rgb).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "PCX pixel data does not match its header")
    })?;
    Ok(DynamicImage::ImageRgb8(image).to_rgba8())
}

/// Write every cell as an 8x8 PNG named `cell_{ascii:03}.png` into `dir`.
///
/// Returns the written paths in cell order.
pub fn dump_cells(cells: &[RasterCell], dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    create_dir_all(dir)?;

    cells
        .iter()
        .map(|cell| {
            let size = CELL_SIZE as u32;
            let image = RgbaImage::from_fn(size, size, |x, y| {
                let [r, g, b] = cell.pixel(x as usize, y as usize).to_array();
                Rgba([r, g, b, 255])
            });
            let path = dir.join(format!("cell_{:03}.png", FIRST_CELL_ASCII + cell.index()));
            image.save(&path)?;
            debug!("Wrote {}", path.display());
            Ok(path)
        })
        .collect()
}

//! Error types for spritesheet decoding and slicing.

use std::{io, path::PathBuf, result};

/// Errors raised while turning an input image into raster cells.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to decode PCX image '{path}': {source}")]
    Pcx { path: PathBuf, source: io::Error },

    #[error("failed to encode cell image: {0}")]
    Encode(#[from] image::ImageError),

    #[error(
        "image is {width}x{height} pixels but a {columns}x{rows} grid of 8x8 cells needs at least {needed_width}x{needed_height}"
    )]
    GridMismatch {
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
        needed_width: u32,
        needed_height: u32,
    },

    #[error("a {columns}x{rows} grid of 8x8 cells is too large to address")]
    GridTooLarge { columns: u32, rows: u32 },

    #[error("invalid color '{0}': expected six hex digits such as 9F5B53")]
    InvalidColor(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;

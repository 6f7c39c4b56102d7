//! Seed-derived identity: digest, activation grid, spiral order and cell colors.

pub(crate) mod digest;
pub(crate) mod grid;
pub(crate) mod palette;
pub(crate) mod spiral;

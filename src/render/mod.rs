//! CPU rasterization of activation grids into frames.

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod raster;

//! Animation assembly: configuration, frame planning and sequencing.

pub(crate) mod assemble;
pub(crate) mod config;

//! Curve mathematics

pub mod nurbs;
pub mod spline_converter;

pub use nurbs::{FixedSampleIter, Nurbs};
pub use spline_converter::{spline_to_polyline, to_nurbs, SPLINE_SAMPLE_COUNT};

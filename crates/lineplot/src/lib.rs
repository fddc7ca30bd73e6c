/*!
This crate renders simple line charts: one or more labeled series of (x, y)
points drawn over a shared pair of axes with a title and a legend. A series
consists of segments; consecutive segments are not joined, which leaves a
visible gap wherever the caller wants one. Charts can be rendered as SVG, PNG,
and PDF images.
*/

mod common;
mod image;
mod lineplot;
mod pdf;
mod png;
mod svg;

pub use common::prepare_svg_tree;
pub use image::{generate as generate_image, ImageFormat};
pub use lineplot::{Color, LinePlot, Point, Series};

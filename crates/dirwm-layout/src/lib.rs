pub mod geometry;
pub mod layout;

pub use geometry::PaneGeometry;
pub use layout::LayoutEngine;

pub mod node;
pub mod tree;

pub use node::color::HslaPixel;
pub use node::error::{BuildError, ImageError};
pub use node::image::HslaImage;
pub use node::{Axis, PartitionNode};
pub use tree::PartitionTree;

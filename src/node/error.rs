use thiserror::Error;

/// Reason why an image couldn't be turned into a partition tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
	/// The image has no pixels along at least one axis.
	#[error("image of {width}x{height} pixels has no area to partition")]
	EmptyImage { width: u32, height: u32 },
}

/// Reason why a pixel couldn't be accessed in an `HslaImage`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
	/// The coordinate lies outside of the image.
	#[error("pixel ({x}, {y}) is outside of a {width}x{height} image")]
	OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

use super::color::HslaPixel;
use super::error::ImageError;

/// A rectangular buffer of `HslaPixel`s, stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct HslaImage {
	width: u32,
	height: u32,
	pixels: Vec<HslaPixel>,
}

impl HslaImage {
	/// Creates an image of the given size with every pixel at the default
	/// (transparent black) color.
	pub fn new(width: u32, height: u32) -> Self {
		HslaImage {
			width,
			height,
			pixels: vec![HslaPixel::default(); width as usize * height as usize],
		}
	}

	/// Creates an image by calling `f` for each coordinate.
	pub fn from_fn<F: FnMut(u32, u32) -> HslaPixel>(width: u32, height: u32, mut f: F) -> Self {
		let mut pixels = Vec::with_capacity(width as usize * height as usize);
		for y in 0..height {
			for x in 0..width {
				pixels.push(f(x, y));
			}
		}
		HslaImage { width, height, pixels }
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn dimensions(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	fn index(&self, x: u32, y: u32) -> Result<usize, ImageError> {
		if x >= self.width || y >= self.height {
			return Err(ImageError::OutOfBounds { x, y, width: self.width, height: self.height });
		}
		Ok(y as usize * self.width as usize + x as usize)
	}

	/// Returns the pixel at `(x, y)`, or an `Err` if it is outside the image.
	pub fn get_pixel_checked(&self, x: u32, y: u32) -> Result<&HslaPixel, ImageError> {
		self.index(x, y).map(|i| &self.pixels[i])
	}

	/// Returns the pixel at `(x, y)`.
	///
	/// # Panics
	///
	/// Panics if the coordinate is outside the image.
	pub fn get_pixel(&self, x: u32, y: u32) -> &HslaPixel {
		match self.get_pixel_checked(x, y) {
			Ok(px) => px,
			Err(e) => panic!("{}", e),
		}
	}

	/// Overwrites the pixel at `(x, y)`.
	///
	/// # Panics
	///
	/// Panics if the coordinate is outside the image.
	pub fn put_pixel(&mut self, x: u32, y: u32, px: HslaPixel) {
		match self.index(x, y) {
			Ok(i) => self.pixels[i] = px,
			Err(e) => panic!("{}", e),
		}
	}

	/// Pixels in row-major order.
	pub fn pixels(&self) -> impl Iterator<Item = &HslaPixel> {
		self.pixels.iter()
	}

	/// Converts a traditional image into the HSLA model.
	pub fn from_rgba(img: &image::RgbaImage) -> Self {
		HslaImage::from_fn(img.width(), img.height(),
			|x, y| HslaPixel::from_rgba(*img.get_pixel(x, y)))
	}

	/// Converts the image back into 8-bit RGBA.
	pub fn to_rgba(&self) -> image::RgbaImage {
		image::RgbaImage::from_fn(self.width, self.height,
			|x, y| self.get_pixel(x, y).to_rgba())
	}
}

impl super::PartitionNode {
	/// Paints this subtree into `img`.
	///
	/// Only leaves paint: each fills every pixel of its region with its color.
	/// Branch nodes just recurse, since their children tile their region.
	pub fn to_image(&self, img: &mut HslaImage) {
		match self.children {
			Some(ref sects) => {
				for section in sects.iter() {
					section.to_image(img);
				}
			}
			None => {
				for y in self.origin.1..self.origin.1 + self.height {
					for x in self.origin.0..self.origin.0 + self.width {
						img.put_pixel(x, y, self.color);
					}
				}
			}
		}
	}
}

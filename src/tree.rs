use tracing::{debug, warn};

use crate::node::error::BuildError;
use crate::node::image::HslaImage;
use crate::node::PartitionNode;

/// A binary space-partitioning tree over the pixels of an image.
///
/// Every node covers a rectangle of the source image and stores its average
/// color; before pruning, the leaves are the individual pixels. Cloning makes
/// a fully independent deep copy, and `clone_from` rebuilds this tree as a
/// copy of another.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionTree {
	root: PartitionNode,
	pruned: bool,
}

impl PartitionTree {
	/// Builds the tree for the whole of `img`, from `(0, 0)` to
	/// `(width - 1, height - 1)`.
	///
	/// Will return an `Err` if the image has no pixels.
	pub fn new(img: &HslaImage) -> Result<Self, BuildError> {
		let (width, height) = img.dimensions();
		if width == 0 || height == 0 {
			return Err(BuildError::EmptyImage { width, height });
		}
		let root = PartitionNode::build(img, (0, 0), width, height);
		debug!(width, height, nodes = root.size(), "built partition tree");
		Ok(PartitionTree { root, pruned: false })
	}

	/// Builds the tree for a traditional image, converting it to HSLA first.
	pub fn from_rgba(img: &image::RgbaImage) -> Result<Self, BuildError> {
		PartitionTree::new(&HslaImage::from_rgba(img))
	}

	/// Paints every leaf's region with the leaf's color, giving an image the
	/// size of the source.
	///
	/// For an unpruned tree this reproduces the source exactly.
	pub fn render(&self) -> HslaImage {
		let mut img = HslaImage::new(self.root.width, self.root.height);
		self.root.to_image(&mut img);
		img
	}

	/// Like `render`, but converts the result to 8-bit RGBA.
	pub fn render_rgba(&self) -> image::RgbaImage {
		self.render().to_rgba()
	}

	/// Trims subtrees as high in the tree as possible; see
	/// `PartitionNode::prune` for the criteria.
	///
	/// Pruning decisions are only meaningful on a tree that has never been
	/// pruned (including one cloned from a pruned tree). Calling this again
	/// still trims, but the result is not guaranteed to satisfy the
	/// tolerance against the original pixels.
	pub fn prune(&mut self, tolerance: f64) {
		if self.pruned {
			warn!(tolerance, "pruning a tree that was already pruned");
		}
		let before = self.root.size();
		self.root.prune(tolerance);
		self.pruned = true;
		debug!(tolerance, before, after = self.root.size(), "pruned partition tree");
	}

	/// Whether `prune` has been called on this tree or the tree it was
	/// cloned from.
	pub fn is_pruned(&self) -> bool {
		self.pruned
	}

	/// Total number of nodes, branches included.
	pub fn size(&self) -> usize {
		self.root.size()
	}

	/// Number of leaf nodes.
	pub fn num_leaves(&self) -> usize {
		self.root.num_leaves()
	}

	/// Rearranges the tree so that it renders mirrored left to right.
	pub fn flip_horizontal(&mut self) {
		self.root.flip_horizontal();
		debug!("flipped partition tree horizontally");
	}

	/// Rearranges the tree so that it renders mirrored top to bottom.
	pub fn flip_vertical(&mut self) {
		self.root.flip_vertical();
		debug!("flipped partition tree vertically");
	}

	/// Read-only access to the root node, for inspection and testing.
	pub fn root(&self) -> &PartitionNode {
		&self.root
	}
}

pub mod color;
pub mod error;

use color::{ColorAccumulator, HslaPixel};
use self::image::HslaImage;

/// Direction along which a node's region is divided between its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
	/// Children sit side by side (left, right).
	Horizontal,
	/// Children are stacked (top, bottom).
	Vertical,
}

/// Node in a partition tree for storing an image.
///
/// Covers the rectangle of `width` by `height` pixels whose upper-left pixel
/// is at `origin`. May contain exactly two subnodes tiling that rectangle
/// (branch node) or none (leaf node).
///
/// It always contains the average color of its whole region, such that tree
/// descent can stop at any level and give a meaningful preview, which is
/// what pruning relies on.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionNode {
	pub origin: (u32, u32),
	pub width: u32,
	pub height: u32,
	pub color: HslaPixel,
	pub children: Option<Box<[PartitionNode; 2]>>,
}

impl PartitionNode {
	/// Recursively partitions the given region of `img` into a tree.
	///
	/// Regions at least as wide as they are tall are split side by side,
	/// taller regions are split into a top and bottom half. On an odd split
	/// the second child receives the larger half. Single pixels become leaves.
	///
	/// Each node's color is averaged over every pixel of its own region,
	/// never derived from the children's averages. A pixel is scanned once
	/// per ancestor, so the whole build is `O(n log n)` in the pixel count.
	///
	/// The region must be non-empty and lie within `img`; a non-empty region
	/// always has an average, so the default color is never used.
	pub fn build(img: &HslaImage, origin: (u32, u32), width: u32, height: u32) -> PartitionNode {
		debug_assert!(width >= 1 && height >= 1, "empty region");
		if width == 1 && height == 1 {
			return PartitionNode {
				origin,
				width,
				height,
				color: *img.get_pixel(origin.0, origin.1),
				children: None,
			};
		}

		// Recursion
		let children = if width >= height {
			let half = width / 2;
			[
				PartitionNode::build(img, origin, half, height),
				PartitionNode::build(img, (origin.0 + half, origin.1), width - half, height),
			]
		} else {
			let half = height / 2;
			[
				PartitionNode::build(img, origin, width, half),
				PartitionNode::build(img, (origin.0, origin.1 + half), width, height - half),
			]
		};

		// Average over the full region
		let mut acc = ColorAccumulator::default();
		for y in origin.1..origin.1 + height {
			for x in origin.0..origin.0 + width {
				acc.add(img.get_pixel(x, y));
			}
		}
		PartitionNode {
			origin,
			width,
			height,
			color: acc.average().unwrap_or_default(),
			children: Some(Box::new(children)),
		}
	}

	pub fn is_leaf(&self) -> bool {
		self.children.is_none()
	}

	/// The direction in which this node's children tile its region, or `None`
	/// for a leaf.
	///
	/// Derived from the children's geometry rather than the node's aspect
	/// ratio, so it holds for mirrored trees too.
	pub fn split_axis(&self) -> Option<Axis> {
		self.children.as_ref().map(|c| {
			if c[0].height == self.height && c[0].width + c[1].width == self.width {
				Axis::Horizontal
			} else {
				Axis::Vertical
			}
		})
	}

	/// Number of nodes in this subtree, branches included.
	pub fn size(&self) -> usize {
		match self.children {
			Some(ref c) => 1 + c[0].size() + c[1].size(),
			None => 1,
		}
	}

	/// Number of leaf nodes in this subtree.
	pub fn num_leaves(&self) -> usize {
		match self.children {
			Some(ref c) => c[0].num_leaves() + c[1].num_leaves(),
			None => 1,
		}
	}

	/// Pre-order iterator over every node of this subtree.
	pub fn nodes(&self) -> Nodes<'_> {
		Nodes { stack: vec![self] }
	}

	/// Iterator over the leaves of this subtree, first child first.
	pub fn leaves(&self) -> impl Iterator<Item = &PartitionNode> {
		self.nodes().filter(|n| n.is_leaf())
	}

	/// Whether the pixel `(x, y)` lies within this node's region.
	pub fn contains(&self, x: u32, y: u32) -> bool {
		x >= self.origin.0 && x < self.origin.0 + self.width &&
			y >= self.origin.1 && y < self.origin.1 + self.height
	}
}

/// Pre-order traversal over a subtree; see `PartitionNode::nodes`.
pub struct Nodes<'a> {
	stack: Vec<&'a PartitionNode>,
}

impl<'a> Iterator for Nodes<'a> {
	type Item = &'a PartitionNode;

	fn next(&mut self) -> Option<Self::Item> {
		self.stack.pop().map(|node| {
			if let Some(ref c) = node.children {
				self.stack.push(&c[1]);
				self.stack.push(&c[0]);
			}
			node
		})
	}
}

pub mod flip;
pub mod image;
pub mod prune;

#[cfg(test)]
mod tests {
	use super::*;

	fn gradient(width: u32, height: u32) -> HslaImage {
		let mut img = HslaImage::new(width, height);
		for y in 0..height {
			for x in 0..width {
				img.put_pixel(x, y, HslaPixel::new(
					(x * 37 + y * 11) as f64 % 360.,
					0.5,
					(x + y) as f64 / (width + height) as f64,
					1.,
				));
			}
		}
		img
	}

	fn assert_tiled(node: &PartitionNode) {
		if let Some(ref c) = node.children {
			let (a, b) = (&c[0], &c[1]);
			assert_eq!(a.origin, node.origin);
			match node.split_axis().unwrap() {
				Axis::Horizontal => {
					assert_eq!(a.width, node.width / 2);
					assert_eq!(b.width, node.width - node.width / 2);
					assert_eq!((a.height, b.height), (node.height, node.height));
					assert_eq!(b.origin, (node.origin.0 + a.width, node.origin.1));
				}
				Axis::Vertical => {
					assert_eq!(a.height, node.height / 2);
					assert_eq!(b.height, node.height - node.height / 2);
					assert_eq!((a.width, b.width), (node.width, node.width));
					assert_eq!(b.origin, (node.origin.0, node.origin.1 + a.height));
				}
			}
			assert_tiled(a);
			assert_tiled(b);
		} else {
			assert_eq!((node.width, node.height), (1, 1));
		}
	}

	#[test]
	fn children_tile_parent() {
		for &(w, h) in [(1, 1), (2, 1), (1, 2), (3, 5), (7, 4), (6, 6)].iter() {
			let root = PartitionNode::build(&gradient(w, h), (0, 0), w, h);
			assert_eq!((root.origin, root.width, root.height), ((0, 0), w, h));
			assert_tiled(&root);
		}
	}

	#[test]
	fn split_follows_aspect_ratio() {
		let square = PartitionNode::build(&gradient(4, 4), (0, 0), 4, 4);
		assert_eq!(square.split_axis(), Some(Axis::Horizontal));
		let tall = PartitionNode::build(&gradient(2, 3), (0, 0), 2, 3);
		assert_eq!(tall.split_axis(), Some(Axis::Vertical));
		let c = tall.children.as_ref().unwrap();
		assert_eq!((c[0].height, c[1].height), (1, 2));
	}

	#[test]
	fn averages_come_from_region_pixels() {
		let img = gradient(5, 3);
		let root = PartitionNode::build(&img, (0, 0), 5, 3);
		for leaf in root.leaves() {
			assert_eq!(leaf.color, *img.get_pixel(leaf.origin.0, leaf.origin.1));
		}
		for node in root.nodes().filter(|n| !n.is_leaf()) {
			let mut acc = ColorAccumulator::default();
			for y in node.origin.1..node.origin.1 + node.height {
				for x in node.origin.0..node.origin.0 + node.width {
					acc.add(img.get_pixel(x, y));
				}
			}
			assert_eq!(acc.count(), (node.width * node.height) as u64);
			assert_eq!(node.color, acc.average().unwrap());
		}
	}

	#[test]
	fn counts_match_iterators() {
		let root = PartitionNode::build(&gradient(5, 7), (0, 0), 5, 7);
		assert_eq!(root.num_leaves(), 35);
		assert_eq!(root.size(), 69);
		assert_eq!(root.nodes().count(), root.size());
		assert_eq!(root.leaves().count(), root.num_leaves());
	}

	#[test]
	fn leaves_come_in_tiling_order() {
		let root = PartitionNode::build(&gradient(3, 1), (0, 0), 3, 1);
		let origins = root.leaves().map(|l| l.origin).collect::<Vec<_>>();
		assert_eq!(origins, vec![(0, 0), (1, 0), (2, 0)]);
		assert!(root.contains(2, 0));
		assert!(!root.contains(3, 0));
	}
}

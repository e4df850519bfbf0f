use super::color::HslaPixel;

impl super::PartitionNode {
	/// Whether every leaf of this subtree has a color within `tolerance` of
	/// `target` (inclusive).
	///
	/// Does not modify the tree. `target` is passed explicitly so that the
	/// whole intact subtree is judged against one color, typically the
	/// subtree root's own average.
	pub fn prunable(&self, target: &HslaPixel, tolerance: f64) -> bool {
		match self.children {
			Some(ref sects) => sects.iter().all(|s| s.prunable(target, tolerance)),
			None => target.dist(&self.color) <= tolerance,
		}
	}

	/// Trims subtrees as close to this node as possible.
	///
	/// A subtree is cut down to its root when all of its leaves lie within
	/// `tolerance` of that root's color. The root then becomes a leaf and
	/// keeps its color, which is already the average over its whole region.
	/// Only subtrees that can't be pruned as a whole are descended into, so
	/// descendants of a pruned node are never examined on their own.
	///
	/// The decisions assume leaves are single source pixels, so this should
	/// only be run on a tree that has never been pruned.
	pub fn prune(&mut self, tolerance: f64) {
		let color = self.color;
		if self.prunable(&color, tolerance) {
			self.children = None;
		} else if let Some(ref mut sects) = self.children {
			// Recursion
			sects.iter_mut().for_each(|s| s.prune(tolerance));
		}
	}
}

use super::Axis;

impl super::PartitionNode {
	/// Mirrors this subtree left to right within its own region.
	///
	/// Children are only swapped at nodes split side by side, but origins are
	/// re-derived throughout the subtree. Works on pruned trees and runs in
	/// time linear in the number of nodes.
	pub fn flip_horizontal(&mut self) {
		let origin = self.origin;
		self.mirror(Axis::Horizontal, origin);
	}

	/// Mirrors this subtree top to bottom within its own region.
	///
	/// The counterpart of `flip_horizontal`, swapping children only at
	/// nodes that are split into a top and bottom half.
	pub fn flip_vertical(&mut self) {
		let origin = self.origin;
		self.mirror(Axis::Vertical, origin);
	}

	/// Moves this node to `origin`, swaps its children if it is split along
	/// `axis`, then lays the children out again from the new origin.
	///
	/// Splits may be uneven, so a child's new position depends on which
	/// sibling now comes first and can't be found by swapping alone.
	fn mirror(&mut self, axis: Axis, origin: (u32, u32)) {
		self.origin = origin;
		let split = self.split_axis();
		if let (Some(sects), Some(split)) = (self.children.as_mut(), split) {
			if split == axis {
				sects.swap(0, 1);
			}
			let second = match split {
				Axis::Horizontal => (origin.0 + sects[0].width, origin.1),
				Axis::Vertical => (origin.0, origin.1 + sects[0].height),
			};
			sects[0].mirror(axis, origin);
			sects[1].mirror(axis, second);
		}
	}
}

use ptree_img::{Axis, HslaImage, HslaPixel, PartitionTree};

fn hue_gap(a: f64, b: f64) -> f64 {
	let d = (a - b).abs();
	d.min(360. - d)
}

#[test]
fn two_pixel_row() {
	let p0 = HslaPixel::new(350., 0.6, 0.4, 1.);
	let p1 = HslaPixel::new(10., 0.2, 0.6, 0.5);
	let img = HslaImage::from_fn(2, 1, |x, _| if x == 0 { p0 } else { p1 });
	let tree = PartitionTree::new(&img).unwrap();

	let root = tree.root();
	assert_eq!(root.split_axis(), Some(Axis::Horizontal));
	let sects = root.children.as_ref().unwrap();
	assert_eq!((sects[0].origin, sects[0].width, sects[0].height), ((0, 0), 1, 1));
	assert_eq!((sects[1].origin, sects[1].width, sects[1].height), ((1, 0), 1, 1));
	assert_eq!(sects[0].color, p0);
	assert_eq!(sects[1].color, p1);

	// Circular mean of 350° and 10° is 0°, not 180°
	assert!(hue_gap(root.color.h, 0.) < 1e-9, "got hue {}", root.color.h);
	assert!((root.color.s - 0.4).abs() < 1e-12);
	assert!((root.color.l - 0.5).abs() < 1e-12);
	assert!((root.color.a - 0.75).abs() < 1e-12);

	assert_eq!(tree.render(), img);
}

#[test]
fn solid_square_prunes_to_one_leaf() {
	for color in [
		HslaPixel::new(37.3, 0.3, 0.7, 1.),
		HslaPixel::new(0., 0.5, 0.25, 1.),
		HslaPixel::from_rgba(image::Rgba([10, 20, 30, 255])),
		HslaPixel::from_rgba(image::Rgba([200, 100, 50, 255])),
		HslaPixel::from_rgba(image::Rgba([77, 150, 33, 200])),
	].iter() {
		let img = HslaImage::from_fn(4, 4, |_, _| *color);
		let mut tree = PartitionTree::new(&img).unwrap();
		assert_eq!(tree.size(), 31);
		tree.prune(0.);
		assert_eq!(tree.size(), 1, "color {:?}", color);
		assert_eq!(tree.num_leaves(), 1);
		let root = tree.root();
		assert!(root.is_leaf());
		assert_eq!((root.origin, root.width, root.height), ((0, 0), 4, 4));
		let out = tree.render();
		assert_eq!(out.pixels().filter(|p| *p == color).count(), 16);
	}
}

#[test]
fn two_pixel_column_flips_vertically() {
	let top = HslaPixel::new(200., 1., 0.5, 1.);
	let bottom = HslaPixel::new(40., 1., 0.5, 1.);
	let img = HslaImage::from_fn(1, 2, |_, y| if y == 0 { top } else { bottom });
	let mut tree = PartitionTree::new(&img).unwrap();
	assert_eq!(tree.root().split_axis(), Some(Axis::Vertical));

	tree.flip_vertical();
	let sects = tree.root().children.as_ref().unwrap();
	assert_eq!((sects[0].origin, sects[0].color), ((0, 0), bottom));
	assert_eq!((sects[1].origin, sects[1].color), ((0, 1), top));

	let out = tree.render();
	assert_eq!(*out.get_pixel(0, 0), bottom);
	assert_eq!(*out.get_pixel(0, 1), top);
}

#[test]
fn pruned_tree_flips_with_multi_pixel_leaves() {
	// Left three columns dark, the rest light; odd width makes the split uneven
	let dark = HslaPixel::new(0., 0., 0.125, 1.);
	let light = HslaPixel::new(0., 0., 0.875, 1.);
	let img = HslaImage::from_fn(7, 3, |x, _| if x < 3 { dark } else { light });
	let mut tree = PartitionTree::new(&img).unwrap();
	tree.prune(0.01);
	assert!(tree.num_leaves() < 21);

	tree.flip_horizontal();
	let out = tree.render();
	for y in 0..3 {
		for x in 0..7 {
			let expected = if x >= 4 { dark } else { light };
			assert_eq!(*out.get_pixel(x, y), expected, "pixel ({}, {})", x, y);
		}
	}
}

#[test]
fn rgba_round_trip_through_tree() {
	let rgba = image::RgbaImage::from_fn(5, 4, |x, y| image::Rgba([x as u8 * 50, y as u8 * 60, 90, 255]));
	let tree = PartitionTree::from_rgba(&rgba).unwrap();
	assert_eq!(tree.render_rgba(), rgba);
}

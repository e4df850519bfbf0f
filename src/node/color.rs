/// An 8-bit RGBA color as used by the `image` crate.
pub type Rgba = image::Rgba<u8>;

/// Projects a hue angle (in degrees) onto the x axis of the unit circle.
pub fn deg_to_x(deg: f64) -> f64 {
	deg.to_radians().cos()
}

/// Projects a hue angle (in degrees) onto the y axis of the unit circle.
pub fn deg_to_y(deg: f64) -> f64 {
	deg.to_radians().sin()
}

/// Recovers a hue angle in `[0, 360)` from a point around the unit circle.
///
/// The point doesn't need to lie on the circle; only its direction matters.
/// The origin maps to 0.
pub fn xy_to_deg(x: f64, y: f64) -> f64 {
	let deg = y.atan2(x).to_degrees().rem_euclid(360.);
	// rem_euclid can round up to the modulus for tiny negative angles
	if deg >= 360. { 0. } else { deg }
}

/// A color in the hue/saturation/luminance model, plus alpha.
///
/// `h` is in degrees within `[0, 360)`; `s`, `l` and `a` are within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HslaPixel {
	pub h: f64,
	pub s: f64,
	pub l: f64,
	pub a: f64,
}

impl HslaPixel {
	pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		HslaPixel { h, s, l, a }
	}

	/// Distance between two colors in the HSL cylinder.
	///
	/// Each color is placed at `(s cos h, s sin h, l)` and the Euclidean
	/// distance between the two points is returned, so hue only matters in
	/// proportion to saturation. Alpha is not considered.
	pub fn dist(&self, other: &HslaPixel) -> f64 {
		let dx = self.s * deg_to_x(self.h) - other.s * deg_to_x(other.h);
		let dy = self.s * deg_to_y(self.h) - other.s * deg_to_y(other.h);
		let dl = self.l - other.l;
		(dx * dx + dy * dy + dl * dl).sqrt()
	}

	/// Converts an RGBA color into the HSLA model.
	pub fn from_rgba(c: Rgba) -> Self {
		let r = c.0[0] as f64 / 255.;
		let g = c.0[1] as f64 / 255.;
		let b = c.0[2] as f64 / 255.;
		let a = c.0[3] as f64 / 255.;
		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let l = (max + min) / 2.;
		if max == min {
			return HslaPixel::new(0., 0., l, a);
		}
		let d = max - min;
		let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
		let h = if max == r {
			(g - b) / d + if g < b { 6. } else { 0. }
		} else if max == g {
			(b - r) / d + 2.
		} else {
			(r - g) / d + 4.
		};
		HslaPixel::new(h * 60., s, l, a)
	}

	/// Converts the color back into 8-bit RGBA, rounding each channel.
	pub fn to_rgba(&self) -> Rgba {
		let (r, g, b) = if self.s == 0. {
			(self.l, self.l, self.l)
		} else {
			let q = if self.l < 0.5 {
				self.l * (1. + self.s)
			} else {
				self.l + self.s - self.l * self.s
			};
			let p = 2. * self.l - q;
			let hk = self.h / 360.;
			(
				hue_to_channel(p, q, hk + 1. / 3.),
				hue_to_channel(p, q, hk),
				hue_to_channel(p, q, hk - 1. / 3.),
			)
		};
		image::Rgba([to_byte(r), to_byte(g), to_byte(b), to_byte(self.a)])
	}
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
	let t = t.rem_euclid(1.);
	if t < 1. / 6. {
		p + (q - p) * 6. * t
	} else if t < 1. / 2. {
		q
	} else if t < 2. / 3. {
		p + (q - p) * (2. / 3. - t) * 6.
	} else {
		p
	}
}

fn to_byte(n: f64) -> u8 {
	(n.max(0.).min(1.) * 255.).round() as u8
}

/// Running sums for averaging a set of colors.
///
/// Saturation, luminance and alpha are averaged arithmetically; hue is
/// averaged as a circular mean so that e.g. 359° and 1° average to 0°.
///
/// When every color added is identical, that color is returned unchanged
/// rather than recomputed from the sums, so a uniform region averages to
/// exactly its own pixel value.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorAccumulator {
	first: Option<HslaPixel>,
	uniform: bool,
	hx: f64,
	hy: f64,
	s: f64,
	l: f64,
	a: f64,
	count: u64,
}

impl ColorAccumulator {
	pub fn add(&mut self, px: &HslaPixel) {
		match self.first {
			None => {
				self.first = Some(*px);
				self.uniform = true;
			}
			Some(ref first) => self.uniform &= first == px,
		}
		self.hx += deg_to_x(px.h);
		self.hy += deg_to_y(px.h);
		self.s += px.s;
		self.l += px.l;
		self.a += px.a;
		self.count += 1;
	}

	pub fn count(&self) -> u64 {
		self.count
	}

	/// Average of all colors added so far, or `None` if there were none.
	pub fn average(&self) -> Option<HslaPixel> {
		if self.count == 0 {
			return None;
		}
		if self.uniform {
			return self.first;
		}
		let n = self.count as f64;
		Some(HslaPixel::new(
			xy_to_deg(self.hx / n, self.hy / n),
			self.s / n,
			self.l / n,
			self.a / n,
		))
	}
}

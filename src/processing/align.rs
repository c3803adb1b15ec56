//! Orthogonal Procrustes alignment of 2-D point sets

use anyhow::{bail, Result};
use ndarray::Array2;

type Mat2 = [[f64; 2]; 2];

/// Singular value decomposition `m = u · diag(s) · vt` of a 2x2 matrix.
///
/// Singular values are non-negative and sorted descending.
pub fn svd2(m: Mat2) -> (Mat2, [f64; 2], Mat2) {
	let [[a, b], [c, d]] = m;
	let e = (a + d) / 2.0;
	let f = (a - d) / 2.0;
	let g = (c + b) / 2.0;
	let h = (c - b) / 2.0;

	let q = e.hypot(h);
	let r = f.hypot(g);
	let a1 = g.atan2(f);
	let a2 = h.atan2(e);
	let theta = (a2 - a1) / 2.0;
	let phi = (a2 + a1) / 2.0;

	let mut u = rotation(phi);
	let vt = rotation(theta);
	let mut s = [q + r, q - r];

	if s[1] < 0.0 {
		s[1] = -s[1];
		u[0][1] = -u[0][1];
		u[1][1] = -u[1][1];
	}

	(u, s, vt)
}

fn rotation(angle: f64) -> Mat2 {
	let (sin, cos) = angle.sin_cos();
	[[cos, -sin], [sin, cos]]
}

fn matmul(a: &Mat2, b: &Mat2) -> Mat2 {
	let mut out = [[0.0; 2]; 2];
	for i in 0..2 {
		for j in 0..2 {
			out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j];
		}
	}
	out
}

fn det(m: &Mat2) -> f64 {
	m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

fn centroid(points: &Array2<f32>) -> [f64; 2] {
	let n = points.nrows().max(1) as f64;
	let mut c = [0.0; 2];
	for row in points.rows() {
		c[0] += row[0] as f64;
		c[1] += row[1] as f64;
	}
	[c[0] / n, c[1] / n]
}

fn check_planar(points: &Array2<f32>, role: &str) -> Result<()> {
	if points.ncols() != 2 {
		bail!("Procrustes {} must be 2-D, got {} columns", role, points.ncols());
	}
	Ok(())
}

/// Rigid transform (rotation + translation, never scaling) mapping one point set onto another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Procrustes {
	pub rotation: [[f64; 2]; 2],
	pub source_centroid: [f64; 2],
	pub target_centroid: [f64; 2],
}

impl Procrustes {
	/// Fit on corresponding rows of `source` and `target`
	pub fn fit(source: &Array2<f32>, target: &Array2<f32>) -> Result<Self> {
		check_planar(source, "source")?;
		check_planar(target, "target")?;
		if source.nrows() != target.nrows() {
			bail!(
				"Procrustes needs matching rows, got {} and {}",
				source.nrows(),
				target.nrows()
			);
		}
		if source.nrows() == 0 {
			bail!("Procrustes needs at least one point");
		}

		let mu_src = centroid(source);
		let mu_tgt = centroid(target);

		// M = T^T · S over centered points
		let mut m = [[0.0; 2]; 2];
		for (s, t) in source.rows().into_iter().zip(target.rows()) {
			let sc = [s[0] as f64 - mu_src[0], s[1] as f64 - mu_src[1]];
			let tc = [t[0] as f64 - mu_tgt[0], t[1] as f64 - mu_tgt[1]];
			for i in 0..2 {
				for j in 0..2 {
					m[i][j] += tc[i] * sc[j];
				}
			}
		}

		let (u, _, vt) = svd2(m);
		let sign = if det(&matmul(&u, &vt)) < 0.0 { -1.0 } else { 1.0 };
		let d = [[1.0, 0.0], [0.0, sign]];
		let rotation = matmul(&matmul(&u, &d), &vt);

		Ok(Self {
			rotation,
			source_centroid: mu_src,
			target_centroid: mu_tgt,
		})
	}

	/// `(p - source_centroid) · Rᵀ + target_centroid` for every row
	pub fn apply(&self, points: &Array2<f32>) -> Result<Array2<f32>> {
		check_planar(points, "input")?;
		let r = &self.rotation;
		let mut out = Array2::<f32>::zeros(points.raw_dim());

		for (i, p) in points.rows().into_iter().enumerate() {
			let x = p[0] as f64 - self.source_centroid[0];
			let y = p[1] as f64 - self.source_centroid[1];
			out[[i, 0]] = (r[0][0] * x + r[0][1] * y + self.target_centroid[0]) as f32;
			out[[i, 1]] = (r[1][0] * x + r[1][1] * y + self.target_centroid[1]) as f32;
		}

		Ok(out)
	}

	pub fn determinant(&self) -> f64 {
		det(&self.rotation)
	}
}

/// Rotate and translate `source` onto `target` without rescaling
pub fn procrustes_align(source: &Array2<f32>, target: &Array2<f32>) -> Result<Array2<f32>> {
	Procrustes::fit(source, target)?.apply(source)
}

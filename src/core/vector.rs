//! Dense flavor-space vector math

/// Dot product over the shared prefix of two vectors
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
	a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm
pub fn norm(v: &[f64]) -> f64 {
	v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Unit-length copy of `v`; a zero vector is returned unchanged
pub fn normalize(v: &[f64]) -> Vec<f64> {
	let n = norm(v);
	if n > 0.0 {
		v.iter().map(|x| x / n).collect()
	} else {
		v.to_vec()
	}
}

/// Cosine distance in [0.0, 2.0]; 1.0 when either vector has zero norm
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
	let na = norm(a);
	let nb = norm(b);
	if na == 0.0 || nb == 0.0 {
		return 1.0;
	}
	let similarity = (dot(a, b) / (na * nb)).clamp(-1.0, 1.0);
	1.0 - similarity
}

/// Accumulate `v * weight` into `acc`
pub fn add_scaled(acc: &mut [f64], v: &[f64], weight: f64) {
	for (a, x) in acc.iter_mut().zip(v.iter()) {
		*a += x * weight;
	}
}

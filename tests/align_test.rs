// Procrustes alignment of 2-D point sets

use cocktail_cortex::processing::align::svd2;
use cocktail_cortex::processing::{procrustes_align, Procrustes};
use ndarray::{array, Array2};

fn points() -> Array2<f32> {
    array![
        [0.0, 0.0],
        [3.0, 0.5],
        [1.0, 2.0],
        [-1.5, 1.0],
        [2.0, -2.5],
    ]
}

fn rotate(p: &Array2<f32>, angle: f32, dx: f32, dy: f32) -> Array2<f32> {
    let (s, c) = angle.sin_cos();
    let mut out = p.clone();
    for (i, row) in p.rows().into_iter().enumerate() {
        out[[i, 0]] = c * row[0] - s * row[1] + dx;
        out[[i, 1]] = s * row[0] + c * row[1] + dy;
    }
    out
}

fn assert_close(a: &Array2<f32>, b: &Array2<f32>, tol: f32) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < tol, "{} != {}", x, y);
    }
}

fn spread(p: &Array2<f32>) -> f32 {
    let d0 = p[[1, 0]] - p[[0, 0]];
    let d1 = p[[1, 1]] - p[[0, 1]];
    (d0 * d0 + d1 * d1).sqrt()
}

#[test]
fn test_identity_alignment() {
    let x = points();
    assert_close(&procrustes_align(&x, &x).unwrap(), &x, 1e-5);
}

#[test]
fn test_recovers_rotation_and_translation() {
    let x = points();
    for angle in [0.3f32, 1.7, -2.9, std::f32::consts::PI] {
        let y = rotate(&x, angle, 4.0, -1.0);
        let aligned = procrustes_align(&x, &y).unwrap();
        assert_close(&aligned, &y, 1e-4);
    }
}

#[test]
fn test_never_reflects() {
    let x = points();
    let mut mirrored = x.clone();
    mirrored.column_mut(0).mapv_inplace(|v| -v);

    let procrustes = Procrustes::fit(&x, &mirrored).unwrap();
    assert!((procrustes.determinant() - 1.0).abs() < 1e-9);
}

#[test]
fn test_never_scales() {
    let x = points();
    let doubled = x.mapv(|v| v * 2.0);

    let aligned = procrustes_align(&x, &doubled).unwrap();
    assert!((spread(&aligned) - spread(&x)).abs() < 1e-4);
}

#[test]
fn test_transform_applies_to_other_sets() {
    let x = points();
    let y = rotate(&x, 0.8, 1.0, 2.0);
    let procrustes = Procrustes::fit(&x, &y).unwrap();

    let extra = array![[5.0f32, 5.0], [-3.0, 0.5]];
    assert_close(&procrustes.apply(&extra).unwrap(), &rotate(&extra, 0.8, 1.0, 2.0), 1e-4);
}

#[test]
fn test_shape_errors() {
    let x = points();
    let three_d = Array2::<f32>::zeros((5, 3));
    let short = Array2::<f32>::zeros((4, 2));
    let empty = Array2::<f32>::zeros((0, 2));

    assert!(procrustes_align(&three_d, &x).is_err());
    assert!(procrustes_align(&x, &three_d).is_err());
    assert!(procrustes_align(&x, &short).is_err());
    assert!(procrustes_align(&empty, &empty).is_err());
}

#[test]
fn test_svd2_reconstructs() {
    let cases = [
        [[1.0, 2.0], [3.0, 4.0]],
        [[0.0, -1.0], [1.0, 0.0]],
        [[2.0, 0.0], [0.0, -3.0]],
        [[-0.5, 1.5], [2.5, -4.0]],
        [[0.0, 0.0], [0.0, 0.0]],
    ];

    for m in cases {
        let (u, s, vt) = svd2(m);
        assert!(s[0] >= s[1] && s[1] >= 0.0);
        for i in 0..2 {
            for j in 0..2 {
                let r = u[i][0] * s[0] * vt[0][j] + u[i][1] * s[1] * vt[1][j];
                assert!((r - m[i][j]).abs() < 1e-9, "{:?} at ({}, {})", m, i, j);
            }
        }
    }
}

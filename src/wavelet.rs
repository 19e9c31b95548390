//! Pyramidal wavelet transform: the 1-D lifting step, the 2-D driver that
//! applies it level by level, the per-level quantizer, and the band
//! linearization that lays coefficients out for RLE.
//!
//! The 2-D driver applies the 1-D step directly to rows and then to
//! columns at each level, rather than transposing the matrix between row
//! and column passes — the same transform without the intermediate
//! transposed copies.

use crate::matrix::Matrix;

/// One Haar-like lifting step: pairs `(a[2i], a[2i+1])` become
/// `((a[2i]+a[2i+1])/2, (a[2i]-a[2i+1])/2)`, low-pass half first. An odd
/// leftover sample sits between the two halves untouched.
pub fn step_1d_forward(input: &[f32]) -> Vec<f32> {
    let n = input.len();
    let mut out = vec![0.0; n];
    let half = n / 2;
    for i in 0..half {
        out[i] = (input[2 * i] + input[2 * i + 1]) / 2.0;
        out[half + (n % 2) + i] = (input[2 * i] - input[2 * i + 1]) / 2.0;
    }
    if n % 2 == 1 {
        out[half] = input[n - 1];
    }
    out
}

/// Exact inverse of [`step_1d_forward`] in real arithmetic.
pub fn step_1d_inverse(input: &[f32]) -> Vec<f32> {
    let n = input.len();
    let mut out = vec![0.0; n];
    let half = n / 2;
    for i in 0..half {
        let lo = input[i];
        let hi = input[half + (n % 2) + i];
        out[2 * i] = lo + hi;
        out[2 * i + 1] = lo - hi;
    }
    if n % 2 == 1 {
        out[n - 1] = input[half];
    }
    out
}

/// The sequence of active-region sizes `(H_0,W_0), …, (H_D,W_D)` with
/// `H_D=W_D=1`, a pure function of the image dimensions. Both the forward
/// and inverse 2-D drivers derive it independently rather than threading it
/// through the bitstream — the inverse replays it in reverse, as spec'd,
/// without needing the encoder to have recorded anything extra.
pub fn level_sizes(height: usize, width: usize) -> Vec<(usize, usize)> {
    let mut sizes = Vec::new();
    let (mut h, mut w) = (height, width);
    loop {
        sizes.push((h, w));
        if h * w == 1 {
            break;
        }
        if w > 1 {
            w = w.div_ceil(2);
        }
        if h > 1 {
            h = h.div_ceil(2);
        }
    }
    sizes
}

fn apply_rows(image: &mut Matrix, h: usize, w: usize, step: fn(&[f32]) -> Vec<f32>) {
    for i in 0..h {
        let transformed = step(&image.t[i][0..w]);
        image.t[i][0..w].copy_from_slice(&transformed);
    }
}

fn apply_cols(image: &mut Matrix, h: usize, w: usize, step: fn(&[f32]) -> Vec<f32>) {
    for j in 0..w {
        let column: Vec<f32> = (0..h).map(|i| image.t[i][j]).collect();
        let transformed = step(&column);
        for i in 0..h {
            image.t[i][j] = transformed[i];
        }
    }
}

/// Forward 2-D transform, in place: at each level, rows then columns of the
/// active region are lifted, then the region shrinks by `ceil(/2)` in each
/// dimension that is still `>1`, until a single DC coefficient remains.
pub fn forward_2d(image: &mut Matrix) {
    let levels = level_sizes(image.height, image.width);
    for &(h, w) in &levels {
        if h * w == 1 {
            break;
        }
        log::debug!("wavelet forward: active region {}x{}", h, w);
        apply_rows(image, h, w, step_1d_forward);
        apply_cols(image, h, w, step_1d_forward);
    }
}

/// Inverse 2-D transform: replays `level_sizes` in reverse, applying the
/// inverse column step and then the inverse row step at each level —
/// undoing the forward sweep's row-then-column order.
pub fn inverse_2d(image: &mut Matrix) {
    let mut levels = level_sizes(image.height, image.width);
    levels.pop(); // the trailing (1,1) entry was never transformed
    for &(h, w) in levels.iter().rev() {
        log::debug!("wavelet inverse: active region {}x{}", h, w);
        apply_cols(image, h, w, step_1d_inverse);
        apply_rows(image, h, w, step_1d_inverse);
    }
}

/// Per-coefficient uniform scalar quantizer: higher (i+j) coefficients —
/// finer detail — are divided more aggressively as `quality` grows.
/// `quality → 0` approaches lossless.
pub fn quantize(image: &mut Matrix, quality: f32) {
    for i in 0..image.height {
        for j in 0..image.width {
            image.t[i][j] /= 1.0 + (i + j + 1) as f32 * quality / 100.0;
        }
    }
}

pub fn dequantize(image: &mut Matrix, quality: f32) {
    for i in 0..image.height {
        for j in 0..image.width {
            image.t[i][j] *= 1.0 + (i + j + 1) as f32 * quality / 100.0;
        }
    }
}

/// Lay coefficients out finest-band-first for RLE: at each level emit the
/// three high-frequency bands in row-major order, then shrink, ending with
/// the single DC coefficient at `(0,0)`.
pub fn linearize(image: &Matrix) -> Vec<f32> {
    let mut out = Vec::with_capacity(image.height * image.width);
    let (mut h, mut w) = (image.height, image.width);
    while (h, w) != (1, 1) {
        let (half_h, half_w) = (h.div_ceil(2), w.div_ceil(2));
        for j in 0..h {
            for i in 0..w {
                if j >= half_h || i >= half_w {
                    out.push(image.t[j][i]);
                }
            }
        }
        h = half_h;
        w = half_w;
    }
    out.push(image.t[0][0]);
    out
}

/// Inverse of [`linearize`]: fill coefficients back into a matrix of the
/// given dimensions in the identical traversal order.
pub fn delinearize(height: usize, width: usize, data: &[f32]) -> Matrix {
    let mut image = Matrix::new(height, width);
    let mut ptr = 0;
    let (mut h, mut w) = (height, width);
    while (h, w) != (1, 1) {
        let (half_h, half_w) = (h.div_ceil(2), w.div_ceil(2));
        for j in 0..h {
            for i in 0..w {
                if j >= half_h || i >= half_w {
                    image.t[j][i] = data[ptr];
                    ptr += 1;
                }
            }
        }
        h = half_h;
        w = half_w;
    }
    image.t[0][0] = data[ptr];
    image
}

//! A rectangular `f32` matrix, row-major, addressed `t[row][col]`.
//!
//! Owned by a single encode/decode session, mutated in place by the
//! wavelet transform and quantizer, and dropped at the end of the call —
//! the idiomatic replacement for the original's scoped
//! `allocation_matrice_float`/`liberation_matrice_float` pairs.

#[derive(Clone, Debug)]
pub struct Matrix {
    pub height: usize,
    pub width: usize,
    pub t: Vec<Vec<f32>>,
}

impl Matrix {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width, t: vec![vec![0.0; width]; height] }
    }

    pub fn from_rows(t: Vec<Vec<f32>>) -> Self {
        let height = t.len();
        let width = t.first().map_or(0, |r| r.len());
        Self { height, width, t }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_initialized() {
        let m = Matrix::new(3, 4);
        assert_eq!(m.height, 3);
        assert_eq!(m.width, 4);
        assert!(m.t.iter().all(|row| row.iter().all(|&v| v == 0.0)));
    }
}

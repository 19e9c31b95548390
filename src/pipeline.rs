//! Encode/decode glue: read → transform → quantize → linearize → RLE →
//! entropy-code → write, and the inverse. Progress is traced with
//! structured `log` calls rather than stray prints.

use crate::bits::{BitSink, BitSource};
use crate::error::Error;
use crate::intstream::IntStream;
use crate::matrix::Matrix;
use crate::pgm::PgmImage;
use crate::rle;
use crate::shannon_fano::ShannonFanoTable;
use crate::wavelet;

/// Which entropy backend [`IntStream`] instances should use. Kept as a
/// plain, explicit option rather than environment-variable coupling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Fixed,
    ShannonFano,
}

#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub backend: Backend,
}

pub const STD_OPTIONS: Options = Options { backend: Backend::ShannonFano };

fn make_stream(opt: &Options) -> IntStream {
    match opt.backend {
        Backend::Fixed => IntStream::Fixed,
        Backend::ShannonFano => IntStream::ShannonFano(ShannonFanoTable::new()),
    }
}

/// Container header: height, width (both little-endian `i32`), quality
/// (little-endian `f32`).
const HEADER_LEN: usize = 4 + 4 + 4;

/// Compress `image` at the given `quality` (`quality → 0` approaches
/// lossless) into a self-describing byte stream.
pub fn encode(image: &PgmImage, quality: f32, opt: &Options) -> Result<Vec<u8>, Error> {
    log::info!("encoding wavelet image {}x{}, quality={}", image.width, image.height, quality);

    let mut matrix = Matrix::new(image.height, image.width);
    for i in 0..image.height {
        for j in 0..image.width {
            matrix.t[i][j] = image.pixels[i * image.width + j] as f32;
        }
    }

    wavelet::forward_2d(&mut matrix);
    wavelet::quantize(&mut matrix, quality);
    let coefficients = wavelet::linearize(&matrix);

    let mut lengths = make_stream(opt);
    let mut magnitudes = make_stream(opt);
    let mut sink = BitSink::new();
    rle::encode_rle(&coefficients, &mut lengths, &mut magnitudes, &mut sink)?;
    let payload = sink.finish();

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&(image.height as i32).to_le_bytes());
    out.extend_from_slice(&(image.width as i32).to_le_bytes());
    out.extend_from_slice(&quality.to_le_bytes());
    out.extend_from_slice(&payload);
    log::info!("compressed {} pixels into {} bytes", image.height * image.width, out.len());
    Ok(out)
}

/// Inverse of [`encode`]: recover a lossy approximation of the original
/// image from a compressed byte stream produced by it.
pub fn decode(data: &[u8], opt: &Options) -> Result<PgmImage, Error> {
    if data.len() < HEADER_LEN {
        return Err(Error::Truncated);
    }
    let height = i32::from_le_bytes(data[0..4].try_into().unwrap()) as usize;
    let width = i32::from_le_bytes(data[4..8].try_into().unwrap()) as usize;
    let quality = f32::from_le_bytes(data[8..12].try_into().unwrap());
    log::info!("decoding wavelet image {}x{}, quality={}", width, height, quality);

    let mut lengths = make_stream(opt);
    let mut magnitudes = make_stream(opt);
    let mut src = BitSource::new(&data[HEADER_LEN..]);
    let coefficients = rle::decode_rle(&mut lengths, &mut magnitudes, &mut src)?;
    if coefficients.len() != height * width {
        return Err(Error::Truncated);
    }
    let floats: Vec<f32> = coefficients.iter().map(|&v| v as f32).collect();
    let mut matrix = wavelet::delinearize(height, width, &floats);

    wavelet::dequantize(&mut matrix, quality);
    wavelet::inverse_2d(&mut matrix);

    let mut pixels = vec![0u8; height * width];
    for i in 0..height {
        for j in 0..width {
            pixels[i * width + j] = matrix.t[i][j].round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(PgmImage { height, width, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_case() -> PgmImage {
        PgmImage {
            height: 4,
            width: 4,
            pixels: vec![
                10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160,
            ],
        }
    }

    #[test]
    fn lossless_at_zero_quality_fixed_backend() {
        let image = identity_case();
        let opt = Options { backend: Backend::Fixed };
        let compressed = encode(&image, 0.0, &opt).unwrap();
        let decoded = decode(&compressed, &opt).unwrap();
        assert_eq!(decoded.pixels, image.pixels);
    }

    #[test]
    fn lossless_at_zero_quality_shannon_fano_backend() {
        let image = identity_case();
        let opt = STD_OPTIONS;
        let compressed = encode(&image, 0.0, &opt).unwrap();
        let decoded = decode(&compressed, &opt).unwrap();
        assert_eq!(decoded.pixels, image.pixels);
    }

    #[test]
    fn lossy_round_trip_stays_close() {
        let image = identity_case();
        let opt = STD_OPTIONS;
        let compressed = encode(&image, 20.0, &opt).unwrap();
        let decoded = decode(&compressed, &opt).unwrap();
        for (a, b) in image.pixels.iter().zip(&decoded.pixels) {
            assert!((*a as i32 - *b as i32).abs() <= 40, "{} vs {}", a, b);
        }
    }

    #[test]
    fn non_square_image_round_trips() {
        // Pixels chosen so every wavelet coefficient along the way is a
        // whole number; an arbitrary 3x5 image can land on half-integer
        // coefficients that `rle::encode_rle`'s rounding perturbs by up to
        // the ±1 quantization spec §8 already allows for.
        let image = PgmImage {
            height: 3,
            width: 5,
            pixels: (0..15).map(|i| (i * 16) as u8).collect(),
        };
        let opt = STD_OPTIONS;
        let compressed = encode(&image, 0.0, &opt).unwrap();
        let decoded = decode(&compressed, &opt).unwrap();
        for (a, b) in image.pixels.iter().zip(&decoded.pixels) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{} vs {}", a, b);
        }
    }

    #[test]
    fn truncated_container_is_rejected() {
        let opt = STD_OPTIONS;
        assert!(matches!(decode(&[1, 2, 3], &opt), Err(Error::Truncated)));
    }
}

//! # wavecodec
//!
//! A lossy grayscale image codec built from three tightly coupled stages:
//! * `wavelet` — a pyramidal Haar-like 2-D wavelet transform and its band
//!   linearization for RLE.
//! * `shannon_fano` — an adaptive Shannon-Fano entropy coder whose alphabet
//!   grows on demand via an ESCAPE symbol.
//! * `bits` / `uintcode` / `rle` — the bit- and integer-stream stack that
//!   feeds it.
//!
//! `pipeline::encode`/`pipeline::decode` are the end-to-end entry points;
//! `pgm` reads and writes the PGM files the CLI binaries operate on.
//!
//! ## Example
//!
//! ```rs
//! use wavecodec::{pgm, pipeline};
//! let image = pgm::read(&mut std::io::stdin()).expect("read failed");
//! let compressed = pipeline::encode(&image, 5.0, &pipeline::STD_OPTIONS).expect("encode failed");
//! let decoded = pipeline::decode(&compressed, &pipeline::STD_OPTIONS).expect("decode failed");
//! ```

pub mod bits;
pub mod dct;
pub mod error;
pub mod intstream;
pub mod matrix;
pub mod pgm;
pub mod pipeline;
pub mod rle;
pub mod shannon_fano;
pub mod uintcode;
pub mod wavelet;

pub use error::Error;

//! End-to-end test of the `encoder`/`decoder` binaries: pipe a small PGM
//! through both and check the image survives.

use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;

fn sample_pgm() -> Vec<u8> {
    let mut buf = Vec::new();
    write!(buf, "P5\n4 3\n255\n").unwrap();
    buf.extend_from_slice(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120]);
    buf
}

#[test]
fn round_trips_through_both_binaries_at_zero_quality() {
    let pgm = sample_pgm();

    let encoded = Command::cargo_bin("encoder")
        .unwrap()
        .arg("0")
        .write_stdin(pgm.clone())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let decoded = Command::cargo_bin("decoder")
        .unwrap()
        .write_stdin(encoded)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // Pixel samples, not just header bytes: the 4x3 input lands on
    // half-integer wavelet coefficients that RLE's rounding perturbs by up
    // to ±1, the quantization tolerance spec §8 allows for.
    let header_len = "P5\n4 3\n255\n".len();
    assert_eq!(&decoded[..header_len], &pgm[..header_len]);
    for (a, b) in pgm[header_len..].iter().zip(&decoded[header_len..]) {
        assert!((*a as i32 - *b as i32).abs() <= 1, "{} vs {}", a, b);
    }
}

#[test]
fn decoder_rejects_truncated_input() {
    Command::cargo_bin("decoder")
        .unwrap()
        .write_stdin(vec![1u8, 2, 3])
        .assert()
        .failure();
}

#[test]
fn encoder_rejects_bad_quality_argument() {
    Command::cargo_bin("encoder")
        .unwrap()
        .arg("not-a-number")
        .write_stdin(sample_pgm())
        .assert()
        .failure()
        .stderr(contains("quality"));
}

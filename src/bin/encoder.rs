//! `encoder` — reads a PGM image on standard input, writes the compressed
//! bitstream on standard output. Takes the quality as its first positional
//! argument.

use clap::{arg, crate_version, Command};
use std::io::{self, Write};
use wavecodec::error::STDRESULT;
use wavecodec::{pgm, pipeline};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("encoder: {}", e);
        std::process::exit(1);
    }
}

fn run() -> STDRESULT {
    let cmd = Command::new("encoder")
        .about("Compress a PGM image into a wavelet-coded bitstream")
        .version(crate_version!())
        .arg(arg!(<QUALITY> "quantization quality, 0 is near-lossless"));
    let matches = cmd.get_matches();

    let quality: f32 = matches
        .get_one::<String>("QUALITY")
        .expect("required")
        .parse()
        .map_err(|_| "quality must be a float")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let image = pgm::read(&mut input)?;

    let compressed = pipeline::encode(&image, quality, &pipeline::STD_OPTIONS)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    output.write_all(&compressed)?;
    Ok(())
}

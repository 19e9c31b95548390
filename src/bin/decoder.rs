//! `decoder` — reads a compressed wavelet bitstream on standard input,
//! writes the reconstructed PGM image on standard output.

use clap::{crate_version, Command};
use std::io::{self, Read, Write};
use wavecodec::error::STDRESULT;
use wavecodec::{pgm, pipeline};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("decoder: {}", e);
        std::process::exit(1);
    }
}

fn run() -> STDRESULT {
    let _matches = Command::new("decoder")
        .about("Expand a wavelet-coded bitstream back into a PGM image")
        .version(crate_version!())
        .get_matches();

    let mut data = Vec::new();
    io::stdin().lock().read_to_end(&mut data)?;

    let image = pipeline::decode(&data, &pipeline::STD_OPTIONS)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    pgm::write(&mut output, &image)?;
    Ok(())
}

//! Binary PGM (P5) reader/writer, kept at the edge of the codec rather than
//! the core. Only 8-bit, single `255` maxval, binary P5 is supported; `#`
//! comment lines are tolerated anywhere in the header.

use crate::error::Error;
use std::io::{Read, Write};

pub struct PgmImage {
    pub height: usize,
    pub width: usize,
    pub pixels: Vec<u8>, // row-major, one byte per sample
}

/// Read whitespace-delimited header tokens, skipping `#` comments, until
/// `count` tokens have been collected. A comment runs to end of line.
fn read_header_tokens<R: Read>(r: &mut R, count: usize) -> Result<Vec<String>, Error> {
    let mut tokens = Vec::with_capacity(count);
    let mut current = String::new();
    let mut in_comment = false;
    let mut byte = [0u8; 1];
    loop {
        if r.read(&mut byte)? == 0 {
            return Err(Error::Truncated);
        }
        let c = byte[0] as char;
        if in_comment {
            if c == '\n' {
                in_comment = false;
            }
            continue;
        }
        if c == '#' && current.is_empty() {
            in_comment = true;
            continue;
        }
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
                if tokens.len() == count {
                    return Ok(tokens);
                }
            }
        } else {
            current.push(c);
        }
    }
}

pub fn read<R: Read>(r: &mut R) -> Result<PgmImage, Error> {
    let header = read_header_tokens(r, 4)?;
    if header[0] != "P5" {
        return Err(Error::InputFormat(format!("unsupported PGM magic: {}", header[0])));
    }
    let width: usize = header[1]
        .parse()
        .map_err(|_| Error::InputFormat(format!("bad width: {}", header[1])))?;
    let height: usize = header[2]
        .parse()
        .map_err(|_| Error::InputFormat(format!("bad height: {}", header[2])))?;
    let maxval: u32 = header[3]
        .parse()
        .map_err(|_| Error::InputFormat(format!("bad maxval: {}", header[3])))?;
    if maxval != 255 {
        return Err(Error::InputFormat(format!("unsupported PGM maxval: {}", maxval)));
    }
    log::debug!("pgm: reading {}x{} image", width, height);
    let mut pixels = vec![0u8; height * width];
    r.read_exact(&mut pixels).map_err(|_| Error::Truncated)?;
    Ok(PgmImage { height, width, pixels })
}

pub fn write<W: Write>(w: &mut W, image: &PgmImage) -> Result<(), Error> {
    log::debug!("pgm: writing {}x{} image", image.width, image.height);
    write!(w, "P5\n{} {}\n255\n", image.width, image.height)?;
    w.write_all(&image.pixels)?;
    Ok(())
}

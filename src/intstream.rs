//! `IntStream`: a polymorphic capability for writing/reading unsigned and
//! signed integers, backed by either the fixed prefix code ([`uintcode`])
//! or an adaptive [`ShannonFanoTable`]. A tagged variant, per the design
//! note favoring that over an inheritance-style trait object.

use crate::bits::{BitSink, BitSource};
use crate::error::Error;
use crate::shannon_fano::ShannonFanoTable;
use crate::uintcode;

pub enum IntStream {
    Fixed,
    ShannonFano(ShannonFanoTable),
}

impl IntStream {
    pub fn put_uint(&mut self, sink: &mut BitSink, v: u32) -> Result<(), Error> {
        match self {
            IntStream::Fixed => uintcode::encode_uint(sink, v),
            IntStream::ShannonFano(table) => table.encode(sink, v as i32),
        }
    }

    pub fn get_uint(&mut self, src: &mut BitSource) -> Result<u32, Error> {
        match self {
            IntStream::Fixed => Ok(uintcode::decode_uint(src)),
            IntStream::ShannonFano(table) => Ok(table.decode(src)? as u32),
        }
    }

    pub fn put_sint(&mut self, sink: &mut BitSink, v: i32) -> Result<(), Error> {
        match self {
            IntStream::Fixed => uintcode::encode_sint(sink, v),
            IntStream::ShannonFano(table) => table.encode(sink, v),
        }
    }

    pub fn get_sint(&mut self, src: &mut BitSource) -> Result<i32, Error> {
        match self {
            IntStream::Fixed => Ok(uintcode::decode_sint(src)),
            IntStream::ShannonFano(table) => table.decode(src),
        }
    }
}

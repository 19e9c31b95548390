//! Adaptive Shannon-Fano entropy coding.
//!
//! The table never transmits its own shape: an `ESCAPE` sentinel lets the
//! decoder learn new symbols as they are first seen, and every subsequent
//! occurrence of a symbol is coded against a table both sides update
//! identically.

use crate::bits::{BitSink, BitSource};
use crate::error::Error;

/// Reserved sentinel: "the next 32 bits are a literal value to learn."
pub const ESCAPE: i32 = 0x7FFF_FFFF;

/// Bounds the growable alphabet table rather than sizing a fixed
/// allocation.
pub const DEFAULT_TABLE_CAP: usize = 200_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub value: i32,
    pub occurrences: u32,
}

/// Ordered non-increasing by `occurrences`, with exactly one `ESCAPE` entry
/// at all times. Encoder and decoder tables evolve in lockstep; this
/// equivalence is the correctness condition of the whole entropy stage.
pub struct ShannonFanoTable {
    events: Vec<Event>,
    cap: usize,
}

impl Default for ShannonFanoTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ShannonFanoTable {
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_TABLE_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self { events: vec![Event { value: ESCAPE, occurrences: 1 }], cap }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Linear scan for `value`; if absent, returns the position of `ESCAPE`.
    fn find_position(&self, value: i32) -> usize {
        let mut escape_pos = 0;
        for (i, e) in self.events.iter().enumerate() {
            if e.value == ESCAPE {
                escape_pos = i;
            }
            if e.value == value {
                return i;
            }
        }
        escape_pos
    }

    /// Within `[lo, hi]`, the index `s` whose prefix sum of occurrences
    /// most nearly halves the window's total weight. Ties favor the
    /// smallest `s`. `None` for a single-element window.
    fn find_separation(&self, lo: usize, hi: usize) -> Option<usize> {
        if lo == hi {
            return None;
        }
        let mut remaining: i64 =
            self.events[lo..=hi].iter().map(|e| e.occurrences as i64).sum();
        let mut left_sum: i64 = 0;
        let mut min = remaining;
        let mut index = None;
        for i in lo..=hi {
            let occ = self.events[i].occurrences as i64;
            remaining -= occ;
            left_sum += occ;
            let diff = (left_sum - remaining).abs();
            if diff < min {
                min = diff;
                index = Some(i);
            }
        }
        index
    }

    fn encode_position(&self, sink: &mut BitSink, position: usize) {
        let mut lo = 0;
        let mut hi = self.events.len() - 1;
        while lo != hi {
            let s = self.find_separation(lo, hi).expect("lo != hi implies a separation exists");
            if position > s {
                sink.put_bit(true);
                lo = s + 1;
            } else {
                sink.put_bit(false);
                hi = s;
            }
        }
    }

    fn decode_position(&self, src: &mut BitSource) -> usize {
        let mut lo = 0;
        let mut hi = self.events.len() - 1;
        while lo != hi {
            let s = self.find_separation(lo, hi).expect("lo != hi implies a separation exists");
            if src.get_bit() {
                lo = s + 1;
            } else {
                hi = s;
            }
        }
        lo
    }

    /// Increment occurrence count at `position`, then restore the
    /// non-increasing sort by swapping with the first strictly-smaller
    /// predecessor, if any.
    fn increment_and_reorder(&mut self, position: usize) {
        self.events[position].occurrences += 1;
        let occ = self.events[position].occurrences;
        if let Some(q) = (0..position).find(|&i| self.events[i].occurrences < occ) {
            self.events.swap(position, q);
        }
    }

    /// Encode `value`, learning it via `ESCAPE` if this is its first
    /// occurrence.
    pub fn encode(&mut self, sink: &mut BitSink, value: i32) -> Result<(), Error> {
        let p = self.find_position(value);
        self.encode_position(sink, p);
        let mut pos = p;
        if self.events[p].value == ESCAPE {
            if self.events.len() >= self.cap {
                return Err(Error::TableOverflow);
            }
            self.events.push(Event { value, occurrences: 0 });
            pos = self.events.len() - 1;
            sink.put_bits(32, value as u32);
        }
        self.increment_and_reorder(pos);
        Ok(())
    }

    /// Decode a value written by [`encode`](Self::encode).
    ///
    /// When the table holds only `ESCAPE` (the very first symbol of a
    /// session), `decode_position` already returns position `0` without
    /// reading any bits — the single-element window never enters its loop —
    /// so the first symbol needs no special case here and the decoder's
    /// table stays bit-identical to the encoder's.
    pub fn decode(&mut self, src: &mut BitSource) -> Result<i32, Error> {
        let p = self.decode_position(src);
        let mut pos = p;
        let value;
        if self.events[p].value == ESCAPE {
            value = src.get_bits(32) as i32;
            if self.events.len() >= self.cap {
                return Err(Error::TableOverflow);
            }
            self.events.push(Event { value, occurrences: 0 });
            pos = self.events.len() - 1;
        } else {
            value = self.events[p].value;
        }
        self.increment_and_reorder(pos);
        Ok(value)
    }

    /// `true` iff the table is sorted non-increasing and holds exactly one
    /// `ESCAPE` entry — the invariant that must hold after every symbol.
    #[cfg(test)]
    fn is_well_formed(&self) -> bool {
        let sorted = self.events.windows(2).all(|w| w[0].occurrences >= w[1].occurrences);
        let escapes = self.events.iter().filter(|e| e.value == ESCAPE).count();
        sorted && escapes == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_symbol_round_trips() {
        let mut enc = ShannonFanoTable::new();
        let mut sink = BitSink::new();
        enc.encode(&mut sink, 42).unwrap();
        assert_eq!(sink.len_bits(), 32); // zero position bits, then 32 raw bits
        let bytes = sink.finish();

        let mut dec = ShannonFanoTable::new();
        let mut src = BitSource::new(&bytes);
        assert_eq!(dec.decode(&mut src).unwrap(), 42);

        for t in [&enc, &dec] {
            assert!(t.is_well_formed());
            let occ = |v: i32| t.events().iter().find(|e| e.value == v).unwrap().occurrences;
            assert_eq!(occ(42), 1);
            assert_eq!(occ(ESCAPE), 1);
        }
    }

    #[test]
    fn adaptive_sequence_round_trips() {
        let sequence = [7, 7, 7, 3, 7, 3, 3];
        let mut enc = ShannonFanoTable::new();
        let mut sink = BitSink::new();
        for &v in &sequence {
            enc.encode(&mut sink, v).unwrap();
            assert!(enc.is_well_formed());
        }
        let occ = |t: &ShannonFanoTable, v: i32| {
            t.events().iter().find(|e| e.value == v).unwrap().occurrences
        };
        assert_eq!(occ(&enc, 7), 4);
        assert_eq!(occ(&enc, 3), 3);
        assert_eq!(occ(&enc, ESCAPE), 1);

        let bytes = sink.finish();
        let mut dec = ShannonFanoTable::new();
        let mut src = BitSource::new(&bytes);
        let mut decoded = Vec::new();
        for _ in &sequence {
            decoded.push(dec.decode(&mut src).unwrap());
            assert!(dec.is_well_formed());
        }
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn longer_sequence_stays_synchronized() {
        let sequence: Vec<i32> = (0..500).map(|i| (i * 37) % 23 - 11).collect();
        let mut enc = ShannonFanoTable::new();
        let mut sink = BitSink::new();
        for &v in &sequence {
            enc.encode(&mut sink, v).unwrap();
        }
        let bytes = sink.finish();
        let mut dec = ShannonFanoTable::new();
        let mut src = BitSource::new(&bytes);
        let decoded: Vec<i32> =
            sequence.iter().map(|_| dec.decode(&mut src).unwrap()).collect();
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn table_overflow_is_reported() {
        let mut enc = ShannonFanoTable::with_cap(3);
        let mut sink = BitSink::new();
        enc.encode(&mut sink, 1).unwrap();
        enc.encode(&mut sink, 2).unwrap();
        assert!(enc.encode(&mut sink, 3).is_err());
    }
}

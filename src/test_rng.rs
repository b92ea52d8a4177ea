//! Bit-stream doubles for unit tests.

use rand::RngCore;

/// Wraps a generator and counts 64-bit draws.
pub(crate) struct Counting<R> {
    pub inner: R,
    pub draws: usize,
}

impl<R: RngCore> RngCore for Counting<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dst)
    }
}

/// Replays a fixed list of 64-bit values.
pub(crate) struct Scripted {
    pub values: Vec<u64>,
    pub pos: usize,
}

impl Scripted {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.values[self.pos];
        self.pos += 1;
        v
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for b in dst.iter_mut() {
            *b = self.next_u64() as u8;
        }
    }
}

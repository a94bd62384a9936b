//! Fixed-output random sources for driving the pest roll in tests.

use rand::RngCore;

/// Yields all-zero bits, every probability roll succeeds.
#[derive(Debug)]
pub(crate) struct Always;

/// Yields all-one bits, every probability roll below `1.0` fails.
#[derive(Debug)]
pub(crate) struct Never;

impl RngCore for Always {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

impl RngCore for Never {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(u8::MAX);
    }
}

/// Wraps another source and counts how many times it was drawn from.
#[derive(Debug)]
pub(crate) struct Counting<R> {
    inner: R,
    pub(crate) draws: usize,
}

impl<R> Counting<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }
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
        self.inner.fill_bytes(dst);
    }
}

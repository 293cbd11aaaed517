use crate::compat::Vec;

/// Sink for serialized bytes.
/// Measuring and writing run the same serializer against different outputs,
/// so the write phase always produces exactly the measured length.
pub trait Output {
    fn put(&mut self, bytes: &[u8]);
}

/// Counts bytes without storing them (probe mode)
#[derive(Debug, Default)]
pub struct Counter(usize);

impl Counter {
    pub fn total(&self) -> usize {
        self.0
    }
}

impl Output for Counter {
    fn put(&mut self, bytes: &[u8]) {
        self.0 += bytes.len();
    }
}

/// Writes into a caller buffer already checked to hold the output plus a NUL
#[derive(Debug)]
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Write the NUL terminator and return the length before it
    pub fn terminate(self) -> usize {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
        self.pos
    }
}

impl Output for SliceWriter<'_> {
    fn put(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        if let Some(dst) = self.buf.get_mut(self.pos..end) {
            dst.copy_from_slice(bytes);
            self.pos = end;
        }
    }
}

impl Output for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

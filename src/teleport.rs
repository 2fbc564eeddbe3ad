//! Input staging buffer ("memory teleport").
//!
//! Stitches caller-supplied byte ranges, delivered one chunk per call to the
//! public streaming API, into the fixed-size contiguous read windows the
//! kernel state machines need (an 8-byte signature, a variable-length block
//! body, or a verbatim tail). See `kernel::chameleon` / `kernel::swift` for
//! the only callers.
//!
//! Shaped after `Lz4FDCtx`'s `tmp_in` / `tmp_in_size` / `tmp_in_target`
//! staging fields and the `GetFrameHeader` / `StoreFrameHeader` stage pair in
//! `frame/decompress.rs`: when enough bytes are already present in the
//! caller's current chunk, read directly from it; otherwise merge the
//! undrained remainder of a previous chunk ("carry") with the head of the
//! new one into an owned scratch buffer.
//!
//! Never holds a borrow past the end of the call that supplied it — `carry`
//! is the only state that survives a suspension, and it is always owned.

/// A contiguous `n`-byte read window, the result of [`Teleport::read`].
///
/// `Direct` borrows straight from the caller's current chunk (no copy).
/// `Staged` borrows from the teleport's internal scratch buffer, used when
/// the window straddles a previous chunk's undrained remainder and the
/// current one.
pub enum Window<'a> {
    Direct(&'a [u8]),
    Staged(&'a [u8]),
}

impl<'a> Window<'a> {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Window::Direct(s) => s,
            Window::Staged(s) => s,
        }
    }
}

/// Input staging state that survives a suspension point.
///
/// `carry` holds bytes supplied in a previous call that were not yet
/// consumed by the kernel. It is always drained before any byte of the
/// current call's chunk is used, preserving FIFO order across the whole
/// stream.
#[derive(Debug, Default, Clone)]
pub struct Teleport {
    carry: Vec<u8>,
    scratch: Vec<u8>,
    pending_from_carry: usize,
}

impl Teleport {
    pub fn new() -> Self {
        Self {
            carry: Vec::new(),
            scratch: Vec::new(),
            pending_from_carry: 0,
        }
    }

    /// Total buffered bytes: undrained carry plus whatever of `direct`
    /// hasn't been consumed yet this call.
    pub fn available(&self, direct: &[u8]) -> u64 {
        (self.carry.len() + direct.len()) as u64
    }

    /// Request a contiguous `n`-byte window.
    ///
    /// On success, the window is a *peek*: call [`Teleport::cursor_advance`]
    /// with the same `n` to commit the consumption. On failure (fewer than
    /// `n` bytes available), the remainder of `direct` is folded into
    /// `carry` so no byte is lost, `direct` is left empty, and `None` is
    /// returned — the caller surfaces `STALL_ON_INPUT`.
    pub fn read<'x>(&'x mut self, direct: &mut &'x [u8], n: usize) -> Option<Window<'x>> {
        let total = self.carry.len() + direct.len();
        if total < n {
            self.carry.extend_from_slice(direct);
            *direct = &[];
            return None;
        }

        if self.carry.is_empty() {
            self.pending_from_carry = 0;
            return Some(Window::Direct(&direct[..n]));
        }

        if self.carry.len() >= n {
            self.pending_from_carry = n;
            return Some(Window::Staged(&self.carry[..n]));
        }

        let from_carry = self.carry.len();
        let from_direct = n - from_carry;
        self.scratch.clear();
        self.scratch.extend_from_slice(&self.carry);
        self.scratch.extend_from_slice(&direct[..from_direct]);
        self.pending_from_carry = from_carry;
        Some(Window::Staged(&self.scratch[..n]))
    }

    /// Commit consumption of the last window returned by [`Teleport::read`].
    /// `n` must equal the length of that window.
    pub fn cursor_advance(&mut self, direct: &mut &[u8], n: usize) {
        let from_carry = self.pending_from_carry.min(n);
        if from_carry > 0 {
            self.carry.drain(..from_carry);
        }
        let from_direct = n - from_carry;
        *direct = &direct[from_direct..];
        self.pending_from_carry = self.pending_from_carry.saturating_sub(n);
    }

    /// Read-and-commit `out.len()` bytes in one step (used for the verbatim
    /// tail copy at flush). Returns `false` without touching `out` if fewer
    /// than `out.len()` bytes are available.
    pub fn copy(&mut self, direct: &mut &[u8], out: &mut [u8]) -> bool {
        let n = out.len();
        let window = match self.read(direct, n) {
            Some(w) => w,
            None => return false,
        };
        out.copy_from_slice(window.as_bytes());
        self.cursor_advance(direct, n);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_fast_path_when_carry_empty() {
        let mut tp = Teleport::new();
        let data = [1u8, 2, 3, 4, 5];
        let mut direct = &data[..];
        match tp.read(&mut direct, 3).unwrap() {
            Window::Direct(s) => assert_eq!(s, &[1, 2, 3]),
            Window::Staged(_) => panic!("expected direct window"),
        }
        tp.cursor_advance(&mut direct, 3);
        assert_eq!(direct, &[4, 5]);
    }

    #[test]
    fn stalls_and_preserves_bytes_on_insufficient_input() {
        let mut tp = Teleport::new();
        let data = [1u8, 2, 3];
        let mut direct = &data[..];
        assert!(tp.read(&mut direct, 8).is_none());
        assert_eq!(direct.len(), 0);
        assert_eq!(tp.available(&[]), 3);

        let more = [4u8, 5, 6, 7, 8, 9];
        let mut direct2 = &more[..];
        let window = tp.read(&mut direct2, 8).unwrap();
        assert_eq!(window.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        tp.cursor_advance(&mut direct2, 8);
        assert_eq!(direct2, &[9]);
    }

    #[test]
    fn fifo_order_across_many_small_chunks() {
        let mut tp = Teleport::new();
        let mut collected = Vec::new();
        let whole: Vec<u8> = (0u8..=255).collect();
        for chunk in whole.chunks(3) {
            let mut direct = chunk;
            loop {
                match tp.read(&mut direct, 5) {
                    Some(w) => {
                        collected.extend_from_slice(w.as_bytes());
                        tp.cursor_advance(&mut direct, 5);
                    }
                    None => break,
                }
            }
        }
        // Drain whatever remains in carry at the "end of stream".
        while tp.available(&[]) > 0 {
            let mut empty: &[u8] = &[];
            let n = tp.available(&[]).min(5) as usize;
            let window = tp.read(&mut empty, n).unwrap();
            collected.extend_from_slice(window.as_bytes());
            tp.cursor_advance(&mut empty, n);
        }
        assert_eq!(collected, whole);
    }
}

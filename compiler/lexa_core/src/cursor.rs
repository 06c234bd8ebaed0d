//! Bounds-checked cursor over a sentinel-terminated buffer.
//!
//! The cursor walks the content byte-by-byte. One position past the content
//! holds the sentinel (`0x00`): reading it is how the lexer detects end of
//! input, and consuming it is how the final `EndOfInput` token gets its
//! single byte of length. Moving beyond the sentinel is a caller bug and is
//! checked with debug assertions, never reported as a lexical error.
//!
//! # Interior Null Bytes
//!
//! The content may itself contain `0x00`. The cursor tells the two apart by
//! position: a null at `pos < source_len` is interior content, the null at
//! `pos == source_len` is the sentinel.

/// Byte value stored one past the content.
pub const SENTINEL: u8 = 0x00;

/// Read cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor), or
/// with [`Cursor::from_sentinel_bytes`] over a buffer the caller already
/// terminated.
/// The cursor is [`Copy`], so consumers can snapshot a position and restore
/// it when a run has to end before a malformed sequence.
///
/// # Invariant
///
/// `buf.len() == source_len + 1` and `buf[source_len] == 0x00`, guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction. `pos` stays within
/// `0..=source_len + 1`; it only reaches `source_len + 1` by consuming the
/// sentinel.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Content followed by exactly one sentinel byte.
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the content (excludes the sentinel).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be the sentinel and the last byte of `buf`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert_eq!(
            buf.len(),
            source_len as usize + 1,
            "buffer must hold the content plus exactly one sentinel"
        );
        debug_assert!(
            buf[source_len as usize] == SENTINEL,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Borrow a caller-built buffer whose last byte is the sentinel.
    ///
    /// Returns `None` if `buf` is empty, does not end in `0x00`, or holds
    /// more content than [`SourceBuffer::MAX_LEN`](crate::SourceBuffer::MAX_LEN).
    /// No copy is made and no encoding scan runs.
    pub fn from_sentinel_bytes(buf: &'a [u8]) -> Option<Self> {
        let (&last, content) = buf.split_last()?;
        if last != SENTINEL {
            return None;
        }
        let source_len = u32::try_from(content.len())
            .ok()
            .filter(|&len| len <= crate::SourceBuffer::MAX_LEN)?;
        Some(Self::new(buf, source_len))
    }

    /// Returns the byte at the current position.
    ///
    /// At `pos == source_len` this is the sentinel.
    #[inline]
    pub fn current(&self) -> u8 {
        debug_assert!(
            self.can_advance_sentinel(),
            "reading past the sentinel at {}",
            self.pos
        );
        self.buf[self.pos as usize]
    }

    /// Returns the byte `k` positions ahead of current.
    ///
    /// `pos + k` may reach the sentinel but not go beyond it. A release build
    /// answers the sentinel for out-of-range peeks instead of panicking.
    #[inline]
    pub fn peek_ahead(&self, k: u32) -> u8 {
        let idx = self.pos as usize + k as usize;
        debug_assert!(
            idx <= self.source_len as usize,
            "peek {k} from {} reaches past the sentinel",
            self.pos
        );
        self.buf.get(idx).copied().unwrap_or(SENTINEL)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_ahead(1)
    }

    /// Returns `true` while the cursor is inside the content.
    #[inline]
    pub fn can_advance(&self) -> bool {
        self.pos < self.source_len
    }

    /// Returns `true` while the cursor is inside the content or on the
    /// sentinel, which may be consumed exactly once.
    #[inline]
    pub fn can_advance_sentinel(&self) -> bool {
        self.pos <= self.source_len
    }

    /// Advance the cursor by one byte.
    ///
    /// Advancing onto the sentinel and consuming it are both normal. Advancing
    /// once the sentinel has been consumed is a contract violation.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(
            self.can_advance_sentinel(),
            "advance past the sentinel at {}",
            self.pos
        );
        self.pos += 1;
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel ends the loop. All the
    /// category predicates in [`classify`](crate::classify) satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        debug_assert!(!pred(SENTINEL), "predicate must reject the sentinel");
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns `true` when the cursor sits on the sentinel itself.
    #[inline]
    pub fn is_at_sentinel(&self) -> bool {
        self.pos == self.source_len
    }

    /// Returns `true` once the sentinel has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos > self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes the sentinel).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Bytes of `start..end`, which may include the sentinel.
    pub fn bytes(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }
}

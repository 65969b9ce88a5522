use std::ops::Range;

/// Applies replacements found in a snapshot to a string that is being
/// rewritten in place.
///
/// Match ranges are reported against the snapshot a pass scanned. Every
/// replacement shifts everything after it, so the rewriter keeps the running
/// signed delta and adds it to each later range. Replacements must arrive in
/// left-to-right order and must not overlap.
pub struct Rewriter<'a> {
    target: &'a mut String,
    offset: isize,
    replaced: usize,
}

impl<'a> Rewriter<'a> {
    pub fn new(target: &'a mut String) -> Self {
        Self {
            target,
            offset: 0,
            replaced: 0,
        }
    }

    /// Replaces the snapshot range `range` with `replacement`.
    pub fn replace(&mut self, range: Range<usize>, replacement: &str) {
        let start = range
            .start
            .checked_add_signed(self.offset)
            .expect("replacement ranges arrive left to right without overlap");
        let end = start + range.len();
        self.target.replace_range(start..end, replacement);
        self.offset += replacement.len() as isize - range.len() as isize;
        self.replaced += 1;
    }

    /// Signed length difference between the target and the snapshot so far.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Number of replacements performed.
    pub fn replaced(&self) -> usize {
        self.replaced
    }
}

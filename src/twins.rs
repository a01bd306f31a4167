//! Two stacks sharing one buffer: "small" grows from the bottom, "large"
//! from the top. Used by both builders as Vose's worklist.

/// A weight still waiting to be placed, with the outcome it belongs to.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Piece<W> {
    pub mass: W,
    pub outcome: u32,
}

#[derive(Debug)]
pub(crate) struct TwinStacks<W> {
    buf: Vec<Piece<W>>,
    // number of small pieces; they live in buf[..small]
    small: usize,
    // first large piece; they live in buf[large..]
    large: usize,
}

impl<W: Copy + Default> TwinStacks<W> {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            buf: vec![Piece::default(); n],
            small: 0,
            large: n,
        }
    }

    #[inline]
    pub fn push_small(&mut self, piece: Piece<W>) {
        assert!(self.small < self.large, "internal error: twin stacks collided");
        self.buf[self.small] = piece;
        self.small += 1;
    }

    #[inline]
    pub fn push_large(&mut self, piece: Piece<W>) {
        assert!(self.small < self.large, "internal error: twin stacks collided");
        self.large -= 1;
        self.buf[self.large] = piece;
    }

    /// Pops one small and one large piece together, or nothing if either
    /// stack is empty.
    #[inline]
    pub fn pop_pair(&mut self) -> Option<(Piece<W>, Piece<W>)> {
        if self.small == 0 || self.large == self.buf.len() {
            return None;
        }
        self.small -= 1;
        let l = self.buf[self.small];
        let g = self.buf[self.large];
        self.large += 1;
        Some((l, g))
    }

    /// True once every slot of the buffer has been pushed.
    pub fn is_full(&self) -> bool {
        self.small == self.large
    }

    pub fn smalls(&self) -> &[Piece<W>] {
        &self.buf[..self.small]
    }

    pub fn larges(&self) -> &[Piece<W>] {
        &self.buf[self.large..]
    }
}

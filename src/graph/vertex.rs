/// ID for vertices, which are essentially `usize`.
///
/// IDs are handed out densely in the order vertices are first seen,
/// so they double as indices into per-vertex storage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

/// A factory to generate `VertexId` uniquely.
#[derive(Clone, Default)]
pub struct VertexIdFactory(usize);

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }

    /// How many IDs have been handed out so far.
    pub fn issued(&self) -> usize {
        self.0
    }
}

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

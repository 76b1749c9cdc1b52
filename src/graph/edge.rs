/// An outgoing edge as stored in an adjacency list.
///
/// The source is implied by the list holding the edge.
/// Bare and weighted edges may share one list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edge<V, W> {
    /// An edge naming only its destination.
    Unweighted(V),
    /// An edge carrying its destination and a weight.
    Weighted(V, W),
}

impl<V, W> Edge<V, W> {
    /// Builds a bare edge when `weight` is `None`, otherwise a weighted one.
    pub fn new(destination: V, weight: Option<W>) -> Self {
        match weight {
            None => Edge::Unweighted(destination),
            Some(w) => Edge::Weighted(destination, w),
        }
    }

    /// The vertex this edge points to.
    pub fn destination(&self) -> &V {
        match self {
            Edge::Unweighted(v) | Edge::Weighted(v, _) => v,
        }
    }

    pub fn weight(&self) -> Option<&W> {
        match self {
            Edge::Unweighted(_) => None,
            Edge::Weighted(_, w) => Some(w),
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, Edge::Weighted(..))
    }

    /// Whether this edge points to `v`, whatever its weight.
    pub fn points_to(&self, v: &V) -> bool
    where
        V: PartialEq,
    {
        self.destination() == v
    }

    /// The edge going back to `source` with the same weight policy.
    pub fn mirrored(&self, source: V) -> Self
    where
        W: Clone,
    {
        Edge::new(source, self.weight().cloned())
    }
}

impl<V, W> std::fmt::Display for Edge<V, W>
where
    V: std::fmt::Debug,
    W: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Unweighted(v) => write!(f, "{:?}", v),
            Edge::Weighted(v, w) => write!(f, "({:?}, {:?})", v, w),
        }
    }
}

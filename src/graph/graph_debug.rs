use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Each vertex takes one line, followed by one more-indented line per out-edge,
/// in the order the graph stores them.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    indent: Indention,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            indent: Indention { spaces: 0, step: 2 },
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.indent = Indention { spaces: init, step };
        self
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
    G::Vertex: std::fmt::Debug,
    G::Weight: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.indent.one_more_level();
        for v in self.graph.iter_vertices() {
            writeln!(f, "{}{:?}", self.indent, v)?;
            for e in self.graph.out_edges(v) {
                writeln!(f, "{}-> {}", inner, e)?;
            }
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Display for GraphDebug<'a, G>
where
    G: QueryableGraph,
    G::Vertex: std::fmt::Debug,
    G::Weight: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

struct Indention {
    spaces: usize,
    step: usize,
}

impl std::fmt::Display for Indention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.spaces {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl Indention {
    fn one_more_level(&self) -> Self {
        Self {
            spaces: self.spaces + self.step,
            step: self.step,
        }
    }
}

/// Position of a vertex in a mesh's vertex block.
///
/// Indices are handed out by the mesh that owns the vertex, in insertion
/// order starting from zero. The default value is only a placeholder for
/// points that have not been registered yet.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct VertexIndex(usize);

impl VertexIndex {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-vertex traversal status.
///
/// A traversal moves every reachable vertex through the sequence
/// `White` (unvisited) → `Gray` (discovered, still in progress) →
/// `Black` (finished), exactly once and never backward. Color maps are
/// expected to default to `White` for vertices the traversal has not
/// touched yet.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Color {
    #[default]
    White,
    Gray,
    Black,
}

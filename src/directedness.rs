/// Marker type representing directed graph edges.
pub struct Directed;

/// Marker type representing undirected graph edges.
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// Implemented by the [`Directed`] and [`Undirected`] marker types to
/// specialize graph behavior at compile time.
pub trait Directedness {
    fn is_directed() -> bool;
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }
}

//! Edge occurrence map.
//!
//! Counts how often each undirected edge is used by the faces, and in which
//! direction, which is all watertightness and winding checks need.

use hashbrown::HashMap;

/// How one undirected edge is used by the faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeUse {
    /// Number of face sides lying on this edge.
    pub faces: u32,
    /// How many of those traverse it from the lower to the higher index.
    pub forward: u32,
}

impl EdgeUse {
    /// Edge shared by exactly two faces that traverse it in opposite
    /// directions.
    #[must_use]
    pub const fn is_consistently_wound(&self) -> bool {
        self.faces != 2 || self.forward == 1
    }
}

/// Map from undirected edge `(lo, hi)`, `lo <= hi`, to its [`EdgeUse`].
///
/// # Example
///
/// ```
/// use mesh_printability::EdgeMap;
///
/// // Two triangles sharing edge 1-2, traversed in opposite directions
/// let edges = EdgeMap::build(&[[0, 1, 2], [2, 1, 3]]);
/// assert_eq!(edges.edge_count(), 5);
/// assert_eq!(edges.boundary_edge_count(), 4);
/// assert!(!edges.is_watertight());
/// assert!(edges.is_winding_consistent());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeMap {
    edges: HashMap<(u32, u32), EdgeUse>,
}

impl EdgeMap {
    /// Build the map from a face buffer.
    ///
    /// Each face contributes its three sides `(a, b)`, `(b, c)`, `(c, a)`.
    /// Indices are not resolved, so out-of-range indices are harmless here.
    #[must_use]
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::with_capacity(faces.len() * 3 / 2);

        for &[a, b, c] in faces {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                let entry = edges.entry((from.min(to), from.max(to))).or_default();
                entry.faces += 1;
                if from < to {
                    entry.forward += 1;
                }
            }
        }

        Self { edges }
    }

    /// Look up an edge in either direction.
    #[must_use]
    pub fn get(&self, v0: u32, v1: u32) -> Option<EdgeUse> {
        self.edges.get(&(v0.min(v1), v0.max(v1))).copied()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges used by exactly one face.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.values().filter(|e| e.faces == 1).count()
    }

    /// Edges used by more than two faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edges.values().filter(|e| e.faces > 2).count()
    }

    /// Every edge is used by exactly two faces.
    ///
    /// Vacuously true for a mesh without faces.
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.edges.values().all(|e| e.faces == 2)
    }

    /// Every edge shared by exactly two faces is traversed once in each
    /// direction.
    ///
    /// Boundary and non-manifold edges do not take part in this check.
    #[must_use]
    pub fn is_winding_consistent(&self) -> bool {
        self.edges.values().all(EdgeUse::is_consistently_wound)
    }

    /// Number of two-face edges traversed twice in the same direction.
    #[must_use]
    pub fn inconsistent_edge_count(&self) -> usize {
        self.edges
            .values()
            .filter(|e| !e.is_consistently_wound())
            .count()
    }
}

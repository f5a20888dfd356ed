//! Manufacturability issues found by topology validation.

use std::fmt;

/// A defect that makes a mesh unsuitable for printing.
///
/// `Display` renders the human-readable message clients receive; those
/// strings are part of the public contract and must not change.
///
/// ```
/// use mesh_printability::TopologyIssue;
///
/// let issue = TopologyIssue::DegenerateFaces { count: 1 };
/// assert_eq!(issue.to_string(), "Contains 1 degenerate faces");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyIssue {
    /// Some edge is not shared by exactly two faces.
    NotWatertight,
    /// Two faces sharing an edge traverse it in the same direction.
    InconsistentWinding,
    /// Fewer faces than the smallest closed solid.
    TooFewFaces {
        /// Number of faces in the mesh.
        count: usize,
    },
    /// Faces with (near-)zero area.
    DegenerateFaces {
        /// Number of degenerate faces, at least 1.
        count: usize,
    },
}

impl TopologyIssue {
    /// Stable identifier for the issue kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotWatertight => "not_watertight",
            Self::InconsistentWinding => "inconsistent_winding",
            Self::TooFewFaces { .. } => "too_few_faces",
            Self::DegenerateFaces { .. } => "degenerate_faces",
        }
    }
}

impl fmt::Display for TopologyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotWatertight => f.write_str("Model is not watertight (has holes)"),
            Self::InconsistentWinding => f.write_str("Inconsistent face winding"),
            Self::TooFewFaces { .. } => f.write_str("Too few faces for a valid 3D model"),
            Self::DegenerateFaces { count } => write!(f, "Contains {count} degenerate faces"),
        }
    }
}

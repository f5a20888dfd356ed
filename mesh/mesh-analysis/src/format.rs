//! Source file formats accepted per operation.
//!
//! The engine never decodes files; a loader does. The allow-lists still
//! live here so every surface rejects the same extensions with the same
//! message. Validation accepts fewer formats than analysis, which existing
//! clients rely on.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A 3D model file format, identified by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// Stereolithography.
    Stl,
    /// Wavefront OBJ.
    Obj,
    /// Stanford polygon format.
    Ply,
    /// Object File Format.
    Off,
    /// glTF, JSON flavour.
    Gltf,
    /// glTF, binary flavour.
    Glb,
}

impl ModelFormat {
    /// Every known format.
    pub const ALL: [Self; 6] = [
        Self::Stl,
        Self::Obj,
        Self::Ply,
        Self::Off,
        Self::Gltf,
        Self::Glb,
    ];

    /// Lowercase extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Stl => "stl",
            Self::Obj => "obj",
            Self::Ply => "ply",
            Self::Off => "off",
            Self::Gltf => "gltf",
            Self::Glb => "glb",
        }
    }

    /// Parse an extension, with or without its leading dot. Case-insensitive.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }

    /// Format of a file, from its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Public engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Metrics and estimates.
    Analyze,
    /// Printability checks.
    Validate,
}

impl Operation {
    /// Formats accepted by this operation, in the order they are listed to
    /// clients.
    #[must_use]
    pub const fn supported_formats(self) -> &'static [ModelFormat] {
        match self {
            Self::Analyze => &ModelFormat::ALL,
            Self::Validate => &[ModelFormat::Stl, ModelFormat::Obj, ModelFormat::Ply],
        }
    }

    /// Whether a format is accepted.
    #[must_use]
    pub fn supports(self, format: ModelFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    /// Allowed extensions as shown to clients, e.g. `.stl, .obj, .ply`.
    #[must_use]
    pub fn allowed_extensions(self) -> String {
        self.supported_formats()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Lowercase operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::Validate => "validate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a source file name against an operation's allow-list.
///
/// Only the extension is inspected; the file need not exist.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedFormat`] when the extension is missing,
/// unknown, or not accepted by `operation`.
///
/// # Example
///
/// ```
/// use mesh_analysis::{check_format, ModelFormat, Operation};
///
/// assert_eq!(check_format("part.STL", Operation::Validate).unwrap(), ModelFormat::Stl);
///
/// let err = check_format("part.glb", Operation::Validate).unwrap_err();
/// assert_eq!(err.to_string(), "Unsupported file type. Allowed: .stl, .obj, .ply");
/// ```
pub fn check_format(path: impl AsRef<Path>, operation: Operation) -> EngineResult<ModelFormat> {
    let path = path.as_ref();
    match ModelFormat::from_path(path) {
        Some(format) if operation.supports(format) => Ok(format),
        _ => Err(EngineError::UnsupportedFormat {
            extension: path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
                .unwrap_or_default(),
            allowed: operation.allowed_extensions(),
        }),
    }
}

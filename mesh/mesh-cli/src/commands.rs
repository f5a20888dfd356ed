//! Command implementations.
//!
//! Each command returns the text to print so it can be tested without a
//! process boundary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use mesh_analysis::{
    check_format, EngineConfig, EngineMode, GeometryService, Operation, Scene,
};
use serde_json::json;
use tracing::{debug, info};

/// Arguments shared by `analyze` and `validate`.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Decoded scene as JSON
    #[arg(name = "SCENE_JSON")]
    pub scene: PathBuf,

    /// Name of the uploaded file the scene was decoded from; its extension
    /// is checked against the operation's accepted formats
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Engine configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Serve placeholder results instead of computing them
    #[arg(long)]
    pub placeholder: bool,
}

/// Run `analyze` and render the result.
pub fn analyze(args: &RequestArgs) -> Result<String> {
    let (service, scene) = prepare(args, Operation::Analyze)?;
    let result = service.analyze(&scene).context("Error analyzing model")?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Run `validate` and render the result.
pub fn validate(args: &RequestArgs) -> Result<String> {
    let (service, scene) = prepare(args, Operation::Validate)?;
    let result = service
        .validate_for_printing(&scene)
        .context("Error validating model")?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Render the accepted formats per operation.
pub fn formats() -> String {
    let list = |op: Operation| {
        op.supported_formats()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    };
    let value = json!({
        "analyze": list(Operation::Analyze),
        "validate": list(Operation::Validate),
    });
    // A json! literal of strings always serializes
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Check the source format, build the service and load the scene.
fn prepare(args: &RequestArgs, operation: Operation) -> Result<(Box<dyn GeometryService>, Scene)> {
    if let Some(source) = &args.source {
        let format = check_format(source, operation)?;
        debug!(source = %source.display(), %format, "source format accepted");
    }

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if args.placeholder {
        config.mode = EngineMode::Placeholder;
    }

    let service = config.build_service().context("Failed to build engine")?;
    let scene = load_scene(&args.scene)?;

    info!(
        engine = service.name(),
        %operation,
        sub_meshes = scene.meshes.len(),
        "running request"
    );
    Ok((service, scene))
}

/// Read an engine configuration file.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Read a decoded scene file.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse scene: {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use mesh_analysis::EngineError;
    use mesh_types::unit_cube;
    use serde_json::Value;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn cube_scene_file() -> NamedTempFile {
        let scene = Scene::single(unit_cube());
        write_temp(&serde_json::to_string(&scene).unwrap(), ".json")
    }

    fn args_for(scene: &NamedTempFile) -> RequestArgs {
        RequestArgs {
            scene: scene.path().to_path_buf(),
            ..RequestArgs::default()
        }
    }

    #[test]
    fn analyze_cube_scene() {
        let scene = cube_scene_file();
        let output: Value = serde_json::from_str(&analyze(&args_for(&scene)).unwrap()).unwrap();

        assert_eq!(output["triangleCount"], 12);
        assert_eq!(output["isWatertight"], true);
        assert!((output["volume"].as_f64().unwrap() - 1.0).abs() < 1e-9);
        assert!((output["surfaceArea"].as_f64().unwrap() - 6.0).abs() < 1e-9);
        assert!(output["estimatedPrintTime"].is_number());
    }

    #[test]
    fn validate_hand_written_scene() {
        // Open pyramid: four triangles, no base
        let scene = write_temp(
            r#"{"meshes": [{
                "name": "pyramid",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0], [0.5, 0.5, 1]],
                "faces": [[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]]
            }]}"#,
            ".json",
        );
        let output: Value = serde_json::from_str(&validate(&args_for(&scene)).unwrap()).unwrap();

        assert_eq!(output["valid"], false);
        assert_eq!(output["isWatertight"], false);
        assert_eq!(output["triangleCount"], 4);
        assert_eq!(
            output["issues"],
            json!(["Model is not watertight (has holes)"])
        );
        assert!(output.get("note").is_none());
    }

    #[test]
    fn source_extension_is_checked_per_operation() {
        let scene = cube_scene_file();
        let args = RequestArgs {
            source: Some(PathBuf::from("upload/part.glb")),
            ..args_for(&scene)
        };

        assert!(analyze(&args).is_ok());

        let err = validate(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported file type. Allowed: .stl, .obj, .ply"
        );
        assert!(matches!(
            err.downcast_ref::<EngineError>(),
            Some(EngineError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn empty_scene_fails_with_engine_error() {
        let scene = write_temp(r#"{"meshes": []}"#, ".json");
        let err = analyze(&args_for(&scene)).unwrap_err();

        assert_eq!(err.to_string(), "Error analyzing model");
        assert_eq!(
            err.downcast_ref::<EngineError>(),
            Some(&EngineError::EmptyModel)
        );
    }

    #[test]
    fn placeholder_flag_skips_geometry() {
        let scene = write_temp(r#"{"meshes": []}"#, ".json");
        let args = RequestArgs {
            placeholder: true,
            ..args_for(&scene)
        };
        let output: Value = serde_json::from_str(&validate(&args).unwrap()).unwrap();
        assert_eq!(output["triangleCount"], 1000);
        assert_eq!(output["note"], "Trimesh not available, validation skipped");
    }

    #[test]
    fn config_file_is_applied() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("engine.toml");
        fs::write(&config_path, "max_face_count = 6\n").unwrap();

        let scene = cube_scene_file();
        let args = RequestArgs {
            config: Some(config_path),
            ..args_for(&scene)
        };
        let err = analyze(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EngineError>(),
            Some(&EngineError::CapacityExceeded {
                face_count: 12,
                limit: 6
            })
        );
    }

    #[test]
    fn placeholder_mode_from_config_file() {
        let config = write_temp("mode = \"placeholder\"\n", ".toml");
        let loaded = load_config(config.path()).unwrap();
        assert_eq!(loaded.mode, EngineMode::Placeholder);
    }

    #[test]
    fn unreadable_inputs_report_the_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_scene(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read scene"));

        let garbage = write_temp("{not json", ".json");
        let err = load_scene(garbage.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse scene"));

        let bad_toml = write_temp("mode = 3", ".toml");
        assert!(load_config(bad_toml.path()).is_err());
    }

    #[test]
    fn formats_lists_both_operations() {
        let output: Value = serde_json::from_str(&formats()).unwrap();
        assert_eq!(
            output["analyze"],
            json!([".stl", ".obj", ".ply", ".off", ".gltf", ".glb"])
        );
        assert_eq!(output["validate"], json!([".stl", ".obj", ".ply"]));
    }
}

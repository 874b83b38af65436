// Selection context: which variant every demo uses, decided once at startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::{MealPlan, Recipe};
use crate::catalog::Catalog;
use crate::error::PatternError;
use crate::factory_method::ShapeKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} selection: {message}")]
    Parse { format: &'static str, message: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            format: "json",
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            format: "toml",
            message: err.to_string(),
        }
    }
}

/// Read-only once built; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selection {
    os: String,
    dialog: String,
    furniture: String,
    rounded_shapes: bool,
    shapes: Vec<String>,
    device: String,
    circle_color: String,
    recipe: String,
    meal: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            os: "mac".to_string(),
            dialog: "linux".to_string(),
            furniture: "victorian".to_string(),
            rounded_shapes: false,
            shapes: vec![
                "circle".to_string(),
                "rectangle".to_string(),
                "square".to_string(),
            ],
            device: "tv".to_string(),
            circle_color: "red".to_string(),
            recipe: "sport".to_string(),
            meal: "veg".to_string(),
        }
    }
}

impl Selection {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Picks the format from the extension, or sniffs the content when there is none.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let selection = match format.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)?
                } else {
                    Self::from_toml_str(&content)?
                }
            }
        };
        tracing::info!(path = %path.display(), "selection loaded");
        Ok(selection)
    }

    /// Resolves every token up front so a bad one fails here rather than mid-demo.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), PatternError> {
        catalog.gui.resolve_set(&self.os)?;
        catalog.furniture.resolve_set(&self.furniture)?;
        catalog.dialogs.resolve(&self.dialog)?;
        catalog.devices.resolve(&self.device)?;
        catalog.draw_apis.resolve(&self.circle_color)?;
        self.shape_kinds()?;
        self.recipe()?;
        self.meal_plan()?;
        Ok(())
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn dialog(&self) -> &str {
        &self.dialog
    }

    pub fn furniture(&self) -> &str {
        &self.furniture
    }

    pub fn rounded_shapes(&self) -> bool {
        self.rounded_shapes
    }

    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn circle_color(&self) -> &str {
        &self.circle_color
    }

    pub fn shape_kinds(&self) -> Result<Vec<ShapeKind>, PatternError> {
        self.shapes.iter().map(|s| s.parse()).collect()
    }

    pub fn recipe(&self) -> Result<Recipe, PatternError> {
        self.recipe.parse()
    }

    pub fn meal_plan(&self) -> Result<MealPlan, PatternError> {
        self.meal.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_selection_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(Selection::default().validate(&catalog).is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let selection = Selection::from_toml_str("os = \"windows\"\nrounded_shapes = true\n").unwrap();
        assert_eq!(selection.os(), "windows");
        assert!(selection.rounded_shapes());
        assert_eq!(selection.furniture(), "victorian");
        assert_eq!(selection.recipe().unwrap(), Recipe::Sport);
    }

    #[test]
    fn test_json_selection() {
        let selection =
            Selection::from_json_str(r#"{"furniture": "modern", "shapes": ["square"]}"#).unwrap();
        assert_eq!(selection.furniture(), "modern");
        assert_eq!(selection.shape_kinds().unwrap(), vec![ShapeKind::Square]);
    }

    #[test]
    fn test_written_selection_reads_back() {
        let selection = Selection::from_toml_str("furniture = \"modern\"\nshapes = [\"square\"]\n").unwrap();

        let written = toml::to_string(&selection).unwrap();
        assert_eq!(Selection::from_toml_str(&written).unwrap(), selection);

        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(Selection::from_json_str(&json).unwrap(), selection);
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let err = Selection::from_toml_str("theme = \"dark\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "toml", .. }));
    }

    #[test]
    fn test_unknown_token_fails_validation() {
        let catalog = Catalog::builtin().unwrap();
        let selection = Selection::from_toml_str("device = \"toaster\"").unwrap();
        assert_eq!(
            selection.validate(&catalog).unwrap_err(),
            PatternError::not_found("devices", "toaster")
        );
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        fs::write(&path, r#"{"os": "windows", "meal": "non-veg"}"#).unwrap();
        let selection = Selection::from_path(&path).unwrap();
        assert_eq!(selection.os(), "windows");
        assert_eq!(selection.meal_plan().unwrap(), MealPlan::NonVeg);
    }

    #[test]
    fn test_from_path_sniffs_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dialog = \"windows\"").unwrap();
        let selection = Selection::from_path(file.path()).unwrap();
        assert_eq!(selection.dialog(), "windows");

        let mut json = tempfile::NamedTempFile::new().unwrap();
        writeln!(json, "  {{\"device\": \"radio\"}}").unwrap();
        assert_eq!(Selection::from_path(json.path()).unwrap().device(), "radio");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Selection::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}

//! Loading API models from JSON or TOML.

use std::path::{Path, PathBuf};

use apigen_ir::ApiModel;

use crate::{Error, Result, SourceContext, validate::ModelContext, validate_model};

/// On-disk encoding of an API model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Toml,
}

impl ModelFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(ModelFormat::Json),
            "toml" => Some(ModelFormat::Toml),
            _ => None,
        }
    }
}

/// An API model file with both raw content and the parsed model.
pub struct ModelFile {
    path: PathBuf,
    content: String,
    model: ApiModel,
}

impl ModelFile {
    /// Open, parse and validate a model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = ModelFormat::from_path(&path)
            .ok_or_else(|| Box::new(Error::UnsupportedFormat { path: path.clone() }))?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let model = parse_model_str(&content, &filename, format)?;

        Ok(Self {
            path,
            content,
            model,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed model.
    pub fn model(&self) -> &ApiModel {
        &self.model
    }

    pub fn into_model(self) -> ApiModel {
        self.model
    }
}

/// Parse and validate a model from a string.
pub fn parse_model_str(content: &str, filename: &str, format: ModelFormat) -> Result<ApiModel> {
    let source_ctx = SourceContext::new(content, filename);
    let model: ApiModel = match format {
        ModelFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?
        }
        ModelFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?,
    };

    validate_model(&model, &ModelContext::new(content, filename))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use apigen_ir::{HttpVerb, ParameterLocation};
    use tempfile::TempDir;

    use super::*;

    const TOML_MODEL: &str = r#"
version = "1.0"

[[methods]]
name = "GetById"
verb = "GET"
uri = "/items/{id}"
response_type = "Item"
summary = "Retrieve a single item"

[[methods.params]]
name = "id"
raw_name = "id"
type = "integer"
location = "path"

[[schemas]]
name = "Item"

[[schemas.properties]]
name = "id"
type = "integer"

[[enums]]
name = "Status"
values = [
    { name = "Active", value = 1 },
    { name = "Inactive", value = 2 },
]
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ModelFormat::from_path(Path::new("api.json")),
            Some(ModelFormat::Json)
        );
        assert_eq!(
            ModelFormat::from_path(Path::new("api.TOML")),
            Some(ModelFormat::Toml)
        );
        assert_eq!(ModelFormat::from_path(Path::new("api.yaml")), None);
        assert_eq!(ModelFormat::from_path(Path::new("api")), None);
    }

    #[test]
    fn test_parse_toml_model() {
        let model = parse_model_str(TOML_MODEL, "api.toml", ModelFormat::Toml).unwrap();
        assert_eq!(model.methods.len(), 1);
        assert_eq!(model.methods[0].verb, HttpVerb::Get);
        assert_eq!(model.methods[0].params[0].location, ParameterLocation::Path);
        assert_eq!(model.schemas[0].properties.len(), 1);
        assert_eq!(model.enums[0].values[1].value, 2);
    }

    #[test]
    fn test_parse_json_error() {
        let err = parse_model_str("{\"methods\": [}", "api.json", ModelFormat::Json).unwrap_err();
        assert!(matches!(*err, Error::ParseJson { .. }));
    }

    #[test]
    fn test_parse_runs_validation() {
        let content = r#"{"enums": [{"name": "Status", "values": [
            {"name": "A", "value": 1}, {"name": "B", "value": 1}]}]}"#;
        let err = parse_model_str(content, "api.json", ModelFormat::Json).unwrap_err();
        assert!(matches!(*err, Error::DuplicateEnumValue { .. }));
    }

    #[test]
    fn test_open_model_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("api.toml");
        std::fs::write(&path, TOML_MODEL).unwrap();

        let file = ModelFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.content(), TOML_MODEL);
        assert_eq!(file.model().version.as_deref(), Some("1.0"));
    }

    #[test]
    fn test_open_unsupported_extension() {
        let err = ModelFile::open("api.yaml").err().unwrap();
        assert!(matches!(*err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ModelFile::open(temp.path().join("missing.json")).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}

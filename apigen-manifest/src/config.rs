//! `apigen.toml` generator configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Language, Result, SourceContext, validate::ModelContext};

/// Root of `apigen.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path to the API model, relative to the config file
    pub model: PathBuf,

    /// Target language
    pub language: Language,

    /// Package (Java) or namespace (C#) of the generated sources
    pub namespace: String,

    /// Name of the aggregate client class
    pub client_name: String,

    /// Output directory, relative to the config file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Documentation comment wrap width
    #[serde(default)]
    pub wrap_width: Option<usize>,
}

fn default_output() -> PathBuf {
    PathBuf::from("sdk")
}

/// Smallest wrap width that still leaves room for text after a comment marker.
const MIN_WRAP_WIDTH: usize = 40;

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "apigen.toml")
    }
}

impl Config {
    /// Parse with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, source_ctx: &SourceContext) -> Result<()> {
    let generator = &config.generator;
    let ctx = ModelContext::new(source_ctx.src(), source_ctx.filename());

    if generator.namespace.is_empty() {
        return Err(source_ctx.validation_error("namespace cannot be empty"));
    }
    for segment in generator.namespace.split('.') {
        ctx.validate_name(segment, "namespace segment")?;
    }

    ctx.validate_name(&generator.client_name, "client")?;

    if generator
        .wrap_width
        .is_some_and(|width| width < MIN_WRAP_WIDTH)
    {
        let message = format!("wrap_width must be at least {}", MIN_WRAP_WIDTH);
        return Err(match source_ctx.src().find("wrap_width") {
            Some(pos) => source_ctx.validation_error_at(message, (pos, "wrap_width".len())),
            None => source_ctx.validation_error(message),
        });
    }

    Ok(())
}

/// Represents an apigen.toml file with both raw content and parsed config.
pub struct ApigenToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ApigenToml {
    /// Open and parse an apigen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory that relative paths in the config resolve against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// Resolve a config-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }
}

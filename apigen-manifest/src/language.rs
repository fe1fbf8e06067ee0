//! Target languages.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for SDK generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    #[serde(alias = "cs", alias = "c#")]
    CSharp,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "csharp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            _ => Err(format!(
                "unknown language '{}', expected 'java' or 'csharp'",
                s
            )),
        }
    }
}

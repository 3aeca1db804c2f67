//! Document loading.
//!
//! The configuration tree is kept as `serde_yaml` values throughout:
//! `Mapping`, `Sequence` and scalar variants are exactly the node kinds
//! the resolution rules branch on, so every rule is a `match` over the
//! parsed tree. The only structural requirement enforced here is that
//! the top level is a mapping; everything deeper is checked by the rule
//! that consumes it.

use std::fs;

use serde_yaml::Mapping;
use thiserror::Error;

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unable to read document '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse document '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document '{path}' must be a mapping at the top level")]
    NotMapping { path: String },
}

/// Read and parse the YAML document the resolvers walk.
pub fn load_document(path: &str) -> Result<Mapping, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_string(),
        source,
    })?;

    parse_document(&content).map_err(|err| match err {
        ParseError::Yaml(source) => DocumentError::Parse {
            path: path.to_string(),
            source,
        },
        ParseError::NotMapping => DocumentError::NotMapping {
            path: path.to_string(),
        },
    })
}

enum ParseError {
    Yaml(serde_yaml::Error),
    NotMapping,
}

fn parse_document(content: &str) -> Result<Mapping, ParseError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(ParseError::Yaml)?;
    match value {
        serde_yaml::Value::Mapping(mapping) => Ok(mapping),
        _ => Err(ParseError::NotMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_mapping_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "region: us-east\ndatabases:\n  mariadb:\n    dsn: x\n").unwrap();

        let document = load_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(document.len(), 2);
        assert!(document.contains_key("region"));
    }

    #[test]
    fn rejects_a_scalar_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "just a string\n").unwrap();

        let err = load_document(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, DocumentError::NotMapping { .. }));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_document("/nonexistent/app.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/app.yaml"));
    }
}

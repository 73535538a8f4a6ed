//! Options accepted by the file loader.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::{AttrError, AttrResult, SequenceKind};

/// A pluggable decoder: turns a file's text into a JSON value.
///
/// The path is passed for context only; the decoder must not read it.
pub type Decoder = Arc<dyn Fn(&Path, &str) -> AttrResult<JsonValue> + Send + Sync>;

/// Built-in document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// JSON, the fallback for unrecognised extensions.
    #[default]
    Json,
    /// JSON5. Requires the `json5` feature.
    Json5,
    /// TOML. Requires the `toml` feature.
    Toml,
    /// YAML 1.2 with strict booleans. Requires the `yaml` feature.
    Yaml,
}

impl Format {
    /// Pick a format from the file extension, case-insensitively. Unknown
    /// or missing extensions fall back to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json5") => Self::Json5,
            Some("toml") => Self::Toml,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Lower-case name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Json5 => "json5",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = AttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "json5" => Ok(Self::Json5),
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(AttrError::InvalidOption {
                name: "format".to_owned(),
                message: format!("unknown format '{other}'"),
            }),
        }
    }
}

/// Names accepted by [`LoadOptions::from_options`].
const KNOWN_OPTIONS: &[&str] = &["format", "sequence_type"];

/// How [`crate::load`] decodes files and configures its result.
///
/// # Examples
///
/// ```
/// use attr_map::{Format, LoadOptions, SequenceKind};
/// use serde_json::json;
///
/// let options = LoadOptions::from_options([
///     ("format", json!("json")),
///     ("sequence_type", json!("list")),
/// ])?;
/// assert_eq!(options.format, Some(Format::Json));
/// assert_eq!(options.sequence_type, Some(SequenceKind::List));
///
/// let err = LoadOptions::from_options([("colour", json!(true))]).unwrap_err();
/// assert_eq!(err.to_string(), "unknown load option(s): colour");
/// # Ok::<_, attr_map::AttrError>(())
/// ```
#[derive(Clone)]
pub struct LoadOptions {
    /// Custom decoder used for every file. Takes precedence over
    /// [`LoadOptions::format`].
    pub decoder: Option<Decoder>,
    /// Container sequences are rebuilt into by the loaded wrapper.
    pub sequence_type: Option<SequenceKind>,
    /// Format used for every file. `None` picks one per file from its
    /// extension.
    pub format: Option<Format>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            decoder: None,
            sequence_type: Some(SequenceKind::Tuple),
            format: None,
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("decoder", &self.decoder.as_ref().map(|_| "<decoder>"))
            .field("sequence_type", &self.sequence_type)
            .field("format", &self.format)
            .finish()
    }
}

impl LoadOptions {
    /// Default options: per-extension formats, tuples for sequences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every file with `decoder`.
    #[must_use]
    pub fn with_decoder<F>(mut self, decoder: F) -> Self
    where
        F: Fn(&Path, &str) -> AttrResult<JsonValue> + Send + Sync + 'static,
    {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Replace the container sequences are rebuilt into.
    #[must_use]
    pub fn with_sequence_type(mut self, sequence_type: Option<SequenceKind>) -> Self {
        self.sequence_type = sequence_type;
        self
    }

    /// Decode every file as `format`, whatever its extension.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Build options from loosely typed name/value pairs.
    ///
    /// Recognised names are `format` (a format name) and `sequence_type`
    /// (`"list"`, `"tuple"` or `null`). Decoders can only be installed
    /// with [`LoadOptions::with_decoder`].
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::UnknownOptions`] listing every unrecognised name
    /// before looking at any value, or [`AttrError::InvalidOption`] for a
    /// recognised name with an unusable value.
    pub fn from_options<I, K>(options: I) -> AttrResult<Self>
    where
        I: IntoIterator<Item = (K, JsonValue)>,
        K: Into<String>,
    {
        let options: Vec<(String, JsonValue)> = options
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();

        let mut unknown: Vec<String> = options
            .iter()
            .filter(|(name, _)| !KNOWN_OPTIONS.contains(&name.as_str()))
            .map(|(name, _)| name.clone())
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            unknown.dedup();
            return Err(AttrError::UnknownOptions { names: unknown });
        }

        let mut result = Self::default();
        for (name, value) in options {
            match name.as_str() {
                "format" => result.format = Some(parse_format(&value)?),
                _ => result.sequence_type = parse_sequence_type(&value)?,
            }
        }
        Ok(result)
    }
}

fn invalid(name: &str, message: impl Into<String>) -> AttrError {
    AttrError::InvalidOption {
        name: name.to_owned(),
        message: message.into(),
    }
}

fn parse_format(value: &JsonValue) -> AttrResult<Format> {
    value
        .as_str()
        .ok_or_else(|| invalid("format", format!("expected a string, found {value}")))?
        .parse()
}

fn parse_sequence_type(value: &JsonValue) -> AttrResult<Option<SequenceKind>> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(kind) if kind == "list" => Ok(Some(SequenceKind::List)),
        JsonValue::String(kind) if kind == "tuple" => Ok(Some(SequenceKind::Tuple)),
        other => Err(invalid(
            "sequence_type",
            format!("expected \"list\", \"tuple\" or null, found {other}"),
        )),
    }
}

use chrono::Datelike;
use gpl_ramp::{BitDepth, ChannelDepths, ColorModel, PaletteSettings, Year};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, IoFailure};

/// Scalar or list value as written in a configuration file.
///
/// Key/value files only ever produce `Text`; YAML may produce any variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<RawValue>),
}

impl RawValue {
    /// The value as configuration text. Lists are joined with single spaces.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Bool(b) => b.to_string(),
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(f) => f.to_string(),
            RawValue::Text(s) => s.clone(),
            RawValue::List(items) => items
                .iter()
                .map(RawValue::to_text)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Configuration exactly as read, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawConfig {
    /// Color model name (`type` key)
    #[serde(rename = "type")]
    pub color_type: Option<RawValue>,

    /// Space-separated red, green, blue bit depths
    pub depth: Option<RawValue>,

    pub title: Option<RawValue>,

    pub columns: Option<RawValue>,

    pub author: Option<RawValue>,

    /// Copyright year or free-form year text
    pub years: Option<RawValue>,

    /// Keys this tool does not understand
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_yaml::Value>,
}

/// How the resolver treats values it cannot use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Replace unusable values with defaults and carry on.
    #[default]
    Lenient,
    /// Reject the configuration on the first unusable value.
    Strict,
}

impl RawConfig {
    /// Read a configuration file from disk.
    pub fn read(path: &Path) -> Result<String, IoFailure> {
        fs::read_to_string(path).map_err(|e| IoFailure::from_io(e, path))
    }

    /// Parse `content`, choosing YAML for `.yaml`/`.yml` paths and the
    /// `key = value` syntax for everything else.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml(content)
        } else {
            Ok(Self::from_key_value(content))
        }
    }

    /// Parse YAML configuration. An empty document yields an empty config.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse `key = value` lines.
    ///
    /// A line counts only if splitting on `" = "` gives exactly two parts;
    /// everything else (comments, blank lines, values containing `" = "`) is
    /// skipped. Later lines override earlier ones.
    pub fn from_key_value(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let parts: Vec<&str> = line.split(" = ").collect();
            let [key, value] = parts.as_slice() else {
                continue;
            };
            let value = Some(RawValue::Text(value.to_string()));
            match *key {
                "type" => config.color_type = value,
                "depth" => config.depth = value,
                "title" => config.title = value,
                "columns" => config.columns = value,
                "author" => config.author = value,
                "years" => config.years = value,
                other => {
                    config.unknown.insert(
                        other.to_string(),
                        serde_yaml::Value::String(value_text(&value)),
                    );
                }
            }
        }

        config
    }

    /// Validate into immutable palette settings.
    ///
    /// `current_year` is both the default year and the exclusive upper bound
    /// for numeric years.
    pub fn resolve(
        &self,
        current_year: i32,
        validation: Validation,
    ) -> Result<PaletteSettings, ConfigError> {
        for key in self.unknown.keys() {
            tracing::debug!(%key, "Ignoring unknown configuration key");
        }

        let mut settings = PaletteSettings::new(current_year);

        if let Some(ref raw) = self.color_type {
            let name = raw.to_text();
            settings = settings.color_model(ColorModel::from_name(&name));
            tracing::debug!(%name, model = %settings.color_model, "Resolved color model");
        }

        if let Some(ref raw) = self.depth {
            settings = settings.depths(resolve_depths(&raw.to_text(), validation)?);
        }

        if let Some(ref raw) = self.title {
            settings = settings.title(raw.to_text());
        }

        if let Some(ref raw) = self.columns {
            let text = raw.to_text();
            match parse_digits::<u32>(&text) {
                Some(columns) => settings = settings.columns(columns),
                None => reject_or_warn("columns", &text, validation)?,
            }
        }

        if let Some(ref raw) = self.author {
            settings = settings.author(raw.to_text());
        }

        if let Some(ref raw) = self.years {
            let text = raw.to_text();
            if is_digits(&text) {
                match parse_digits::<i32>(&text) {
                    Some(year) if year > 999 && year < current_year => {
                        settings = settings.year(Year::Number(year));
                    }
                    _ => reject_or_warn("years", &text, validation)?,
                }
            } else {
                settings = settings.year(Year::Text(text));
            }
        }

        tracing::info!(
            model = %settings.color_model,
            red = %settings.depths.red,
            green = %settings.depths.green,
            blue = %settings.depths.blue,
            columns = settings.columns,
            "Resolved palette settings"
        );

        Ok(settings)
    }
}

/// Current calendar year from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn value_text(value: &Option<RawValue>) -> String {
    value.as_ref().map(RawValue::to_text).unwrap_or_default()
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits<T: std::str::FromStr>(text: &str) -> Option<T> {
    if is_digits(text) {
        text.parse().ok()
    } else {
        None
    }
}

fn reject_or_warn(
    key: &'static str,
    value: &str,
    validation: Validation,
) -> Result<(), ConfigError> {
    match validation {
        Validation::Strict => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
        Validation::Lenient => {
            tracing::warn!(key, value, "Ignoring invalid value, keeping default");
            Ok(())
        }
    }
}

fn resolve_depths(text: &str, validation: Validation) -> Result<ChannelDepths, ConfigError> {
    let mut depths = Vec::with_capacity(3);

    // Single-space separated: doubled or leading spaces yield empty tokens,
    // which are invalid and resolve to 8.
    for token in text.split(' ').take(3) {
        let depth = match BitDepth::try_parse(token) {
            Ok(depth) => depth,
            Err(e) => match validation {
                Validation::Strict => {
                    return Err(ConfigError::InvalidValue {
                        key: "depth",
                        value: token.to_string(),
                    })
                }
                Validation::Lenient => {
                    tracing::warn!(token, %e, "Invalid bit depth, using 8");
                    BitDepth::MAX
                }
            },
        };
        depths.push(depth);
    }

    Ok(ChannelDepths::from_slice(&depths))
}

//! `ExportBuilder`: fluent export of a struct to plain data or JSON text

use serde::Serialize;
use serde_json::Value as JsonValue;

use deepstruct_core::{DeepStruct, ExportOptions, StructResult};

/// Chained export options bound to a struct
///
/// Starts from the plain-object defaults (nothing filtered, keys as stored);
/// call [`json_defaults`](Self::json_defaults) to start from the JSON ones.
#[derive(Debug)]
pub struct ExportBuilder<'a> {
    target: &'a DeepStruct,
    options: ExportOptions,
}

impl<'a> ExportBuilder<'a> {
    #[must_use]
    pub fn new(target: &'a DeepStruct) -> Self {
        Self {
            target,
            options: ExportOptions::default(),
        }
    }

    /// Replace the options with [`ExportOptions::json_defaults`]
    #[must_use]
    pub fn json_defaults(mut self) -> Self {
        self.options = ExportOptions::json_defaults();
        self
    }

    /// Replace the options wholesale
    #[must_use]
    pub fn options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn camelize_keys(mut self) -> Self {
        self.options.camelize_keys = true;
        self
    }

    #[must_use]
    pub fn keep_key_case(mut self) -> Self {
        self.options.camelize_keys = false;
        self
    }

    #[must_use]
    pub fn exclude_blank_values(mut self) -> Self {
        self.options.exclude_blank_values = true;
        self
    }

    #[must_use]
    pub fn keep_blank_values(mut self) -> Self {
        self.options.exclude_blank_values = false;
        self
    }

    /// Drop entries whose converted value equals `value`
    ///
    /// Values that fail to serialize are ignored with a warning.
    #[must_use]
    pub fn exclude_value<T: Serialize>(mut self, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => self.options.values_to_exclude.push(json),
            Err(e) => log::warn!("excluded value ignored, not serializable: {e}"),
        }
        self
    }

    /// Configured options so far
    #[must_use]
    pub fn current_options(&self) -> &ExportOptions {
        &self.options
    }

    /// # Errors
    ///
    /// Returns `StructError::CyclicReference` if the struct contains itself.
    pub fn to_plain(self) -> StructResult<JsonValue> {
        self.target.to_plain_object(&self.options)
    }

    /// # Errors
    ///
    /// Returns `StructError::CyclicReference` if the struct contains itself,
    /// or `StructError::Json` if serialization fails.
    pub fn to_json(self) -> StructResult<String> {
        self.target.to_json(&self.options)
    }
}

/// Entry points for fluent export
pub trait Export {
    /// Start an export with plain-object defaults
    fn export(&self) -> ExportBuilder<'_>;
}

impl Export for DeepStruct {
    fn export(&self) -> ExportBuilder<'_> {
        ExportBuilder::new(self)
    }
}

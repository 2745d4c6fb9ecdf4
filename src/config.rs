//! Configuration for NestKV
//!
//! Centralized configuration with sensible defaults.

use crate::collection::BackendKind;

/// Main configuration for a NestKV session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Collection Configuration
    // -------------------------------------------------------------------------
    /// Backend used by `add-collection` when the command names none
    pub default_backend: BackendKind,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Prompt printed before each interactive line
    pub prompt: String,

    /// An interactive line containing this suffix is run as a script file
    pub script_extension: String,

    /// Abort a script on its first failing line instead of reporting and
    /// moving on
    pub stop_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_backend: BackendKind::Ordered,
            prompt: "nestkv> ".to_string(),
            script_extension: ".txt".to_string(),
            stop_on_error: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backend for collections created without an explicit one
    pub fn default_backend(mut self, kind: BackendKind) -> Self {
        self.config.default_backend = kind;
        self
    }

    /// Set the interactive prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Set the suffix that marks an interactive line as a script path
    pub fn script_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.script_extension = extension.into();
        self
    }

    /// Abort scripts on the first failing line
    pub fn stop_on_error(mut self, stop: bool) -> Self {
        self.config.stop_on_error = stop;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

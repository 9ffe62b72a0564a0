//! Settings / Configuration.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};
use url::Url;

/// Base URL of the EU regional iProov service.
pub const DEFAULT_BASE_URL: &str = "https://eu.rp.secure.iproov.me";

/// Location of the `iproov-me` web component bundle.
pub const DEFAULT_SDK_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/@iproov/web-sdk@latest/iProovMe.js";

/// Names of environments for iproov-demo-server.
/// Overrides serialization to force lower case in settings and
/// environment variables
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    /// Local environment (local testing).
    Local,
    /// Official Develop environment.
    Dev,
    /// Official environment.
    Staging,
    /// Official Production environment.
    Prod,
}

/// Implement display to force environment to lower case
impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Server settings.
#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    /// Server [AppEnvironment].
    pub environment: AppEnvironment,
    /// Server port.
    pub port: u16,
    /// Server timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Server {
    /// Convert `timeout_ms` to [Duration].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Settings handed to the embedded `iproov-me` widget.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct IProov {
    /// Regional service endpoint, written into the widget's `base_url` attribute.
    pub base_url: Url,
    /// Where the browser fetches the web component from.
    pub sdk_script_url: Url,
}

impl IProov {
    /// `base_url` as written into the widget attribute.
    ///
    /// A bare origin loses the trailing `/` that [Url] adds; any other URL is
    /// kept exactly.
    pub fn widget_base_url(&self) -> &str {
        let url = &self.base_url;
        let serialized = url.as_str();
        if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
            serialized.strip_suffix('/').unwrap_or(serialized)
        } else {
            serialized
        }
    }
}

impl Default for IProov {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Valid hardcoded base URL"),
            sdk_script_url: Url::parse(DEFAULT_SDK_SCRIPT_URL)
                .expect("Valid hardcoded SDK script URL"),
        }
    }
}

/// Output format of the stdout log layer.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

/// Log settings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Log {
    /// Stdout format
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Clone, Debug, Deserialize)]
/// Application settings.
pub struct Settings {
    /// Server settings
    pub server: Server,
    /// Widget settings
    #[serde(default)]
    pub iproov: IProov,
    /// Log settings
    #[serde(default)]
    pub log: Log,
    /// The path where the settings file resides.
    /// This can't actually be configured in the settings file itself, for obvious reasons.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .unwrap_or(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/settings.toml"));
        // inject environment variables naming them properly on the settings
        // e.g. [iproov] base_url="foo"
        // would be injected with environment variable IPROOV_DEMO_IPROOV__BASE_URL="foo"
        let s = Config::builder()
            .add_source(File::with_name(&path.as_path().display().to_string()))
            .add_source(
                Environment::with_prefix("IPROOV_DEMO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let mut settings: Self = s.try_deserialize()?;
        settings.path = Some(path);
        Ok(settings)
    }

    /// Server settings getter.
    pub fn server(&self) -> &Server {
        &self.server
    }

    /// Widget settings getter.
    pub fn iproov(&self) -> &IProov {
        &self.iproov
    }

    /// Server environment getter.
    pub fn environment(&self) -> AppEnvironment {
        self.server.environment
    }
}

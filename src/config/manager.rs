use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::deepl::{
    ClientConfig, DEFAULT_TIMEOUT, GlossarySpec, default_endpoint_for_key, validate_language,
};
use crate::paths;
use crate::terms::TermSet;

pub const DEFAULT_GLOSSARY_NAME: &str = "Academic_AI_Terms";
pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "zh";
pub const DEFAULT_API_KEY_ENV: &str = "DEEPL_API_KEY";

/// Settings in the `[glossary]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlossarySettings {
    /// API base URL. Derived from the key when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Name given to created glossaries.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Glossary used for test translations. The first one listed when unset.
    #[serde(default)]
    pub glossary_id: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// TSV file replacing the built-in terms.
    #[serde(default)]
    pub terms_file: Option<PathBuf>,
}

impl GlossarySettings {
    fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && !key.trim().is_empty()
        {
            return Some(key.trim().to_string());
        }
        self.api_key.clone().filter(|k| !k.trim().is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/deepl-glossary/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub glossary: GlossarySettings,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub name: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub glossary_id: Option<String>,
}

/// Everything a remote command needs, after merging CLI, file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
    pub glossary: GlossarySpec,
    pub glossary_id: Option<String>,
    pub terms: TermSet,
}

impl ResolvedConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            timeout: self.timeout,
        }
    }
}

/// Loads the configured terms file, or the built-in terms when none is set.
///
/// # Errors
///
/// Returns an error if the terms file cannot be read or holds no terms.
pub fn resolve_terms(config_file: &ConfigFile) -> Result<TermSet> {
    let Some(path) = &config_file.glossary.terms_file else {
        return Ok(TermSet::builtin());
    };

    let terms = TermSet::load_tsv(path)?;
    if terms.is_empty() {
        bail!("Terms file contains no entries: {}", path.display());
    }
    Ok(terms)
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns an error if the API key is missing, a language code is not
/// supported, the timeout is zero, or the terms file cannot be loaded.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let settings = &config_file.glossary;

    let Some(api_key) = settings.get_api_key() else {
        let env_var = settings.api_key_env();
        bail!(
            "Missing DeepL API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/deepl-glossary/config.toml"
        );
    };

    let source_lang = validate_language(
        options
            .from
            .as_deref()
            .or(settings.source_lang.as_deref())
            .unwrap_or(DEFAULT_SOURCE_LANG),
    )?;
    let target_lang = validate_language(
        options
            .to
            .as_deref()
            .or(settings.target_lang.as_deref())
            .unwrap_or(DEFAULT_TARGET_LANG),
    )?;
    if source_lang == target_lang {
        bail!("Source and target language are both '{source_lang}'");
    }

    let name = options
        .name
        .as_ref()
        .or(settings.name.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_GLOSSARY_NAME.to_string());

    let endpoint = options
        .endpoint
        .as_ref()
        .or(settings.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| default_endpoint_for_key(&api_key).to_string());

    let timeout = match settings.timeout_secs {
        Some(0) => bail!("timeout_secs must be at least 1"),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_TIMEOUT,
    };

    let terms = resolve_terms(config_file)?;

    Ok(ResolvedConfig {
        endpoint,
        api_key,
        timeout,
        glossary: GlossarySpec {
            name,
            source_lang,
            target_lang,
        },
        glossary_id: options
            .glossary_id
            .as_ref()
            .or(settings.glossary_id.as_ref())
            .cloned(),
        terms,
    })
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/deepl-glossary/config.toml`
    /// or `~/.config/deepl-glossary/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

use sayt_client::{Provider, SuggestFormat, Suggestion};

use crate::app_dirs;
use crate::cli::CliArgs;

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_PROVIDER: &str = "brave";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    provider: ProviderSection,
    ui: UiSection,
}

/// `[provider]` section of `config.toml`. `name` picks a builtin provider or
/// `custom`; the remaining fields override whatever that choice supplied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProviderSection {
    name: Option<String>,
    label: Option<String>,
    suggest_url: Option<String>,
    suggest_param: Option<String>,
    search_url: Option<String>,
    search_param: Option<String>,
    format: Option<SuggestFormat>,
    default_results: Vec<DefaultResult>,
}

#[derive(Debug, Clone, Deserialize)]
struct DefaultResult {
    name: String,
    url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    input_title: Option<String>,
    initial_query: Option<String>,
}

/// Configuration after merging defaults, the config file, and CLI arguments.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub provider: Provider,
    pub input_title: Option<String>,
    pub initial_query: String,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Provider: {}", self.provider.label);
        println!("  Suggest endpoint: {}", self.provider.suggest_url);
        println!("  Search page: {}", self.provider.search_url);
        println!("  Default results: {}", self.provider.default_results.len());
        if let Some(title) = &self.input_title {
            println!("  Input title: {title}");
        }
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
    }
}

/// Load `config.toml` (when present) and merge it with CLI arguments.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let config_path = app_dirs::get_config_dir()?.join(CONFIG_FILE);
    let raw = if config_path.is_file() {
        load_raw(&config_path)?
    } else {
        RawConfig::default()
    };
    resolve(cli, raw)
}

fn load_raw(path: &Path) -> Result<RawConfig> {
    let loaded = Config::builder()
        .add_source(File::from(path.to_path_buf()))
        .build()
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    loaded
        .try_deserialize()
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

fn resolve(cli: &CliArgs, raw: RawConfig) -> Result<ResolvedConfig> {
    let name = cli
        .provider
        .clone()
        .or_else(|| raw.provider.name.clone())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let mut provider = if name == "custom" {
        custom_provider(&raw.provider)?
    } else {
        Provider::builtin(&name).ok_or_else(|| {
            anyhow!(
                "unknown provider '{name}'; expected one of {}, or 'custom'",
                Provider::builtin_names().join(", ")
            )
        })?
    };
    apply_overrides(&mut provider, &raw.provider);
    provider
        .validate()
        .map_err(|err| anyhow!("provider '{name}': {err}"))?;

    let initial_query = cli
        .query
        .clone()
        .or(raw.ui.initial_query)
        .unwrap_or_default();
    let input_title = cli.title.clone().or(raw.ui.input_title);

    Ok(ResolvedConfig {
        provider,
        input_title,
        initial_query,
    })
}

fn custom_provider(section: &ProviderSection) -> Result<Provider> {
    let suggest_url = section
        .suggest_url
        .clone()
        .context("custom provider requires provider.suggest_url")?;
    let search_url = section
        .search_url
        .clone()
        .context("custom provider requires provider.search_url")?;

    Ok(Provider {
        label: section.label.clone().unwrap_or_else(|| "custom".to_string()),
        suggest_url,
        suggest_param: section
            .suggest_param
            .clone()
            .unwrap_or_else(|| "q".to_string()),
        search_url,
        search_param: section
            .search_param
            .clone()
            .unwrap_or_else(|| "q".to_string()),
        format: section.format.unwrap_or_default(),
        default_results: Vec::new(),
    })
}

fn apply_overrides(provider: &mut Provider, section: &ProviderSection) {
    if let Some(label) = &section.label {
        provider.label = label.clone();
    }
    if let Some(url) = &section.suggest_url {
        provider.suggest_url = url.clone();
    }
    if let Some(param) = &section.suggest_param {
        provider.suggest_param = param.clone();
    }
    if let Some(url) = &section.search_url {
        provider.search_url = url.clone();
    }
    if let Some(param) = &section.search_param {
        provider.search_param = param.clone();
    }
    if let Some(format) = section.format {
        provider.format = format;
    }
    if !section.default_results.is_empty() {
        provider.default_results = section
            .default_results
            .iter()
            .map(|entry| Suggestion::new(entry.name.clone(), entry.url.clone()))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> CliArgs {
        let mut argv = vec!["sayt"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn defaults_to_brave_with_empty_query() {
        let resolved = resolve(&cli(&[]), RawConfig::default()).unwrap();
        assert_eq!(resolved.provider.label, "Brave");
        assert_eq!(resolved.initial_query, "");
        assert!(resolved.input_title.is_none());
    }

    #[test]
    fn cli_arguments_override_the_config_file() {
        let mut raw = RawConfig::default();
        raw.provider.name = Some("duckduckgo".to_string());
        raw.ui.initial_query = Some("from config".to_string());

        let resolved = resolve(&cli(&["--provider", "ecosia", "rust"]), raw).unwrap();
        assert_eq!(resolved.provider.label, "Ecosia");
        assert_eq!(resolved.initial_query, "rust");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = resolve(&cli(&["--provider", "altavista"]), RawConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown provider"));
    }

    #[test]
    fn custom_provider_requires_both_urls() {
        let mut raw = RawConfig::default();
        raw.provider.name = Some("custom".to_string());
        raw.provider.suggest_url = Some("https://example.com/suggest".to_string());

        let err = resolve(&cli(&[]), raw).unwrap_err();
        assert!(err.to_string().contains("search_url"));
    }

    #[test]
    fn config_file_round_trips_through_the_config_crate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[provider]
name = "custom"
label = "Example"
suggest_url = "https://example.com/suggest"
search_url = "https://example.com/search"
format = "phrase-objects"

[[provider.default_results]]
name = "trending"
url = "https://example.com/trending"

[ui]
initial_query = "rust"
"#,
        )
        .unwrap();

        let raw = load_raw(&path).unwrap();
        let resolved = resolve(&cli(&[]), raw).unwrap();
        assert_eq!(resolved.provider.label, "Example");
        assert_eq!(resolved.provider.format, SuggestFormat::PhraseObjects);
        assert_eq!(resolved.provider.default_results.len(), 1);
        assert_eq!(resolved.initial_query, "rust");
    }
}

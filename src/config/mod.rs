pub mod toml_config;

use crate::core::NameProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_single_line, Validate};
use clap::Parser;
use toml_config::TomlConfig;

pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hello-greeter")]
#[command(about = "Prints a greeting")]
pub struct CliConfig {
    #[arg(long, help = "Name to greet (default: World)")]
    pub name: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub name: String,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl CliConfig {
    /// `--name` wins over the config file, which wins over `World`.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let name = self
            .name
            .clone()
            .or_else(|| {
                file.as_ref()
                    .and_then(|f| f.greeting_name().map(str::to_string))
            })
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let settings = Settings {
            name,
            log_level: file.as_ref().and_then(|f| f.log_level().map(str::to_string)),
            verbose: self.verbose,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            log_level: None,
            verbose: false,
        }
    }
}

impl NameProvider for Settings {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_single_line("name", &self.name)
    }
}

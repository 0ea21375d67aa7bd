pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::details::RecipeKey;
#[cfg(feature = "cli")]
use crate::core::matcher::MatchMode;
#[cfg(feature = "cli")]
use crate::core::pantry::Pantry;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::output::OutputFormat;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::{AppConfig, LogFormat, SourceType};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cookify-pantry")]
#[command(about = "Suggest recipes you can make from what is in your pantry")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Local catalog file (.toml or .json)
    #[arg(long, global = true, conflicts_with = "catalog_url")]
    pub catalog: Option<String>,

    /// Base URL of a remote catalog exposing /recipes and /substitutes
    #[arg(long, global = true)]
    pub catalog_url: Option<String>,

    /// Where the pantry list is stored
    #[arg(long, global = true)]
    pub pantry_file: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Match a one-off list of pantry items against the catalog
    Match {
        #[arg(long, value_delimiter = ',', required = true)]
        pantry: Vec<String>,

        /// Require exact ingredient names instead of substring matches
        #[arg(long)]
        strict: bool,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Manage the stored pantry list
    Pantry {
        #[command(subcommand)]
        action: PantryAction,
    },
    /// List catalog recipes, optionally filtered
    Browse {
        #[arg(long)]
        name: Option<String>,

        /// Exact, case-sensitive category ("All" shows every category)
        #[arg(long)]
        category: Option<String>,

        /// Culture, ignoring case ("All" or "Select" shows every culture)
        #[arg(long)]
        culture: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show one recipe's ingredients and instructions
    Show {
        /// Recipe id; takes precedence over --name
        #[arg(required_unless_present = "name")]
        id: Option<String>,

        /// Exact recipe name
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// List ingredient substitutes, optionally filtered by name
    Substitutes {
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum PantryAction {
    Add {
        item: String,
    },
    Remove {
        item: String,
    },
    List,
    /// Suggest recipes for the stored pantry
    Suggest {
        #[arg(long)]
        strict: bool,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[cfg(feature = "cli")]
impl Command {
    /// `match --pantry` 的清單，套用與儲存清單相同的規則（去除空白、忽略空項目與重複）
    pub fn one_off_pantry(&self) -> Option<Pantry> {
        match self {
            Command::Match { pantry, .. } => Some(Pantry::from_items(pantry.iter().map(String::as_str))),
            _ => None,
        }
    }

    pub fn recipe_key(&self) -> Option<RecipeKey> {
        match self {
            Command::Show { id, name, .. } => RecipeKey::from_parts(id.as_deref(), name.as_deref()),
            _ => None,
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(path) = &self.catalog {
            config.source.r#type = SourceType::File;
            config.source.path = Some(path.clone());
        } else if let Some(url) = &self.catalog_url {
            config.source.r#type = SourceType::Http;
            config.source.endpoint = Some(url.clone());
        }

        if let Some(path) = &self.pantry_file {
            config.pantry.path = Some(path.clone());
        }

        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        let strict = match &self.command {
            Command::Match { strict, .. } => *strict,
            Command::Pantry {
                action: PantryAction::Suggest { strict, .. },
            } => *strict,
            _ => false,
        };
        if strict {
            config.matching.mode = MatchMode::Exact;
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match_command() {
        let cli = CliConfig::parse_from([
            "cookify-pantry",
            "match",
            "--pantry",
            "garlic,lemon juice",
            "--format",
            "json",
        ]);

        match &cli.command {
            Command::Match { pantry, strict, format } => {
                assert_eq!(pantry, &vec!["garlic".to_string(), "lemon juice".to_string()]);
                assert!(!strict);
                assert_eq!(*format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_blank_pantry_entries_are_dropped() {
        let cli = CliConfig::parse_from(["cookify-pantry", "match", "--pantry", "garlic, ,lemon juice,,garlic"]);
        let pantry = cli.command.one_off_pantry().unwrap();
        assert_eq!(pantry.items(), &["garlic".to_string(), "lemon juice".to_string()]);

        let cli = CliConfig::parse_from(["cookify-pantry", "match", "--pantry", ","]);
        assert!(cli.command.one_off_pantry().unwrap().is_empty());
    }

    #[test]
    fn test_show_command_key() {
        let by_id = CliConfig::parse_from(["cookify-pantry", "show", "recipe_2", "--name", "Haleem"]);
        assert_eq!(by_id.command.recipe_key(), Some(RecipeKey::Id("recipe_2".to_string())));

        let by_name = CliConfig::parse_from(["cookify-pantry", "show", "--name", "Haleem"]);
        assert_eq!(by_name.command.recipe_key(), Some(RecipeKey::Name("Haleem".to_string())));

        assert!(CliConfig::try_parse_from(["cookify-pantry", "show"]).is_err());
    }

    #[test]
    fn test_browse_culture_flag() {
        let cli = CliConfig::parse_from(["cookify-pantry", "browse", "--culture", "bangladeshi"]);
        match &cli.command {
            Command::Browse { culture, category, .. } => {
                assert_eq!(culture.as_deref(), Some("bangladeshi"));
                assert!(category.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = CliConfig::parse_from([
            "cookify-pantry",
            "--catalog-url",
            "https://catalog.example.com",
            "--pantry-file",
            "/tmp/p.json",
            "pantry",
            "suggest",
            "--strict",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.source.r#type, SourceType::Http);
        assert_eq!(config.source.endpoint.as_deref(), Some("https://catalog.example.com"));
        assert_eq!(config.pantry_path(), "/tmp/p.json");
        assert_eq!(config.matching.mode, MatchMode::Exact);
    }

    #[test]
    fn test_catalog_and_catalog_url_conflict() {
        let result = CliConfig::try_parse_from([
            "cookify-pantry",
            "--catalog",
            "a.toml",
            "--catalog-url",
            "https://x.example.com",
            "browse",
        ]);
        assert!(result.is_err());
    }
}

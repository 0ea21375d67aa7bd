use clap::Parser;
use cookify_pantry::config::toml_config::{AppConfig, LogFormat};
use cookify_pantry::config::{Command, PantryAction};
use cookify_pantry::core::filter::{filter_by_name, filter_items, ItemFilter};
use cookify_pantry::core::SubstituteProvider;
use cookify_pantry::utils::output::{
    render_details, render_matches, render_recipes, render_substitutes,
};
use cookify_pantry::utils::{logger, validation::Validate};
use cookify_pantry::{
    lookup_details, CatalogSource, CliConfig, LocalPantryStore, Pantry, PantryEngine, PantryError,
    PantryMatcher, Result,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            exit_with(&e);
        }
    };

    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, config.logging.level.as_deref()),
        LogFormat::Json => logger::init_json_logger(cli.verbose, config.logging.level.as_deref()),
    }

    tracing::info!("Starting cookify-pantry");
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if let Err(e) = run(&cli, &config).await {
        exit_with(&e);
    }
}

async fn run(cli: &CliConfig, config: &AppConfig) -> Result<()> {
    let source = CatalogSource::from_config(config)?;
    let mut engine =
        PantryEngine::new(source.clone()).with_matcher(PantryMatcher::new(config.matching.mode));
    if config.matching.cache {
        engine = engine.with_cache_capacity(config.matching.cache_capacity());
    }

    match &cli.command {
        Command::Match { format, .. } => {
            let pantry = cli.command.one_off_pantry().unwrap_or_default();
            let matches = engine.suggest(pantry.items()).await?;
            println!("{}", render_matches(&matches, *format)?);
        }
        Command::Pantry { action } => {
            let store = LocalPantryStore::new(config.pantry_path());
            let mut pantry = Pantry::load(&store).await?;

            match action {
                PantryAction::Add { item } => {
                    if pantry.add(item.as_str()) {
                        pantry.save(&store).await?;
                        tracing::info!("Added '{}' to pantry", item.trim());
                        print_suggestions(&engine, &pantry).await?;
                    } else {
                        tracing::warn!("'{}' is blank or already in the pantry", item);
                    }
                }
                PantryAction::Remove { item } => {
                    if pantry.remove(item) {
                        pantry.save(&store).await?;
                        tracing::info!("Removed '{}' from pantry", item.trim());
                        print_suggestions(&engine, &pantry).await?;
                    } else {
                        tracing::warn!("'{}' is not in the pantry", item);
                    }
                }
                PantryAction::List => {
                    if pantry.is_empty() {
                        println!("Pantry is empty");
                    }
                    for item in pantry.items() {
                        println!("{}", item);
                    }
                }
                PantryAction::Suggest { format, .. } => {
                    let matches = engine.suggest(pantry.items()).await?;
                    println!("{}", render_matches(&matches, *format)?);
                }
            }
        }
        Command::Browse {
            name,
            category,
            culture,
            format,
        } => {
            let catalog = engine.catalog().await?;
            let filter = ItemFilter {
                name: name.as_deref(),
                category: category.as_deref(),
                culture: culture.as_deref(),
            };
            let visible = filter_items(catalog.as_slice(), &filter);
            println!("{}", render_recipes(&visible, *format)?);
        }
        Command::Show { format, .. } => {
            let key = cli.command.recipe_key().ok_or_else(|| PantryError::ValidationError {
                message: "Provide a recipe id or --name".to_string(),
            })?;
            let details = lookup_details(&source, &key).await?;
            println!("{}", render_details(&details, *format)?);
        }
        Command::Substitutes { name, format } => {
            let items = source.fetch_substitutes().await?;
            let visible = filter_by_name(items.as_slice(), name.as_deref().unwrap_or(""));
            println!("{}", render_substitutes(&visible, *format)?);
        }
    }

    Ok(())
}

async fn print_suggestions(engine: &PantryEngine<CatalogSource>, pantry: &Pantry) -> Result<()> {
    let matches = engine.suggest(pantry.items()).await?;
    println!("{}", render_matches(&matches, Default::default())?);
    Ok(())
}

fn exit_with(e: &PantryError) -> ! {
    tracing::error!(
        "❌ cookify-pantry failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}

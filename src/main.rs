use breed_match::{batch, cli, config, dataset, error, prompt, report};
use breed_match_common::{analyze_description, score_breeds, TraitDescriptions};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Match { description, limit, explain, json } => {
            let traits_path = config.resolve_traits_path(cli.traits.as_deref())?;
            let table = dataset::load_table(&traits_path)?;

            if !json {
                println!("{}\n", report::GREETING);
            }

            let description = match cli::join_description(&description) {
                Some(text) => text,
                None => prompt::prompt_description()?,
            };

            let preference = analyze_description(&description);
            let results = score_breeds(&preference, &table);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            println!("{}\n", report::render_preference(&preference));

            let descriptions = if explain {
                load_optional_descriptions(
                    config.resolve_descriptions_path(cli.descriptions.as_deref()).as_deref(),
                )?
            } else {
                TraitDescriptions::default()
            };
            let ctx = report::ExplainContext {
                table: &table,
                descriptions: &descriptions,
            };

            let limit = limit.unwrap_or(config.result_limit).max(1);
            println!(
                "{}",
                report::render_matches(&results, limit, explain.then_some(&ctx))
            );
        }

        Commands::Prefs { description } => {
            let description = cli::join_description(&description).unwrap_or_default();
            let preference = analyze_description(&description);
            println!("{}", report::render_preference(&preference));
        }

        Commands::Batch { input, output } => {
            let traits_path = config.resolve_traits_path(cli.traits.as_deref())?;
            let table = dataset::load_table(&traits_path)?;

            let descriptions = batch::read_descriptions(&input)?;
            let results = batch::run_batch(&descriptions, &table);
            batch::write_results(&results, output.as_deref())?;
        }

        Commands::Traits => {
            let traits_path = config.resolve_traits_path(cli.traits.as_deref())?;
            let table = dataset::load_table(&traits_path)?;
            let descriptions = load_optional_descriptions(
                config.resolve_descriptions_path(cli.descriptions.as_deref()).as_deref(),
            )?;

            let descriptions = (!descriptions.is_empty()).then_some(&descriptions);
            println!("{}", report::render_traits(&table, descriptions));
        }

        Commands::Config { set_traits, set_descriptions, set_limit, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_traits {
                config.traits_path = Some(path);
                changed = true;
            }

            if let Some(path) = set_descriptions {
                config.descriptions_path = Some(path);
                changed = true;
            }

            if let Some(limit) = set_limit {
                config.set_result_limit(limit)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  特性データ: {}", display_path(config.traits_path.as_deref()));
                println!("  説明データ: {}", display_path(config.descriptions_path.as_deref()));
                println!("  表示件数: {}", config.result_limit);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 説明データは任意。未設定なら空の辞書
fn load_optional_descriptions(path: Option<&Path>) -> Result<TraitDescriptions> {
    match path {
        Some(path) => dataset::load_descriptions(path),
        None => {
            tracing::warn!("No trait description file configured; showing trait names only");
            Ok(TraitDescriptions::default())
        }
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "未設定".to_string())
}

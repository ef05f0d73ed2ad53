use clap::Parser;
use lunch_spinner::adapters::storage::{load_roster, save_roster};
use lunch_spinner::app::commands::{list_command, spin_command, wheel_command};
use lunch_spinner::config::Command;
use lunch_spinner::domain::model::{NewRestaurant, RestaurantPatch};
use lunch_spinner::domain::ports::ConfigProvider;
use lunch_spinner::utils::{logger, validation::Validate};
use lunch_spinner::{CliConfig, DietaryFilters, LocalStore, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = cli.resolve()?;
    let store = LocalStore::new(config.data_path());
    tracing::debug!("Using restaurant file {}", store.path().display());

    let mut roster = load_roster(&store).await;

    match cli.command {
        Command::List { filters } => {
            let filters: DietaryFilters = filters.into();
            list_command(&roster, &filters, &mut std::io::stdout())?;
        }
        Command::Add {
            name,
            rating,
            vegetarian,
            halal,
        } => {
            let added = roster.add(NewRestaurant {
                name,
                rating,
                is_vegetarian: vegetarian,
                is_halal: halal,
            })?;
            println!("✅ Added {} ({})", added.name, added.id);
            save_roster(&store, &roster).await;
        }
        Command::Edit {
            id,
            name,
            rating,
            vegetarian,
            halal,
        } => {
            let patch = RestaurantPatch {
                name,
                rating,
                is_vegetarian: vegetarian,
                is_halal: halal,
            };
            let updated = roster.update(&id, patch)?;
            println!("✅ Updated {} {}", updated.name, updated.stars());
            save_roster(&store, &roster).await;
        }
        Command::Remove { id } => {
            let removed = roster.remove(&id)?;
            println!("🗑️ Removed {}", removed.name);
            save_roster(&store, &roster).await;
        }
        Command::Reset => {
            roster.reset();
            println!("✅ Restored {} default restaurants", roster.len());
            save_roster(&store, &roster).await;
        }
        Command::Spin {
            filters,
            seed,
            times,
            ..
        } => {
            let filters: DietaryFilters = filters.into();
            let mut out = std::io::stdout();
            spin_command(&roster, &filters, &config, seed, times, &mut out).await?;
        }
        Command::Wheel { filters } => {
            let filters: DietaryFilters = filters.into();
            wheel_command(&roster, &filters, &mut std::io::stdout())?;
        }
    }

    Ok(())
}

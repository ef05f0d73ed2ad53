pub mod toml_config;

pub use toml_config::SpinnerConfig;

#[cfg(feature = "cli")]
pub use cli_args::{CliConfig, Command, FilterArgs};

#[cfg(feature = "cli")]
mod cli_args {
    use super::SpinnerConfig;
    use crate::domain::model::DietaryFilters;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Args, Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "lunch-spinner")]
    #[command(about = "Let fate decide where we eat")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        /// Directory holding the saved restaurant list
        #[arg(long, global = true)]
        pub data_dir: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Copy, Default, Args)]
    pub struct FilterArgs {
        /// Only vegetarian-friendly restaurants
        #[arg(long)]
        pub vegetarian: bool,

        /// Only halal restaurants
        #[arg(long)]
        pub halal: bool,
    }

    impl From<FilterArgs> for DietaryFilters {
        fn from(args: FilterArgs) -> Self {
            DietaryFilters {
                vegetarian_only: args.vegetarian,
                halal_only: args.halal,
            }
        }
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Show the restaurant list
        List {
            #[command(flatten)]
            filters: FilterArgs,
        },
        /// Add a restaurant
        Add {
            #[arg(long)]
            name: String,
            #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=5))]
            rating: u8,
            #[arg(long)]
            vegetarian: bool,
            #[arg(long)]
            halal: bool,
        },
        /// Edit an existing restaurant
        Edit {
            id: String,
            #[arg(long)]
            name: Option<String>,
            #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
            rating: Option<u8>,
            #[arg(long)]
            vegetarian: Option<bool>,
            #[arg(long)]
            halal: Option<bool>,
        },
        /// Remove a restaurant
        Remove { id: String },
        /// Restore the default restaurant list
        Reset,
        /// Spin the wheel
        Spin {
            #[command(flatten)]
            filters: FilterArgs,
            /// Seed the draw for a reproducible result
            #[arg(long)]
            seed: Option<u64>,
            /// Number of consecutive spins
            #[arg(long, default_value = "1")]
            times: u32,
            /// Override the spin animation length
            #[arg(long)]
            duration_ms: Option<u64>,
        },
        /// Print the wheel's segment layout
        Wheel {
            #[command(flatten)]
            filters: FilterArgs,
        },
    }

    impl CliConfig {
        /// 載入 TOML 設定（若有指定）並套用命令列覆蓋
        pub fn resolve(&self) -> Result<SpinnerConfig> {
            let mut config = match &self.config {
                Some(path) => SpinnerConfig::from_file(path)?,
                None => SpinnerConfig::default(),
            };

            if let Some(data_dir) = &self.data_dir {
                config.storage.data_dir = data_dir.clone();
            }
            if let Command::Spin {
                duration_ms: Some(ms),
                ..
            } = &self.command
            {
                config.wheel.spin_duration_ms = *ms;
            }

            config.validate()?;
            Ok(config)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            if let Some(dir) = &self.data_dir {
                validate_path("data_dir", dir)?;
            }
            if let Command::Spin { times, .. } = &self.command {
                crate::utils::validation::validate_positive_number("times", u64::from(*times), 1)?;
            }
            Ok(())
        }
    }

}

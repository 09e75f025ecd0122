//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the tablekeep data directory and database.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, GlobalOptions};
use clap::Args;
use tablekeep::database::DATABASE_FILE_NAME;
use tablekeep::operations::init::{init_database, InitOptions};

/// Initialize tablekeep data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Do not add the sample reservation to an empty list
    #[arg(long)]
    no_sample: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// The global --data-dir names the directory to create. Auto-init
    /// settings do not apply here.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        let config = load_configuration(global)?;

        let options = InitOptions::new(data_dir)
            .with_storage_key(config.storage_key())
            .with_schedule(config.schedule()?)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_seed_sample(!self.no_sample)
            .with_dry_run(self.dry_run);

        let result = init_database(&options)?;

        if result.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize tablekeep in: {}", result.data_dir.display());
            if result.data_dir_created {
                println!("  - Create data directory");
            }
            if result.database_created {
                let db_path = result.data_dir.join(DATABASE_FILE_NAME);
                if self.overwrite {
                    println!("  - Recreate database: {}", db_path.display());
                } else {
                    println!("  - Create database: {}", db_path.display());
                }
            }
            if result.sample_seeded {
                println!("  - Add sample reservation");
            }
            if result.config_created {
                println!("  - Create configuration file");
            } else if self.with_config {
                println!("  - Configuration file already exists (will not overwrite)");
            }
            return Ok(());
        }

        println!("Initialized tablekeep in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if result.sample_seeded {
            println!("  - Added sample reservation");
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}

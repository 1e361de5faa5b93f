use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

use crate::cli::parser::{Cli, Commands};
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - optionally, the sample connections
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let sample = matches!(cli.command, Commands::Init { sample: true });

    // cfg.database already reflects --db / CONNECTIFY_DB / the config file
    let db_path = Config::init_all(Some(cfg.database.clone()), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing Connectify…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let mut pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", &db_path));

    ttlog_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    if sample {
        let added = AddLogic::seed_sample(&mut pool, &cfg.default_user)?;
        success(format!(
            "Added {} sample connections for user {}",
            added, cfg.default_user
        ));
    }

    println!("🎉 Connectify initialization completed!");
    Ok(())
}

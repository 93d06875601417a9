use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing worklog…");

    if !cli.test {
        let path = cfg.save()?;
        println!("📄 Config file : {}", path.display());
    }
    println!("🗄️  Database    : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;

    ttlog_soft(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("✅ Database initialized at {}", &cfg.database);
    Ok(())
}

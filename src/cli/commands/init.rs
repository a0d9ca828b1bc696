use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::kv::SqliteStore;
use crate::db::log::oplog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode) and the
/// SQLite store with its tables.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing studydesk…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let store = SqliteStore::open(&cfg.database)?;
    success(format!("Database initialized at {}", &cfg.database));

    if let Err(e) = oplog(
        &store.conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 studydesk initialization completed! Next: studydesk signin --name ...");
    Ok(())
}

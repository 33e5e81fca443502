use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::store::sqlite::init_schema;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the tables and receipts directories
///  - the SQLite ledger, when the sqlite backend is configured
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data_dir {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.data_dir {
        cfg.override_data_dir(custom);
    }

    println!("⚙️  Initializing expenselog…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Tables      : {}", cfg.tables_dir().display());
    println!("🖼️  Receipts    : {}", cfg.receipts_dir().display());

    if cfg.storage == StorageBackend::Sqlite {
        let conn = Connection::open(&cfg.database)?;
        init_schema(&conn)?;
        println!("🗄️  Ledger DB   : {}", &cfg.database);
    }

    println!("🎉 expenselog initialization completed!");
    Ok(())
}

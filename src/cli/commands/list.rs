use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use super::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let period = resolve_period(period)?;
        let store = open_store(cfg)?;
        ListLogic::list(store.as_ref(), &period)?;
    }
    Ok(())
}

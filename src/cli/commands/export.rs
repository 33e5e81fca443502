use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use super::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let period = resolve_period(period)?;
        let store = open_store(cfg)?;
        ExportLogic::export(store.as_ref(), &period, *format, file, *force)?;
    }
    Ok(())
}

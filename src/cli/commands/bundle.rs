use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bundle::BundleLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use super::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bundle {
        file,
        period,
        force,
    } = cmd
    {
        let period = resolve_period(period)?;

        // Default zip name embeds the period key, next to where the
        // user invoked the command.
        let dest = match file {
            Some(f) => f.clone(),
            None => period.bundle_file_name(),
        };

        let store = open_store(cfg)?;
        BundleLogic::bundle(store.as_ref(), &period, &dest, *force)?;
    }
    Ok(())
}

pub mod add;
pub mod bundle;
pub mod config;
pub mod export;
pub mod init;
pub mod list;

use crate::errors::{AppError, AppResult};
use crate::store::Period;
use crate::utils::date;

/// Shared `--period` resolution: `YYYY-MM` when given, the current
/// month otherwise.
pub(crate) fn resolve_period(period: &Option<String>) -> AppResult<Period> {
    match period {
        Some(p) => Period::parse(p).ok_or_else(|| AppError::InvalidPeriod(p.clone())),
        None => Ok(Period::from_date(date::today())),
    }
}

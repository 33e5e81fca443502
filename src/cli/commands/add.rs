use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::append::AppendLogic;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::record::{AttachmentData, RecordDraft};
use crate::store::open_store;
use crate::utils::date;
use crate::utils::path::{expand_tilde, extension_of};
use std::fs;

const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Record one expense, optionally attaching a receipt photo.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        category,
        reason,
        route,
        km,
        amount,
        photo,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse category
        //
        let cat = Category::from_code(category).ok_or_else(|| {
            AppError::InvalidCategory(format!(
                "Invalid category '{}'. Use a valid code such as 'diesel', 'tolls', 'meals', ...",
                category
            ))
        })?;

        //
        // 3. Validate numeric fields
        //
        if *km < 0.0 {
            return Err(AppError::InvalidValue(format!(
                "Distance must be non-negative, got {km}"
            )));
        }
        if *amount < 0.0 {
            return Err(AppError::InvalidValue(format!(
                "Amount must be non-negative, got {amount}"
            )));
        }

        //
        // 4. Read the receipt photo (optional)
        //
        let attachment = match photo {
            Some(p) => Some(read_photo(p)?),
            None => None,
        };

        //
        // 5. Execute logic
        //
        let store = open_store(cfg)?;

        let draft = RecordDraft {
            date: d,
            category: cat,
            counterparty: reason.clone(),
            route: route.clone(),
            distance_km: *km,
            amount: *amount,
        };

        AppendLogic::apply(store.as_ref(), draft, attachment)?;
    }

    Ok(())
}

fn read_photo(path: &str) -> AppResult<AttachmentData> {
    let path = expand_tilde(path);

    let extension = extension_of(&path)
        .filter(|e| PHOTO_EXTENSIONS.contains(&e.as_str()))
        .ok_or_else(|| {
            AppError::InvalidValue(format!(
                "Receipt photo must be one of {:?}: {}",
                PHOTO_EXTENSIONS,
                path.display()
            ))
        })?;

    let bytes = fs::read(&path).map_err(|source| AppError::AttachmentWrite {
        path: path.clone(),
        source,
    })?;

    Ok(AttachmentData { bytes, extension })
}

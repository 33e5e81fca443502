use crate::errors::AppResult;
use crate::store::{LedgerStore, Period};
use crate::utils::table::Table;

/// High-level listing of one period's rows.
pub struct ListLogic;

impl ListLogic {
    pub fn list(store: &dyn LedgerStore, period: &Period) -> AppResult<()> {
        let records = match store.records(period)? {
            Some(rows) if !rows.is_empty() => rows,
            _ => {
                println!("No expenses recorded for {}.", period);
                return Ok(());
            }
        };

        let mut table = Table::new(&[
            "#", "date", "category", "counterparty", "route", "km", "amount", "receipt",
        ]);

        let mut total = 0.0;
        for r in &records {
            total += r.amount;
            table.add_row(vec![
                r.sequence.to_string(),
                r.date.to_string(),
                r.category.as_str().to_string(),
                r.counterparty.clone(),
                r.route.clone(),
                format!("{:.2}", r.distance_km),
                format!("{:.2}", r.amount),
                r.attachment.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} record(s), total amount {:.2}", records.len(), total);

        Ok(())
    }
}

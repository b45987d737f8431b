//! Post-provisioning verification queries.

use crate::error::ProvisionError;
use crate::report::VerifySummary;
use crate::schema::TABLES;
use crate::DbPool;

/// Query back row counts for every provisioned table and the active module
/// titles in display order.
pub async fn summarize(pool: &DbPool) -> Result<VerifySummary, ProvisionError> {
    let mut summary = VerifySummary::default();

    for table in TABLES {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table.name))
            .fetch_one(pool)
            .await
            .map_err(|err| ProvisionError::statement(table.name, err))?;
        summary.table_counts.push((table.name.to_string(), count));
    }

    let titles: Vec<(String,)> = sqlx::query_as(
        "SELECT title FROM transformation_modules
         WHERE is_active = true
         ORDER BY order_index",
    )
    .fetch_all(pool)
    .await
    .map_err(|err| ProvisionError::statement("transformation_modules", err))?;

    summary.active_module_titles = titles.into_iter().map(|(title,)| title).collect();
    Ok(summary)
}

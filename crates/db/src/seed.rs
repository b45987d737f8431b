//! Seed-data insertion.
//!
//! Runs inside a single transaction: either the whole catalog lands or none
//! of it does. A table that already holds rows is left untouched, so custom
//! content survives re-runs. Primary keys are always database-generated.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use renovese_core::seed::{default_section_body, seed_modules, seed_templates};

use crate::error::ProvisionError;
use crate::report::ProvisionReport;
use crate::DbPool;

/// Insert the fixed catalog into every empty seed table, atomically.
pub async fn seed_all(pool: &DbPool, report: &mut ProvisionReport) -> Result<(), ProvisionError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|err| ProvisionError::statement("seed transaction", err))?;

    insert_modules_and_sections(&mut tx, report).await?;
    insert_templates(&mut tx, report).await?;

    tx.commit()
        .await
        .map_err(|err| ProvisionError::statement("seed commit", err))
}

async fn insert_modules_and_sections(
    tx: &mut Transaction<'_, Postgres>,
    report: &mut ProvisionReport,
) -> Result<(), ProvisionError> {
    if !is_empty(tx, "transformation_modules", report).await? {
        report.skipped("seed", "transformation_modules", "table not empty, left untouched");
        return Ok(());
    }

    for module in seed_modules() {
        let inserted: Result<(Uuid,), sqlx::Error> = sqlx::query_as(
            "INSERT INTO transformation_modules
                (title, description, category, estimated_duration_minutes,
                 difficulty_level, content_type, content_url, order_index)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(module.title)
        .bind(module.description)
        .bind(module.category)
        .bind(module.estimated_duration_minutes)
        .bind(module.difficulty_level)
        .bind(module.content_type)
        .bind(module.content_url)
        .bind(module.order_index)
        .fetch_one(&mut **tx)
        .await;

        let (module_id,) = match inserted {
            Ok(row) => row,
            Err(err) => {
                report.failed("seed", format!("transformation_modules: {}", module.title), &err);
                return Err(ProvisionError::statement("transformation_modules", err));
            }
        };

        // Each module starts with one editable default section.
        let section = sqlx::query(
            "INSERT INTO module_sections
                (module_id, title, content, section_type, order_index,
                 estimated_duration_minutes)
             VALUES ($1, 'Conteúdo Principal', $2, $3, 1, $4)",
        )
        .bind(module_id)
        .bind(default_section_body(&module))
        .bind(module.default_section_type())
        .bind(module.estimated_duration_minutes)
        .execute(&mut **tx)
        .await;

        if let Err(err) = section {
            report.failed("seed", format!("module_sections: {}", module.title), &err);
            return Err(ProvisionError::statement("module_sections", err));
        }

        report.applied("seed", format!("transformation_modules: {}", module.title));
    }

    Ok(())
}

async fn insert_templates(
    tx: &mut Transaction<'_, Postgres>,
    report: &mut ProvisionReport,
) -> Result<(), ProvisionError> {
    if !is_empty(tx, "content_templates", report).await? {
        report.skipped("seed", "content_templates", "table not empty, left untouched");
        return Ok(());
    }

    for template in seed_templates() {
        let result = sqlx::query(
            "INSERT INTO content_templates
                (name, description, template_type, content_template, variables)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(template.name)
        .bind(template.description)
        .bind(template.template_type)
        .bind(template.content_template)
        .bind(&template.variables)
        .execute(&mut **tx)
        .await;

        match result {
            Ok(_) => report.applied("seed", format!("content_templates: {}", template.name)),
            Err(err) => {
                report.failed("seed", format!("content_templates: {}", template.name), &err);
                return Err(ProvisionError::statement("content_templates", err));
            }
        }
    }

    Ok(())
}

async fn is_empty(
    tx: &mut Transaction<'_, Postgres>,
    table: &'static str,
    report: &mut ProvisionReport,
) -> Result<bool, ProvisionError> {
    let count: Result<(i64,), sqlx::Error> =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&mut **tx)
            .await;

    match count {
        Ok((count,)) => Ok(count == 0),
        Err(err) => {
            report.failed("seed", table, &err);
            Err(ProvisionError::statement(table, err))
        }
    }
}

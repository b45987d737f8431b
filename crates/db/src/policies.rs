//! Row-level security setup.
//!
//! Per-user tables are scoped to their owner via `auth.uid() = user_id`;
//! shared catalog tables are readable when active and fully manageable by
//! rows in `admin_users`. Both `auth.uid()` and `admin_users` belong to the
//! backend's auth subsystem and are consumed as-is.
//!
//! Postgres has no `CREATE POLICY IF NOT EXISTS`, so re-runs surface
//! SQLSTATE 42710 here; that is the expected idempotent path and is
//! recorded as skipped.

use crate::error::{is_duplicate_object, ProvisionError};
use crate::report::ProvisionReport;
use crate::schema::TABLES;
use crate::DbPool;

/// One RLS policy.
pub struct PolicyDef {
    pub table: &'static str,
    pub name: &'static str,
    pub create_sql: &'static str,
}

/// All provisioned policies.
pub const POLICIES: &[PolicyDef] = &[
    // Shared catalog tables: active rows are world-readable, admins manage.
    PolicyDef {
        table: "transformation_modules",
        name: "transformation_modules_select_active",
        create_sql: "CREATE POLICY transformation_modules_select_active
            ON transformation_modules FOR SELECT
            USING (is_active = true)",
    },
    PolicyDef {
        table: "transformation_modules",
        name: "transformation_modules_admin_all",
        create_sql: "CREATE POLICY transformation_modules_admin_all
            ON transformation_modules FOR ALL
            USING (EXISTS (
                SELECT 1 FROM admin_users
                WHERE id = auth.uid() AND is_active = true
            ))",
    },
    PolicyDef {
        table: "module_sections",
        name: "module_sections_select_active",
        create_sql: "CREATE POLICY module_sections_select_active
            ON module_sections FOR SELECT
            USING (is_active = true)",
    },
    PolicyDef {
        table: "module_sections",
        name: "module_sections_admin_all",
        create_sql: "CREATE POLICY module_sections_admin_all
            ON module_sections FOR ALL
            USING (EXISTS (
                SELECT 1 FROM admin_users
                WHERE id = auth.uid() AND is_active = true
            ))",
    },
    PolicyDef {
        table: "content_templates",
        name: "content_templates_select_active",
        create_sql: "CREATE POLICY content_templates_select_active
            ON content_templates FOR SELECT
            USING (is_active = true)",
    },
    PolicyDef {
        table: "content_templates",
        name: "content_templates_admin_all",
        create_sql: "CREATE POLICY content_templates_admin_all
            ON content_templates FOR ALL
            USING (EXISTS (
                SELECT 1 FROM admin_users
                WHERE id = auth.uid() AND is_active = true
            ))",
    },
    // Per-user tables: rows are visible and mutable only to their owner.
    PolicyDef {
        table: "user_module_progress",
        name: "user_module_progress_owner",
        create_sql: "CREATE POLICY user_module_progress_owner
            ON user_module_progress FOR ALL
            USING (auth.uid() = user_id)",
    },
    PolicyDef {
        table: "goals",
        name: "goals_owner",
        create_sql: "CREATE POLICY goals_owner
            ON goals FOR ALL
            USING (auth.uid() = user_id)",
    },
    PolicyDef {
        table: "habits",
        name: "habits_owner",
        create_sql: "CREATE POLICY habits_owner
            ON habits FOR ALL
            USING (auth.uid() = user_id)",
    },
    PolicyDef {
        table: "daily_reflections",
        name: "daily_reflections_owner",
        create_sql: "CREATE POLICY daily_reflections_owner
            ON daily_reflections FOR ALL
            USING (auth.uid() = user_id)",
    },
];

/// Enable row-level security on every provisioned table.
///
/// `ALTER TABLE ... ENABLE ROW LEVEL SECURITY` is itself idempotent; any
/// failure here (e.g. the table was never created) is fatal.
pub async fn enable_rls(pool: &DbPool, report: &mut ProvisionReport) -> Result<(), ProvisionError> {
    for table in TABLES {
        let sql = format!("ALTER TABLE {} ENABLE ROW LEVEL SECURITY", table.name);
        match sqlx::query(&sql).execute(pool).await {
            Ok(_) => report.applied("rls", table.name),
            Err(err) => {
                report.failed("rls", table.name, &err);
                return Err(ProvisionError::statement(table.name, err));
            }
        }
    }
    Ok(())
}

/// Create every policy, treating "already exists" as a skipped no-op and
/// anything else as fatal.
pub async fn apply_policies(
    pool: &DbPool,
    report: &mut ProvisionReport,
) -> Result<(), ProvisionError> {
    for policy in POLICIES {
        match sqlx::query(policy.create_sql).execute(pool).await {
            Ok(_) => report.applied("policy", policy.name),
            Err(err) if is_duplicate_object(&err) => {
                report.skipped("policy", policy.name, "already exists");
            }
            Err(err) => {
                report.failed("policy", policy.name, &err);
                return Err(ProvisionError::statement(policy.name, err));
            }
        }
    }
    Ok(())
}

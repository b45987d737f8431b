//! End-to-end provisioning tests against a real Postgres database.

use sqlx::PgPool;
use uuid::Uuid;

use renovese_db::{Provisioner, StepStatus};

async fn count(pool: &PgPool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("{table} count failed: {e}"));
    count
}

#[sqlx::test(fixtures("supabase_stub"))]
async fn test_fresh_provision_creates_full_catalog(pool: PgPool) {
    let report = Provisioner::new(pool.clone()).run().await;
    assert!(report.is_success(), "fatal: {:?}", report.fatal);
    assert_eq!(report.count(StepStatus::Failed), 0);

    // All seven tables exist.
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_name IN ('transformation_modules', 'module_sections',
                              'user_module_progress', 'goals', 'habits',
                              'daily_reflections', 'content_templates')
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(tables.len(), 7);

    assert_eq!(count(&pool, "transformation_modules").await, 5);
    assert_eq!(count(&pool, "module_sections").await, 5);
    assert_eq!(count(&pool, "content_templates").await, 3);
    assert_eq!(count(&pool, "user_module_progress").await, 0);

    let summary = report.verification.expect("verification ran");
    assert_eq!(
        summary.active_module_titles,
        vec![
            "Descobrindo Sua Autoestima",
            "Comunicação Assertiva",
            "Relacionamentos Saudáveis",
            "Inteligência Emocional",
            "Mindfulness Diário",
        ]
    );
}

#[sqlx::test(fixtures("supabase_stub"))]
async fn test_provision_is_idempotent(pool: PgPool) {
    let provisioner = Provisioner::new(pool.clone());

    let first = provisioner.run().await;
    assert!(first.is_success());

    let second = provisioner.run().await;
    assert!(second.is_success(), "fatal: {:?}", second.fatal);
    assert_eq!(second.count(StepStatus::Failed), 0);

    // Second run: every policy reports "already exists" as skipped, and
    // the seed tables are left untouched.
    let second_policies: Vec<_> = second
        .outcomes
        .iter()
        .filter(|o| o.step == "policy")
        .collect();
    assert!(!second_policies.is_empty());
    assert!(second_policies
        .iter()
        .all(|o| o.status == StepStatus::Skipped));

    assert!(second
        .outcomes
        .iter()
        .any(|o| o.step == "seed"
            && o.object == "transformation_modules"
            && o.status == StepStatus::Skipped));

    assert_eq!(count(&pool, "transformation_modules").await, 5);
    assert_eq!(count(&pool, "module_sections").await, 5);
    assert_eq!(count(&pool, "content_templates").await, 3);
}

#[sqlx::test(fixtures("supabase_stub"))]
async fn test_existing_custom_rows_survive_rerun(pool: PgPool) {
    let provisioner = Provisioner::new(pool.clone());
    provisioner.run().await;

    sqlx::query(
        "INSERT INTO transformation_modules (title, category, order_index)
         VALUES ('Módulo Personalizado', 'custom', 6)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let report = provisioner.run().await;
    assert!(report.is_success());

    // No duplicated seed rows, custom row untouched.
    assert_eq!(count(&pool, "transformation_modules").await, 6);
    let (custom,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM transformation_modules WHERE title = 'Módulo Personalizado'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(custom, 1);
}

#[sqlx::test(fixtures("supabase_stub"))]
async fn test_rls_enabled_on_every_table(pool: PgPool) {
    Provisioner::new(pool.clone()).run().await;

    let unprotected: Vec<(String,)> = sqlx::query_as(
        "SELECT relname FROM pg_class
         WHERE relname IN ('transformation_modules', 'module_sections',
                           'user_module_progress', 'goals', 'habits',
                           'daily_reflections', 'content_templates')
           AND NOT relrowsecurity",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert!(unprotected.is_empty(), "RLS missing on {unprotected:?}");
}

#[sqlx::test(fixtures("supabase_stub"))]
async fn test_progress_constraints_enforced(pool: PgPool) {
    Provisioner::new(pool.clone()).run().await;

    let (user_id,): (Uuid,) =
        sqlx::query_as("INSERT INTO auth.users (email) VALUES ('a@b.c') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
    let (module_id,): (Uuid,) =
        sqlx::query_as("SELECT id FROM transformation_modules ORDER BY order_index LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();

    // Out-of-range percentage is rejected.
    let result = sqlx::query(
        "INSERT INTO user_module_progress (user_id, module_id, progress_percentage)
         VALUES ($1, $2, 150)",
    )
    .bind(user_id)
    .bind(module_id)
    .execute(&pool)
    .await;
    assert!(renovese_db::error::is_constraint_violation(&result.unwrap_err()));

    // One row per (user, module).
    sqlx::query(
        "INSERT INTO user_module_progress (user_id, module_id, progress_percentage)
         VALUES ($1, $2, 40)",
    )
    .bind(user_id)
    .bind(module_id)
    .execute(&pool)
    .await
    .unwrap();
    let duplicate = sqlx::query(
        "INSERT INTO user_module_progress (user_id, module_id, progress_percentage)
         VALUES ($1, $2, 50)",
    )
    .bind(user_id)
    .bind(module_id)
    .execute(&pool)
    .await;
    assert!(renovese_db::error::is_constraint_violation(&duplicate.unwrap_err()));
}

#[sqlx::test(fixtures("supabase_stub"))]
async fn test_mood_rating_bound_enforced(pool: PgPool) {
    Provisioner::new(pool.clone()).run().await;

    let (user_id,): (Uuid,) =
        sqlx::query_as("INSERT INTO auth.users (email) VALUES ('d@e.f') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = sqlx::query(
        "INSERT INTO daily_reflections (user_id, content, mood_rating)
         VALUES ($1, 'dia difícil', 11)",
    )
    .bind(user_id)
    .execute(&pool)
    .await;
    assert!(renovese_db::error::is_constraint_violation(&result.unwrap_err()));

    // mood_rating is optional.
    sqlx::query("INSERT INTO daily_reflections (user_id, content) VALUES ($1, 'sem nota')")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();
}

#[sqlx::test(fixtures("supabase_stub"))]
async fn test_cascade_delete_from_module(pool: PgPool) {
    Provisioner::new(pool.clone()).run().await;

    sqlx::query("DELETE FROM transformation_modules WHERE title = 'Mindfulness Diário'")
        .execute(&pool)
        .await
        .unwrap();

    // The module's default section goes with it.
    assert_eq!(count(&pool, "transformation_modules").await, 4);
    assert_eq!(count(&pool, "module_sections").await, 4);
}

//! Table and index definitions.
//!
//! All statements are guarded with `IF NOT EXISTS` so a re-run is a no-op.
//! `auth.users` is owned by the backend's auth subsystem and is referenced,
//! never created, here.

use crate::report::ProvisionReport;
use crate::DbPool;

/// One provisioned table.
pub struct TableDef {
    pub name: &'static str,
    pub create_sql: &'static str,
    /// Per-user tables get an owner-scoped RLS policy on `user_id`;
    /// shared tables get active-read plus admin-management policies.
    pub user_owned: bool,
}

/// One provisioned index.
pub struct IndexDef {
    pub name: &'static str,
    pub create_sql: &'static str,
}

/// All provisioned tables, in dependency order (referenced tables first).
pub const TABLES: &[TableDef] = &[
    TableDef {
        name: "transformation_modules",
        user_owned: false,
        create_sql: "CREATE TABLE IF NOT EXISTS transformation_modules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            description TEXT,
            category TEXT NOT NULL DEFAULT 'personal_growth',
            estimated_duration_minutes INTEGER DEFAULT 30,
            difficulty_level TEXT DEFAULT 'beginner'
                CHECK (difficulty_level IN ('beginner', 'intermediate', 'advanced')),
            content_type TEXT DEFAULT 'article'
                CHECK (content_type IN ('article', 'video', 'exercise', 'meditation')),
            content_url TEXT,
            is_active BOOLEAN DEFAULT true,
            order_index INTEGER DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )",
    },
    TableDef {
        name: "module_sections",
        user_owned: false,
        create_sql: "CREATE TABLE IF NOT EXISTS module_sections (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            module_id UUID NOT NULL REFERENCES transformation_modules(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            section_type TEXT DEFAULT 'text'
                CHECK (section_type IN ('text', 'video', 'exercise', 'reflection', 'quiz')),
            order_index INTEGER DEFAULT 1,
            estimated_duration_minutes INTEGER DEFAULT 5,
            is_active BOOLEAN DEFAULT true,
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )",
    },
    TableDef {
        name: "user_module_progress",
        user_owned: true,
        create_sql: "CREATE TABLE IF NOT EXISTS user_module_progress (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES auth.users(id) ON DELETE CASCADE,
            module_id UUID NOT NULL REFERENCES transformation_modules(id) ON DELETE CASCADE,
            status TEXT DEFAULT 'not_started'
                CHECK (status IN ('not_started', 'in_progress', 'completed')),
            progress_percentage INTEGER DEFAULT 0
                CHECK (progress_percentage >= 0 AND progress_percentage <= 100),
            started_at TIMESTAMP WITH TIME ZONE,
            completed_at TIMESTAMP WITH TIME ZONE,
            last_accessed_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            notes TEXT DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            UNIQUE(user_id, module_id)
        )",
    },
    TableDef {
        name: "goals",
        user_owned: true,
        create_sql: "CREATE TABLE IF NOT EXISTS goals (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES auth.users(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            description TEXT,
            status TEXT DEFAULT 'active'
                CHECK (status IN ('active', 'completed', 'paused')),
            target_date DATE,
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )",
    },
    TableDef {
        name: "habits",
        user_owned: true,
        create_sql: "CREATE TABLE IF NOT EXISTS habits (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES auth.users(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            description TEXT,
            is_active BOOLEAN DEFAULT true,
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )",
    },
    TableDef {
        name: "daily_reflections",
        user_owned: true,
        create_sql: "CREATE TABLE IF NOT EXISTS daily_reflections (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES auth.users(id) ON DELETE CASCADE,
            content TEXT NOT NULL,
            mood_rating INTEGER CHECK (mood_rating >= 1 AND mood_rating <= 10),
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )",
    },
    TableDef {
        name: "content_templates",
        user_owned: false,
        create_sql: "CREATE TABLE IF NOT EXISTS content_templates (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            description TEXT,
            template_type TEXT NOT NULL,
            content_template TEXT NOT NULL,
            variables JSONB DEFAULT '{}',
            is_active BOOLEAN DEFAULT true,
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )",
    },
];

/// Lookup indexes for the admin content editor.
pub const INDEXES: &[IndexDef] = &[
    IndexDef {
        name: "idx_module_sections_module_order",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_module_sections_module_order
            ON module_sections (module_id, order_index)",
    },
    IndexDef {
        name: "idx_content_templates_type",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_content_templates_type
            ON content_templates (template_type)",
    },
];

/// Create every table and index, best-effort: a failure is recorded and the
/// remaining statements are still attempted.
pub async fn create_all(pool: &DbPool, report: &mut ProvisionReport) {
    for table in TABLES {
        match sqlx::query(table.create_sql).execute(pool).await {
            Ok(_) => report.applied("schema", table.name),
            Err(err) => report.failed("schema", table.name, &err),
        }
    }

    for index in INDEXES {
        match sqlx::query(index.create_sql).execute(pool).await {
            Ok(_) => report.applied("index", index.name),
            Err(err) => report.failed("index", index.name, &err),
        }
    }
}

//! Fixed seed catalog for a freshly provisioned database.
//!
//! Five transformation modules, one generated "Conteúdo Principal" section
//! per module, and three reusable content templates. The catalog is data,
//! not configuration: the provisioner inserts it only when the target table
//! is empty, so edits here affect fresh environments only.

use serde_json::{json, Value};

use crate::catalog::{CONTENT_TYPE_VIDEO, SECTION_TYPE_TEXT, SECTION_TYPE_VIDEO};

/// A transformation module to insert on first provisioning.
#[derive(Debug, Clone)]
pub struct SeedModule {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub estimated_duration_minutes: i32,
    pub difficulty_level: &'static str,
    pub content_type: &'static str,
    pub content_url: &'static str,
    pub order_index: i32,
}

impl SeedModule {
    /// Section type for the module's generated default section: video
    /// modules get a video section, everything else gets text.
    pub fn default_section_type(&self) -> &'static str {
        if self.content_type == CONTENT_TYPE_VIDEO {
            SECTION_TYPE_VIDEO
        } else {
            SECTION_TYPE_TEXT
        }
    }
}

/// A content template to insert on first provisioning.
#[derive(Debug, Clone)]
pub struct SeedTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub template_type: &'static str,
    pub content_template: &'static str,
    /// Placeholder name → human-readable description, stored as JSONB.
    pub variables: Value,
}

/// The five launch modules, in display order.
pub fn seed_modules() -> Vec<SeedModule> {
    vec![
        SeedModule {
            title: "Descobrindo Sua Autoestima",
            description: "Aprenda a reconhecer e valorizar suas qualidades únicas",
            category: "self_esteem",
            estimated_duration_minutes: 45,
            difficulty_level: "beginner",
            content_type: "article",
            content_url: "https://example.com/autoestima-1",
            order_index: 1,
        },
        SeedModule {
            title: "Comunicação Assertiva",
            description: "Desenvolva habilidades para se expressar com clareza e confiança",
            category: "communication",
            estimated_duration_minutes: 60,
            difficulty_level: "intermediate",
            content_type: "video",
            content_url: "https://example.com/comunicacao-1",
            order_index: 2,
        },
        SeedModule {
            title: "Relacionamentos Saudáveis",
            description: "Construa conexões mais profundas e significativas",
            category: "relationships",
            estimated_duration_minutes: 50,
            difficulty_level: "intermediate",
            content_type: "exercise",
            content_url: "https://example.com/relacionamentos-1",
            order_index: 3,
        },
        SeedModule {
            title: "Inteligência Emocional",
            description: "Compreenda e gerencie suas emoções de forma eficaz",
            category: "emotional_intelligence",
            estimated_duration_minutes: 40,
            difficulty_level: "advanced",
            content_type: "article",
            content_url: "https://example.com/inteligencia-emocional-1",
            order_index: 4,
        },
        SeedModule {
            title: "Mindfulness Diário",
            description: "Pratique a atenção plena para reduzir o estresse",
            category: "mindfulness",
            estimated_duration_minutes: 30,
            difficulty_level: "beginner",
            content_type: "meditation",
            content_url: "https://example.com/mindfulness-1",
            order_index: 5,
        },
    ]
}

/// Markdown body for a module's generated default section.
///
/// The admin panel treats this as starter content: editors replace it with
/// real material, so it documents how videos and links are embedded.
pub fn default_section_body(module: &SeedModule) -> String {
    format!(
        "# {title}\n\n\
         {description}\n\n\
         ## Objetivos deste módulo\n\n\
         Ao completar este módulo, você será capaz de:\n\
         - Compreender os conceitos fundamentais\n\
         - Aplicar as técnicas na prática\n\
         - Desenvolver novas habilidades\n\
         - Refletir sobre seu crescimento pessoal\n\n\
         ## Conteúdo Principal\n\n\
         Este é o conteúdo editável do módulo. O administrador pode modificar \
         este texto, adicionar vídeos, links e outros recursos.\n\n\
         ### Exemplo de Vídeo\n\
         Para adicionar um vídeo, cole a URL do YouTube ou Vimeo:\n\
         https://www.youtube.com/watch?v=exemplo\n\n\
         ### Exemplo de Link\n\
         [Clique aqui para recurso adicional](https://exemplo.com)\n\n\
         ### Reflexão\n\
         - O que você aprendeu com este módulo?\n\
         - Como pode aplicar isso em sua vida?\n\
         - Que próximos passos você pretende tomar?\n\n\
         *Tempo estimado: {duration} minutos*",
        title = module.title,
        description = module.description,
        duration = module.estimated_duration_minutes,
    )
}

/// The three launch content templates.
pub fn seed_templates() -> Vec<SeedTemplate> {
    vec![
        SeedTemplate {
            name: "Artigo Básico",
            description: "Template para artigos de conteúdo educativo",
            template_type: "article",
            content_template: "# {{title}}\n\n\
                {{description}}\n\n\
                ## Introdução\n\n\
                {{introduction}}\n\n\
                ## Desenvolvimento\n\n\
                {{main_content}}\n\n\
                ## Exercício Prático\n\n\
                {{exercise}}\n\n\
                ## Conclusão\n\n\
                {{conclusion}}\n\n\
                ### Para Refletir\n\
                - {{reflection_question_1}}\n\
                - {{reflection_question_2}}\n\
                - {{reflection_question_3}}",
            variables: json!({
                "title": "Título do Artigo",
                "description": "Descrição do conteúdo",
                "introduction": "Introdução ao tema",
                "main_content": "Conteúdo principal",
                "exercise": "Exercício prático",
                "conclusion": "Conclusão",
                "reflection_question_1": "Primeira questão para reflexão",
                "reflection_question_2": "Segunda questão para reflexão",
                "reflection_question_3": "Terceira questão para reflexão",
            }),
        },
        SeedTemplate {
            name: "Exercício de Reflexão",
            description: "Template para exercícios de autoconhecimento",
            template_type: "exercise",
            content_template: "# {{title}}\n\n\
                ## Objetivo\n\
                {{objective}}\n\n\
                ## Instruções\n\
                1. Reserve um tempo tranquilo para este exercício\n\
                2. Seja honesto(a) em suas respostas\n\
                3. Não há respostas certas ou erradas\n\
                4. Anote suas reflexões\n\n\
                ## Exercício\n\n\
                {{exercise_content}}\n\n\
                ### Questões para Reflexão\n\
                1. {{question_1}}\n\
                2. {{question_2}}\n\
                3. {{question_3}}\n\n\
                ## Próximos Passos\n\
                {{next_steps}}",
            variables: json!({
                "title": "Título do Exercício",
                "objective": "Objetivo do exercício",
                "exercise_content": "Conteúdo do exercício",
                "question_1": "Primeira questão",
                "question_2": "Segunda questão",
                "question_3": "Terceira questão",
                "next_steps": "Próximos passos sugeridos",
            }),
        },
        SeedTemplate {
            name: "Meditação Guiada",
            description: "Template para roteiros de meditação e atenção plena",
            template_type: "meditation",
            content_template: "# {{title}}\n\n\
                ## Preparação\n\
                {{preparation}}\n\n\
                ## Roteiro\n\n\
                {{script}}\n\n\
                ## Encerramento\n\
                {{closing}}\n\n\
                *Duração sugerida: {{duration_minutes}} minutos*",
            variables: json!({
                "title": "Título da Meditação",
                "preparation": "Instruções de preparação e postura",
                "script": "Roteiro guiado da meditação",
                "closing": "Transição de volta ao dia",
                "duration_minutes": "Duração sugerida em minutos",
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        validate_content_type, validate_difficulty_level, validate_section_type,
        VALID_CONTENT_TYPES,
    };

    #[test]
    fn test_seed_modules_fixed_catalog() {
        let modules = seed_modules();
        assert_eq!(modules.len(), 5);

        let titles: Vec<&str> = modules.iter().map(|m| m.title).collect();
        assert_eq!(
            titles,
            vec![
                "Descobrindo Sua Autoestima",
                "Comunicação Assertiva",
                "Relacionamentos Saudáveis",
                "Inteligência Emocional",
                "Mindfulness Diário",
            ]
        );
    }

    #[test]
    fn test_seed_modules_use_declared_enums() {
        for module in seed_modules() {
            validate_difficulty_level(module.difficulty_level).unwrap();
            validate_content_type(module.content_type).unwrap();
            validate_section_type(module.default_section_type()).unwrap();
        }
    }

    #[test]
    fn test_seed_modules_order_index_is_display_order() {
        let modules = seed_modules();
        for (i, module) in modules.iter().enumerate() {
            assert_eq!(module.order_index, i as i32 + 1);
        }
    }

    #[test]
    fn test_video_module_gets_video_section() {
        let modules = seed_modules();
        let video = modules.iter().find(|m| m.content_type == "video").unwrap();
        assert_eq!(video.default_section_type(), "video");
        let article = modules.iter().find(|m| m.content_type == "article").unwrap();
        assert_eq!(article.default_section_type(), "text");
    }

    #[test]
    fn test_default_section_body_mentions_module() {
        let modules = seed_modules();
        let body = default_section_body(&modules[0]);
        assert!(body.starts_with("# Descobrindo Sua Autoestima"));
        assert!(body.contains(modules[0].description));
        assert!(body.contains("Tempo estimado: 45 minutos"));
    }

    #[test]
    fn test_seed_templates_fixed_catalog() {
        let templates = seed_templates();
        assert_eq!(templates.len(), 3);
        for template in &templates {
            assert!(VALID_CONTENT_TYPES.contains(&template.template_type));
        }
    }

    #[test]
    fn test_template_placeholders_all_described() {
        // Every {{placeholder}} in the body must have a description in
        // `variables`, and vice versa.
        for template in seed_templates() {
            let variables = template.variables.as_object().unwrap();
            for (name, description) in variables {
                assert!(
                    template.content_template.contains(&format!("{{{{{name}}}}}")),
                    "template '{}' describes unused variable '{name}'",
                    template.name
                );
                assert!(description.is_string());
            }

            let mut rest = template.content_template;
            while let Some(start) = rest.find("{{") {
                let after = &rest[start + 2..];
                let end = after.find("}}").expect("unbalanced placeholder");
                let name = &after[..end];
                assert!(
                    variables.contains_key(name),
                    "template '{}' is missing a description for '{name}'",
                    template.name
                );
                rest = &after[end + 2..];
            }
        }
    }
}

//! Query normalization: turns raw user input into a discovery request.

use crate::catalog::{CategorySelection, Language};

/// Subject used when the user asks for discovery without typing anything.
pub const FALLBACK_QUERY: &str = "magic ai";

/// Number of tools the model is asked for. Not enforced on the response.
pub const DISCOVERY_COUNT: usize = 3;

/// Description length the model is asked to respect.
pub const MAX_DESCRIPTION_CHARS: usize = 150;

/// A normalized discovery request. Construction never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryRequest {
    raw_query: String,
    query: String,
    category: CategorySelection,
    language: Language,
    context: String,
}

impl DiscoveryRequest {
    /// Whitespace-only input counts as empty and is replaced by [`FALLBACK_QUERY`].
    pub fn normalize(
        query: impl Into<String>,
        category: CategorySelection,
        language: Language,
    ) -> Self {
        let raw_query = query.into();
        let trimmed = raw_query.trim();
        let query = if trimmed.is_empty() {
            FALLBACK_QUERY.to_string()
        } else {
            trimmed.to_string()
        };
        let context = context_for(&query, category, language);

        Self {
            raw_query,
            query,
            category,
            language,
            context,
        }
    }

    /// The input as the user supplied it.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// The subject actually sent, never empty.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> CategorySelection {
        self.category
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn used_fallback(&self) -> bool {
        self.raw_query.trim().is_empty()
    }

    /// Full natural-language instruction for the model.
    pub fn instruction(&self) -> String {
        match self.language {
            Language::Es => format!(
                "Eres un experto en herramientas de Inteligencia Artificial. \
Tu tarea es descubrir {count} herramientas innovadoras y útiles basadas en información actual de la web.\n\n\
CRITERIO DE BÚSQUEDA:\n\
Utiliza Google Search para encontrar las herramientas más recientes para {context}.\n\n\
REQUISITOS DE RESPUESTA:\n\
1. Las herramientas deben tener al menos una opción gratuita (Free o Freemium).\n\
2. El enlace debe ser real y directo.\n\
3. La descripción debe ser concisa (máximo {max} caracteres) y destacar un caso de uso real.\n\n\
Responde EXCLUSIVAMENTE en formato JSON siguiendo el esquema proporcionado.",
                count = DISCOVERY_COUNT,
                context = self.context,
                max = MAX_DESCRIPTION_CHARS,
            ),
            Language::En => format!(
                "You are an expert in Artificial Intelligence tools. \
Your task is to discover {count} innovative and useful tools based on current information from the web.\n\n\
SEARCH CRITERIA:\n\
Use Google Search to find the most recent tools for {context}.\n\n\
RESPONSE REQUIREMENTS:\n\
1. Every tool must have at least one free option (Free or Freemium).\n\
2. The link must be real and direct.\n\
3. The description must be concise (at most {max} characters) and highlight a real use case.\n\n\
Respond EXCLUSIVELY in JSON following the provided schema.",
                count = DISCOVERY_COUNT,
                context = self.context,
                max = MAX_DESCRIPTION_CHARS,
            ),
        }
    }
}

fn context_for(query: &str, category: CategorySelection, language: Language) -> String {
    match (category, language) {
        (CategorySelection::All, Language::Es) => {
            format!("la intención de búsqueda general: \"{}\"", query)
        }
        (CategorySelection::Only(c), Language::Es) => format!(
            "la categoría específica \"{}\" y relacionada con: \"{}\"",
            c.label_in(language),
            query
        ),
        (CategorySelection::All, Language::En) => {
            format!("the general search intent: \"{}\"", query)
        }
        (CategorySelection::Only(c), Language::En) => format!(
            "the specific category \"{}\" related to: \"{}\"",
            c.label_in(language),
            query
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_empty_query_uses_fallback() {
        let request = DiscoveryRequest::normalize("", CategorySelection::All, Language::Es);
        assert!(request.used_fallback());
        assert_eq!(request.query(), FALLBACK_QUERY);
        assert!(request.context().contains("\"magic ai\""));
        assert!(!request.context().contains("\"\""));
    }

    #[test]
    fn test_whitespace_query_uses_fallback() {
        let request = DiscoveryRequest::normalize("   ", CategorySelection::All, Language::En);
        assert_eq!(request.query(), FALLBACK_QUERY);
        assert_eq!(request.raw_query(), "   ");
    }

    #[test]
    fn test_all_categories_context() {
        let request = DiscoveryRequest::normalize("video", CategorySelection::All, Language::Es);
        assert!(!request.used_fallback());
        assert_eq!(
            request.context(),
            "la intención de búsqueda general: \"video\""
        );
    }

    #[test]
    fn test_specific_category_context() {
        let request =
            DiscoveryRequest::normalize("podcast", Category::Audio.into(), Language::Es);
        assert_eq!(
            request.context(),
            "la categoría específica \"Audio y Música\" y relacionada con: \"podcast\""
        );

        let request =
            DiscoveryRequest::normalize("podcast", Category::Audio.into(), Language::En);
        assert_eq!(
            request.context(),
            "the specific category \"Audio & Music\" related to: \"podcast\""
        );
    }

    #[test]
    fn test_instruction_embeds_context_and_limits() {
        let request = DiscoveryRequest::normalize("slides", CategorySelection::All, Language::Es);
        let instruction = request.instruction();
        assert!(instruction.contains(request.context()));
        assert!(instruction.contains("3 herramientas"));
        assert!(instruction.contains("máximo 150 caracteres"));
        assert!(instruction.contains("Google Search"));
    }
}

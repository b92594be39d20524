//! Curated tools shipped with the application.

use super::{Category, PricingTier, ToolRecord};

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&q=80&w=600",
        photo
    )
}

/// Seed list for [`Catalog::builtin`](super::Catalog::builtin), in display order.
pub fn builtin_tools() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new("chatgpt", "ChatGPT (GPT-4o mini)", Category::Text, PricingTier::Freemium)
            .description("El modelo de lenguaje más popular del mundo. Ideal para redacción creativa, depuración de código y aprendizaje interactivo.")
            .url("https://chat.openai.com")
            .pricing_note("Gratis con límites en modelos avanzados.")
            .image_url(unsplash("photo-1677442136019-21780ecad995")),
        ToolRecord::new("claude", "Claude 3.5 Sonnet", Category::Text, PricingTier::Freemium)
            .description("La IA de Anthropic que destaca por su razonamiento ético, escritura natural y capacidad de análisis de documentos extensos.")
            .url("https://claude.ai")
            .pricing_note("Acceso gratuito con cuota diaria de mensajes.")
            .image_url(unsplash("photo-1614741118887-7a4ee193a5fa")),
        ToolRecord::new("deepl-write", "DeepL Write", Category::Text, PricingTier::Free)
            .description("Asistente de escritura que mejora la gramática, el estilo y el tono de tus textos en varios idiomas con precisión quirúrgica.")
            .url("https://www.deepl.com/write")
            .pricing_note("Uso gratuito ilimitado para textos cortos.")
            .image_url(unsplash("photo-1455390582262-044cdead277a")),
        ToolRecord::new("quillbot", "Quillbot", Category::Text, PricingTier::Freemium)
            .description("Herramienta de parafraseo y resumen que ayuda a reescribir textos manteniendo el significado original.")
            .url("https://quillbot.com")
            .pricing_note("Plan gratuito con límite de palabras.")
            .image_url(unsplash("photo-1512314889357-e157c22f938d")),
        ToolRecord::new("leonardo", "Leonardo.ai", Category::Image, PricingTier::Freemium)
            .description("Crea activos visuales de alta calidad con un control excepcional sobre el estilo, la iluminación y la composición.")
            .url("https://leonardo.ai")
            .pricing_note("150 tokens gratuitos cada 24 horas.")
            .image_url(unsplash("photo-1620641788421-7a1c342ea42e")),
        ToolRecord::new("playground-ai", "Playground AI", Category::Image, PricingTier::Freemium)
            .description("Plataforma versátil para generar y editar imágenes con Stable Diffusion, permitiendo hasta 50 imágenes diarias gratis.")
            .url("https://playgroundai.com")
            .pricing_note("50 imágenes gratis al día.")
            .image_url(unsplash("photo-1547891269-0552d11f21c6")),
        ToolRecord::new("ms-designer", "Microsoft Designer", Category::Image, PricingTier::Free)
            .description("Crea diseños gráficos, logos e ilustraciones fotorrealistas con DALL-E 3 de forma totalmente integrada y gratuita.")
            .url("https://designer.microsoft.com")
            .pricing_note("Gratis con cuenta de Microsoft.")
            .image_url(unsplash("photo-1558655146-d09347e92766")),
        ToolRecord::new("luma-dream", "Luma Dream Machine", Category::Video, PricingTier::Freemium)
            .description("Generador de video de alta fidelidad capaz de crear escenas realistas de 5 segundos a partir de texto o imágenes.")
            .url("https://lumalabs.ai/dream-machine")
            .pricing_note("30 generaciones gratuitas al mes.")
            .image_url(unsplash("photo-1536240478700-b869070f9279")),
        ToolRecord::new("pika", "Pika Art", Category::Video, PricingTier::Freemium)
            .description("Plataforma líder en video generativo que permite animar cualquier objeto o escena con una fluidez asombrosa.")
            .url("https://pika.art")
            .pricing_note("Sistema de créditos recargables diariamente.")
            .image_url(unsplash("photo-1492691527719-9d1e07e534b4")),
        ToolRecord::new("heygen", "HeyGen", Category::Video, PricingTier::Freemium)
            .description("Crea videos con avatares de IA realistas que hablan en múltiples idiomas con sincronización labial perfecta.")
            .url("https://www.heygen.com")
            .pricing_note("1 crédito gratis para prueba.")
            .image_url(unsplash("photo-1485846234645-a62644f84728")),
        ToolRecord::new("suno-v3", "Suno AI", Category::Audio, PricingTier::Freemium)
            .description("Capaz de crear canciones completas (letra, melodía y voz) con calidad de estudio en segundos.")
            .url("https://suno.com")
            .pricing_note("50 créditos diarios gratuitos.")
            .image_url(unsplash("photo-1514525253344-9914f2558a37")),
        ToolRecord::new("adobe-podcast", "Adobe Podcast Enhance", Category::Audio, PricingTier::Free)
            .description("Elimina el ruido de fondo y mejora la calidad de tu voz para que parezca grabada en un estudio profesional.")
            .url("https://podcast.adobe.com/enhance")
            .pricing_note("Uso gratuito para archivos MP3/WAV.")
            .image_url(unsplash("photo-1478737270239-2f02b77fc618")),
        ToolRecord::new("cursor", "Cursor Editor", Category::Coding, PricingTier::Freemium)
            .description("El editor de código (fork de VS Code) diseñado específicamente para trabajar con IA integrada en el flujo de trabajo.")
            .url("https://cursor.sh/pricing")
            .pricing_note("2000 peticiones gratis al mes.")
            .image_url(unsplash("photo-1542831371-29b0f74f9713")),
        ToolRecord::new("blackbox-ai", "Blackbox AI", Category::Coding, PricingTier::Freemium)
            .description("Extensión de autocompletado de código y búsqueda de funciones que acelera el desarrollo significativamente.")
            .url("https://www.blackbox.ai")
            .pricing_note("Versión gratuita potente para devs.")
            .image_url(unsplash("photo-1555066931-4365d14bab8c")),
        ToolRecord::new("perplexity", "Perplexity AI", Category::Research, PricingTier::Free)
            .description("El \"Google Killer\". Un motor de respuestas que cita fuentes reales y permite navegar por internet en tiempo real.")
            .url("https://www.perplexity.ai")
            .pricing_note("Búsquedas estándar ilimitadas gratuitas.")
            .image_url(unsplash("photo-1507413245164-6160d8298b31")),
        ToolRecord::new("consensus", "Consensus", Category::Research, PricingTier::Freemium)
            .description("Buscador científico que utiliza IA para encontrar respuestas basadas en evidencia en más de 200 millones de artículos.")
            .url("https://consensus.app")
            .pricing_note("Búsquedas ilimitadas en plan base.")
            .image_url(unsplash("photo-1532012197267-da84d127e765")),
        ToolRecord::new("gamma", "Gamma App", Category::Research, PricingTier::Freemium)
            .description("Genera presentaciones, documentos y páginas web completas en segundos con solo escribir una idea.")
            .url("https://gamma.app")
            .pricing_note("400 créditos gratuitos al inicio.")
            .image_url(unsplash("photo-1557804506-669a67965ba0")),
        ToolRecord::new("midjourney", "Midjourney v6", Category::Premium, PricingTier::Paid)
            .description("Líder indiscutible en generación de arte digital fotorrealista y estilizado mediante prompts avanzados en Discord.")
            .url("https://www.midjourney.com/plans")
            .pricing_note("Desde $10/mes. La suscripción es necesaria.")
            .image_url(unsplash("photo-1618005182384-a83a8bd57fbe")),
        ToolRecord::new("jasper", "Jasper AI", Category::Premium, PricingTier::Paid)
            .description("Plataforma empresarial para la creación de contenidos de marketing, optimizada para SEO y voz de marca personalizada.")
            .url("https://www.jasper.ai/pricing")
            .pricing_note("Desde $39/mes. Enfoque profesional.")
            .image_url(unsplash("photo-1454165833767-027fffd30357")),
    ]
}

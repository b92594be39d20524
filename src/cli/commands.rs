use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use neuria::{
    Catalog, CatalogFilter, CatalogView, ConfigProvider, DiscoveryPolicy, Error,
    FileConfigProvider, GeminiDiscoverer, GeminiLogoGenerator, Hub, Language, LogoCache,
    LogoImage, Profile, Result, Settings, ToolRecord,
};
use serde_json::json;

use super::args::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    let path = state_path(cli.state_file)?;
    tracing::debug!(path = %path.display(), "Using state file");
    let store: Arc<dyn ConfigProvider> = Arc::new(FileConfigProvider::new(path));
    let profile = Profile::new(store.clone());

    match cli.command {
        Commands::List {
            search,
            category,
            price,
            json,
        } => {
            let view = CatalogFilter::new(search, category, price).view(Catalog::builtin());
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view, profile.language().await);
            }
        }

        Commands::Discover {
            query,
            category,
            lang,
            enforce,
            json,
        } => {
            let language = match lang {
                Some(language) => language,
                None => profile.language().await,
            };
            let policy = if enforce {
                DiscoveryPolicy::Enforce
            } else {
                DiscoveryPolicy::TrustModel
            };
            let settings = Settings::from_env().await?;
            let discoverer = GeminiDiscoverer::from_settings(&settings)?
                .with_language(language)
                .with_policy(policy);

            let hub = Hub::with_builtin(Arc::new(discoverer));
            hub.set_search(query.unwrap_or_default()).await;
            hub.set_category(category).await;
            hub.discover().await;
            let state = hub.state().await;

            if json {
                let out = json!({
                    "tools": state.discovered(),
                    "sources": state.sources(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if state.discovered().is_empty() {
                println!("No tools found.");
            } else {
                for tool in state.discovered() {
                    println!("{}  [{}]  {}", tool.name, tool.category, tool.pricing_note);
                    println!("  {}", tool.description);
                    println!("  {}", tool.url);
                    println!();
                }
                if !state.sources().is_empty() {
                    println!("Sources:");
                    for source in state.sources() {
                        println!("  {} - {}", source.title, source.url);
                    }
                }
            }
        }

        Commands::Logo { refresh, out } => {
            let settings = Settings::from_env().await?;
            let generator = GeminiLogoGenerator::from_settings(&settings)?;
            let cache = LogoCache::new(store.clone(), Arc::new(generator));

            let image = if refresh {
                cache.refresh().await
            } else {
                cache.get_or_generate().await
            };
            let Some(image) = image else {
                eprintln!("No logo could be generated.");
                return Ok(());
            };

            match out {
                Some(path) => {
                    let path = path.unwrap_or_else(|| default_logo_path(&image));
                    let bytes = image.decode()?;
                    tokio::fs::write(&path, &bytes).await?;
                    println!("Wrote {} bytes to {}", bytes.len(), path.display());
                }
                None => println!("{}", image.to_data_uri()),
            }
        }

        Commands::Register { email } => {
            profile.register(&email, Utc::now()).await?;
            let trial = profile.trial(Utc::now()).await;
            println!(
                "Registered {}. Trial: {}",
                email.trim(),
                trial.label(profile.language().await)
            );
        }

        Commands::Status { json } => {
            let language = profile.language().await;
            let user = profile.user().await;
            let trial = profile.trial(Utc::now()).await;

            if json {
                let out = json!({
                    "user": user,
                    "language": language,
                    "paid": profile.is_paid().await,
                    "trial": trial,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("User:     {}", user.as_deref().unwrap_or("-"));
                println!("Language: {}", language);
                println!("Trial:    {}", trial.label(language));
            }
        }

        Commands::Lang { language } => {
            profile.set_language(language).await?;
            println!("Language set to {}", language);
        }

        Commands::Paid => {
            profile.set_paid().await?;
            println!("Profile marked as paid.");
        }

        Commands::Reset => {
            profile.clear().await?;
            println!("Profile cleared.");
        }
    }

    Ok(())
}

fn state_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    directories::ProjectDirs::from("", "", "neuria")
        .map(|dirs| dirs.data_dir().join("state.json"))
        .ok_or_else(|| Error::Config("could not determine a data directory".into()))
}

fn default_logo_path(image: &LogoImage) -> PathBuf {
    PathBuf::from(format!("neuria-logo.{}", image.extension()))
}

fn print_view(view: &CatalogView<'_>, language: Language) {
    if view.is_empty() {
        println!("No tools match the current filters.");
        return;
    }

    match view {
        CatalogView::Grouped(groups) => {
            for group in groups {
                println!("{} ({})", group.category.label_in(language), group.tools.len());
                println!("{}", "─".repeat(60));
                for tool in &group.tools {
                    print_tool(tool);
                }
                println!();
            }
        }
        CatalogView::Flat(tools) => {
            for tool in tools {
                print_tool(tool);
            }
        }
    }
}

fn print_tool(tool: &ToolRecord) {
    println!(
        "{:<18} {:<9} {}",
        tool.name,
        tool.pricing_tier.as_str(),
        tool.url
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logo_path_follows_mime_type() {
        let png = LogoImage::new("image/png", "aGVsbG8=");
        assert_eq!(default_logo_path(&png), PathBuf::from("neuria-logo.png"));

        let jpeg = LogoImage::new("image/jpeg", "aGVsbG8=");
        assert_eq!(default_logo_path(&jpeg), PathBuf::from("neuria-logo.jpg"));
    }
}

use anyhow::{Context, Result};
use clay_blog_core::load_site;
use clay_blog_generator::{RenderOptions, generate_site};
use std::fs;
use std::path::PathBuf;

/// Route manifest written next to the pages
pub const MANIFEST_FILE: &str = "routes.json";

/// Build static site for deployment
pub async fn run(config: Option<PathBuf>, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    match &config {
        Some(path) => println!("   Source: {}", path.display()),
        None => println!("   Source: built-in sample content"),
    }
    println!("   Output: {}", output.display());
    println!();

    if let Some(path) = &config
        && !path.exists()
    {
        anyhow::bail!(
            "site.toml not found: {}\nRun 'clay-blog init <dir>' first",
            path.display()
        );
    }

    let site = load_site(config.as_deref()).context("Failed to load site configuration")?;

    println!("✓ Loaded: {}", site.profile.title);
    println!("  Articles: {}", site.articles.len());
    println!();

    println!("📁 Creating output directory...");
    fs::create_dir_all(&output).context("Failed to create output directory")?;

    println!("📄 Rendering pages...");
    let generated = generate_site(&site, RenderOptions::new(false));
    for page in &generated.pages {
        let target = output.join(&page.file);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, &page.html)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::debug!(path = %page.path, file = %page.file, "wrote page");
    }
    println!("   ✓ Rendered {} pages", generated.pages.len());

    println!("🗺  Writing {}...", MANIFEST_FILE);
    let manifest =
        serde_json::to_string_pretty(&generated.pages).context("Failed to serialize routes")?;
    fs::write(output.join(MANIFEST_FILE), manifest)
        .with_context(|| format!("Failed to write {}", MANIFEST_FILE))?;
    println!("   ✓ Wrote {}", MANIFEST_FILE);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clay_blog_core::config::to_site_toml;
    use clay_blog_core::sample::sample_site;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_sample_site() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("dist");

        run(None, output.clone()).await.unwrap();

        for file in [
            "index.html",
            "about/index.html",
            "blog/index.html",
            "blog/getting-started-with-nextjs/index.html",
            "blog/exploring-react-server-components/index.html",
            "blog/tailwindcss-best-practices/index.html",
            "404.html",
        ] {
            assert!(output.join(file).is_file(), "missing {}", file);
        }

        let article =
            fs::read_to_string(output.join("blog/getting-started-with-nextjs/index.html")).unwrap();
        assert!(article.contains("<title>Next.js 15入門指南 | Clay Blog</title>"));
        assert!(!article.contains("/_reload"));

        let not_found = fs::read_to_string(output.join("404.html")).unwrap();
        assert!(not_found.contains("404"));
    }

    #[tokio::test]
    async fn test_build_writes_route_manifest() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("dist");

        run(None, output.clone()).await.unwrap();

        let manifest = fs::read_to_string(output.join(MANIFEST_FILE)).unwrap();
        let routes: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        let routes = routes.as_array().unwrap();
        assert_eq!(routes.len(), 7);

        let article = routes
            .iter()
            .find(|r| r["path"] == "/blog/tailwindcss-best-practices")
            .unwrap();
        assert_eq!(article["status"], "ok");
        assert_eq!(article["metadata"]["openGraph"]["type"], "article");
        assert_eq!(article["metadata"]["openGraph"]["publishedTime"], "2025-03-20");
        assert!(article.get("html").is_none());
    }

    #[tokio::test]
    async fn test_build_from_config_file() {
        let dir = TempDir::new().unwrap();
        let mut site = sample_site();
        site.profile.title = "Custom | Blog".to_string();
        let config = dir.path().join("site.toml");
        fs::write(&config, to_site_toml(&site).unwrap()).unwrap();
        let output = dir.path().join("dist");

        run(Some(config), output.clone()).await.unwrap();

        let home = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(home.contains("<title>Custom | Blog</title>"));
    }

    #[tokio::test]
    async fn test_build_missing_config() {
        let dir = TempDir::new().unwrap();
        let result = run(Some(dir.path().join("nope.toml")), dir.path().join("dist")).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("site.toml not found"));
    }
}

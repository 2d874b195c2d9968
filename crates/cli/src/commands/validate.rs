use anyhow::Context;
use clay_blog_core::parse_site_toml;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let site = parse_site_toml(&path)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    println!("✓ site.toml valid");
    println!("  Site: {}", site.profile.title);
    println!("  Navigation: {} entries", site.nav.len());
    println!("  Articles: {}", site.articles.len());
    for slug in site.articles.slugs() {
        println!("    /blog/{}", slug);
    }

    Ok(())
}

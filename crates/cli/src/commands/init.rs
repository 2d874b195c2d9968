use anyhow::{Context, Result};
use clay_blog_core::config::to_site_toml;
use clay_blog_core::sample::sample_site;
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "site.toml";

const HEADER: &str = "\
# Site configuration for clay-blog
#
# Article bodies are plain text: lines starting with '# ' and '## ' become
# headings, lines starting with ``` are shown as code markers, every other
# non-blank line is a paragraph. Set `renderer = \"commonmark\"` under [site]
# to render bodies as CommonMark instead. Article dates are YYYY-MM-DD,
# quoted or as a bare TOML date.

";

/// Initialize a site directory with a site.toml holding the sample content.
///
/// Refuses to overwrite an existing site.toml.
pub async fn run(path: PathBuf) -> Result<()> {
    println!("🌱 Initializing site in {}", path.display());

    let target = path.join(CONFIG_FILE);
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or choose another directory.",
            target.display()
        );
    }

    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let toml = to_site_toml(&sample_site()).context("Failed to serialize sample site")?;
    fs::write(&target, format!("{}{}", HEADER, toml))
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("   ✓ Created {}", target.display());
    println!();
    println!("Next steps:");
    println!("   1. Edit {} with your own articles", target.display());
    println!("   2. clay-blog preview --config {}", target.display());
    println!("   3. clay-blog build --config {} --output dist", target.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clay_blog_core::parse_site_toml;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_parseable_sample() {
        let dir = TempDir::new().unwrap();
        let site_dir = dir.path().join("my-blog");

        run(site_dir.clone()).await.unwrap();

        let site = parse_site_toml(site_dir.join(CONFIG_FILE)).unwrap();
        assert_eq!(site, sample_site());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(CONFIG_FILE);
        fs::write(&target, "keep me").unwrap();

        let result = run(dir.path().to_path_buf()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
    }
}

//! Page bodies. Each function returns the markup placed inside `<main>`.

use crate::components::{content_blocks, tag_list};
use clay_blog_core::{Article, RECENT_ARTICLE_COUNT, Site};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

pub fn home(site: &Site) -> String {
    let home = &site.home;

    let recent: String = site
        .articles
        .recent(RECENT_ARTICLE_COUNT)
        .iter()
        .map(|article| {
            format!(
                r#"<a href="{href}" class="card recent-article">
                    <h3>{title}</h3>
                    <p>{description}</p>
                    <div class="text-muted">{date}</div>
                </a>"#,
                href = attr(&article.href()),
                title = text(&article.title),
                description = text(&article.description),
                date = article.iso_date(),
            )
        })
        .collect();

    let skills: String = home
        .skills
        .iter()
        .map(|skill| format!(r#"<div class="skill"><h3>{}</h3></div>"#, text(skill)))
        .collect();

    format!(
        r#"<section class="hero">
            <h1>{headline}<span class="text-blue-600">{highlight}</span></h1>
            <p>{tagline}</p>
            <div class="actions">
                <a href="/blog" class="btn btn-primary">瀏覽所有文章</a>
                <a href="/about" class="btn">關於作者</a>
            </div>
        </section>
        <section class="recent">
            <h2>最新文章</h2>
            <a href="/blog" class="text-blue-600">查看全部 →</a>
            <div class="grid grid-3">{recent}</div>
        </section>
        <section class="skills">
            <h2>技術專長</h2>
            <div class="grid grid-4">{skills}</div>
        </section>"#,
        headline = text(&home.headline),
        highlight = text(&home.highlight),
        tagline = text(&home.tagline),
        recent = recent,
        skills = skills,
    )
}

pub fn about(site: &Site) -> String {
    let about = &site.about;

    let intro: String = about
        .intro
        .iter()
        .map(|paragraph| format!("<p>{}</p>", text(paragraph)))
        .collect();
    let skills: String = about
        .skills
        .iter()
        .map(|skill| format!("<li>{}</li>", text(skill)))
        .collect();
    let contacts: String = about
        .contacts
        .iter()
        .map(|contact| {
            let target = if contact.is_external() {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(
                r#"<li>{}: <a href="{}" class="text-blue-600"{}>{}</a></li>"#,
                text(&contact.label),
                attr(&contact.href),
                target,
                text(&contact.text)
            )
        })
        .collect();

    format!(
        r#"<div class="prose">
            <h1>{title}</h1>
            {intro}
            <h2>專業技能</h2>
            <ul>{skills}</ul>
            <h2>聯絡方式</h2>
            <p>{contact_intro}</p>
            <ul>{contacts}</ul>
        </div>"#,
        title = text(&about.title),
        intro = intro,
        skills = skills,
        contact_intro = text(&about.contact_intro),
        contacts = contacts,
    )
}

pub fn blog(site: &Site) -> String {
    let cards: String = site
        .articles
        .all()
        .iter()
        .map(|article| {
            format!(
                r#"<article class="card">
                    {tags}
                    <h2><a href="{href}">{title}</a></h2>
                    <p>{description}</p>
                    <div class="text-muted">{date}</div>
                </article>"#,
                tags = tag_list(&article.tags),
                href = attr(&article.href()),
                title = text(&article.title),
                description = text(&article.description),
                date = article.iso_date(),
            )
        })
        .collect();

    format!(
        r#"<h1>我的文章</h1>
        <p>在這裡分享我對網頁開發、程式設計與技術趨勢的想法與心得。</p>
        <div class="grid">{}</div>"#,
        cards
    )
}

pub fn article(site: &Site, article: &Article) -> String {
    let blocks = site.renderer.classifier().to_blocks(&article.content);

    format!(
        r#"<article class="article">
            <a href="/blog" class="text-blue-600">← 返回所有文章</a>
            <h1>{title}</h1>
            <div class="text-muted"><time datetime="{date}">{date}</time></div>
            {tags}
            <div class="prose">
{content}
            </div>
        </article>"#,
        title = text(&article.title),
        date = article.iso_date(),
        tags = tag_list(&article.tags),
        content = content_blocks(&blocks),
    )
}

pub fn article_not_found() -> String {
    r#"<div class="not-found">
            <h1>404</h1>
            <p>無法找到請求的文章</p>
            <a href="/blog" class="text-blue-600">← 返回所有文章</a>
        </div>"#
        .to_string()
}

pub fn page_not_found() -> String {
    r#"<div class="not-found">
            <h1>404</h1>
            <p>無法找到請求的頁面</p>
            <a href="/" class="text-blue-600">← 返回首頁</a>
        </div>"#
        .to_string()
}

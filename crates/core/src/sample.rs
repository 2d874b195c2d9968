//! Built-in sample content, used when no `site.toml` is given.

use crate::catalog::ArticleCatalog;
use crate::types::*;
use chrono::NaiveDate;

pub fn sample_site() -> Site {
    Site {
        profile: SiteProfile {
            name: "Clay".to_string(),
            title: "Clay | 個人部落格".to_string(),
            description: "一個使用Next.js 15和MDX構建的精緻個人部落格".to_string(),
            lang: "zh-TW".to_string(),
            brand: "Clay Blog".to_string(),
        },
        nav: vec![
            NavigationEntry::new("/about", "關於我"),
            NavigationEntry::new("/blog", "我的文章"),
        ],
        home: HomePage {
            headline: "Clay的個人".to_string(),
            highlight: "部落格".to_string(),
            tagline: "分享關於前端開發、網頁設計和軟體工程的心得與技術文章".to_string(),
            skills: strings(&["React & Next.js", "UI/UX設計", "效能優化", "內容創作"]),
        },
        about: AboutPage {
            title: "關於我".to_string(),
            description: "了解關於Clay的個人介紹、背景和專業技能".to_string(),
            intro: strings(&[
                "嗨！我是Clay，一位熱衷於網頁開發和技術寫作的軟體工程師。",
                "我專注於使用現代前端技術建構高效能、可擴展的網頁應用程式。特別熟悉Next.js、React和TypeScript等技術棧。目前主要關注於Web Performance優化、SSR/SSG策略以及使用者體驗設計。",
            ]),
            skills: strings(&[
                "前端開發：React, Next.js, TypeScript, Tailwind CSS",
                "後端技術：Node.js, Express, GraphQL, REST API設計",
                "開發工具：Git, Jest, GitHub Actions, Webpack, Vite",
                "效能優化：網頁性能分析、SEO最佳化、核心網頁指標(CWV)優化",
            ]),
            contact_intro: "歡迎透過以下方式與我聯繫，討論項目合作或分享技術心得：".to_string(),
            contacts: vec![
                contact("Email", "example@clay.blog", "mailto:example@clay.blog"),
                contact("GitHub", "github.com/clay", "https://github.com/clay"),
                contact(
                    "LinkedIn",
                    "linkedin.com/in/clay",
                    "https://linkedin.com/in/clay",
                ),
            ],
        },
        articles: ArticleCatalog::new(sample_articles()),
        renderer: RendererKind::Lines,
    }
}

fn sample_articles() -> Vec<Article> {
    vec![
        article(
            "getting-started-with-nextjs",
            "Next.js 15入門指南",
            "了解Next.js 15的新特性與如何開始你的第一個專案",
            (2025, 5, 8),
            &["Next.js", "React", "前端開發"],
            NEXTJS_CONTENT,
        ),
        article(
            "exploring-react-server-components",
            "探索React Server Components",
            "深入了解React Server Components如何改變前端開發模式",
            (2025, 4, 15),
            &["React", "Server Components", "效能優化"],
            RSC_CONTENT,
        ),
        article(
            "tailwindcss-best-practices",
            "Tailwind CSS最佳實踐",
            "提升你的Tailwind CSS開發效率與代碼品質的技巧與策略",
            (2025, 3, 20),
            &["CSS", "Tailwind", "前端設計"],
            TAILWIND_CONTENT,
        ),
    ]
}

fn article(
    slug: &str,
    title: &str,
    description: &str,
    (year, month, day): (i32, u32, u32),
    tags: &[&str],
    content: &str,
) -> Article {
    Article {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        tags: strings(tags),
        content: content.to_string(),
    }
}

fn contact(label: &str, text: &str, href: &str) -> Contact {
    Contact {
        label: label.to_string(),
        text: text.to_string(),
        href: href.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const NEXTJS_CONTENT: &str = r##"
# Next.js 15入門指南

Next.js 15是一個革命性的版本，帶來了許多令人興奮的新功能和改進。本文將帶你了解這些新特性，並指導你如何開始你的第一個Next.js 15專案。

## 主要新特性

1. **異步API**: params和searchParams現在是Promise，需要使用await解析
2. **Turbopack穩定版**: 更快的開發體驗
3. **React 19支持**: 支持React 19的新特性
4. **改進的緩存機制**: 對渲染和緩存模型進行了優化

## 安裝與設置

使用以下命令創建一個新的Next.js 15專案:

```bash
npx create-next-app@latest my-nextjs-app
```

啟動開發服務器:

```bash
cd my-nextjs-app
npm run dev
```

## 異步API使用範例

```tsx
// 之前
export default function Page({ params, searchParams }) {
  const { slug } = params;
  return <h1>{slug}</h1>;
}

// 現在
export default async function Page({ params, searchParams }) {
  const { slug } = await params;
  return <h1>{slug}</h1>;
}
```

## 結論

Next.js 15帶來了許多令人興奮的新功能，特別是異步API和改進的緩存機制，這使得構建高效能的網頁應用程式變得更加容易。
"##;

const RSC_CONTENT: &str = r##"
# 探索React Server Components

React Server Components是React的一個革命性功能，它改變了我們思考和構建UI的方式。本文將深入探討React Server Components的工作原理、優勢以及如何在實際項目中使用它。

## 什麼是React Server Components?

React Server Components允許我們將React組件在服務器上渲染，並將結果發送給客戶端，而不需要發送JavaScript代碼。這意味著我們可以在服務器上執行數據獲取、訪問數據庫和文件系統等操作，而不需要在客戶端執行這些操作。

## 優勢

1. **減少JavaScript負載**: 服務器組件不會增加客戶端的JavaScript包大小
2. **直接訪問服務器資源**: 可以直接訪問數據庫、文件系統等
3. **改進初始加載性能**: 減少了客戶端需要解析和執行的JavaScript代碼量
4. **自動代碼拆分**: 服務器組件自動實現了代碼拆分

## 使用範例

```tsx
// 服務器組件
async function DataFetcher() {
  const data = await fetchData(); // 直接在服務器上獲取數據
  return <div>{data.map(item => <div key={item.id}>{item.name}</div>)}</div>;
}

// 客戶端組件
'use client';
function InteractiveComponent() {
  const [count, setCount] = useState(0);
  return (
    <button onClick={() => setCount(count + 1)}>
      Clicked {count} times
    </button>
  );
}
```

## 結論

React Server Components代表了前端開發範式的轉變，它允許我們更有效地利用服務器和客戶端的優勢，構建更高效、更輕量的應用程序。
"##;

const TAILWIND_CONTENT: &str = r##"
# Tailwind CSS最佳實踐

Tailwind CSS是一個實用優先的CSS框架，它通過提供低級別的功能類來幫助你快速構建現代化的網站。本文將分享一些使用Tailwind CSS的最佳實踐，幫助你提高開發效率和代碼質量。

## 組織和重用

使用@apply指令組合常用的功能類:

```css
@layer components {
  .btn-primary {
    @apply px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 transition-colors;
  }
}
```

## 響應式設計

Tailwind提供了基於斷點的響應式前綴:

```html
<div class="text-sm md:text-base lg:text-lg">
  This text changes size at different breakpoints
</div>
```

## 主題化和定制

在tailwind.config.js中擴展主題:

```js
module.exports = {
  theme: {
    extend: {
      colors: {
        'brand-blue': '#1992d4',
      },
      spacing: {
        '72': '18rem',
      }
    }
  }
}
```

## 結論

Tailwind CSS提供了一種高效、靈活的方式來構建現代化的用戶界面。通過遵循這些最佳實踐，你可以充分發揮Tailwind的潛力，同時保持代碼的組織性和可維護性。
"##;

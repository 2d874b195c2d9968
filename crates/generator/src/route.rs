/// A resolved request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Home,
    About,
    Blog,
    Article(&'a str),
    NotFound,
}

impl<'a> Route<'a> {
    /// Map a path to a route. Matching is exact: no trailing-slash
    /// normalization and no nested paths below an article.
    pub fn resolve(path: &'a str) -> Route<'a> {
        match path {
            "/" => Route::Home,
            "/about" => Route::About,
            "/blog" => Route::Blog,
            _ => match path.strip_prefix("/blog/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => Route::Article(slug),
                _ => Route::NotFound,
            },
        }
    }
}

/// Output file for a route path in a static build
pub fn output_file(path: &str) -> String {
    match path.trim_matches('/') {
        "" => "index.html".to_string(),
        trimmed => format!("{}/index.html", trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/about"), Route::About);
        assert_eq!(Route::resolve("/blog"), Route::Blog);
        assert_eq!(
            Route::resolve("/blog/getting-started-with-nextjs"),
            Route::Article("getting-started-with-nextjs")
        );
    }

    #[test]
    fn test_resolve_is_exact() {
        assert_eq!(Route::resolve("/about/"), Route::NotFound);
        assert_eq!(Route::resolve("/about/team"), Route::NotFound);
        assert_eq!(Route::resolve("/blog/"), Route::NotFound);
        assert_eq!(Route::resolve("/blog/a/b"), Route::NotFound);
        assert_eq!(Route::resolve(""), Route::NotFound);
        assert_eq!(Route::resolve("/missing"), Route::NotFound);
    }

    #[test]
    fn test_output_file() {
        assert_eq!(output_file("/"), "index.html");
        assert_eq!(output_file("/about"), "about/index.html");
        assert_eq!(output_file("/blog/my-post"), "blog/my-post/index.html");
    }
}

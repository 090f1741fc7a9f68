use std::path::Path;

use chrono::NaiveDate;
use walkdir::WalkDir;

/// One blog post, keyed by slug for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub body: String,
}

/// Markdown posts discovered under the content directory. A missing
/// directory simply yields an empty store.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    pub fn load(dir: &Path) -> Self {
        let mut posts = Vec::new();
        for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let raw = match std::fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::warn!("skipping unreadable post {}: {err}", path.display());
                    continue;
                }
            };
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("post");
            posts.push(parse_post(stem, &raw));
        }
        // Newest first; undated posts sink to the bottom.
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn parse_post(stem: &str, raw: &str) -> Post {
    let (date, body) = split_front_matter(raw);
    let title = body
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| stem.to_string());
    Post {
        slug: slug::slugify(stem),
        title,
        date,
        body: body.to_string(),
    }
}

/// Minimal front matter: a leading `---` block that may carry a
/// `date: YYYY-MM-DD` line. Anything unparseable is left in the body.
fn split_front_matter(raw: &str) -> (Option<NaiveDate>, &str) {
    let Some(rest) = raw.strip_prefix("---") else {
        return (None, raw);
    };
    let Some(close) = rest.find("\n---") else {
        return (None, raw);
    };
    let block = &rest[..close];
    let body = rest[close + 4..].trim_start_matches(['\r', '\n']);
    let date = block.lines().find_map(|line| {
        let value = line.strip_prefix("date:")?;
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
    });
    (date, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_yields_an_empty_store() {
        let store = ContentStore::load(Path::new("definitely/not/here"));
        assert!(store.is_empty());
    }

    #[test]
    fn title_falls_back_to_the_file_stem() {
        let post = parse_post("My First Post", "just some text\n");
        assert_eq!(post.title, "My First Post");
        assert_eq!(post.slug, "my-first-post");
    }

    #[test]
    fn heading_and_date_are_extracted() {
        let raw = "---\ndate: 2026-03-14\n---\n\n# Hello World\n\nbody text\n";
        let post = parse_post("hello", raw);
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2026, 3, 14));
        assert!(post.body.starts_with("# Hello World"));
        assert!(!post.body.contains("date:"));
    }

    #[test]
    fn unterminated_front_matter_stays_in_the_body() {
        let post = parse_post("oops", "---\ndate: 2026-01-01\nno closing fence\n");
        assert_eq!(post.date, None);
        assert!(post.body.starts_with("---"));
    }
}

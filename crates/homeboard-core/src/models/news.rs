use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A WordPress post as returned by `/wp-json/wp/v2/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: RenderedText,
    pub link: String,
    /// ISO-8601, usually without an offset (site-local time).
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedText {
    pub rendered: String,
}

impl Post {
    /// Publication time as written by the site. Offsets, when present, are dropped.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(dt.naive_local());
        }
        NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_posts() {
        let json = r#"[
            {"id": 1, "date": "2024-05-01T10:20:30", "link": "https://example.com/a",
             "title": {"rendered": "First &#8211; story"}},
            {"id": 2, "date": "2024-05-01T08:00:00", "link": "https://example.com/b",
             "title": {"rendered": "Second"}}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title.rendered, "First &#8211; story");
        assert_eq!(posts[1].link, "https://example.com/b");
    }

    #[test]
    fn test_posts_without_title_fail() {
        let json = r#"[{"date": "2024-05-01T10:20:30", "link": "x"}]"#;
        assert!(serde_json::from_str::<Vec<Post>>(json).is_err());
    }

    #[test]
    fn test_object_instead_of_array_fails() {
        let json = r#"{"code": "rest_no_route", "message": "No route"}"#;
        assert!(serde_json::from_str::<Vec<Post>>(json).is_err());
    }

    #[test]
    fn test_published_at_formats() {
        let post = |date: &str| Post {
            title: RenderedText { rendered: String::new() },
            link: String::new(),
            date: date.to_string(),
        };

        let naive = post("2024-05-01T10:20:30").published_at().unwrap();
        assert_eq!((naive.hour(), naive.minute(), naive.second()), (10, 20, 30));

        let offset = post("2024-05-01T10:20:30+06:00").published_at().unwrap();
        assert_eq!(offset.hour(), 10);

        assert!(post("yesterday").published_at().is_none());
    }
}

use crate::board::{Board, NEWS};
use crate::models::Post;
use crate::utils::{clean_headline, format_clock_time};

pub const ERROR_MESSAGE: &str = "Unable to fetch news.";

/// Two lines per headline: the title, then the posting time.
pub fn lines(posts: &[Post], limit: usize) -> Vec<String> {
    if posts.is_empty() {
        return vec!["No headlines".to_string()];
    }

    posts
        .iter()
        .take(limit)
        .flat_map(|post| {
            let when = post
                .published_at()
                .map(|t| format_clock_time(&t))
                .unwrap_or_default();
            [clean_headline(&post.title.rendered), when]
        })
        .collect()
}

pub fn render(board: &Board, posts: &[Post], limit: usize) {
    board.set_lines(NEWS, lines(posts, limit));
}

pub fn render_error(board: &Board) {
    board.show_error(NEWS, ERROR_MESSAGE);
}

use chrono::NaiveDateTime;

/// Turn a rendered WordPress title into plain text: drop tags, decode entities.
pub fn clean_headline(rendered: &str) -> String {
    let mut text = String::with_capacity(rendered.len());
    let mut in_tag = false;
    for c in rendered.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    let decoded = html_escape::decode_html_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 12-hour wall-clock time, e.g. "3:04:05 PM".
pub fn format_clock_time(time: &NaiveDateTime) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_headline() {
        assert_eq!(clean_headline("Budget &#8211; what&#8217;s new"), "Budget \u{2013} what\u{2019}s new");
        assert_eq!(clean_headline("<em>Breaking</em>:  rain &amp; wind"), "Breaking: rain & wind");
        assert_eq!(clean_headline("Plain"), "Plain");
    }

    #[test]
    fn test_format_clock_time() {
        let t = NaiveDateTime::parse_from_str("2024-05-01T15:04:05", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(format_clock_time(&t), "3:04:05 PM");
        let t = NaiveDateTime::parse_from_str("2024-05-01T00:30:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(format_clock_time(&t), "12:30:00 AM");
    }
}

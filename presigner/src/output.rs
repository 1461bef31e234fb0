const RULE: &str = "-------------------------------------------------------";

/// Renders the success banner printed around a generated URL
#[must_use]
pub fn render_banner(url: &str) -> String {
    format!("✅ Signed URL generated successfully (valid for 1 hour):\n{RULE}\n{url}\n{RULE}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_banner() {
        let banner = render_banner("http://localhost:3900/media/cat.jpg?X-Amz-Expires=3600");
        let lines: Vec<&str> = banner.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "✅ Signed URL generated successfully (valid for 1 hour):"
        );
        assert_eq!(lines[1], RULE);
        assert_eq!(
            lines[2],
            "http://localhost:3900/media/cat.jpg?X-Amz-Expires=3600"
        );
        assert_eq!(lines[3], RULE);
    }
}

//! Course page renderer
//!
//! Treats the target page as a text template with two regions: the topic
//! sidebar (`<ul id="topicList" ...>`) and the main content column
//! (`<div class="col-lg-9">` closed right before `</section>`). Each region's
//! interior is replaced with one topic per video; everything around the
//! regions is left byte-for-byte as it was.

use std::fmt::Write as _;
use std::path::Path;

use regex::{NoExpand, Regex};
use tracing::{info, warn};

use crate::error::{PlaylistError, Result};
use crate::types::VideoRecord;

const SIDEBAR_OPEN: &str = r#"<ul id="topicList" class="list-unstyled mb-0">"#;
const SIDEBAR_PATTERN: &str = r#"(?s)<ul id="topicList" class="list-unstyled mb-0">(.*?)</ul>"#;
const SIDEBAR_CLOSE: &str = "\n                    </ul>";

const CONTENT_OPEN: &str = r#"<div class="col-lg-9">"#;
const CONTENT_PATTERN: &str =
    r#"(?s)<div class="col-lg-9">(.*?)</div>\s+</div>\s+</div>\s+</section>"#;
const CONTENT_CLOSE: &str =
    "\n                </div>\n            </div>\n        </div>\n    </section>";

/// Result of applying records to a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// The updated page text
    pub document: String,
    /// Whether the sidebar region was found and replaced
    pub sidebar_replaced: bool,
    /// Whether the content region was found and replaced
    pub content_replaced: bool,
}

impl RenderOutcome {
    /// Whether both regions were found
    pub fn is_complete(&self) -> bool {
        self.sidebar_replaced && self.content_replaced
    }
}

/// Positional topic ID for the record at `index` (0-based)
///
/// # Example
/// ```
/// use playlist_sync_core::render::topic_id;
/// assert_eq!(topic_id(0), "topic-1");
/// ```
pub fn topic_id(index: usize) -> String {
    format!("topic-{}", index + 1)
}

/// Builds the sidebar list items, first one marked active
pub fn render_sidebar(videos: &[VideoRecord]) -> String {
    let mut out = String::new();
    for (i, video) in videos.iter().enumerate() {
        let class = if i == 0 { "active" } else { "" };
        let _ = write!(
            out,
            "\n                        <li><a href=\"#\" data-target=\"{}\" class=\"{}\">{}</a></li>",
            topic_id(i),
            class,
            escape_html(&video.title)
        );
    }
    out
}

/// Builds the content blocks, first one marked active
pub fn render_content(videos: &[VideoRecord]) -> String {
    let mut out = String::new();
    for (i, video) in videos.iter().enumerate() {
        let class = if i == 0 {
            "topic-content active"
        } else {
            "topic-content"
        };
        let title = escape_html(&video.title);
        let _ = write!(
            out,
            r#"
                    <!-- {comment} -->
                    <div id="{topic}" class="{class}">
                        <h2 class="mb-4">{title}</h2>
                        <div class="video-container">
                            <iframe src="{src}" title="{title}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>
                        </div>
                        <div class="content-description">
                            <h4>What You'll Learn</h4>
                            <ul>
                                <li>Key concepts from this video</li>
                                <li>Important techniques covered</li>
                                <li>Practical applications</li>
                                <li>Related topics</li>
                                <li>Next steps</li>
                            </ul>
                            <div class="topic-navigation d-md-none mt-4">
                                <div class="d-flex justify-content-between">
                                    <button class="btn btn-outline-primary btn-sm prev-topic"><i class="fas fa-arrow-left me-1"></i> Previous</button>
                                    <button class="btn btn-primary btn-sm next-topic">Next <i class="fas fa-arrow-right ms-1"></i></button>
                                </div>
                            </div>
                        </div>
                    </div>
                    "#,
            comment = title.replace("--", "- -"),
            topic = topic_id(i),
            class = class,
            title = title,
            src = escape_html(&video.embed_url()),
        );
    }
    out
}

/// Replaces the sidebar and content regions of a page
///
/// A region whose pattern is not found is left untouched; the outcome
/// records which regions were replaced.
///
/// # Errors
/// Returns `ParseError` if a region pattern fails to compile
pub fn apply_regions(document: &str, videos: &[VideoRecord]) -> Result<RenderOutcome> {
    let sidebar_re = Regex::new(SIDEBAR_PATTERN)
        .map_err(|e| PlaylistError::ParseError(format!("Invalid sidebar pattern: {}", e)))?;
    let content_re = Regex::new(CONTENT_PATTERN)
        .map_err(|e| PlaylistError::ParseError(format!("Invalid content pattern: {}", e)))?;

    let sidebar = format!("{}{}{}", SIDEBAR_OPEN, render_sidebar(videos), SIDEBAR_CLOSE);
    let content = format!("{}{}{}", CONTENT_OPEN, render_content(videos), CONTENT_CLOSE);

    let sidebar_replaced = sidebar_re.is_match(document);
    let document = sidebar_re.replace_all(document, NoExpand(sidebar.as_str()));

    let content_replaced = content_re.is_match(&document);
    let document = content_re
        .replace_all(&document, NoExpand(content.as_str()))
        .into_owned();

    Ok(RenderOutcome {
        document,
        sidebar_replaced,
        content_replaced,
    })
}

/// Rewrites the page at `path` with one topic per video
///
/// Does nothing, and does not touch the file, when `videos` is empty.
/// Otherwise reads the page, replaces both regions and overwrites the file
/// in place.
///
/// # Returns
/// Number of videos written, 0 when skipped
///
/// # Errors
/// - `Io` if the page cannot be read or written
pub async fn update_document(path: impl AsRef<Path>, videos: &[VideoRecord]) -> Result<usize> {
    let path = path.as_ref();
    if videos.is_empty() {
        info!("no videos to update");
        return Ok(0);
    }

    let document = tokio::fs::read_to_string(path).await?;
    let outcome = apply_regions(&document, videos)?;

    if !outcome.sidebar_replaced {
        warn!(path = %path.display(), "sidebar region not found, left unchanged");
    }
    if !outcome.content_replaced {
        warn!(path = %path.display(), "content region not found, left unchanged");
    }

    tokio::fs::write(path, outcome.document).await?;
    info!(path = %path.display(), count = videos.len(), "updated page with videos");

    Ok(videos.len())
}

/// Escapes text for use in element content and quoted attributes
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON: &str = r##"<html>
<body>
    <aside>
        <ul id="topicList" class="list-unstyled mb-0">
                        <li><a href="#" data-target="topic-1" class="active">Old topic</a></li>
                    </ul>
    </aside>
    <section class="course">
        <div class="container">
            <div class="row">
                <div class="col-lg-9">
                    <div id="topic-1" class="topic-content active">
                        <h2>Old topic</h2>
                    </div>
                </div>
            </div>
        </div>
    </section>
</body>
</html>
"##;

    fn two_videos() -> Vec<VideoRecord> {
        vec![VideoRecord::new("A", "T1"), VideoRecord::new("B", "T2")]
    }

    #[test]
    fn test_topic_id() {
        assert_eq!(topic_id(0), "topic-1");
        assert_eq!(topic_id(9), "topic-10");
    }

    #[test]
    fn test_render_sidebar_marks_first_active() {
        let sidebar = render_sidebar(&two_videos());
        assert!(sidebar.contains(r##"<a href="#" data-target="topic-1" class="active">T1</a>"##));
        assert!(sidebar.contains(r##"<a href="#" data-target="topic-2" class="">T2</a>"##));
        assert_eq!(sidebar.matches("<li>").count(), 2);
    }

    #[test]
    fn test_render_content_blocks() {
        let content = render_content(&two_videos());
        assert!(content.contains(r#"<div id="topic-1" class="topic-content active">"#));
        assert!(content.contains(r#"<div id="topic-2" class="topic-content">"#));
        assert!(content.contains(r#"src="https://www.youtube.com/embed/A""#));
        assert!(content.contains(r#"src="https://www.youtube.com/embed/B""#));
        assert_eq!(content.matches("<h4>What You'll Learn</h4>").count(), 2);
    }

    #[test]
    fn test_render_escapes_titles() {
        let videos = vec![VideoRecord::new("A", "<b>Tips & \"Tricks\"</b>")];
        let sidebar = render_sidebar(&videos);
        assert!(sidebar.contains("&lt;b&gt;Tips &amp; &quot;Tricks&quot;&lt;/b&gt;"));
        assert!(!sidebar.contains("<b>"));
    }

    #[test]
    fn test_apply_regions_replaces_both() {
        let outcome = apply_regions(SKELETON, &two_videos()).unwrap();
        assert!(outcome.is_complete());

        let doc = &outcome.document;
        assert!(!doc.contains("Old topic"));
        assert!(doc.contains(">T1</a>"));
        assert!(doc.contains(">T2</a>"));
        assert!(doc.contains(r#"<div id="topic-2" class="topic-content">"#));
        assert!(doc.starts_with("<html>\n<body>\n    <aside>\n"));
        assert!(doc.ends_with("    </section>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_apply_regions_is_idempotent() {
        let once = apply_regions(SKELETON, &two_videos()).unwrap().document;
        let twice = apply_regions(&once, &two_videos()).unwrap().document;
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_regions_dollar_in_title_is_literal() {
        let videos = vec![VideoRecord::new("A", "Costs $1 and ${name}")];
        let outcome = apply_regions(SKELETON, &videos).unwrap();
        assert!(outcome.document.contains("Costs $1 and ${name}</a>"));
    }

    #[test]
    fn test_apply_regions_partial_match() {
        let doc = r#"<ul id="topicList" class="list-unstyled mb-0"></ul><div class="col-lg-9">keep</div>"#;
        let outcome = apply_regions(doc, &two_videos()).unwrap();

        assert!(outcome.sidebar_replaced);
        assert!(!outcome.content_replaced);
        assert!(!outcome.is_complete());
        assert!(outcome.document.ends_with(r#"<div class="col-lg-9">keep</div>"#));
        assert!(outcome.document.contains(">T2</a>"));
    }

    #[test]
    fn test_apply_regions_no_match_is_unchanged() {
        let doc = "<html><body><p>no regions</p></body></html>";
        let outcome = apply_regions(doc, &two_videos()).unwrap();
        assert_eq!(outcome.document, doc);
        assert!(!outcome.sidebar_replaced);
        assert!(!outcome.content_replaced);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }
}

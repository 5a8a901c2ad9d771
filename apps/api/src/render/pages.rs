//! Server-rendered pages: upload form, analysis, job recommendations, errors.

use pulldown_cmark::{html, CowStr, Event, LinkType, Tag, TagEnd};

use crate::analysis::ResumeAnalysis;
use crate::jobs::{JobListing, JobSearchResults};
use crate::render::markdown::{escape_text, is_web_url, markdown_to_html};

const PAGE_TITLE: &str = "Job Recommender";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.block { background-color: #000; color: #fff; padding: 15px; border-radius: 10px; }
.success { background-color: #e6f4ea; color: #1e4620; padding: 10px 15px; border-radius: 8px; }
.error { background-color: #fdecea; color: #611a15; padding: 10px 15px; border-radius: 8px; }
.job { border-bottom: 1px solid #ddd; padding: 0.5rem 0; }
";

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PAGE_TITLE}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         <h1>📄 AI Job Recommender</h1>\n{body}</body>\n</html>\n"
    )
}

fn upload_form() -> &'static str {
    "<p>Upload your resume and get job recommendations based on your skills and experience \
     from LinkedIn and Naukri.</p>\n\
     <form action=\"/analyze\" method=\"post\" enctype=\"multipart/form-data\">\n\
     <label>Upload your resume (PDF) \
     <input type=\"file\" name=\"resume\" accept=\"application/pdf,.pdf\" required></label>\n\
     <button type=\"submit\">Analyze</button>\n</form>\n"
}

pub fn render_index_page() -> String {
    layout(upload_form())
}

fn section(id: &str, heading: &str, markdown: &str) -> String {
    format!(
        "<hr>\n<section id=\"{id}\">\n<h2>{heading}</h2>\n<div class=\"block\">\n{}</div>\n</section>\n",
        markdown_to_html(markdown)
    )
}

/// Summary, skill gaps and roadmap in that order, followed by the single
/// "get recommendations" action. The summary rides along in the form so the
/// follow-up request needs no server-side session.
pub fn render_analysis_page(analysis: &ResumeAnalysis) -> String {
    let mut body = String::new();
    body.push_str(&section("summary", "📑 Resume Summary", &analysis.summary));
    body.push_str(&section("skill-gaps", "🛠️ Skill Gaps", &analysis.skill_gaps));
    body.push_str(&section("roadmap", "🚀 Future Roadmap", &analysis.roadmap));
    body.push_str("<p class=\"success\">✅ Analysis Completed Successfully!</p>\n");
    body.push_str(&format!(
        "<form action=\"/recommendations\" method=\"post\">\n\
         <textarea name=\"summary\" hidden>{}</textarea>\n\
         <button type=\"submit\">🔎 Get Job Recommendations</button>\n</form>\n",
        escape_text(&analysis.summary)
    ));
    layout(&body)
}

fn text(value: &Option<String>) -> CowStr<'_> {
    CowStr::Borrowed(value.as_deref().unwrap_or_default())
}

/// Title / company / location / link for one posting. Missing fields render empty.
/// A link that is not a web URL is left out.
fn listing_html(listing: &JobListing) -> String {
    let mut events: Vec<Event<'_>> = vec![
        Event::Start(Tag::Paragraph),
        Event::Start(Tag::Strong),
        Event::Text(text(&listing.title)),
        Event::End(TagEnd::Strong),
        Event::Text(" at ".into()),
        Event::Start(Tag::Emphasis),
        Event::Text(text(&listing.company_name)),
        Event::End(TagEnd::Emphasis),
        Event::End(TagEnd::Paragraph),
        Event::Start(Tag::List(None)),
        Event::Start(Tag::Item),
        Event::Text("📍 ".into()),
        Event::Text(text(&listing.location)),
        Event::End(TagEnd::Item),
        Event::Start(Tag::Item),
        Event::Text("🔗 ".into()),
    ];

    if let Some(href) = listing.href().filter(|href| is_web_url(href)) {
        events.extend([
            Event::Start(Tag::Link {
                link_type: LinkType::Inline,
                dest_url: href.into(),
                title: "".into(),
                id: "".into(),
            }),
            Event::Text("View Job".into()),
            Event::End(TagEnd::Link),
        ]);
    }

    events.extend([Event::End(TagEnd::Item), Event::End(TagEnd::List(false))]);

    let mut out = String::from("<div class=\"job\">\n");
    html::push_html(&mut out, events.into_iter());
    out.push_str("</div>\n");
    out
}

fn job_section(id: &str, heading: &str, listings: &[JobListing]) -> String {
    let mut out = format!("<hr>\n<section id=\"{id}\">\n<h2>{heading}</h2>\n");
    for listing in listings {
        out.push_str(&listing_html(listing));
    }
    out.push_str("</section>\n");
    out
}

pub fn render_jobs_page(keywords: &str, results: &JobSearchResults) -> String {
    let mut body = format!(
        "<p class=\"success\">Extracted Job Keywords: {}</p>\n",
        escape_text(keywords)
    );
    body.push_str(&job_section("linkedin-jobs", "💼 LinkedIn Jobs", &results.linkedin));
    body.push_str(&job_section("naukri-jobs", "💼 Naukri Jobs", &results.naukri));
    body.push_str("<hr>\n<p><a href=\"/\">Analyze another resume</a></p>\n");
    layout(&body)
}

pub fn render_error_page(message: &str) -> String {
    let body = format!(
        "<p class=\"error\">{}</p>\n{}",
        escape_text(message),
        upload_form()
    );
    layout(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{listing, section_html};

    fn analysis() -> ResumeAnalysis {
        ResumeAnalysis {
            summary: "Summary: strong Rust background".to_string(),
            skill_gaps: "Gaps: cloud certifications".to_string(),
            roadmap: "Roadmap: learn Kubernetes".to_string(),
        }
    }

    #[test]
    fn test_index_page_has_upload_form() {
        let page = render_index_page();
        assert!(page.contains("enctype=\"multipart/form-data\""));
        assert!(page.contains("name=\"resume\""));
    }

    #[test]
    fn test_analysis_sections_render_in_order() {
        let page = render_analysis_page(&analysis());
        let summary = page.find("Summary: strong").unwrap();
        let gaps = page.find("Gaps: cloud").unwrap();
        let roadmap = page.find("Roadmap: learn").unwrap();
        assert!(summary < gaps && gaps < roadmap);
        assert!(page.contains("Get Job Recommendations"));
    }

    #[test]
    fn test_analysis_form_carries_escaped_summary() {
        let mut a = analysis();
        a.summary = "Uses <b>C++</b> & Rust".to_string();
        let page = render_analysis_page(&a);
        assert!(page.contains(
            "<textarea name=\"summary\" hidden>Uses &lt;b&gt;C++&lt;/b&gt; &amp; Rust</textarea>"
        ));
    }

    #[test]
    fn test_jobs_page_counts_per_provider() {
        let results = JobSearchResults {
            linkedin: vec![],
            naukri: vec![
                listing("One", "A", Some("Pune"), "https://1"),
                listing("Two", "B", Some("Delhi"), "https://2"),
                listing("Three", "C", Some("Remote"), "https://3"),
            ],
        };
        let page = render_jobs_page("Python, Backend", &results);

        assert_eq!(section_html(&page, "linkedin-jobs").matches("class=\"job\"").count(), 0);
        assert_eq!(section_html(&page, "naukri-jobs").matches("class=\"job\"").count(), 3);
        assert!(page.contains("Extracted Job Keywords: Python, Backend"));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_listing_without_location_renders_empty_location() {
        let html = listing_html(&listing("Engineer", "Acme", None, "https://x"));
        assert!(html.contains("<strong>Engineer</strong>"));
        assert!(html.contains("<em>Acme</em>"));
        assert!(html.contains("<li>📍 </li>"));
        assert!(html.contains("href=\"https://x\""));
    }

    #[test]
    fn test_listing_with_no_fields_still_renders() {
        let html = listing_html(&JobListing::default());
        assert!(html.contains("class=\"job\""));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_listing_with_script_link_has_no_anchor() {
        let html = listing_html(&listing(
            "Engineer",
            "Acme",
            Some("Pune"),
            "javascript:alert(document.cookie)",
        ));
        assert!(html.contains("<strong>Engineer</strong>"));
        assert!(html.contains("<li>🔗 </li>"));
        assert!(!html.contains("<a "));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_listing_text_is_escaped() {
        let html = listing_html(&listing("<script>x</script>", "A&B", None, "https://x"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("A&amp;B"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = render_error_page("bad <input>");
        assert!(page.contains("bad &lt;input&gt;"));
        assert!(page.contains("name=\"resume\""));
    }
}

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// True when `href` is an absolute `http` or `https` URL.
/// Anything else (`javascript:`, `data:`, relative paths) is not linked.
pub fn is_web_url(href: &str) -> bool {
    let href = href.trim_start();
    ["http://", "https://"].iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Renders model output as HTML.
///
/// Model text is untrusted: raw HTML blocks and inline tags are demoted to
/// text so they are escaped instead of passed through. Links and images
/// whose target is not a web URL lose their tag and keep only their text.
pub fn markdown_to_html(markdown: &str) -> String {
    // One entry per open link or image: whether its tags were dropped.
    let mut dropped: Vec<bool> = Vec::new();
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .filter_map(move |event| {
            let keep = match &event {
                Event::Start(Tag::Link { dest_url, .. })
                | Event::Start(Tag::Image { dest_url, .. }) => {
                    let safe = is_web_url(dest_url);
                    dropped.push(!safe);
                    safe
                }
                Event::End(TagEnd::Link) | Event::End(TagEnd::Image) => {
                    !dropped.pop().unwrap_or(false)
                }
                _ => true,
            };
            if !keep {
                return None;
            }
            Some(match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            })
        });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Escapes plain text for an HTML body or textarea.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    html::push_html(&mut out, std::iter::once(Event::Text(text.into())));
    out
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// One job posting as returned by a provider.
///
/// Providers disagree on field names and omit fields freely, so every field
/// is optional. LinkedIn items carry `link`, Naukri items carry `url`.
/// A field of an unexpected type never drops the listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

/// Reads any JSON value as display text.
///
/// Numbers and booleans keep their JSON spelling. An array of scalars is
/// joined with ", ". Objects, null and empty arrays read as `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        other => scalar_text(&other),
    }))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl JobListing {
    /// Where the posting can be viewed, whichever field the provider used.
    pub fn href(&self) -> Option<&str> {
        self.link.as_deref().or(self.url.as_deref())
    }
}

/// Converts raw provider items, keeping provider order.
/// Items that are not JSON objects are skipped.
pub fn parse_listings(items: Vec<Value>, provider: &str) -> Vec<JobListing> {
    let total = items.len();
    let listings: Vec<JobListing> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<JobListing>(item) {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!(provider, "Skipping malformed job item: {e}");
                None
            }
        })
        .collect();

    if listings.len() < total {
        warn!(
            provider,
            "Kept {} of {} job items",
            listings.len(),
            total
        );
    }
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_linkedin_item_parses() {
        let item = json!({
            "title": "Backend Engineer",
            "companyName": "Acme",
            "location": "Bengaluru",
            "link": "https://www.linkedin.com/jobs/view/1",
            "postedTime": "2 days ago"
        });
        let listing: JobListing = serde_json::from_value(item).unwrap();
        assert_eq!(listing.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(listing.company_name.as_deref(), Some("Acme"));
        assert_eq!(listing.href(), Some("https://www.linkedin.com/jobs/view/1"));
    }

    #[test]
    fn test_naukri_item_uses_url_for_href() {
        let item = json!({
            "title": "Python Developer",
            "companyName": "Globex",
            "url": "https://www.naukri.com/job-listings-1"
        });
        let listing: JobListing = serde_json::from_value(item).unwrap();
        assert_eq!(listing.href(), Some("https://www.naukri.com/job-listings-1"));
        assert!(listing.location.is_none());
    }

    #[test]
    fn test_item_with_both_link_and_url_prefers_link() {
        let item = json!({"link": "https://a", "url": "https://b"});
        let listing: JobListing = serde_json::from_value(item).unwrap();
        assert_eq!(listing.href(), Some("https://a"));
    }

    #[test]
    fn test_null_fields_become_none() {
        let item = json!({"title": null, "companyName": "Acme", "location": null});
        let listing: JobListing = serde_json::from_value(item).unwrap();
        assert!(listing.title.is_none());
        assert!(listing.location.is_none());
        assert_eq!(listing.href(), None);
    }

    #[test]
    fn test_parse_listings_skips_non_objects_and_keeps_order() {
        let items = vec![
            json!({"title": "First"}),
            json!("not an object"),
            json!({"title": 42}),
            json!({"title": "Second"}),
        ];
        let listings = parse_listings(items, "test");
        let titles: Vec<_> = listings.iter().filter_map(|l| l.title.as_deref()).collect();
        assert_eq!(titles, vec!["First", "42", "Second"]);
    }

    #[test]
    fn test_non_string_location_keeps_listing() {
        let items = vec![
            json!({
                "title": "Dev",
                "location": ["Pune", "Remote"],
                "url": "https://www.naukri.com/job-listings-1"
            }),
            json!({
                "title": "Dev2",
                "location": 12345,
                "url": "https://www.naukri.com/job-listings-2"
            }),
        ];
        let listings = parse_listings(items, "naukri");
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].location.as_deref(), Some("Pune, Remote"));
        assert_eq!(listings[1].location.as_deref(), Some("12345"));
        assert_eq!(listings[1].href(), Some("https://www.naukri.com/job-listings-2"));
    }

    #[test]
    fn test_object_valued_fields_read_as_none() {
        let item = json!({
            "title": {"text": "Dev"},
            "companyName": true,
            "location": [],
            "link": {"href": "https://a"}
        });
        let listing: JobListing = serde_json::from_value(item).unwrap();
        assert!(listing.title.is_none());
        assert_eq!(listing.company_name.as_deref(), Some("true"));
        assert!(listing.location.is_none());
        assert_eq!(listing.href(), None);
    }
}

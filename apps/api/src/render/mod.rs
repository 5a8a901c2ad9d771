// HTML rendering for the browser UI.

pub mod markdown;
pub mod pages;

pub use pages::{render_analysis_page, render_error_page, render_index_page, render_jobs_page};

// Resume analysis prompt templates.
// Each template carries exactly one placeholder that is replaced before sending.

pub const RESUME_PLACEHOLDER: &str = "{resume_text}";
pub const SUMMARY_PLACEHOLDER: &str = "{summary}";

pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Summarize this resume highlighting the skills, education, and experience:

{resume_text}";

pub const SKILL_GAPS_PROMPT_TEMPLATE: &str = "\
Analyze this resume and highlight missing skills, certifications, and experiences needed for better job opportunities:

{resume_text}";

pub const ROADMAP_PROMPT_TEMPLATE: &str = "\
Based on this resume, suggest a future roadmap to improve career prospects (skills, certifications, industry exposure):

{resume_text}";

pub const KEYWORDS_PROMPT_TEMPLATE: &str = "\
Based on this resume summary, suggest best job titles and search keywords. Give comma-separated list only.

Summary:
{summary}";

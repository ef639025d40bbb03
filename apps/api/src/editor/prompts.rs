// Prompt templates for the editor's two AI features.
// Placeholders in `{braces}` are replaced in editor/enhancer.rs before sending.

/// Rewrite prompt. Replace: {section}, {text}
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Rewrite and enhance the following text for a resume's "{section}" section.
Make it professional, impactful, and concise.
If it is a job description, use action verbs and focus on achievements.
Return only the enhanced text, without any introductory phrases.

Original text:
"{text}""#;

/// Cover letter prompt. Replace: {job_title}, {company}, {no_placeholders},
/// {full_name}, {email}, {phone}, {summary}, {experience}, {skills}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional and compelling cover letter for a "{job_title}" position at "{company}".
Use the following resume data to tailor the letter. The tone should be enthusiastic but professional.
The letter should be well-structured with an introduction, body paragraphs highlighting how the candidate's experience and skills align with the job, and a concluding paragraph with a call to action.
{no_placeholders} Format the output as plain text with line breaks.

Resume Data:
- Name: {full_name}
- Email: {email}
- Phone: {phone}
- Summary: {summary}
- Experience: {experience}
- Skills: {skills}

Generate the cover letter now."#;

/// Written into the target field when enhancement fails.
pub const ENHANCE_FAILURE_TEXT: &str =
    "Error generating content. Please check your API key and try again.";

/// Written into the cover letter when generation fails.
pub const COVER_LETTER_FAILURE_TEXT: &str =
    "Error generating cover letter. Please check your API key and try again.";

/// Cover letter content before anything has been generated.
pub const COVER_LETTER_PLACEHOLDER: &str =
    "Fill in the details and click \"Generate\" to create your cover letter.";

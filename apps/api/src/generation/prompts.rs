// All LLM prompt text for the Generation module.
// Templates use `{name}` placeholders, filled by `composer::fill_template`.

/// Guideline sentence per content type.
pub const CONTENT_TYPE_GUIDELINES: &[(&str, &str)] = &[
    (
        "article",
        "Create a well-structured article with clear sections, informative content, and a professional tone.",
    ),
    (
        "blogPost",
        "Write an engaging blog post with a personal touch, using headings, short paragraphs, and a conversational style.",
    ),
    (
        "socialPost",
        "Create a concise, engaging social media post optimized for sharing and engagement.",
    ),
    (
        "linkedinPost",
        "Create a LinkedIn post announcing a project launch. Include relevant hashtags at the end if appropriate for the writing style.",
    ),
    (
        "emailNewsletter",
        "Draft an email newsletter section that's scannable, informative, and encourages reader engagement.",
    ),
    (
        "productDescription",
        "Create a compelling product description that highlights features, benefits, and value propositions.",
    ),
];

/// Guideline used for any content type missing from `CONTENT_TYPE_GUIDELINES`.
pub const FALLBACK_GUIDELINE: &str = "Create well-structured content with clear organization.";

/// Target word-count range per length bucket.
pub const CONTENT_LENGTH_WORDS: &[(&str, &str)] = &[
    ("very_short", "100-150"),
    ("short", "200-300"),
    ("medium", "500-700"),
    ("long", "1000-1200"),
    ("very_long", "1500-2000"),
];

/// Bucket whose range is used for unknown lengths.
pub const FALLBACK_LENGTH: &str = "medium";

/// The content type that gets the launch-announcement template.
pub const LINKEDIN_CONTENT_TYPE: &str = "linkedinPost";

/// Replace: {job}, {sample}, {prompt}, {word_count}, {tone}
pub const LINKEDIN_PROMPT_TEMPLATE: &str = r#"You are an AI mimicking the writing style of a {job}. 

TASK: Write a LinkedIn post about a new project launch exactly as if it was written by this {job}.

WRITING STYLE REFERENCE:
"{sample}"

CONTENT REQUIREMENTS:
- Follow the exact sentence structure, tone, and vocabulary level shown in the sample
- Ensure the content is naturally flowing and cohesive
- If the sample uses hashtags, include similar ones
- Match their personal/professional tone exactly (first-person vs third-person)
- Match their formality level exactly
- Use the same style of punctuation (formal vs casual)
- Never break or fragment sentences
- The post should announce a new project launch related to: "{prompt}"

TARGET LENGTH: {word_count} words
TONE: {tone} (as detected from the sample)

Write only the LinkedIn post content, nothing else."#;

/// Replace: {job}, {content_type}, {sample}, {guidelines}, {prompt}, {word_count}, {tone}
pub const GENERIC_PROMPT_TEMPLATE: &str = r#"You are an AI mimicking the writing style of a {job}. 

TASK: Write {content_type} content exactly as if it was written by this {job}.

WRITING STYLE REFERENCE:
"{sample}"

CONTENT REQUIREMENTS:
- Follow the exact sentence structure, tone, and vocabulary level shown in the sample
- {guidelines}
- Ensure the content is naturally flowing and cohesive
- Match their personal/professional tone exactly (first-person vs third-person)
- Match their formality level exactly
- Use the same style of punctuation (formal vs casual)
- Never break or fragment sentences
- The content should address: "{prompt}"

TARGET LENGTH: {word_count} words
TONE: {tone} (as detected from the sample)

Write only the content, nothing else."#;

/// Appended to the instruction on the streaming path. Replace: {instruction}, {prompt}
pub const STREAM_PROMPT_TEMPLATE: &str = "{instruction}\n\nUser request: {prompt}";

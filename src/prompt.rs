//! Prompt templates for the two-stage explanation pipeline.
//!
//! The literal instructional text is external interface content: the parser in
//! [`crate::parser`] depends on the output shape these templates request, so
//! the wording must not drift independently of the parsing patterns.

/// First stage: condense the user's question into a short topic label.
pub const TOPIC_EXTRACTION_PROMPT: &str = r#"
You are a helpful assistant. Extract the core technical or conceptual topic from the following question.
Reply in 5–7 words, without extra explanation.

Question: "{user_question}"
Topic:
"#;

/// Second stage: produce the cue cards and follow-up questions, seeded with
/// the topic extracted in the first stage.
pub const ELI5_PROMPT_TEMPLATE: &str = r#"
You are an expert at explaining complex ideas in a very simple way.

The user is curious about the topic: **{main_topic}**

They asked: "{user_question}"

Explain this topic in a way a 5-year-old could understand, using **up to 5 cue cards**.

Each cue card should:
- Be short (3–4 lines max)
- Focus on one idea
- Be logically ordered
- Start with a fun title like “What’s Happening?”, “Let’s Pretend”, “A Tiny Example”, etc.

If you use analogies or metaphors (like robots), **make sure follow-up questions relate back to the actual topic ({main_topic})**, not the analogy.

After the cue cards, suggest 3–5 follow-up questions that:
- Explore {main_topic} in more detail
- Help the user learn related or deeper concepts
- Stay on-topic even if the explanation used analogies

Format your response like this:

**Cue Card 1: <title>**
<short explanation>

...

Follow-up Questions:
1. <question 1>
2. <question 2>
3. ...
"#;

/// Fills the topic-extraction template with the user's question.
#[must_use]
pub fn render_topic_prompt(user_question: &str) -> String {
    TOPIC_EXTRACTION_PROMPT.replace("{user_question}", user_question)
}

/// Fills the explanation template with the extracted topic and the original
/// question.
#[must_use]
pub fn render_explanation_prompt(main_topic: &str, user_question: &str) -> String {
    ELI5_PROMPT_TEMPLATE
        .replace("{main_topic}", main_topic)
        .replace("{user_question}", user_question)
}

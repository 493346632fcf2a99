use crate::translate::{StoredTranslation, TranslateRequest};

/// Everything the page shows for one response
#[derive(Debug, Default)]
pub struct PageView<'a> {
    /// Field values to echo back into the form
    pub form: Option<&'a TranslateRequest>,
    pub translation: Option<&'a StoredTranslation>,
    pub error: Option<String>,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(view: &PageView<'_>) -> String {
    let (text, language) = view
        .form
        .map(|f| (escape_html(&f.text), escape_html(&f.language)))
        .unwrap_or_default();

    let error = view
        .error
        .as_deref()
        .map(|message| {
            format!(
                r#"<div class="error" role="alert">Translation failed: {}</div>"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();

    // Empty completions are stored but not shown
    let result = view
        .translation
        .filter(|t| !t.text.is_empty())
        .map(|t| {
            format!(
                r#"<hr>
    <h3>Translated Text</h3>
    <div class="result" lang="{}">{}</div>"#,
                escape_html(&t.target_language),
                escape_html(&t.text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Language Translator · Groq</title>
  <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🌍</text></svg>">
  <style>
    body {{ font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }}
    h1, .subtitle {{ text-align: center; }}
    .subtitle {{ color: gray; }}
    label {{ display: block; margin-top: 1rem; font-weight: 600; }}
    textarea, input[type=text] {{ width: 100%; box-sizing: border-box; padding: .5rem; }}
    textarea {{ height: 120px; }}
    button {{ margin-top: 1rem; padding: .5rem 1.5rem; }}
    .error {{ margin-top: 1rem; padding: .75rem; background: #fdecea; color: #611a15; }}
    .result {{ white-space: pre-wrap; }}
  </style>
</head>
<body>
  <h1>🌍 Language Translator</h1>
  <p class="subtitle">Translate text into any language using LLaMA-3.1 (Groq)</p>
  <form method="post" action="/translate">
    <label for="user_text">✍️ Enter text</label>
    <textarea id="user_text" name="text" placeholder="Type text to translate...">{text}</textarea>
    <label for="target_language">🌐 Translate to</label>
    <input type="text" id="target_language" name="language" placeholder="e.g., Hindi, Japanese, Arabic, Klingon" value="{language}">
    <button type="submit">Translate</button>
  </form>
  {error}
  {result}
</body>
</html>
"#,
        text = text,
        language = language,
        error = error,
        result = result,
    )
}

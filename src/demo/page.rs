use super::examples::examples;
use super::highlight::Kind;
use super::highlight::Tokenizer;

/// Render the demo page: the live image, a redeal button, and one
/// highlighted code block per usage snippet.
pub fn page(base: &str) -> String {
    let blocks = examples(base)
        .iter()
        .map(|e| {
            format!(
                "<section>\n<h2>{}</h2>\n<pre><code>{}</code></pre>\n</section>",
                escape(e.title),
                highlight(&e.code),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Mahjong starting hand API</title>
<style>
  body {{ font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }}
  img {{ max-width: 100%; border-radius: 8px; }}
  pre {{ background: #1e1e2e; color: #cdd6f4; padding: 1rem; border-radius: 8px; overflow-x: auto; }}
  .hl-comment {{ color: #6c7086; }}
  .hl-string {{ color: #a6e3a1; }}
  .hl-keyword {{ color: #89b4fa; }}
  button {{ padding: 0.5rem 1rem; margin: 1rem 0; }}
</style>
</head>
<body>
<h1>Mahjong starting hand API</h1>
<p>Every request deals a fresh 13-tile starting hand with a dora indicator and returns it as a PNG.</p>
<img id="handImage" src="/api/starting-hand" alt="mahjong starting hand">
<br>
<button id="newHandBtn">Deal again</button>
<script>
  document.getElementById('newHandBtn').addEventListener('click', () => {{
    document.getElementById('handImage').src = '/api/starting-hand?' + new Date().getTime();
  }});
</script>
{blocks}
</body>
</html>
"#
    )
}

/// Wrap non-Normal segments in classed spans; escape everything.
fn highlight(code: &str) -> String {
    Tokenizer::from(code)
        .map(|seg| match seg.kind {
            Kind::Normal => escape(seg.text),
            Kind::Comment => span("hl-comment", seg.text),
            Kind::Str => span("hl-string", seg.text),
            Kind::Keyword => span("hl-keyword", seg.text),
        })
        .collect()
}

fn span(class: &str, text: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, class, escape(text))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert!(escape(r#"<img src="x">"#) == "&lt;img src=&quot;x&quot;&gt;");
    }

    #[test]
    fn page_contains_snippets() {
        let html = page("http://localhost:8080");
        assert!(html.contains("hl-keyword"));
        assert!(html.contains("http://localhost:8080/api/starting-hand"));
        assert!(html.contains("newHandBtn"));
    }

    #[test]
    fn highlighted_code_is_escaped() {
        let html = highlight(r#"<img src="x">"#);
        assert!(!html.contains("<img"));
    }
}

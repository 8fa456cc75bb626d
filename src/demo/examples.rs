use serde::Serialize;

/// A copy-ready usage snippet for the demo page. Derived from the serving
/// base URL at render time; no mutable state between requests.
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub title: &'static str,
    pub code: String,
}

pub fn examples(base: &str) -> Vec<Example> {
    vec![
        Example {
            title: "HTML embed",
            code: format!(r#"<img src="{base}/api/starting-hand" alt="mahjong starting hand" />"#),
        },
        Example {
            title: "JavaScript dynamic reload",
            code: format!(
                "// deal a fresh hand on button click\n\
                 document.getElementById('newHandBtn').addEventListener('click', () => {{\n\
                 \x20 const img = document.getElementById('handImage');\n\
                 \x20 // cache-busting query parameter\n\
                 \x20 img.src = '{base}/api/starting-hand?' + new Date().getTime();\n\
                 }});"
            ),
        },
        Example {
            title: "cURL",
            code: format!(r#"curl -X GET "{base}/api/starting-hand" --output mahjong_hand.png"#),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_substituted() {
        let examples = examples("http://localhost:8080");
        assert!(examples.len() == 3);
        for example in &examples {
            assert!(example.code.contains("http://localhost:8080/api/starting-hand"));
        }
    }

    #[test]
    fn pure_transform() {
        let a = examples("https://a.example");
        let b = examples("https://b.example");
        assert!(a.iter().all(|e| !e.code.contains("b.example")));
        assert!(b.iter().all(|e| !e.code.contains("a.example")));
    }
}

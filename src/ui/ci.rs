//! GitHub Actions workflow commands

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// True when running inside a GitHub Actions job
pub fn is_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

/// `::error title=deployurl::message` style annotation
pub fn annotation(level: AnnotationLevel, message: &str, file: Option<&str>) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = vec!["title=deployurl".to_string()];
    if let Some(file) = file {
        props.insert(0, format!("file={}", escape(file)));
    }

    format!("::{} {}::{}", level_str, props.join(","), escape(message))
}

fn escape(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

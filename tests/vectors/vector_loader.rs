/// Vector loader
///
/// Deserializes the JSON case list. Plain strings in the list are comments.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    Url,
    Authority,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Lenient,
    Strict,
    /// Same outcome expected in both modes
    Both,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        #[serde(default)]
        target: TargetKind,
        #[serde(default)]
        mode: Mode,
        #[serde(default)]
        failure: bool,
        #[serde(default)]
        schema: Option<String>,
        #[serde(default)]
        userinfo: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct VectorFailure {
    pub test_num: usize,
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct VectorResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<VectorFailure>,
}

impl VectorResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_vectors() -> Vec<TestCase> {
    serde_json::from_str(include_str!("url_vectors.json")).expect("url_vectors.json is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_vectors() {
        let cases = load_vectors();
        let urls = cases
            .iter()
            .filter(|case| matches!(case, TestCase::UrlTest { .. }))
            .count();
        assert!(urls > 50, "only {urls} vectors loaded");
    }

    #[test]
    fn test_defaults() {
        let case: TestCase = serde_json::from_str(r#"{"input": "/"}"#).unwrap();
        let TestCase::UrlTest {
            target,
            mode,
            failure,
            ..
        } = case
        else {
            panic!("not a url test");
        };
        assert_eq!(target, TargetKind::Url);
        assert_eq!(mode, Mode::Lenient);
        assert!(!failure);
    }
}

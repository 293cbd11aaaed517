//! Fixture loader for crack cases
use serde::Deserialize;
use urlcrack::{Error, Flags};

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A crack test case
    Crack {
        input: String,
        #[serde(default)]
        flags: Vec<String>,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        user_name: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host_name: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        url_path: Option<String>,
        #[serde(default)]
        extra_info: Option<String>,
        #[serde(default)]
        failure: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

/// Map fixture flag names to call flags
pub fn parse_flags(names: &[String]) -> Flags {
    names.iter().fold(Flags::empty(), |flags, name| match name.as_str() {
        "decode" => flags | Flags::DECODE,
        "escape" => flags | Flags::ESCAPE,
        other => panic!("unknown fixture flag {other}"),
    })
}

/// Map fixture error names to errors
pub fn parse_failure(name: &str) -> Error {
    match name {
        "invalid_parameter" => Error::InvalidParameter,
        "unrecognized_scheme" => Error::UnrecognizedScheme,
        "malformed_url" => Error::MalformedUrl,
        other => panic!("unknown fixture failure {other}"),
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("./crack_cases.json");
    serde_json::from_str(data).expect("Failed to parse crack fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        assert!(cases.iter().any(|case| matches!(case, TestCase::Crack { .. })));
    }

    #[test]
    fn test_parse_flags() {
        let flags = parse_flags(&["decode".to_string()]);
        assert!(flags.contains(Flags::DECODE));
        assert!(!flags.contains(Flags::ESCAPE));
    }
}

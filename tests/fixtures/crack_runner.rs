//! Fixture runner
//!
//! Cracks every fixture into generously sized buffers (so decode and escape
//! cases work too) and compares each field.
use super::crack_loader::{
    FixtureFailure, FixtureResult, TestCase, load_cases, parse_failure, parse_flags,
};
use urlcrack::{Field, UrlComponents, crack};

const FIELD_CAPACITY: usize = 512;

fn check(
    result: &mut FixtureResult,
    test_num: usize,
    input: &str,
    field: &str,
    expected: Option<&str>,
    actual: Option<&str>,
) -> bool {
    match expected {
        Some(expected) if Some(expected) != actual => {
            result.failures.push(FixtureFailure {
                test_num,
                input: input.to_string(),
                field: field.to_string(),
                expected: expected.to_string(),
                actual: format!("{actual:?}"),
            });
            false
        }
        _ => true,
    }
}

pub fn run_cases(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for case in cases {
        let TestCase::Crack {
            input,
            flags,
            scheme,
            user_name,
            password,
            host_name,
            port,
            url_path,
            extra_info,
            failure,
        } = case
        else {
            continue;
        };
        test_num += 1;

        let mut scheme_buf = [0u8; FIELD_CAPACITY];
        let mut user_buf = [0u8; FIELD_CAPACITY];
        let mut password_buf = [0u8; FIELD_CAPACITY];
        let mut host_buf = [0u8; FIELD_CAPACITY];
        let mut path_buf = [0u8; FIELD_CAPACITY];
        let mut extra_buf = [0u8; FIELD_CAPACITY];
        let mut components = UrlComponents {
            scheme: Field::buffer(&mut scheme_buf),
            user_name: Field::buffer(&mut user_buf),
            password: Field::buffer(&mut password_buf),
            host_name: Field::buffer(&mut host_buf),
            url_path: Field::buffer(&mut path_buf),
            extra_info: Field::buffer(&mut extra_buf),
            ..UrlComponents::new()
        };
        let outcome = crack(input.as_str(), parse_flags(&flags), &mut components);

        if let Some(failure) = failure {
            let expected = parse_failure(&failure);
            if outcome == Err(expected) {
                result.passed += 1;
            } else {
                result.failed += 1;
                result.failures.push(FixtureFailure {
                    test_num,
                    input: input.clone(),
                    field: "outcome".to_string(),
                    expected: format!("{expected:?}"),
                    actual: format!("{outcome:?}"),
                });
            }
            continue;
        }

        if let Err(err) = outcome {
            result.failed += 1;
            result.failures.push(FixtureFailure {
                test_num,
                input: input.clone(),
                field: "outcome".to_string(),
                expected: "success".to_string(),
                actual: format!("{err:?}"),
            });
            continue;
        }

        let actual_port = components.port.to_string();
        let expected_port = port.map(|p| p.to_string());
        let checks = [
            ("scheme", scheme.as_deref(), components.scheme.as_str()),
            ("user_name", user_name.as_deref(), components.user_name.as_str()),
            ("password", password.as_deref(), components.password.as_str()),
            ("host_name", host_name.as_deref(), components.host_name.as_str()),
            ("port", expected_port.as_deref(), Some(actual_port.as_str())),
            ("url_path", url_path.as_deref(), components.url_path.as_str()),
            ("extra_info", extra_info.as_deref(), components.extra_info.as_str()),
        ];
        let mut passed = true;
        for (field, expected, actual) in checks {
            passed &= check(&mut result, test_num, &input, field, expected, actual);
        }
        if passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_crack_fixtures() {
    let result = run_cases(load_cases());
    println!("{}", result.summary());
    for failure in &result.failures {
        println!("{failure:?}");
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed > 0);
}

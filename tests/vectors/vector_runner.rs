use super::vector_loader::{Mode, TargetKind, TestCase, VectorFailure, VectorResult, load_vectors};
/// Vector runner
///
/// Runs every JSON case against the parser and collects mismatches.
use urlspan::{Field, Parser, Target, Url};

fn check(
    result: &mut Vec<VectorFailure>,
    test_num: usize,
    input: &str,
    field: &'static str,
    expected: Option<String>,
    actual: Option<String>,
) {
    if expected != actual {
        result.push(VectorFailure {
            test_num,
            input: input.to_string(),
            field,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        });
    }
}

fn check_fields(
    failures: &mut Vec<VectorFailure>,
    test_num: usize,
    input: &str,
    url: &Url<'_>,
    expected: [(&'static str, Option<String>); 6],
    port: Option<u16>,
) {
    let actual = [
        url.scheme(),
        url.userinfo(),
        url.host(),
        url.path(),
        url.query(),
        url.fragment(),
    ];
    for ((field, expected), actual) in expected.into_iter().zip(actual) {
        check(
            failures,
            test_num,
            input,
            field,
            expected,
            actual.map(str::to_string),
        );
    }
    check(
        failures,
        test_num,
        input,
        "port",
        port.map(|p| p.to_string()),
        url.port().map(|p| p.to_string()),
    );
}

/// Run vectors and return results
pub fn run_vectors(cases: Vec<TestCase>) -> VectorResult {
    let mut result = VectorResult::default();
    let mut test_num = 0;

    for case in cases {
        let TestCase::UrlTest {
            input,
            target,
            mode,
            failure,
            schema,
            userinfo,
            host,
            port,
            path,
            query,
            fragment,
        } = case
        else {
            continue;
        };
        test_num += 1;

        let target = match target {
            TargetKind::Url => Target::Url,
            TargetKind::Authority => Target::Authority,
        };
        let parsers = match mode {
            Mode::Lenient => vec![Parser::lenient()],
            Mode::Strict => vec![Parser::strict()],
            Mode::Both => vec![Parser::lenient(), Parser::strict()],
        };

        let before = result.failures.len();
        for parser in &parsers {
            match (parser.parse(&input, target), failure) {
                (Err(_), true) => {}
                (Ok(_), true) => result.failures.push(VectorFailure {
                    test_num,
                    input: input.clone(),
                    field: "parsing",
                    expected: "failure".to_string(),
                    actual: "success".to_string(),
                }),
                (Err(_), false) => result.failures.push(VectorFailure {
                    test_num,
                    input: input.clone(),
                    field: "parsing",
                    expected: "success".to_string(),
                    actual: "parse error".to_string(),
                }),
                (Ok(url), false) => check_fields(
                    &mut result.failures,
                    test_num,
                    &input,
                    &url,
                    [
                        ("schema", schema.clone()),
                        ("userinfo", userinfo.clone()),
                        ("host", host.clone()),
                        ("path", path.clone()),
                        ("query", query.clone()),
                        ("fragment", fragment.clone()),
                    ],
                    port,
                ),
            }
        }

        if result.failures.len() == before {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_url_vectors() {
    let result = run_vectors(load_vectors());
    for failure in &result.failures {
        eprintln!(
            "#{} {:?}: {} expected {} got {}",
            failure.test_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
}

#[test]
fn test_url_vectors_round_trip_through_components() {
    // Every accepted vector reports spans inside the input
    for case in load_vectors() {
        let TestCase::UrlTest {
            input,
            target: TargetKind::Url,
            mode: Mode::Lenient | Mode::Both,
            failure: false,
            ..
        } = case
        else {
            continue;
        };
        let url = Parser::lenient().parse(&input, Target::Url).unwrap();
        for field in Field::ALL {
            if let Some(span) = url.components().span(field) {
                assert!(span.end() <= input.len(), "{input}");
            }
        }
    }
}

use std::process::Command;

use num_bigint::BigInt;

use wadspline::configuration::Configuration;
use wadspline::encoding::abiencoder::{TEST_CASE_COUNT, WORD_SIZE, int256_word, to_hex, uint256_word};
use wadspline::encoding::csvtable::{parse_segments, render_segments};
use wadspline::fixture::fixturegenerator::FixtureGenerator;
use wadspline::fixture::segmenttable::SegmentTable;
use wadspline::fixture::testcase::FixedSegment;
use wadspline::math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;
use wadspline::math::fixedpoint::fixedpoint::FixedPoint;

fn wad() -> BigInt {
    BigInt::from(1_000_000_000_000_000_000u64)
}

/// Horner evaluation in WAD integer arithmetic, truncating after every product.
fn evaluate_fixed(segment: &FixedSegment, x: &FixedPoint) -> BigInt {
    let dx = x.raw() - segment.x_start().raw();
    let [c3, c2, c1, c0] = segment.coefs();
    let mut acc = c3.raw().clone();
    for coef in [c2, c1, c0] {
        acc = &acc * &dx / wad() + coef.raw();
    }
    acc
}

#[test]
fn test_cases_agree_with_fixed_point_evaluation() {
    let configuration = Configuration::new();
    let fixture = FixtureGenerator::new(&configuration).generate_random(7).unwrap();
    let table = SegmentTable::new(fixture.segments().to_vec()).unwrap();
    // 10^-4 in WAD units
    let tolerance = BigInt::from(100_000_000_000_000u64);

    for case in fixture.test_cases() {
        assert_eq!(table.locate(case.x()), case.index());
        let segment = &fixture.segments()[case.index()];
        assert!(segment.contains(case.x()));

        let y = FixedPoint::from_raw(evaluate_fixed(segment, case.x())).unwrap();
        assert!(
            y.ulps_from(case.y()) <= tolerance,
            "x = {}: fixed-point evaluation {} vs reference {}",
            case.x(),
            y,
            case.y()
        );
    }
}

#[test]
fn segment_constants_are_knot_values() {
    let configuration = Configuration::new();
    let fixture = FixtureGenerator::new(&configuration).generate_random(99).unwrap();
    let points = fixture.spline().points();

    for (segment, point) in fixture.segments().iter().zip(points) {
        assert_eq!(segment.coefs()[3], FixedPoint::from_f64(point.y()).unwrap());
        assert_eq!(segment.x_start(), &FixedPoint::from_f64(point.x()).unwrap());
    }
    let last = fixture.segments().last().unwrap();
    assert_eq!(last.x_end(), &FixedPoint::from_f64(fixture.spline().max_x()).unwrap());
}

#[test]
fn encoded_blob_layout() {
    let configuration = Configuration::new();
    let fixture = FixtureGenerator::new(&configuration).generate_random(3).unwrap();
    let encoded = fixture.encode().unwrap();
    let words: Vec<&[u8]> = encoded.chunks(WORD_SIZE).collect();
    let segment_count = fixture.segments().len();

    let tail = 1 + 3 * TEST_CASE_COUNT;
    assert_eq!(words[0], &uint256_word((tail * WORD_SIZE) as u64)[..]);
    assert_eq!(words[tail], &uint256_word(segment_count as u64)[..]);
    assert_eq!(words.len(), tail + 1 + 6 * segment_count);

    let first = &fixture.test_cases()[0];
    assert_eq!(words[1], &int256_word(first.x())[..]);
    assert_eq!(words[1 + TEST_CASE_COUNT], &int256_word(first.y())[..]);
    assert_eq!(words[1 + 2 * TEST_CASE_COUNT], &uint256_word(first.index() as u64)[..]);

    let last_segment = fixture.segments().last().unwrap();
    assert_eq!(words[words.len() - 1], &int256_word(last_segment.x_end())[..]);
}

#[test]
fn bulk_table_survives_csv() {
    let configuration = Configuration { bulk_segments: 300, ..Configuration::new() };
    let fixture = FixtureGenerator::new(&configuration).generate_bulk().unwrap();

    let csv = render_segments(fixture.segments());
    assert_eq!(csv.lines().count(), 300);
    assert!(!csv.contains('e') && !csv.contains('.'));

    let parsed = parse_segments(&csv).unwrap();
    assert_eq!(parsed, fixture.segments());
    assert!(SegmentTable::new(parsed).is_ok());
}

#[test]
fn random_command_prints_bare_hex() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_wadspline"))
            .args(["random", "5"])
            .output()
            .unwrap()
    };
    let output = run();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("0x"));
    assert!(!stdout.ends_with('\n'));
    assert!(stdout[2..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_eq!((stdout.len() - 2) % 64, 0);

    let configuration = Configuration::new();
    let expected = FixtureGenerator::new(&configuration).generate_random(5).unwrap().encode().unwrap();
    assert_eq!(stdout, to_hex(&expected));
    assert_eq!(String::from_utf8(run().stdout).unwrap(), stdout);
}

#[test]
fn bulk_and_lookup_commands() {
    let directory = tempfile::tempdir().unwrap();
    let csv = directory.path().join("spline.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_wadspline"))
        .args(["bulk", "--segments", "64", "--output"])
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("x = 1.5 (1500000000000000000)"));
    // the printed real is the exact decimal form of the printed WAD integer
    let y_line = stdout.lines().find(|line| line.starts_with("y = ")).unwrap();
    let (real, fixed) = y_line["y = ".len()..].trim_end_matches(')').split_once(" (").unwrap();
    let fixed: FixedPoint = fixed.parse().unwrap();
    assert_eq!(real, fixed.to_decimal().unwrap().normalize().to_string());
    assert_eq!(std::fs::read_to_string(&csv).unwrap().lines().count(), 64);

    let output = Command::new(env!("CARGO_BIN_EXE_wadspline"))
        .arg("lookup")
        .arg(&csv)
        .arg("1500000000000000000")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("Spline Segment"));
}

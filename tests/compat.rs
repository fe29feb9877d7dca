use std::fs;
use std::path::PathBuf;

use vnnlib::{
    compile::{self as compiler, Config, Interval, Property},
    parse_file, read_vnnlib_simple, Error,
};

const INF: f64 = f64::INFINITY;

/// Write a specification to a fresh file in the temporary directory.
fn write_spec(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("vnnlib-{}-{}.vnnlib", name, std::process::id()));
    fs::write(&path, text).expect("failed to write specification");
    path
}

fn read(name: &str, text: &str, num_inputs: usize, num_outputs: usize) -> vnnlib::Result<Vec<Property>> {
    let path = write_spec(name, text);
    let result = read_vnnlib_simple(&path, num_inputs, num_outputs);
    let _ = fs::remove_file(&path);
    result
}

fn intervals(property: &Property) -> Vec<(f64, f64)> {
    property.input_box.intervals.iter().map(|i| (i.low, i.high)).collect()
}

const BOX_BOX: &str = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (>= Y_0 0))
";

#[test]
fn infer_shapes() {
    let path = write_spec("infer_shapes", BOX_BOX);
    let script = parse_file(&path, true).expect("parsing failed");
    let _ = fs::remove_file(&path);

    let result = vnnlib::compile(&script, Config::new("X", "Y")).expect("compilation failed");
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes.len(), 1);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn box_box() {
    let result = read("box_box", BOX_BOX, 1, 1).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn box_box_negation() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (>= X_0 -1))
(assert (<= X_0 1))
(assert (>= Y_0 0))
";

    let result = read("box_box_negation", text, 1, 1).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(-1.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn box_box_exponential_notation() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (>= X_0 -1e0))
(assert (<= X_0 1e0))
(assert (>= Y_0 0.5))
";

    let result = read("box_box_exponential_notation", text, 1, 1).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(-1.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![-0.5]);
}

#[test]
fn exponential_notation_is_rejected_in_strict_mode() {
    let path = write_spec("strict_exponent", "(declare-const X_0 Real)\n(assert (<= X_0 1e0))\n");
    let result = parse_file(&path, true);
    let _ = fs::remove_file(&path);
    assert!(matches!(result, Err(Error::Lexical(_))));
}

#[test]
fn box_poly() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (>= Y_0 Y_1))
";

    let result = read("box_poly", text, 1, 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes.len(), 1);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0, 1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn box_poly_and() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (and (>= X_0 0) (<= X_0 1)))
(assert (>= Y_0 Y_1))
";

    let result = read("box_poly_and", text, 1, 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0, 1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn box_poly_or() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (or (>= Y_0 Y_1) (>= Y_0 1000)))
";

    let result = read("box_poly_or", text, 1, 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);

    let polytopes = &result[0].polytopes;
    assert_eq!(polytopes.len(), 2);
    assert_eq!(polytopes[0].matrix, vec![vec![-1.0, 1.0]]);
    assert_eq!(polytopes[0].rhs, vec![0.0]);
    assert_eq!(polytopes[1].matrix, vec![vec![-1.0, 0.0]]);
    assert_eq!(polytopes[1].rhs, vec![-1000.0]);
}

#[test]
fn box_poly_dnf_1() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (or (and (>= Y_0 Y_1)) (and (>= Y_0 1000) (<= Y_1 1010))))
";

    let result = read("box_poly_dnf_1", text, 1, 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);

    let polytopes = &result[0].polytopes;
    assert_eq!(polytopes.len(), 2);
    assert_eq!(polytopes[0].matrix, vec![vec![-1.0, 1.0]]);
    assert_eq!(polytopes[0].rhs, vec![0.0]);
    assert_eq!(polytopes[1].matrix, vec![vec![-1.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(polytopes[1].rhs, vec![-1000.0, 1010.0]);
}

#[test]
fn box_poly_dnf_2() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (or (and (>= X_0 0.5) (>= Y_0 Y_1)) (and (<= X_0 0.5) (<= Y_0 Y_1))))
";

    let result = read("box_poly_dnf_2", text, 1, 2).unwrap();
    assert_eq!(result.len(), 2);

    assert_eq!(intervals(&result[0]), vec![(0.5, 1.0)]);
    assert_eq!(result[0].polytopes.len(), 1);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0, 1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);

    assert_eq!(intervals(&result[1]), vec![(0.0, 0.5)]);
    assert_eq!(result[1].polytopes.len(), 1);
    assert_eq!(result[1].polytopes[0].matrix, vec![vec![1.0, -1.0]]);
    assert_eq!(result[1].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn box_poly_dnf_3() {
    let text = "(declare-const X_0 Real)
(declare-const X_1 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (>= X_1 0))
(assert (<= X_1 1))
(assert (or (and (>= X_0 0.5) (>= Y_0 Y_1)) (and (<= X_0 0.5) (<= Y_0 Y_1))))
(assert (or (and (>= X_1 0.5) (>= Y_0 Y_1)) (and (<= X_1 0.5) (<= Y_0 Y_1))))
";

    let result = read("box_poly_dnf_3", text, 2, 2).unwrap();
    assert_eq!(result.len(), 4);

    let expected = vec![
        (vec![(0.5, 1.0), (0.5, 1.0)], vec![vec![-1.0, 1.0], vec![-1.0, 1.0]]),
        (vec![(0.0, 0.5), (0.5, 1.0)], vec![vec![-1.0, 1.0], vec![1.0, -1.0]]),
        (vec![(0.5, 1.0), (0.0, 0.5)], vec![vec![1.0, -1.0], vec![-1.0, 1.0]]),
        (vec![(0.0, 0.5), (0.0, 0.5)], vec![vec![1.0, -1.0], vec![1.0, -1.0]]),
    ];

    for (property, (bounds, matrix)) in result.iter().zip(expected) {
        assert_eq!(intervals(property), bounds);
        assert_eq!(property.polytopes.len(), 1);
        assert_eq!(property.polytopes[0].matrix, matrix);
        assert_eq!(property.polytopes[0].rhs, vec![0.0, 0.0]);
    }
}

#[test]
fn unbounded_inputs() {
    let text = "(declare-const X_0 Real)
(declare-const X_1 Real)
(declare-const Y_0 Real)
(assert (<= X_1 3))
(assert (<= Y_0 0))
";

    let result = read("unbounded_inputs", text, 2, 1).unwrap();
    assert_eq!(result[0].input_box.intervals, vec![Interval::new(-INF, INF), Interval::new(-INF, 3.0)]);
}

#[test]
fn scaled_box_bound() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (<= (* 2 X_0) 3))
(assert (>= Y_0 0))
";

    let result = read("scaled_box_bound", text, 1, 1).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].input_box.intervals, vec![Interval::new(-INF, 1.5)]);
}

#[test]
fn infeasible_branch_still_rejects_nuisance_variables() {
    let text = "(declare-const Y_0 Real)
(declare-const eps Real)
(assert (<= 1 0))
(assert (<= eps 0))
";

    let path = write_spec("infeasible_nuisance", text);
    let script = parse_file(&path, true).expect("parsing failed");
    let _ = fs::remove_file(&path);

    let err = vnnlib::compile(&script, Config::default()).unwrap_err();
    assert!(matches!(err, Error::Compile(compiler::Error::UnexpectedVariable(ref name)) if name == "eps"));

    let script = vnnlib::parse_str("(declare-const Y_0 Real)(assert (<= 1 0))(assert (<= Y_0 0))", true).unwrap();
    let err = vnnlib::compile(&script, Config::default().with_output_size(0)).unwrap_err();
    assert!(matches!(err, Error::Compile(compiler::Error::IndexOutOfRange { index: 0, size: 0 })));
}

#[test]
fn error_non_model_variables_1() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(declare-const eps Real)
(assert (and (>= X_0 eps) (<= X_0 eps)))
(assert (>= Y_0 Y_1))
";

    let err = read("error_non_model_variables_1", text, 1, 2).unwrap_err();
    assert!(matches!(err, Error::Compile(compiler::Error::UnexpectedVariable(ref name)) if name == "eps"));
    assert!(err.to_string().contains("unexpected variable type"));
}

#[test]
fn error_non_model_variables_2() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(declare-const eps Real)
(assert (and (>= X_0 0) (<= X_0 1)))
(assert (or (and (>= X_0 eps) (>= Y_0 Y_1)) (and (<= X_0 eps) (<= Y_0 Y_1))))
";

    let err = read("error_non_model_variables_2", text, 1, 2).unwrap_err();
    assert!(err.to_string().contains("unexpected variable type"));
}

#[test]
fn error_unsupported_func() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (and (>= X_0 0) (<= (xor 2 X_0) 1)))
(assert (>= Y_0 Y_1))
";

    let err = read("error_unsupported_func", text, 1, 2).unwrap_err();
    assert_eq!(err.to_string(), "Function 'xor' is not supported by the legacy parser");
}

#[test]
fn add_const() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (>= (+ X_0 1) 1))
(assert (<= X_0 1))
(assert (>= Y_0 0))
";

    let result = read("add_const", text, 1, 1).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn add_var() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (>= Y_0 0))
(assert (>= Y_1 0))
(assert (<= (+ Y_0 Y_1) 1))
";

    let result = read("add_var", text, 1, 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0, 0.0], vec![0.0, -1.0], vec![1.0, 1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0, 0.0, 1.0]);
}

#[test]
fn subtract_const() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (>= (- X_0 1) 0))
(assert (<= X_0 10))
(assert (>= Y_0 0))
";

    let result = read("subtract_const", text, 1, 1).unwrap();
    assert_eq!(intervals(&result[0]), vec![(1.0, 10.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn subtract_var() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (>= X_0 0))
(assert (<= X_0 1))
(assert (>= Y_0 0))
(assert (>= Y_1 0))
(assert (>= (- Y_0 Y_1) 1))
";

    let result = read("subtract_var", text, 1, 2).unwrap();
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0, 0.0], vec![0.0, -1.0], vec![-1.0, 1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0, 0.0, -1.0]);
}

#[test]
fn mul_const() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (>= (* X_0 2) 0))
(assert (>= (* (- 2) X_0) (- 2)))
(assert (<= (* 0 X_0) 1000))
(assert (>= Y_0 0))
";

    let result = read("mul_const", text, 1, 1).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(intervals(&result[0]), vec![(0.0, 1.0)]);
    assert_eq!(result[0].polytopes[0].matrix, vec![vec![-1.0]]);
    assert_eq!(result[0].polytopes[0].rhs, vec![0.0]);
}

#[test]
fn mul_vars() {
    let text = "(declare-const X_0 Real)
(declare-const Y_0 Real)
(assert (>= (* X_0 2) 0))
(assert (<= (* 2 X_0) 2))
(assert (>= (* Y_0 Y_0) 0))
";

    let err = read("mul_vars", text, 1, 1).unwrap_err();
    assert!(matches!(err, Error::Compile(compiler::Error::Nonlinear)));
}

#[test]
fn compilation_is_deterministic() {
    let text = "(declare-const X_0 Real)
(declare-const a Real)
(declare-const b Real)
(declare-const Y_0 Real)
(declare-const Y_1 Real)
(assert (<= (+ X_0 (- a a)) 1))
(assert (or (and (>= Y_0 (+ b 1 (- b)))) (and (<= Y_1 2) (>= Y_0 Y_1))))
";

    let first = read("deterministic_1", text, 1, 2).unwrap();
    let second = read("deterministic_2", text, 1, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].polytopes.len(), 2);
}

use crate::compare::model::{ComparisonResult, Mismatch, MismatchKind, Mode};
use crate::config::RenderOptions;
use crate::render::value_render::{render_side, render_value};
use crate::value::Value;
use vassert_core_types::Severity;

/// Literal shown on the expectation line of the nil predicates.
pub const NIL_LITERAL: &str = "`nil`";

const INDENT: &str = "    ";
const GOT: &str = "Got       ";
const GOT_DEEP: &str = "Got            ";
const EXPECT_DEEP_NE: &str = "Expect deep != ";

fn op(negated: bool) -> &'static str {
    if negated {
        "!="
    } else {
        "=="
    }
}

/// Two-line comparison form: `Got       <got>` / `Expect <op> <want>`.
fn comparison_lines(got: &str, negated: bool, want: &str) -> Vec<String> {
    vec![
        format!("{GOT}{got}"),
        format!("Expect {} {want}", op(negated)),
    ]
}

fn mismatch_line(mismatch: &Mismatch, options: &RenderOptions) -> String {
    let mut line = String::new();
    if mismatch.kind == MismatchKind::Nil {
        line.push_str("nil ");
    }
    line.push_str(&format!(
        "⟦{}⟧ != ⟦{}⟧",
        render_side(mismatch.got.as_ref()),
        render_side(mismatch.want.as_ref())
    ));
    if !mismatch.path.is_root() {
        line.push_str(" for ");
        line.push_str(&mismatch.path.qualified(&options.root_name));
    }
    line
}

/// One line per mismatch of a failed deep-equal comparison.
pub fn deep_lines(result: &ComparisonResult, options: &RenderOptions) -> Vec<String> {
    result
        .mismatches
        .iter()
        .map(|m| mismatch_line(m, options))
        .collect()
}

/// Display lines for a failed binary comparison.
///
/// `negated` is true when the assertion expected inequality. Shallow results
/// use the comparison form; deep results list every mismatch for a failed
/// deep-equal, or show both operands for a failed deep-not-equal.
pub fn render_result(
    got: &Value,
    want: &Value,
    result: &ComparisonResult,
    negated: bool,
    options: &RenderOptions,
) -> Vec<String> {
    match (result.mode, negated) {
        (Mode::Shallow, _) => comparison_lines(&render_value(got), negated, &render_value(want)),
        (Mode::Deep, false) => deep_lines(result, options),
        (Mode::Deep, true) => vec![
            format!("{GOT_DEEP}{}", render_value(got)),
            format!("{EXPECT_DEEP_NE}{}", render_value(want)),
        ],
    }
}

/// Display lines for a failed `IsNil` (`negated == false`) or `IsNotNil`.
pub fn render_nil_check(got: &Value, negated: bool) -> Vec<String> {
    comparison_lines(&render_value(got), negated, NIL_LITERAL)
}

/// Prefix lines with the `Error:<label>` / `Critical:<label>` header.
///
/// Every line nests under the single header, indented by four spaces.
pub fn render_block(severity: Severity, label: &str, lines: &[String]) -> Vec<String> {
    let mut block = Vec::with_capacity(lines.len() + 1);
    block.push(format!("{}:{label}", severity.header()));
    block.extend(lines.iter().map(|l| format!("{INDENT}{l}")));
    block
}

/// Complete rendered block for a failed binary comparison.
pub fn render(
    got: &Value,
    want: &Value,
    result: &ComparisonResult,
    negated: bool,
    severity: Severity,
    label: &str,
    options: &RenderOptions,
) -> Vec<String> {
    let lines = render_result(got, want, result, negated, options);
    render_block(severity, label, &lines)
}

/// Join block lines into the text written to an output sink.
pub fn join_block(block: &[String]) -> String {
    block.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_equals_failure_lines() {
        let got = Value::from(false);
        let want = Value::from(true);
        let result = compare(&got, &want, Mode::Shallow);

        let lines = render_result(&got, &want, &result, false, &opts());

        assert_eq!(lines, vec!["Got       false", "Expect == true"]);
    }

    #[test]
    fn test_not_equals_failure_lines() {
        let got = Value::from(1);
        let result = compare(&got, &got, Mode::Shallow);

        let lines = render_result(&got, &got, &result, true, &opts());

        assert_eq!(lines, vec!["Got       1", "Expect != 1"]);
    }

    #[test]
    fn test_nil_check_lines() {
        assert_eq!(
            render_nil_check(&Value::Nil, true),
            vec!["Got       <nil>", "Expect != `nil`"]
        );
        let not_nil = Value::reference(Value::record("T", [("s", "not_nil")]));
        assert_eq!(
            render_nil_check(&not_nil, false),
            vec!["Got       &{not_nil}", "Expect == `nil`"]
        );
    }

    #[test]
    fn test_deep_lines_with_paths() {
        let got = Value::record("T", [("V", Value::seq(["1", "2"]))]);
        let want = Value::record("T", [("V", Value::seq(["2", "4"]))]);
        let result = compare(&got, &want, Mode::Deep);

        let lines = render_result(&got, &want, &result, false, &opts());

        assert_eq!(
            lines,
            vec!["⟦1⟧ != ⟦2⟧ for v.V[0]", "⟦2⟧ != ⟦4⟧ for v.V[1]"]
        );
    }

    #[test]
    fn test_deep_nil_mismatch_at_root() {
        let got = Value::typed_nil("*int");
        let result = compare(&got, &Value::Nil, Mode::Deep);

        let lines = deep_lines(&result, &opts());

        assert_eq!(lines, vec!["nil ⟦<nil>⟧ != ⟦<nil>⟧"]);
    }

    #[test]
    fn test_deep_root_leaf_omits_path() {
        let result = compare(&Value::from(2), &Value::from(3), Mode::Deep);
        assert_eq!(deep_lines(&result, &opts()), vec!["⟦2⟧ != ⟦3⟧"]);
    }

    #[test]
    fn test_deep_absent_key() {
        let got = Value::map([("a", 1)]);
        let want = Value::map(Vec::<(&str, i32)>::new());
        let result = compare(&got, &want, Mode::Deep);

        assert_eq!(deep_lines(&result, &opts()), vec!["⟦1⟧ != ⟦<absent>⟧ for v[a]"]);
    }

    #[test]
    fn test_custom_root_name() {
        let got = Value::record("T", [("n", 1)]);
        let want = Value::record("T", [("n", 2)]);
        let result = compare(&got, &want, Mode::Deep);
        let options = RenderOptions {
            root_name: "value".to_string(),
        };

        assert_eq!(deep_lines(&result, &options), vec!["⟦1⟧ != ⟦2⟧ for value.n"]);
    }

    #[test]
    fn test_deep_not_equals_lines() {
        let got = Value::record("T", [("V", Value::seq(["1", "2"]))]);
        let result = compare(&got, &got, Mode::Deep);

        let lines = render_result(&got, &got, &result, true, &opts());

        assert_eq!(lines, vec!["Got            {[1 2]}", "Expect deep != {[1 2]}"]);
    }

    #[test]
    fn test_block_single_header() {
        let lines = vec!["a".to_string(), "b".to_string()];

        let block = render_block(Severity::Critical, "label", &lines);

        assert_eq!(block, vec!["Critical:label", "    a", "    b"]);
        assert_eq!(join_block(&block), "Critical:label\n    a\n    b");
    }

    #[test]
    fn test_block_empty_label() {
        let block = render_block(Severity::Error, "", &["x".to_string()]);
        assert_eq!(block[0], "Error:");
    }

    #[test]
    fn test_render_is_deterministic() {
        let got = Value::record("T", [("V", Value::seq(["1", "2"]))]);
        let want = Value::record("T", [("V", Value::seq(["2", "4"]))]);
        let result = compare(&got, &want, Mode::Deep);

        let first = render(&got, &want, &result, false, Severity::Error, "l", &opts());
        let second = render(&got, &want, &result, false, Severity::Error, "l", &opts());

        assert_eq!(first, second);
    }
}

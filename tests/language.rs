use statica::{
    eval_expression, run_program, run_script,
    interpreter::{
        constants::ConstantBindings,
        parser::parse_expression,
        lexer::tokenize,
        runtime::ScriptedRuntime,
        value::Value,
    },
};

fn program_outputs(source: &str, inputs: Vec<Value>) -> Vec<String> {
    let mut runtime = ScriptedRuntime::new(inputs);
    if let Err(e) = run_program(source, &ConstantBindings::new(), &mut runtime) {
        panic!("Program failed: {e}");
    }
    runtime.outputs().to_vec()
}

fn script_outputs(source: &str, inputs: Vec<Value>) -> Vec<String> {
    let mut runtime = ScriptedRuntime::new(inputs);
    if let Err(e) = run_script(source, &ConstantBindings::new(), &mut runtime) {
        panic!("Script failed: {e}");
    }
    runtime.outputs().to_vec()
}

fn assert_program_failure(source: &str) {
    let mut runtime = ScriptedRuntime::default();
    if run_program(source, &ConstantBindings::new(), &mut runtime).is_ok() {
        panic!("Program succeeded but was expected to fail")
    }
}

fn eval(source: &str) -> Value {
    let mut runtime = ScriptedRuntime::default();
    match eval_expression(source, &ConstantBindings::new(), &mut runtime) {
        Ok(value) => value,
        Err(e) => panic!("Expression failed: {e}"),
    }
}

#[test]
fn arithmetic_respects_precedence() {
    assert_eq!(eval("1 + 2 * 3"), Value::Number(7.0));
    assert_eq!(eval("(1 + 2) * 3"), Value::Number(9.0));
    assert_eq!(eval("2 * 3 + 4 * 5"), Value::Number(26.0));
}

#[test]
fn array_literals_build_typed_arrays() {
    assert_eq!(eval("number[1,2,3]"),
               Value::Array(vec![Value::Number(1.0),
                                 Value::Number(2.0),
                                 Value::Number(3.0)]));
    assert_eq!(eval("number[]"), Value::Array(Vec::new()));
    assert_eq!(eval("number[][number[1], number[2, 3]]"),
               Value::Array(vec![Value::Array(vec![Value::Number(1.0)]),
                                 Value::Array(vec![Value::Number(2.0),
                                                   Value::Number(3.0)])]));
}

#[test]
fn constants_expand_before_checking() {
    let mut constants = ConstantBindings::new();
    let tokens = tokenize("true").unwrap();
    constants.insert("A".to_string(), parse_expression(&tokens).unwrap());

    let mut runtime = ScriptedRuntime::default();
    let value = eval_expression("A ? 1 : 2", &constants, &mut runtime).unwrap();
    assert_eq!(value, Value::Number(1.0));
}

#[test]
fn unbound_constant_fails_before_evaluation() {
    let mut runtime = ScriptedRuntime::default();
    let result = eval_expression("MISSING + 1", &ConstantBindings::new(), &mut runtime);
    assert!(result.is_err());
}

#[test]
fn functions_pass_values_and_return() {
    let outputs = program_outputs("def f(x: number): number { return x + 1; } \
                                   def main() { output(f(2)); }",
                                  Vec::new());
    assert_eq!(outputs, ["3"]);
}

#[test]
fn foreach_iterates_in_order() {
    let outputs = script_outputs("foreach (var i <-- number[1,2,3]) { output(i); }",
                                 Vec::new());
    assert_eq!(outputs, ["1", "2", "3"]);
}

#[test]
fn loop_variable_is_gone_after_the_loop() {
    assert_program_failure("def main() { \
                              foreach (var i <-- number[1,2,3]) { output(i); } \
                              output(i); \
                            }");
}

#[test]
fn loop_variable_must_be_fresh() {
    assert_program_failure("def main() { \
                              var i: number = 0; \
                              foreach (var i <-- number[1,2,3]) { output(i); } \
                            }");
}

#[test]
fn out_of_bounds_index_is_a_runtime_error() {
    // Both operand types are legal, so this passes the checker and only
    // fails when the lookup actually happens.
    let error = {
        let mut runtime = ScriptedRuntime::default();
        eval_expression("number[1,2]#5", &ConstantBindings::new(), &mut runtime)
            .expect_err("indexing past the end must fail")
    };
    assert!(error.to_string().contains("out of bounds"), "{error}");
}

#[test]
fn indexing_is_zero_based() {
    assert_eq!(eval("number[4,5,6]#0"), Value::Number(4.0));
    assert_eq!(eval("number[4,5,6]#2"), Value::Number(6.0));
    assert_eq!(eval("number[4,5,6] # (1 + 1)"), Value::Number(6.0));
}

#[test]
fn fractional_and_negative_indices_are_rejected() {
    let mut runtime = ScriptedRuntime::default();
    assert!(eval_expression("number[1,2]#0.5", &ConstantBindings::new(), &mut runtime).is_err());
    assert!(eval_expression("number[1,2] # -1", &ConstantBindings::new(), &mut runtime).is_err());
}

#[test]
fn greater_than_agrees_with_its_expansion() {
    assert_eq!(eval("3 > 2"), Value::Bool(true));
    assert_eq!(eval("2 > 3"), Value::Bool(false));
    assert_eq!(eval("2 > 2"), Value::Bool(false));
    assert_eq!(eval("-(2 < 2) & -(2 = 2)"), Value::Bool(false));
}

#[test]
fn ternary_only_evaluates_the_chosen_branch() {
    // One scripted input; the untaken branch would consume a second one.
    let mut runtime = ScriptedRuntime::new(vec![Value::Number(10.0)]);
    let value = eval_expression("true ? input(number) : input(number)",
                                &ConstantBindings::new(),
                                &mut runtime).unwrap();
    assert_eq!(value, Value::Number(10.0));
}

#[test]
fn negate_covers_every_type() {
    assert_eq!(eval("-5"), Value::Number(-5.0));
    assert_eq!(eval("-true"), Value::Bool(false));
    assert_eq!(eval("-\"abc\""), Value::Str("cba".to_string()));
    assert_eq!(eval("-number[1,2,3]"),
               Value::Array(vec![Value::Number(3.0),
                                 Value::Number(2.0),
                                 Value::Number(1.0)]));
}

#[test]
fn stringify_renders_values() {
    assert_eq!(eval("@3"), Value::Str("3".to_string()));
    assert_eq!(eval("@3 + @4"), Value::Str("34".to_string()));
    assert_eq!(eval("@number[1,2]"), Value::Str("[1, 2]".to_string()));
}

#[test]
fn plus_concatenates_strings_and_arrays() {
    assert_eq!(eval("\"ab\" + \"cd\""), Value::Str("abcd".to_string()));
    assert_eq!(eval("number[1] + number[2,3]"),
               Value::Array(vec![Value::Number(1.0),
                                 Value::Number(2.0),
                                 Value::Number(3.0)]));
}

#[test]
fn equality_is_structural() {
    assert_eq!(eval("number[1,2] = number[1,2]"), Value::Bool(true));
    assert_eq!(eval("number[1,2] = number[2,1]"), Value::Bool(false));
    assert_eq!(eval("\"a\" = \"a\""), Value::Bool(true));
}

#[test]
fn while_re_evaluates_its_condition() {
    let outputs = script_outputs("var n: number = 0; \
                                  while (n < 3) { output(n); n = n + 1; }",
                                 Vec::new());
    assert_eq!(outputs, ["0", "1", "2"]);
}

#[test]
fn foreach_re_fetches_its_iterable() {
    // The body shrinks the iterated array, so the loop stops early.
    let outputs = script_outputs("var xs: number[] = number[1,2,3,4]; \
                                  foreach (var x <-- xs) { \
                                    output(x); \
                                    xs = number[1,2]; \
                                  }",
                                 Vec::new());
    assert_eq!(outputs, ["1", "2"]);
}

#[test]
fn return_unwinds_nested_blocks() {
    let outputs = program_outputs("def first(xs: number[]): number { \
                                     foreach (var x <-- xs) { \
                                       if (2 < x) { return x; } \
                                     } \
                                     return 0; \
                                   } \
                                   def main() { output(first(number[1,2,3,4])); }",
                                  Vec::new());
    assert_eq!(outputs, ["3"]);
}

#[test]
fn bare_return_ends_a_script() {
    let outputs = script_outputs("output(1); return; output(2);", Vec::new());
    assert_eq!(outputs, ["1"]);
}

#[test]
fn input_values_flow_through_the_runtime() {
    let outputs = script_outputs("var x: number = input(number); output(x * 2);",
                                 vec![Value::Number(21.0)]);
    assert_eq!(outputs, ["42"]);
}

#[test]
fn block_scopes_do_not_leak() {
    assert_program_failure("def main() { \
                              if (true) { var x: number = 1; } \
                              output(x); \
                            }");
    // Shadowing inside the block is fine and unwinds afterwards.
    let outputs = script_outputs("var x: number = 1; \
                                  { var y: number = 2; output(x + y); } \
                                  output(x);",
                                 Vec::new());
    assert_eq!(outputs, ["3", "1"]);
}

#[test]
fn declarations_must_match_their_type() {
    assert_program_failure("def main() { var x: number = true; }");
    assert_program_failure("def main() { var x: number = 1; x = \"no\"; }");
    assert_program_failure("def main() { var x: number = 1; var x: number = 2; }");
}

#[test]
fn conditions_must_be_boolean() {
    assert_program_failure("def main() { if (1) { output(1); } }");
    assert_program_failure("def main() { while (\"x\") { output(1); } }");
}

#[test]
fn calls_are_checked_against_signatures() {
    assert_program_failure("def f(x: number): number { return x; } \
                            def main() { output(f(true)); }");
    assert_program_failure("def f(x: number): number { return x; } \
                            def main() { output(f(1, 2)); }");
    assert_program_failure("def main() { output(g(1)); }");
    // A void callee has no value to output.
    assert_program_failure("def f(x: number) { output(x); } \
                            def main() { output(f(1)); }");
}

#[test]
fn return_values_are_checked() {
    assert_program_failure("def f(): number { return true; } \
                            def main() { output(f()); }");
    assert_program_failure("def f(): number { return; } \
                            def main() { output(f()); }");
    assert_program_failure("def f() { return 1; } def main() { f(); }");
}

#[test]
fn duplicate_declarations_are_parse_errors() {
    assert_program_failure("def f() { } def f() { } def main() { }");
    assert_program_failure("def f(x: number, x: number) { } def main() { }");
}

#[test]
fn comments_and_lines_are_skipped() {
    let outputs = script_outputs("// leading comment\noutput(1); // trailing\noutput(2);",
                                 Vec::new());
    assert_eq!(outputs, ["1", "2"]);
}

#[test]
fn example_program_runs() {
    let outputs = program_outputs(include_str!("example.stc"),
                                  vec![Value::Number(5.0)]);
    assert_eq!(outputs, ["120"]);
}

use std::io::{self, Write};

use rockstar::{
    Options,
    error::{Error, LexError, RuntimeError},
    interpreter::{environment::ScopeMode, value::core::Value},
    run, run_with_options,
};

fn output_with_input(src: &str, input: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run(src, &mut input.as_bytes(), &mut output) {
        panic!("Script failed: {e}\n{src}");
    }
    String::from_utf8(output).unwrap()
}

fn output(src: &str) -> String {
    output_with_input(src, "")
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output(src), expected, "{src}");
}

fn failure(src: &str) -> Error {
    let mut output = Vec::new();
    match run(src, &mut "".as_bytes(), &mut output) {
        Ok(_) => panic!("Script succeeded but was expected to fail\n{src}"),
        Err(e) => e,
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match failure(src) {
        Error::Runtime(e) => e,
        e => panic!("Expected a runtime error, found {e}"),
    }
}

#[test]
fn pronoun_prints_last_variable() {
    assert_output("My heart is 5\nWhisper it", "5\n");
}

#[test]
fn poetic_literals() {
    assert_output("Tommy was a lovestruck lumberjack\nSay Tommy", "100\n");
    assert_output("Rockstar says Hello San Francisco!\nSay Rockstar", "Hello San Francisco!\n");
    assert_output("My pi is ice. cold\nSay my pi", "3.4\n");
    assert_output("My heart is lovely (a comment) days\nSay my heart", "64\n");
}

#[test]
fn increment_chaining() {
    assert_output("My counter is 0\nBuild my counter up, up, up\nSay my counter", "3\n");
    assert_output("Knock my counter down, down\nSay my counter", "-2\n");
    assert_output("My flag is right\nBuild my flag up\nSay my flag", "false\n");
    assert_output("My flag is right\nBuild my flag up, up\nSay my flag", "true\n");
}

#[test]
fn incrementing_a_string_fails() {
    assert!(matches!(runtime_failure("My word says hello\nBuild my word up"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn comments_have_no_effect() {
    assert_output("(this spans\nmultiple lines)\nSay \"hi\" (and this is ignored)", "hi\n");
}

#[test]
fn arithmetic_and_coercion() {
    assert_output("Say 3 plus 4 times 2", "11\n");
    assert_output("Say 10 over 4", "2.5\n");
    assert_output("Say 1 minus 3", "-2\n");
    assert_output("Say 0.1 plus 0.2", "0.3\n");
    assert_output("Say \"5\" plus 3", "53\n");
    assert_output("Say nothing plus 2", "2\n");
    assert_output("Say true plus 1", "true1\n");
    assert_output("Say \"6\" times 7", "42\n");
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_failure("Say 1 over 0"),
                     RuntimeError::ArithmeticError { .. }));
    assert!(matches!(runtime_failure("Say \"five\" minus 1"),
                     RuntimeError::ArithmeticError { .. }));
    assert!(matches!(runtime_failure("Say true times 2"),
                     RuntimeError::ArithmeticError { .. }));
}

#[test]
fn equality_coerces() {
    assert_output("Say 5 is \"5.0\"", "true\n");
    assert_output("Say nothing is 0", "true\n");
    assert_output("Say nothing is \"\"", "true\n");
    assert_output("Say mysterious is nothing", "false\n");
    assert_output("Say mysterious is mysterious", "true\n");
    assert_output("Say true is 5", "true\n");
    assert_output("Say 5 is \"five\"", "false\n");
    assert_output("Say 5 ain't 4", "true\n");
    assert_output("Say 5 is not 5", "false\n");
}

#[test]
fn ordering_comparisons() {
    assert_output("Say 5 is higher than 3", "true\n");
    assert_output("Say 5 is as low as 5", "true\n");
    assert_output("Say \"apple\" is lower than \"banana\"", "true\n");
    assert_output("Say \"10\" is greater than 9", "true\n");
    assert_output("Say nothing is smaller than 1", "true\n");
}

#[test]
fn ordering_errors() {
    assert!(matches!(runtime_failure("Say true is higher than \"x\""),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_failure("Say mysterious is lower than 5"),
                     RuntimeError::ComparisonError { .. }));
    assert!(matches!(runtime_failure("Say true is as big as false"),
                     RuntimeError::ComparisonError { .. }));
}

#[test]
fn logic_short_circuits() {
    assert_output("Say true and false", "false\n");
    assert_output("Say false or true", "true\n");
    assert_output("Say false nor false", "true\n");
    assert_output("Say not nothing", "true\n");
    // The right operand would fail: nothing named Undefined exists.
    assert_output("Say false and Undefined taking 1", "false\n");
    assert_output("Say true or Undefined taking 1", "true\n");
}

#[test]
fn unset_variables_are_null() {
    assert_output("Say my ghost", "null\n");
    assert_output("My heart is mysterious\nSay my heart", "mysterious\n");
}

#[test]
fn conditionals() {
    assert_output("My heart is 5\nIf my heart is 6\nSay \"six\"\nElse\nSay \"not six\"\n",
                  "not six\n");
    assert_output("My heart is 7\nIf my heart is 5\nSay \"five\"\nElse If my heart is 7\nSay \
                   \"seven\"\nElse\nSay \"other\"",
                  "seven\n");
}

#[test]
fn indentation_ends_blocks() {
    assert_output("If nothing\n    Say 1\nSay 2", "2\n");
    assert_output("While nothing\n\tSay 1\nSay 2", "2\n");
    assert_output("If nothing\n    Say 1\nElse\n    Say 2\nSay 3", "2\n3\n");
    assert_output("Echo takes my word\n    Say my word\nEcho taking \"hi\"", "hi\n");
}

#[test]
fn nested_indented_blocks() {
    let src = "My count is 0\nWhile my count is lower than 2\n    Build my count up\n    If my \
               count is 1\n        Say \"one\"\n    Say my count\nSay \"done\"";
    assert_output(src, "one\n1\n2\ndone\n");
}

#[test]
fn mixed_indentation_fails() {
    match failure("If nothing\n \tSay 1") {
        Error::Lexer(e @ LexError::MixedIndentation { .. }) => {
            assert_eq!(Error::Lexer(e).to_string(),
                       "Error: 2:0 - 2:2: Cannot mix spaces and tabs within indentation.");
        },
        e => panic!("Unexpected error {e}"),
    }
}

#[test]
fn loops_break_and_continue() {
    assert_output("My count is 0\nWhile true\nBuild my count up\nIf my count is 4\nBreak it \
                   down\n\n\nSay my count",
                  "4\n");
    assert_output("My count is 0\nUntil my count is 5\nBuild my count up\nIf my count is 3\nTake \
                   it to the top\n\nSay my count",
                  "1\n2\n4\n5\n");
}

#[test]
fn loop_condition_is_tested_first() {
    assert_output("While false\nSay \"never\"\n\nSay \"done\"", "done\n");
}

#[test]
fn give_back_leaves_loop_and_function() {
    let src = "Counter takes my limit\nMy count is 0\nWhile my count is lower than my limit\nBuild \
               my count up\nIf my count is 3\nGive back my count\n\nSay \"looping\"\n\nGive back \
               0\n\nSay Counter taking 10";
    assert_output(src, "looping\nlooping\n3\n");
}

#[test]
fn function_without_give_back_returns_null() {
    assert_output("Noop takes my heart\nPut my heart into your heart\n\nSay Noop taking 1",
                  "null\n");
}

#[test]
fn recursion() {
    let src = "Fact takes my number\nIf my number is as low as 1\nGive back 1\n\nPut my number \
               minus 1 into my next\nPut Fact taking my next into my rest\nGive back my number \
               times my rest\n\nSay Fact taking 5";
    // Shared scope: the recursive call overwrites `my number`.
    assert_eq!(output(src), "1\n");

    let mut out = Vec::new();
    run_with_options(src,
                     &Options { scope: ScopeMode::Isolated },
                     &mut "".as_bytes(),
                     &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "120\n");
}

#[test]
fn fallback_call_with_single_argument() {
    assert_output("Echo takes my word\nSay my word\n\nEcho \"hi\"", "hi\n");
}

#[test]
fn arity_mismatch_is_distinct() {
    match runtime_failure("Echo takes my word\nGive back my word\n\nSay Echo taking 1, 2") {
        RuntimeError::ArityError { name,
                                   expected,
                                   found,
                                   .. } => {
            assert_eq!(name, "echo");
            assert_eq!((expected, found), (1, 2));
        },
        e => panic!("Unexpected error {e:?}"),
    }
}

#[test]
fn calling_an_undeclared_function_fails_at_runtime() {
    assert!(matches!(runtime_failure("Say Stranger taking 1"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn scope_modes() {
    let src = "Overwrite takes my heart\nPut \"changed\" into my heart\n\nMy heart is \
               \"original\"\nOverwrite taking \"x\"\nSay my heart";

    assert_output(src, "changed\n");

    let mut out = Vec::new();
    run_with_options(src,
                     &Options { scope: ScopeMode::Isolated },
                     &mut "".as_bytes(),
                     &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "original\n");
}

#[test]
fn listen_reads_lines() {
    let src = "Listen to my heart\nListen to my soul\nListen\nListen to your love\nSay my \
               heart\nSay my soul\nSay your love";
    assert_eq!(output_with_input(src, "Hello\r\nWorld\nskipped\n"), "Hello\nWorld\n\n");
}

#[test]
fn top_level_give_back_is_the_result() {
    let mut out = Vec::new();
    let result = run("Say 1\nGive back 5\nSay 2", &mut "".as_bytes(), &mut out).unwrap();

    assert_eq!(result, Some(Value::Number(5.into())));
    assert_eq!(out, b"1\n");
}

#[test]
fn top_level_break_stops_the_program() {
    assert_output("Say 1\nBreak\nSay 2", "1\n");
}

#[test]
fn errors_render_with_locations() {
    let err = failure("\"unterminated");
    assert_eq!(err.to_string(), "Error: 1:0 - 1:13: Unclosed string.");

    let err = failure("Ghost \"boo\"");
    assert_eq!(err.to_string(), "Error: 1:0 - 1:5: 'ghost' is not a known function.");
}

#[test]
fn errors_stop_the_run() {
    let mut out = Vec::new();
    let result = run("Say 1\nSay 1 over 0\nSay 2", &mut "".as_bytes(), &mut out);

    assert!(result.is_err());
    assert_eq!(out, b"1\n");
}

struct Unflushable(Vec<u8>);

impl Write for Unflushable {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn unflushed_output_is_an_error() {
    let mut sink = Unflushable(Vec::new());
    let result = run("Say 1", &mut "".as_bytes(), &mut sink);

    match result {
        Err(Error::Runtime(e @ RuntimeError::Io { .. })) => {
            assert_eq!(e.to_string(), "I/O error: disk full.");
        },
        other => panic!("Unexpected result {other:?}"),
    }
    assert_eq!(sink.0, b"1\n");
}

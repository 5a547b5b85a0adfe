use std::{fs, io};

use parlance::{
    interpreter::{lexer::lex, parser::core::parse_program},
    run_source,
};
use walkdir::WalkDir;

/// Runs a script with empty input and returns everything it wrote.
fn run(src: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_source(src, io::empty(), &mut output) {
        panic!("Script failed: {e}\nScript:\n{src}");
    }
    String::from_utf8(output).expect("output was not UTF-8")
}

/// Runs a script feeding it `input` line by line.
fn run_with_input(src: &str, input: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_source(src, io::Cursor::new(input.to_string()), &mut output) {
        panic!("Script failed: {e}\nScript:\n{src}");
    }
    String::from_utf8(output).expect("output was not UTF-8")
}

/// Runs a script that must raise a runtime error; returns the message.
fn run_err(src: &str) -> String {
    let mut output = Vec::new();
    match run_source(src, io::empty(), &mut output) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "par")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut output = Vec::new();
        if let Err(e) = run_source(&source, io::empty(), &mut output) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn operator_precedence() {
    assert_eq!(run("shownl 1 + 2 * 3"), "7\n");
    assert_eq!(run("shownl 2 * 3 + 1"), "7\n");
    assert_eq!(run("shownl -2 + 3"), "1\n");
    assert_eq!(run("shownl (1 + 2) * 3"), "9\n");
    assert_eq!(run("shownl 10 - 2 - 3"), "5\n");
    assert_eq!(run("shownl 7 % 4 + 1"), "4\n");
}

#[test]
fn unary_binds_tighter_than_equality() {
    // not applies to the operand, not to the whole comparison.
    assert_eq!(run("shownl not 0"), "true\n");
    assert_eq!(run("shownl not 1 == 1"), "false\n");
    assert_eq!(run("shownl not (1 == 2)"), "true\n");
    assert_eq!(run("shownl - - 5"), "5\n");
}

#[test]
fn arithmetic_promotion() {
    assert_eq!(run("shownl 1 + 2.5"), "3.5\n");
    assert_eq!(run("shownl 1 - 0.5"), "0.5\n");
    assert_eq!(run("shownl 2 * 1.5"), "3\n");
    assert_eq!(run("shownl 5 / 2.0"), "2.5\n");
    assert_eq!(run("shownl 5 / 2"), "2\n");
    assert_eq!(run("shownl 7 % 3"), "1\n");
}

#[test]
fn integer_arithmetic_wraps_at_the_boundaries() {
    assert_eq!(run("shownl 9223372036854775807 + 1"), "-9223372036854775808\n");
    assert_eq!(run("shownl 0 - 9223372036854775807 - 1"), "-9223372036854775808\n");
    assert_eq!(run("shownl 9223372036854775807 * 2"), "-2\n");
    // i64::MIN has no literal form; it is reachable only by computing it.
    assert_eq!(run("min = 0 - 9223372036854775807 - 1 shownl min / -1"),
               "-9223372036854775808\n");
    assert_eq!(run("min = 0 - 9223372036854775807 - 1 shownl min % -1"), "0\n");
    assert_eq!(run("min = 0 - 9223372036854775807 - 1 shownl -min"),
               "-9223372036854775808\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(run("shownl \"a\" + \"b\""), "ab\n");
    assert_eq!(run("shownl \"n = \" + 42"), "n = 42\n");
    assert_eq!(run("shownl 1 + \"up\""), "1up\n");
    assert_eq!(run("show \"a\" + nextl"), "a\n");
}

#[test]
fn equality_rules() {
    assert_eq!(run("shownl 1 == 1.0"), "true\n");
    assert_eq!(run("shownl 1 == \"1\""), "false\n");
    assert_eq!(run("shownl \"x\" == \"x\""), "true\n");
    assert_eq!(run("shownl [1, 2] == [1, 2]"), "true\n");
    assert_eq!(run("shownl [1, 2] == [1, 3]"), "false\n");
    assert_eq!(run("shownl 1 != 2"), "true\n");
}

#[test]
fn natural_language_operators() {
    assert_eq!(run("shownl 3 greater than 2"), "true\n");
    assert_eq!(run("shownl 3 less than 2"), "false\n");
    assert_eq!(run("shownl 3 at least 3"), "true\n");
    assert_eq!(run("shownl 3 at most 2"), "false\n");
    assert_eq!(run("shownl 3 equals 3"), "true\n");
    assert_eq!(run("shownl 3 isnt 3"), "false\n");
}

#[test]
fn natural_operator_fusion_restores_on_miss() {
    // "at mostly" is two identifiers, not a comparison.
    assert_eq!(run("at = 1 mostly = 2 shownl at + mostly"), "3\n");
    // A newline between the words blocks fusion.
    let err = run_err("x = 3 greater\nthan 2");
    assert!(err.contains("Undefined variable 'greater'"), "got: {err}");
}

#[test]
fn comparison_rules() {
    assert_eq!(run("shownl \"abc\" less than \"abd\""), "true\n");
    assert_eq!(run("shownl 2 <= 2"), "true\n");
    assert_eq!(run("shownl 2 >= 3"), "false\n");
    let err = run_err("shownl 1 < \"2\"");
    assert!(err.contains("Cannot compare"), "got: {err}");
}

#[test]
fn truthiness_and_logic() {
    assert_eq!(run("if \"\" shownl \"yes\" else shownl \"no\" endif"), "no\n");
    assert_eq!(run("if [] shownl \"yes\" else shownl \"no\" endif"), "no\n");
    assert_eq!(run("if 0.0 shownl \"yes\" else shownl \"no\" endif"), "no\n");
    assert_eq!(run("shownl 1 and 0"), "false\n");
    assert_eq!(run("shownl 1 or 0"), "true\n");
    assert_eq!(run("shownl not \"\""), "true\n");
}

#[test]
fn logic_is_eager() {
    // Both operands are evaluated even when the left already decides.
    let src = "x = 0\nfunction bump() x = x + 1 return 1 endfunction\nshownl 1 or bump()\nshownl x";
    assert_eq!(run(src), "true\n1\n");
}

#[test]
fn if_else_statements() {
    assert_eq!(run("if 3 at least 3 shownl \"yes\" else shownl \"no\" endif"), "yes\n");
    assert_eq!(run("if 1 less than 2 shownl \"a\" endif"), "a\n");
    assert_eq!(run("if 0 shownl \"a\" endif shownl \"b\""), "b\n");
}

#[test]
fn while_loop_counts_down() {
    let src = "x = 10 while x greater than 0 shownl x x = x - 1 endwhile";
    assert_eq!(run(src), "10\n9\n8\n7\n6\n5\n4\n3\n2\n1\n");
}

#[test]
fn for_loop_counts_up() {
    let src = "for i = 0; i less than 3; i = i + 1 shownl i endfor";
    assert_eq!(run(src), "0\n1\n2\n");
}

#[test]
fn for_loop_scope_does_not_leak() {
    let err = run_err("for i = 0; i less than 3; i = i + 1 shownl i endfor shownl i");
    assert!(err.contains("Undefined variable 'i'"), "got: {err}");
}

#[test]
fn assignment_updates_enclosing_scope() {
    // The loop body assigns the outer variable instead of shadowing it.
    let src = "total = 0 for i = 1; i at most 4; i = i + 1 total = total + i endfor shownl total";
    assert_eq!(run(src), "10\n");
}

#[test]
fn compound_assignment() {
    assert_eq!(run("x = 2 x += 3 shownl x"), "5\n");
    assert_eq!(run("x = 7 x -= 2 shownl x"), "5\n");
    assert_eq!(run("x = 4 x *= 2 shownl x"), "8\n");
    assert_eq!(run("x = 9 x /= 3 shownl x"), "3\n");
}

#[test]
fn functions_and_calls() {
    assert_eq!(run("function add(a, b) return a + b endfunction shownl add(2, 3)"), "5\n");
    assert_eq!(run("function five() return 5 endfunction shownl five()"), "5\n");
    let src = "function fib(n) if n at most 1 return n endif return fib(n - 1) + fib(n - 2) \
               endfunction shownl fib(10)";
    assert_eq!(run(src), "55\n");
}

#[test]
fn function_values_print_opaquely() {
    assert_eq!(run("function f() return 1 endfunction shownl f"), "<function>\n");
}

#[test]
fn closures_capture_by_reference() {
    let src = "function make()\n\
               n = 0\n\
               function inc()\n\
               n = n + 1\n\
               return n\n\
               endfunction\n\
               return inc\n\
               endfunction\n\
               c = make()\n\
               shownl c()\n\
               shownl c()\n\
               shownl c()";
    assert_eq!(run(src), "1\n2\n3\n");
}

#[test]
fn each_closure_gets_its_own_environment() {
    let src = "function make()\n\
               n = 0\n\
               function inc()\n\
               n = n + 1\n\
               return n\n\
               endfunction\n\
               return inc\n\
               endfunction\n\
               a = make()\n\
               b = make()\n\
               a() a()\n\
               shownl a()\n\
               shownl b()";
    assert_eq!(run(src), "3\n1\n");
}

#[test]
fn arrays_are_reference_values() {
    assert_eq!(run("a = [1, 2, 3] a[1] = 9 shownl a"), "[1, 9, 3]\n");
    assert_eq!(run("a = [1, 2] b = a b[0] = 7 shownl a"), "[7, 2]\n");
}

#[test]
fn array_access_and_size() {
    assert_eq!(run("a = [10, 20, 30] shownl a[0] + a[2]"), "40\n");
    assert_eq!(run("shownl size([1, 2, 3])"), "3\n");
    assert_eq!(run("shownl size(\"hello\")"), "5\n");
    assert_eq!(run("shownl [[1, 2], [3]][0][1]"), "2\n");
    assert_eq!(run("shownl []"), "[]\n");
}

#[test]
fn array_errors() {
    let err = run_err("a = [1, 2] shownl a[2]");
    assert!(err.contains("out of bounds"), "got: {err}");
    let err = run_err("a = [1, 2] shownl a[-1]");
    assert!(err.contains("out of bounds"), "got: {err}");
    let err = run_err("a = [1, 2] shownl a[1.0]");
    assert!(err.contains("must be an integer"), "got: {err}");
    let err = run_err("x = 5 shownl x[0]");
    assert!(err.contains("Cannot index"), "got: {err}");
}

#[test]
fn division_by_zero_is_an_error() {
    let err = run_err("shownl 1 / 0");
    assert!(err.contains("Division by zero"), "got: {err}");
    let err = run_err("shownl 1.0 / 0.0");
    assert!(err.contains("Division by zero"), "got: {err}");
    let err = run_err("shownl 1 % 0");
    assert!(err.contains("Division by zero"), "got: {err}");
}

#[test]
fn modulo_requires_integers() {
    let err = run_err("shownl 5.0 % 2");
    assert!(err.contains("integers"), "got: {err}");
}

#[test]
fn type_errors() {
    let err = run_err("shownl -\"x\"");
    assert!(err.contains("Cannot negate"), "got: {err}");
    let err = run_err("shownl [1] - 1");
    assert!(err.contains("Cannot apply"), "got: {err}");
    let err = run_err("x = 1 x()");
    assert!(err.contains("not callable"), "got: {err}");
}

#[test]
fn undefined_variable_is_an_error() {
    let err = run_err("shownl missing");
    assert!(err.contains("Undefined variable 'missing'"), "got: {err}");
    let err = run_err("missing()");
    assert!(err.contains("Undefined variable 'missing'"), "got: {err}");
}

#[test]
fn wrong_arity_is_an_error() {
    let err = run_err("function f(a, b) return a endfunction f(1)");
    assert!(err.contains("Expected 2 arguments but got 1"), "got: {err}");
    let err = run_err("shownl size()");
    assert!(err.contains("Expected 1 arguments but got 0"), "got: {err}");
}

#[test]
fn return_outside_function_is_an_error() {
    let err = run_err("return 5");
    assert!(err.contains("outside of a function"), "got: {err}");
}

#[test]
fn return_unwinds_nested_statements() {
    let src = "function find(limit)\n\
               for i = 0; i less than limit; i = i + 1\n\
               if i equals 3 return i endif\n\
               endfor\n\
               return -1\n\
               endfunction\n\
               shownl find(10)\n\
               shownl find(2)";
    assert_eq!(run(src), "3\n-1\n");
}

#[test]
fn ask_reads_lines() {
    assert_eq!(run_with_input("name = ask shownl \"hi \" + name", "bob\n"), "hi bob\n");
    assert_eq!(run_with_input("shownl ask + ask", "a\nb\n"), "ab\n");
    // End of input yields the empty string.
    assert_eq!(run_with_input("shownl size(ask)", ""), "0\n");
}

#[test]
fn show_does_not_append_newline() {
    assert_eq!(run("show 1 show 2 shownl 3"), "123\n");
}

#[test]
fn comments_are_skipped() {
    assert_eq!(run("# a comment\nshownl 1 # trailing\n# another"), "1\n");
}

#[test]
fn strings_are_verbatim() {
    assert_eq!(run("shownl \"no \\escapes here\""), "no \\escapes here\n");
}

#[test]
fn float_formatting() {
    assert_eq!(run("shownl 1.5"), "1.5\n");
    assert_eq!(run("shownl 2.0"), "2\n");
    assert_eq!(run("shownl 0.25 + 0.25"), "0.5\n");
}

#[test]
fn lexical_errors() {
    assert!(matches!(lex("\"unclosed"),
                     Err(parlance::error::ParseError::UnterminatedString { .. })));
    assert!(matches!(lex("a ! b"),
                     Err(parlance::error::ParseError::UnexpectedCharacter { .. })));
    assert!(matches!(lex("a @ b"),
                     Err(parlance::error::ParseError::UnexpectedCharacter { .. })));
    assert!(lex("a != b").is_ok());
}

#[test]
fn parse_errors() {
    let parse_of = |src: &str| {
        let tokens = lex(src).unwrap();
        parse_program(&mut tokens.iter().peekable())
    };

    // Invalid assignment target.
    assert!(parse_of("1 = 2").is_err());
    // Call heads must be bare identifiers.
    assert!(parse_of("f()()").is_err());
    assert!(parse_of("arr[0]()").is_err());
    // Missing terminators.
    assert!(parse_of("if 1 shownl 1").is_err());
    assert!(parse_of("while 1 shownl 1").is_err());
    // Compound assignment needs a plain variable.
    assert!(parse_of("a[0] += 1").is_err());
    // These are all fine.
    assert!(parse_of("f() a = b = 2").is_ok());
    assert!(parse_of("[1, 2][0]").is_ok());
}

#[test]
fn parse_error_recovery_yields_empty_program() {
    // The parser prints the error and recovers to an empty program, so the
    // run succeeds with no output.
    let mut output = Vec::new();
    let result = run_source("shownl 1 shownl ) shownl 2", io::empty(), &mut output);
    assert!(result.is_ok());
    assert!(output.is_empty());
}

#[test]
fn parser_is_deterministic() {
    let src = "function f(a) return a * 2 endfunction for i = 0; i less than 3; i += 1 shownl \
               f(i) endfor";
    let tokens = lex(src).unwrap();
    let first = parse_program(&mut tokens.iter().peekable()).unwrap();
    let second = parse_program(&mut tokens.iter().peekable()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn lexer_reports_positions() {
    let tokens = lex("x = 1\n  y = 2").unwrap();
    let first = tokens[0].1;
    let second = tokens[3].1;
    assert_eq!((first.line, first.column), (1, 1));
    assert_eq!((second.line, second.column), (2, 3));
}

#[test]
fn program_value_is_last_statement() {
    let mut output = Vec::new();
    let value = run_source("x = 1 x + 41", io::empty(), &mut output).unwrap();
    assert_eq!(value.to_string(), "42");
}

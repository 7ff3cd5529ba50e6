//! End-to-end tests: Mython source in, program output out.

use std::fs;

use mython::run_to_string;
use walkdir::WalkDir;

fn assert_output(source: &str, expected: &str) {
    match run_to_string(source) {
        Ok(output) => assert_eq!(output, expected, "for program:\n{source}"),
        Err(e) => panic!("Script failed: {e}\nProgram:\n{source}"),
    }
}

fn assert_failure(source: &str) {
    if run_to_string(source).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "my"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match run_to_string(&source) {
            Ok(output) => {
                assert_eq!(output, expected, "demo {path:?} printed something else")
            },
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn printing_literals_and_variables() {
    assert_output("print 57", "57\n");
    assert_output("x = \"hello\"\nprint x, 42, None", "hello 42 None\n");
    assert_output("print", "\n");
    assert_output("print \"a\" + \"b\", 2 + 3, 10 / 3, 7 - 10, 6 * 7", "ab 5 3 -3 42\n");
    assert_output("print True, False", "True False\n");
}

#[test]
fn str_renders_like_print() {
    assert_output("print str(42) + \"!\"", "42!\n");
    assert_output("print str(None)", "None\n");
    assert_output("print str(True) + str(1 < 2)", "TrueTrue\n");
}

#[test]
fn conditionals_take_the_matching_branch() {
    assert_output("x = 10\nif x > 3:\n  print \"big\"\nelse:\n  print \"small\"",
                  "big\n");
    assert_output("x = 1\nif x > 3:\n  print \"big\"\nelse:\n  print \"small\"",
                  "small\n");
    assert_output("if 1 == 2:\n  print \"impossible\"\nprint \"after\"", "after\n");
}

#[test]
fn comparisons_and_logic() {
    assert_output("print 2 < 3, 3 <= 3, 4 > 5, 5 >= 5, 1 == 1, 1 != 1",
                  "True True False True True False\n");
    assert_output("print \"abc\" < \"abd\", \"a\" == \"a\"", "True True\n");
    assert_output("print not False, not 0, not \"\"", "True True True\n");
    assert_output("print True and 1, False or \"\", None == None",
                  "True False True\n");
}

#[test]
fn unary_minus_is_subtraction() {
    assert_output("x = 5\nprint -x, -3 + 1, 2 - -2", "-5 -2 4\n");
}

#[test]
fn str_dunder_drives_printing() {
    let source = "class A:\n  def __str__(self):\n    return \"a\"\nprint A()";
    assert_output(source, "a\n");
}

#[test]
fn add_dunder_dispatches_on_the_left_instance() {
    let source = "class B:\n  def __add__(self, r):\n    return \"B+\" + r\nprint B() + \"x\"";
    assert_output(source, "B+x\n");
}

#[test]
fn return_skips_the_rest_of_the_method() {
    let source =
        "class C:\n  def f(self):\n    return 1\n    print \"unreachable\"\nprint C().f()";
    assert_output(source, "1\n");
}

#[test]
fn constructors_and_field_state() {
    let source = "class Counter:
  def __init__(self, start):
    self.value = start
  def increment(self):
    self.value = self.value + 1
    return self.value
c = Counter(10)
c.increment()
print c.increment()
";
    assert_output(source, "12\n");
}

#[test]
fn inheritance_resolves_the_nearest_override() {
    let source = "class Shape:
  def label(self):
    return \"shape\"
  def caption(self):
    return \"I am a \" + self.label()
class Circle(Shape):
  def label(self):
    return \"circle\"
print Shape().caption()
print Circle().caption()
";
    assert_output(source, "I am a shape\nI am a circle\n");
}

#[test]
fn fields_nest_through_instances() {
    let source = "class Box:
  def __init__(self):
    self.content = None
b = Box()
b.content = Box()
b.content.tag = \"inner\"
print b.content.tag
";
    assert_output(source, "inner\n");
}

#[test]
fn logic_operators_do_not_evaluate_the_short_circuited_side() {
    let source = "class Tracer:
  def ping(self):
    print \"ping\"
    return True
t = Tracer()
x = True or t.ping()
y = False and t.ping()
print x, y
";
    assert_output(source, "True False\n");

    // Without short-circuiting the side effect does land.
    let eager = "class Tracer:
  def ping(self):
    print \"ping\"
    return True
t = Tracer()
x = False or t.ping()
print x
";
    assert_output(eager, "ping\nTrue\n");
}

#[test]
fn methods_compose_through_dunder_comparison() {
    let source = "class Money:
  def __init__(self, amount):
    self.amount = amount
  def __eq__(self, other):
    return self.amount == other.amount
  def __lt__(self, other):
    return self.amount < other.amount
a = Money(3)
b = Money(5)
print a < b, a == b, a > b, a <= b
";
    assert_output(source, "True False False True\n");
}

#[test]
fn comments_and_blank_lines_are_transparent() {
    let source = "# leading comment
x = 1  # trailing comment

if x == 1:
  # inside a block
  print \"one\"
";
    assert_output(source, "one\n");
}

#[test]
fn bad_arithmetic_fails_at_runtime() {
    assert_failure("print 1 + \"a\"");
    assert_failure("print 1 / 0");
    assert_failure("print undef");
    assert_failure("print 1 < \"a\"");
    assert_failure("x = 2147483647\nprint x + 1");
}

#[test]
fn malformed_sources_fail_to_lex_or_parse() {
    assert_failure("\"ab\\q\"");
    assert_failure("'no end");
    assert_failure("x = 99999999999");
    assert_failure("x = ");
    assert_failure("if True\n  print 1");
    assert_failure("class A(Unknown):\n  def f(self):\n    return 1");
    assert_failure("class A:\n  def f(this):\n    return 1");
    assert_failure("1 = 2");
    assert_failure("madeup(1)");
}

#[test]
fn conditions_must_be_boolean() {
    assert_failure("if 5:\n  print 1");
}

#[test]
fn top_level_return_is_an_error() {
    assert_failure("return 5");
}

#[test]
fn method_calls_without_a_match_yield_none() {
    // Wrong arity and unknown names quietly produce None.
    let source = "class Quiet:
  def f(self):
    return 1
q = Quiet()
print q.f(2)
print q.g()
";
    assert_output(source, "None\nNone\n");
}

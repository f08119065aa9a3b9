use ts_wp_init::deindent::{deindent, Template};

const INDENTS: &[&str] = &["", " ", "  ", "    ", "\t", "\t  "];

const BODIES: &[&[&str]] = &[
    &["a"],
    &["<div>", "  <span>x</span>", "</div>"],
    &["const a = 1;", "", "function f() {", "  return a;", "}"],
];

fn indent_lines(indent: &str, lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{indent}{line}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn strips_one_copy_of_common_indent() {
    for indent in INDENTS {
        for body in BODIES {
            let input = indent_lines(indent, body);
            // no line break before the first content, nothing to strip
            assert_eq!(deindent(&input), input, "indent {indent:?}");

            let with_leading_newline = format!("\n{input}\n");
            assert_eq!(
                deindent(&with_leading_newline),
                format!("\n{}\n", body.join("\n")),
                "indent {indent:?}"
            );
        }
    }
}

#[test]
fn carriage_return_only_text_is_identity() {
    for indent in INDENTS {
        for body in BODIES {
            let input = format!("\r{}", indent_lines(indent, body).replace('\n', "\r"));
            assert_eq!(deindent(&input), input, "indent {indent:?}");
        }
    }
}

#[test]
fn column_zero_text_is_identity() {
    for body in BODIES {
        let text = body.join("\n");
        assert_eq!(deindent(&text), text);
    }
}

#[test]
fn normalizing_twice_changes_nothing() {
    for indent in INDENTS {
        for body in BODIES {
            let once = deindent(&format!("\n\n{}", indent_lines(indent, body)));
            assert_eq!(deindent(&once), once);
        }
    }
}

#[test]
fn nested_template_keeps_relative_indentation() {
    let fragments = ["\n      <ul>\n        <li>", "</li>\n        <li>", "</li>\n      </ul>\n"];
    let out = Template::new(&fragments).value("one").value(&2).deindent().unwrap();
    assert_eq!(out, "\n<ul>\n  <li>one</li>\n  <li>2</li>\n</ul>\n");
}

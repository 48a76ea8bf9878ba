use indoc::indoc;

use crate::{Argument, Directive, Document, Extensions, parse};

#[test]
fn argument_source_forms() {
    assert_eq!(Argument::new("plain").to_source(), "plain");
    assert_eq!(Argument::new("").to_source(), r#""""#);
    assert_eq!(Argument::new("two words").to_source(), r#""two words""#);
    assert_eq!(Argument::new("a;b{c}").to_source(), r"a\;b\{c\}");
    assert_eq!(Argument::new(r"C:\dir").to_source(), r"C:\\dir");
    assert_eq!(Argument::new("say \"hi\"").to_source(), r#""say \"hi\"""#);
    assert_eq!(Argument::new("a\nb").to_source(), "\"\"\"a\nb\"\"\"");
    assert_eq!(Argument::new("\u{FEFF}x").to_source(), "\"\u{FEFF}x\"");
}

#[test]
fn directive_display() {
    let directive = Directive::new(["server", "main host"])
        .with_subdirectives(vec![Directive::new(["listen", "80"])]);

    insta::assert_snapshot!(directive.to_string(), @r#"
    server "main host" {
        listen 80
    }
    "#);
}

#[test]
fn document_to_source() {
    let input = indoc! {r#"
    a 1; b "x y"
    c {
      d { e }
    }
    "#};

    let document = parse(input, &Extensions::new()).unwrap();
    insta::assert_snapshot!(document.to_source(), @r#"
    a 1
    b "x y"
    c {
        d {
            e
        }
    }
    "#);
}

#[test]
fn walk_is_depth_first() {
    let document = parse("a { b { c } d } e", &Extensions::new()).unwrap();
    let names: Vec<_> = document.walk().filter_map(Directive::name).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);
}

#[test]
fn document_iteration() {
    let document = Document::new(vec![Directive::new(["x"]), Directive::new(["y"])]);
    let names: Vec<_> = (&document).into_iter().map(|d| d.arguments[0].as_str()).collect();
    assert_eq!(names, ["x", "y"]);
    assert_eq!(document.into_directives().len(), 2);
}

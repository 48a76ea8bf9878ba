use crate::extensions::{Extension, Extensions, UnknownExtension};

#[test]
fn names_round_trip() {
    for ext in Extension::ALL {
        assert_eq!(ext.name().parse::<Extension>(), Ok(ext));
    }
    assert_eq!(
        "tabs".parse::<Extension>(),
        Err(UnknownExtension("tabs".to_string()))
    );
}

#[test]
fn presence_and_parameters() {
    let extensions = Extensions::new()
        .with(Extension::CStyleComments)
        .with_punctuators(["=", "=>"]);

    assert!(extensions.has(Extension::CStyleComments));
    assert!(!extensions.has(Extension::ExpressionArguments));
    assert_eq!(extensions.get(Extension::CStyleComments), None);
    assert_eq!(extensions.get(Extension::PunctuatorArguments), Some("=\n=>"));
}

#[test]
fn unknown_names_are_kept_but_inert() {
    let mut extensions = Extensions::new();
    extensions.insert("future_feature", Some("x".to_string()));

    assert!(!extensions.is_empty());
    assert!(Extension::ALL.iter().all(|&ext| !extensions.has(ext)));
    let entries: Vec<_> = extensions.iter().collect();
    assert_eq!(entries, [("future_feature", Some("x"))]);
}

#[test]
fn collect_from_extensions() {
    let extensions: Extensions = [Extension::ExpressionArguments].into_iter().collect();
    assert!(extensions.has(Extension::ExpressionArguments));
}

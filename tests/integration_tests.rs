//! Integration tests for the localizer factory
//!
//! These tests go through the public library surface only: factory lookup,
//! the `Localizer` trait, and the demo driver.

use localizer_factory::demo;
use localizer_factory::i18n::{
    get_default_localizer, get_localizer, supported_languages, Language, Localizer,
    LocalizerError,
};
use proptest::prelude::*;

// ==================== Test Helpers ====================

/// Run a localizer against an in-memory buffer and return what it wrote
fn capture(localizer: &dyn Localizer, message: &str) -> String {
    let mut buf = Vec::new();
    localizer
        .localize_to(&mut buf, message)
        .expect("in-memory write should succeed");
    String::from_utf8(buf).expect("output should be UTF-8")
}

// ==================== Factory Tests ====================

#[test]
fn test_supported_languages_emit_their_name_and_message() {
    for (language, expected) in [("English", "english"), ("Chinese", "chinese")] {
        let localizer = get_localizer(language).unwrap();
        let output = capture(localizer.as_ref(), "Some message");

        assert!(output.contains(expected), "{} output: {}", language, output);
        assert!(output.contains("Some message"));
    }
}

#[test]
fn test_default_behaves_like_english() {
    let default = capture(get_default_localizer().as_ref(), "hello");
    let english = capture(get_localizer("English").unwrap().as_ref(), "hello");
    assert_eq!(default, english);
    assert_eq!(get_default_localizer().language(), Language::default());
}

#[test]
fn test_unsupported_language_fails() {
    let result = get_localizer("French");
    match result {
        Err(LocalizerError::UnsupportedLanguage { language, .. }) => {
            assert_eq!(language, "French")
        }
        Ok(localizer) => panic!("Expected an error, got {:?}", localizer),
    }
}

#[test]
fn test_empty_message_still_has_notice() {
    let output = capture(get_localizer("Chinese").unwrap().as_ref(), "");
    assert_eq!(output, "The message is translated to chinese.\n\n");
}

#[test]
fn test_instances_are_independent() {
    let first = get_localizer("English").unwrap();
    let second = get_localizer("English").unwrap();

    let first_output = capture(first.as_ref(), "first");
    let second_output = capture(second.as_ref(), "second");

    assert!(first_output.contains("first"));
    assert!(!second_output.contains("first"));
    assert_eq!(capture(first.as_ref(), "first"), first_output);
}

#[test]
fn test_factory_language_matches_validated_key() {
    for name in supported_languages() {
        let language = Language::from_name(name).unwrap();
        assert_eq!(get_localizer(name).unwrap().language(), language);
    }
    assert_eq!(
        Language::from_name("French").unwrap_err(),
        get_localizer("French").unwrap_err()
    );
}

// ==================== End-to-End Tests ====================

#[test]
fn test_english_notice_precedes_message() {
    let output = capture(
        get_localizer("English").unwrap().as_ref(),
        "Please localize to English.",
    );

    let notice_at = output
        .find("The message is translated to english.")
        .expect("notice should be present");
    let message_at = output
        .find("Please localize to English.")
        .expect("message should be present");
    assert!(notice_at < message_at);
}

#[test]
fn test_demo_localizes_every_supported_language() {
    let mut buf = Vec::new();
    demo::run(&mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();

    for name in supported_languages() {
        assert!(output.contains(&format!("Please localize to {}.", name)));
        assert!(output.contains(&format!("translated to {}.", name.to_lowercase())));
    }
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_render_is_notice_then_message(message in ".*") {
        for name in supported_languages() {
            let localizer = get_localizer(name).unwrap();
            prop_assert_eq!(
                localizer.render(&message),
                format!("{}\n{}", localizer.notice(), message)
            );
        }
    }

    #[test]
    fn prop_unregistered_names_fail(name in "[a-zA-Z ]{0,12}") {
        prop_assume!(!supported_languages().iter().any(|supported| *supported == name));
        prop_assert!(get_localizer(&name).is_err());
    }
}

use std::collections::HashMap;

use kpl_core::lang::builtins;
use kpl_core::lang::keywords;
use kpl_core::lang::operators;
use kpl_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::from_str(&info.canonical.to_ascii_lowercase()),
            Some(info.id),
            "lower-case keyword spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert!(
            info.canonical.chars().all(|c| c.is_ascii_uppercase()),
            "keyword canonical spelling must be upper case: {}",
            info.canonical
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn builtins_names_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, builtins::BuiltinId> = HashMap::new();

    for info in builtins::BUILTINS {
        assert_eq!(
            builtins::from_str(info.name),
            Some(info.id),
            "builtin name not resolvable: {}",
            info.name
        );
        assert_eq!(
            builtins::as_str(info.id),
            info.name,
            "builtin as_str mismatch for {:?}",
            info.id
        );
        assert_eq!(
            keywords::from_str(info.name),
            None,
            "builtin name collides with a keyword: {}",
            info.name
        );

        if let Some(prev) = seen.insert(info.name, info.id) {
            panic!("duplicate builtin name {:?}: {:?} and {:?}", info.name, prev, info.id);
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            punctuation::as_str(info.id),
            info.canonical,
            "punctuation as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                punctuation::from_str(alias),
                Some(info.id),
                "punctuation alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!(
                    "duplicate punctuation alias spelling {:?}: {:?} and {:?}",
                    alias, prev, info.id
                );
            }
        }
    }
}

#[test]
fn trace_names_unique_across_symbol_registries() {
    let mut seen: HashMap<&'static str, String> = HashMap::new();

    for info in operators::OPERATORS {
        if let Some(prev) = seen.insert(info.trace_name, format!("{:?}", info.id)) {
            panic!("duplicate trace name {:?}: {} and {:?}", info.trace_name, prev, info.id);
        }
    }
    for info in punctuation::PUNCTUATION {
        if let Some(prev) = seen.insert(info.trace_name, format!("{:?}", info.id)) {
            panic!("duplicate trace name {:?}: {} and {:?}", info.trace_name, prev, info.id);
        }
    }
}

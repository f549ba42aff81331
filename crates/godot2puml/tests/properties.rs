//! Property-based tests for the parameter grammar and name handling

use godot2puml::plugins::gdscript::{sanitize_identifier, KnownClasses, Parameter};
use godot2puml::render_script;
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

proptest! {
    #[test]
    fn colon_free_tokens_are_untyped(name in ident(), pad in " {0,3}") {
        let token = format!("{pad}{name}{pad}");
        let param = Parameter::parse(&token).unwrap();
        prop_assert_eq!(param.name, name);
        prop_assert_eq!(param.param_type, None);
    }

    #[test]
    fn split_happens_at_first_colon(
        name in ident(),
        head in ident(),
        tail in "[A-Za-z0-9_:\\[\\] ]{0,12}",
    ) {
        let type_str = format!("{head}{tail}");
        let param = Parameter::parse(&format!("{name} : {type_str}")).unwrap();
        prop_assert_eq!(param.name, name);
        prop_assert_eq!(param.param_type.as_deref(), Some(type_str.trim()));
    }

    #[test]
    fn list_length_matches_non_empty_tokens(names in prop::collection::vec(ident(), 0..6)) {
        let list = names.join(", ");
        let params = Parameter::parse_list(&list);
        prop_assert_eq!(params.len(), names.len());
    }

    #[test]
    fn sanitized_names_are_word_only(file_name in "[ -~]{1,24}") {
        let sanitized = sanitize_identifier(&file_name);
        prop_assert!(sanitized.chars().all(|c| c.is_alphanumeric() || c == '_'));
    }

    #[test]
    fn undeclared_scripts_get_prefixed_names(stem in "[a-z][a-z0-9_]{0,10}") {
        let file_name = format!("{stem}.gd");
        let uml = render_script(&file_name, "", &KnownClasses::new()).unwrap();
        let expected = format!("class __GD__{}_gd {{", stem);
        prop_assert!(uml.contains(&expected));
    }

    #[test]
    fn rendering_is_deterministic(names in prop::collection::btree_set(ident(), 0..5)) {
        let source: String = names
            .iter()
            .enumerate()
            .map(|(i, n)| format!("var field{i}: Array[{n}]\n"))
            .collect();
        let known: KnownClasses = names.iter().cloned().collect();
        let first = render_script("bag.gd", &source, &known).unwrap();
        let second = render_script("bag.gd", &source, &known).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.matches(" --> ").count(), names.len());
    }
}

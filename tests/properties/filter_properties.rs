use proptest::prelude::*;

use hn::query::{self, CombineMode, FilterExpression};
use hn::store::row::parse_identifier;

fn whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..12)
        .prop_map(|chars| chars.into_iter().collect())
}

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z'-]{0,11}"
}

fn values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![word(), whitespace()], 0..5)
}

proptest! {
    #[test]
    fn whitespace_names_match_absent_names(name in whitespace()) {
        prop_assert!(query::from_name(Some(&name)).is_empty());
    }

    #[test]
    fn each_name_token_yields_two_conditions(tokens in prop::collection::vec(word(), 0..6), sep in "[ \t]{1,3}") {
        let name = tokens.join(&sep);
        prop_assert_eq!(query::from_name(Some(&name)).len(), tokens.len() * 2);
    }

    #[test]
    fn builders_skip_blank_entries(programs in values()) {
        let expected = programs.iter().filter(|p| !p.trim().is_empty()).count();
        prop_assert_eq!(query::from_programs(&programs).len(), expected);
        prop_assert_eq!(query::from_languages(&programs).len(), expected);
        prop_assert_eq!(query::from_hard_skills(&programs).len(), expected);
    }

    #[test]
    fn combine_is_none_exactly_when_nothing_constrains(
        programs in values(),
        languages in values(),
        name in prop_oneof![word(), whitespace()],
        all in any::<bool>(),
    ) {
        let mode = if all { CombineMode::All } else { CombineMode::Any };
        let groups = vec![
            query::from_name(Some(&name)),
            query::from_programs(&programs),
            query::from_languages(&languages),
        ];
        let total: usize = groups.iter().map(Vec::len).sum();
        match query::combine(groups, mode) {
            None => prop_assert_eq!(total, 0),
            Some(filter) => {
                prop_assert!(!filter.is_empty());
                prop_assert_eq!(filter.conditions().len(), total);
            }
        }
    }

    #[test]
    fn any_of_preserves_every_condition(ids in prop::collection::vec(any::<i64>(), 1..20)) {
        let filter = FilterExpression::any_of(query::from_student_ids(&ids)).unwrap();
        let values: Vec<String> = filter.conditions().iter().map(|c| c.value.clone()).collect();
        let expected: Vec<String> = ids.iter().map(ToString::to_string).collect();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn integer_identifiers_parse_back(id in any::<i64>()) {
        prop_assert_eq!(parse_identifier(&id.to_string()), Some(id));
    }

    #[test]
    fn non_numeric_identifiers_are_none(raw in "[A-Za-z][A-Za-z ]{0,10}") {
        prop_assume!(!["inf", "infinity", "nan"].contains(&raw.trim().to_ascii_lowercase().as_str()));
        prop_assert_eq!(parse_identifier(&raw), None);
    }
}

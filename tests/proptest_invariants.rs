
use proptest::prelude::*;
use ruletree::{combine, deserialize, evaluate, parse, serialize, Context, Node, Outcome};
use strategies::{arb_context, arb_rule};

/// Helper: parse a rule that is known to be well formed.
fn rule(text: &str) -> Node {
    parse(text).expect("generated rule should parse")
}

// ---------------------------------------------------------------------------
// Invariant 1: Reference semantics
//
// A flat rule string evaluates like a conjunction of OR-groups, because the
// parser splits on AND before OR.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn evaluation_matches_reference(gen in arb_rule(), ctx in arb_context()) {
        let node = rule(&gen.text());
        let outcome = evaluate(&node, &ctx).unwrap();
        prop_assert_eq!(
            outcome,
            Outcome::Bool(gen.expected(&ctx)),
            "rule: {}",
            gen.text()
        );
    }

    #[test]
    fn determinism(gen in arb_rule(), ctx in arb_context()) {
        let node = rule(&gen.text());
        let first = evaluate(&node, &ctx);
        for _ in 0..5 {
            prop_assert_eq!(&first, &evaluate(&node, &ctx));
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Round trip
//
// Serializing and deserializing a tree never changes how it evaluates, and
// keeps every identifier.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn round_trip_preserves_evaluation(gen in arb_rule(), ctx in arb_context()) {
        let node = rule(&gen.text());
        let restored = deserialize(&serialize(&node)).unwrap();
        prop_assert_eq!(evaluate(&node, &ctx), evaluate(&restored, &ctx));
    }

    #[test]
    fn round_trip_through_json_text(gen in arb_rule()) {
        let node = rule(&gen.text());
        let text = serde_json::to_string(&node).unwrap();
        let restored: Node = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(restored, node);
    }

    #[test]
    fn round_trip_without_ids_preserves_evaluation(gen in arb_rule(), ctx in arb_context()) {
        let node = rule(&gen.text());
        let mut record = serialize(&node);
        strip_ids(&mut record);
        let restored = deserialize(&record).unwrap();
        prop_assert_ne!(restored.id(), node.id());
        prop_assert_eq!(evaluate(&node, &ctx), evaluate(&restored, &ctx));
    }
}

fn strip_ids(record: &mut serde_json::Value) {
    if let Some(map) = record.as_object_mut() {
        map.remove("id");
        for side in ["left", "right"] {
            if let Some(child) = map.get_mut(side) {
                strip_ids(child);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Combination and short-circuiting
//
// Combining under AND/OR matches boolean logic, and the right operand is never
// evaluated once the left decides the result. A CONDITION leaf on the right
// would fail if it were reached.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn combine_matches_boolean_logic(
        a in arb_rule(),
        b in arb_rule(),
        ctx in arb_context(),
    ) {
        let expected_and = a.expected(&ctx) && b.expected(&ctx);
        let expected_or = a.expected(&ctx) || b.expected(&ctx);

        let and = combine(rule(&a.text()), rule(&b.text()), "and").unwrap();
        let or = combine(rule(&a.text()), rule(&b.text()), "OR").unwrap();

        prop_assert_eq!(evaluate(&and, &ctx), Ok(Outcome::Bool(expected_and)));
        prop_assert_eq!(evaluate(&or, &ctx), Ok(Outcome::Bool(expected_or)));
    }

    #[test]
    fn and_short_circuits_on_false(gen in arb_rule(), ctx in arb_context()) {
        let guarded = combine(rule(&gen.text()), rule("unevaluable text"), "AND").unwrap();
        let result = evaluate(&guarded, &ctx);
        if gen.expected(&ctx) {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result, Ok(Outcome::Bool(false)));
        }
    }

    #[test]
    fn or_short_circuits_on_true(gen in arb_rule(), ctx in arb_context()) {
        let guarded = combine(rule(&gen.text()), rule("unevaluable text"), "OR").unwrap();
        let result = evaluate(&guarded, &ctx);
        if gen.expected(&ctx) {
            prop_assert_eq!(result, Ok(Outcome::Bool(true)));
        } else {
            prop_assert!(result.is_err());
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Totality
//
// Arbitrary input never panics the parser or the evaluator.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = parse(&input);
    }

    #[test]
    fn evaluate_never_panics(input in "[a-z<>= ANDOR0-9.]{0,48}", ctx in arb_context()) {
        if let Ok(node) = parse(&input) {
            let _ = evaluate(&node, &ctx);
        }
    }

    #[test]
    fn missing_fields_are_false(gen in arb_rule()) {
        let node = rule(&gen.text());
        prop_assert_eq!(evaluate(&node, &Context::new()), Ok(Outcome::Bool(false)));
    }
}

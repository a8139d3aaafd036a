//! End-to-end coverage of the respond surface against the standard scale.

use std::sync::{Arc, Mutex};

use respond::{collecting_reporter, Diagnostic, Resolver, Scale};

type Sink = Arc<Mutex<Vec<Diagnostic>>>;

fn capturing_resolver() -> (Resolver, Sink) {
    let sink: Sink = Arc::new(Mutex::new(Vec::new()));
    let resolver = Resolver::new().reporter(collecting_reporter(sink.clone()));
    (resolver, sink)
}

#[test]
fn above_sm_guards_at_576() {
    let (resolver, sink) = capturing_resolver();
    let block = resolver
        .above("sm", || ".sidebar { display: block; }".to_string())
        .unwrap();

    assert_eq!(
        block.to_string(),
        "@media (min-width: 576px) {\n  .sidebar { display: block; }\n}"
    );
    assert!(sink.lock().unwrap().is_empty());
}

#[test]
fn below_lg_guards_at_991() {
    let (resolver, sink) = capturing_resolver();
    let block = resolver.below("lg", || ".nav { display: none; }".to_string()).unwrap();

    assert_eq!(block.condition(), "(max-width: 991px)");
    assert!(sink.lock().unwrap().is_empty());
}

#[test]
fn between_sm_and_xxl_guards_576_to_1399() {
    let (resolver, sink) = capturing_resolver();
    let block = resolver.between("sm", "xxl", || "p { margin: 1rem; }".to_string()).unwrap();

    assert_eq!(
        block.condition(),
        "(min-width: 576px) and (max-width: 1399px)"
    );
    assert!(sink.lock().unwrap().is_empty());
}

#[test]
fn above_unknown_name_warns_and_emits_nothing() {
    let (resolver, sink) = capturing_resolver();
    assert!(resolver.above("foo", || String::new()).is_none());

    let captured = sink.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].to_string(), "Invalid breakpoint: foo");
}

#[test]
fn between_two_unknown_names_warns_per_side() {
    let (resolver, sink) = capturing_resolver();
    assert!(resolver.between("foo", "bar", || String::new()).is_none());

    let captured = sink.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].to_string(), "Invalid lower breakpoint: foo");
    assert_eq!(captured[1].to_string(), "Invalid upper breakpoint: bar");
}

#[test]
fn unknown_name_does_not_block_later_generation() {
    let (resolver, sink) = capturing_resolver();

    let mut sheet = String::new();
    for (name, rule) in [
        ("sm", ".a { color: red; }"),
        ("bogus", ".b { color: blue; }"),
        ("lg", ".c { color: green; }"),
    ] {
        if let Some(block) = resolver.above(name, || rule.to_string()) {
            sheet.push_str(&block.to_string());
            sheet.push('\n');
        }
    }

    // The bad middle entry warned, but both valid blocks still rendered.
    assert_eq!(sink.lock().unwrap().len(), 1);
    assert!(sheet.contains("(min-width: 576px)"));
    assert!(sheet.contains("(min-width: 992px)"));
    assert!(!sheet.contains("color: blue"));
}

#[test]
fn deserialized_scale_drives_a_resolver() {
    let json = r#"{
        "entries": [
            {"name": "phone", "width": 0},
            {"name": "tablet", "width": 600},
            {"name": "desktop", "width": 1024}
        ],
        "unit": "px"
    }"#;
    let scale: Scale = serde_json::from_str(json).unwrap();
    let resolver = Resolver::with_scale(scale).unwrap();

    let block = resolver.between("tablet", "desktop", || String::new()).unwrap();
    assert_eq!(
        block.condition(),
        "(min-width: 600px) and (max-width: 1023px)"
    );
}

#[test]
fn repeated_calls_yield_identical_output() {
    let (resolver, sink) = capturing_resolver();

    let render = || {
        resolver
            .between("md", "xl", || ".col { width: 50%; }".to_string())
            .unwrap()
            .to_string()
    };
    assert_eq!(render(), render());

    assert!(resolver.above("nope", || String::new()).is_none());
    assert!(resolver.above("nope", || String::new()).is_none());
    let captured = sink.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0], captured[1]);
}

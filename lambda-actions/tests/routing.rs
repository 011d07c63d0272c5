//! Routing tests: matching order, pattern families and misses.

use lambda_actions::{
    ActionError, ErrorKind, Pattern, PatternFamily, Router, RouterConfig,
    testing::RecordingHandler,
};
use std::{convert::Infallible, sync::Arc};

mod common;
use common::{Resp, TestMeta, TestPayload, init_tracing};

type TestRouter = Router<Arc<TestPayload>, TestMeta, (), Resp>;
type Recorder = RecordingHandler<Arc<TestPayload>, TestMeta, (), Resp>;

#[tokio::test]
async fn test_route_string_action_and_pass_payload() {
    init_tracing();
    let payload = TestPayload::new("data");
    let first = Recorder::new(Resp::new("data"));
    let second = Recorder::new(Resp::new("data2"));

    let mut router = TestRouter::new();
    router.register("testReq", first.clone()).unwrap();
    router.register("testReq2", second.clone()).unwrap();

    let response = router
        .dispatch("testReq", payload.clone(), TestMeta::default())
        .await
        .unwrap();

    assert_eq!(response, Some(Resp::new("data")));
    assert_eq!(first.count(), 1);
    assert!(Arc::ptr_eq(&first.last().unwrap().payload, &payload));
    assert!(!second.was_called());
}

#[tokio::test]
async fn test_route_sequence_action() {
    let get = Recorder::new(Resp::new("get"));
    let post = Recorder::new(Resp::new("post"));

    let mut router = TestRouter::new();
    router.register(["GET", "users"], get.clone()).unwrap();
    router.register(["POST", "users"], post.clone()).unwrap();

    let response = router
        .dispatch(["POST", "users"], TestPayload::new("data"), TestMeta::default())
        .await
        .unwrap();

    assert_eq!(response, Some(Resp::new("post")));
    assert!(!get.was_called());
    assert_eq!(post.count(), 1);
}

#[tokio::test]
async fn test_route_regex_between_exact_patterns() {
    let before = Recorder::new(Resp::new("a"));
    let regex = Recorder::new(Resp::new("regex"));
    let after = Recorder::new(Resp::new("b"));

    let mut router = TestRouter::new();
    router.register("testReqA", before.clone()).unwrap();
    router
        .register(Pattern::regex(r"(?i)testreq\d{4}"), regex.clone())
        .unwrap();
    router.register("testReqB", after.clone()).unwrap();

    let response = router
        .dispatch("testReq1776", TestPayload::new("data"), TestMeta::default())
        .await
        .unwrap();

    assert_eq!(response, Some(Resp::new("regex")));
    assert!(!before.was_called());
    assert!(!after.was_called());
    assert_eq!(regex.count(), 1);
}

#[tokio::test]
async fn test_regex_with_compiled_expression() {
    let mut router: Router<(), (), (), &'static str> = Router::new();
    router
        .register("a", || async { Ok::<_, Infallible>("h1") })
        .unwrap();
    router
        .register(lambda_actions::regex::Regex::new(r"^b\d+$").unwrap(), || async {
            Ok::<_, Infallible>("h2")
        })
        .unwrap();

    assert_eq!(router.dispatch("b42", (), ()).await.unwrap(), Some("h2"));
    assert_eq!(router.dispatch("a", (), ()).await.unwrap(), Some("h1"));
}

#[tokio::test]
async fn test_first_registered_pattern_wins() {
    let broad = Recorder::new(Resp::new("broad"));
    let exact = Recorder::new(Resp::new("exact"));

    let mut router = TestRouter::new();
    router.register(Pattern::regex("^order"), broad.clone()).unwrap();
    router.register("order-7", exact.clone()).unwrap();

    let response = router
        .dispatch("order-7", TestPayload::new("x"), TestMeta::default())
        .await
        .unwrap();

    assert_eq!(response, Some(Resp::new("broad")));
    assert!(!exact.was_called());
}

#[tokio::test]
async fn test_sequence_mismatches_fall_through() {
    let mut router = TestRouter::with_config(RouterConfig::lenient());
    let recorder = Recorder::new(Resp::new("hit"));
    router.register(["GET", "users"], recorder.clone()).unwrap();

    let misses: [Vec<&str>; 5] = [
        vec!["GET", "posts"],
        vec!["users", "GET"],
        vec!["GET"],
        vec!["GET", "users", "1"],
        vec![],
    ];
    for action in misses {
        let response = router
            .dispatch(action, TestPayload::new("x"), TestMeta::default())
            .await
            .unwrap();
        assert_eq!(response, None);
    }
    assert!(!recorder.was_called());
}

#[tokio::test]
async fn test_action_not_found_is_error_by_default() {
    let recorder = Recorder::new(Resp::new("x"));
    let mut router = TestRouter::new();
    router.register("testReqA", recorder.clone()).unwrap();
    router.register("testReqB", recorder.clone()).unwrap();

    let err = router
        .dispatch("testReq1776", TestPayload::new("data"), TestMeta::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ActionNotFound);
    assert_eq!(err.status_code(), Some(404));
    assert!(err.to_string().contains("'testReq1776'"));
    assert!(!recorder.was_called());
}

#[tokio::test]
async fn test_action_not_found_returns_none_when_lenient() {
    let recorder = Recorder::new(Resp::new("x"));
    let mut router = TestRouter::new();
    router.register("x", recorder.clone()).unwrap();

    let err = router
        .dispatch("y", TestPayload::new("data"), TestMeta::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("'y'"));

    let response = router
        .dispatch_with(
            "y",
            TestPayload::new("data"),
            TestMeta::default(),
            RouterConfig::lenient(),
        )
        .await
        .unwrap();
    assert_eq!(response, None);
    assert!(!recorder.was_called());
}

#[tokio::test]
async fn test_lenient_config_persists() {
    let mut router = TestRouter::new();
    router.register("x", Recorder::new(Resp::new("x"))).unwrap();

    router
        .dispatch_with("y", TestPayload::new("a"), TestMeta::default(), RouterConfig::lenient())
        .await
        .unwrap();

    let later = router
        .dispatch("z", TestPayload::new("b"), TestMeta::default())
        .await
        .unwrap();
    assert_eq!(later, None);
    assert_eq!(router.config(), RouterConfig::lenient());
}

#[test]
fn test_duplicate_actions_are_rejected() {
    let mut router = TestRouter::new();
    router.register("testReqA", Recorder::new(Resp::new("1"))).unwrap();

    let err = router
        .register("testReqA", Recorder::new(Resp::new("2")))
        .unwrap_err();
    assert_eq!(err.to_string(), "LambdaActions: duplicate action testReqA");
    assert_eq!(router.len(), 1);
}

#[test]
fn test_duplicate_sequences_are_rejected() {
    let mut router = TestRouter::new();
    router.register(["GET", "a"], Recorder::new(Resp::new("1"))).unwrap();
    router.register(["a", "GET"], Recorder::new(Resp::new("2"))).unwrap();

    let err = router
        .register(vec!["GET".to_string(), "a".to_string()], Recorder::new(Resp::new("3")))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicatePattern);
}

#[test]
fn test_sequence_family_is_enforced() {
    let mut router = TestRouter::new();
    router
        .register(["GET", "testReqA"], Recorder::new(Resp::new("1")))
        .unwrap();

    let err = router
        .register("testReqA", Recorder::new(Resp::new("2")))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "LambdaActions: the action testReqA must be a string[], like the previous registered actions"
    );

    let err = router
        .register(Pattern::regex("testReqA"), Recorder::new(Resp::new("3")))
        .unwrap_err();
    assert!(matches!(
        err,
        ActionError::PatternFamilyMismatch {
            expected: PatternFamily::Sequence,
            ..
        }
    ));
}

#[test]
fn test_scalar_family_is_enforced() {
    let mut router = TestRouter::new();
    router.register("testReqA", Recorder::new(Resp::new("1"))).unwrap();

    let err = router
        .register(["POST", "testReqA"], Recorder::new(Resp::new("2")))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "LambdaActions: the action [POST, testReqA] must be a string|RegEx, like the previous registered actions"
    );
    assert_eq!(router.family(), Some(PatternFamily::Scalar));
}

#[tokio::test]
async fn test_firing_sequence_against_strings_fails() {
    let recorder = Recorder::new(Resp::new("x"));
    let mut router = TestRouter::new();
    router.register("testReqA", recorder.clone()).unwrap();
    router.register("testReqB", recorder.clone()).unwrap();

    let err = router
        .dispatch(["POST", "testReqA"], TestPayload::new("data"), TestMeta::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FamilyMismatchOnDispatch);
    assert_eq!(err.status_code(), Some(400));
    assert!(err.to_string().contains("'[POST, testReqA]'"));
    assert!(!recorder.was_called());
}

#[tokio::test]
async fn test_firing_string_against_sequences_fails() {
    let recorder = Recorder::new(Resp::new("x"));
    let mut router = TestRouter::with_config(RouterConfig::lenient());
    router.register(["PUT", "testReqA"], recorder.clone()).unwrap();
    router.register(["POST", "testReqB"], recorder.clone()).unwrap();

    // Lenient configuration does not soften a family mismatch.
    let err = router
        .dispatch("testReqA", TestPayload::new("data"), TestMeta::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FamilyMismatchOnDispatch);
    assert_eq!(
        err.to_string(),
        "LambdaActions: the fired action (string) 'testReqA' is incompatible with the registered actions (string[])"
    );
    assert!(!recorder.was_called());
}

#[tokio::test]
async fn test_dispatch_without_registrations() {
    let router = TestRouter::new();
    let err = router
        .dispatch("testReqA", TestPayload::new("data"), TestMeta::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoActionsRegistered);
    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("'testReqA'"));

    let err = router
        .dispatch_with(
            "testReqA",
            TestPayload::new("data"),
            TestMeta::default(),
            RouterConfig::lenient(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoActionsRegistered);
}

#[tokio::test]
async fn test_empty_sequence_pattern() {
    let recorder = Recorder::new(Resp::new("root"));
    let mut router = TestRouter::new();
    router.register(Vec::<String>::new(), recorder.clone()).unwrap();

    let err = router
        .register(Vec::<String>::new(), recorder.clone())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicatePattern);

    let response = router
        .dispatch(Vec::<String>::new(), TestPayload::new("x"), TestMeta::default())
        .await
        .unwrap();
    assert_eq!(response, Some(Resp::new("root")));
}

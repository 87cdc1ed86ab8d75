use super::*;

fn course(id: i64, title: &str) -> Course {
    Course { id, title: title.to_owned(), cover: None, description: None }
}

#[test]
fn begin_marks_loading_and_records_query() {
    let mut state = CoursesState { error: Some("old".to_owned()), ..CoursesState::default() };
    state.begin("电路");
    assert!(state.loading);
    assert_eq!(state.query.as_deref(), Some("电路"));
    assert_eq!(state.error, None);
}

#[test]
fn finish_stores_items() {
    let mut state = CoursesState::default();
    let seq = state.begin("电路");
    state.finish(seq, Ok(vec![course(1, "电路基础")]));
    assert!(!state.loading);
    assert_eq!(state.items, vec![course(1, "电路基础")]);
}

#[test]
fn finish_keeps_previous_items_on_error() {
    let mut state = CoursesState::default();
    let first = state.begin("a");
    state.finish(first, Ok(vec![course(1, "A")]));
    let second = state.begin("b");
    state.finish(second, Err(ApiError::from_status(500, r#"{"msg":"服务器错误"}"#)));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("服务器错误"));
    assert!(!state.loading);
}

#[test]
fn finish_ignores_superseded_query() {
    let mut state = CoursesState::default();
    let old = state.begin("old");
    state.begin("new");
    state.finish(old, Ok(vec![course(9, "stale")]));
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn repeated_query_waits_for_latest_request() {
    let mut state = CoursesState::default();
    let first = state.begin("电路");
    let second = state.begin("电路");

    state.finish(first, Ok(vec![course(1, "stale")]));
    assert!(state.loading);
    assert!(state.items.is_empty());

    state.finish(second, Ok(vec![course(2, "fresh")]));
    assert!(!state.loading);
    assert_eq!(state.items, vec![course(2, "fresh")]);

    state.finish(first, Ok(vec![course(1, "stale")]));
    assert_eq!(state.items, vec![course(2, "fresh")]);
}

use super::*;

fn post(title: &str) -> SavedPost {
    SavedPost {
        title: title.to_owned(),
        content: format!("{title} draft"),
        generated_post: format!("{title} generated"),
        platform: "twitter".to_owned(),
        style: "casual".to_owned(),
    }
}

fn loaded(titles: &[&str]) -> GalleryState {
    let mut state = GalleryState::default();
    let seq = state.begin_load();
    state.finish_load(seq, Ok(titles.iter().map(|t| post(t)).collect()));
    state
}

#[test]
fn gallery_state_defaults() {
    let s = GalleryState::default();
    assert!(s.posts.is_empty());
    assert!(s.selected.is_none());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn load_keeps_server_order() {
    let state = loaded(&["b", "a", "c"]);
    let titles: Vec<_> = state.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "a", "c"]);
    assert!(!state.loading);
}

#[test]
fn begin_load_sets_loading() {
    let mut state = GalleryState::default();
    state.begin_load();
    assert!(state.loading);
}

#[test]
fn failed_load_leaves_list_empty() {
    let mut state = loaded(&["a"]);
    let seq = state.begin_load();
    assert!(state.finish_load(seq, Err(ApiError::Status(500))));
    assert!(state.posts.is_empty());
    assert_eq!(state.error.as_deref(), Some("server responded with status 500"));
    assert!(!state.loading);
}

#[test]
fn stale_load_is_ignored() {
    let mut state = GalleryState::default();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(!state.finish_load(first, Ok(vec![post("old")])));
    assert!(state.posts.is_empty());
    assert!(state.finish_load(second, Ok(vec![post("new")])));
    assert_eq!(state.posts[0].title, "new");
}

#[test]
fn select_then_close_restores_list_view() {
    let mut state = loaded(&["a", "b"]);
    let before = state.posts.clone();

    assert!(state.select(1));
    assert_eq!(state.selected_post().map(|p| p.title.as_str()), Some("b"));

    state.close();
    assert!(state.selected.is_none());
    assert!(state.selected_post().is_none());
    assert_eq!(state.posts, before);
}

#[test]
fn selecting_another_item_replaces_selection() {
    let mut state = loaded(&["a", "b"]);
    state.select(0);
    state.select(1);
    assert_eq!(state.selected, Some(1));
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut state = loaded(&["a"]);
    assert!(!state.select(3));
    assert!(state.selected.is_none());
}

#[test]
fn reload_closes_detail() {
    let mut state = loaded(&["a"]);
    state.select(0);
    let seq = state.begin_load();
    state.finish_load(seq, Ok(vec![post("a"), post("b")]));
    assert!(state.selected.is_none());
}

use celem::{
    counter::{counter_app, parse_state, CounterState, INCREMENT},
    prelude::*,
};

fn mounted() -> App<CounterState> {
    let mut app = counter_app("Custom elements");
    app.mount("body");
    app
}

fn find(app: &App<CounterState>, selector: &str) -> MemNode {
    app.document()
        .query_selector(selector)
        .unwrap_or_else(|| panic!("`{selector}` is not rendered"))
}

#[test]
fn first_render() {
    let app = mounted();
    assert_eq!(find(&app, "my-heading").text_content(), "Custom elements");
    assert_eq!(find(&app, "my-section").text_content(), "Clicks: 0");
    assert_eq!(find(&app, "my-section").attribute("text"), Some("Clicks: 0".into()));
    assert_eq!(
        parse_state(&find(&app, "pre.content").text_content()).unwrap(),
        CounterState { clicks: 0 }
    );
    assert_eq!(
        find(&app, "my-button").to_html(),
        "<my-button><button>Click me!</button></my-button>"
    );
    assert_eq!(app.mounted().unwrap().instance_count(), 4);
}

#[test]
fn increment_updates_in_place() {
    let mut app = mounted();
    let heading = find(&app, "my-heading");
    let section = find(&app, "my-section");
    let state = find(&app, "my-state");

    app.emit(INCREMENT);
    assert_eq!(app.flush(), 1);
    assert_eq!(app.state().clicks, 1);
    assert_eq!(find(&app, "my-heading"), heading);
    assert_eq!(find(&app, "my-section"), section);
    assert_eq!(find(&app, "my-state"), state);
    assert_eq!(section.text_content(), "Clicks: 1");
    assert_eq!(section.child_count(), 1);

    let mount = app.mounted().unwrap();
    assert_eq!(mount.lifecycle(&heading), Some(Lifecycle::ConnectedInitial));
    assert_eq!(mount.lifecycle(&section), Some(Lifecycle::ConnectedSteady));
}

#[test]
fn click_right_after_mount() {
    let mut app = mounted();
    let button = find(&app, "button");
    app.dispatch(&button, "click");
    assert_eq!(app.state().clicks, 1);
    assert_eq!(find(&app, "my-section").text_content(), "Clicks: 1");
}

#[test]
fn clicking_the_button() {
    let mut app = mounted();
    for _ in 0..3 {
        let button = find(&app, "button");
        assert_eq!(button.text_content(), "Click me!");
        app.dispatch(&button, "click");
    }
    assert_eq!(app.state().clicks, 3);
    assert_eq!(find(&app, "my-section").text_content(), "Clicks: 3");
    assert_eq!(
        find(&app, "my-button").to_html(),
        "<my-button><button>Click me!</button></my-button>"
    );
}

#[test]
fn wrapper_is_rendered_once() {
    let mut app = mounted();
    for _ in 0..3 {
        app.emit(INCREMENT);
        app.flush();
    }
    let state = find(&app, "my-state");
    assert_eq!(state.child_count(), 1);
    let pre = state.first_child().unwrap();
    assert_eq!(pre.tag(), Some("pre".into()));
    assert_eq!(pre.child_count(), 1);
    assert_eq!(
        parse_state(&pre.text_content()).unwrap(),
        CounterState { clicks: 3 }
    );
}

#[test]
fn other_events_do_not_render() {
    let mut app = mounted();
    let renders = app.mounted().unwrap().renders();
    app.emit("unknown");
    assert_eq!(app.flush(), 0);
    assert_eq!(app.mounted().unwrap().renders(), renders);
}

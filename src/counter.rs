//! A click counter showing every element kind at work.

use crate::{app::App, template::h};
use celem_core::{GenericNode, Payload};
use celem_dom::{Event, MemNode};
use celem_elements::{
    Conditional, Definition, Handle, Hook, Refresh, Static, Wrapper, WrapperRemoval,
};
use celem_store::{events, Emitter, Store};
use serde::{Deserialize, Serialize};

pub const INCREMENT: &str = "increment";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CounterState {
    pub clicks: u32,
}

/// Pretty JSON with two-space indentation.
pub fn format_state(state: &CounterState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

pub fn parse_state(s: &str) -> serde_json::Result<CounterState> {
    serde_json::from_str(s)
}

pub fn counter_model(store: &mut Store<CounterState>) {
    store.state_mut().clicks = 0;
    store.on(INCREMENT, |state, _, emit| {
        state.clicks += 1;
        tracing::info!(clicks = state.clicks, "increment");
        emit.emit(events::RENDER);
    });
}

pub fn counter_view(state: &CounterState, emit: &Emitter) -> MemNode {
    let json = format_state(state).unwrap_or_else(|e| panic!("tried to format the state: {e}"));
    h("body")
        .child(h("my-heading"))
        .child(h("hr"))
        .child(
            h("my-section")
                .attr("text", format!("Clicks: {}", state.clicks))
                .hook(Hook::Render, Payload::new(1)),
        )
        .child(h("my-state").text(json))
        .child(
            h("my-button")
                .hook(Hook::Init, Payload::new(emit.clone()))
                .text("Click me!"),
        )
        .build()
}

/// Define `my-heading`, `my-section`, `my-state` and `my-button`. The
/// heading shows the document title at the time it is connected. The button
/// is clickable once mounted and emits through the [`Emitter`] it receives
/// as `oninit`.
pub fn define_elements(app: &mut App<CounterState>) {
    let title = app.document().title();
    app.define(Definition::new("my-heading", move || {
        let title = title.clone();
        Static::new(move |_: &MemNode| h("h1").text(title.clone()).build())
    }))
    .define(
        Definition::new("my-section", || {
            Refresh::new(|host: &MemNode, _: &Payload| {
                let text = host.attribute("text").unwrap_or_default();
                h("section").child(h("p").text(text)).build()
            })
        })
        .hook(Hook::Render),
    )
    .define(Definition::new("my-state", || {
        Wrapper::new(|| h("pre").class("content").build()).removal(WrapperRemoval::Delegate)
    }))
    .define(
        Definition::new("my-button", || {
            Conditional::new(|_, handle: &Handle, label: MemNode| {
                let handle = handle.clone();
                h("button")
                    .on("click", move |_: Event| {
                        let Some(payload) = handle.get() else {
                            tracing::warn!("`my-button` clicked before it got an emitter");
                            return;
                        };
                        match payload.get::<Emitter>() {
                            Some(emit) => emit.emit(INCREMENT),
                            None => panic!("tried to click `my-button` without an emitter"),
                        }
                    })
                    .child(label)
                    .build()
            })
        })
        .hook(Hook::Init),
    );
}

/// An unmounted counter application.
pub fn counter_app(title: &str) -> App<CounterState> {
    let mut app = App::new(CounterState::default());
    app.document().set_title(title.to_owned());
    define_elements(&mut app);
    app.model(counter_model).view(counter_view);
    app
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trip() {
        let state = CounterState { clicks: 42 };
        let json = format_state(&state).unwrap();
        assert_eq!(json, "{\n  \"clicks\": 42\n}");
        assert_eq!(parse_state(&json).unwrap(), state);
        assert!(parse_state("{\"clicks\": -1}").is_err());
    }

    #[test]
    fn view_binds_hooks() {
        let state = CounterState { clicks: 3 };
        let view = counter_view(&state, &Emitter::default());
        let section = view.children()[2].clone();
        assert_eq!(section.attribute("text"), Some("Clicks: 3".into()));
        assert_eq!(section.property("onrender").unwrap().get::<i32>(), Some(&1));
        let button = view.children()[4].clone();
        assert!(button.property("oninit").unwrap().is::<Emitter>());
    }
}

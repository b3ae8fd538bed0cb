use celem::counter::counter_app;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut app = counter_app("Custom elements");
    app.mount("body");
    println!("{}", app.document().to_html());

    for _ in 0..3 {
        let Some(button) = app.document().query_selector("button") else {
            break;
        };
        app.dispatch(&button, "click");
    }
    tracing::info!(clicks = app.state().clicks, "done");
    println!("{}", app.document().to_html());
}

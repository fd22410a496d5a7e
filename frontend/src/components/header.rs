use yew::prelude::*;

/// Renders the application header with the prediction service status.
pub fn render_header(api_online: Option<bool>) -> Html {
    let (class, label) = match api_online {
        None => ("service-status checking", "Checking service..."),
        Some(true) => ("service-status online", "Service online"),
        Some(false) => ("service-status offline", "Service offline"),
    };

    html! {
        <header class="app-header">
            <h1>{"🍅 Tamatar"}</h1>
            <p class="subtitle">{"Tomato Leaf Disease Detection"}</p>
            <span class={class}>{ label }</span>
        </header>
    }
}

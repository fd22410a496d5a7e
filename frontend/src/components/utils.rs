use shared::AppError;
use yew::prelude::*;

pub fn render_error_message(error: Option<&AppError>, on_dismiss: Callback<MouseEvent>) -> Html {
    if let Some(error) = error {
        html! {
            <div class="error-message">
                <span class="error-icon">{"⚠️"}</span>
                <p>{ error.user_message() }</p>
                <button onclick={on_dismiss}>{"Dismiss"}</button>
            </div>
        }
    } else {
        html! {}
    }
}

mod api;
mod components;
mod leaf_image;

use api::{prediction_client, PredictionClient};
use components::header::render_header;
use components::image_upload::ImageUpload;
use components::result_display::ResultDisplay;
use components::utils::render_error_message;
use leaf_image::LeafImage;
use shared::{Effect, Msg as ShellMsg, Shell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Shell transitions
    ImageSelected(Option<LeafImage>),
    Analyze,
    PredictionSettled(ShellMsg<LeafImage>),
    DismissError,
    Reset,

    // Service status
    HealthChecked(bool),
}

// Main component
struct Model {
    shell: Shell<LeafImage>,
    client: Rc<PredictionClient>,
    api_online: Option<bool>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let model = Self {
            shell: Shell::default(),
            client: Rc::new(prediction_client()),
            api_online: None,
        };
        model.send_health_check(ctx);
        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let shell_msg = match msg {
            Msg::ImageSelected(image) => ShellMsg::Select(image),
            Msg::Analyze => ShellMsg::Submit,
            Msg::PredictionSettled(settled) => settled,
            Msg::DismissError => ShellMsg::Dismiss,
            Msg::Reset => ShellMsg::Reset,
            Msg::HealthChecked(online) => {
                self.api_online = Some(online);
                return true;
            }
        };

        if let Some(effect) = self.shell.update(shell_msg) {
            self.send_analysis_request(ctx, effect);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app">
                { render_header(self.api_online) }

                <main class="app-main">
                    <ImageUpload
                        on_image_select={link.callback(Msg::ImageSelected)}
                        disabled={self.shell.loading()}
                        has_selection={self.shell.selection().is_some()}
                    />
                    { self.render_submit_button(ctx) }
                    { render_error_message(self.shell.error(), link.callback(|_| Msg::DismissError)) }
                    <ResultDisplay result={self.shell.result().cloned()} />
                    { self.render_reset_button(ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Powered by AI • Rust + WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Effects
impl Model {
    fn send_analysis_request(&self, ctx: &Context<Self>, effect: Effect<LeafImage>) {
        spawn_local({
            let link = ctx.link().clone();
            let client = Rc::clone(&self.client);

            async move {
                let settled = effect.run(&*client).await;
                link.send_message(Msg::PredictionSettled(settled));
            }
        });
    }

    fn send_health_check(&self, ctx: &Context<Self>) {
        spawn_local({
            let link = ctx.link().clone();
            let client = Rc::clone(&self.client);

            async move {
                let online = client.check_api_health().await;
                link.send_message(Msg::HealthChecked(online));
            }
        });
    }
}

// Rendering methods
impl Model {
    fn render_submit_button(&self, ctx: &Context<Self>) -> Html {
        if !self.shell.can_submit() {
            return html! {};
        }

        let loading = self.shell.loading();

        html! {
            <button
                class="submit-button"
                onclick={ctx.link().callback(|_| Msg::Analyze)}
                disabled={loading}
            >
                {
                    if loading {
                        html! { <><span class="spinner"></span>{"Analyzing..."}</> }
                    } else {
                        html! { {"Analyze Image"} }
                    }
                }
            </button>
        }
    }

    fn render_reset_button(&self, ctx: &Context<Self>) -> Html {
        if self.shell.result().is_none() {
            return html! {};
        }

        html! {
            <button
                class="reset-button"
                onclick={ctx.link().callback(|_| Msg::Reset)}
            >
                {"Analyze Another Image"}
            </button>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}

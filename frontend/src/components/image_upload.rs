use gloo_file::futures::read_as_data_url;
use shared::capture::CaptureState;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::leaf_image::LeafImage;

#[derive(Properties, PartialEq)]
pub struct ImageUploadProps {
    pub on_image_select: Callback<Option<LeafImage>>,
    pub disabled: bool,
    /// Whether the parent still holds a selection. When it drops it (reset),
    /// the picker drops its preview too.
    pub has_selection: bool,
}

#[function_component(ImageUpload)]
pub fn image_upload(props: &ImageUploadProps) -> Html {
    let capture = use_mut_ref(CaptureState::default);
    let trigger = use_force_update();
    let input_ref = use_node_ref();

    {
        let capture = capture.clone();
        let trigger = trigger.clone();
        let input_ref = input_ref.clone();

        use_effect_with(props.has_selection, move |has_selection| {
            if !*has_selection {
                let had_preview = capture.borrow().has_selection();
                capture.borrow_mut().clear();
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                if had_preview {
                    trigger.force_update();
                }
            }
        });
    }

    let handle_change = {
        let capture = capture.clone();
        let trigger = trigger.clone();
        let on_image_select = props.on_image_select.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                return;
            };
            let image = LeafImage::from(file);
            let Some(ticket) = capture.borrow_mut().offer(&image) else {
                return;
            };

            spawn_local({
                let capture = capture.clone();
                let trigger = trigger.clone();
                let file = image.file().clone();

                async move {
                    match read_as_data_url(&file).await {
                        Ok(data_url) => {
                            if capture.borrow_mut().preview_ready(ticket, data_url) {
                                trigger.force_update();
                            }
                        }
                        Err(e) => log::error!("Failed to read preview of {}: {:?}", file.name(), e),
                    }
                }
            });

            on_image_select.emit(Some(image));
        })
    };

    let handle_upload_click = {
        let input_ref = input_ref.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let handle_clear = {
        let capture = capture.clone();
        let trigger = trigger.clone();
        let input_ref = input_ref.clone();
        let on_image_select = props.on_image_select.clone();

        Callback::from(move |_: MouseEvent| {
            capture.borrow_mut().clear();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            on_image_select.emit(None);
            trigger.force_update();
        })
    };

    let preview = capture.borrow().preview().map(str::to_string);

    html! {
        <div class="image-upload">
            <input
                ref={input_ref}
                type="file"
                accept="image/*"
                capture="environment"
                onchange={handle_change}
                disabled={props.disabled}
                style="display: none;"
            />

            {
                if let Some(preview) = preview {
                    html! {
                        <>
                            <div class="preview-container">
                                <img src={preview} alt="Preview" class="image-preview" />
                                <button
                                    onclick={handle_clear}
                                    class="clear-button"
                                    disabled={props.disabled}
                                >
                                    {"✕ Clear"}
                                </button>
                            </div>
                            <button
                                onclick={handle_upload_click}
                                class="change-button"
                                disabled={props.disabled}
                            >
                                {"Change Image"}
                            </button>
                        </>
                    }
                } else {
                    html! {
                        <div
                            class={classes!("upload-prompt", props.disabled.then_some("disabled"))}
                            onclick={handle_upload_click}
                        >
                            <div class="upload-icon">{"📷"}</div>
                            <p>{"Click to upload or take a photo"}</p>
                            <small>{"Support for JPG, PNG images"}</small>
                        </div>
                    }
                }
            }
        </div>
    }
}

use shared::Prediction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<Prediction>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(result) = &props.result else {
        return html! {};
    };
    let tier = result.tier();

    html! {
        <div class="result-display">
            <h2>{"Analysis Result"}</h2>
            <div class="result-card">
                <div class="disease-info">
                    <span class="label">{"Detected Disease:"}</span>
                    <h3 class="disease-name">{ &result.disease }</h3>
                </div>
                <div class="confidence-info">
                    <span class="label">{"Confidence:"}</span>
                    <div class={classes!("confidence-bar-container", tier.to_string())}>
                        <div class="confidence-bar" style={result.bar_style()}></div>
                    </div>
                    <span class="confidence-value">{ result.percent_label() }</span>
                </div>
                <div class="confidence-message">
                    <p class={tier.to_string()}>{ format!("{} {}", tier.icon(), tier.message()) }</p>
                </div>
            </div>
        </div>
    }
}

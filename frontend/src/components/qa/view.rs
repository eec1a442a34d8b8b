use common::jobs::SubmissionState;
use common::model::qa::{
    Domain, COMPLEXITY_SLIDER_MAX, PAIR_COUNT_MAX, PAIR_COUNT_MIN, PAIR_COUNT_STEP, SAMPLE_PAIRS,
};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::feedback::FeedbackWidget;
use crate::components::helpers::{
    input_number, preview_button_row, progress_bar, textarea_value,
};
use crate::components::preview::preview_sheet;

use super::messages::Msg;
use super::state::QaPanel;

pub fn view(component: &QaPanel, ctx: &Context<QaPanel>) -> Html {
    let link = ctx.link();
    let busy = component.submission.is_busy();
    let on_context = link.callback(|e: InputEvent| Msg::SetContext(textarea_value(&e)));
    html! {
        <section id="qa" class="panel">
            <div class="panel-heading">
                <h2>{ "Q&A Pair Generator" }</h2>
                <p class="muted">
                    { "Domain-specific question and answer pairs for model training." }
                </p>
            </div>
            <div class="panel-grid">
                <div class="card">
                    { build_domain_cards(component, link) }
                    { build_sliders(component, link) }
                    <label>
                        { "Context (optional)" }
                        <textarea
                            placeholder="e.g. Type 2 diabetes management"
                            value={component.context.clone()}
                            oninput={on_context}
                        />
                    </label>
                    { build_constraints(component.domain) }
                    <button
                        class="btn btn-primary"
                        disabled={busy}
                        onclick={link.callback(|_| Msg::Generate)}
                    >
                        { if busy { "Generating..." } else { "Generate Q&A Pairs" } }
                    </button>
                </div>
                <div class="card">
                    { build_outcome(component, link) }
                    { build_sample_output(component, link) }
                </div>
            </div>
            {
                preview_sheet(
                    component.preview_ref.clone(),
                    "Q&A preview",
                    component.preview.as_ref(),
                    link.callback(|_| Msg::ClosePreview),
                )
            }
        </section>
    }
}

fn build_domain_cards(component: &QaPanel, link: &Scope<QaPanel>) -> Html {
    html! {
        <div class="domain-grid">
            {
                for Domain::ALL.iter().copied().map(|domain| {
                    let selected = (domain == component.domain).then_some("selected");
                    let class = classes!("domain-card", selected);
                    let onclick = link.callback(move |_| Msg::SelectDomain(domain));
                    html! {
                        <button class={class} onclick={onclick}>
                            { domain.label() }
                        </button>
                    }
                })
            }
        </div>
    }
}

fn build_sliders(component: &QaPanel, link: &Scope<QaPanel>) -> Html {
    let level = component.complexity_level();
    let on_pairs = link.batch_callback(|e: InputEvent| input_number(&e).map(Msg::SetPairs));
    let on_complexity =
        link.batch_callback(|e: InputEvent| input_number(&e).map(Msg::SetComplexity));
    html! {
        <>
            <label>
                { format!("Number of pairs: {}", component.num_pairs) }
                <input
                    type="range"
                    min={PAIR_COUNT_MIN.to_string()}
                    max={PAIR_COUNT_MAX.to_string()}
                    step={PAIR_COUNT_STEP.to_string()}
                    value={component.num_pairs.to_string()}
                    oninput={on_pairs}
                />
            </label>
            <label>
                { format!("Complexity: {:?}", level) }
                <input
                    type="range"
                    min="0"
                    max={COMPLEXITY_SLIDER_MAX.to_string()}
                    value={component.complexity.to_string()}
                    oninput={on_complexity}
                />
                <span class="muted">{ level.summary() }</span>
            </label>
        </>
    }
}

fn build_constraints(domain: Domain) -> Html {
    html! {
        <div class="badge-row">
            { for domain.constraints().iter().map(|c| html! { <span class="badge">{ *c }</span> }) }
        </div>
    }
}

fn build_outcome(component: &QaPanel, link: &Scope<QaPanel>) -> Html {
    match &component.submission {
        SubmissionState::Idle => html! {},
        SubmissionState::InProgress => progress_bar(component.progress.percent()),
        SubmissionState::Failed(message) => html! { <p class="error-text">{ message.clone() }</p> },
        SubmissionState::Succeeded(generation) => html! {
            <div class="success-card">
                <h4>{ "Q&A pairs ready" }</h4>
                <p>{
                    format!(
                        "{} {} pairs generated.",
                        generation.request.num_pairs,
                        generation.request.domain.label()
                    )
                }</p>
                {
                    preview_button_row(
                        link.callback(|_| Msg::OpenPreview),
                        link.callback(|_| Msg::Download),
                    )
                }
                <FeedbackWidget dataset_id={component.dataset_id.clone()} />
            </div>
        },
    }
}

fn build_sample_output(component: &QaPanel, link: &Scope<QaPanel>) -> Html {
    html! {
        <div class="sample-output">
            <div class="row-between">
                <h4>{ "Sample output" }</h4>
                <label class="toggle">
                    <input
                        type="checkbox"
                        checked={component.show_confidence}
                        onchange={link.callback(|_| Msg::ToggleConfidence)}
                    />
                    { "Show confidence" }
                </label>
            </div>
            {
                for SAMPLE_PAIRS.iter().map(|pair| html! {
                    <div class="qa-pair">
                        <p><strong>{ "Q: " }</strong>{ pair.question }</p>
                        <p><strong>{ "A: " }</strong>{ pair.answer }</p>
                        if component.show_confidence {
                            <span class="badge">
                                { format!("{}% confidence", pair.confidence) }
                            </span>
                        }
                    </div>
                })
            }
        </div>
    }
}

//! Security and guardrails dashboard. Every figure here is mock data.

use common::security::{
    Guardrail, GuardrailSettings, RiskLevel, ViolationStatus, COMPLIANCE_STANDARDS,
    DEFAULT_RISK_SCORE, VIOLATIONS,
};
use yew::prelude::*;

pub enum Msg {
    Toggle(Guardrail),
}

pub struct SecurityPanel {
    guardrails: GuardrailSettings,
}

impl Component for SecurityPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            guardrails: GuardrailSettings::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle(guardrail) => self.guardrails.toggle(guardrail),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="security" class="panel">
                <div class="panel-heading">
                    <h2>{ "Security & Guardrails" }</h2>
                    <p class="muted">{ "Compliance posture and generation safeguards." }</p>
                </div>
                <div class="panel-grid">
                    { build_compliance() }
                    { self.build_guardrails(ctx) }
                    { build_violations() }
                </div>
            </section>
        }
    }
}

impl SecurityPanel {
    fn build_guardrails(&self, ctx: &Context<Self>) -> Html {
        let active = self.guardrails.enabled_count();
        html! {
            <div class="card">
                <h3>{ "Guardrails" }</h3>
                <p class="muted">{ format!("{active} of {} active", Guardrail::ALL.len()) }</p>
                {
                    for Guardrail::ALL.iter().copied().map(|guardrail| {
                        let onchange = ctx.link().callback(move |_| Msg::Toggle(guardrail));
                        html! {
                            <label class="toggle-row">
                                <div>
                                    <strong>{ guardrail.label() }</strong>
                                    <p class="muted">{ guardrail.description() }</p>
                                </div>
                                <input
                                    type="checkbox"
                                    checked={self.guardrails.is_enabled(guardrail)}
                                    onchange={onchange}
                                />
                            </label>
                        }
                    })
                }
            </div>
        }
    }
}

fn build_compliance() -> Html {
    let risk = RiskLevel::from_score(DEFAULT_RISK_SCORE);
    let compliant = COMPLIANCE_STANDARDS.iter().filter(|s| s.compliant).count();
    let total = COMPLIANCE_STANDARDS.len();
    html! {
        <div class="card">
            <h3>{ "Compliance Shield" }</h3>
            <p class="shield">{ format!("{compliant}/{total} standards met") }</p>
            {
                for COMPLIANCE_STANDARDS.iter().map(|standard| {
                    let (class, label) = if standard.compliant {
                        ("badge badge-ok", "Compliant")
                    } else {
                        ("badge badge-high", "Action needed")
                    };
                    html! {
                        <div class="row-between">
                            <span title={standard.description}>{ standard.name }</span>
                            <span class={class}>{ label }</span>
                        </div>
                    }
                })
            }
            <p class="muted">
                { format!("Risk score {DEFAULT_RISK_SCORE} ({} risk)", risk.label()) }
            </p>
        </div>
    }
}

fn build_violations() -> Html {
    html! {
        <div class="card">
            <h3>{ "Recent Violations" }</h3>
            {
                for VIOLATIONS.iter().map(|violation| {
                    let status = match violation.status {
                        ViolationStatus::Resolved => "Resolved",
                        ViolationStatus::Reviewing => "Reviewing",
                    };
                    let severity = violation.severity.as_str();
                    html! {
                        <div class="violation">
                            <span class={classes!("severity", severity)}>{ severity }</span>
                            <div>
                                <strong>{ violation.kind }</strong>
                                <p class="muted">{ format!("{} · {status}", violation.time) }</p>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}

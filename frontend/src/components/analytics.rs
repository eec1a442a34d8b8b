//! Analytics hub: data health, ROI calculator, quality timeline, impact.

use common::analytics::{
    quality_gain, quality_timeline, Impact, RoiEstimate, HEALTH_METRICS, TEAM_SIZE_DEFAULT,
    TEAM_SIZE_MAX, TEAM_SIZE_MIN, USE_CASES,
};
use common::model::feedback::FeedbackReport;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::{format_count, format_currency, input_number};

pub enum Msg {
    SetTeamSize(u32),
    ReportLoaded(FeedbackReport),
}

pub struct AnalyticsPanel {
    team_size: u32,
    /// Live report, absent until `/feedback-report` answers.
    report: Option<FeedbackReport>,
}

impl Component for AnalyticsPanel {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = match api::client() {
                Ok(client) => client.feedback_report().await,
                Err(err) => Err(err),
            };
            match outcome {
                Ok(report) => link.send_message(Msg::ReportLoaded(report)),
                Err(err) => {
                    log::info!("feedback report unavailable, showing static timeline: {err}")
                }
            }
        });
        Self {
            team_size: TEAM_SIZE_DEFAULT,
            report: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTeamSize(size) => self.team_size = size.clamp(TEAM_SIZE_MIN, TEAM_SIZE_MAX),
            Msg::ReportLoaded(report) => self.report = Some(report),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="analytics" class="panel">
                <div class="panel-heading">
                    <h2>{ "Analytics Hub" }</h2>
                    <p class="muted">{ "Quality, value and impact of your synthetic data." }</p>
                </div>
                <div class="panel-grid">
                    { self.build_health() }
                    { self.build_roi(ctx) }
                    { self.build_timeline() }
                    { build_impact() }
                </div>
            </section>
        }
    }
}

impl AnalyticsPanel {
    fn build_health(&self) -> Html {
        html! {
            <div class="card">
                <h3>{ "Data Health" }</h3>
                {
                    for HEALTH_METRICS.iter().map(|metric| html! {
                        <div class="metric">
                            <div class="row-between">
                                <span>{ metric.name }</span>
                                <strong>{ format!("{}%", metric.value) }</strong>
                            </div>
                            <div class="progress">
                                <div
                                    class="progress-bar"
                                    style={format!("width: {}%;", metric.value)}
                                />
                            </div>
                            <p class="muted">{ metric.description }</p>
                        </div>
                    })
                }
                if let Some(report) = &self.report {
                    <p class="muted">
                        { format!(
                            "Average rating {:.1}/5 across {} submissions",
                            report.average_rating,
                            format_count(report.total_submissions)
                        ) }
                    </p>
                }
            </div>
        }
    }

    fn build_roi(&self, ctx: &Context<Self>) -> Html {
        let estimate = RoiEstimate::for_team(self.team_size);
        let on_size = ctx
            .link()
            .batch_callback(|e: InputEvent| input_number(&e).map(Msg::SetTeamSize));
        html! {
            <div class="card">
                <h3>{ "ROI Calculator" }</h3>
                <label>
                    { format!("Team size: {}", estimate.team_size) }
                    <input
                        type="range"
                        min={TEAM_SIZE_MIN.to_string()}
                        max={TEAM_SIZE_MAX.to_string()}
                        value={estimate.team_size.to_string()}
                        oninput={on_size}
                    />
                </label>
                <div class="stat-grid">
                    { stat("Monthly cost", format_currency(estimate.monthly_cost)) }
                    { stat("Monthly savings", format_currency(estimate.monthly_savings)) }
                    { stat("Time saved", format!("{}%", estimate.time_saved_percent())) }
                    { stat("Annual ROI", format!("{}%", estimate.annual_roi_percent())) }
                </div>
                <div class="badge-row">
                    {
                        for (0..estimate.badge_count()).map(|_| html! {
                            <span class="dollar-badge">{ "$" }</span>
                        })
                    }
                </div>
            </div>
        }
    }

    fn build_timeline(&self) -> Html {
        let points = quality_timeline(self.report.as_ref());
        let gain = quality_gain(&points);
        html! {
            <div class="card">
                <h3>{ "Quality Timeline" }</h3>
                <div class="timeline">
                    {
                        for points.iter().map(|point| {
                            let height = point.quality.clamp(0.0, 100.0);
                            html! {
                                <div class="timeline-bar">
                                    <div
                                        class="timeline-fill"
                                        style={format!("height: {height:.0}%;")}
                                    />
                                    <span class="muted">{ point.label.clone() }</span>
                                </div>
                            }
                        })
                    }
                </div>
                <p class="success-text">{ format!("{:+.0} points over the period", gain) }</p>
            </div>
        }
    }
}

fn build_impact() -> Html {
    html! {
        <div class="card">
            <h3>{ "Use Case Impact" }</h3>
            {
                for USE_CASES.iter().map(|case| {
                    let badge = match case.impact {
                        Impact::High => "badge badge-high",
                        Impact::Medium => "badge badge-medium",
                    };
                    html! {
                        <div class="impact">
                            <div class="row-between">
                                <strong>{ case.title }</strong>
                                <span class={badge}>{ format!("{:?} impact", case.impact) }</span>
                            </div>
                            <p class="muted">{ case.description }</p>
                            <span>{ format!("{} time reduction", case.time_reduction) }</span>
                        </div>
                    }
                })
            }
        </div>
    }
}

fn stat(label: &'static str, value: String) -> Html {
    html! {
        <div><span class="muted">{ label }</span><strong>{ value }</strong></div>
    }
}

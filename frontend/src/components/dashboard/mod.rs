//! Landing section: hero copy, decorative canvases, live counters and the
//! backend health badge.

use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::{format_count, random_unit};

mod canvas;
mod helix;
mod particles;

use helix::DnaHelix;
use particles::ParticleCanvas;

const STATS_INTERVAL_MS: u32 = 3000;
const INITIAL_DATASETS: u64 = 1_247_892;
const INITIAL_ROWS_MILLIONS: f64 = 47.2;

const RECENT_PROJECTS: [(&str, &str, u32, &str); 3] = [
    ("Customer Analytics", "Tabular", 94, "12.5K"),
    ("Medical Q&A", "Conversational", 97, "8.2K"),
    ("Financial Records", "Tabular", 92, "25.1K"),
];

#[derive(Clone, Debug, PartialEq)]
pub enum Health {
    Checking,
    Online,
    Offline,
}

pub enum Msg {
    StatsTick,
    HealthChecked(Health),
}

pub struct Dashboard {
    datasets: u64,
    rows_millions: f64,
    health: Health,
    _stats_ticker: Interval,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let health = match api::client() {
                Ok(client) => match client.health().await {
                    Ok(status) if status.is_online() => Health::Online,
                    Ok(status) => {
                        log::warn!("backend reports status {:?}", status.status);
                        Health::Offline
                    }
                    Err(err) => {
                        log::warn!("health check failed: {err}");
                        Health::Offline
                    }
                },
                Err(err) => {
                    log::error!("no usable client configuration: {err}");
                    Health::Offline
                }
            };
            link.send_message(Msg::HealthChecked(health));
        });

        let tick_link = ctx.link().clone();
        Self {
            datasets: INITIAL_DATASETS,
            rows_millions: INITIAL_ROWS_MILLIONS,
            health: Health::Checking,
            _stats_ticker: Interval::new(STATS_INTERVAL_MS, move || {
                tick_link.send_message(Msg::StatsTick)
            }),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StatsTick => {
                self.datasets += 1 + (random_unit() * 3.0) as u64;
                self.rows_millions += random_unit() * 0.1;
            }
            Msg::HealthChecked(health) => self.health = health,
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (badge_class, badge_text) = match self.health {
            Health::Checking => ("badge", "Checking API..."),
            Health::Online => ("badge badge-ok", "API online"),
            Health::Offline => ("badge badge-high", "API offline"),
        };

        html! {
            <section id="dashboard" class="hero">
                <ParticleCanvas />
                <div class="hero-content">
                    <span class={badge_class}>{ badge_text }</span>
                    <h1>
                        <span class="text-gradient">{ "Generate Perfect" }</span><br />
                        { "Training Data" }<br />
                        <span class="text-accent">{ "in 3 Clicks" }</span>
                    </h1>
                    <p class="hero-subtitle">
                        { "Intelligent Synthetic Data Generation for AI Training" }
                    </p>
                    <div class="row">
                        <a class="btn btn-primary" href="#tabular">{ "Tabular Data" }</a>
                        <a class="btn btn-outline" href="#qa">{ "Q&A Pairs" }</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <DnaHelix />
                </div>
                <div class="stat-grid">
                    { stat_card(format_count(self.datasets), "Datasets Generated") }
                    { stat_card(format!("{:.1}M", self.rows_millions), "Rows Created") }
                    { stat_card("98.7%".to_string(), "Quality Score") }
                </div>
                <h3 class="centered">{ "Recent Projects" }</h3>
                <div class="panel-grid">
                    {
                        for RECENT_PROJECTS.iter().map(|(name, kind, quality, rows)| html! {
                            <div class="card">
                                <div class="row-between">
                                    <strong>{ *name }</strong>
                                    <span class="badge">{ *kind }</span>
                                </div>
                                <div class="row-between">
                                    <span>{ "Quality Score" }</span>
                                    <span>{ format!("{quality}%") }</span>
                                </div>
                                <div class="row-between">
                                    <span>{ "Rows" }</span>
                                    <span>{ *rows }</span>
                                </div>
                            </div>
                        })
                    }
                </div>
            </section>
        }
    }
}

fn stat_card(value: String, label: &'static str) -> Html {
    html! {
        <div class="card"><strong>{ value }</strong><span class="muted">{ label }</span></div>
    }
}

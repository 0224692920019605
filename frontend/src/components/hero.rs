//! Main card: badge, copy, call-to-action and metrics.

use leptos::*;

use crate::panel::PanelView;

#[component]
pub fn HeroCard(
    /// Current render model
    view: ReadSignal<PanelView>,
    /// Fired on every click of the call-to-action
    on_activate: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="lp-card">
            <div class="lp-pill">{move || view.with(|v| v.config.highlight.clone())}</div>
            <h1 class="lp-title">{move || view.with(|v| v.config.title.clone())}</h1>
            <p class="lp-subtitle">{move || view.with(|v| v.config.subtitle.clone())}</p>

            // Bullets may repeat, so they are rendered by position rather than keyed.
            <ul class="lp-list">
                {move || view.with(|v| {
                    v.config
                        .bullets
                        .iter()
                        .map(|item| view! { <li><span class="lp-dot"></span>{item.clone()}</li> })
                        .collect_view()
                })}
            </ul>

            <div class="lp-cta-row">
                <button class="lp-cta" on:click=move |_| on_activate.call(())>
                    {move || view.with(|v| v.config.cta_label.clone())}
                </button>
                <div class="lp-cta-hint">
                    <span>"✨"</span> " " {move || view.with(|v| v.cta_hint)}
                </div>
            </div>

            {move || view.with(|v| v.confirmation).map(|text| view! {
                <p class="lp-confirmation">{text}</p>
            })}

            <div class="lp-metrics">
                {move || view.with(|v| {
                    v.config
                        .metrics
                        .iter()
                        .map(|metric| view! {
                            <div class="lp-metric-card">
                                <span class="lp-metric-value">{metric.value.clone()}</span>
                                <span class="lp-metric-label">{metric.label.clone()}</span>
                            </div>
                        })
                        .collect_view()
                })}
            </div>
        </div>
    }
}

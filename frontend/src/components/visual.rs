//! Decorative pipeline card and feature grid.

use leptos::*;

use crate::copy::LocaleCopy;

#[component]
pub fn StudioVisual(copy: &'static LocaleCopy) -> impl IntoView {
    view! {
        <div class="lp-visual">
            <div class="lp-visual-radar">
                <div class="lp-radar-ring lp-radar-ring--one"></div>
                <div class="lp-radar-ring lp-radar-ring--two"></div>
                <div class="lp-radar-ring lp-radar-ring--three"></div>
            </div>

            <div class="lp-glass">
                <p class="lp-glass-eyebrow">{copy.visual_eyebrow}</p>
                <h3>{copy.visual_title}</h3>
                <p class="lp-glass-text">{copy.visual_text}</p>
                <div class="lp-chip-row">
                    {copy.visual_chips
                        .iter()
                        .map(|chip| view! { <span class="lp-chip">{*chip}</span> })
                        .collect_view()}
                </div>
            </div>

            <div class="lp-feature-grid">
                {copy.features
                    .iter()
                    .map(|feature| view! {
                        <div class="lp-feature-card">
                            <span class="lp-feature-badge">{feature.badge}</span>
                            <h4>{feature.title}</h4>
                            <p>{feature.desc}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="lp-flow lp-flow-one"></div>
            <div class="lp-flow lp-flow-two"></div>
        </div>
    }
}

//! Workflow ribbon

use leptos::*;

use crate::copy::LocaleCopy;

#[component]
pub fn Timeline(copy: &'static LocaleCopy) -> impl IntoView {
    view! {
        <div class="lp-ribbon">
            <div class="lp-ribbon-label">{copy.timeline_label}</div>
            <div class="lp-ribbon-track">
                {copy.steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| view! {
                        <div class="lp-timeline-step">
                            <div class="lp-step-index">{format!("{:02}", index + 1)}</div>
                            <div>
                                <h5>{step.title}</h5>
                                <p>{step.desc}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

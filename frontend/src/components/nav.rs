//! Navigation bar

use leptos::*;

use crate::copy::LocaleCopy;

#[component]
pub fn Nav(copy: &'static LocaleCopy) -> impl IntoView {
    let [pipeline, stack] = copy.nav_pills;
    view! {
        <nav class="lp-nav">
            <div class="lp-logo">{copy.logo}</div>
            <div class="lp-nav-badges">
                <span class="lp-nav-pill">{pipeline}</span>
                <span class="lp-nav-pill lp-nav-pill--ghost">{stack}</span>
            </div>
        </nav>
    }
}

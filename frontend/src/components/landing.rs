//! Landing panel root.
//!
//! Wires a [`LandingPanel`] to the host connection and to the DOM, then
//! lays out the main card and the optional studio sections.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use super::{HeroCard, Nav, StudioVisual, Timeline};
use crate::config::PanelOptions;
use crate::panel::{LandingPanel, PanelView};
use crate::services::host::{listen_for_render, DomSurface, PostMessageBridge};

#[component]
pub fn Landing(
    /// Locale and decorative sections
    #[prop(optional)]
    options: PanelOptions,
) -> impl IntoView {
    let (view, set_view) = create_signal(PanelView::initial(options));

    let panel = Rc::new(RefCell::new(LandingPanel::new(
        Box::new(PostMessageBridge::connect()),
        Box::new(DomSurface::new(set_view)),
        options,
    )));

    let listener = Rc::clone(&panel);
    if let Err(e) = listen_for_render(move |event| {
        listener.borrow_mut().on_configuration_change(&event);
    }) {
        log::error!("❌ Could not subscribe to host render events: {}", e);
    }

    // Measure once the first frame is laid out.
    let mounted = Rc::clone(&panel);
    request_animation_frame(move || mounted.borrow_mut().on_mount());

    let on_activate = Callback::new(move |_: ()| panel.borrow_mut().on_activate());

    let copy = view.with_untracked(|v| v.copy);
    let studio = options.studio_sections;

    view! {
        <div
            class=move || if view.with(|v| v.dark) { "lp-root lp-root--dark" } else { "lp-root" }
            style=move || view.with(|v| v.theme_style.clone())
            lang=move || view.with(|v| v.locale.tag())
        >
            <div class="lp-gradient lp-gradient-one"></div>
            <div class="lp-gradient lp-gradient-two"></div>

            <Show when=move || studio fallback=|| ()>
                <Nav copy=copy/>
            </Show>

            <div class="lp-shell">
                <HeroCard view=view on_activate=on_activate/>
                <Show when=move || studio fallback=|| ()>
                    <StudioVisual copy=copy/>
                </Show>
            </div>

            <Show when=move || studio fallback=|| ()>
                <Timeline copy=copy/>
            </Show>
        </div>
    }
}

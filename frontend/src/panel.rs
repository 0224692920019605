//! The landing panel itself, independent of the DOM.
//!
//! [`LandingPanel`] owns the resolved configuration and the
//! acknowledgement flag and drives two injected collaborators: a
//! [`HostBridge`] for everything reported to the host and a
//! [`RenderSurface`] that displays a [`PanelView`] and measures it.
//!
//! Every lifecycle step ends the same way: render, measure, report the
//! height.

use crate::bridge::{HostBridge, RenderEvent, Theme};
use crate::config::PanelOptions;
use crate::copy::LocaleCopy;
use crate::types::{InteractionState, Locale, PanelConfiguration, Phase};

/// Where a [`PanelView`] ends up.
pub trait RenderSurface {
    /// Display `view`; the surface must be laid out when this returns.
    fn render(&self, view: &PanelView);

    /// Current rendered height in pixels.
    fn height(&self) -> f64;
}

/// Everything the view layer needs to draw the panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub config: PanelConfiguration,
    /// Shown once the call-to-action has been activated
    pub confirmation: Option<&'static str>,
    pub cta_hint: &'static str,
    pub locale: Locale,
    pub copy: &'static LocaleCopy,
    pub studio_sections: bool,
    /// Host theme as CSS custom properties
    pub theme_style: String,
    pub dark: bool,
}

impl PanelView {
    fn build(
        config: &PanelConfiguration,
        state: &InteractionState,
        options: PanelOptions,
        theme: Option<&Theme>,
    ) -> Self {
        let copy = LocaleCopy::for_locale(options.locale);
        Self {
            config: config.clone(),
            confirmation: match state.phase() {
                Phase::Unacknowledged => None,
                Phase::Acknowledged => Some(copy.confirmation),
            },
            cta_hint: copy.cta_hint,
            locale: options.locale,
            copy,
            studio_sections: options.studio_sections,
            theme_style: theme.map(Theme::css_variables).unwrap_or_default(),
            dark: theme.map_or(false, Theme::is_dark),
        }
    }

    /// What a fresh panel shows before the host sent anything.
    pub fn initial(options: PanelOptions) -> Self {
        Self::build(
            &PanelConfiguration::defaults(options.locale),
            &InteractionState::default(),
            options,
            None,
        )
    }
}

pub struct LandingPanel {
    bridge: Box<dyn HostBridge>,
    surface: Box<dyn RenderSurface>,
    options: PanelOptions,
    config: PanelConfiguration,
    theme: Option<Theme>,
    state: InteractionState,
}

impl LandingPanel {
    pub fn new(
        bridge: Box<dyn HostBridge>,
        surface: Box<dyn RenderSurface>,
        options: PanelOptions,
    ) -> Self {
        Self {
            bridge,
            surface,
            options,
            config: PanelConfiguration::defaults(options.locale),
            theme: None,
            state: InteractionState::default(),
        }
    }

    pub fn config(&self) -> &PanelConfiguration {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn view(&self) -> PanelView {
        PanelView::build(&self.config, &self.state, self.options, self.theme.as_ref())
    }

    /// First render after the panel is attached.
    pub fn on_mount(&mut self) {
        log::info!("🌸 Landing panel mounted ({})", self.options.locale);
        self.refresh();
    }

    /// Apply a render event from the host.
    ///
    /// Leaves the acknowledgement flag untouched.
    pub fn on_configuration_change(&mut self, event: &RenderEvent) {
        self.config = PanelConfiguration::resolve(&event.args, self.options.locale);
        self.theme = event.theme.clone();
        log::debug!("Configuration updated: {:?}", self.config);
        self.refresh();
    }

    /// The call-to-action was activated.
    ///
    /// Reports `true` on every activation; only the first one changes state.
    pub fn on_activate(&mut self) {
        if self.state.acknowledge() {
            log::info!("✅ Call-to-action acknowledged");
        }
        self.bridge.report_value(true);
        self.refresh();
    }

    fn refresh(&self) {
        self.surface.render(&self.view());
        let height = self.surface.height();
        log::debug!("Reporting frame height {}px", height);
        self.bridge.report_height(height);
    }
}

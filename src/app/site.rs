use crate::app::markup;
use crate::app::pages::{self, FormView, PageContext};
use crate::config::SiteConfig;
use crate::core::forms::{ContactForm, FormInput, QuickQuoteForm, RelayForm, TrackForm};
use crate::core::gateway::SubmissionGateway;
use crate::core::page_selector;
use crate::core::route_store::{RouteStore, Subscription};
use crate::domain::model::{Page, Route};
use crate::domain::ports::{FormRelay, Location};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use chrono::Datelike;
use std::sync::{Arc, Mutex};
use url::Url;

/// Forms belonging to the page currently on screen. Leaving a page tears its
/// form down; coming back mounts a fresh one.
struct MountedForms<R: FormRelay> {
    relay: Arc<R>,
    contact_endpoint: Url,
    track_endpoint: Url,
    contact: Mutex<Option<Arc<ContactForm<R>>>>,
    track: Mutex<Option<Arc<TrackForm<R>>>>,
}

impl<R: FormRelay> MountedForms<R> {
    fn sync(&self, page: Option<Page>) {
        Self::swap(
            &self.contact,
            page == Some(Page::Contact),
            || RelayForm::new(SubmissionGateway::from_url(self.contact_endpoint.clone(), self.relay.clone())),
        );
        Self::swap(
            &self.track,
            page == Some(Page::Track),
            || RelayForm::new(SubmissionGateway::from_url(self.track_endpoint.clone(), self.relay.clone())),
        );
    }

    fn swap<I: FormInput>(
        slot: &Mutex<Option<Arc<RelayForm<R, I>>>>,
        visible: bool,
        mount: impl FnOnce() -> RelayForm<R, I>,
    ) {
        let mut slot = slot.lock().unwrap_or_else(|e| e.into_inner());
        match (visible, slot.is_some()) {
            (true, false) => *slot = Some(Arc::new(mount())),
            (false, true) => {
                if let Some(form) = slot.take() {
                    form.detach();
                }
            }
            _ => {}
        }
    }
}

/// The whole site for one browser tab: router, nav menu and the forms of the
/// page on screen.
pub struct Site<L: Location + 'static, R: FormRelay + 'static> {
    config: SiteConfig,
    routes: RouteStore<L>,
    forms: Arc<MountedForms<R>>,
    menu_open: Mutex<bool>,
    _route_watch: Subscription,
}

impl<L: Location + 'static, R: FormRelay + 'static> Site<L, R> {
    pub fn new(config: SiteConfig, location: Arc<L>, relay: Arc<R>) -> Result<Self> {
        config.validate()?;

        let forms = Arc::new(MountedForms {
            relay,
            contact_endpoint: parse_endpoint("endpoints.contact", &config.endpoints.contact)?,
            track_endpoint: parse_endpoint("endpoints.track", &config.endpoints.track)?,
            contact: Mutex::new(None),
            track: Mutex::new(None),
        });

        let routes = RouteStore::new(location);
        forms.sync(page_selector::select(&routes.current()));

        let watched = forms.clone();
        let route_watch = routes.subscribe(move |route| {
            watched.sync(page_selector::select(route));
        });

        tracing::info!("Site ready on route {}", routes.current());
        Ok(Self {
            config,
            routes,
            forms,
            menu_open: Mutex::new(false),
            _route_watch: route_watch,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteStore<L> {
        &self.routes
    }

    pub fn current_route(&self) -> Route {
        self.routes.current()
    }

    pub fn current_page(&self) -> Option<Page> {
        page_selector::select(&self.routes.current())
    }

    /// Link activation: navigate and close the mobile menu.
    pub fn navigate(&self, target: &str) {
        self.routes.navigate(target);
        *self.menu_open.lock().unwrap_or_else(|e| e.into_inner()) = false;
    }

    pub fn toggle_menu(&self) -> bool {
        let mut open = self.menu_open.lock().unwrap_or_else(|e| e.into_inner());
        *open = !*open;
        *open
    }

    pub fn menu_open(&self) -> bool {
        *self.menu_open.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The contact form, present only while the contact page is on screen.
    pub fn contact_form(&self) -> Option<Arc<ContactForm<R>>> {
        self.forms
            .contact
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The tracking form, present only while the track page is on screen.
    pub fn track_form(&self) -> Option<Arc<TrackForm<R>>> {
        self.forms
            .track
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Submits the Quick Quote card on the home page and returns its notice.
    /// Nothing is sent to the relay.
    pub fn quick_quote(&self, form: &QuickQuoteForm) -> Result<&'static str> {
        if self.current_page() != Some(Page::Home) {
            return Err(SiteError::FormNotMountedError {
                form: "quick-quote".to_string(),
                route: self.current_route().to_string(),
            });
        }
        Ok(form.submit())
    }

    /// Main content for the current route, or `None` when no page matches.
    pub fn render_main(&self) -> Option<String> {
        self.main_markup().map(|markup| markup.into_string())
    }

    pub fn render(&self) -> String {
        let brand = &self.config.brand;
        markup::document(
            brand,
            markup::header(brand, self.menu_open()),
            self.main_markup(),
            markup::footer(brand, chrono::Local::now().year()),
        )
        .into_string()
    }

    fn main_markup(&self) -> Option<maud::Markup> {
        let page = self.current_page()?;
        let context = PageContext {
            brand: &self.config.brand,
            contact: self.contact_form().map(|form| form_view(&form)),
            track: self.track_form().map(|form| form_view(&form)),
        };
        Some(pages::render_page(page, &context))
    }
}

fn form_view<R: FormRelay, I: FormInput>(form: &RelayForm<R, I>) -> FormView<I> {
    FormView {
        input: form.input(),
        status: form.status(),
        message: form.status_message(),
    }
}

fn parse_endpoint(field: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| SiteError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{HttpRelay, MemoryLocation};

    fn site(fragment: &str) -> Site<MemoryLocation, HttpRelay> {
        Site::new(
            SiteConfig::default(),
            Arc::new(MemoryLocation::new(fragment)),
            Arc::new(HttpRelay::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_forms_mount_with_their_page() {
        let site = site("");
        assert!(site.contact_form().is_none());
        assert!(site.track_form().is_none());

        site.navigate("/contact");
        assert!(site.contact_form().is_some());
        assert!(site.track_form().is_none());

        site.navigate("/track");
        assert!(site.contact_form().is_none());
        assert!(site.track_form().is_some());
    }

    #[test]
    fn test_leaving_page_detaches_form() {
        let site = site("#/track");
        let form = site.track_form().unwrap();
        assert!(form.gateway().status_cell().is_attached());

        site.navigate("/about");
        assert!(!form.gateway().status_cell().is_attached());

        site.navigate("/track");
        let fresh = site.track_form().unwrap();
        assert!(!Arc::ptr_eq(&form, &fresh));
    }

    #[test]
    fn test_navigation_closes_menu() {
        let site = site("");
        assert!(site.toggle_menu());
        assert!(site.render().contains("aria-expanded=\"true\""));

        site.navigate("/services");
        assert!(!site.menu_open());
    }

    #[test]
    fn test_quick_quote_only_on_home() {
        let site = site("");
        let form = QuickQuoteForm {
            origin: "USA".to_string(),
            destination: "Lagos".to_string(),
            weight_kg: "4".to_string(),
        };
        assert_eq!(site.quick_quote(&form).unwrap(), QuickQuoteForm::NOTICE);

        site.navigate("/services");
        let err = site.quick_quote(&form).unwrap_err();
        assert!(matches!(err, SiteError::FormNotMountedError { ref route, .. } if route == "/services"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SiteConfig::default();
        config.endpoints.track = "not a url".to_string();
        let result = Site::new(
            config,
            Arc::new(MemoryLocation::default()),
            Arc::new(HttpRelay::new()),
        );
        assert!(result.is_err());
    }
}

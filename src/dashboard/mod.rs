//! Seller dashboard: injected collaborators in, view-model and navigation out.

pub mod navigation;

pub use navigation::{DashboardAction, Navigator, RedirectNavigator};

use crate::domain::Listing;
use crate::providers::{ListingsProvider, UserProvider};
use crate::tours::{ToursApi, ToursPanel, ToursState};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Everything the page needs, captured at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub user_email: Option<String>,
    pub listings: Vec<Listing>,
    pub listings_loading: bool,
    pub tours: ToursState,
}

impl DashboardView {
    pub fn listing_count(&self) -> usize {
        self.listings.len()
    }
}

pub struct DashboardController<L, U> {
    listings: L,
    user: U,
    tours_api: Arc<dyn ToursApi>,
    tours: ToursPanel,
}

impl<L, U> DashboardController<L, U> {
    /// Mount: kick off the one tours fetch for this dashboard.
    /// The worker is detached; `false` if a fetch was already started.
    pub fn activate(&self) -> bool {
        self.tours.activate(Arc::clone(&self.tours_api)).is_some()
    }

    /// Wait at most `timeout` for the tours fetch to settle.
    pub fn wait_for_tours(&self, timeout: Duration) -> bool {
        self.tours.wait_settled(timeout)
    }

    pub fn deactivate(&self) {
        self.tours.deactivate();
    }

    pub fn tours(&self) -> ToursState {
        self.tours.state()
    }
}

impl<L: ListingsProvider, U: UserProvider> DashboardController<L, U> {
    pub fn new(listings: L, user: U, tours_api: Arc<dyn ToursApi>) -> Self {
        Self {
            listings,
            user,
            tours_api,
            tours: ToursPanel::new(),
        }
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            user_email: self.user.user().map(|u| u.email),
            listings: self.listings.listings(),
            listings_loading: self.listings.loading(),
            tours: self.tours.state(),
        }
    }

    pub fn add_listing(&self, nav: &mut dyn Navigator) {
        nav.navigate(&DashboardAction::AddListing.path());
    }

    pub fn open_assistant(&self, nav: &mut dyn Navigator) {
        nav.navigate(&DashboardAction::Assistant.path());
    }

    pub fn view_listing(&self, id: i64, nav: &mut dyn Navigator) {
        debug!(listing_id = id, "viewing listing");
        nav.navigate(&DashboardAction::ViewListing(id).path());
    }

    pub fn dispatch(&self, action: &DashboardAction, nav: &mut dyn Navigator) {
        match action {
            DashboardAction::AddListing => self.add_listing(nav),
            DashboardAction::Assistant => self.open_assistant(nav),
            DashboardAction::ViewListing(id) => self.view_listing(*id, nav),
        }
    }
}

impl<L, U> Drop for DashboardController<L, U> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

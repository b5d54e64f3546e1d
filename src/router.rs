use crate::app_state::AppState;
use crate::auth::token::request_id;
use crate::dashboard::{DashboardAction, DashboardController, RedirectNavigator};
use crate::errors::ServerError;
use crate::providers::{SessionUserProvider, SharedListings, UserProvider};
use crate::responses::{html_response, see_other, ResultResp};
use crate::templates::pages::{
    pending_tours_panel, seller_dashboard_page, tours_panel, TOURS_FRAGMENT_PATH,
};
use astra::Request;
use chrono::Utc;
use tracing::{debug, info_span};

type SellerDashboard = DashboardController<SharedListings, SessionUserProvider>;

const LISTING_PREFIX: &str = "/dashboard/listings/";

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    let span = info_span!("request", method, path, req_id = %request_id());
    let _enter = span.enter();

    match (method, path) {
        ("GET", "/") => see_other("/dashboard"),
        ("GET", "/dashboard") => {
            let dashboard = mount_page(&req, app)?;
            html_response(seller_dashboard_page(&dashboard.view()))
        }
        ("GET", TOURS_FRAGMENT_PATH) => {
            let dashboard = mount(&req, app)?;
            dashboard.activate();
            if dashboard.wait_for_tours(app.fragment_wait) {
                html_response(tours_panel(&dashboard.tours()))
            } else {
                debug!(wait = ?app.fragment_wait, "tours still loading, asking client to retry");
                html_response(pending_tours_panel())
            }
        }
        ("POST", "/dashboard/add-listing") => navigate(&req, app, DashboardAction::AddListing),
        ("POST", "/dashboard/assistant") => navigate(&req, app, DashboardAction::Assistant),
        ("GET", p) if p.starts_with(LISTING_PREFIX) => {
            let id = p[LISTING_PREFIX.len()..]
                .parse::<i64>()
                .map_err(|_| ServerError::BadRequest("invalid listing id".into()))?;
            navigate(&req, app, DashboardAction::ViewListing(id))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Full page: the seller's listings are read from the database.
fn mount_page(req: &Request, app: &AppState) -> Result<SellerDashboard, ServerError> {
    let user = resolve_user(req, app)?;

    let listings = SharedListings::new();
    match user.user() {
        Some(seller) => listings.refresh(&app.db, seller.id),
        None => {
            debug!("no session, rendering anonymous dashboard");
            listings.replace(Vec::new());
        }
    }

    Ok(wire(app, user, listings))
}

/// Tours fragment and actions: nothing here reads the listings.
fn mount(req: &Request, app: &AppState) -> Result<SellerDashboard, ServerError> {
    let user = resolve_user(req, app)?;
    Ok(wire(app, user, SharedListings::ready(Vec::new())))
}

fn resolve_user(req: &Request, app: &AppState) -> Result<SessionUserProvider, ServerError> {
    let cookie = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok());

    SessionUserProvider::resolve(&app.db, cookie, Utc::now().timestamp())
}

fn wire(app: &AppState, user: SessionUserProvider, listings: SharedListings) -> SellerDashboard {
    let tours = app.tours.connect(user.token());
    DashboardController::new(listings, user, tours)
}

fn navigate(req: &Request, app: &AppState, action: DashboardAction) -> ResultResp {
    let dashboard = mount(req, app)?;
    let mut nav = RedirectNavigator::new(app.frontend_base.clone());
    dashboard.dispatch(&action, &mut nav);

    match nav.target() {
        Some(target) => see_other(target),
        None => Err(ServerError::InternalError),
    }
}

pub mod seller_dashboard;

pub use seller_dashboard::{
    pending_tours_panel, seller_dashboard_page, tours_panel, TOURS_FRAGMENT_PATH,
};

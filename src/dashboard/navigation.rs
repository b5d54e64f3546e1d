use url::Url;

pub const ADD_LISTING_PATH: &str = "/add-edit-listing";
pub const ASSISTANT_PATH: &str = "/chat";

/// Somewhere the dashboard can send the seller next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    AddListing,
    Assistant,
    ViewListing(i64),
}

impl DashboardAction {
    pub fn path(&self) -> String {
        match self {
            DashboardAction::AddListing => ADD_LISTING_PATH.to_string(),
            DashboardAction::Assistant => ASSISTANT_PATH.to_string(),
            DashboardAction::ViewListing(id) => format!("/listing/{id}"),
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Turns the last requested path into a redirect target.
#[derive(Debug, Clone, Default)]
pub struct RedirectNavigator {
    base: Option<Url>,
    target: Option<String>,
}

impl RedirectNavigator {
    /// Paths are resolved under `base` (keeping its path) when set,
    /// kept relative otherwise.
    pub fn new(base: Option<Url>) -> Self {
        let base = base.map(|mut base| {
            if !base.path().ends_with('/') {
                let path = format!("{}/", base.path());
                base.set_path(&path);
            }
            base
        });
        Self { base, target: None }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str) {
        let resolved = self
            .base
            .as_ref()
            .and_then(|base| base.join(path.trim_start_matches('/')).ok())
            .map(String::from)
            .unwrap_or_else(|| path.to_string());
        self.target = Some(resolved);
    }
}

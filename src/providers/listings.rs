use super::ListingsProvider;
use crate::db::connection::Database;
use crate::db::listings::seller_listings;
use crate::domain::Listing;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

#[derive(Debug, Default)]
struct Snapshot {
    listings: Vec<Listing>,
    loading: bool,
}

/// Listings shared between whoever refreshes them and whoever renders them.
/// Starts out loading until the first refresh completes.
#[derive(Debug, Clone)]
pub struct SharedListings {
    inner: Arc<RwLock<Snapshot>>,
}

impl Default for SharedListings {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedListings {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Snapshot {
                listings: Vec::new(),
                loading: true,
            })),
        }
    }

    /// Already-resolved listings, never loading.
    pub fn ready(listings: Vec<Listing>) -> Self {
        let shared = Self::new();
        shared.replace(listings);
        shared
    }

    pub fn replace(&self, listings: Vec<Listing>) {
        let mut snap = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        snap.listings = listings;
        snap.loading = false;
    }

    /// Reload the seller's listings from the database.
    /// A failed query leaves an empty, settled set.
    pub fn refresh(&self, db: &Database, seller_id: i64) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = true;

        let listings = db
            .with_conn(|conn| seller_listings(conn, seller_id))
            .unwrap_or_else(|err| {
                warn!(seller_id, error = %err, "failed to load seller listings");
                Vec::new()
            });

        self.replace(listings);
    }
}

impl ListingsProvider for SharedListings {
    fn listings(&self) -> Vec<Listing> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .listings
            .clone()
    }

    fn loading(&self) -> bool {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).loading
    }
}

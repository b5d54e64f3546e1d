//! Read-only state the dashboard consumes but does not own.

mod listings;
mod user;

pub use listings::SharedListings;
pub use user::SessionUserProvider;

use crate::domain::Listing;

/// The signed-in seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
}

pub trait ListingsProvider {
    fn listings(&self) -> Vec<Listing>;
    fn loading(&self) -> bool;
}

pub trait UserProvider {
    fn user(&self) -> Option<SessionUser>;
}

impl<T: ListingsProvider + ?Sized> ListingsProvider for &T {
    fn listings(&self) -> Vec<Listing> {
        (**self).listings()
    }

    fn loading(&self) -> bool {
        (**self).loading()
    }
}

impl<T: UserProvider + ?Sized> UserProvider for &T {
    fn user(&self) -> Option<SessionUser> {
        (**self).user()
    }
}

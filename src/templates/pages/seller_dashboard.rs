use crate::dashboard::DashboardView;
use crate::domain::{Listing, Tour};
use crate::templates::components::{card, notice_card, Tone};
use crate::templates::desktop_layout;
use crate::tours::ToursState;
use maud::{html, Markup, PreEscaped};

pub const TOURS_FRAGMENT_PATH: &str = "/dashboard/tours";

const NO_LISTINGS: &str = "You haven't created any listings yet. Click \"Add New Listing\" or use our AI Assistant to get started!";

pub fn seller_dashboard_page(view: &DashboardView) -> Markup {
    desktop_layout(
        "Seller Dashboard",
        html! {
            main class="container" {
                @if view.listings_loading {
                    div class="centered" {
                        p { "Loading your listings..." }
                    }
                } @else {
                    (dashboard_body(view))
                }
            }
        },
    )
}

fn dashboard_body(view: &DashboardView) -> Markup {
    html! {
        h1 { "Seller Dashboard" }

        @if let Some(email) = &view.user_email {
            p class="subtitle text-secondary" { "Welcome back, " (email) }
        }

        div class="actions" {
            form method="post" action="/dashboard/add-listing" {
                button type="submit" class="primary" { "Add New Listing" }
            }
            form method="post" action="/dashboard/assistant" {
                button type="submit" class="secondary" { "AI Assistant - Create Listing" }
            }
        }

        h2 { "Your Active Listings (" (view.listing_count()) ")" }

        @if view.listings.is_empty() {
            (notice_card(NO_LISTINGS, Tone::Muted))
        } @else {
            ul class="listings" {
                @for listing in &view.listings {
                    li { (listing_card(listing)) }
                }
            }
        }

        h2 { "Recent Offers & Messages" }
        (notice_card("No recent offers or messages.", Tone::Muted))

        h2 { "Upcoming Tours" }
        (tours_panel(&view.tours))
    }
}

fn listing_card(listing: &Listing) -> Markup {
    html! {
        a class="card-link" href=(format!("/dashboard/listings/{}", listing.id)) {
            (card(html! {
                h3 { (listing.title) }
                p class="text-secondary" { "Address: " (listing.address_line()) }
                p class="text-secondary" { "Price: $" (listing.display_price()) }
                p class="text-secondary" { "Status: " (listing.status) }
            }))
        }
    }
}

/// The tours section on its own. While loading it asks htmx to swap itself
/// for the settled fragment as soon as the page is shown.
pub fn tours_panel(state: &ToursState) -> Markup {
    html! {
        @match state {
            ToursState::Loading => (loading_tours("load")),
            ToursState::Failed(message) => {
                section id="tours-panel" {
                    (notice_card(message, Tone::Error))
                }
            }
            ToursState::Ready(tours) => {
                section id="tours-panel" {
                    @if tours.is_empty() {
                        (notice_card("No upcoming tours.", Tone::Muted))
                    } @else {
                        ul class="tours" {
                            @for tour in tours {
                                li id=(format!("tour-{}", tour.id)) { (tour_card(tour)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Still loading after the fragment wait ran out; htmx asks again shortly.
pub fn pending_tours_panel() -> Markup {
    loading_tours(RETRY_TRIGGER)
}

const RETRY_TRIGGER: &str = "load delay:2s";

fn loading_tours(trigger: &str) -> Markup {
    html! {
        section
            id="tours-panel"
            hx-get=(TOURS_FRAGMENT_PATH)
            hx-trigger=(trigger)
            hx-swap="outerHTML"
        {
            (notice_card("Loading upcoming tours...", Tone::Muted))
        }
    }
}

fn tour_card(tour: &Tour) -> Markup {
    card(html! {
        h3 { (tour.street) ", " (tour.city) ", " (tour.state) " " (tour.zip) }
        p class="text-secondary" {
            "Date: " (tour.scheduled_date) " " (PreEscaped("&nbsp;")) " Time: " (tour.scheduled_time)
        }
        p class="text-secondary" { "Buyer ID: " (tour.buyer_id) }
        p class="text-secondary" { "Status: " (tour.status) }
        @if let Some(notes) = tour.notes() {
            p class="text-secondary" { "Notes: " (notes) }
        }
    })
}

//! Client-side state wiring for the UniqueStore storefront.
//!
//! The domain logic lives in `store-commerce` and `store-browse`;
//! this crate connects it to the world the storefront runs in:
//!
//! - [`FilterStore`]: filter state synchronized with the address bar,
//!   with explicit inbound/outbound arbitration
//! - [`BrowsePage`]: catalog fetch plus client-side filtering, with
//!   backend failures degrading to an empty grid
//! - [`FeaturedCarousel`]: the carousel machine mapped onto product
//!   identity
//! - [`Liveness`]: guards async completions against teardown races
//! - [`dashboard`]: chart-series aggregation for the admin console
//! - [`PromotionGesture`]: the hidden admin gesture, as local state

pub mod browse;
pub mod dashboard;
pub mod featured;
pub mod filter_store;
pub mod gesture;
pub mod liveness;
pub mod telemetry;

pub use browse::BrowsePage;
pub use featured::FeaturedCarousel;
pub use filter_store::{FilterStore, HistorySink, SyncOrigin};
pub use gesture::PromotionGesture;
pub use liveness::{Liveness, LivenessGuard};

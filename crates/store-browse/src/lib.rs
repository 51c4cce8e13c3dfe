//! Product browsing logic for the UniqueStore storefront.
//!
//! Three pieces, all deterministic and free of I/O:
//!
//! - **Filter state** ([`FilterState`]): the selected price range,
//!   style/material/brand sets, and discount-only toggle, plus the
//!   pure evaluator that reduces a product list to the visible subset.
//! - **URL codec**: bidirectional mapping between filter state and
//!   query-string parameters, with field-wise graceful degradation on
//!   malformed input.
//! - **Carousel machine** ([`Carousel`]): a circular active-index
//!   state machine with transition phases, wrap detection, auto-play
//!   deadlines, and a visible-window computation. Deadlines are plain
//!   data driven by `tick(now)`, so tests advance a manual clock.
//!
//! The stateful wiring (history sync, product identity, telemetry)
//! lives in `store-app`; this crate is the logic underneath it.

pub mod carousel;
pub mod filter;
mod params;

pub use carousel::{Carousel, Step, TransitionPhase, AUTO_ADVANCE_EVERY, TRANSITION, VISIBLE_RADIUS};
pub use filter::{FilterState, PRICE_CEIL, PRICE_FLOOR};

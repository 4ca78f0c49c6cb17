//! Page-local presentation state models.
//!
//! DESIGN
//! ======
//! Layout mode is a pure function of viewport width and is recomputed by
//! every interested component, so concurrently mounted components agree
//! by construction rather than through shared state.

pub mod layout;
pub mod nav;

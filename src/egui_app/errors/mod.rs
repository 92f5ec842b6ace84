//! Client Error Handling
//!
//! The client-side counterpart of the server pipeline:
//!
//! - **`caught`** - the sum of everything a failed call can produce
//! - **`deal_with`** - the classifier that logs first and then picks
//!   exactly one treatment
//! - **`boundary`** - the steady/failed state machine behind the fallback
//!   view
//! - **`fallback`** - the view shown while the boundary is failed

pub mod boundary;
pub mod caught;
pub mod deal_with;
pub mod fallback;

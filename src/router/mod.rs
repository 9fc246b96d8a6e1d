//! # Router Module
//!
//! Route registration and dispatch.
//!
//! ## Overview
//!
//! The router owns a [`RouteTable`]: one exact-match bucket per method plus
//! an `ANY` catch-all bucket. Registration normalizes paths (leading and
//! trailing separators stripped) and upserts, so the last registration for a
//! key wins. Dispatch tries the method-specific bucket, falls back to the
//! `ANY` bucket, and reports a miss as a distinct `NotFound` outcome.
//!
//! ## Concurrency
//!
//! The table is populated at startup through `&mut Router`; `dispatch` takes
//! `&self`. Once the router is shared (for example in an `Arc`), the borrow
//! checker rules out any registration racing a dispatch read.

mod router;

pub use router::{RouteTable, Router};

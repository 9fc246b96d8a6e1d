//! # Route Metadata
//!
//! Value types describing declared routes: the fixed method set and the
//! immutable descriptor attached to controller actions.
//!
//! ## Overview
//!
//! A [`RouteDescriptor`] is what a controller author writes; the collector
//! reads descriptors at startup and turns them into router registrations.
//! [`RouteMethod`] is the closed set of methods the route table buckets by,
//! including the `ANY` catch-all.

mod descriptor;
mod method;

pub use descriptor::RouteDescriptor;
pub use method::{RouteMethod, UnknownMethod};

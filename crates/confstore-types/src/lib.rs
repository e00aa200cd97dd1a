//! Confstore Types - Resource model for configuration stores
//!
//! A configuration store persists typed resources addressed by a
//! `(kind, namespace, name)` triple. Every stored resource carries an opaque
//! version token that the store rotates on each successful write.
//!
//! ## Key Concepts
//!
//! - **GroupVersionKind**: Identifies the schema of a resource
//! - **ResourceKey**: The `(kind, namespace, name)` identity of a resource
//! - **ResourceVersion**: Opaque optimistic-concurrency token
//! - **Resource**: Metadata plus a typed [`Spec`] payload
//! - **Scope**: Whether a kind's identity includes a namespace

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod kind;
pub mod resource;
pub mod spec;

// Re-export main types
pub use kind::{GroupVersionKind, Scope};
pub use resource::{Resource, ResourceKey, ResourceMeta, ResourceVersion};
pub use spec::{
    AccessPolicy, ConfigPair, Destination, Gateway, GatewayPort, GatewayServer, HttpRoute,
    LoadBalancerPolicy, MockConfig, Resolution, RouteDestination, RouteRule, ServiceEntry,
    ServicePort, Spec, SpecKind, TrafficPolicy, WorkloadSelector,
};

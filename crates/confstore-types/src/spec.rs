//! Typed resource payloads
//!
//! Each registered kind declares which [`SpecKind`] its resources carry.
//! The store rejects a resource whose payload variant does not match.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Payload of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Spec {
    Mock(MockConfig),
    RouteRule(RouteRule),
    TrafficPolicy(TrafficPolicy),
    ServiceEntry(ServiceEntry),
    Gateway(Gateway),
    AccessPolicy(AccessPolicy),
}

impl Spec {
    /// Discriminant used by the registry to match payloads against kinds
    pub fn spec_kind(&self) -> SpecKind {
        match self {
            Spec::Mock(_) => SpecKind::Mock,
            Spec::RouteRule(_) => SpecKind::RouteRule,
            Spec::TrafficPolicy(_) => SpecKind::TrafficPolicy,
            Spec::ServiceEntry(_) => SpecKind::ServiceEntry,
            Spec::Gateway(_) => SpecKind::Gateway,
            Spec::AccessPolicy(_) => SpecKind::AccessPolicy,
        }
    }
}

/// Payload shape selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecKind {
    Mock,
    RouteRule,
    TrafficPolicy,
    ServiceEntry,
    Gateway,
    AccessPolicy,
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpecKind::Mock => "MockConfig",
            SpecKind::RouteRule => "RouteRule",
            SpecKind::TrafficPolicy => "TrafficPolicy",
            SpecKind::ServiceEntry => "ServiceEntry",
            SpecKind::Gateway => "Gateway",
            SpecKind::AccessPolicy => "AccessPolicy",
        };
        write!(f, "{}", label)
    }
}

// ============================================================================
// Test payload
// ============================================================================

/// Payload of the dedicated test kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockConfig {
    pub key: String,
    #[serde(default)]
    pub pairs: Vec<ConfigPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPair {
    pub key: String,
    pub value: String,
}

// ============================================================================
// Routing
// ============================================================================

/// Routing rule: sends traffic for a set of hosts to weighted destinations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    pub hosts: Vec<String>,
    #[serde(default)]
    pub http: Vec<HttpRoute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRoute {
    pub route: Vec<RouteDestination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDestination {
    pub destination: Destination,
    /// Relative share of traffic, 0-100
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
}

// ============================================================================
// Traffic policy
// ============================================================================

/// Traffic policy applied to requests for a host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficPolicy {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<LoadBalancerPolicy>,
}

/// Simple load-balancing algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerPolicy {
    #[default]
    Unspecified,
    RoundRobin,
    LeastRequest,
    Random,
    Passthrough,
}

// ============================================================================
// External services
// ============================================================================

/// Entry describing a service outside the mesh
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub hosts: Vec<String>,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub ports: Vec<ServicePort>,
}

/// How addresses for a service entry are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    #[default]
    None,
    Static,
    Dns,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePort {
    pub number: u32,
    pub name: String,
    pub protocol: String,
}

// ============================================================================
// Ingress
// ============================================================================

/// Ingress gateway exposing a set of servers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gateway {
    pub servers: Vec<GatewayServer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayServer {
    pub hosts: Vec<String>,
    pub port: GatewayPort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayPort {
    pub number: u32,
    pub name: String,
    pub protocol: String,
}

// ============================================================================
// Access control
// ============================================================================

/// Access-control policy scoped to the workloads a selector matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<WorkloadSelector>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSelector {
    pub match_labels: HashMap<String, String>,
}

//! Example payloads for the well-known kinds
//!
//! Every constructor returns a fresh value, so one run can never observe a
//! mutation made by another.

use confstore_registry::{collections, KindSchema};
use confstore_types::{
    AccessPolicy, Destination, Gateway, GatewayPort, GatewayServer, HttpRoute, LoadBalancerPolicy,
    Resolution, RouteDestination, RouteRule, ServiceEntry, ServicePort, Spec, TrafficPolicy,
    WorkloadSelector,
};
use std::collections::HashMap;

/// Name given to every example resource
pub const EXAMPLE_NAME: &str = "example";

pub fn route_rule() -> RouteRule {
    RouteRule {
        hosts: vec!["prod".to_string(), "test".to_string()],
        http: vec![HttpRoute {
            route: vec![RouteDestination {
                destination: Destination {
                    host: "job".to_string(),
                    subset: None,
                },
                weight: 80,
            }],
        }],
    }
}

pub fn traffic_policy() -> TrafficPolicy {
    TrafficPolicy {
        host: "ratings".to_string(),
        load_balancer: Some(LoadBalancerPolicy::default()),
    }
}

pub fn service_entry() -> ServiceEntry {
    ServiceEntry {
        hosts: vec!["*.google.com".to_string()],
        resolution: Resolution::None,
        ports: vec![
            ServicePort {
                number: 80,
                name: "http-name".to_string(),
                protocol: "http".to_string(),
            },
            ServicePort {
                number: 8080,
                name: "http2-name".to_string(),
                protocol: "http2".to_string(),
            },
        ],
    }
}

pub fn gateway() -> Gateway {
    Gateway {
        servers: vec![GatewayServer {
            hosts: vec!["google.com".to_string()],
            port: GatewayPort {
                number: 10080,
                name: "http".to_string(),
                protocol: "http".to_string(),
            },
        }],
    }
}

pub fn access_policy() -> AccessPolicy {
    AccessPolicy {
        selector: Some(WorkloadSelector {
            match_labels: HashMap::from([
                ("app".to_string(), "httpbin".to_string()),
                ("version".to_string(), "v1".to_string()),
            ]),
        }),
    }
}

/// One example kind with its payload
#[derive(Debug, Clone)]
pub struct ExampleCase {
    pub name: &'static str,
    pub schema: KindSchema,
    pub spec: Spec,
}

/// The five example kinds with freshly built payloads
pub fn example_cases() -> Vec<ExampleCase> {
    vec![
        ExampleCase {
            name: "RouteRule",
            schema: collections::route_rule(),
            spec: Spec::RouteRule(route_rule()),
        },
        ExampleCase {
            name: "TrafficPolicy",
            schema: collections::traffic_policy(),
            spec: Spec::TrafficPolicy(traffic_policy()),
        },
        ExampleCase {
            name: "ServiceEntry",
            schema: collections::service_entry(),
            spec: Spec::ServiceEntry(service_entry()),
        },
        ExampleCase {
            name: "Gateway",
            schema: collections::gateway(),
            spec: Spec::Gateway(gateway()),
        },
        ExampleCase {
            name: "AccessPolicy",
            schema: collections::access_policy(),
            spec: Spec::AccessPolicy(access_policy()),
        },
    ]
}

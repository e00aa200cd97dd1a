//! Built-in kinds
//!
//! | Kind | Scope | Payload |
//! |---|---|---|
//! | `test.confstore.io/v1/MockConfig` | namespaced | `MockConfig` |
//! | `networking.confstore.io/v1alpha3/RouteRule` | namespaced | `RouteRule` |
//! | `networking.confstore.io/v1alpha3/TrafficPolicy` | namespaced | `TrafficPolicy` |
//! | `networking.confstore.io/v1alpha3/ServiceEntry` | namespaced | `ServiceEntry` |
//! | `networking.confstore.io/v1alpha3/Gateway` | cluster | `Gateway` |
//! | `security.confstore.io/v1beta1/AccessPolicy` | namespaced | `AccessPolicy` |

use crate::schema::{KindSchema, RegistryBuilder, ResourceRegistry};
use confstore_types::{GroupVersionKind, SpecKind};

const TEST_GROUP: &str = "test.confstore.io";
const NETWORKING_GROUP: &str = "networking.confstore.io";
const SECURITY_GROUP: &str = "security.confstore.io";

pub fn mock_kind() -> GroupVersionKind {
    GroupVersionKind::new(TEST_GROUP, "v1", "MockConfig")
}

pub fn route_rule_kind() -> GroupVersionKind {
    GroupVersionKind::new(NETWORKING_GROUP, "v1alpha3", "RouteRule")
}

pub fn traffic_policy_kind() -> GroupVersionKind {
    GroupVersionKind::new(NETWORKING_GROUP, "v1alpha3", "TrafficPolicy")
}

pub fn service_entry_kind() -> GroupVersionKind {
    GroupVersionKind::new(NETWORKING_GROUP, "v1alpha3", "ServiceEntry")
}

pub fn gateway_kind() -> GroupVersionKind {
    GroupVersionKind::new(NETWORKING_GROUP, "v1alpha3", "Gateway")
}

pub fn access_policy_kind() -> GroupVersionKind {
    GroupVersionKind::new(SECURITY_GROUP, "v1beta1", "AccessPolicy")
}

/// The dedicated test kind
pub fn mock() -> KindSchema {
    KindSchema::namespaced(mock_kind(), SpecKind::Mock)
}

pub fn route_rule() -> KindSchema {
    KindSchema::namespaced(route_rule_kind(), SpecKind::RouteRule)
}

pub fn traffic_policy() -> KindSchema {
    KindSchema::namespaced(traffic_policy_kind(), SpecKind::TrafficPolicy)
}

pub fn service_entry() -> KindSchema {
    KindSchema::namespaced(service_entry_kind(), SpecKind::ServiceEntry)
}

pub fn gateway() -> KindSchema {
    KindSchema::cluster(gateway_kind(), SpecKind::Gateway)
}

pub fn access_policy() -> KindSchema {
    KindSchema::namespaced(access_policy_kind(), SpecKind::AccessPolicy)
}

/// The five well-known example kinds, in canonical order
pub fn examples() -> Vec<KindSchema> {
    vec![
        route_rule(),
        traffic_policy(),
        service_entry(),
        gateway(),
        access_policy(),
    ]
}

/// Builder preloaded with every built-in kind
pub fn builder() -> RegistryBuilder {
    examples()
        .into_iter()
        .fold(ResourceRegistry::builder().with(mock()), |b, s| b.with(s))
}

/// Registry holding every built-in kind
pub fn all() -> ResourceRegistry {
    std::iter::once(mock()).chain(examples()).collect()
}

// Module layout (Clean Architecture style)
// - bootstrap: configuration, assembly and startup
// - infrastructure: plant knowledge sources
// - presentation: HTTP handlers and routing
// - application: ports, services and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

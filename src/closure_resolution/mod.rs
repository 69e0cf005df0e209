/// Closure resolution core: coordinate model, scope policy and the
/// worklist engine. Depends only on the outbound ports, never on adapters.
pub mod domain;
pub mod policies;
pub mod services;

mod scope_policy;

pub use scope_policy::ScopePolicy;

use crate::closure_resolution::domain::{DependencyEdge, Exclusion, Scope};
use std::collections::BTreeSet;

/// ScopePolicy decides which declared dependencies of an artifact are
/// followed transitively, and what request they are followed under.
///
/// Rules, applied to each child of a processed edge:
/// 1. optional children are dropped
/// 2. children in `provided`, `test` or `system` scope are dropped
/// 3. children whose groupId:artifactId matches an exclusion carried by the
///    parent edge are dropped
///
/// A kept child is requested with the *parent's* scope and optional flag and
/// the union of both exclusion sets.
pub struct ScopePolicy;

impl ScopePolicy {
    /// Returns true if `child`, declared by the artifact of `parent`, is followed
    pub fn keep_child(parent: &DependencyEdge, child: &DependencyEdge) -> bool {
        !child.is_optional()
            && Self::is_transitive_scope(child.scope())
            && !Self::is_excluded(parent, child)
    }

    /// Scopes that never leak into a consumer's closure
    pub fn is_transitive_scope(scope: &Scope) -> bool {
        !matches!(scope, Scope::Provided | Scope::Test | Scope::System)
    }

    pub fn is_excluded(parent: &DependencyEdge, child: &DependencyEdge) -> bool {
        parent
            .exclusions()
            .iter()
            .any(|exclusion| exclusion.matches(child.coordinate()))
    }

    pub fn merge_exclusions(parent: &DependencyEdge, child: &DependencyEdge) -> BTreeSet<Exclusion> {
        parent
            .exclusions()
            .union(child.exclusions())
            .cloned()
            .collect()
    }

    /// The request a kept child is enqueued as
    pub fn derive_child_edge(parent: &DependencyEdge, child: &DependencyEdge) -> DependencyEdge {
        DependencyEdge::new(
            child.coordinate().clone(),
            parent.scope().clone(),
            parent.is_optional(),
            Self::merge_exclusions(parent, child),
        )
    }

    /// Applies the policy to every declared child of `parent`, preserving order
    pub fn filter_children(parent: &DependencyEdge, children: &[DependencyEdge]) -> Vec<DependencyEdge> {
        children
            .iter()
            .filter(|child| Self::keep_child(parent, child))
            .map(|child| Self::derive_child_edge(parent, child))
            .collect()
    }
}

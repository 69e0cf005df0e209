use super::{Coordinate, Exclusion};
use std::collections::BTreeSet;
use std::fmt;

/// Declared usage context of a dependency
///
/// Unknown scope names are preserved verbatim so they round-trip into the
/// manifest; they are treated as transitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    #[default]
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
    Other(String),
}

impl Scope {
    /// Parses a declared scope; a missing scope means `compile`
    pub fn parse(scope: &str) -> Self {
        match scope.trim() {
            "" | "compile" => Scope::Compile,
            "provided" => Scope::Provided,
            "runtime" => Scope::Runtime,
            "test" => Scope::Test,
            "system" => Scope::System,
            "import" => Scope::Import,
            other => Scope::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
            Scope::Other(name) => name,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dependency request: coordinate plus scope, optionality and exclusions
///
/// Equality, hashing and ordering cover every field, so two requests for the
/// same artifact that differ in scope or exclusions are distinct edges.
/// Edges are immutable; derived edges are new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyEdge {
    coordinate: Coordinate,
    scope: Scope,
    optional: bool,
    exclusions: BTreeSet<Exclusion>,
}

impl DependencyEdge {
    pub fn new(
        coordinate: Coordinate,
        scope: Scope,
        optional: bool,
        exclusions: impl IntoIterator<Item = Exclusion>,
    ) -> Self {
        Self {
            coordinate,
            scope,
            optional,
            exclusions: exclusions.into_iter().collect(),
        }
    }

    /// Non-optional compile edge without exclusions
    pub fn compile(coordinate: Coordinate) -> Self {
        Self::new(coordinate, Scope::Compile, false, [])
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn exclusions(&self) -> &BTreeSet<Exclusion> {
        &self.exclusions
    }

    /// The implicit request for this artifact's own POM.
    ///
    /// Always compile and non-optional, whatever the originating edge says,
    /// but it keeps the originating exclusions.
    pub fn implicit_pom(&self) -> Self {
        Self {
            coordinate: self.coordinate.pom(),
            scope: Scope::Compile,
            optional: false,
            exclusions: self.exclusions.clone(),
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.coordinate, self.scope)?;
        if self.optional {
            write!(f, " optional")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn coordinate(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!(Scope::parse(""), Scope::Compile);
        assert_eq!(Scope::parse("runtime"), Scope::Runtime);
        assert_eq!(Scope::parse("provided"), Scope::Provided);
        assert_eq!(Scope::parse("custom"), Scope::Other("custom".to_string()));
        assert_eq!(Scope::parse("custom").as_str(), "custom");
    }

    #[test]
    fn test_edges_differing_in_scope_are_distinct() {
        let compile = DependencyEdge::compile(coordinate("g:a:1.0"));
        let runtime = DependencyEdge::new(coordinate("g:a:1.0"), Scope::Runtime, false, []);

        let mut seen = HashSet::new();
        assert!(seen.insert(compile.clone()));
        assert!(seen.insert(runtime));
        assert!(!seen.insert(compile));
    }

    #[test]
    fn test_edges_differing_in_exclusions_are_distinct() {
        let plain = DependencyEdge::compile(coordinate("g:a:1.0"));
        let excluding = DependencyEdge::new(
            coordinate("g:a:1.0"),
            Scope::Compile,
            false,
            ["x:y".parse().unwrap()],
        );
        assert_ne!(plain, excluding);
    }

    #[test]
    fn test_exclusion_order_does_not_affect_identity() {
        let first = DependencyEdge::new(
            coordinate("g:a:1.0"),
            Scope::Compile,
            false,
            ["x:y".parse().unwrap(), "p:q".parse().unwrap()],
        );
        let second = DependencyEdge::new(
            coordinate("g:a:1.0"),
            Scope::Compile,
            false,
            ["p:q".parse().unwrap(), "x:y".parse().unwrap()],
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_implicit_pom_resets_scope_and_optional() {
        let edge = DependencyEdge::new(
            coordinate("g:a:jar:tests:1.0"),
            Scope::Test,
            true,
            ["x:y".parse().unwrap()],
        );
        let pom = edge.implicit_pom();

        assert_eq!(pom.coordinate().to_string(), "g:a:pom:1.0");
        assert_eq!(pom.scope(), &Scope::Compile);
        assert!(!pom.is_optional());
        assert_eq!(pom.exclusions(), edge.exclusions());
    }
}

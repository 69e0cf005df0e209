use super::{Coordinate, DependencyEdge, Repository};

/// A build plugin and the extra dependencies declared for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlugin {
    pub artifact: Coordinate,
    pub dependencies: Vec<DependencyEdge>,
}

/// One module of a (possibly multi-module) project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectModule {
    pub artifact: Coordinate,
    /// Parent POM chain, nearest parent first
    pub parents: Vec<Coordinate>,
    pub dependencies: Vec<DependencyEdge>,
    pub plugins: Vec<BuildPlugin>,
    pub repositories: Vec<Repository>,
    pub plugin_repositories: Vec<Repository>,
}

impl ProjectModule {
    pub fn new(artifact: Coordinate) -> Self {
        Self {
            artifact,
            parents: Vec::new(),
            dependencies: Vec::new(),
            plugins: Vec::new(),
            repositories: Vec::new(),
            plugin_repositories: Vec::new(),
        }
    }
}

/// Project description: modules in build (reactor) order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectModel {
    pub modules: Vec<ProjectModule>,
}

impl ProjectModel {
    pub fn new(modules: Vec<ProjectModule>) -> Self {
        Self { modules }
    }

    /// The module the manifest is reported for: the last one built
    pub fn root(&self) -> Option<&ProjectModule> {
        self.modules.last()
    }
}

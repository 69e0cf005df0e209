use crate::closure_resolution::domain::{DependencyEdge, ProjectModel, Repository};
use std::collections::HashSet;

/// SeedCollector turns a project model into the initial work set and the
/// repository list of a resolution run.
///
/// This service contains pure business logic with no I/O dependencies.
pub struct SeedCollector;

impl SeedCollector {
    /// Collects the seed edges of every module, in build order
    ///
    /// Per module: each parent POM in the chain, each build plugin jar
    /// followed by the plugin's own dependencies, then the declared
    /// dependencies. Duplicates are kept; the work set collapses them.
    pub fn collect_seeds(project: &ProjectModel) -> Vec<DependencyEdge> {
        let mut seeds = Vec::new();

        for module in &project.modules {
            seeds.extend(
                module
                    .parents
                    .iter()
                    .map(|parent| DependencyEdge::compile(parent.pom())),
            );

            for plugin in &module.plugins {
                seeds.push(DependencyEdge::compile(plugin.artifact.clone()));
                seeds.extend(plugin.dependencies.iter().cloned());
            }

            seeds.extend(module.dependencies.iter().cloned());
        }

        seeds
    }

    /// Collects repositories of every module, project repositories before
    /// plugin repositories. The first repository with a given id wins.
    pub fn collect_repositories(project: &ProjectModel) -> Vec<Repository> {
        let mut ids = HashSet::new();

        project
            .modules
            .iter()
            .flat_map(|module| module.repositories.iter().chain(&module.plugin_repositories))
            .filter(|repository| ids.insert(repository.id().to_string()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure_resolution::domain::{
        BuildPlugin, Coordinate, ProjectModule, RemoteRepository, Scope,
    };

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn module(artifact: &str) -> ProjectModule {
        ProjectModule::new(coord(artifact))
    }

    #[test]
    fn test_seed_order_within_module() {
        let mut app = module("com.example:app:1.0");
        app.parents = vec![coord("com.example:parent:1.0")];
        app.plugins = vec![BuildPlugin {
            artifact: coord("org.apache.maven.plugins:maven-jar-plugin:3.3.0"),
            dependencies: vec![DependencyEdge::compile(coord("org.ow2.asm:asm:9.5"))],
        }];
        app.dependencies = vec![DependencyEdge::new(
            coord("junit:junit:4.13.2"),
            Scope::Test,
            false,
            [],
        )];

        let seeds = SeedCollector::collect_seeds(&ProjectModel::new(vec![app]));
        let rendered: Vec<String> = seeds.iter().map(|s| s.to_string()).collect();

        assert_eq!(
            rendered,
            vec![
                "com.example:parent:pom:1.0 (compile)",
                "org.apache.maven.plugins:maven-jar-plugin:jar:3.3.0 (compile)",
                "org.ow2.asm:asm:jar:9.5 (compile)",
                "junit:junit:jar:4.13.2 (test)",
            ]
        );
    }

    #[test]
    fn test_seeds_span_all_modules() {
        let mut core = module("com.example:core:1.0");
        core.dependencies = vec![DependencyEdge::compile(coord("g:one:1"))];
        let mut app = module("com.example:app:1.0");
        app.dependencies = vec![DependencyEdge::compile(coord("g:two:1"))];

        let seeds = SeedCollector::collect_seeds(&ProjectModel::new(vec![core, app]));

        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].coordinate().artifact_id(), "one");
        assert_eq!(seeds[1].coordinate().artifact_id(), "two");
    }

    #[test]
    fn test_repositories_first_id_wins() {
        let mut core = module("com.example:core:1.0");
        core.repositories = vec![Repository::Remote(RemoteRepository::new(
            "central",
            "https://repo.maven.apache.org/maven2",
        ))];
        core.plugin_repositories = vec![Repository::Remote(RemoteRepository::new(
            "plugins",
            "https://plugins.example.com",
        ))];
        let mut app = module("com.example:app:1.0");
        app.repositories = vec![Repository::Remote(RemoteRepository::new(
            "central",
            "https://mirror.example.com",
        ))];

        let repositories =
            SeedCollector::collect_repositories(&ProjectModel::new(vec![core, app]));

        assert_eq!(repositories.len(), 2);
        assert_eq!(repositories[0].id(), "central");
        assert_eq!(
            repositories[0].as_remote().unwrap().url,
            "https://repo.maven.apache.org/maven2"
        );
        assert_eq!(repositories[1].id(), "plugins");
    }
}

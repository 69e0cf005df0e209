//! On-disk sample project for CLI tests: project description, descriptor
//! catalog and a `file:` repository holding `.sha1` files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every file of the sample closure, relative to the repository root
pub const REPOSITORY_FILES: &[&str] = &[
    "org/log/logging/2.0/logging-2.0.jar",
    "org/log/logging/2.0/logging-2.0.pom",
    "junit/junit/4.13.2/junit-4.13.2.jar",
    "junit/junit/4.13.2/junit-4.13.2.pom",
    "org/hamcrest/hamcrest-core/1.3/hamcrest-core-1.3.jar",
    "org/hamcrest/hamcrest-core/1.3/hamcrest-core-1.3.pom",
];

const CATALOG: &str = r#"
artifacts:
  "org.log:logging:2.0": {}
  "junit:junit:4.13.2":
    dependencies:
      - artifact: "org.hamcrest:hamcrest-core:1.3"
      - artifact: "org.mockito:mockito-core:5.0.0"
        scope: test
  "org.hamcrest:hamcrest-core:1.3": {}
"#;

pub struct SampleProject {
    root: TempDir,
}

impl SampleProject {
    /// Project in `<tmp>/app`, repository in `<tmp>/repository`
    pub fn create() -> Self {
        let root = TempDir::new().unwrap();
        let sample = Self { root };

        fs::create_dir_all(sample.path()).unwrap();
        for (index, file) in REPOSITORY_FILES.iter().enumerate() {
            sample.write_checksum(file, &format!("{:040x}", index + 1));
        }

        let project = format!(
            r#"
modules:
  - artifact: com.example:app:1.0
    dependencies:
      - artifact: org.log:logging:2.0
      - artifact: junit:junit:4.13.2
        scope: test
    repositories:
      - id: mirror
        url: "file://{}"
"#,
            sample.repository().display()
        );
        fs::write(sample.path().join("mvn2nix.project.yml"), project).unwrap();
        fs::write(sample.path().join("mvn2nix.descriptors.yml"), CATALOG).unwrap();

        sample
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().join("app")
    }

    pub fn repository(&self) -> PathBuf {
        self.root.path().join("repository")
    }

    pub fn write_checksum(&self, file: &str, sha1: &str) {
        let path = self.repository().join(format!("{}.sha1", file));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("{}  {}\n", sha1, file_name(file))).unwrap();
    }

    pub fn remove_checksum(&self, file: &str) {
        fs::remove_file(self.repository().join(format!("{}.sha1", file))).unwrap();
    }

    /// Moves the catalog out of the project directory and returns its new path
    pub fn move_catalog(&self, file_name: &str) -> PathBuf {
        let target = self.root.path().join(file_name);
        fs::rename(self.path().join("mvn2nix.descriptors.yml"), &target).unwrap();
        target
    }
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

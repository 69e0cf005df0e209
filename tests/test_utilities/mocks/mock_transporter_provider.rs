use mvn2nix::closure_resolution::domain::RemoteRepository;
use mvn2nix::ports::outbound::Transporter;
use mvn2nix::prelude::*;
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub const DEFAULT_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// Mock TransporterProvider serving `.sha1` files from memory
///
/// Every checksum location answers [`DEFAULT_SHA1`] unless overridden or
/// removed. Counts how many transporters are opened and released.
#[derive(Default)]
pub struct MockTransporterProvider {
    checksums: HashMap<String, String>,
    missing: HashSet<String>,
    pub opened: Rc<Cell<usize>>,
    pub released: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockTransporterProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `sha1` for the checksum file at `location`
    pub fn with_checksum(mut self, location: &str, sha1: &str) -> Self {
        self.checksums.insert(location.to_string(), sha1.to_string());
        self
    }

    /// Makes fetching `location` fail
    pub fn without(mut self, location: &str) -> Self {
        self.missing.insert(location.to_string());
        self
    }
}

struct MockTransporter {
    checksums: HashMap<String, String>,
    missing: HashSet<String>,
    released: Rc<Cell<usize>>,
}

impl Transporter for MockTransporter {
    fn get(&self, location: &str) -> Result<Vec<u8>> {
        if self.missing.contains(location) {
            anyhow::bail!("404 Not Found: {}", location);
        }
        if let Some(sha1) = self.checksums.get(location) {
            return Ok(sha1.as_bytes().to_vec());
        }
        if location.ends_with(".sha1") {
            return Ok(DEFAULT_SHA1.as_bytes().to_vec());
        }
        anyhow::bail!("Mock transporter only serves checksums, asked for {}", location)
    }
}

impl Drop for MockTransporter {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

impl TransporterProvider for MockTransporterProvider {
    fn new_transporter(&self, _repository: &RemoteRepository) -> Result<Box<dyn Transporter>> {
        self.opened.set(self.opened.get() + 1);
        Ok(Box::new(MockTransporter {
            checksums: self.checksums.clone(),
            missing: self.missing.clone(),
            released: Rc::clone(&self.released),
        }))
    }
}

//! [`FakeConnector`]: an in-memory hosting service.
//!
//! Clones share one [`FakeService`], so a test can keep a handle and
//! inspect what the provider did.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use repo_auth::{HostingServer, UserCredential};
use repo_hosting::{Connector, Error, HostingApi, ProviderKind, Repository, Result};

#[derive(Debug, Default)]
pub struct FakeService {
    pub repos: Vec<Repository>,
    pub orgs: Vec<String>,
    /// Number of successful `connect` calls
    pub connections: usize,
    /// Refuse every connection
    pub refuse: bool,
    /// Fail every read with a transport error
    pub unreachable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FakeConnector {
    service: Rc<RefCell<FakeService>>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(self, owner: &str, name: &str) -> Self {
        self.service
            .borrow_mut()
            .repos
            .push(repository(owner, name, false));
        self
    }

    pub fn with_orgs(self, orgs: &[&str]) -> Self {
        self.service.borrow_mut().orgs = orgs.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn refusing(self) -> Self {
        self.service.borrow_mut().refuse = true;
        self
    }

    pub fn unreachable(self) -> Self {
        self.service.borrow_mut().unreachable = true;
        self
    }

    pub fn service(&self) -> Ref<'_, FakeService> {
        self.service.borrow()
    }

    pub fn connections(&self) -> usize {
        self.service.borrow().connections
    }
}

/// Repository record as the fake service reports it.
pub fn repository(owner: &str, name: &str, private: bool) -> Repository {
    Repository {
        owner: owner.to_string(),
        name: name.to_string(),
        full_name: format!("{owner}/{name}"),
        clone_url: format!("https://example.invalid/{owner}/{name}.git"),
        html_url: format!("https://example.invalid/{owner}/{name}"),
        private,
    }
}

impl Connector for FakeConnector {
    fn connect(
        &self,
        _kind: ProviderKind,
        _server: &HostingServer,
        _credential: &UserCredential,
    ) -> Result<Box<dyn HostingApi>> {
        let mut service = self.service.borrow_mut();
        if service.refuse {
            return Err(Error::transport("connection refused"));
        }
        service.connections += 1;
        Ok(Box::new(FakeApi {
            service: Rc::clone(&self.service),
        }))
    }
}

struct FakeApi {
    service: Rc<RefCell<FakeService>>,
}

impl FakeApi {
    fn reachable(&self) -> Result<()> {
        if self.service.borrow().unreachable {
            return Err(Error::transport("service unreachable"));
        }
        Ok(())
    }
}

impl HostingApi for FakeApi {
    fn get_repository(&self, owner: &str, name: &str) -> Result<Option<Repository>> {
        self.reachable()?;
        Ok(self
            .service
            .borrow()
            .repos
            .iter()
            .find(|r| r.owner == owner && r.name == name)
            .cloned())
    }

    fn create_repository(&self, owner: &str, name: &str, private: bool) -> Result<Repository> {
        self.reachable()?;
        if self.get_repository(owner, name)?.is_some() {
            return Err(Error::AlreadyExists {
                full_name: format!("{owner}/{name}"),
            });
        }
        let created = repository(owner, name, private);
        self.service.borrow_mut().repos.push(created.clone());
        Ok(created)
    }

    fn list_organizations(&self) -> Result<Vec<String>> {
        self.reachable()?;
        Ok(self.service.borrow().orgs.clone())
    }
}

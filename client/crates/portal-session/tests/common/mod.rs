#![allow(dead_code)]

use portal_api::{ApiClient, Navigator};
use portal_config::{ApiConfig, HostKind};
use portal_core::Route;
use portal_session::{FileStorage, SessionStorage, SessionStore};

use std::path::Path;
use std::sync::{Arc, Mutex};

pub struct Harness {
    pub store: Arc<SessionStore>,
    pub storage: Arc<FileStorage>,
    pub api: ApiClient,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    /// Store over `dir`, client against `base_url`, browser host.
    pub fn new(dir: &Path, base_url: &str) -> Self {
        let storage = Arc::new(FileStorage::new(dir));
        let store = Arc::new(SessionStore::new(storage.clone()));
        let navigator = Arc::new(RecordingNavigator::default());

        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        let api = ApiClient::new(&config, HostKind::Browser, store.clone())
            .unwrap()
            .with_navigator(navigator.clone());

        Self {
            store,
            storage,
            api,
            navigator,
        }
    }

    /// A fresh process over the same storage, as after a page reload.
    pub fn reload(&self, base_url: &str) -> Self {
        Self::new(self.storage.dir(), base_url)
    }

    pub fn stored(&self) -> Option<portal_core::StoredSession> {
        self.storage.load().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

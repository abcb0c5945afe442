//! Dev-server integration.
//!
//! The host server is modelled as an ordered list of named middlewares. The
//! plugin contributes one middleware that answers translation updates, and
//! the host's merge function decides where it lands in the chain.

use std::{fmt, path::PathBuf, sync::Arc};

use axum::{Router, middleware::from_fn_with_state};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::routes::{UpdateEndpoint, intercept_update};
use crate::config::{Config, DEFAULT_ROUTE, PluginOptions};
use crate::update::UpdateSettings;

pub const PLUGIN_NAME: &str = "i18n-flow";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn is_development(self) -> bool {
        self == Mode::Development
    }
}

/// A named transformation of the host router.
#[derive(Clone)]
pub struct Middleware {
    name: String,
    apply: Arc<dyn Fn(Router) -> Router + Send + Sync>,
}

impl Middleware {
    pub fn new<F>(name: impl Into<String>, apply: F) -> Self
    where
        F: Fn(Router) -> Router + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            apply: Arc::new(apply),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, router: Router) -> Router {
        (self.apply)(router)
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware").field("name", &self.name).finish()
    }
}

/// Dev-server configuration fragment.
#[derive(Debug, Clone, Default)]
pub struct DevServerConfig {
    /// Middlewares in execution order: the first entry sees a request first.
    pub middlewares: Vec<Middleware>,
}

impl DevServerConfig {
    pub fn with_middleware(mut self, middleware: Middleware) -> Self {
        self.middlewares.push(middleware);
        self
    }

    pub fn middleware_names(&self) -> Vec<&str> {
        self.middlewares.iter().map(Middleware::name).collect()
    }

    /// Wrap `app` so that the first middleware is the outermost layer.
    pub fn into_router(self, app: Router) -> Router {
        self.middlewares
            .iter()
            .rev()
            .fold(app, |app, middleware| middleware.apply(app))
    }
}

/// Default merge: middlewares from `extra` are placed ahead of the ones
/// already in `base`.
pub fn merge_dev_config(base: DevServerConfig, extra: DevServerConfig) -> DevServerConfig {
    let mut middlewares = extra.middlewares;
    middlewares.extend(base.middlewares);
    DevServerConfig { middlewares }
}

#[derive(Debug, Clone)]
pub struct I18nFlowPlugin {
    options: PluginOptions,
    mode: Mode,
    route: String,
    settings: UpdateSettings,
}

impl I18nFlowPlugin {
    pub fn new(options: PluginOptions, mode: Mode, settings: UpdateSettings) -> Self {
        Self {
            options,
            mode,
            route: DEFAULT_ROUTE.to_string(),
            settings,
        }
    }

    pub fn from_config(config: &Config, root: impl Into<PathBuf>, mode: Mode) -> Self {
        Self::new(
            config.options.clone(),
            mode,
            UpdateSettings::from_config(root, config),
        )
        .with_route(config.route.clone())
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn settings(&self) -> &UpdateSettings {
        &self.settings
    }

    /// Config hook. Outside development the user's config comes back
    /// untouched; otherwise the update middleware is merged in with `merge`.
    pub fn modify_config<F>(&self, user: DevServerConfig, merge: F) -> DevServerConfig
    where
        F: FnOnce(DevServerConfig, DevServerConfig) -> DevServerConfig,
    {
        if !self.mode.is_development() {
            debug!(mode = ?self.mode, "update route disabled");
            return user;
        }

        let extra = DevServerConfig::default().with_middleware(self.update_middleware());
        merge(user, extra)
    }

    pub fn update_middleware(&self) -> Middleware {
        let endpoint = UpdateEndpoint::new(self.route.as_str(), self.settings.clone());
        Middleware::new(PLUGIN_NAME, move |router: Router| {
            router.layer(from_fn_with_state(endpoint.clone(), intercept_update))
        })
    }
}

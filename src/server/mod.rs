mod error;
mod plugin;
mod routes;
mod serve;

pub use error::{AppError, AppResult};
pub use plugin::{
    DevServerConfig, I18nFlowPlugin, Middleware, Mode, PLUGIN_NAME, merge_dev_config,
};
pub use routes::{UpdateEndpoint, intercept_update};
pub use serve::{ServeSettings, build_app, host_config, run_dev_server};

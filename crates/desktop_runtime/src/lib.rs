pub mod catalog;
pub mod clock;
pub mod components;
pub mod config;
pub mod desktop_icons;
mod effect_executor;
mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod search;
pub mod selection;
pub mod window_layout;
pub mod window_manager;

pub use catalog::{catalog, Catalog, Folder, Project};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ShellConfig, ShellFeatures};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use search::search_projects;
pub use window_manager::WindowRegistry;

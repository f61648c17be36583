mod director_client;
mod output_store;
mod route_probe;
mod script_renderer;

pub use director_client::DirectorClient;
pub use output_store::OutputStore;
pub use route_probe::RouteProbe;
pub use script_renderer::{ScriptContext, ScriptRenderer};

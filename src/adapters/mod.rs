pub mod director_http;
pub mod filesystem_output_store;
pub mod template;
pub mod udp_route_probe;

pub use director_http::{DirectorCredentials, HttpDirectorClient};
pub use filesystem_output_store::FilesystemOutputStore;
pub use template::MinijinjaScriptRenderer;
pub use udp_route_probe::UdpRouteProbe;

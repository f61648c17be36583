mod fake_director_client;
mod fixed_route_probe;
mod memory_output_store;

pub use fake_director_client::FakeDirectorClient;
pub use fixed_route_probe::FixedRouteProbe;
pub use memory_output_store::MemoryOutputStore;

use crate::ports::{OutputStore, RouteProbe, ScriptRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<O: OutputStore, R: ScriptRenderer, P: RouteProbe> {
    output: O,
    renderer: R,
    route_probe: P,
}

impl<O: OutputStore, R: ScriptRenderer, P: RouteProbe> AppContext<O, R, P> {
    /// Create a new application context.
    pub fn new(output: O, renderer: R, route_probe: P) -> Self {
        Self { output, renderer, route_probe }
    }

    /// Get a reference to the output store.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the installer script renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the machine IP probe.
    pub fn route_probe(&self) -> &P {
        &self.route_probe
    }
}

use std::net::SocketAddr;

/// Startup settings for [`App`](crate::App) and the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Generated class ids start above this value (and above any stored id).
    pub id_floor: u32,
    /// Write the example classes into an empty store at startup.
    pub seed: bool,
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,
}

impl AppConfig {
    pub const DEFAULT_ID_FLOOR: u32 = 1000;

    pub fn with_id_floor(mut self, id_floor: u32) -> Self {
        self.id_floor = id_floor;
        self
    }

    pub fn without_seed(mut self) -> Self {
        self.seed = false;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            id_floor: Self::DEFAULT_ID_FLOOR,
            seed: true,
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

use std::env;

/// Server configuration, read once from the environment at startup.
///
/// The Supabase connection settings are not duplicated here; the pricing
/// crate's `EdgeFunctionConfig::from_env` owns those and fails fast when
/// they are missing.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Directory holding the built front-end assets.
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr =
            env::var("FAIRFENCE_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let static_dir =
            env::var("FAIRFENCE_STATIC_DIR").unwrap_or_else(|_| "dist/public".to_string());

        Self {
            listen_addr,
            static_dir,
        }
    }
}

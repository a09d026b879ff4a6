//! Runtime configuration, read from flags or the environment.

use std::path::PathBuf;

use clap::Parser;

/// In-memory CRUD service for vehicle records
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "autos-service")]
#[command(about = "Serve an in-memory collection of autos over JSON/HTTP")]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// JSON file holding the seed collection
    #[arg(short, long, env = "AUTOS_DATA", default_value = "./autos.json")]
    pub data: PathBuf,
}

impl Config {
    /// `host:port`, ready for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

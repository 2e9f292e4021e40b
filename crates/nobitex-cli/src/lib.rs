/*
[INPUT]:  CLI modules
[OUTPUT]: Public surface shared by the binary and integration tests
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod cli;
pub mod config;

pub use cli::{Cli, Command, build_client, execute};
pub use config::CliConfig;

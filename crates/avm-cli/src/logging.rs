//! Logging setup

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging on stderr.
///
/// `RUST_LOG` overrides the default filter. Without it, only warnings are
/// shown; `-v` enables debug output for the avm crates and `-vv` traces
/// every executed instruction.
pub fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "warn,avm_vm=debug,avm_cli=debug",
        _ => "warn,avm_vm=trace,avm_cli=trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

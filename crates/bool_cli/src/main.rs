//! Entry point: one-shot expression mode when arguments are given,
//! otherwise the interactive REPL.

mod json_types;
mod repl;

use repl::Repl;
use tracing_subscriber::EnvFilter;

fn main() -> rustyline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        // one-shot mode: bool_cli "A + !A"
        Repl::new().evaluate(&args.join(" "));
        return Ok(());
    }

    Repl::new().run()
}

use std::io::{self,Write};

use anyhow::Context as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ore_dispatch::config::Config;
use ore_dispatch::coordinator::Coordinator;
use ore_dispatch::error::InputError;
use ore_dispatch::interface;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the referee
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(false)
        .without_time()
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let annotate = config.annotate_roles;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let (width, height) = interface::read_initial(&mut input).context("reading map size")?;
    info!(width, height, "match starting");

    let mut coordinator = Coordinator::new(config, width, height);

    // game loop
    loop {
        let snapshot = match interface::read_turn(&mut input, width, height) {
            Ok(snapshot) => snapshot,
            Err(InputError::EndOfInput) => break,
            Err(error) => return Err(error).context("reading turn"),
        };

        let commands = coordinator.act(&snapshot);

        let stdout = io::stdout();
        let mut output = stdout.lock();
        for (agent, command) in coordinator.agents.iter().zip(commands.iter()) {
            let role = if annotate { Some(&agent.role) } else { None };
            writeln!(output, "{}", interface::format_command(command, role))?;
        }
        output.flush()?;
    }

    info!(turns = coordinator.turn, "match over");
    Ok(())
}

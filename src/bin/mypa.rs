// The mypa CLI.
// Interprets a proof script and prints the resulting proof state.

use std::io::Read;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use mypa::engine::EngineConfig;
use mypa::interfaces::ProofState;
use mypa::interpreter::{Interpreter, InterpreterConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(
    name = "mypa",
    about = "An interactive tactic engine for linear logic",
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a proof script and print the goals that remain
    Check {
        /// The script to check
        #[clap(
            value_name = "FILE",
            help = "The proof script to check. If \"-\" is provided, it reads from stdin."
        )]
        file: String,

        /// Require exponential hypotheses wherever resources would be dropped
        #[clap(long, help = "Enforce resource discipline in trivial, bang and init.")]
        strict: bool,

        /// Only report the goals of one theorem
        #[clap(long, value_name = "NAME", help = "Only report goals for this theorem.")]
        theorem: Option<String>,

        /// Pretty-print the JSON
        #[clap(long, help = "Pretty-print the JSON output.")]
        pretty: bool,

        /// Print the goals for a human instead of as JSON
        #[clap(long, conflicts_with = "pretty", help = "Print goals as text instead of JSON.")]
        text: bool,
    },
}

fn read_script(file: &str) -> std::io::Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(file)
    }
}

fn main() {
    // Use RUST_LOG env var to control log levels, e.g.:
    //   RUST_LOG=mypa::engine=trace mypa check proof.ll
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).without_time().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    match args.command {
        Command::Check {
            file,
            strict,
            theorem,
            pretty,
            text,
        } => {
            let script = match read_script(&file) {
                Ok(script) => script,
                Err(e) => {
                    eprintln!("could not read {}: {}", file, e);
                    std::process::exit(1);
                }
            };

            let config = InterpreterConfig {
                engine: EngineConfig { strict },
            };
            let interpreter = Interpreter::new(config);
            let state = ProofState {
                goals: interpreter
                    .run(&script)
                    .into_iter()
                    .filter(|result| theorem.as_ref().map_or(true, |name| &result.name == name))
                    .flat_map(|result| result.goals)
                    .collect(),
            };

            if text {
                if state.goals.is_empty() {
                    println!("no goals");
                }
                for goal in &state.goals {
                    println!("{}", goal);
                }
                return;
            }

            let json = if pretty {
                state.to_json_pretty()
            } else {
                state.to_json()
            };
            match json {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("could not serialize the proof state: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

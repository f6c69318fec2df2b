use atty::Stream;
use clap::Parser;
use ntm::explorer::{Explorer, Limits};
use ntm::loader::MachineLoader;
use ntm::programs::MachineManager;
use ntm::reporter::TextReporter;
use ntm::types::{
    Machine, NtmError, DEFAULT_MAX_DEPTH, DEFAULT_MAX_STEPS, DEFAULT_MAX_TRANSITIONS,
};
use std::io::Read;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine description file to explore, or '-' to read it from stdin
    #[clap(short, long, conflicts_with = "demo")]
    machine: Option<String>,

    /// Run an embedded demo machine by name
    #[clap(long)]
    demo: Option<String>,

    /// List the embedded demo machines
    #[clap(long)]
    list: bool,

    /// Override the input string carried by the description
    #[clap(short, long)]
    input: Option<String>,

    /// Maximum number of configurations examined
    #[clap(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Maximum depth of the configuration tree
    #[clap(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum number of transitions simulated
    #[clap(long, default_value_t = DEFAULT_MAX_TRANSITIONS)]
    max_transitions: usize,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for index in 0..MachineManager::count() {
            match MachineManager::info(index) {
                Ok(info) => println!(
                    "{} (states: {}, transitions: {}, input: {})",
                    info.name, info.state_count, info.transition_count, info.input
                ),
                Err(e) => eprintln!("{}", e),
            }
        }
        return;
    }

    let mut machine = match load_machine(&cli) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if let Some(input) = cli.input {
        machine.input = input;
    }

    let limits = Limits {
        max_steps: cli.max_steps,
        max_depth: cli.max_depth,
        max_transitions: cli.max_transitions,
    };

    let mut reporter = TextReporter::new(std::io::stdout());
    Explorer::new(&machine, limits).run(&mut reporter);
}

fn load_machine(cli: &Cli) -> Result<Machine, NtmError> {
    if let Some(name) = &cli.demo {
        return MachineManager::by_name(name);
    }

    match cli.machine.as_deref() {
        Some("-") => {
            if atty::is(Stream::Stdin) {
                return Err(NtmError::FileError(
                    "Refusing to read a description from an interactive terminal".to_string(),
                ));
            }

            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| NtmError::FileError(format!("Failed to read stdin: {}", e)))?;

            MachineLoader::load_machine_from_string(&buffer)
        }
        Some(path) => MachineLoader::load_machine(Path::new(path)),
        None => Err(NtmError::FileError(
            "No machine given: use --machine or --demo".to_string(),
        )),
    }
}

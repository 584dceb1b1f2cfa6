use tilt_clock::SystemClock;
use tilt_gesture::PagerMode;
use tilt_runner::{DemoConfig, RunnerError, TiltDemo};

fn print_help() {
    eprintln!(
        r#"Tilt Demo - drive a pager by tilting a (simulated) device

USAGE:
    tilt-demo [OPTIONS]

OPTIONS:
    --config <PATH>         Load demo configuration from JSON file
    --mode <MODE>           Pager layout: horizontal | vertical
    --duration-ms <MS>      How long the simulated feed runs
    --seed <N>              Seed the simulated feed
    --help                  Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Log level filter (default: info)

EXAMPLES:
    # Carousel demo with defaults
    tilt-demo

    # Vertical pager, reproducible
    tilt-demo --mode vertical --seed 7

    # Run with config file
    tilt-demo --config demo.json
"#
    );
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: {} requires a value", flag);
            std::process::exit(1);
        }
    }
}

fn parse_number(flag: &str, value: &str) -> Result<u64, RunnerError> {
    value
        .parse()
        .map_err(|_| RunnerError::InvalidArgument(format!("{} expects a number, got {}", flag, value)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut mode: Option<PagerMode> = None;
    let mut duration_ms: Option<u64> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                config_path = Some(next_value(&args, &mut i, "--config").to_string());
            }
            "--mode" | "-m" => {
                let value = next_value(&args, &mut i, "--mode");
                mode = Some(value.parse::<PagerMode>()?);
            }
            "--duration-ms" => {
                let value = next_value(&args, &mut i, "--duration-ms");
                duration_ms = Some(parse_number("--duration-ms", value)?);
            }
            "--seed" => {
                let value = next_value(&args, &mut i, "--seed");
                seed = Some(parse_number("--seed", value)?);
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            DemoConfig::from_file(&path)?
        }
        None => DemoConfig::default(),
    };

    // Command line wins over the file
    if let Some(mode) = mode {
        config.mode = mode;
    }
    if let Some(duration_ms) = duration_ms {
        config.duration_ms = duration_ms;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let demo = TiltDemo::new(config)?;
    let summary = demo.run(SystemClock::new()).await?;

    println!("{}", summary);
    Ok(())
}

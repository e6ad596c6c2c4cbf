use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use netlist::generator::{render_networks, OutputFormat};
use netlist::settings::{update_settings_from_file, ListSettings, Settings};
use netlist::utils::file_get;
use netlist::{explode_scan, preprocess_networks, NetlistError, SortField};

/// Show the wireless networks from a scan dump as a sorted list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scan dump (JSON or YAML); `-` reads standard input
    #[arg(value_name = "INPUT")]
    input: String,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Field to sort by: ssid, bssid, rssi or channel
    #[arg(short, long, value_name = "FIELD")]
    sort: Option<SortField>,

    /// Sort in descending order
    #[arg(short, long, conflicts_with = "ascending")]
    descending: bool,

    /// Sort in ascending order, even if the configuration says descending
    #[arg(short, long)]
    ascending: bool,

    /// Leave out networks that do not broadcast an SSID
    #[arg(long, conflicts_with = "show_hidden")]
    hide_hidden: bool,

    /// List hidden networks, even if the configuration hides them
    #[arg(long)]
    show_hidden: bool,

    /// Output format: table or json
    #[arg(short, long, value_name = "FORMAT", default_value = "table")]
    format: OutputFormat,
}

/// Command line flags take precedence over the settings file
fn apply_overrides(mut settings: ListSettings, args: &Args) -> ListSettings {
    if args.sort.is_some() {
        settings.sort_field = args.sort;
    }
    if args.descending {
        settings.descending = true;
    } else if args.ascending {
        settings.descending = false;
    }
    if args.hide_hidden {
        settings.hide_hidden = true;
    } else if args.show_hidden {
        settings.hide_hidden = false;
    }
    settings
}

fn run(args: Args) -> Result<String, NetlistError> {
    if let Some(path) = &args.config {
        update_settings_from_file(path)?;
    }

    let list_settings = apply_overrides(Settings::current().list.clone(), &args);

    let content = file_get(&args.input)?;
    let mut nodes = Vec::new();
    if explode_scan(&content, &mut nodes)? == 0 {
        warn!("Scan in {} lists no networks", args.input);
    }
    info!("Loaded {} network(s) from {}", nodes.len(), args.input);

    preprocess_networks(&mut nodes, &list_settings);

    info!("Rendering {} network(s) as {}", nodes.len(), args.format);
    render_networks(&nodes, args.format)
}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

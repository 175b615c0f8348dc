use vttcue::VttError;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser as ClapParser};
use log::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    if let Err(err) = run(cli) {
        error!("An error occurred: {}", err);
        for cause in err.chain().skip(1) {
            error!("    {}", cause);
        }
        std::process::exit(1);
    }
}

#[derive(ClapParser, Debug)]
#[command(about = "Parse WebVTT transcripts and query their cues")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to read from. If not supplied, the transcript will be read from standard input.",
        default_value = "-"
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. If not supplied, the output will be written to standard output.",
        default_value = "-"
    )]
    output: String,
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        help = "Print the text of the cue active at the given playback time."
    )]
    at: Option<f64>,
    #[arg(
        short,
        long,
        conflicts_with = "at",
        help = "Print the full transcript text instead of WebVTT."
    )]
    text: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity. May be repeated."
    )]
    verbose: u8,
}

fn setup_logger(level: u8) {
    let log_level = match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(log_level);
    builder.format_timestamp_millis();
    builder.init();
}

fn run(cli: Cli) -> Result<()> {
    debug!("Args: {:?}", cli);

    let data = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&cli.input)
            .context(format!("Failed to open input file: '{}'", cli.input))?
    };

    let cues = vttcue::parse(&data);
    if cues.is_empty() {
        return Err(VttError::NoCues(cli.input).into());
    }
    info!("Parsed {} cues from '{}'", cues.len(), cli.input);

    let output = render(&cli, &cues)?;
    write_output(&cli.output, &output)
}

fn render(cli: &Cli, cues: &[vttcue::Cue]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(time) = cli.at {
        let cue = vttcue::current_cue(cues, time).ok_or(VttError::NoActiveCue(time))?;
        writeln!(buf, "{}", cue.text())?;
    } else if cli.text {
        writeln!(buf, "{}", vttcue::all_text(cues))?;
    } else {
        vttcue::serialise(cues, &mut buf)?;
    }
    Ok(buf)
}

/// Write `output` to `path`. The destination is only touched once the output is complete.
fn write_output(path: &str, output: &[u8]) -> Result<()> {
    if path == "-" {
        let mut stdout = io::stdout();
        stdout.write_all(output).context("Failed to write to stdout")?;
        stdout.flush().context("Failed to write to stdout")?;
    } else {
        std::fs::write(path, output)
            .context(format!("Failed to write output file: '{}'", path))?;
    }
    Ok(())
}

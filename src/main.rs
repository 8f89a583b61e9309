use clap::{App, Arg, SubCommand};
#[macro_use]
extern crate log;
use hirsch::cost::CostModel;
use std::io::{BufWriter, Write};

fn io_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .help("Debug mode"),
        Arg::with_name("input")
            .value_name("INPUT")
            .required(true)
            .index(1)
            .help("Input file: base string, expansion indices, second base string, indices."),
        Arg::with_name("output")
            .value_name("OUTPUT")
            .required(true)
            .index(2)
            .help("Output file: cost, aligned sequences, elapsed ms, memory delta (KB)."),
    ]
}

fn subcommand_full() -> App<'static, 'static> {
    SubCommand::with_name("full")
        .version("0.1")
        .about("Full DP table alignment. Exact, O(mn) memory.")
        .args(&io_args())
}

fn subcommand_linear() -> App<'static, 'static> {
    SubCommand::with_name("linear")
        .version("0.1")
        .about("Divide-and-conquer alignment. Same cost, O(m+n) memory.")
        .args(&io_args())
}

fn run(sub_m: &clap::ArgMatches, linear: bool) -> std::io::Result<()> {
    let input = sub_m.value_of("input").unwrap();
    let output = sub_m.value_of("output").unwrap();
    let (xs, ys) = hirsch::input::read_input(input)?;
    debug!("expanded lengths:{},{}", xs.len(), ys.len());
    let model = CostModel::default();
    let memory_before = resident_kb().unwrap_or(0);
    let start = std::time::Instant::now();
    let aln = if linear {
        hirsch::align_linear(&xs, &ys, &model)
    } else {
        hirsch::align_full(&xs, &ys, &model)
    };
    let aln = aln.map_err(|why| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, why.to_string())
    })?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000f64;
    let memory_after = resident_kb().unwrap_or(memory_before);
    debug!("cost:{}, {:.2}ms", aln.cost, elapsed_ms);
    trace!("alignment\n{}", aln);
    let mut wtr = std::fs::File::create(output).map(BufWriter::new)?;
    writeln!(wtr, "{}", aln.cost)?;
    writeln!(wtr, "{}", String::from_utf8_lossy(&aln.xs))?;
    writeln!(wtr, "{}", String::from_utf8_lossy(&aln.ys))?;
    writeln!(wtr, "{:.2}", elapsed_ms)?;
    writeln!(wtr, "{}", memory_after.saturating_sub(memory_before))?;
    Ok(())
}

// Resident set size in KB from procfs. Best effort; other platforms get 0.
fn resident_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}

fn main() -> std::io::Result<()> {
    let matches = App::new("hirsch")
        .version("0.1")
        .about("Global alignment of two expanded DNA strings: [INPUT]->[OUTPUT]")
        .setting(clap::AppSettings::ArgRequiredElseHelp)
        .subcommand(subcommand_full())
        .subcommand(subcommand_linear())
        .get_matches();
    if let Some(sub_m) = matches.subcommand().1 {
        let level = match sub_m.occurrences_of("verbose") {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
    debug!("Start");
    match matches.subcommand() {
        ("full", Some(sub_m)) => run(sub_m, false),
        ("linear", Some(sub_m)) => run(sub_m, true),
        _ => unreachable!(),
    }
}

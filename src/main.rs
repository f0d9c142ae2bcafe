use tacit::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut options = cli::Options::default();
    let mut plain = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => options.json = true,
            "--lockstep-reset" => options.decode.lockstep_reset = true,
            "-h" | "--help" => return print_usage(),
            _ if arg.starts_with('-') => {
                eprintln!("unknown flag `{arg}`");
                std::process::exit(2);
            }
            _ => plain.push(arg),
        }
    }

    let result = match plain.split_first() {
        None => {
            cli::interactive(options);
            Ok(())
        }
        Some((cmd, rest)) => match cmd.as_str() {
            // spaces are not encodable, so argv words just concatenate
            "encode" => cli::run_encode(rest.concat().as_str(), options),
            "decode" => cli::run_decode(rest.join(" ").as_str(), options),
            other => {
                eprintln!("unknown command `{other}`");
                print_usage();
                std::process::exit(2);
            }
        },
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("usage: tacit [--json] [--lockstep-reset] [encode <message> | decode <moves>]");
    println!();
    println!("  encode   hide an a-z/0-9 message in a chess move sequence");
    println!("  decode   recover the message from a move sequence");
    println!();
    println!("with no command, an interactive prompt is started");
}

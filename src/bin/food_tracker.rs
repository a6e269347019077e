use food_tracker::{
    cli::{output, run_cli, CommandError, USAGE},
    init,
};

fn main() {
    init();

    if let Err(err) = run_cli(std::env::args().skip(1)) {
        if matches!(err, CommandError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        output::error(format!("Error: {err}"));
        std::process::exit(1);
    }
}

use reddit_top::{cli::Invocation, *};
use std::{io, process::ExitCode};
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    let args = match cli::parse_from(std::env::args_os()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Usage) => {
            let program = std::env::args().next().unwrap_or_else(|| "reddit-top".to_string());
            eprintln!("{}", cli::usage(&program));
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    match fetch(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn fetch(args: &cli::Args) -> Result<usize> {
    let query = args.query()?;
    tracing::info!(
        client_id = %args.client_id,
        user_agent = %args.user_agent,
        subreddits = args.subreddits.len(),
        "starting"
    );

    let listing = OAuthListing::connect(&args.credentials())?;
    let progress = stream::progress_bar(query.limit, query.community.as_str())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&listing, &query, &mut out, &progress)
}

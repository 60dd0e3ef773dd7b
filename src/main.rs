#![warn(clippy::all)]

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sparse_life=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = sparse_life::Config::from_env();
    tracing::debug!(?config, "starting");

    // initial cells may be given as `x y` pairs on the command line
    let initial = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let game = sparse_life::Game::from_text_or_blank(&initial);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    sparse_life::App::new(stdin.lock(), stdout.lock(), config)
        .with_game(game)
        .run()
}

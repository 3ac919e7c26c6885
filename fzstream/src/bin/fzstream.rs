#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let config = fzstream::load_config()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    fzstream::run(&config, ".", stdin.lock(), stdout.lock()).await?;
    Ok(())
}

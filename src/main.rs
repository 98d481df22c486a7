#[tokio::main]
async fn main() {
    // stdout belongs to the questionnaire; logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = kisilik_lib::run().await {
        eprintln!("Error running application: {}", e);
        std::process::exit(1);
    }
}

use std::env;

#[tokio::main]
async fn main() {
    env_logger::init();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) == Some("serve") {
        let port = match raw_args.get(2) {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("invalid port '{raw}', using 8080");
                8080
            }),
            None => 8080,
        };
        if let Err(e) = growth::api::run_http_server(port).await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
        return;
    }

    match growth::api::run_cli(raw_args) {
        Ok(output) => print!("{output}"),
        Err(growth::api::ApiError::Usage(err)) => err.exit(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match testforge::cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(testforge::errors::get_exit_code(&e))
        }
    }
}

use std::io::Read;

use anyhow::{bail, Result};

use smart_desk::config::Config;
use smart_desk::models::OperationKind;
use smart_desk::render::render_session;
use smart_desk::services::GeminiTextService;
use smart_desk::utils::logging;
use smart_desk::workflow::{ReviewFlow, SessionState};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env();
    logging::log_startup(&config.model_name, config.has_api_key());

    let mut args = std::env::args().skip(1);
    let Some(op_name) = args.next() else {
        bail!(
            "usage: smart_desk <operation> [text...]\noperations: {}\ntext is read from stdin when omitted",
            OperationKind::cli_names()
        );
    };
    let Some(op) = OperationKind::from_cli_name(&op_name) else {
        bail!(
            "unknown operation '{}', expected one of: {}",
            op_name,
            OperationKind::cli_names()
        );
    };

    let rest: Vec<String> = args.collect();
    let text = if rest.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        rest.join(" ")
    };

    let flow = ReviewFlow::new(GeminiTextService::new(&config));
    let mut session = SessionState::new();
    flow.run(&mut session, &text, op).await;

    print!("{}", render_session(&session));
    Ok(())
}

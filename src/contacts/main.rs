use std::any::Any;
use std::panic;
use std::process;
use tracing::{error, warn, Level};

mod cli;

fn main() {
    init_tracing();

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n{}", cli::INTERRUPTED_MESSAGE);
        process::exit(0);
    }) {
        warn!("could not install interrupt handler: {}", e);
    }

    // Panics are reported below like any other fault.
    panic::set_hook(Box::new(|info| error!("{}", info)));

    match panic::catch_unwind(cli::run) {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => fail(&e.to_string()),
        Err(payload) => fail(&panic_message(payload.as_ref())),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();
}

fn fail(detail: &str) -> ! {
    eprintln!("An unexpected error occurred: {}", detail);
    process::exit(1);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

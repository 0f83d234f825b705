#![allow(clippy::doc_markdown)]

mod cli;
mod core;
mod prelude;
mod quantity;
mod reporter;
mod source;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, current, plan},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Plan(args) => plan(&args)?,
        Command::Current(args) => current(&args)?,
    }

    info!("done!");
    Ok(())
}

use clap::{App, Arg};
use std::path::PathBuf;
use userstore::server::{self, ServerConfig};

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let matches = App::new("userstore")
        .version("0.1.0")
        .about("File-backed user record store with an HTTP CRUD API")
        .arg(
            Arg::with_name("port")
                .long("port")
                .takes_value(true)
                .default_value("1323")
                .help("Port to serve HTTP on"),
        )
        .arg(
            Arg::with_name("data_file")
                .long("data-file")
                .takes_value(true)
                .default_value("users.json")
                .help("Path of the JSON snapshot file"),
        )
        .get_matches();
    let _ = setup_logger();
    let port = matches.value_of("port").unwrap().parse::<u16>().unwrap();
    let data_file = PathBuf::from(matches.value_of("data_file").unwrap());
    let config = ServerConfig { port, data_file };
    server::rocket(&config).launch().await?;
    Ok(())
}

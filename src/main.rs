// SPDX-License-Identifier: MPL-2.0
use morocco_docs::app::preferences::FileStore;
use morocco_docs::app::{page, paths, Flags, Session};
use morocco_docs::config;
use morocco_docs::dom::{Document, MemoryDocument};
use morocco_docs::error::{Error, Result};
use morocco_docs::i18n::Locale;
use morocco_docs::request::{DocumentRequest, DocumentType};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: morocco_docs [--lang CODE] [--data-dir DIR] [--config-dir DIR] [COMMAND]

Commands:
  status          Show the active language (default)
  switch CODE     Switch to en, fr, ar, or ber and remember it
  track REF       Show the tracking timeline for a reference number
  submit TYPE     Submit a request for birth, marriage, death, or family
";

enum Command {
    Status,
    Switch(Locale),
    Track(String),
    Submit(DocumentType),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "command failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").map_err(cli_error)?,
        data_dir: args.opt_value_from_str("--data-dir").map_err(cli_error)?,
        config_dir: args.opt_value_from_str("--config-dir").map_err(cli_error)?,
    };
    let command = parse_command(&mut args)?;
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring extra arguments");
    }
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let (config, config_warning) = config::load();
    if let Some(key) = config_warning {
        tracing::warn!(warning = %key, "using default configuration");
    }
    let (store, _store_warning) = FileStore::open();

    let mut session = Session::new(&config, store, page::skeleton(), flags.lang.as_deref())?;

    match command {
        Command::Status => {}
        Command::Switch(locale) => session.switch_locale(locale),
        Command::Track(reference) => {
            // An empty reference renders its error into the panel.
            let _ = session.track(&reference);
            print_region(session.document(), "trackingResult");
        }
        Command::Submit(document_type) => {
            let receipt = session.submit(DocumentRequest::new(document_type, session.active_locale()))?;
            println!("{}", receipt.reference);
            print_region(session.document(), "requestMessages");
        }
    }

    print_status(session.document(), session.active_locale());
    Ok(())
}

fn parse_command(args: &mut pico_args::Arguments) -> Result<Command> {
    let command = match args.subcommand().map_err(cli_error)?.as_deref() {
        None | Some("status") => Command::Status,
        Some("switch") => Command::Switch(args.free_from_str().map_err(cli_error)?),
        Some("track") => Command::Track(args.opt_free_from_str().map_err(cli_error)?.unwrap_or_default()),
        Some("submit") => Command::Submit(args.free_from_str().map_err(cli_error)?),
        Some(other) => return Err(Error::Config(format!("unknown command '{other}'\n\n{USAGE}"))),
    };
    Ok(command)
}

fn cli_error(err: pico_args::Error) -> Error {
    Error::Config(err.to_string())
}

fn print_region(document: &MemoryDocument, id: &str) {
    if let Some(node) = document.element_by_id(id) {
        println!("{}", document.inner_html(node));
    }
}

fn print_status(document: &MemoryDocument, locale: Locale) {
    let root = document.root();
    println!(
        "language: {} ({}), dir={}, title=\"{}\"",
        locale.label(),
        locale.indicator(),
        document.attribute(root, "dir").unwrap_or("ltr"),
        document.title(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parse_command_leaves_extra_arguments_for_run() {
        let mut args = args(&["track", "DOC-2024-12345", "extra"]);
        let command = parse_command(&mut args).unwrap();
        assert!(matches!(command, Command::Track(ref r) if r == "DOC-2024-12345"));
        assert_eq!(args.finish(), vec![OsString::from("extra")]);
    }

    #[test]
    fn parse_command_reads_each_subcommand() {
        assert!(matches!(parse_command(&mut args(&[])), Ok(Command::Status)));
        assert!(matches!(
            parse_command(&mut args(&["switch", "ar"])),
            Ok(Command::Switch(Locale::Ar))
        ));
        assert!(matches!(
            parse_command(&mut args(&["submit", "family"])),
            Ok(Command::Submit(DocumentType::Family))
        ));
        assert!(matches!(parse_command(&mut args(&["track"])), Ok(Command::Track(ref r)) if r.is_empty()));
        assert!(parse_command(&mut args(&["switch", "de"])).is_err());
        assert!(parse_command(&mut args(&["delete"])).is_err());
    }
}

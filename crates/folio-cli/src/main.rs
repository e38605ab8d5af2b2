use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use folio_cli::{App, FolioConfig};
use folio_client::ContactMessage;
use folio_profile::Language;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("folio")
        .version(folio_profile::VERSION)
        .about("Professional profile viewer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("show")
                .about("Load and print the profile in the stored language")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the view model as JSON"),
                ),
        )
        .subcommand(
            Command::new("language")
                .about("Switch and persist the display language")
                .arg(
                    Arg::new("code")
                        .required(true)
                        .value_parser(["es", "en"])
                        .help("Language code"),
                ),
        )
        .subcommand(Command::new("toggle-view").about("Switch between the visual and data views"))
        .subcommand(
            Command::new("contact")
                .about("Send a contact message")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("message").long("message").required(true)),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn arg<'a>(args: &'a ArgMatches, id: &str) -> anyhow::Result<&'a String> {
    args.get_one::<String>(id)
        .ok_or_else(|| anyhow::anyhow!("missing argument --{id}"))
}

async fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = FolioConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let app = App::from_config(&config)?;
    let mut out = io::stdout().lock();

    match matches.subcommand() {
        Some(("show", args)) => app.show(args.get_flag("json"), &mut out).await?,
        Some(("language", args)) => {
            let language: Language = arg(args, "code")?.parse()?;
            app.set_language(language, &mut out).await?;
        }
        Some(("toggle-view", _)) => app.toggle_view(&mut out)?,
        Some(("contact", args)) => {
            let message = ContactMessage::new(
                arg(args, "name")?.as_str(),
                arg(args, "email")?.as_str(),
                arg(args, "message")?.as_str(),
            );
            app.contact(&message, &mut out).await?;
        }
        Some((name, _)) => anyhow::bail!("unknown command {name:?}"),
        None => anyhow::bail!("no command given"),
    }

    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("json-logs"));

    if let Err(e) = run(&matches).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use owo_colors::OwoColorize;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::Message;
use crate::domain::models::ModelName;
use crate::domain::services::actions::help_text;
use crate::domain::services::render_links;
use crate::infrastructure::backends::perplexity::CompletionRequest;
use crate::infrastructure::backends::perplexity::Perplexity;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

/// Directory holding `debug.log`, overridable with `CAMPUS_CHAT_LOG_DIR`.
pub fn debug_log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("CAMPUS_CHAT_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("campus-chat");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn ask(ask_matches: &ArgMatches) -> Result<()> {
    let question = ask_matches
        .get_many::<String>("question")
        .map(|words| return words.cloned().collect::<Vec<String>>().join(" "))
        .unwrap_or_default();
    if question.trim().is_empty() {
        bail!("A question is required");
    }

    let backend = Perplexity::default();
    backend.health_check().await?;

    let model = ModelName::resolve(&Config::get(ConfigKey::Model)).unwrap_or_default();
    let history = vec![Message::user(&question)];

    if ask_matches.get_flag("debug") {
        let req = CompletionRequest::new(model, &history);
        eprintln!("{}", serde_json::to_string_pretty(&req)?);
    }

    let answer = backend.send(&history, model).await;
    println!("{}", render_links(&answer));

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd.about("Debug helpers for campus-chat")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running campus-chat with environment variable RUST_LOG=campus_chat")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        )
        .subcommand(
            Command::new("models").about("List all models accepted by the Perplexity API.")
        );

    return cmd;
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("CAMPUS_CHAT_MODEL")
        .num_args(1)
        .help(format!(
            "The initial Perplexity model to answer questions. [default: {}]",
            Config::default(ConfigKey::Model)
        ))
        .value_parser(PossibleValuesParser::new(ModelName::VARIANTS));
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start a new chat session. This is the default.")
        .arg(arg_model());
}

fn subcommand_ask() -> Command {
    return Command::new("ask")
        .about("Ask a single question and print the answer.")
        .arg(arg_model())
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Print the API request payload to stderr.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("question")
                .help("The question to ask.")
                .num_args(1..)
                .required(true),
        );
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.ends_with(':') {
                return format!("CHAT {line}").underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("campus-chat")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_ask())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(arg_model())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("CAMPUS_CHAT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiToken.to_string())
                .long(ConfigKey::ApiToken.to_string())
                .env("PPLX_API_KEY")
                .hide_env_values(true)
                .num_args(1)
                .help("Perplexity API key. Required.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("PPLX_API_URL")
                .num_args(1)
                .help(format!("Perplexity API URL. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .long(ConfigKey::Username.to_string())
                .env("CAMPUS_CHAT_USERNAME")
                .num_args(1)
                .help("Your user name displayed in all chat bubbles. [default: $USER]")
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = debug_log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                Some(("models", _)) => {
                    let models = BackendManager::get().list_models().await?;
                    println!("{}", models.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("ask", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            ask(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}

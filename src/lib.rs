//! Linkgen library crate
//!
//! This crate provides the core functionality for the `linkgen` CLI. It is
//! organized into small modules: `catalog` (platform, product, entity and
//! campaign option tables), `assemble` (link validation and assembly),
//! `session` (the form state a user builds up before generating), `clipboard`
//! (cross-platform clipboard helper), `error` and `logging`. The binary
//! `src/main.rs` calls `linkgen_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//! - `assemble::assemble_link`: pure request-to-link function.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod assemble;
pub mod catalog;
pub mod clipboard;
pub mod error;
pub mod logging;
pub mod session;

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::assemble::{CampaignFields, with_scheme};
use crate::catalog::{
    CAMPAIGN_CONTENTS, CAMPAIGN_MEDIUMS, CAMPAIGN_SOURCES, Entity, PlatformType, Product,
    products_for,
};
use crate::clipboard::copy_to_clipboard;
use crate::session::LinkSession;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a platform link
    Generate(GenerateArgs),
    /// List the products, entities and campaign options that can be selected
    Options {
        /// Only list the product catalog of this platform
        #[arg(long = "platform", value_enum)]
        platform: Option<PlatformType>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Platform type the link targets
    #[arg(short = 'p', long = "platform", value_enum, default_value_t = PlatformType::Signups)]
    platform: PlatformType,

    /// Product key (required)
    #[arg(long = "product", value_enum)]
    product: Option<Product>,

    /// Entity key (required)
    #[arg(short = 'e', long = "entity", value_enum)]
    entity: Option<Entity>,

    /// Campaign tag, must start with LK-
    #[arg(long = "campaign-tag", default_value = "")]
    campaign_tag: String,

    /// Campaign source
    #[arg(long = "campaign-source", value_parser = one_of(&CAMPAIGN_SOURCES))]
    campaign_source: Option<String>,

    /// Campaign medium
    #[arg(long = "campaign-medium", value_parser = one_of(&CAMPAIGN_MEDIUMS))]
    campaign_medium: Option<String>,

    /// Campaign term (free text)
    #[arg(long = "campaign-term", default_value = "")]
    campaign_term: String,

    /// Campaign content
    #[arg(long = "campaign-content", value_parser = one_of(&CAMPAIGN_CONTENTS))]
    campaign_content: Option<String>,

    /// Print the link with an https:// scheme
    #[arg(long = "https", action = ArgAction::SetTrue)]
    https: bool,

    /// Copy the generated link to clipboard
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    clipboard: bool,
}

fn one_of(values: &'static [&'static str]) -> PossibleValuesParser {
    PossibleValuesParser::new(values.iter().copied())
}

impl GenerateArgs {
    /// Load the parsed selections into a fresh session.
    fn into_session(self) -> LinkSession {
        let mut session = LinkSession::new();
        session.set_platform_type(self.platform);
        session.set_product(self.product);
        session.set_entity(self.entity);
        session.set_campaign(CampaignFields {
            tag: self.campaign_tag,
            source: self.campaign_source.unwrap_or_default(),
            medium: self.campaign_medium.unwrap_or_default(),
            term: self.campaign_term,
            content: self.campaign_content.unwrap_or_default(),
        });
        session
    }
}

/// Render the selection catalogs as printed by `linkgen options`.
pub fn describe_options(platform: Option<PlatformType>) -> String {
    let mut out = String::new();
    let platforms: Vec<PlatformType> = match platform {
        Some(p) => vec![p],
        None => PlatformType::ALL.to_vec(),
    };
    for p in platforms {
        out.push_str(&format!("Products ({}, {}):\n", p, p.host()));
        for (key, slug) in products_for(p) {
            out.push_str(&format!("  {:<6} {}\n", key, slug));
        }
    }
    out.push_str("Entities:\n");
    for e in Entity::ALL {
        out.push_str(&format!("  {:<6} {}\n", e.key(), e.display_name()));
    }
    for (title, values) in [
        ("Campaign sources", &CAMPAIGN_SOURCES[..]),
        ("Campaign mediums", &CAMPAIGN_MEDIUMS[..]),
        ("Campaign contents", &CAMPAIGN_CONTENTS[..]),
    ] {
        out.push_str(&format!("{}: {}\n", title, values.join(", ")));
    }
    out
}

/// Run the Linkgen CLI.
///
/// This function is the high-level entrypoint used by the `linkgen` binary. It
/// parses CLI arguments and dispatches to module functions. Validation errors
/// are printed to stderr and cause the process to exit with code 1; clipboard
/// failures only produce a warning.
///
/// Behavior summary:
/// - `generate`: validate the selections, print the link and optionally copy
///   it to the clipboard.
/// - `options`: print the catalogs the selections are drawn from.
///
/// Example:
///
/// ```no_run
/// linkgen_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => {
            let https = args.https;
            let clipboard = args.clipboard;
            let mut session = args.into_session();

            let link = session.generate().map(str::to_owned).unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });
            let render = |l: &str| if https { with_scheme(l) } else { l.to_owned() };

            println!("{}", render(&link));

            if clipboard {
                match session.copy_link(|l| copy_to_clipboard(&render(l))) {
                    Ok(msg) => eprintln!("{}", msg),
                    Err(e) => eprintln!("warning: failed to copy to clipboard: {}", e),
                }
            }
        }
        Commands::Options { platform } => {
            print!("{}", describe_options(platform));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkError;

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Generate(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_generate_minimal() {
        let args = generate_args(&["linkgen", "generate", "--product", "oGV", "--entity", "CC"]);
        let mut session = args.into_session();
        assert_eq!(session.generate().unwrap(), "signup.aiesec.lk/volunteer?ley=CC");
    }

    #[test]
    fn test_cli_generate_presignups_alias() {
        let args = generate_args(&[
            "linkgen",
            "generate",
            "--platform",
            "presignups",
            "--product",
            "oGTe",
            "-e",
            "CN",
        ]);
        let mut session = args.into_session();
        assert_eq!(session.generate().unwrap(), "apply.aiesec.lk/teacher?entity=CN");
    }

    #[test]
    fn test_cli_generate_with_campaign() {
        let args = generate_args(&[
            "linkgen",
            "generate",
            "--product",
            "oGTa",
            "--entity",
            "CC",
            "--campaign-tag",
            "LK-test",
            "--campaign-source",
            "Official Media",
            "--campaign-medium",
            "Email",
            "--campaign-term",
            "x",
            "--campaign-content",
            "General",
        ]);
        let mut session = args.into_session();
        assert_eq!(
            session.generate().unwrap(),
            "signup.aiesec.lk/talent?ley=CC&campaign_tag=LK-test\
             &campaign_source_id=Official%20Media&campaign_medium_id=Email\
             &campaign_term=x&campaign_content=General"
        );
    }

    #[test]
    fn test_cli_missing_product_reaches_assembler() {
        let args = generate_args(&["linkgen", "generate", "--entity", "CC"]);
        let mut session = args.into_session();
        assert_eq!(session.generate(), Err(LinkError::MissingRequiredField));
    }

    #[test]
    fn test_cli_rejects_unknown_keys_and_options() {
        for argv in [
            &["linkgen", "generate", "--product", "oGX"][..],
            &["linkgen", "generate", "--entity", "XX"][..],
            &["linkgen", "generate", "--campaign-source", "Radio"][..],
            &["linkgen", "generate", "--campaign-content", "Other"][..],
        ] {
            assert!(Cli::try_parse_from(argv).is_err(), "{:?}", argv);
        }
    }

    #[test]
    fn test_describe_options() {
        let all = describe_options(None);
        assert!(all.contains("Products (Signups, signup.aiesec.lk)"));
        assert!(all.contains("Products (Pre-Signups, apply.aiesec.lk)"));
        assert!(all.contains("CC     Colombo Central"));
        assert!(all.contains("Campaign contents: General, GT, GV"));

        let pre = describe_options(Some(PlatformType::PreSignups));
        assert!(!pre.contains("signup.aiesec.lk"));
        assert!(pre.contains("oGTe   teacher"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

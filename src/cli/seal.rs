//! Seal, open and demo commands

use clap::Args;

use crate::audit::AuditEntry;
use crate::crypto::{decrypt, encrypt, SecureString};
use crate::demo::{check_round_trip, open_demo, seal_demo};
use crate::error::{SealError, SealResult};
use crate::share::{build_link, extract_token};

use super::context::CliContext;
use super::password::read_password;

/// Arguments for `fragseal seal`
#[derive(Args, Debug)]
pub struct SealArgs {
    /// Text to seal (read from stdin when omitted)
    pub text: Option<String>,

    /// Read the password from this environment variable instead of prompting
    #[arg(long, value_name = "VAR")]
    pub password_env: Option<String>,

    /// Print a share link instead of the bare token
    #[arg(short, long)]
    pub link: bool,

    /// Base URL for the share link (defaults to the configured one)
    #[arg(long, value_name = "URL", requires = "link")]
    pub base: Option<String>,
}

/// Arguments for `fragseal open`
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// A token or a share link carrying one in its fragment
    pub input: String,

    /// Read the password from this environment variable instead of prompting
    #[arg(long, value_name = "VAR")]
    pub password_env: Option<String>,
}

/// Arguments for `fragseal demo`
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Read the password from this environment variable instead of prompting
    #[arg(long, value_name = "VAR")]
    pub password_env: Option<String>,
}

/// Handle `fragseal seal`
pub fn handle_seal_command(ctx: &CliContext, args: SealArgs) -> SealResult<()> {
    let text = match args.text {
        Some(text) => SecureString::new(text),
        None => read_stdin()?,
    };
    let password = read_password(args.password_env.as_deref(), true)?;

    let link_base = args.link.then(|| {
        args.base
            .unwrap_or_else(|| ctx.settings.link_base_url.clone())
    });

    let output = seal_text(ctx, &text, &password, link_base.as_deref())?;
    println!("{}", output);
    Ok(())
}

/// Seal `text`, returning the token or, given a base URL, a share link
pub fn seal_text(
    ctx: &CliContext,
    text: &str,
    password: &str,
    link_base: Option<&str>,
) -> SealResult<String> {
    let token = encrypt(text, password)?;
    ctx.record(AuditEntry::sealed(token.len()));

    match link_base {
        Some(base) => {
            let link = build_link(base, &token)?;
            ctx.record(AuditEntry::linked(token.len()));
            Ok(link)
        }
        None => Ok(token.into_string()),
    }
}

/// Handle `fragseal open`
pub fn handle_open_command(ctx: &CliContext, args: OpenArgs) -> SealResult<()> {
    let password = read_password(args.password_env.as_deref(), false)?;
    let plaintext = open_input(ctx, &args.input, &password)?;
    println!("{}", plaintext.as_str());
    Ok(())
}

/// Open a token or share link
pub fn open_input(ctx: &CliContext, input: &str, password: &str) -> SealResult<SecureString> {
    let token = extract_token(input)?;

    match decrypt(token.as_str(), password) {
        Ok(plaintext) => {
            ctx.record(AuditEntry::opened(token.len(), true));
            Ok(SecureString::from(plaintext))
        }
        Err(e) => {
            ctx.record(AuditEntry::opened(token.len(), false));
            Err(e)
        }
    }
}

/// Handle `fragseal demo`
pub fn handle_demo_command(ctx: &CliContext, args: DemoArgs) -> SealResult<()> {
    let password = read_password(args.password_env.as_deref(), true)?;

    let (record, token) = seal_demo(&password)?;
    ctx.record(AuditEntry::sealed(token.len()));
    let link = build_link(&ctx.settings.link_base_url, &token)?;
    ctx.record(AuditEntry::linked(token.len()));

    println!("Record:");
    println!("{}", serde_json::to_string_pretty(&record)?);
    println!();
    println!("Token:");
    println!("{}", token);
    println!();
    println!("Share link:");
    println!("{}", link);
    println!();

    let opened = open_demo(token.as_str(), &password);
    ctx.record(AuditEntry::opened(token.len(), opened.is_ok()));
    check_round_trip(&record, &opened?)?;
    println!("Round trip verified: opened record matches the original.");

    Ok(())
}

fn read_stdin() -> SealResult<SecureString> {
    let mut text = SecureString::read_from(std::io::stdin().lock())
        .map_err(|e| SealError::Io(format!("Failed to read stdin: {}", e)))?;
    text.trim_line_ending();
    Ok(text)
}

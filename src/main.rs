use anyhow::Context;
use clap::Parser;
use quality_logistix::config::cli::{Command, ContactArgs, LogFormat};
use quality_logistix::app::export_site;
use quality_logistix::core::forms::{ContactInput, FormInput, QuickQuoteForm, RelayForm, TrackInput};
use quality_logistix::domain::model::PackageType;
use quality_logistix::utils::{logger, validation::Validate};
use quality_logistix::{
    CliConfig, HttpRelay, MemoryLocation, Page, Site, SiteConfig, SiteError, SubmissionStatus,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = SiteConfig::load(cli.config.as_deref())?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match cli.command {
        Command::Routes { json } => print_routes(json)?,
        Command::Render { route } => {
            let site = open_site(config, &route)?;
            println!("{}", site.render());
        }
        Command::Export { out } => {
            let written = export_site(&config, &out)?;
            println!("✅ Exported {} pages to {}", written.len(), out.display());
        }
        Command::Contact(args) => {
            let site = open_site(config, "#/contact")?;
            let form = site.contact_form().context("contact form is not mounted")?;
            let input = contact_input(args)?;
            report(submit(form.as_ref(), input).await);
        }
        Command::Track(args) => {
            let site = open_site(config, "#/track")?;
            let form = site.track_form().context("track form is not mounted")?;
            let input = TrackInput {
                full_name: args.full_name,
                email: args.email,
                tracking_number: args.tracking_number,
            };
            report(submit(form.as_ref(), input).await);
        }
        Command::Quote(args) => {
            let site = open_site(config, "#/")?;
            let form = QuickQuoteForm {
                origin: args.origin,
                destination: args.destination,
                weight_kg: args.weight_kg,
            };
            println!("ℹ️ {}", site.quick_quote(&form)?);
        }
    }

    Ok(())
}

fn open_site(config: SiteConfig, fragment: &str) -> anyhow::Result<Site<MemoryLocation, HttpRelay>> {
    let site = Site::new(
        config,
        Arc::new(MemoryLocation::new(fragment)),
        Arc::new(HttpRelay::new()),
    )?;
    if site.current_page().is_none() {
        tracing::warn!("No page matches route {}", site.current_route());
    }
    Ok(site)
}

fn print_routes(json: bool) -> anyhow::Result<()> {
    if json {
        let routes: Vec<serde_json::Value> = Page::ALL
            .iter()
            .map(|page| serde_json::json!({ "route": page.route_path(), "page": page }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        for page in Page::ALL {
            println!("#{:<10} {}", page.route_path(), page.nav_label());
        }
    }
    Ok(())
}

fn contact_input(args: ContactArgs) -> quality_logistix::Result<ContactInput> {
    let package_type = PackageType::from_label(&args.package_type).ok_or_else(|| {
        SiteError::InvalidFieldError {
            field: "packageType".to_string(),
            reason: format!("'{}' is not a listed package type", args.package_type),
        }
    });
    Ok(ContactInput {
        full_name: args.full_name,
        email: args.email,
        origin: args.origin,
        destination: args.destination,
        package_type: package_type?,
        message: args.message,
    })
}

async fn submit<I: FormInput>(
    form: &RelayForm<HttpRelay, I>,
    input: I,
) -> quality_logistix::Result<(SubmissionStatus, Option<&'static str>)> {
    form.set_input(input);
    let status = form.submit().await?;
    Ok((status, I::status_message(status)))
}

fn report(result: quality_logistix::Result<(SubmissionStatus, Option<&'static str>)>) {
    match result {
        Ok((status, message)) => {
            let message = message.unwrap_or_default();
            if status == SubmissionStatus::Success {
                println!("✅ {}", message);
            } else {
                eprintln!("❌ {}", message);
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Form rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

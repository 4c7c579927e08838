use crate::conf::{ConfigError, ValidationReport, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool, json: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(validated) => {
            let cfg = &validated.config;
            if json {
                println!("{}", validated.report.render_json()?);
                return Ok(());
            }

            println!("✔ Config loaded successfully");
            println!(
                "✔ logging: tag={} zone={} format={}",
                cfg.logging.tag, cfg.logging.zone, cfg.logging.format
            );
            println!("✔ {} host aliases", cfg.aliases.len());
            for alias in cfg.aliases.iter() {
                println!("  - {} => {}", alias.alias, alias.pattern);
            }

            if validated.report.has_violations() {
                println!();
                print_report(&validated.report, plain)?;
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain, json)?;
            std::process::exit(1);
        }
    }
}

fn print_report(report: &ValidationReport, plain: bool) -> anyhow::Result<()> {
    let mut out = String::new();
    if plain {
        report.render_plain(&mut out)?;
    } else {
        report.render_pretty(&mut out)?;
    }
    print!("{out}");
    Ok(())
}

fn print_config_error(err: ConfigError, plain: bool, json: bool) -> anyhow::Result<()> {
    match &err {
        ConfigError::Validation { report } if json => println!("{}", report.render_json()?),
        ConfigError::Validation { report } => {
            let mut out = String::new();
            if plain {
                report.render_plain(&mut out)?;
            } else {
                report.render_pretty(&mut out)?;
            }
            eprint!("{out}");
        }
        _ => eprintln!("{}", err),
    }

    if let Some(hint) = config_error_hint(&err) {
        eprintln!();
        eprintln!("{}", hint);
    }
    Ok(())
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Pass the path of a quill.hcl file, or of a directory containing one.\n\
             \n\
             Create a starter configuration with:\n\
             \n\
             quill config init",
        ),

        ConfigError::Parse { .. } => Some(
            "The configuration file accepts two top-level attributes.\n\
             \n\
             Example:\n\
             \n\
             logging = {\n\
             \x20 tag  = \"wsd\"\n\
             \x20 zone = \"utc\"\n\
             }\n\
             \n\
             aliases = [\"office.example.com\", \"docs[0-9]+\\\\.example\\\\.com\"]",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}

use crate::alias::{AliasForm, classify_alias, parse_alias};

/// One report line per alias: `<alias>  <form>  <pattern>`.
pub fn describe_alias(alias: &str) -> String {
    let form = match classify_alias(alias) {
        AliasForm::Host(_) => "host",
        AliasForm::Pattern(_) => "regex",
    };

    match parse_alias(alias) {
        pattern if pattern.is_empty() => format!("{alias}  {form}  rejected"),
        pattern => format!("{alias}  {form}  {pattern}"),
    }
}

pub fn run(aliases: &[String]) -> anyhow::Result<()> {
    for alias in aliases {
        println!("{}", describe_alias(alias));
    }
    Ok(())
}

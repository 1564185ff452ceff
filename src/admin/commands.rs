/// Operator commands understood by the chat glue. Parsing is pure; the
/// host layer owns permission checks and feedback messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeaponCommand {
    List,
    Reload,
    Give { id: String, target: Option<String> },
    Unknown(String),
}

const COMMAND_LABELS: [&str; 2] = ["cweapons", "cw"];
const SUBCOMMANDS: [&str; 3] = ["give", "list", "reload"];

pub fn parse_weapon_command(message: &str) -> Result<Option<WeaponCommand>, String> {
    let trimmed = message.trim();
    if !trimmed.starts_with('/') {
        return Ok(None);
    }

    let mut parts = trimmed[1..].split_whitespace();
    let label = parts
        .next()
        .ok_or_else(|| "command missing label".to_string())?
        .to_ascii_lowercase();
    if !COMMAND_LABELS.contains(&label.as_str()) {
        return Ok(None);
    }

    let Some(subcommand) = parts.next() else {
        return Err(format!("usage: /{} <give|list|reload> ...", label));
    };
    let subcommand = subcommand.to_ascii_lowercase();
    let parsed = match subcommand.as_str() {
        "list" => WeaponCommand::List,
        "reload" => WeaponCommand::Reload,
        "give" => {
            let id = parts
                .next()
                .ok_or_else(|| format!("usage: /{} give <weaponId> [player]", label))?;
            WeaponCommand::Give {
                id: id.to_string(),
                target: parts.next().map(str::to_string),
            }
        }
        _ => WeaponCommand::Unknown(subcommand),
    };
    Ok(Some(parsed))
}

/// Tab-completion candidates for a partially typed command.
pub fn completions(args: &[&str], weapon_ids: &[&str]) -> Vec<String> {
    match args {
        [first] => {
            let prefix = first.to_ascii_lowercase();
            SUBCOMMANDS
                .iter()
                .filter(|candidate| candidate.starts_with(&prefix))
                .map(|candidate| candidate.to_string())
                .collect()
        }
        [sub, second] if sub.eq_ignore_ascii_case("give") => {
            let prefix = second.to_ascii_lowercase();
            let mut matches: Vec<String> = weapon_ids
                .iter()
                .filter(|id| id.to_ascii_lowercase().starts_with(&prefix))
                .map(|id| id.to_string())
                .collect();
            matches.sort();
            matches
        }
        _ => Vec::new(),
    }
}

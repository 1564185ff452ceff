use cweapons::items::factory::{render_lore, render_name, ItemFactory};
use cweapons::items::identity::IdentityResolver;
use cweapons::text::style::strip_style_codes;
use cweapons::weapons::compiler::compile;
use cweapons::Material;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct AuditReport {
    weapons: usize,
    round_trip_failures: Vec<String>,
    ambiguous_pairs: Vec<[String; 2]>,
}

#[derive(Debug, PartialEq, Eq)]
struct Fingerprint {
    material: Material,
    name: Option<String>,
    lore: Vec<String>,
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        return Err("usage: weapon_audit <weapons.yaml>".to_string());
    }

    let raw = std::fs::read_to_string(&args[1])
        .map_err(|err| format!("failed to read {}: {}", args[1], err))?;
    let tree: serde_yaml::Value = serde_yaml::from_str(&raw)
        .map_err(|err| format!("failed to parse {}: {}", args[1], err))?;
    let index = compile(&tree);
    let factory = ItemFactory::default();
    let resolver = IdentityResolver::new();

    let mut round_trip_failures = Vec::new();
    let mut fingerprints: Vec<(String, Fingerprint)> = Vec::new();

    for definition in index.iter() {
        let Some(item) = factory.create_item(&index, &definition.id) else {
            round_trip_failures.push(format!("{}: item creation failed", definition.id));
            continue;
        };
        match resolver.resolve(&index, &item) {
            Some(resolved) if resolved == definition.id => {}
            other => round_trip_failures.push(format!(
                "{}: resolved to {:?}",
                definition.id, other
            )),
        }
        fingerprints.push((
            definition.id.clone(),
            Fingerprint {
                material: definition.material,
                name: render_name(definition).map(|name| strip_style_codes(&name)),
                lore: render_lore(definition)
                    .iter()
                    .map(|line| strip_style_codes(line))
                    .collect(),
            },
        ));
    }

    // Definitions rendering identically can only resolve to the first one.
    let mut ambiguous_pairs = Vec::new();
    for (index_a, (id_a, print_a)) in fingerprints.iter().enumerate() {
        for (id_b, print_b) in fingerprints.iter().skip(index_a + 1) {
            if print_a == print_b {
                ambiguous_pairs.push([id_a.clone(), id_b.clone()]);
            }
        }
    }

    let report = AuditReport {
        weapons: index.len(),
        round_trip_failures,
        ambiguous_pairs,
    };
    let rendered = serde_yaml::to_string(&report)
        .map_err(|err| format!("failed to render report: {}", err))?;
    print!("{}", rendered);

    if report.round_trip_failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} weapon(s) failed the identity round trip",
            report.round_trip_failures.len()
        ))
    }
}

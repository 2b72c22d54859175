//! Creature filter, detail and option command handlers

use anyhow::{Context, Result};
use huntopt::{CreatureRecord, FilterCriteria, MobDatabase};

use crate::cli::{FilterArgs, MobsCommand, OutputFormat};
use crate::config::Config;
use crate::source;

/// Handle the mobs command
pub fn handle(command: MobsCommand, config: &Config) -> Result<()> {
    match command {
        MobsCommand::Filter {
            filters,
            source,
            format,
            limit,
        } => {
            let criteria = criteria_from_args(&filters)?;
            let db = source::load(&source, config).context("Failed to load creature data")?;
            filter(&db, &criteria, format, limit)
        }
        MobsCommand::Show { name, source } => {
            let db = source::load(&source, config).context("Failed to load creature data")?;
            show(&db, &name.join(" "))
        }
        MobsCommand::Options { source } => {
            let db = source::load(&source, config).context("Failed to load creature data")?;
            options(&db);
            Ok(())
        }
    }
}

/// Build filter criteria from command-line selectors
pub fn criteria_from_args(args: &FilterArgs) -> Result<FilterCriteria> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    let builder = FilterCriteria::builder()
        .name(text(&args.name))
        .location(text(&args.location))
        .category(text(&args.category))
        .damage(args.damage.as_deref().unwrap_or_default())?
        .exclusive(args.exclusive)
        .combat(text(&args.combat))
        .show_all(args.all);

    let range_mode = args.hp_range || args.hp_min.is_some() || args.hp_max.is_some();
    let builder = if range_mode {
        builder.hp_range(args.hp_min, args.hp_max)
    } else {
        builder.hp_exact(args.hp)
    };

    Ok(builder.build())
}

fn filter(
    db: &MobDatabase,
    criteria: &FilterCriteria,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    let mut results = db.filter(criteria);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Csv => {
            println!("name,maturity,location,type,health,hp_per_level,danger_level,combat,damage");
            for mob in &results {
                let values = [
                    mob.name.clone(),
                    mob.maturity.clone(),
                    mob.location.clone(),
                    mob.category.clone(),
                    mob.health.to_string(),
                    format!("{:.2}", mob.hp_per_level),
                    mob.danger_level.to_string(),
                    mob.combat.clone(),
                    mob.damage_types.join(" "),
                ];
                let escaped: Vec<String> = values.iter().map(|v| escape_csv(v)).collect();
                println!("{}", escaped.join(","));
            }
        }
        OutputFormat::Table => {
            if results.is_empty() {
                if criteria.is_neutral() && !criteria.show_all {
                    println!("No filters given. Pick at least one, or use --all to list everything.");
                } else {
                    println!("No creatures match these filters.");
                }
                return Ok(());
            }

            println!(
                "{:<28} {:<14} {:<20} {:<10} {:>9} {:>8} {:<20}",
                "Name", "Maturity", "Location", "Type", "Health", "HP/Lvl", "Damage"
            );
            println!("{}", "-".repeat(115));
            for mob in &results {
                println!(
                    "{:<28} {:<14} {:<20} {:<10} {:>9} {:>8} {:<20}",
                    truncate(&mob.name, 28),
                    truncate(&mob.maturity, 14),
                    truncate(&mob.location, 20),
                    truncate(&mob.display_category(), 10),
                    mob.health,
                    format_ratio(mob.hp_per_level),
                    mob.damage_types.join(", ")
                );
            }
            println!("\n{} of {} records", results.len(), db.len());
        }
    }

    Ok(())
}

fn show(db: &MobDatabase, name: &str) -> Result<()> {
    let matches = db.find_by_name(name);

    if matches.is_empty() {
        println!("No creature found matching '{}'", name);
        println!("\nTry a partial name like 'atro' or 'feff'");
        return Ok(());
    }

    for (i, mob) in matches.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_details(mob);
    }

    Ok(())
}

fn print_details(mob: &CreatureRecord) {
    println!("Name:          {}", mob.name);
    println!("Type:          {}", mob.display_category());
    println!("Location:      {}", mob.location);
    println!("Maturity:      {}", mob.maturity);
    println!("Health:        {}", group_thousands(mob.health));
    println!("Danger Level:  {}", mob.danger_level);
    println!("HP/Level:      {:.2}", mob.hp_per_level);
    println!("Movement:      {}", mob.movement);
    println!("Combat:        {}", mob.combat);
    println!("Aggression:    {}", mob.aggression);
    println!("Damage Types:  {}", mob.damage_types.join(", "));
    if let Some(attacks) = mob.attacks_per_min {
        println!("Attacks/Min:   {}", attacks);
    }
    println!("Is Event:      {}", yes_no(mob.is_event));
    println!("Is Instance:   {}", yes_no(mob.is_instance));
}

fn options(db: &MobDatabase) {
    let catalog = db.catalog();
    let sections = [
        ("Locations", catalog.location_options()),
        ("Looter skills", catalog.category_options()),
        ("Damage types", catalog.damage_options()),
        ("Combat types", catalog.combat_options()),
    ];

    for (i, (title, values)) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({}):", title, values.len() - 1);
        for value in values {
            println!("  {}", value);
        }
    }
}

/// Unranked creatures show "-" instead of 0.00
fn format_ratio(hp_per_level: f64) -> String {
    if hp_per_level == 0.0 {
        "-".to_string()
    } else {
        format!("{:.2}", hp_per_level)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let cut: String = value.chars().take(width - 1).collect();
        format!("{}…", cut)
    } else {
        value.to_string()
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huntopt::{DamageType, HpBounds};

    #[test]
    fn test_no_args_is_neutral() {
        let criteria = criteria_from_args(&FilterArgs::default()).unwrap();
        assert!(criteria.is_neutral());
    }

    #[test]
    fn test_criteria_from_args() {
        let args = FilterArgs {
            name: Some("atrox".to_string()),
            location: Some("Calypso".to_string()),
            damage: Some("acid".to_string()),
            exclusive: true,
            hp: Some(450),
            ..Default::default()
        };
        let criteria = criteria_from_args(&args).unwrap();
        assert_eq!(criteria.name, "atrox");
        assert_eq!(criteria.location, "Calypso");
        assert_eq!(criteria.damage, Some(DamageType::Acid));
        assert!(criteria.exclusive);
        assert_eq!(criteria.hp, HpBounds::Exact(450));
    }

    #[test]
    fn test_hp_bounds_imply_range() {
        let args = FilterArgs {
            hp_min: Some(100),
            ..Default::default()
        };
        let criteria = criteria_from_args(&args).unwrap();
        assert_eq!(
            criteria.hp,
            HpBounds::Range {
                min: Some(100),
                max: None
            }
        );

        let toggle_only = FilterArgs {
            hp_range: true,
            ..Default::default()
        };
        let criteria = criteria_from_args(&toggle_only).unwrap();
        assert_eq!(criteria.hp, HpBounds::Range { min: None, max: None });
        assert!(!criteria.is_neutral());
    }

    #[test]
    fn test_unknown_damage_fails() {
        let args = FilterArgs {
            damage: Some("plasma".to_string()),
            ..Default::default()
        };
        let err = criteria_from_args(&args).unwrap_err();
        assert!(err.to_string().contains("plasma"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.0), "-");
        assert_eq!(format_ratio(37.456), "37.46");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Atrox", 10), "Atrox");
        assert_eq!(truncate("Armax Bull Provider", 8), "Armax B…");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}

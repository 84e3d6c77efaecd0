use lootfall_core::{
    Decision, EventKind, ItemDef, RoundOutcome, RunError, RunState, RunSummary,
};
use lootfall_data::{load_catalog, load_game_config};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_ASSETS: &str = "assets";
const DEFAULT_CHARACTER: &str = "vagrant";
const DEFAULT_BIOME: &str = "crypt";

#[derive(Debug)]
struct CliOptions {
    assets: PathBuf,
    character: String,
    biome: String,
    seed: Option<u64>,
    streak: u32,
    script: Option<PathBuf>,
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions {
        assets: PathBuf::from(DEFAULT_ASSETS),
        character: DEFAULT_CHARACTER.to_string(),
        biome: DEFAULT_BIOME.to_string(),
        seed: None,
        streak: 0,
        script: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| -> Result<String, String> {
            args.next().ok_or_else(|| format!("{flag} needs a value"))
        };
        match arg.as_str() {
            "--assets" => options.assets = PathBuf::from(value_for("--assets")?),
            "--character" => options.character = value_for("--character")?,
            "--biome" => options.biome = value_for("--biome")?,
            "--seed" => {
                let raw = value_for("--seed")?;
                options.seed = Some(raw.parse().map_err(|_| format!("bad seed {raw}"))?);
            }
            "--streak" => {
                let raw = value_for("--streak")?;
                options.streak = raw.parse().map_err(|_| format!("bad streak {raw}"))?;
            }
            "--script" => options.script = Some(PathBuf::from(value_for("--script")?)),
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument {other}")),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("lootfall [--assets DIR] [--character ID] [--biome ID] [--seed N] [--streak N] [--script FILE]");
    println!();
    println!("Decisions at an item offer: loot | loot <discard-index> | leave | timeout");
    println!("Other commands: status | quit");
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };
    match play(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn play(options: CliOptions) -> Result<(), String> {
    let config = load_game_config(&options.assets).map_err(|err| format!("{err:#}"))?;
    let content = load_catalog(&options.assets).map_err(|err| format!("{err:#}"))?;
    let seed = options
        .seed
        .unwrap_or_else(|| lootfall_core::RngState::from_entropy().seed());
    let mut run = RunState::new(config, content, &options.character, &options.biome, seed)
        .map_err(|err| err.to_string())?;

    println!("== lootfall :: {} in {} (seed {seed}) ==", options.character, options.biome);

    let scripted: Option<Vec<String>> = match &options.script {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|err| format!("read script: {err}"))?;
            Some(
                raw.lines()
                    .map(|line| line.trim().to_string())
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .collect(),
            )
        }
        None => None,
    };

    let summary = match scripted {
        Some(lines) => {
            drive_scripted(&mut run, lines)?;
            run.finish(options.streak)
        }
        None => drive_interactive(run, options.streak)?,
    };
    print_summary(&summary);
    Ok(())
}

/// Replay a recorded decision list; each line answers one item offer.
fn drive_scripted(run: &mut RunState, lines: Vec<String>) -> Result<(), String> {
    let mut decisions = lines.into_iter();
    while !run.is_over() {
        let outcome = match run.advance_round() {
            Ok(outcome) => outcome,
            Err(RunError::RunEnded) => break,
            Err(err) => return Err(err.to_string()),
        };
        render_outcome(run, &outcome);
        if let RoundOutcome::Offer(item) = outcome {
            let Some(line) = decisions.next() else {
                // Script exhausted: the run ends where the recording ends.
                break;
            };
            let decision =
                parse_decision(&line).ok_or_else(|| format!("bad script decision {line}"))?;
            apply_decision(run, &item, decision)?;
        }
    }
    Ok(())
}

fn drive_interactive(mut run: RunState, streak: u32) -> Result<RunSummary, String> {
    let stdin = io::stdin();
    let mut input = String::new();
    while !run.is_over() {
        let outcome = match run.advance_round() {
            Ok(outcome) => outcome,
            Err(RunError::RunEnded) => break,
            Err(err) => return Err(err.to_string()),
        };
        render_outcome(&run, &outcome);
        let RoundOutcome::Offer(item) = outcome else {
            continue;
        };
        loop {
            print!("> ");
            io::stdout().flush().map_err(|err| err.to_string())?;
            input.clear();
            if stdin.lock().read_line(&mut input).map_err(|err| err.to_string())? == 0 {
                return Ok(run.finish(streak));
            }
            let line = input.trim();
            match line {
                "quit" | "exit" => return Ok(run.finish(streak)),
                "status" => {
                    render_status(&run);
                    continue;
                }
                _ => {}
            }
            let Some(decision) = parse_decision(line) else {
                println!("  loot | loot <discard-index> | leave | timeout | status | quit");
                continue;
            };
            match run.decide(decision) {
                Ok(result) => {
                    if let Some(id) = &result.looted {
                        println!("  looted {id}");
                    } else {
                        println!("  left {} behind", item.name);
                    }
                    if let Some(discarded) = &result.discarded {
                        println!("  dropped {} to make room", discarded.name);
                    }
                    for anti in &result.anti_synergies {
                        println!(
                            "  {} and {} clash for {} damage",
                            anti.first, anti.second, anti.damage
                        );
                    }
                    break;
                }
                Err(RunError::DiscardRequired) => {
                    println!("  no room: loot <discard-index> (0..{})", run.inventory.len());
                }
                Err(err) => println!("  {err}"),
            }
        }
    }
    Ok(run.finish(streak))
}

fn parse_decision(line: &str) -> Option<Decision> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "loot" | "take" => match parts.next() {
            Some(index) => index.parse().ok().map(|index| Decision::Loot {
                discard: Some(index),
            }),
            None => Some(Decision::Loot { discard: None }),
        },
        "leave" | "skip" => Some(Decision::Leave),
        "timeout" => Some(Decision::Timeout),
        _ => None,
    }
}

fn apply_decision(run: &mut RunState, item: &ItemDef, decision: Decision) -> Result<(), String> {
    match run.decide(decision) {
        Ok(_) => Ok(()),
        // A scripted loot against a full bag falls back to dropping slot 0,
        // so recordings stay replayable across catalog tweaks.
        Err(RunError::DiscardRequired) => run
            .decide(Decision::Loot { discard: Some(0) })
            .map(|_| ())
            .map_err(|err| err.to_string()),
        Err(err) => Err(format!("script decision on {}: {err}", item.id)),
    }
}

fn render_outcome(run: &RunState, outcome: &RoundOutcome) {
    let state = &run.state;
    match outcome {
        RoundOutcome::Boss(report) => {
            let combat = &report.combat;
            println!(
                "[round {} :: {}] boss {}: dealt {}, took {}",
                state.round,
                state.zone.name(),
                combat.boss_id,
                combat.damage_dealt,
                combat.damage_taken
            );
            if combat.victory {
                println!(
                    "  victory! +{} score, +{} gold, healed {}",
                    report.score_bonus, report.gold_gained, report.healed
                );
                for drop in &report.drops {
                    println!("  drop: {}", drop.name);
                }
            } else {
                println!("  it survives with {} health", combat.boss_health_remaining);
            }
        }
        RoundOutcome::Event(report) => {
            let outcome = &report.outcome;
            println!(
                "[round {} :: {}] event {:?}: {}",
                state.round,
                state.zone.name(),
                outcome.kind,
                if outcome.success { "success" } else { "no luck" }
            );
            for gained in &outcome.items_gained {
                println!("  gained {}", gained.name);
            }
            for lost in &outcome.items_lost {
                println!("  lost {lost}");
            }
            if outcome.health_delta != 0 {
                println!("  health {:+}", outcome.health_delta);
            }
            if outcome.gold_delta != 0 {
                println!("  gold {:+}", outcome.gold_delta);
            }
            if let Some(buff) = outcome.buff {
                println!("  buff: {buff:?}");
            }
            if outcome.kind == EventKind::WheelOfFortune && !outcome.success {
                println!("  the wheel shows no mercy");
            }
        }
        RoundOutcome::Offer(item) => {
            println!(
                "[round {} :: {}] found {} ({:?} {:?}, {} slot{})",
                state.round,
                state.zone.name(),
                item.name,
                item.rarity,
                item.category,
                item.slot_cost,
                if item.slot_cost == 1 { "" } else { "s" }
            );
            if item.attack != 0 || item.defense != 0 || item.heal != 0 {
                println!(
                    "  atk {} / def {} / heal {}",
                    item.attack, item.defense, item.heal
                );
            }
        }
        RoundOutcome::Quiet => {
            println!("[round {} :: {}] nothing stirs", state.round, state.zone.name());
        }
    }
}

fn render_status(run: &RunState) {
    let state = &run.state;
    println!(
        "  hp {}/{} | gold {} | score {} | round {} ({})",
        state.health,
        state.max_health,
        state.gold,
        state.score,
        state.round,
        state.zone.name()
    );
    println!(
        "  bag {}/{} slots:",
        run.inventory.used_slots(),
        run.inventory.slots
    );
    for (idx, item) in run.inventory.items.iter().enumerate() {
        println!(
            "    [{idx}] {}{} (atk {} def {})",
            item.name,
            if item.cursed { " (cursed)" } else { "" },
            item.attack,
            item.defense
        );
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("== run over ==");
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: serialize summary: {err}"),
    }
}

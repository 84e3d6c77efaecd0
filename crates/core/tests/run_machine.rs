use lootfall_core::{
    BiomeDef, BossDef, CharacterDef, Content, Decision, DeathCause, EventDef, EventKind,
    GameConfig, ItemCategory, ItemDef, Rarity, RoundOutcome, RunError, RunState,
};

fn item(id: &str, category: ItemCategory, rarity: Rarity) -> ItemDef {
    ItemDef {
        id: id.into(),
        name: id.into(),
        category,
        rarity,
        slot_cost: 1,
        attack: 5,
        defense: 0,
        heal: 0,
        cursed: false,
        consumable: false,
        fire: false,
        ice: false,
        synergy_partners: Vec::new(),
        anti_synergy_partners: Vec::new(),
        biomes: Vec::new(),
        drop_weight: 1.0,
    }
}

fn content() -> Content {
    Content {
        items: vec![
            item("sword", ItemCategory::Weapon, Rarity::Common),
            item("shield", ItemCategory::Defense, Rarity::Common),
            item("trinket", ItemCategory::Artifact, Rarity::Common),
            item("knife", ItemCategory::Weapon, Rarity::Common),
        ],
        bosses: vec![BossDef {
            id: "warden".into(),
            name: "Warden".into(),
            base_health: 100,
            health_scaling: 5,
            weakness: ItemCategory::Weapon,
            resistance: ItemCategory::Curse,
            guaranteed_drops: vec!["trinket".into()],
            min_round: 0,
            preferred_biome: None,
        }],
        events: vec![EventDef {
            id: "healer".into(),
            kind: EventKind::Healer,
            base_chance: 1.0,
            min_round: 0,
            biomes: Vec::new(),
        }],
        characters: vec![
            CharacterDef {
                id: "vagrant".into(),
                name: "Vagrant".into(),
                max_health: 100,
                starting_gold: 0,
                slots: 8,
                starting_items: Vec::new(),
            },
            CharacterDef {
                id: "packrat".into(),
                name: "Packrat".into(),
                max_health: 100,
                starting_gold: 0,
                slots: 1,
                starting_items: vec!["sword".into()],
            },
        ],
        biomes: vec![BiomeDef {
            id: "crypt".into(),
            name: "Crypt".into(),
        }],
    }
}

fn new_run(seed: u64) -> RunState {
    RunState::new(GameConfig::default(), content(), "vagrant", "crypt", seed)
        .expect("valid character and biome")
}

#[test]
fn unknown_character_or_biome_is_rejected() {
    assert!(matches!(
        RunState::new(GameConfig::default(), content(), "nobody", "crypt", 1),
        Err(RunError::UnknownCharacter(_))
    ));
    assert!(matches!(
        RunState::new(GameConfig::default(), content(), "vagrant", "void", 1),
        Err(RunError::UnknownBiome(_))
    ));
}

#[test]
fn seeded_runs_replay_identically() {
    let decisions = [
        Decision::Loot { discard: None },
        Decision::Leave,
        Decision::Timeout,
    ];
    let mut transcripts = Vec::new();
    for _ in 0..2 {
        let mut run = new_run(0xDEADBEEF);
        let mut transcript = Vec::new();
        let mut decision_idx = 0;
        for _ in 0..40 {
            if run.is_over() {
                break;
            }
            let outcome = run.advance_round().expect("advance");
            transcript.push(format!("{outcome:?}"));
            if matches!(outcome, RoundOutcome::Offer(_)) {
                let decision = decisions[decision_idx % decisions.len()];
                decision_idx += 1;
                match run.decide(decision) {
                    Ok(result) => transcript.push(format!("{result:?}")),
                    Err(RunError::DiscardRequired) => {
                        let result = run.decide(Decision::Loot { discard: Some(0) }).expect("discard");
                        transcript.push(format!("{result:?}"));
                    }
                    Err(err) => panic!("unexpected error: {err}"),
                }
            }
        }
        transcripts.push(transcript);
    }
    assert_eq!(transcripts[0], transcripts[1]);
}

#[test]
fn boss_rounds_fall_on_the_interval() {
    let mut run = new_run(21);
    for round in 1..=10u32 {
        if run.is_over() {
            break;
        }
        let outcome = run.advance_round().expect("advance");
        let is_boss = matches!(outcome, RoundOutcome::Boss(_));
        assert_eq!(is_boss, round % 5 == 0, "round {round}");
        if matches!(outcome, RoundOutcome::Offer(_)) {
            run.decide(Decision::Leave).expect("leave");
        }
    }
}

#[test]
fn advancing_past_a_pending_offer_is_rejected() {
    let mut run = new_run(2);
    loop {
        match run.advance_round().expect("advance") {
            RoundOutcome::Offer(_) => break,
            _ => continue,
        }
    }
    assert!(matches!(run.advance_round(), Err(RunError::OfferPending)));
    run.decide(Decision::Leave).expect("leave");
}

#[test]
fn deciding_without_an_offer_is_rejected() {
    let mut run = new_run(2);
    assert!(matches!(
        run.decide(Decision::Leave),
        Err(RunError::NoPendingOffer)
    ));
}

#[test]
fn full_inventory_loot_without_discard_leaves_state_unchanged() {
    let mut run = RunState::new(GameConfig::default(), content(), "packrat", "crypt", 9)
        .expect("valid character");
    assert_eq!(run.inventory.len(), 1);

    loop {
        match run.advance_round().expect("advance") {
            RoundOutcome::Offer(_) => break,
            RoundOutcome::Boss(_) | RoundOutcome::Event(_) | RoundOutcome::Quiet => continue,
        }
    }
    let items_before: Vec<String> = run.inventory.items.iter().map(|i| i.id.clone()).collect();
    let score_before = run.state.score;

    assert!(matches!(
        run.decide(Decision::Loot { discard: None }),
        Err(RunError::DiscardRequired)
    ));
    let items_after: Vec<String> = run.inventory.items.iter().map(|i| i.id.clone()).collect();
    assert_eq!(items_before, items_after);
    assert_eq!(run.state.score, score_before);
    assert!(run.pending_offer().is_some(), "offer survives the rejection");

    // Resupplying a discard commits the loot.
    run.decide(Decision::Loot { discard: Some(0) }).expect("loot with discard");
    assert_eq!(run.inventory.len(), 1);
    assert!(run.pending_offer().is_none());
}

#[test]
fn timeout_counts_as_leaving() {
    let mut run = new_run(4);
    loop {
        match run.advance_round().expect("advance") {
            RoundOutcome::Offer(_) => break,
            _ => continue,
        }
    }
    let outcome = run.decide(Decision::Timeout).expect("timeout");
    assert!(outcome.looted.is_none());
    assert_eq!(run.state.items_left, 1);
    assert_eq!(run.state.items_looted, 0);
}

#[test]
fn fatal_anti_synergy_ends_the_run_immediately() {
    let mut idol = item("idol", ItemCategory::Curse, Rarity::Rare);
    idol.attack = 0;
    idol.cursed = true;
    idol.anti_synergy_partners = vec!["crown".into()];
    let mut crown = item("crown", ItemCategory::Curse, Rarity::Rare);
    crown.attack = 0;
    crown.cursed = true;
    crown.anti_synergy_partners = vec!["idol".into()];

    let mut catalog = content();
    catalog.items = vec![idol, crown];
    let mut run =
        RunState::new(GameConfig::default(), catalog, "vagrant", "crypt", 5).expect("run");

    let mut committed = 0;
    while committed < 2 && !run.is_over() {
        if let RoundOutcome::Offer(_) = run.advance_round().expect("advance") {
            let offered = run.pending_offer().expect("pending").id.clone();
            let duplicate = run.inventory.items.iter().any(|i| i.id == offered);
            let decision = if duplicate {
                Decision::Leave
            } else {
                Decision::Loot { discard: None }
            };
            let outcome = run.decide(decision).expect("decide");
            if outcome.looted.is_some() {
                committed += 1;
            }
        }
    }
    assert!(run.is_over());
    assert_eq!(run.cause_of_death(), Some(DeathCause::AntiSynergy));
    assert_eq!(run.state.health, 0);

    let summary = run.finish(0);
    assert_eq!(summary.cause_of_death, Some(DeathCause::AntiSynergy));
}

#[test]
fn standing_anti_synergy_charges_once() {
    let mut torch = item("torch", ItemCategory::Artifact, Rarity::Common);
    torch.attack = 0;
    torch.anti_synergy_partners = vec!["keg".into()];
    let mut keg = item("keg", ItemCategory::Artifact, Rarity::Common);
    keg.attack = 0;
    keg.anti_synergy_partners = vec!["torch".into()];
    let mut trinket = item("trinket", ItemCategory::Artifact, Rarity::Common);
    trinket.attack = 0;

    let mut catalog = content();
    catalog.items = vec![torch, keg, trinket];
    catalog.bosses = Vec::new();
    catalog.events = Vec::new();
    let mut run =
        RunState::new(GameConfig::default(), catalog, "vagrant", "crypt", 7).expect("run");

    // Assemble the conflicting pair, leaving everything else.
    let mut pair_held = 0;
    while pair_held < 2 && !run.is_over() {
        if let RoundOutcome::Offer(_) = run.advance_round().expect("advance") {
            let offered = run.pending_offer().expect("pending").id.clone();
            let wanted = (offered == "torch" || offered == "keg")
                && !run.inventory.items.iter().any(|i| i.id == offered);
            let decision = if wanted {
                Decision::Loot { discard: None }
            } else {
                Decision::Leave
            };
            let outcome = run.decide(decision).expect("decide");
            if outcome.looted.is_some() {
                pair_held += 1;
                if pair_held == 2 {
                    assert_eq!(outcome.anti_synergies.len(), 1);
                    assert_eq!(outcome.anti_synergies[0].damage, 10);
                }
            }
        }
    }
    assert_eq!(run.state.health, 90);

    // Later pickups must not re-charge the standing conflict.
    let mut later_loots = 0;
    while later_loots < 3 && !run.is_over() {
        if let RoundOutcome::Offer(_) = run.advance_round().expect("advance") {
            let outcome = run.decide(Decision::Loot { discard: None }).expect("loot");
            assert!(outcome.anti_synergies.is_empty());
            assert_eq!(run.state.health, 90);
            if outcome.looted.is_some() {
                later_loots += 1;
            }
        }
    }
    assert_eq!(later_loots, 3);
}

#[test]
fn consumables_heal_on_pickup_and_are_not_stored() {
    let mut draught = item("draught", ItemCategory::Consumable, Rarity::Common);
    draught.heal = 20;
    draught.consumable = true;
    let mut catalog = content();
    catalog.items = vec![draught];

    let mut run =
        RunState::new(GameConfig::default(), catalog, "vagrant", "crypt", 6).expect("run");
    run.state.health = 50;

    loop {
        match run.advance_round().expect("advance") {
            RoundOutcome::Offer(_) => break,
            _ => continue,
        }
    }
    let outcome = run.decide(Decision::Loot { discard: None }).expect("loot");
    assert_eq!(outcome.health_delta, 20);
    assert_eq!(run.state.health, 70);
    assert!(run.inventory.is_empty());
    assert_eq!(run.state.items_looted, 1);
}

#[test]
fn hazard_guaranteed_drops_are_skipped() {
    let mut snare = item("snare", ItemCategory::Trap, Rarity::Common);
    snare.attack = 10;
    let mut catalog = content();
    catalog.items = vec![
        item("sword", ItemCategory::Weapon, Rarity::Common),
        item("trinket", ItemCategory::Artifact, Rarity::Common),
        snare,
    ];
    catalog.bosses[0].base_health = 1;
    catalog.bosses[0].health_scaling = 0;
    catalog.bosses[0].guaranteed_drops = vec!["snare".into(), "trinket".into()];
    catalog.events = Vec::new();
    catalog.characters[0].starting_items = vec!["sword".into()];

    let mut run =
        RunState::new(GameConfig::default(), catalog, "vagrant", "crypt", 11).expect("run");
    let report = loop {
        match run.advance_round().expect("advance") {
            RoundOutcome::Boss(report) => break report,
            RoundOutcome::Offer(_) => {
                run.decide(Decision::Leave).expect("leave");
            }
            _ => continue,
        }
    };
    assert!(report.combat.victory);
    let dropped: Vec<&str> = report.drops.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(dropped, vec!["trinket"]);
    assert!(run.inventory.items.iter().all(|i| i.id != "snare"));
    assert_eq!(run.state.health, 100, "spoils must not bite");
}

#[test]
fn finished_run_reports_breakdown_and_banked_score() {
    let mut run = new_run(12);
    for _ in 0..12 {
        if run.is_over() {
            break;
        }
        if let RoundOutcome::Offer(_) = run.advance_round().expect("advance") {
            run.decide(Decision::Leave).expect("leave");
        }
    }
    let banked = run.state.score;
    let rounds = run.state.round;
    let summary = run.finish(0);
    assert_eq!(summary.rounds_completed, rounds);
    assert_eq!(
        summary.final_score,
        summary.breakdown.total + banked
    );
}

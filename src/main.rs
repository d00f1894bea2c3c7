//! Pitfight - Entry Point
//!
//! Sets up logging, builds the combatants, and runs one duel from
//! greeting to quit prompt.

use std::io;

use anyhow::{Context, Result};

use pitfight::data::MobTemplates;
use pitfight::game::{Battle, Outcome};
use pitfight::io::{read_hit_points, wait_for_quit};
use pitfight::Mob;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Pitfight v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    println!("Hello World!");

    let templates = MobTemplates::load_or_default();
    let enemy = templates
        .find("bob")
        .context("no 'bob' template defined")?
        .spawn();
    let mut player = templates
        .find("hero")
        .context("no 'hero' template defined")?
        .spawn();

    let hp = read_hit_points(&mut input, &mut output)?;
    player.set_hp(hp);

    let mut battle = Battle::new(player, enemy);
    while let Some(report) = battle.advance_round() {
        println!("FIGHT!");
        println!("Your HP is {}", report.player_hp);
        println!("Enemy HP is {}", report.enemy_hp);
    }

    match battle.outcome() {
        Some(Outcome::Victory) => println!("You won!! Good job!!"),
        _ => println!("You lost!!!!! HAHAHAHAHAAHAHA!!!!!!"),
    }

    log::debug!("mobs created this run: {}", Mob::creation_count());
    drop(battle);

    wait_for_quit(&mut input)?;

    log::info!("Pitfight shut down cleanly");
    Ok(())
}

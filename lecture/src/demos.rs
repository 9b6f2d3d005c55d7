//! The individual console demonstrations.

use anyhow::Context as _;
use clap::ValueEnum;
use lecture_core::adventure::{simple_locations, AdventureConfig, Game, WorldFactory};
use lecture_core::exercises::{compute_prime_factors, Board};
use lecture_core::strategy::{
    BreakAnywhere, BreakOnSpace, BreakOnSpaceOptimal, ContentKind, LastValue, MeanValue,
    PredictionStrategy, Predictor, Publisher, TextWrapStrategy, Truncation,
};
use lecture_core::Blog;
use std::path::Path;

/// Text-wrapping strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WrapKind {
    Truncate,
    Anywhere,
    Space,
    Optimal,
}

impl WrapKind {
    fn strategy(self) -> Box<dyn TextWrapStrategy> {
        match self {
            WrapKind::Truncate => Box::new(Truncation),
            WrapKind::Anywhere => Box::new(BreakAnywhere),
            WrapKind::Space => Box::new(BreakOnSpace),
            WrapKind::Optimal => Box::new(BreakOnSpaceOptimal),
        }
    }
}

/// Prediction strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PredictKind {
    Mean,
    Last,
}

impl PredictKind {
    fn strategy(self) -> Box<dyn PredictionStrategy> {
        match self {
            PredictKind::Mean => Box::new(MeanValue),
            PredictKind::Last => Box::new(LastValue),
        }
    }
}

pub fn blog(width: usize, strategy: Option<WrapKind>) -> anyhow::Result<()> {
    let kinds = match strategy {
        Some(kind) => vec![kind],
        None => WrapKind::value_variants().to_vec(),
    };

    let mut blog = Blog::new(kinds[0].strategy());
    blog.add_post("John Doe", "My first post", "This is my first post. ".repeat(8));
    blog.add_post("Jane Doe", "My second post", "This is my second post. ".repeat(12));

    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            blog.set_strategy(kind.strategy());
            println!();
        }
        println!("=== {} ===", blog.strategy().name());
        blog.print(width)?;
    }
    Ok(())
}

pub fn predict(strategy: PredictKind, values: &[f64]) -> anyhow::Result<()> {
    let predictor = Predictor::new(strategy.strategy());
    let prediction = predictor
        .predict(values)
        .with_context(|| format!("{} prediction failed", predictor.strategy().name()))?;
    println!("{} prediction: {prediction}", predictor.strategy().name());
    Ok(())
}

pub fn publish(kind: ContentKind, content: &str) -> anyhow::Result<()> {
    let publisher = Publisher::from(kind);
    println!("{}", publisher.publish(content));
    Ok(())
}

pub fn adventure(config: &AdventureConfig, world_path: Option<&Path>) -> anyhow::Result<()> {
    let factory = WorldFactory::new();
    let world = match world_path {
        Some(path) => factory
            .load(path)
            .with_context(|| format!("failed to load world from {}", path.display()))?,
        None => factory.create(&simple_locations())?,
    };

    let mut game = Game::from_config(world, config)?;
    for player in game.players() {
        println!("{}", player.describe(game.world()));
    }

    for _ in 0..config.rounds {
        for report in game.play_round()? {
            println!("{report}");
        }
    }

    for player in game.players() {
        println!("{}", player.describe(game.world()));
    }
    Ok(())
}

pub fn primes(n: u64) -> anyhow::Result<()> {
    let factors: Vec<String> = compute_prime_factors(n).iter().map(u64::to_string).collect();
    println!("{n}: [{}]", factors.join(", "));
    Ok(())
}

pub fn minesweeper(size: usize, flags: &[usize]) -> anyhow::Result<()> {
    let mut board = Board::new(size);
    for &position in flags {
        board.flag(position)?;
    }
    for cell in board.flagged_cells() {
        println!("flagged: {}", cell.position);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_kinds_map_to_distinct_strategies() {
        let names: Vec<String> = WrapKind::value_variants()
            .iter()
            .map(|k| k.strategy().name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["truncate", "break-anywhere", "break-on-space", "break-on-space-optimal"]
        );
    }

    #[test]
    fn test_predict_empty_mean_is_an_error() {
        assert!(predict(PredictKind::Mean, &[]).is_err());
        assert!(predict(PredictKind::Last, &[]).is_ok());
    }

    #[test]
    fn test_minesweeper_rejects_out_of_bounds() {
        assert!(minesweeper(4, &[1, 4]).is_err());
    }

    #[test]
    fn test_adventure_with_missing_world_file() {
        let config = AdventureConfig::new("Alice").with_rounds(1);
        let err = adventure(&config, Some(Path::new("/nonexistent/world.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to load world"));
    }
}

//! Let a randomly acting player wander through the simple world.

use lecture_core::adventure::{simple_locations, Action, Pawn, Player, RandomAction, TurnError, WorldFactory};

fn main() -> Result<(), TurnError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let world = WorldFactory::new().create(&simple_locations())?;

    let mut pawn = Pawn::new("Alice", world.id_of("Room 1")?);
    let room2 = world.get(world.id_of("Room 2")?)?;
    let action = Action::Move {
        direction: "north".to_string(),
        target: room2.id,
        target_name: room2.name.clone(),
    };
    pawn.perform(&action);
    println!("{} moved to {}", pawn.name, world.get(pawn.location())?.name);

    let mut player = Player::new("Alice", pawn, Box::new(RandomAction::new()));
    println!("{}", player.describe(&world));

    for _ in 0..10 {
        let report = player.take_turn(&world)?;
        println!("{report}");
    }
    println!("{}", player.describe(&world));

    Ok(())
}

mod common;
use common::PetFixture;
use vivarium_lib::{PetEntity, PetEvent};

#[test]
fn test_buddy_care_routine_does_not_evolve() {
    let mut pet = PetEntity::new("Buddy");

    pet.feed("Meat");
    assert_stats!(pet, happiness = 50, health = 60);
    pet.play("Fetch");
    assert_stats!(pet, happiness = 65, health = 60);
    pet.feed("Meat");
    assert_stats!(pet, happiness = 65, health = 70);
    pet.play("Fetch");
    assert_stats!(pet, happiness = 80, health = 70);

    // Health is still at 70, below the threshold.
    assert_stage!(pet, "Egg");
    assert!(pet.take_events().is_empty());
}

#[test]
fn test_one_advance_per_qualifying_call() {
    let (mut pet, log) = PetFixture::new()
        .with_stages(&["Egg", "Child", "Adult"])
        .with_stats(70, 70)
        .build();

    pet.feed("Meat");
    assert_stage!(pet, "Egg");
    pet.play("Fetch");
    assert_stage!(pet, "Child");
    pet.feed("Meat");
    assert_stage!(pet, "Adult");

    for _ in 0..10 {
        pet.feed("Meat");
        pet.play("Fetch");
    }
    assert_stage!(pet, "Adult");
    assert_eq!(pet.stage_index(), 2);

    let events = log.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events, pet.take_events());
}

#[test]
fn test_stage_never_decreases() {
    let (mut pet, _log) = PetFixture::new()
        .with_stages(&["A", "B", "C", "D"])
        .with_stats(90, 90)
        .build();

    pet.play("Tag");
    assert_eq!(pet.stage_index(), 1);
    pet.set_happiness(0);
    pet.set_health(0);
    assert_eq!(pet.stage_index(), 1);
    pet.feed("Meat");
    assert_eq!(pet.stage_index(), 1);
}

#[test]
fn test_boundary_values_do_not_evolve() {
    let (mut pet, log) = PetFixture::new().with_stats(75, 75).build();
    pet.set_health(75);
    pet.set_happiness(75);
    assert_eq!(pet.stage_index(), 0);

    pet.set_health(76);
    assert_eq!(pet.stage_index(), 0);
    pet.set_happiness(76);
    assert_eq!(pet.stage_index(), 1);
    assert_eq!(log.len(), 1);
}

#[test]
fn test_event_carries_name_and_stage() {
    let (mut pet, log) = PetFixture::new()
        .with_stages(&["Spore", "Mushroom"])
        .with_stats(100, 100)
        .build();
    pet.set_name("Shroom");
    pet.feed("Water");

    match log.events().as_slice() {
        [PetEvent::Evolved {
            pet_id,
            name,
            stage_index,
            stage,
        }] => {
            assert_eq!(*pet_id, pet.id());
            assert_eq!(name, "Shroom");
            assert_eq!(*stage_index, 1);
            assert_eq!(stage, "Mushroom");
        }
        other => panic!("unexpected events: {other:?}"),
    }
    assert_eq!(
        log.events()[0].to_string(),
        "Shroom has evolved into Mushroom!"
    );
}

#[test]
fn test_configured_rules_drive_evolution() {
    let (mut pet, _log) = PetFixture::new()
        .with_config(|config| {
            config.care.favorite_food = "Fish".to_string();
            config.care.favorite_food_bonus = 30;
            config.evolution.health_threshold = 70;
        })
        .with_stats(80, 50)
        .build();

    pet.feed("MEAT");
    assert_eq!(pet.health(), 55);
    pet.feed("fish");
    assert_eq!(pet.health(), 85);
    assert_stage!(pet, "Child");
}

#[test]
fn test_seeded_fixtures_share_identity() {
    let (a, _) = PetFixture::new().with_seed(9).build();
    let (b, _) = PetFixture::new().with_seed(9).build();
    let (c, _) = PetFixture::new().with_seed(10).build();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

//! End-to-end turn flow: bump resolution, combat, death, inventory traffic,
//! and floor descent driven through the engine exactly as a client would.

use delve_core::{
    Action, ActionContext, ActionError, ActorState, AiKind, BumpAction, Consumable, DamageType,
    DiceSpec, Direction, DropItemAction, EntityId, EquipAction, EquipSlot, Equipment, Equippable,
    ErrorSeverity, FloorTracker, GameEngine, GameEnv, GameError, GameState, GridMap, Inventory,
    Item, ItemId,
    ItemLocation, MessageBuffer, PickupAction, Position, Progression, RenderOrder, Rgb,
    ScriptedRng, StatBlock, TakeStairsAction, UseItemAction, WaitAction,
};
use delve_core::stats::AbilityScores;

struct Fixture {
    state: GameState,
    map: GridMap,
    rng: ScriptedRng,
    log: MessageBuffer,
    floors: FloorTracker,
    orc: EntityId,
    sword: ItemId,
}

fn player_template() -> (StatBlock, Inventory) {
    let stats = StatBlock::builder()
        .hp(30)
        .abilities(AbilityScores::new(18, 14, 14, 10, 12, 10))
        .build();
    (stats, Inventory::new(26))
}

fn actor(id: EntityId, position: Position, name: &str, stats: StatBlock, xp_given: u32) -> ActorState {
    ActorState {
        id,
        position,
        glyph: if id.is_player() { '@' } else { 'o' },
        color: Rgb::WHITE,
        name: name.into(),
        render_order: RenderOrder::Actor,
        blocks_movement: true,
        ai: Some(AiKind::Hostile),
        stats,
        inventory: Inventory::new(26),
        equipment: Equipment::empty(),
        progression: Progression::new(xp_given),
    }
}

/// Player (str 18 → +4) at (2,2) with an equipped 1d6 sword; orc with AC 15
/// (dex 14 → +2, base defense 3) and 10 hp at (3,2).
fn fixture(faces: &[u32]) -> Fixture {
    let mut map = GridMap::walled(10, 10);
    map.set_downstairs(Position::new(5, 5));

    let mut state = GameState::with_seed(7);

    let (player_stats, player_inventory) = player_template();
    let mut player = actor(
        EntityId::PLAYER,
        Position::new(2, 2),
        "Player",
        player_stats,
        0,
    );
    player.inventory = player_inventory;

    let sword = state.entities.items.spawn(
        Item::new('/', Rgb(0, 191, 255), "Sword")
            .with_equippable(Equippable::weapon(DiceSpec::new(1, 6), DamageType::Slashing)),
        ItemLocation::Carried(EntityId::PLAYER),
    );
    player.equipment.equip(EquipSlot::Weapon, sword);
    state.entities.add_actor(player);

    let orc_stats = StatBlock::builder()
        .hp(10)
        .abilities(AbilityScores::new(16, 14, 16, 8, 12, 10))
        .base_defense(3)
        .build();
    let orc = state.entities.allocate_actor_id();
    state
        .entities
        .add_actor(actor(orc, Position::new(3, 2), "Orc", orc_stats, 35));

    Fixture {
        state,
        map,
        rng: ScriptedRng::with_faces(faces),
        log: MessageBuffer::new(),
        floors: FloorTracker::default(),
        orc,
        sword,
    }
}

fn exec(fixture: &mut Fixture, action: Action) -> Result<(), ActionError> {
    let env = GameEnv::with_all(&fixture.map, &fixture.rng);
    let mut ctx = ActionContext::new(env, &mut fixture.log, &mut fixture.floors);
    let mut engine = GameEngine::new(&mut fixture.state);
    engine.execute(&mut ctx, &action)
}

fn bump_east(fixture: &mut Fixture) -> Result<(), ActionError> {
    exec(
        fixture,
        Action::Bump(BumpAction::new(EntityId::PLAYER, Direction::East)),
    )
}

#[test]
fn bump_into_an_enemy_resolves_the_attack_roll_against_armor_class() {
    // d20 lands 11, damage die lands 4: roll 15 vs AC 15 hits for 4+4.
    let mut fixture = fixture(&[11, 4]);

    bump_east(&mut fixture).unwrap();

    let orc = fixture.state.entities.actor(fixture.orc).unwrap();
    assert_eq!(orc.armor_class(&fixture.state.entities.items), 15);
    assert_eq!(orc.stats.hp(), 2);
    assert!(
        fixture
            .log
            .contains_text("Player attempts to attack Orc and hits! (15 vs. AC15)")
    );
    assert!(fixture.log.contains_text("Player deals 8 slashing damage."));
}

#[test]
fn a_missed_attack_deals_no_damage() {
    // d20 lands 5: roll 9 vs AC 15 misses; no damage die is consumed.
    let mut fixture = fixture(&[5]);

    bump_east(&mut fixture).unwrap();

    let orc = fixture.state.entities.actor(fixture.orc).unwrap();
    assert_eq!(orc.stats.hp(), 10);
    assert!(
        fixture
            .log
            .contains_text("Player attempts to attack Orc and misses. (9 vs. AC15)")
    );
    assert!(!fixture.log.contains_text("However, they deal no damage."));
}

#[test]
fn a_hit_with_no_damage_emits_the_distinct_message() {
    let mut fixture = fixture(&[20, 1]);
    // Weak arms: strength 4 → -3, so a damage die of 1 comes out at zero.
    fixture
        .state
        .entities
        .player_mut()
        .unwrap()
        .stats
        .abilities
        .set_strength(4);

    bump_east(&mut fixture).unwrap();

    let orc = fixture.state.entities.actor(fixture.orc).unwrap();
    assert_eq!(orc.stats.hp(), 10);
    assert!(fixture.log.contains_text("However, they deal no damage."));
}

#[test]
fn lethal_damage_fires_the_death_transition_exactly_once() {
    // Two identical hits: 8 damage, then the remaining 2 (and overkill).
    let mut fixture = fixture(&[11, 4]);

    bump_east(&mut fixture).unwrap();
    bump_east(&mut fixture).unwrap();

    let corpse = fixture.state.entities.actor(fixture.orc).unwrap();
    assert_eq!(corpse.stats.hp(), 0);
    assert_eq!(corpse.glyph, '%');
    assert_eq!(corpse.name, "remains of Orc");
    assert_eq!(corpse.render_order, RenderOrder::Corpse);
    assert!(corpse.ai.is_none());
    assert!(!corpse.blocks_movement);
    assert!(fixture.log.contains_text("Orc is dead!"));
    assert_eq!(
        fixture.state.entities.player().unwrap().progression.xp(),
        35
    );

    // The corpse no longer blocks: the same bump now resolves to movement.
    bump_east(&mut fixture).unwrap();
    assert_eq!(
        fixture.state.entities.player().unwrap().position,
        Position::new(3, 2)
    );
    assert_eq!(
        fixture.state.entities.player().unwrap().progression.xp(),
        35
    );
}

#[test]
fn actions_from_the_wrong_actor_are_rejected() {
    let mut fixture = fixture(&[]);
    let orc = fixture.orc;

    let error = exec(&mut fixture, Action::Wait(WaitAction::new(orc))).unwrap_err();

    assert!(matches!(error, ActionError::NotActorsTurn { .. }));
    assert!(!error.is_impossible());
    assert_eq!(error.severity(), ErrorSeverity::Validation);
    assert_eq!(fixture.state.turn.nonce, 0);
}

#[test]
fn denied_actions_do_not_consume_the_turn_nonce() {
    let mut fixture = fixture(&[]);

    let error = exec(
        &mut fixture,
        Action::TakeStairs(TakeStairsAction::new(EntityId::PLAYER)),
    )
    .unwrap_err();

    assert!(error.is_impossible());
    assert_eq!(error.reason(), "There are no stairs here.");
    assert_eq!(fixture.state.turn.nonce, 0);

    exec(&mut fixture, Action::Wait(WaitAction::new(EntityId::PLAYER))).unwrap();
    assert_eq!(fixture.state.turn.nonce, 1);
}

#[test]
fn pickup_reparents_the_ground_item_into_the_inventory() {
    let mut fixture = fixture(&[]);
    let potion = fixture.state.entities.items.spawn(
        Item::new('!', Rgb(127, 0, 255), "Health Potion")
            .with_consumable(Consumable::Heal { amount: 4 }),
        ItemLocation::Ground(Position::new(2, 2)),
    );

    exec(&mut fixture, Action::Pickup(PickupAction::new(EntityId::PLAYER))).unwrap();

    assert!(
        fixture
            .state
            .entities
            .items
            .is_carried_by(potion, EntityId::PLAYER)
    );
    assert!(
        fixture
            .state
            .entities
            .player()
            .unwrap()
            .inventory
            .contains(potion)
    );
    assert!(fixture.log.contains_text("You picked up the Health Potion!"));
}

#[test]
fn pickup_with_a_full_inventory_is_impossible() {
    let mut fixture = fixture(&[]);
    {
        let player = fixture.state.entities.player_mut().unwrap();
        player.inventory = Inventory::new(1);
    }
    let filler = fixture.state.entities.items.spawn(
        Item::new('~', Rgb(207, 63, 255), "Confusion Scroll"),
        ItemLocation::Carried(EntityId::PLAYER),
    );
    fixture
        .state
        .entities
        .player_mut()
        .unwrap()
        .inventory
        .push(filler)
        .unwrap();
    fixture.state.entities.items.spawn(
        Item::new('!', Rgb(127, 0, 255), "Health Potion")
            .with_consumable(Consumable::Heal { amount: 4 }),
        ItemLocation::Ground(Position::new(2, 2)),
    );

    let error = exec(&mut fixture, Action::Pickup(PickupAction::new(EntityId::PLAYER))).unwrap_err();

    assert!(error.is_impossible());
    assert_eq!(error.reason(), "Your inventory is full.");
    assert_eq!(
        fixture.state.entities.player().unwrap().inventory.len(),
        1
    );
}

#[test]
fn healing_potion_heals_and_is_consumed() {
    let mut fixture = fixture(&[]);
    let potion = fixture.state.entities.items.spawn(
        Item::new('!', Rgb(127, 0, 255), "Health Potion")
            .with_consumable(Consumable::Heal { amount: 4 }),
        ItemLocation::Carried(EntityId::PLAYER),
    );
    fixture
        .state
        .entities
        .player_mut()
        .unwrap()
        .inventory
        .push(potion)
        .unwrap();

    // At full health the potion is refused and kept.
    let error = exec(
        &mut fixture,
        Action::UseItem(UseItemAction::new(EntityId::PLAYER, potion)),
    )
    .unwrap_err();
    assert!(error.is_impossible());
    assert_eq!(error.reason(), "Your health is already full.");
    assert!(
        fixture
            .state
            .entities
            .player()
            .unwrap()
            .inventory
            .contains(potion)
    );

    // Wounded, it heals and disappears.
    fixture
        .state
        .entities
        .player_mut()
        .unwrap()
        .stats
        .take_damage(6);
    exec(
        &mut fixture,
        Action::UseItem(UseItemAction::new(EntityId::PLAYER, potion)),
    )
    .unwrap();

    let player = fixture.state.entities.player().unwrap();
    assert_eq!(player.stats.hp(), 28);
    assert!(!player.inventory.contains(potion));
    assert!(fixture.state.entities.items.item(potion).is_none());
    assert!(
        fixture
            .log
            .contains_text("You consume the Health Potion, and recover 4 HP!")
    );
}

#[test]
fn lightning_scroll_strikes_the_nearest_enemy() {
    let mut fixture = fixture(&[]);
    let scroll = fixture.state.entities.items.spawn(
        Item::new('~', Rgb(255, 255, 0), "Lightning Scroll").with_consumable(
            Consumable::Lightning {
                damage: 20,
                maximum_range: 5,
            },
        ),
        ItemLocation::Carried(EntityId::PLAYER),
    );
    fixture
        .state
        .entities
        .player_mut()
        .unwrap()
        .inventory
        .push(scroll)
        .unwrap();

    exec(
        &mut fixture,
        Action::UseItem(UseItemAction::new(EntityId::PLAYER, scroll)),
    )
    .unwrap();

    let orc = fixture.state.entities.actor(fixture.orc).unwrap();
    assert_eq!(orc.stats.hp(), 0);
    assert!(orc.ai.is_none());
    assert!(
        fixture.log.contains_text(
            "A lightning bolt strikes the Orc with a loud thunder, for 20 damage!"
        )
    );
    assert!(fixture.state.entities.items.item(scroll).is_none());
}

#[test]
fn lightning_scroll_with_no_enemy_in_range_is_impossible() {
    let mut fixture = fixture(&[]);
    // Push the orc out of the 2-tile range.
    fixture
        .state
        .entities
        .actor_mut(fixture.orc)
        .unwrap()
        .position = Position::new(8, 8);
    let scroll = fixture.state.entities.items.spawn(
        Item::new('~', Rgb(255, 255, 0), "Lightning Scroll").with_consumable(
            Consumable::Lightning {
                damage: 20,
                maximum_range: 2,
            },
        ),
        ItemLocation::Carried(EntityId::PLAYER),
    );
    fixture
        .state
        .entities
        .player_mut()
        .unwrap()
        .inventory
        .push(scroll)
        .unwrap();

    let error = exec(
        &mut fixture,
        Action::UseItem(UseItemAction::new(EntityId::PLAYER, scroll)),
    )
    .unwrap_err();

    assert!(error.is_impossible());
    assert_eq!(error.reason(), "No enemy is close enough to strike.");
    assert!(fixture.state.entities.items.item(scroll).is_some());
}

#[test]
fn equip_toggles_and_drop_unequips_first() {
    let mut fixture = fixture(&[]);
    let sword = fixture.sword;

    // Toggling the equipped sword takes it off.
    exec(
        &mut fixture,
        Action::Equip(EquipAction::new(EntityId::PLAYER, sword)),
    )
    .unwrap();
    assert!(fixture.log.contains_text("You remove the Sword."));
    assert!(
        !fixture
            .state
            .entities
            .player()
            .unwrap()
            .equipment
            .is_equipped(sword)
    );

    // Toggling again puts it back on.
    exec(
        &mut fixture,
        Action::Equip(EquipAction::new(EntityId::PLAYER, sword)),
    )
    .unwrap();
    assert!(fixture.log.contains_text("You equip the Sword."));

    // Dropping while equipped unequips, then lands on the actor's tile.
    exec(
        &mut fixture,
        Action::Drop(DropItemAction::new(EntityId::PLAYER, sword)),
    )
    .unwrap();
    assert!(fixture.log.contains_text("You dropped the Sword."));
    let player = fixture.state.entities.player().unwrap();
    assert!(!player.equipment.is_equipped(sword));
    assert_eq!(
        fixture.state.entities.items.location(sword),
        Some(ItemLocation::Ground(Position::new(2, 2)))
    );
}

#[test]
fn descending_requires_standing_on_the_stairs() {
    let mut fixture = fixture(&[]);
    // (2,2) → (5,5) is three diagonal steps, exactly the turn budget.
    for _ in 0..3 {
        exec(
            &mut fixture,
            Action::Bump(BumpAction::new(EntityId::PLAYER, Direction::NorthEast)),
        )
        .unwrap();
    }
    assert_eq!(
        fixture.state.entities.player().unwrap().position,
        Position::new(5, 5)
    );

    exec(
        &mut fixture,
        Action::TakeStairs(TakeStairsAction::new(EntityId::PLAYER)),
    )
    .unwrap();

    assert_eq!(fixture.floors.floor, 1);
    assert!(fixture.log.contains_text("You descend the staircase."));
}

#[test]
fn begin_turn_refills_the_action_budget() {
    let mut fixture = fixture(&[]);
    for _ in 0..3 {
        exec(
            &mut fixture,
            Action::Bump(BumpAction::new(EntityId::PLAYER, Direction::North)),
        )
        .unwrap();
    }
    assert_eq!(
        fixture
            .state
            .entities
            .player()
            .unwrap()
            .stats
            .actions_remaining(),
        0
    );

    let mut engine = GameEngine::new(&mut fixture.state);
    engine.begin_turn(EntityId::PLAYER).unwrap();
    assert_eq!(
        fixture
            .state
            .entities
            .player()
            .unwrap()
            .stats
            .actions_remaining(),
        3
    );
}

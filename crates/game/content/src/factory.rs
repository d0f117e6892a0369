//! Spawn factory: materializes templates into game state.

use delve_core::{
    ActorState, EntityId, Equipment, GameState, Inventory, Item, ItemId, ItemLocation, Position,
    Progression, RenderOrder, StatBlock,
};

use crate::catalog::ActorTemplate;

/// Materializes catalog templates into actors and items.
pub struct ContentFactory;

impl ContentFactory {
    /// Spawn the player from a template. Always uses the reserved player id.
    pub fn spawn_player(
        state: &mut GameState,
        template: &ActorTemplate,
        position: Position,
    ) -> EntityId {
        Self::spawn_at(state, template, EntityId::PLAYER, position)
    }

    /// Spawn a monster from a template with a freshly allocated id.
    pub fn spawn_npc(
        state: &mut GameState,
        template: &ActorTemplate,
        position: Position,
    ) -> EntityId {
        let id = state.entities.allocate_actor_id();
        Self::spawn_at(state, template, id, position)
    }

    /// Place a ground item on the map.
    pub fn place_item(state: &mut GameState, item: Item, position: Position) -> ItemId {
        state.entities.items.spawn(item, ItemLocation::Ground(position))
    }

    fn spawn_at(
        state: &mut GameState,
        template: &ActorTemplate,
        id: EntityId,
        position: Position,
    ) -> EntityId {
        let stats = StatBlock::builder()
            .hp(template.hp)
            .base_defense(template.base_defense)
            .abilities(template.abilities.to_scores())
            .build();

        let mut actor = ActorState {
            id,
            position,
            glyph: template.glyph,
            color: template.color,
            name: template.name.clone(),
            render_order: RenderOrder::Actor,
            blocks_movement: true,
            ai: template.ai,
            stats,
            inventory: Inventory::new(template.inventory_capacity),
            equipment: Equipment::empty(),
            progression: Progression::new(template.xp_given),
        };

        // Starting gear goes straight into the matching slot; it is carried
        // by the actor but takes no inventory room.
        for gear in [template.weapon.as_ref(), template.armor.as_ref()]
            .into_iter()
            .flatten()
        {
            let Some(equippable) = gear.equippable else {
                continue;
            };
            let item_id = state
                .entities
                .items
                .spawn(gear.clone(), ItemLocation::Carried(id));
            actor.equipment.equip(equippable.slot, item_id);
        }

        state.entities.add_actor(actor);
        id
    }
}

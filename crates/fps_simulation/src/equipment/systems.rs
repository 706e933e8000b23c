//! Equipment system implementations
//!
//! # Systems
//! - `process_acquire_weapon`: подбор оружия
//! - `switch_weapon_on_scroll`: колесо мыши двигает курсор loadout

use bevy::prelude::*;

use crate::{
    combat::WeaponStats,
    equipment::{components::*, events::*},
    input::PlayerInput,
    log, log_error, log_warning,
};

// ============================================================================
// Weapon Acquire
// ============================================================================

/// Process acquire weapon events
pub fn process_acquire_weapon(
    mut events: EventReader<AcquireWeapon>,
    mut holders: Query<(
        &mut Loadout,
        &mut ActiveWeapon,
        &mut Attachment,
        &mut WeaponAttachments,
    )>,
) {
    for event in events.read() {
        let Ok((mut loadout, mut active, mut attachment, mut attachments)) =
            holders.get_mut(event.entity)
        else {
            log_error(&format!("Entity {:?} missing Loadout", event.entity));
            continue;
        };

        loadout.push(event.weapon.clone());
        active.adopt(&event.weapon);
        attachment.prefab_path = event.weapon.model.clone();

        if let Some(visible) = event.weapon.category.attachments_on_acquire() {
            attachments.visible = visible;
        }

        log(&format!(
            "🔫 Acquired {} ({:?}), loadout size {}",
            event.weapon.name,
            event.weapon.category,
            loadout.len()
        ));
    }
}

// ============================================================================
// Weapon Switch
// ============================================================================

/// System: scroll → сдвиг курсора loadout (clamp, без wrap)
///
/// Каждый сдвиг: stats + model, правило видимости attachments, IK anchors.
pub fn switch_weapon_on_scroll(
    mut players: Query<(
        Entity,
        &PlayerInput,
        &mut Loadout,
        &mut ActiveWeapon,
        &mut Attachment,
        &mut WeaponAttachments,
        &mut HandIkTargets,
    )>,
    mut switched: EventWriter<WeaponSwitched>,
) {
    for (entity, input, mut loadout, mut active, mut attachment, mut attachments, mut ik) in
        players.iter_mut()
    {
        let Some(index) = loadout.scroll_target(input.scroll) else {
            continue;
        };

        let Some(weapon) = loadout.select(index) else {
            continue;
        };

        active.adopt(weapon);
        attachment.prefab_path = weapon.model.clone();

        if let Some(visible) = weapon.category.attachments_on_switch() {
            attachments.visible = visible;
        }

        retarget_hand_ik(&mut ik, weapon);

        log(&format!("🔄 Weapon switch → {} ({})", index, weapon.name));
        switched.write(WeaponSwitched { entity, index });
    }
}

/// Оба anchor'а или ничего: при отсутствии любого target остаются старые
fn retarget_hand_ik(ik: &mut HandIkTargets, weapon: &WeaponStats) {
    let (Some(left), Some(right)) = (&weapon.left_hand_target, &weapon.right_hand_target) else {
        log_warning(&format!("IK targets not found for weapon {}", weapon.name));
        return;
    };

    ik.left = Some(left.clone());
    ik.right = Some(right.clone());
}

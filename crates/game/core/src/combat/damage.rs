//! Damage prediction against a [`Defence`].

use crate::stats::Defence;

/// Damage type for resistances and damage calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    /// Reduced by physical resist.
    Physical,
    /// Physical, ignoring the first [`Defence::PIERCE_POINTS`] of resist.
    Piercing,
    /// Reduced by magical resist.
    Magical,
    /// Ignores all resistance and corrosion.
    Typeless,
}

/// Amount left after a resist percentage absorbs its share.
#[inline]
fn absorb(amount: u32, resist: u8) -> u32 {
    amount - amount * resist as u32 / 100
}

/// Damage a defender would take from an attack.
///
/// # Formula
///
/// ```text
/// typeless: output + burn
/// otherwise:
///     main   = output - output * resist(type) / 100
///     bleed  = burn   - burn   * resist(magical) / 100
///     damage = main + bleed
///     if damage > 0: damage += corrosion
/// ```
///
/// The absorbed share rounds down, so odd amounts favour the attacker
/// (9 at 50% resist deals 5). A cursed defence has no resist at all.
pub fn predict_damage_taken(
    defence: &Defence,
    output: u32,
    damage_type: DamageType,
    burn_stack: u8,
) -> u32 {
    let burn = burn_stack as u32;
    if damage_type == DamageType::Typeless {
        return output + burn;
    }
    if output + burn == 0 {
        return 0;
    }

    let main = absorb(output, defence.effective_resist(damage_type));
    let bleed = absorb(burn, defence.effective_resist(DamageType::Magical));
    let damage = main + bleed;
    if damage > 0 {
        damage + defence.corrosion() as u32
    } else {
        0
    }
}

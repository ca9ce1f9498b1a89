//! Text rendering of the HUD snapshot.

use singularity_core::state::HudView;

/// One status line: vitals, magazine, score, wave and active boosts.
pub fn format_hud(hud: &HudView) -> String {
    let ammo = if hud.reloading {
        "RELOADING".to_string()
    } else {
        format!("{}/{}", hud.ammo, hud.max_ammo)
    };

    let mut line = format!(
        "HP {:.0}/{:.0} | SH {:.0}/{:.0} | AMMO {} | SCORE {} | WAVE {} | LEFT {}",
        hud.health,
        hud.max_health,
        hud.shield,
        hud.max_shield,
        ammo,
        hud.score,
        hud.wave,
        hud.enemies_left,
    );
    if let Some(secs) = hud.damage_boost {
        line.push_str(&format!(" | DMG {secs:.1}s"));
    }
    if let Some(secs) = hud.speed_boost {
        line.push_str(&format!(" | SPD {secs:.1}s"));
    }
    line
}

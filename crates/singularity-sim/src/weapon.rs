//! Player weapon state: magazine, fire cooldown, reload timer and recoil.
//!
//! Every delayed effect is a countdown decremented in `update`, so nothing
//! fires after the weapon is gone.

use singularity_core::config::WeaponConfig;
use singularity_core::constants::RECOIL_RECOVERY_PER_SEC;

#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub ammo: u32,
    pub max_ammo: u32,
    /// Seconds until the next shot is allowed.
    pub cooldown_remaining: f32,
    /// Seconds until the magazine refills, while a reload is running.
    pub reload_remaining: Option<f32>,
    /// Current upward camera kick (radians), recovering over time.
    pub recoil: f32,
}

impl Weapon {
    pub fn new(max_ammo: u32) -> Self {
        Self {
            ammo: max_ammo,
            max_ammo,
            cooldown_remaining: 0.0,
            reload_remaining: None,
            recoil: 0.0,
        }
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_remaining.is_some()
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown_remaining <= 0.0 && self.ammo > 0 && !self.is_reloading()
    }

    /// Spend one round. Returns false, changing nothing, when the cooldown is
    /// running, the magazine is empty or a reload is in progress.
    /// Emptying the magazine starts the reload timer.
    pub fn try_fire(&mut self, config: &WeaponConfig) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.ammo -= 1;
        self.cooldown_remaining = config.fire_cooldown_secs;
        if self.ammo == 0 {
            self.reload_remaining = Some(config.reload_delay_secs);
        }
        true
    }

    /// Start a reload by hand. Ignored when full or already reloading.
    pub fn start_reload(&mut self, delay_secs: f32) -> bool {
        if self.is_reloading() || self.ammo >= self.max_ammo {
            return false;
        }
        self.reload_remaining = Some(delay_secs);
        true
    }

    pub fn kick(&mut self, amount: f32) {
        self.recoil += amount;
    }

    /// Count timers down. Returns true on the frame the reload completes.
    pub fn update(&mut self, dt: f32) -> bool {
        self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        self.recoil = (self.recoil - RECOIL_RECOVERY_PER_SEC * dt).max(0.0);

        let Some(remaining) = self.reload_remaining else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.ammo = self.max_ammo;
            self.reload_remaining = None;
            true
        } else {
            self.reload_remaining = Some(remaining);
            false
        }
    }
}

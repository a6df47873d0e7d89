//! Cosmetic effect queue: fragment bursts and ambient steam
//!
//! Nothing here feeds back into gameplay; a frontend that skips a frame of
//! effect updates loses nothing but motion. Fragments are full 3D points
//! (y up) so death bursts can arc and bounce off the ground.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{
    FRAGMENT_GRAVITY, FRAGMENT_LIFETIME, FRAGMENT_RESTITUTION, MAX_FRAGMENTS, STEAM_CEILING,
};

/// A short-lived burst fragment
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Ticks remaining; removed at 0
    pub life: u32,
    /// Packed RGB for the renderer
    pub color: u32,
}

/// A looping steam column; never expires
#[derive(Debug, Clone, Copy)]
pub struct SteamEmitter {
    pub pos: Vec3,
    pub rise_speed: f32,
    /// Phase offset so neighboring columns don't pulse in unison
    pub phase: f32,
    pub base_height: f32,
    /// Current scale pulse, written each tick for the renderer
    pub scale: f32,
}

/// All live cosmetic effects
#[derive(Debug, Clone, Default)]
pub struct EffectQueue {
    pub fragments: Vec<Fragment>,
    pub steam: Vec<SteamEmitter>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` fragments at `pos` with randomized scatter velocities.
    /// When the fragment cap is hit the oldest fragments make room.
    pub fn burst(&mut self, pos: Vec3, color: u32, count: u32, rng: &mut Pcg32) {
        for _ in 0..count {
            if self.fragments.len() >= MAX_FRAGMENTS {
                self.fragments.remove(0);
            }
            let vel = Vec3::new(
                (rng.random::<f32>() - 0.5) * 10.0,
                (rng.random::<f32>() - 0.5) * 10.0 + 5.0,
                (rng.random::<f32>() - 0.5) * 10.0,
            );
            self.fragments.push(Fragment {
                pos,
                vel,
                life: FRAGMENT_LIFETIME,
                color,
            });
        }
    }

    pub fn register_steam(&mut self, pos: Vec3, rise_speed: f32, phase: f32) {
        self.steam.push(SteamEmitter {
            pos,
            rise_speed,
            phase,
            base_height: pos.y,
            scale: 1.0,
        });
    }

    /// Age fragments and advance steam columns by one tick.
    pub fn update(&mut self, sim_seconds: f32) {
        for frag in self.fragments.iter_mut() {
            frag.pos += frag.vel;
            frag.vel.y -= FRAGMENT_GRAVITY;
            if frag.pos.y < 0.0 {
                frag.pos.y = 0.0;
                frag.vel.y *= -FRAGMENT_RESTITUTION;
            }
            frag.life -= 1;
        }
        self.fragments.retain(|f| f.life > 0);

        for emitter in self.steam.iter_mut() {
            emitter.pos.y += emitter.rise_speed;
            emitter.scale = 1.0 + (sim_seconds + emitter.phase).sin() * 0.5;
            if emitter.pos.y > STEAM_CEILING {
                emitter.pos.y = emitter.base_height;
            }
        }
    }
}

//! Animation state selection
//!
//! Movement picks a directional run clip from the velocity, checked in the
//! fixed order `+x, +y, -x, -y`, falling back to idle. An attack locks the
//! animator on the attack clip until that clip plays through once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Named animation clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clip {
    Idle,
    RunUp,
    RunDown,
    RunLeft,
    RunRight,
    Attack,
}

impl Clip {
    pub fn as_str(&self) -> &'static str {
        match self {
            Clip::Idle => "idle",
            Clip::RunUp => "run_b",
            Clip::RunDown => "run_f",
            Clip::RunLeft => "run_l",
            Clip::RunRight => "run_r",
            Clip::Attack => "f_attack",
        }
    }
}

/// Movement-driven clip. First matching test wins: `+x, +y, -x, -y`, else idle.
pub fn select_clip(vel: Vec2) -> Clip {
    if vel.x > 0.0 {
        Clip::RunRight
    } else if vel.y > 0.0 {
        Clip::RunDown
    } else if vel.x < 0.0 {
        Clip::RunLeft
    } else if vel.y < 0.0 {
        Clip::RunUp
    } else {
        Clip::Idle
    }
}

/// Playback parameters of one clip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipSpec {
    /// Frames advanced per rendered frame
    pub speed: f32,
    /// Frames in the clip
    pub frames: u32,
}

/// Clip table for one kind of actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipSet {
    pub idle: ClipSpec,
    /// Shared by all four directions
    pub run: ClipSpec,
    /// `None` for actors that cannot attack
    pub attack: Option<ClipSpec>,
}

impl ClipSet {
    pub fn spec(&self, clip: Clip) -> Option<ClipSpec> {
        match clip {
            Clip::Idle => Some(self.idle),
            Clip::Attack => self.attack,
            _ => Some(self.run),
        }
    }
}

/// Active clip plus playback position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animator {
    clips: ClipSet,
    clip: Clip,
    spec: ClipSpec,
    looping: bool,
    /// Fractional frame position
    frame: f32,
    attacking: bool,
}

impl Animator {
    pub fn new(clips: ClipSet) -> Self {
        Self {
            clips,
            clip: Clip::Idle,
            spec: clips.idle,
            looping: true,
            frame: 0.0,
            attacking: false,
        }
    }

    pub fn clip(&self) -> Clip {
        self.clip
    }

    pub fn speed(&self) -> f32 {
        self.spec.speed
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Frame index to draw
    pub fn current_frame(&self) -> u32 {
        let frames = self.spec.frames.max(1);
        if self.looping {
            self.frame as u32 % frames
        } else {
            (self.frame as u32).min(frames - 1)
        }
    }

    /// Switch to a looping clip. Re-selecting the active clip keeps its
    /// playback position. Returns whether the clip changed.
    fn play_looping(&mut self, clip: Clip) -> bool {
        if self.clip == clip {
            return false;
        }
        let Some(spec) = self.clips.spec(clip) else {
            return false;
        };
        self.clip = clip;
        self.spec = spec;
        self.looping = true;
        self.frame = 0.0;
        true
    }

    /// React to the post-drag velocity. Ignored while attacking.
    pub fn follow_velocity(&mut self, vel: Vec2) -> bool {
        if self.attacking {
            return false;
        }
        self.play_looping(select_clip(vel))
    }

    /// Start the attack clip from frame 0. Returns false if this actor has no
    /// attack clip or is already attacking.
    pub fn start_attack(&mut self) -> bool {
        if self.attacking {
            return false;
        }
        let Some(spec) = self.clips.attack else {
            return false;
        };
        self.attacking = true;
        self.clip = Clip::Attack;
        self.spec = spec;
        self.looping = false;
        self.frame = 0.0;
        true
    }

    /// Advance one rendered frame. Returns true when an attack just finished;
    /// the animator is back on idle by then.
    pub fn advance(&mut self) -> bool {
        self.frame += self.spec.speed;
        if self.looping {
            let frames = self.spec.frames.max(1) as f32;
            if self.frame >= frames {
                self.frame %= frames;
            }
            return false;
        }

        if self.frame >= self.spec.frames as f32 {
            self.attacking = false;
            self.play_looping(Clip::Idle);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clips() -> ClipSet {
        ClipSet {
            idle: ClipSpec {
                speed: 0.05,
                frames: 4,
            },
            run: ClipSpec {
                speed: 0.25,
                frames: 8,
            },
            attack: Some(ClipSpec {
                speed: 0.5,
                frames: 2,
            }),
        }
    }

    #[test]
    fn test_select_clip_priority() {
        assert_eq!(select_clip(Vec2::ZERO), Clip::Idle);
        assert_eq!(select_clip(Vec2::new(1.0, 0.0)), Clip::RunRight);
        assert_eq!(select_clip(Vec2::new(0.0, 1.0)), Clip::RunDown);
        assert_eq!(select_clip(Vec2::new(-1.0, 0.0)), Clip::RunLeft);
        assert_eq!(select_clip(Vec2::new(0.0, -1.0)), Clip::RunUp);
        // Diagonals: first matching test wins
        assert_eq!(select_clip(Vec2::new(1.0, 1.0)), Clip::RunRight);
        assert_eq!(select_clip(Vec2::new(-1.0, 1.0)), Clip::RunDown);
        assert_eq!(select_clip(Vec2::new(-1.0, -1.0)), Clip::RunLeft);
    }

    #[test]
    fn test_same_clip_keeps_position() {
        let mut anim = Animator::new(clips());
        assert!(anim.follow_velocity(Vec2::new(1.0, 0.0)));
        for _ in 0..10 {
            anim.advance();
        }
        assert_eq!(anim.current_frame(), 2);
        assert!(!anim.follow_velocity(Vec2::new(3.0, 0.0)));
        assert_eq!(anim.current_frame(), 2);
        assert!(anim.looping());
    }

    #[test]
    fn test_attack_locks_until_complete() {
        let mut anim = Animator::new(clips());
        assert!(anim.start_attack());
        assert_eq!(anim.clip(), Clip::Attack);
        assert!(!anim.looping());
        assert!(!anim.start_attack());

        // Movement cannot interrupt
        assert!(!anim.follow_velocity(Vec2::new(1.0, 0.0)));
        assert_eq!(anim.clip(), Clip::Attack);

        // 2 frames at 0.5 per render frame
        assert!(!anim.advance());
        assert!(!anim.advance());
        assert!(!anim.advance());
        assert!(anim.advance());
        assert!(!anim.is_attacking());
        assert_eq!(anim.clip(), Clip::Idle);
    }

    #[test]
    fn test_no_attack_clip() {
        let mut set = clips();
        set.attack = None;
        let mut anim = Animator::new(set);
        assert!(!anim.start_attack());
        assert!(!anim.is_attacking());
        assert_eq!(anim.clip(), Clip::Idle);
    }

    #[test]
    fn test_looping_clip_wraps() {
        let mut anim = Animator::new(clips());
        // idle: 4 frames at 0.05 -> wraps after 80 render frames
        for _ in 0..100 {
            anim.advance();
        }
        assert!(anim.current_frame() < 4);
    }
}

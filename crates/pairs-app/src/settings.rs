/// Sound and music preferences. The core never interprets these; they
/// ride along to whatever audio backend the host wires up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    pub sound_on: bool,
    pub music_on: bool,
    sound_volume: f32,
    music_volume: f32,
}

impl AudioSettings {
    pub fn new(sound_on: bool, music_on: bool, sound_volume: f32, music_volume: f32) -> Self {
        Self {
            sound_on,
            music_on,
            sound_volume: sound_volume.clamp(0.0, 1.0),
            music_volume: music_volume.clamp(0.0, 1.0),
        }
    }

    pub fn sound_volume(&self) -> f32 {
        self.sound_volume
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn set_sound_volume(&mut self, volume: f32) {
        self.sound_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self::new(true, true, 0.5, 0.5)
    }
}

/// Commands from the interactive loop to the audio callback
#[derive(Clone, Debug)]
pub enum AudioCommand {
    /// Queue a finished waveform for playback
    Play(Vec<f32>),
    /// Drop everything still waiting in the queue
    Clear,
}

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{Receiver, TryRecvError};
use std::collections::VecDeque;

use crate::error::AudioError;
use crate::messages::AudioCommand;

/// Owns the cpal output stream and plays queued waveforms
///
/// Commands are drained inside the output callback, so playback never
/// blocks the interactive thread. Buffers queue back to back and the
/// stream emits silence when nothing is pending.
pub struct AudioEngine {
    sample_rate: u32,
    _stream: cpal::Stream,
}

impl AudioEngine {
    pub fn new(cmd_rx: Receiver<AudioCommand>) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let supported_config = device.default_output_config()?;
        let sample_rate = supported_config.sample_rate().0;

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &supported_config.into(), cmd_rx)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &supported_config.into(), cmd_rx)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &supported_config.into(), cmd_rx)?
            }
            format => return Err(AudioError::UnsupportedSampleFormat(format)),
        };

        stream.play()?;

        Ok(Self {
            sample_rate,
            _stream: stream,
        })
    }

    /// Rate the output device actually runs at
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn build_stream<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        cmd_rx: Receiver<AudioCommand>,
    ) -> Result<cpal::Stream, cpal::BuildStreamError>
    where
        T: cpal::SizedSample + cpal::FromSample<f32>,
    {
        let channels = config.channels as usize;
        let mut pending: VecDeque<f32> = VecDeque::new();

        device.build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                loop {
                    match cmd_rx.try_recv() {
                        Ok(AudioCommand::Play(samples)) => pending.extend(samples),
                        Ok(AudioCommand::Clear) => pending.clear(),
                        Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                    }
                }

                // Duplicate the mono queue across all output channels
                for frame in data.chunks_mut(channels) {
                    let sample = pending.pop_front().unwrap_or(0.0);
                    let converted = T::from_sample(sample);
                    for channel_sample in frame.iter_mut() {
                        *channel_sample = converted;
                    }
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )
    }
}

use crossbeam_channel::{bounded, Sender};
use std::io::{self, Write};

use crate::audio::{AudioEngine, MorseKeyer};
use crate::config::{AppSettings, TrainingSettings};
use crate::dictionary::WordPool;
use crate::error::AudioError;
use crate::messages::AudioCommand;
use crate::stats::StatsAnalysis;
use crate::trainer::TrainingSession;

/// Interactive command-line front end
pub struct App {
    keyer: MorseKeyer,
    training: TrainingSettings,
    cmd_tx: Sender<AudioCommand>,
    engine: Option<AudioEngine>,
}

impl App {
    pub fn new(settings: AppSettings) -> Result<Self, AudioError> {
        let AppSettings { mut audio, training } = settings;

        // Bring up the playback side first so the keyer can match its rate
        let (cmd_tx, cmd_rx) = bounded::<AudioCommand>(64);
        let engine = match AudioEngine::new(cmd_rx) {
            Ok(engine) => Some(engine),
            Err(err) => {
                log::warn!("audio output unavailable: {err}");
                println!("note: audio output unavailable ({err}); running silent");
                None
            }
        };

        if let Some(engine) = &engine {
            if engine.sample_rate() != audio.sample_rate {
                log::info!(
                    "output device runs at {} Hz; synthesizing at that rate",
                    engine.sample_rate()
                );
                audio.sample_rate = engine.sample_rate();
            }
        }

        let keyer = MorseKeyer::new(&audio)?;
        log::debug!(
            "keyer ready: {} Hz tone at {} Hz, {} s unit",
            audio.tone_frequency_hz,
            keyer.sample_rate(),
            audio.unit_seconds
        );

        Ok(Self {
            keyer,
            training,
            cmd_tx,
            engine,
        })
    }

    pub fn run(&self) -> io::Result<()> {
        println!("Morse code trainer. Audio plays through the default output device.");
        loop {
            println!();
            println!("1) play text as Morse");
            println!("2) listening drill");
            println!("q) quit");
            let Some(line) = read_line("> ")? else { break };
            match line.trim() {
                "1" => self.run_text_mode()?,
                "2" => self.run_training_mode()?,
                "q" | "quit" | "exit" => break,
                "" => {}
                other => println!("unknown choice: {other}"),
            }
        }
        Ok(())
    }

    fn run_text_mode(&self) -> io::Result<()> {
        println!("Type a line to hear it as Morse. Ctrl-D returns to the menu.");
        loop {
            let Some(line) = read_line("text> ")? else { break };
            let waveform = self.keyer.generate(&line);
            if waveform.is_empty() {
                println!("nothing to play");
                continue;
            }
            log::debug!("queueing {} samples", waveform.len());
            self.play(waveform);
        }
        self.clear_playback();
        log::trace!("text mode ended");
        Ok(())
    }

    fn run_training_mode(&self) -> io::Result<()> {
        let pool = match WordPool::load(&self.training.dictionary_path, &self.training.ignore_chars)
        {
            Ok(pool) => pool,
            Err(err) => {
                log::error!("cannot start training: {err}");
                println!("cannot start training: {err}");
                return Ok(());
            }
        };
        log::info!(
            "{} words loaded from {}",
            pool.word_count(),
            self.training.dictionary_path.display()
        );

        let mut session = TrainingSession::new(pool, self.training.clone());
        println!("Transcribe what you hear. Enter grades the answer; Ctrl-D ends the session.");

        loop {
            let challenge = match session.next_challenge() {
                Ok(challenge) => challenge,
                Err(err) => {
                    println!("cannot draw a challenge: {err}");
                    break;
                }
            };
            self.play(self.keyer.generate(&challenge));

            let Some(answer) = read_line("heard> ")? else { break };
            if session.grade(&challenge, &answer) {
                println!("correct");
            } else {
                println!("miss: that was {challenge:?}");
            }
        }

        self.clear_playback();
        print_summary(&session.stats().analyze());
        Ok(())
    }

    fn play(&self, waveform: Vec<f32>) {
        if self.engine.is_none() {
            log::debug!("audio disabled; dropping {} samples", waveform.len());
            return;
        }
        if self.cmd_tx.send(AudioCommand::Play(waveform)).is_err() {
            log::warn!("audio stream went away; playback request dropped");
        }
    }

    fn clear_playback(&self) {
        if self.engine.is_some() {
            let _ = self.cmd_tx.send(AudioCommand::Clear);
        }
    }
}

/// Prompt and read one line; `None` means end of input (Ctrl-D)
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_summary(analysis: &StatsAnalysis) {
    if analysis.total_rounds == 0 {
        return;
    }
    println!(
        "session: {}/{} correct ({:.0}%)",
        analysis.hits, analysis.total_rounds, analysis.accuracy
    );

    let missed: Vec<_> = analysis
        .char_error_rates
        .iter()
        .filter(|&&(_, rate, _)| rate > 0.0)
        .take(5)
        .collect();
    if !missed.is_empty() {
        println!("most missed characters:");
        for &(ch, rate, total) in missed {
            println!("  {ch}  missed {rate:.0}% of {total} heard");
        }
    }
}

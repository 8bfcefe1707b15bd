//! Dedicated audio output thread.
//!
//! `rodio::OutputStream` is `!Send` on some platforms. Rather than using
//! `unsafe impl Send/Sync`, we confine it to a single OS thread and
//! communicate via channels. [`AudioThreadHandle`] is the `Send + Sync` proxy.

use std::sync::mpsc;
use std::thread;

use crate::error::VoiceError;
use crate::playback::AudioPlayback;

/// A command sent to the audio thread.
enum AudioCommand {
    /// Replace the current clip with new samples.
    Play {
        samples: Vec<f32>,
        sample_rate: u32,
        channels: u16,
    },

    /// Stop any active playback immediately.
    Stop,

    /// Shut down the audio thread, releasing the device.
    Shutdown,
}

/// `Send + Sync` handle to the audio thread.
///
/// Commands are fire-and-forget: only [`spawn`](Self::spawn) waits for the
/// thread. Sink failures are logged on the audio thread.
pub struct AudioThreadHandle {
    cmd_tx: mpsc::Sender<AudioCommand>,
    thread: Option<thread::JoinHandle<()>>,
}

impl AudioThreadHandle {
    /// Spawn the audio thread, open the output device on it and return the
    /// handle.
    ///
    /// Device errors are propagated back via a one-shot init channel.
    pub fn spawn() -> Result<Self, VoiceError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<AudioCommand>();
        let (init_tx, init_rx) = mpsc::channel::<Result<(), VoiceError>>();

        let thread = thread::Builder::new()
            .name("zenboard-audio".into())
            .spawn(move || Self::run(&cmd_rx, &init_tx))
            .map_err(|e| VoiceError::AudioThreadSpawn(e.to_string()))?;

        init_rx.recv().map_err(|_| VoiceError::AudioThreadDied)??;

        Ok(Self {
            cmd_tx,
            thread: Some(thread),
        })
    }

    /// Queue decoded samples, replacing the previous clip.
    ///
    /// Fails only when the audio thread has exited.
    pub fn play(&self, samples: Vec<f32>, sample_rate: u32, channels: u16) -> Result<(), VoiceError> {
        self.cmd_tx
            .send(AudioCommand::Play {
                samples,
                sample_rate,
                channels,
            })
            .map_err(|_| VoiceError::AudioThreadDied)
    }

    /// Stop any active playback immediately.
    pub fn stop(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Stop);
    }

    /// Body of the audio thread. Owns `AudioPlayback` for its whole lifetime.
    fn run(cmd_rx: &mpsc::Receiver<AudioCommand>, init_tx: &mpsc::Sender<Result<(), VoiceError>>) {
        let mut playback = match AudioPlayback::new() {
            Ok(p) => p,
            Err(e) => {
                let _ = init_tx.send(Err(e));
                return;
            }
        };

        if init_tx.send(Ok(())).is_err() {
            return;
        }

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                AudioCommand::Play {
                    samples,
                    sample_rate,
                    channels,
                } => {
                    if let Err(e) = playback.play(samples, sample_rate, channels) {
                        tracing::warn!(error = %e, "Audio playback failed");
                    }
                }
                AudioCommand::Stop => playback.stop(),
                AudioCommand::Shutdown => break,
            }
        }

        playback.stop();
        tracing::debug!("Audio thread shutting down");
    }
}

impl Drop for AudioThreadHandle {
    fn drop(&mut self) {
        // Best-effort shutdown; the thread may already be dead.
        let _ = self.cmd_tx.send(AudioCommand::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

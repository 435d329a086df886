//! Input sources
//!
//! A windowed front end maps held keys to [`TickInput`] flags each frame.
//! [`ScriptedInput`] replays a recorded sequence for headless runs and tests.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Per-frame input provider, polled once per rendered frame
pub trait InputSource {
    fn poll_input(&mut self) -> TickInput;
}

/// What a script yields once its recorded frames run out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptEnd {
    /// Keep returning empty input
    #[default]
    Idle,
    /// Return a single quit request, then idle
    Quit,
}

/// Replays a fixed list of inputs, one per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    end: ScriptEnd,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            end: ScriptEnd::Idle,
        }
    }

    /// Request quit after the last recorded frame
    pub fn then_quit(mut self) -> Self {
        self.end = ScriptEnd::Quit;
        self
    }

    /// Append `count` copies of `input`
    pub fn repeat(mut self, input: TickInput, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(input, count));
        self
    }

    /// Frames left before the script ends
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_input(&mut self) -> TickInput {
        if let Some(input) = self.frames.pop_front() {
            return input;
        }

        match self.end {
            ScriptEnd::Idle => TickInput::default(),
            ScriptEnd::Quit => {
                self.end = ScriptEnd::Idle;
                TickInput {
                    quit: true,
                    ..TickInput::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let fire = TickInput {
            fire: true,
            ..TickInput::default()
        };
        let thrust = TickInput {
            thrust: true,
            ..TickInput::default()
        };
        let mut script = ScriptedInput::new([fire, thrust]);

        assert_eq!(script.poll_input(), fire);
        assert_eq!(script.poll_input(), thrust);
        assert_eq!(script.remaining(), 0);
        assert_eq!(script.poll_input(), TickInput::default());
    }

    #[test]
    fn test_quit_once_after_script() {
        let turn = TickInput {
            turn_left: true,
            ..TickInput::default()
        };
        let mut script = ScriptedInput::default().repeat(turn, 2).then_quit();

        assert!(script.poll_input().turn_left);
        assert!(script.poll_input().turn_left);
        assert!(script.poll_input().quit);
        assert!(!script.poll_input().quit);
    }
}

use crate::model::ShimmerModel;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Instant;

/// Which key presses abort the animation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuitKeys {
    /// Ctrl-C, q, or Esc. Used when the shimmer is displayed on its own.
    Any,
    /// Ctrl-C only. Used while a background action is running.
    InterruptOnly,
}

/// Why the loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// The completion condition fired or the model stopped animating.
    Done,
    /// The user pressed one of the quit keys.
    Interrupted,
}

/// Restores the terminal on drop: raw mode off, cursor visible.
///
/// Acquired for the lifetime of an animation so that every exit path,
/// including early returns on I/O errors, leaves the terminal usable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Drives a [`ShimmerModel`]: owns the tick cadence, advances the model once
/// per tick, and writes each frame to its writer. The model itself never
/// sees a timer.
pub struct RenderLoop<W: Write> {
    out: W,
    quit_keys: QuitKeys,
}

impl<W: Write> RenderLoop<W> {
    pub fn new(out: W, quit_keys: QuitKeys) -> Self {
        Self { out, quit_keys }
    }

    /// Animate until `done` reports completion, the model stops animating,
    /// or the user presses a quit key. Draws an initial frame before the
    /// first tick so the text is visible immediately.
    pub fn run_until(
        &mut self,
        model: &mut ShimmerModel,
        mut done: impl FnMut() -> bool,
    ) -> io::Result<LoopExit> {
        model.init();
        self.draw(model)?;

        let interval = model.interval();
        let mut next_tick = Instant::now() + interval;
        loop {
            if !model.is_animating() || done() {
                return Ok(LoopExit::Done);
            }

            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if self.is_quit(&key) => return Ok(LoopExit::Interrupted),
                    // Not a quit key; go back to waiting out the tick
                    _ => continue,
                }
            }

            model.advance();
            self.draw(model)?;
            next_tick += interval;
        }
    }

    /// Stop the animation and leave a clean final line: the text rendered
    /// statically in its base color, followed by a newline.
    pub fn finish(&mut self, model: &mut ShimmerModel) -> io::Result<()> {
        model.set_loading(false);
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            Clear(ClearType::UntilNewLine),
            Print(model.view()),
            Print("\r\n"),
        )?;
        self.out.flush()
    }

    /// Overwrite the current line with the model's current frame.
    fn draw(&mut self, model: &ShimmerModel) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            Clear(ClearType::UntilNewLine),
            Print(model.view()),
        )?;
        self.out.flush()
    }

    fn is_quit(&self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if self.quit_keys == QuitKeys::Any && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            return true;
        }
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::model::ShimmerOptions;

    fn loading_model() -> ShimmerModel {
        let mut model = ShimmerModel::new("hi", Color::new(0, 215, 135), ShimmerOptions::default());
        model.init();
        model
    }

    #[test]
    fn test_draw_overwrites_the_current_line() {
        let mut buffer = Vec::new();
        let model = loading_model();
        RenderLoop::new(&mut buffer, QuitKeys::Any).draw(&model).unwrap();

        let frame = String::from_utf8(buffer).unwrap();
        assert!(frame.starts_with('\x1b'), "frame must start by repositioning");
        assert!(frame.contains(&model.view()));
        assert!(!frame.ends_with('\n'));
    }

    #[test]
    fn test_finish_leaves_a_static_line_and_newline() {
        let mut buffer = Vec::new();
        let mut model = loading_model();
        RenderLoop::new(&mut buffer, QuitKeys::Any).finish(&mut model).unwrap();

        assert!(!model.is_loading());
        assert!(!model.is_animating());
        let tail = String::from_utf8(buffer).unwrap();
        assert!(tail.contains(&model.view()));
        assert!(tail.ends_with("\r\n"));
    }

    #[test]
    fn test_quit_keys() {
        let standalone = RenderLoop::new(Vec::new(), QuitKeys::Any);
        let busy = RenderLoop::new(Vec::new(), QuitKeys::InterruptOnly);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert!(standalone.is_quit(&ctrl_c));
        assert!(standalone.is_quit(&q));
        assert!(standalone.is_quit(&esc));
        assert!(!standalone.is_quit(&other));

        assert!(busy.is_quit(&ctrl_c));
        assert!(!busy.is_quit(&q));
        assert!(!busy.is_quit(&esc));
    }
}

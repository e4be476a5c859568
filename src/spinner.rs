use crate::color::Color;
use crate::model::{ShimmerModel, ShimmerOptions};
use crate::render::{LoopExit, QuitKeys, RenderLoop, TerminalGuard};
use std::io;
use std::thread;

/// Errors that can occur while running a shimmer animation.
#[derive(thiserror::Error, Debug)]
pub enum ShimmerError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("spinner action panicked")]
    ActionPanicked,
}

/// Display shimmering text until the user presses Ctrl-C, q, or Esc.
///
/// This is a blocking call that owns the terminal for its duration.
///
/// # Example
///
/// ```no_run
/// shimmer::run("Loading", "#00D787").unwrap();
/// ```
pub fn run(text: &str, color: &str) -> Result<(), ShimmerError> {
    Spinner::new(text, color).run()
}

/// Like [`run`], with explicit options.
pub fn run_with(text: &str, color: &str, options: ShimmerOptions) -> Result<(), ShimmerError> {
    Spinner::new(text, color).options(options).run()
}

/// Builder for running a shimmer animation, optionally around a unit of
/// background work.
///
/// # Example
///
/// ```no_run
/// shimmer::Spinner::new("Installing", "#00D787")
///     .action(|| std::thread::sleep(std::time::Duration::from_secs(5)))
///     .run()
///     .unwrap();
/// ```
pub struct Spinner {
    text: String,
    color: Color,
    options: ShimmerOptions,
    action: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl Spinner {
    /// Create a spinner with the given text and base color. A color string
    /// that does not parse falls back to the default green.
    pub fn new(text: impl Into<String>, color: &str) -> Self {
        Self {
            text: text.into(),
            color: Color::parse(color),
            options: ShimmerOptions::default(),
            action: None,
        }
    }

    /// Replace the default animation options.
    pub fn options(mut self, options: ShimmerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a unit of work to run while the shimmer animates. The shimmer
    /// stops as soon as the work completes.
    pub fn action(mut self, action: impl FnOnce() + Send + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Run the animation. Blocks until the action completes (if one was
    /// set) or the user quits, then restores the terminal and leaves the
    /// text as a static colored line followed by a newline.
    pub fn run(mut self) -> Result<(), ShimmerError> {
        let mut model = ShimmerModel::new(self.text, self.color, self.options);
        let guard = TerminalGuard::acquire()?;

        match self.action.take() {
            Some(action) => {
                let worker = thread::spawn(action);
                let mut render = RenderLoop::new(io::stdout(), QuitKeys::InterruptOnly);
                let exit = render.run_until(&mut model, || worker.is_finished())?;
                render.finish(&mut model)?;
                drop(guard);
                // Only reap the worker when it actually finished; on an
                // interrupt it is left detached so quitting stays instant.
                if exit == LoopExit::Done {
                    worker.join().map_err(|_| ShimmerError::ActionPanicked)?;
                }
            }
            None => {
                let mut render = RenderLoop::new(io::stdout(), QuitKeys::Any);
                render.run_until(&mut model, || false)?;
                render.finish(&mut model)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_color_falls_back_to_default() {
        let spinner = Spinner::new("hi", "not a color");
        assert_eq!(spinner.color, Color::DEFAULT);
    }

    #[test]
    fn test_builder_carries_options_and_action() {
        let spinner = Spinner::new("hi", "#FFC000")
            .options(ShimmerOptions {
                wave_width: 12,
                ..ShimmerOptions::default()
            })
            .action(|| {});
        assert_eq!(spinner.options.wave_width, 12);
        assert!(spinner.action.is_some());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ShimmerError::ActionPanicked.to_string(),
            "spinner action panicked"
        );
    }
}

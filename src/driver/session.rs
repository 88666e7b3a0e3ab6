//! Event-driven simulation session

use super::input::{pixel_to_cell, InputEvent, Key, ScriptStep};
use super::render::Frame;
use crate::config::Settings;
use crate::game_of_life::Grid;
use anyhow::Result;

/// Owns the grid for one simulation run and applies input events to it the
/// way the interactive window loop does: Space steps, Escape/Quit stop, a
/// click toggles the cell under the pointer, and every rendered frame
/// advances once when auto-play is on.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    settings: Settings,
    frame: Frame,
    running: bool,
    iterations: u64,
    frames: u64,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let grid = Grid::new(settings.grid.width, settings.grid.height);
        Ok(Self::with_grid(settings, grid))
    }

    /// Start from an already seeded grid
    pub fn with_grid(settings: Settings, grid: Grid) -> Self {
        let frame = Frame::new(settings.display.window_width, settings.display.window_height);
        Self {
            grid,
            settings,
            frame,
            running: true,
            iterations: 0,
            frames: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Generations stepped by explicit Space presses
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(Key::Space) => {
                let stats = self.grid.advance();
                self.iterations += 1;
                log::debug!(
                    "step {} -> generation {} (population {})",
                    self.iterations,
                    stats.generation,
                    stats.population
                );
            }
            InputEvent::Key(Key::Escape) | InputEvent::Quit => {
                log::debug!("stopping after {} frames", self.frames);
                self.running = false;
            }
            InputEvent::Key(Key::Other) => {}
            InputEvent::MouseDown { x, y } => {
                let display = &self.settings.display;
                match pixel_to_cell(x, y, display.cell_size, self.grid.width(), self.grid.height())
                {
                    Some((cx, cy)) => {
                        let alive = self.grid.toggle(cx, cy);
                        log::debug!(
                            "click ({}, {}) toggled cell ({}, {}) -> {:?}",
                            x,
                            y,
                            cx,
                            cy,
                            alive
                        );
                    }
                    None => log::trace!("click ({}, {}) outside grid", x, y),
                }
            }
        }
    }

    /// Render the current generation, then advance once if auto-play is on
    pub fn frame(&mut self) -> &Frame {
        self.frame.render(&self.grid, &self.settings.display);
        self.frames += 1;
        if self.settings.simulation.auto_play {
            self.grid.advance();
        }
        &self.frame
    }

    /// Apply one script step
    pub fn apply(&mut self, step: ScriptStep) {
        match step {
            ScriptStep::Event(event) => self.handle_event(event),
            ScriptStep::Frame => {
                self.frame();
            }
        }
    }

    /// Feed script steps until the list ends or the session stops
    pub fn run_script<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = ScriptStep>,
    {
        for step in steps {
            if !self.running {
                break;
            }
            self.apply(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_settings() -> Settings {
        let mut settings = Settings::default();
        settings.simulation.auto_play = false;
        settings
    }

    #[test]
    fn test_click_toggles_cell() {
        let mut session = Session::new(manual_settings()).unwrap();

        session.handle_event(InputEvent::MouseDown { x: 15, y: 23 });
        assert!(session.grid().is_alive(1, 2));

        session.handle_event(InputEvent::MouseDown { x: 19, y: 29 });
        assert!(!session.grid().is_alive(1, 2));
    }

    #[test]
    fn test_click_outside_grid_is_ignored() {
        let mut session = Session::new(manual_settings()).unwrap();
        session.handle_event(InputEvent::MouseDown { x: 650, y: 100 });
        session.handle_event(InputEvent::MouseDown { x: -3, y: 100 });
        assert!(session.grid().is_empty());
    }

    #[test]
    fn test_space_steps_blinker() {
        let mut session = Session::new(manual_settings()).unwrap();
        for y in [11, 21, 31] {
            session.handle_event(InputEvent::MouseDown { x: 21, y });
        }

        session.handle_event(InputEvent::Key(Key::Space));
        assert_eq!(session.iterations(), 1);
        assert_eq!(session.grid().living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_escape_stops_script() {
        let mut session = Session::new(manual_settings()).unwrap();
        session.run_script([
            ScriptStep::Event(InputEvent::Key(Key::Escape)),
            ScriptStep::Event(InputEvent::Key(Key::Space)),
        ]);

        assert!(!session.is_running());
        assert_eq!(session.iterations(), 0);
    }

    #[test]
    fn test_frame_auto_advances() {
        let settings = Settings::default();
        let grid = Grid::with_alive_cells(50, 50, &[(5, 4), (5, 5), (5, 6)]);
        let mut session = Session::with_grid(settings, grid);

        let frame = session.frame();
        // The frame shows the generation before the auto-advance
        assert_eq!(frame.pixel(55, 45), Some(crate::config::Rgb(255, 255, 255)));
        assert_eq!(session.grid().generation(), 1);
        assert_eq!(session.grid().living_cells(), vec![(4, 5), (5, 5), (6, 5)]);

        session.run_script([ScriptStep::Frame, ScriptStep::Event(InputEvent::Quit)]);
        assert_eq!(session.frames(), 2);
        assert_eq!(session.grid().generation(), 2);
        assert!(!session.is_running());
    }

    #[test]
    fn test_manual_frame_does_not_advance() {
        let mut session = Session::new(manual_settings()).unwrap();
        session.frame();
        assert_eq!(session.grid().generation(), 0);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(Session::new(settings).is_err());
    }
}

//! Input events and pixel-to-cell translation

use crate::error::LifeError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Advance one generation
    Space,
    /// Leave the event loop
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Button press at a pixel position
    MouseDown { x: isize, y: isize },
    /// Window close request
    Quit,
}

/// One line of a driver script: either an input event or a request to
/// render a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Event(InputEvent),
    Frame,
}

/// Translate a pixel position into grid coordinates. Clicks outside the grid
/// area return `None`.
pub fn pixel_to_cell(
    px: isize,
    py: isize,
    cell_size: usize,
    width: usize,
    height: usize,
) -> Option<(isize, isize)> {
    let cell_size = isize::try_from(cell_size).ok().filter(|&size| size > 0)?;
    let grid_w = isize::try_from(width).ok()?.checked_mul(cell_size)?;
    let grid_h = isize::try_from(height).ok()?.checked_mul(cell_size)?;

    if px < 0 || px >= grid_w || py < 0 || py >= grid_h {
        return None;
    }
    Some((px / cell_size, py / cell_size))
}

impl FromStr for ScriptStep {
    type Err = LifeError;

    /// Accepted forms: `space`, `escape`, `quit`, `frame`, `click X Y`,
    /// `key NAME`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidEvent(line.trim().to_string());
        let mut words = line.split_whitespace();
        let head = words.next().ok_or_else(invalid)?.to_ascii_lowercase();

        let step = match head.as_str() {
            "space" => ScriptStep::Event(InputEvent::Key(Key::Space)),
            "escape" | "esc" => ScriptStep::Event(InputEvent::Key(Key::Escape)),
            "quit" => ScriptStep::Event(InputEvent::Quit),
            "frame" => ScriptStep::Frame,
            "key" => {
                let key = match words.next().map(str::to_ascii_lowercase).as_deref() {
                    Some("space") => Key::Space,
                    Some("escape") | Some("esc") => Key::Escape,
                    Some(_) => Key::Other,
                    None => return Err(invalid()),
                };
                ScriptStep::Event(InputEvent::Key(key))
            }
            "click" => {
                let mut coord = || -> Result<isize, LifeError> {
                    words.next().and_then(|w| w.parse().ok()).ok_or_else(invalid)
                };
                let x = coord()?;
                let y = coord()?;
                ScriptStep::Event(InputEvent::MouseDown { x, y })
            }
            _ => return Err(invalid()),
        };

        if words.next().is_some() {
            return Err(invalid());
        }
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_cell() {
        assert_eq!(pixel_to_cell(0, 0, 10, 50, 50), Some((0, 0)));
        assert_eq!(pixel_to_cell(19, 9, 10, 50, 50), Some((1, 0)));
        assert_eq!(pixel_to_cell(499, 499, 10, 50, 50), Some((49, 49)));
    }

    #[test]
    fn test_clicks_outside_grid_area() {
        // Inside an 800x600 window but right of the 500px grid
        assert_eq!(pixel_to_cell(500, 10, 10, 50, 50), None);
        assert_eq!(pixel_to_cell(10, 550, 10, 50, 50), None);
        assert_eq!(pixel_to_cell(-1, 10, 10, 50, 50), None);
        assert_eq!(pixel_to_cell(5, 5, 0, 50, 50), None);
    }

    #[test]
    fn test_parse_script_steps() {
        assert_eq!(
            "space".parse::<ScriptStep>().unwrap(),
            ScriptStep::Event(InputEvent::Key(Key::Space))
        );
        assert_eq!(
            "  click 15 23 ".parse::<ScriptStep>().unwrap(),
            ScriptStep::Event(InputEvent::MouseDown { x: 15, y: 23 })
        );
        assert_eq!(
            "key F1".parse::<ScriptStep>().unwrap(),
            ScriptStep::Event(InputEvent::Key(Key::Other))
        );
        assert_eq!("FRAME".parse::<ScriptStep>().unwrap(), ScriptStep::Frame);
        assert_eq!(
            "quit".parse::<ScriptStep>().unwrap(),
            ScriptStep::Event(InputEvent::Quit)
        );
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!("".parse::<ScriptStep>().is_err());
        assert!("click 1".parse::<ScriptStep>().is_err());
        assert!("click a b".parse::<ScriptStep>().is_err());
        assert!("space now".parse::<ScriptStep>().is_err());
        assert_eq!(
            "jump".parse::<ScriptStep>(),
            Err(LifeError::InvalidEvent("jump".to_string()))
        );
    }
}

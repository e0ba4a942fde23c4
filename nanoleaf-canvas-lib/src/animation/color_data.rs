use std::fmt;

use clap::ValueEnum;

/// A single animation frame for one panel.
///
/// Serializes as `"R G B W T"`. The white channel is ignored by the controller
/// and is always sent as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorData {
    red: u8,
    green: u8,
    blue: u8,
    white: u8,
    transition: i16,
}

impl ColorData {
    /// Creates a frame with the given color and transition time.
    ///
    /// # Arguments
    /// - `transition`: Fade time in units of 100ms. A negative value makes the
    ///                 frame start at the color instead of fading into it, which
    ///                 the device accepts but is not recommended.
    pub const fn new(red: u8, green: u8, blue: u8, transition: i16) -> Self {
        ColorData {
            red,
            green,
            blue,
            white: 0,
            transition,
        }
    }

    /// Creates a frame that switches to the color immediately.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Returns a copy with a different transition time.
    pub const fn with_transition(self, transition: i16) -> Self {
        Self::new(self.red, self.green, self.blue, transition)
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn white(&self) -> u8 {
        self.white
    }

    /// Transition time in units of 100ms.
    pub fn transition(&self) -> i16 {
        self.transition
    }
}

impl From<(u8, u8, u8)> for ColorData {
    fn from(tuple: (u8, u8, u8)) -> Self {
        ColorData::rgb(tuple.0, tuple.1, tuple.2)
    }
}

impl fmt::Display for ColorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.red, self.green, self.blue, self.white, self.transition
        )
    }
}

pub const RED: ColorData = ColorData::new(255, 0, 0, 10);
pub const YELLOW: ColorData = ColorData::new(255, 255, 0, 10);
pub const GREEN: ColorData = ColorData::new(0, 255, 0, 10);
pub const CYAN: ColorData = ColorData::new(0, 255, 255, 10);
pub const BLUE: ColorData = ColorData::new(0, 0, 255, 10);
pub const PURPLE: ColorData = ColorData::new(255, 0, 255, 10);
pub const WHITE: ColorData = ColorData::new(255, 255, 255, 10);

/// Named palette entries, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PaletteColor {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    White,
}

impl From<PaletteColor> for ColorData {
    fn from(color: PaletteColor) -> Self {
        match color {
            PaletteColor::Red => RED,
            PaletteColor::Yellow => YELLOW,
            PaletteColor::Green => GREEN,
            PaletteColor::Cyan => CYAN,
            PaletteColor::Blue => BLUE,
            PaletteColor::Purple => PURPLE,
            PaletteColor::White => WHITE,
        }
    }
}

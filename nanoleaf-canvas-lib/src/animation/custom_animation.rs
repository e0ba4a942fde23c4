use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::animation::anim_data::AnimData;

/// What the device should do with a written effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// Show the effect without storing it.
    #[default]
    Display,
    /// Store the effect on the device.
    Add,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    #[default]
    Static,
    Dynamic,
    Solid,
    Custom,
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command_str = match self {
            CommandType::Display => "display",
            CommandType::Add => "add",
        };
        write!(f, "{}", command_str)
    }
}

impl FromStr for CommandType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "display" => Ok(CommandType::Display),
            "add" => Ok(CommandType::Add),
            _ => Err(anyhow!("Invalid command type: {}", s)),
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let effect_str = match self {
            EffectType::Static => "static",
            EffectType::Dynamic => "dynamic",
            EffectType::Solid => "solid",
            EffectType::Custom => "custom",
        };
        write!(f, "{}", effect_str)
    }
}

impl FromStr for EffectType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(EffectType::Static),
            "dynamic" => Ok(EffectType::Dynamic),
            "solid" => Ok(EffectType::Solid),
            "custom" => Ok(EffectType::Custom),
            _ => Err(anyhow!("Invalid effect type: {}", s)),
        }
    }
}

/// The body of an effect write, as sent inside `{"write": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPayload {
    pub command: CommandType,
    pub anim_type: EffectType,
    pub anim_data: String,
    #[serde(rename = "loop")]
    pub looping: bool,
}

/// An [`AnimData`] blob together with the metadata the device needs to play it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAnimation {
    pub anim_data: AnimData,
    pub command: CommandType,
    pub anim_type: EffectType,
    pub looping: bool,
}

impl CustomAnimation {
    /// A non-looping static animation shown with the `display` command.
    pub fn new(anim_data: AnimData) -> Self {
        CustomAnimation {
            anim_data,
            command: CommandType::default(),
            anim_type: EffectType::default(),
            looping: false,
        }
    }

    pub fn with_command(mut self, command: CommandType) -> Self {
        self.command = command;
        self
    }

    pub fn with_anim_type(mut self, anim_type: EffectType) -> Self {
        self.anim_type = anim_type;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn payload(&self) -> AnimationPayload {
        AnimationPayload {
            command: self.command,
            anim_type: self.anim_type,
            anim_data: self.anim_data.to_string(),
            looping: self.looping,
        }
    }
}

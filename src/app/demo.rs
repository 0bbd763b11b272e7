//! The console demo: builds a plain pet, a dragon and a robot, runs a fixed
//! care routine and prints what happened.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use vivarium_core::{
    DragonPet, IdSource, PetBuilder, PetConfig, PetEntity, PetEvent, PetSnapshot, RobotPet,
};

/// How the demo renders its records.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per record
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record<'a> {
    Event {
        event: &'a PetEvent,
    },
    Pet {
        pet: PetSnapshot,
    },
    Dragon {
        dragon_type: &'a str,
        breath_weapon: &'a str,
        core: PetSnapshot,
    },
    Robot {
        battery_level: u8,
        needs_charging: bool,
        core: PetSnapshot,
    },
}

/// What a demo run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub evolutions: Vec<PetEvent>,
    pub pets: usize,
}

pub struct Demo {
    config: PetConfig,
    ids: Box<dyn IdSource>,
    format: OutputFormat,
}

impl Demo {
    pub fn new(config: PetConfig, ids: Box<dyn IdSource>, format: OutputFormat) -> Self {
        Self {
            config,
            ids,
            format,
        }
    }

    fn builder(&mut self, name: &str) -> Result<PetBuilder> {
        Ok(PetBuilder::from_config(&self.config)?
            .name(name)
            .id_from(&mut *self.ids))
    }

    /// Runs the scenario, writing evolution lines as they occur and then one
    /// summary per pet in construction order.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<DemoReport> {
        let mut report = DemoReport::default();

        let mut buddy = self.builder("Buddy")?.build();
        let routine: [(&str, fn(&mut PetEntity, &str), &str); 4] = [
            ("feed", PetEntity::feed, "Meat"),
            ("play", PetEntity::play, "Fetch"),
            ("feed", PetEntity::feed, "Meat"),
            ("play", PetEntity::play, "Fetch"),
        ];
        for (action, apply, item) in routine {
            apply(&mut buddy, item);
            tracing::debug!(action, item, state = %buddy.debug_state(), "Care step");
            for event in buddy.take_events() {
                tracing::debug!(pet_id = %event.pet_id(), "Evolution recorded");
                self.emit(out, &Record::Event { event: &event }, &event)?;
                report.evolutions.push(event);
            }
        }

        let smoky = DragonPet::from_builder(self.builder("Smoky")?, "Fire", "Flame Breath");
        let robo = RobotPet::from_builder(self.builder("RoboCat")?);

        self.emit(out, &Record::Pet { pet: buddy.snapshot() }, &buddy)?;
        self.emit(
            out,
            &Record::Dragon {
                dragon_type: smoky.dragon_type(),
                breath_weapon: smoky.breath_weapon(),
                core: smoky.core().snapshot(),
            },
            &smoky,
        )?;
        self.emit(
            out,
            &Record::Robot {
                battery_level: robo.battery_level(),
                needs_charging: robo.needs_charging(),
                core: robo.core().snapshot(),
            },
            &robo,
        )?;
        report.pets = 3;

        tracing::info!(
            pets = report.pets,
            evolutions = report.evolutions.len(),
            "Demo finished"
        );
        Ok(report)
    }

    fn emit<W: Write>(
        &self,
        out: &mut W,
        record: &Record<'_>,
        text: &dyn std::fmt::Display,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{text}")?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
        }
        Ok(())
    }
}

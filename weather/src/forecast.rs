// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Folding of 3-hourly forecast slots into one summary per calendar day.
//!
//! The day of a slot is the date part of the provider's `dt_txt`, taken as-is
//! with no timezone adjustment. Within a day the high and the precipitation
//! chance are maxima, the low is a minimum and the description is the one of
//! the latest slot.

use crate::{
  constants::DT_TXT_FORMAT,
  models::{api::ForecastEntry, weather::ForecastDay},
};
use chrono::{NaiveDate, NaiveDateTime};
use error::Error;
use std::collections::{btree_map::Entry, BTreeMap};

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSlot {
  pub timestamp: NaiveDateTime,
  pub high: f64,
  pub low: f64,
  pub description: String,
  pub precipitation_chance: f64,
}

impl TryFrom<ForecastEntry> for ForecastSlot {
  type Error = Error;

  fn try_from(entry: ForecastEntry) -> Result<Self, Self::Error> {
    let timestamp = NaiveDateTime::parse_from_str(&entry.dt_txt, DT_TXT_FORMAT)
      .map_err(|e| Error::parse(format!("Invalid forecast timestamp {:?}: {}", entry.dt_txt, e)))?;

    let description = entry
      .weather
      .into_iter()
      .next()
      .map(|w| w.description)
      .unwrap_or_default();

    Ok(Self {
      timestamp,
      high: entry.main.temp_max,
      low: entry.main.temp_min,
      description,
      precipitation_chance: entry.pop,
    })
  }
}

#[derive(Debug)]
struct DayAccumulator {
  high: f64,
  low: f64,
  precipitation_chance: f64,
  description: String,
}

impl DayAccumulator {
  fn new(slot: ForecastSlot) -> Self {
    Self {
      high: slot.high,
      low: slot.low,
      precipitation_chance: slot.precipitation_chance,
      description: slot.description,
    }
  }

  fn fold(&mut self, slot: ForecastSlot) {
    self.high = self.high.max(slot.high);
    self.low = self.low.min(slot.low);
    self.precipitation_chance = self.precipitation_chance.max(slot.precipitation_chance);
    self.description = slot.description;
  }

  fn finish(self, date: NaiveDate) -> ForecastDay {
    ForecastDay {
      date,
      temperature_high: self.high,
      temperature_low: self.low,
      description: self.description,
      precipitation_chance: self.precipitation_chance,
    }
  }
}

/// One `ForecastDay` per distinct date, ascending.
///
/// Slots are stably sorted by timestamp first, so the surviving description is
/// the chronologically last one even when the feed arrives out of order.
pub fn aggregate_daily(mut slots: Vec<ForecastSlot>) -> Vec<ForecastDay> {
  slots.sort_by_key(|slot| slot.timestamp);

  let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
  for slot in slots {
    match days.entry(slot.timestamp.date()) {
      Entry::Vacant(vacant) => {
        vacant.insert(DayAccumulator::new(slot));
      }
      Entry::Occupied(mut occupied) => occupied.get_mut().fold(slot),
    }
  }

  days
    .into_iter()
    .map(|(date, acc)| acc.finish(date))
    .collect()
}

/// Parses the raw forecast list and aggregates it.
pub fn daily_from_entries(entries: Vec<ForecastEntry>) -> Result<Vec<ForecastDay>, Error> {
  let slots = entries
    .into_iter()
    .map(ForecastSlot::try_from)
    .collect::<Result<Vec<_>, _>>()?;
  Ok(aggregate_daily(slots))
}

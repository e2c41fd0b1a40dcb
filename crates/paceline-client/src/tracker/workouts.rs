use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{ClientError, ClientResult};

/// Performed quantities keyed by date, then exercise.
///
/// A date never maps to an empty exercise set; removing the last entry of a
/// day removes the day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutLog {
    days: BTreeMap<NaiveDate, BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutEntry {
    pub date: NaiveDate,
    pub exercise: String,
    pub quantity: i64,
}

impl WorkoutLog {
    pub fn from_days(days: BTreeMap<NaiveDate, BTreeMap<String, i64>>) -> Self {
        let days = days
            .into_iter()
            .filter(|(_, exercises)| !exercises.is_empty())
            .collect();
        Self { days }
    }

    pub fn days(&self) -> &BTreeMap<NaiveDate, BTreeMap<String, i64>> {
        &self.days
    }

    pub fn day(&self, date: NaiveDate) -> Option<&BTreeMap<String, i64>> {
        self.days.get(&date)
    }

    pub fn quantity(&self, date: NaiveDate, exercise: &str) -> Option<i64> {
        self.days
            .get(&date)
            .and_then(|exercises| exercises.get(exercise))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn add(&mut self, date: NaiveDate, exercise: &str, quantity: i64) -> ClientResult<()> {
        ensure_non_negative(quantity)?;
        if let Some(existing) = self.quantity(date, exercise) {
            return Err(ClientError::entry_exists(exercise, date, existing));
        }
        self.days
            .entry(date)
            .or_default()
            .insert(exercise.to_string(), quantity);
        Ok(())
    }

    /// Replaces a logged quantity and returns the previous one.
    pub fn edit(&mut self, date: NaiveDate, exercise: &str, quantity: i64) -> ClientResult<i64> {
        ensure_non_negative(quantity)?;
        let slot = self
            .days
            .get_mut(&date)
            .and_then(|exercises| exercises.get_mut(exercise))
            .ok_or_else(|| ClientError::entry_not_found(exercise, date))?;
        Ok(std::mem::replace(slot, quantity))
    }

    /// Removes a logged quantity and returns it, pruning the day when empty.
    pub fn delete(&mut self, date: NaiveDate, exercise: &str) -> ClientResult<i64> {
        let Some(exercises) = self.days.get_mut(&date) else {
            return Err(ClientError::entry_not_found(exercise, date));
        };
        let Some(removed) = exercises.remove(exercise) else {
            return Err(ClientError::entry_not_found(exercise, date));
        };
        if exercises.is_empty() {
            self.days.remove(&date);
        }
        Ok(removed)
    }

    /// All entries in ascending date order, exercises alphabetical within a day.
    pub fn entries(&self) -> impl Iterator<Item = WorkoutEntry> + '_ {
        self.days.iter().flat_map(|(date, exercises)| {
            exercises.iter().map(|(exercise, quantity)| WorkoutEntry {
                date: *date,
                exercise: exercise.clone(),
                quantity: *quantity,
            })
        })
    }

    pub fn entries_in_year(&self, year: i32) -> impl Iterator<Item = WorkoutEntry> + '_ {
        self.entries().filter(move |entry| entry.date.year() == year)
    }

    /// `None` when the total does not fit in an `i64`.
    pub fn performed_in_year(&self, exercise: &str, year: i32) -> Option<i64> {
        self.days
            .iter()
            .filter(|(date, _)| date.year() == year)
            .filter_map(|(_, exercises)| exercises.get(exercise))
            .try_fold(0i64, |total, quantity| total.checked_add(*quantity))
    }

    pub fn entry_count_for(&self, exercise: &str) -> usize {
        self.days
            .values()
            .filter(|exercises| exercises.contains_key(exercise))
            .count()
    }
}

fn ensure_non_negative(quantity: i64) -> ClientResult<()> {
    if quantity < 0 {
        return Err(ClientError::invalid_argument(&format!(
            "Quantity must be zero or greater (received {quantity})."
        )));
    }
    Ok(())
}

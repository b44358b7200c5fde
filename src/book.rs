//! In-memory contact store keyed by name.

use crate::record::Record;
use chrono::{Days, Local, NaiveDate};
use log::debug;

pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Contacts in insertion order, unique by name
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name.as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|index| self.records.remove(index))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose birthday comes up within `days` days of today.
    pub fn get_upcoming_birthdays(&self, days: u32) -> Vec<&Record> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Records whose next birthday lies in `[today, today + days]`.
    ///
    /// Birthdays that already passed this year count from next year's date.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> Vec<&Record> {
        let end = today.checked_add_days(Days::new(u64::from(days))).unwrap_or(NaiveDate::MAX);
        debug!("Looking for birthdays between {} and {}", today, end);
        self.records
            .iter()
            .filter(|record| {
                record.birthday.is_some_and(|birthday| birthday.next_occurrence(today) <= end)
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name.as_str() == name)
    }
}

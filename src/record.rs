//! A single contact and the edits that can be applied to it.

use crate::error::ValidationError;
use crate::fields::{Birthday, Email, Name, Phone};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub emails: Vec<Email>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Name::new(name), phones: Vec::new(), emails: Vec::new(), birthday: None }
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Removes the first matching phone. Returns `false` when nothing matched.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        remove_first(&mut self.phones, |p| p.as_str() == phone)
    }

    /// Replaces `old` with `new`.
    ///
    /// `new` is validated before anything is removed, so a rejected value
    /// leaves the record untouched. Returns `Ok(false)` when `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = Phone::new(new)?;
        if !self.remove_phone(old) {
            return Ok(false);
        }
        self.phones.push(replacement);
        Ok(true)
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn add_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.emails.push(Email::new(email)?);
        Ok(())
    }

    pub fn remove_email(&mut self, email: &str) -> bool {
        remove_first(&mut self.emails, |e| e.as_str() == email)
    }

    /// Same contract as [`Record::edit_phone`].
    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = Email::new(new)?;
        if !self.remove_email(old) {
            return Ok(false);
        }
        self.emails.push(replacement);
        Ok(true)
    }

    pub fn find_email(&self, email: &str) -> Option<&Email> {
        self.emails.iter().find(|e| e.as_str() == email)
    }

    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

fn remove_first<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    match items.iter().position(matches) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

fn join<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(separator)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self.birthday.map_or_else(|| "N/A".to_string(), |b| b.to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, emails: {}, birthday: {}",
            self.name,
            join(&self.phones, "; "),
            join(&self.emails, "; "),
            birthday
        )
    }
}

use addressbook::command_processor::birthday_handler::BirthdayHandler;
use addressbook::command_processor::{CommandArgs, CommandHandler, CommandProcessor, Response};
use addressbook::{AddressBook, Session};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn reply(session: &mut Session, line: &str) -> String {
    session.handle_line(line).text().to_string()
}

#[test]
fn test_add_then_update_contact() {
    let mut session = Session::default();
    assert_eq!(reply(&mut session, "add John 1234567890"), "Contact added.");
    assert_eq!(reply(&mut session, "add John 0987654321"), "Contact updated.");
    assert_eq!(reply(&mut session, "phone John"), "John's phones: 1234567890, 0987654321");
}

#[test]
fn test_birthday_round_trip() {
    let mut session = Session::default();
    reply(&mut session, "add John 1234567890");
    assert_eq!(
        reply(&mut session, "add-birthday John 15.06.1990"),
        "Birthday added for contact John."
    );
    assert_eq!(reply(&mut session, "show-birthday John"), "John's birthday is on 15.06.1990.");
}

#[test]
fn test_no_birthdays_set() {
    let mut session = Session::default();
    reply(&mut session, "add John 1234567890");
    assert_eq!(reply(&mut session, "birthdays 7"), "No upcoming birthdays within the next week.");
}

#[test]
fn test_unknown_contact() {
    let mut session = Session::default();
    assert_eq!(reply(&mut session, "phone Ghost"), "Contact Ghost not found.");
}

#[test]
fn test_all_lists_each_contact_once() {
    let mut session = Session::default();
    reply(&mut session, "add John 1234567890");
    reply(&mut session, "add-email John john@example.com");
    reply(&mut session, "add-birthday John 15.06.1990");
    reply(&mut session, "add Jane 0987654321");

    let listing = reply(&mut session, "all");
    let john_lines: Vec<&str> = listing.lines().filter(|l| l.contains("John")).collect();
    assert_eq!(
        john_lines,
        vec![
            "Contact name: John, phones: 1234567890, emails: john@example.com, birthday: 15.06.1990"
        ]
    );
    assert_eq!(listing.lines().next(), Some("Contacts in address book:"));
    assert_eq!(listing.lines().count(), 3);
}

#[test]
fn test_failed_edit_keeps_old_phone() {
    let mut session = Session::default();
    reply(&mut session, "add John 1234567890");
    assert_eq!(
        reply(&mut session, "change John 1234567890 12345"),
        "Invalid phone number format. It should be 10 digits."
    );
    assert_eq!(reply(&mut session, "phone John"), "John's phones: 1234567890");
}

#[test_case("add John", "Insufficient arguments. Usage: add <name> <phone>" ; "add")]
#[test_case("change John 1234567890", "Insufficient arguments. Usage: change <name> <old_phone> <new_phone>" ; "change")]
#[test_case("phone", "Insufficient arguments. Usage: phone <name>" ; "phone")]
#[test_case("email John", "Insufficient arguments. Usage: add-email <name> <email>" ; "email")]
#[test_case("show-email", "Insufficient arguments. Usage: show-email <name>" ; "show email")]
#[test_case("add-birthday John", "Insufficient arguments. Usage: add-birthday <name> <DD.MM.YYYY>" ; "add birthday")]
#[test_case("show-birthday", "Insufficient arguments. Usage: show-birthday <name>" ; "show birthday")]
fn test_missing_arguments_are_reported(line: &str, expected: &str) {
    let mut session = Session::default();
    assert_eq!(reply(&mut session, line), expected);
}

#[test]
fn test_loop_continues_after_errors() {
    let mut session = Session::default();
    assert_eq!(reply(&mut session, "bogus"), "Invalid command.");
    assert_eq!(reply(&mut session, ""), "No command entered. Please enter a command.");
    assert_eq!(reply(&mut session, "add-birthday Ghost 01.01.2000"), "Contact Ghost not found.");
    assert_eq!(reply(&mut session, "hello"), "How can I help you?");
    assert_eq!(session.handle_line("close"), Response::Exit("Good bye!".to_string()));
}

#[test]
fn test_upcoming_birthdays_roll_over_year_end() {
    fn december_thirtieth() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 30).unwrap()
    }

    let mut book = AddressBook::new();
    let handler = BirthdayHandler::with_clock(7, december_thirtieth);
    let processor = CommandProcessor::default();
    let run = |book: &mut AddressBook, line: &str| {
        processor.execute(&CommandArgs::parse(line).unwrap(), book)
    };

    run(&mut book, "add Ann 1234567890");
    run(&mut book, "add-birthday Ann 02.01.1990");
    run(&mut book, "add Bob 1234567890");
    run(&mut book, "add-birthday Bob 29.12.1990");

    let response = handler.execute(&CommandArgs::parse("birthdays").unwrap(), &mut book);
    assert_eq!(response.unwrap().text(), "Upcoming birthdays:\nAnn on 02.01.1990");
}

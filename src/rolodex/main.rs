use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolodex::api::RolodexApi;
use rolodex::commands::{CmdMessage, CmdResult, Congratulation, MessageLevel};
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::model::Record;
use rolodex::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a command: ");
        io::stdout().flush().map_err(RolodexError::Io)?;

        // EOF behaves like `exit`, so piped input can't skip the save.
        let line = match lines.next() {
            Some(line) => line.map_err(RolodexError::Io)?,
            None => break,
        };

        let Some((verb, args)) = parse_input(&line) else {
            continue;
        };

        if matches!(verb.as_str(), "close" | "exit") {
            break;
        }

        match dispatch(&mut api, &verb, &args) {
            Ok(result) => print_result(&verb, &result),
            Err(e) => print_command_error(&e),
        }
    }

    api.persist()?;
    println!("Good bye!");
    Ok(())
}

fn init_api(cli: &Cli) -> Result<RolodexApi<FileStore>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "rolodex", "rolodex")
            .ok_or_else(|| RolodexError::Store("Could not determine a data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = RolodexConfig::load_or_init(&data_dir)?;
    let store = FileStore::new(data_dir).with_book_filename(config.book_filename());
    RolodexApi::new(store)
}

/// Split a line into a lowercased verb and its raw arguments.
/// Blank lines yield `None`.
fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((verb, args))
}

// The single error boundary for command dispatch: every arity failure below
// becomes RolodexError::Usage; validation errors pass through untouched.
fn dispatch(api: &mut RolodexApi<FileStore>, verb: &str, args: &[String]) -> Result<CmdResult> {
    match verb {
        "hello" => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("How can I help you?"));
            Ok(result)
        }
        "add" => {
            let (name, phone) = two_args(args)?;
            api.add_contact(name, phone)
        }
        "del" => {
            let name = one_arg(args)?;
            api.delete_contact(name)
        }
        "remove" => {
            let (name, phone) = two_args(args)?;
            api.remove_phone(name, phone)
        }
        "change" => {
            let (name, old, new) = three_args(args)?;
            api.change_phone(name, old, new)
        }
        "phone" => {
            let name = one_arg(args)?;
            api.contact_phones(name)
        }
        "all" => api.list_contacts(),
        "add-birthday" => {
            let (name, date) = two_args(args)?;
            api.set_birthday(name, date)
        }
        "show-birthday" => {
            let name = one_arg(args)?;
            api.show_birthday(name)
        }
        "birthdays" => api.upcoming_birthdays(Local::now().date_naive()),
        _ => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning("Invalid command."));
            Ok(result)
        }
    }
}

fn one_arg(args: &[String]) -> Result<&str> {
    match args {
        [a] => Ok(a.as_str()),
        _ => Err(RolodexError::Usage),
    }
}

fn two_args(args: &[String]) -> Result<(&str, &str)> {
    match args {
        [a, b] => Ok((a.as_str(), b.as_str())),
        _ => Err(RolodexError::Usage),
    }
}

fn three_args(args: &[String]) -> Result<(&str, &str, &str)> {
    match args {
        [a, b, c] => Ok((a.as_str(), b.as_str(), c.as_str())),
        _ => Err(RolodexError::Usage),
    }
}

fn print_result(verb: &str, result: &CmdResult) {
    match verb {
        "all" => {
            if result.contacts.is_empty() {
                println!("No contacts found.");
            } else {
                print_contact_rows(&result.contacts);
            }
        }
        "phone" => print_contact_rows(&result.contacts),
        "birthdays" => print_congratulations(&result.congratulations),
        _ => {}
    }
    print_messages(&result.messages);
}

fn print_command_error(e: &RolodexError) {
    match e {
        RolodexError::Usage => println!("{}", e.to_string().yellow()),
        _ => println!("{}", e.to_string().red()),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_contact_rows(contacts: &[Record]) {
    for record in contacts {
        println!("{}", record);
    }
}

const NAME_COLUMN_WIDTH: usize = 10;

fn print_congratulations(rows: &[Congratulation]) {
    for row in rows {
        let padding = NAME_COLUMN_WIDTH.saturating_sub(row.name.width());
        println!(
            "{}{}{}",
            row.name,
            " ".repeat(padding),
            row.date.format("%d.%m.%Y")
        );
    }
}

use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use objfilters::api::FiltersApi;
use objfilters::commands::{CmdMessage, MessageLevel};
use objfilters::error::Result;
use objfilters::form::prompt::PromptHost;
use objfilters::model::FilterRecord;
use objfilters::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = FiltersApi::new(FileStore::new(resolve_config_dir(&cli)));

    match cli.command {
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::New) => handle_edit(&mut api, None, false),
        Some(Commands::Edit { name }) => handle_edit(&mut api, Some(&name), false),
        Some(Commands::Copy { name }) => handle_edit(&mut api, Some(&name), true),
        Some(Commands::Delete { name, yes }) => handle_delete(&mut api, &name, yes),
    }
}

fn resolve_config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config_dir {
        return dir.clone();
    }

    let proj_dirs = ProjectDirs::from("com", "objfilters", "objfilters")
        .expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

fn handle_list(api: &FiltersApi<FileStore>) -> Result<()> {
    let result = api.list_filters()?;
    print_filters(&result.listed_filters);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut FiltersApi<FileStore>, name: Option<&str>, copy: bool) -> Result<()> {
    let mut host = PromptHost::new();
    let result = api.edit_filter(&mut host, name, copy)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut FiltersApi<FileStore>, name: &str, yes: bool) -> Result<()> {
    if !yes && !confirm_delete(name)? {
        println!("{}", "Operation cancelled.".dimmed());
        return Ok(());
    }

    let result = api.delete_filter(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm_delete(name: &str) -> Result<bool> {
    let answer = cliclack::confirm(format!("Delete filter {}?", name))
        .initial_value(false)
        .interact();

    match answer {
        Ok(confirmed) => Ok(confirmed),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(false),
        Err(e) => Err(e.into()),
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

const NAME_WIDTH: usize = 24;
const PATTERN_WIDTH: usize = 20;
const PROTECTED_MARKER: &str = "⚿";

fn print_filters(filters: &[FilterRecord]) {
    if filters.is_empty() {
        println!("No filters defined.");
        return;
    }

    for filter in filters {
        let marker = if filter.protected {
            PROTECTED_MARKER
        } else {
            " "
        };
        let name = pad_to_width(&truncate_to_width(&filter.name, NAME_WIDTH), NAME_WIDTH);
        let pattern = pad_to_width(
            &format!("{}/{}", filter.library, filter.object),
            PATTERN_WIDTH,
        );
        let members = format!("{} {}", filter.member, filter.member_type);

        println!(
            "{} {} {} {}  {}",
            marker.yellow(),
            name.bold(),
            pattern,
            filter.types.join(", ").cyan(),
            members.dimmed()
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
